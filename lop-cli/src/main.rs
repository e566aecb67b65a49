use clap::Parser;
use lop::prelude::*;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use std::process::ExitCode;

/// Solve the Longest One-Way Ticket Problem for a railway edge list.
#[derive(Parser)]
#[command(
    name = "lop",
    about = "Find the maximum-weight simple trail in a railway graph",
    version,
    after_help = "\
Input is a tab-separated edge list, one record per line:
  company<TAB>line<TAB>station1<TAB>station2<TAB>kmA<TAB>kmB<TAB>kmC[<TAB>groups]

Read from a file or pipe with `-` for stdin:
  lop network.tsv
  cat network.tsv | lop -"
)]
struct Args {
    /// Input file, or `-` for stdin.
    input: PathBuf,

    /// Which kilometrage column to optimize: a=operational, b=fare,
    /// c=effective.
    #[arg(short = 'w', long, default_value = "a")]
    weight: WeightArg,

    /// Path the underlying MIP solver logs to.
    #[arg(short = 'l', long, default_value = "pulp.log")]
    log_path: PathBuf,

    /// Upper bound on MIP solver threads, in [1, 99].
    #[arg(short = 't', long, default_value_t = lop::config::DEFAULT_THREAD_CAP)]
    thread_cap: u32,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum WeightArg {
    A,
    B,
    C,
}

impl From<WeightArg> for WeightKind {
    fn from(value: WeightArg) -> Self {
        match value {
            WeightArg::A => WeightKind::Operational,
            WeightArg::B => WeightKind::Fare,
            WeightArg::C => WeightKind::Effective,
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let config = SolverConfig {
        weight: args.weight.into(),
        log_path: args.log_path,
        thread_cap: args.thread_cap,
    };

    match run(&args.input, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("lop: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(input: &PathBuf, config: &SolverConfig) -> anyhow::Result<()> {
    let reader: Box<dyn BufRead> = if input.as_os_str() == "-" {
        Box::new(BufReader::new(io::stdin()))
    } else {
        Box::new(BufReader::new(File::open(input)?))
    };

    match lop::solve(reader, config)? {
        SolveOutcome::Empty => {
            eprintln!("no edges in input; nothing to solve");
        }
        SolveOutcome::Trail(records) => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            for record in &records {
                writeln!(out, "{record}")?;
            }
        }
    }
    Ok(())
}
