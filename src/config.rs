//! Run configuration: weight selection and MIP solver interface surface.
//!
//! These fields are the "external collaborator" surface described by the
//! specification: a CLI (see the `lop-cli` crate) is expected to populate a
//! [`SolverConfig`] from command-line flags and hand it to [`crate::solve`].

use crate::error::{LopError, Result};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

/// Which of the three per-edge weights acts as "the weight" for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WeightKind {
    /// Operational kilometrage (営業キロ). Default.
    #[default]
    Operational,
    /// Fare-calculation kilometrage (運賃計算キロ).
    Fare,
    /// Effective-ridable kilometrage (実乗可能粁程).
    Effective,
}

/// Default solver log path, matching the reference implementation.
pub const DEFAULT_LOG_PATH: &str = "pulp.log";

/// Default thread cap.
pub const DEFAULT_THREAD_CAP: u32 = 1;

/// Configuration accepted by the solver driver.
///
/// `log_path` and `thread_cap` are validated at startup (the log path must
/// be creatable; the thread cap must be in `[1, 99]`) but are otherwise a
/// pass-through interface: forwarding them into a specific MIP backend's own
/// thread pool or log sink is backend-specific and out of scope here, the
/// same way the reference implementation leaves the `solver = ...` line to
/// be rewritten for whichever solver is actually installed.
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Which edge weight to optimize.
    pub weight: WeightKind,
    /// Filesystem path the underlying MIP solver is told to log to.
    pub log_path: PathBuf,
    /// Upper bound on MIP solver threads, in `[1, 99]`.
    pub thread_cap: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            weight: WeightKind::default(),
            log_path: PathBuf::from(DEFAULT_LOG_PATH),
            thread_cap: DEFAULT_THREAD_CAP,
        }
    }
}

impl SolverConfig {
    /// Validate the thread cap and confirm the log path is writable.
    ///
    /// Called once at startup; truncates and recreates the log file the way
    /// the reference solver's `logPath` option does.
    pub fn validate(&self) -> Result<()> {
        if self.thread_cap == 0 || self.thread_cap > 99 {
            return Err(LopError::ThreadCapOutOfRange {
                value: self.thread_cap as i64,
            });
        }
        touch_log_path(&self.log_path)
    }
}

fn touch_log_path(path: &Path) -> Result<()> {
    OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
        .map(|_| ())
        .map_err(|e| LopError::LogPathUnwritable {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_operational_weight_one_thread() {
        let cfg = SolverConfig::default();
        assert_eq!(cfg.weight, WeightKind::Operational);
        assert_eq!(cfg.thread_cap, 1);
        assert_eq!(cfg.log_path, PathBuf::from("pulp.log"));
    }

    #[test]
    fn thread_cap_out_of_range_is_rejected() {
        let cfg = SolverConfig {
            thread_cap: 0,
            ..SolverConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(LopError::ThreadCapOutOfRange { value: 0 })
        ));

        let cfg = SolverConfig {
            thread_cap: 100,
            ..SolverConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(LopError::ThreadCapOutOfRange { value: 100 })
        ));
    }

    #[test]
    fn log_path_is_created_on_validate() {
        let path =
            std::env::temp_dir().join(format!("lop-test-{}.log", std::process::id()));
        let cfg = SolverConfig {
            log_path: path.clone(),
            ..SolverConfig::default()
        };
        cfg.validate().unwrap();
        assert!(path.exists());
        let _ = std::fs::remove_file(path);
    }
}
