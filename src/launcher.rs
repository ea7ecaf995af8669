use anyhow::Result;
use std::ffi::OsString;

use crate::config::LauncherConfig;
use crate::outcome::LaunchOutcome;
use crate::phases::SpawnPhase;

pub struct Launcher {
  pub config: LauncherConfig,
  pub spawn: SpawnPhase,
}

impl Launcher {
  pub fn new(config: LauncherConfig) -> Self {
    Self {
      config,
      spawn: SpawnPhase::new(),
    }
  }

  pub fn detect() -> Result<Self> {
    Ok(Self::new(LauncherConfig::detect()?))
  }

  pub fn launch(&self, args: Vec<OsString>) -> LaunchOutcome {
    self.spawn.spawn(&self.config, args)
  }

  /// Launches the companion, reports how it ended and returns the status to exit with.
  pub fn run(&self, args: Vec<OsString>) -> i32 {
    let outcome = self.launch(args);
    self.report(&outcome);
    outcome.status()
  }

  pub fn report(&self, outcome: &LaunchOutcome) {
    let interpreter = self.config.interpreter.to_string_lossy();
    match outcome {
      LaunchOutcome::Exited { code: 0 } => {}
      LaunchOutcome::Exited { code } => {
        log::error!("{} process exited with code {}", interpreter, code);
      }
      LaunchOutcome::Signaled { signal } => {
        log::error!("{} process terminated by signal {}", interpreter, signal);
      }
      LaunchOutcome::StartupFailed { error } => {
        log::error!("{:#}", error);
      }
      LaunchOutcome::WaitFailed { error } => {
        log::error!("{} process was killed: {:#}", interpreter, error);
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::path::PathBuf;

  #[test]
  fn test_run_missing_interpreter_is_nonzero() {
    let launcher = Launcher::new(LauncherConfig::new(
      "devops-cli-no-such-interpreter",
      PathBuf::from("main.py"),
    ));

    let status = launcher.run(vec![OsString::from("--help")]);
    assert_eq!(status, crate::outcome::EXIT_NOT_FOUND);
  }

  #[test]
  fn test_detect_uses_platform_interpreter() {
    let launcher = Launcher::detect().unwrap();
    assert_eq!(
      launcher.config.interpreter,
      OsString::from(crate::phases::Platform::current().interpreter())
    );
  }

  #[cfg(unix)]
  #[test]
  fn test_run_returns_child_status() {
    let dir = tempfile::TempDir::new().unwrap();
    let companion = dir.path().join("main.sh");
    std::fs::write(&companion, "[ \"$1\" = \"bad-command\" ] && exit 2\nexit 0\n").unwrap();
    let launcher = Launcher::new(LauncherConfig::new("sh", companion));

    assert_eq!(launcher.run(vec![OsString::from("bad-command")]), 2);
    assert_eq!(launcher.run(vec![OsString::from("--help")]), 0);
  }
}
