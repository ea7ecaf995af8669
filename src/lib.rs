pub mod config;
pub mod launcher;
pub mod logger;
pub mod outcome;
pub mod phases;

use std::ffi::OsString;

pub use crate::config::LauncherConfig;
pub use crate::launcher::Launcher;
pub use crate::outcome::LaunchOutcome;

/// Run the companion program next to this executable with `args`,
/// returning the status the launcher should exit with.
pub fn run(args: Vec<OsString>) -> i32 {
  match Launcher::detect() {
    Ok(launcher) => launcher.run(args),
    Err(error) => {
      log::error!("Failed to start process: {:#}", error);
      LaunchOutcome::StartupFailed { error }.status()
    }
  }
}
