use std::{
  ffi::OsString,
  path::Path,
  process::{Command, Stdio},
};

use anyhow::Context;

use crate::config::LauncherConfig;
use crate::outcome::LaunchOutcome;

#[derive(Default)]
pub struct SpawnPhase;

impl SpawnPhase {
  pub fn new() -> Self {
    Self
  }

  /// `[companion, forwarded...]`, with the forwarded arguments untouched.
  pub fn child_args(&self, companion: &Path, forwarded: Vec<OsString>) -> Vec<OsString> {
    let mut args = Vec::with_capacity(forwarded.len() + 1);
    args.push(companion.as_os_str().to_os_string());
    args.extend(forwarded);
    args
  }

  /// Runs the companion once and blocks until it terminates.
  pub fn spawn(&self, config: &LauncherConfig, forwarded: Vec<OsString>) -> LaunchOutcome {
    let args = self.child_args(&config.companion, forwarded);
    log::debug!(
      "spawning {} {} with {} forwarded argument(s)",
      config.interpreter.to_string_lossy(),
      config.companion.display(),
      args.len() - 1
    );

    let mut cmd = Command::new(&config.interpreter);
    cmd
      .args(&args)
      .stdin(Stdio::inherit())
      .stdout(Stdio::inherit())
      .stderr(Stdio::inherit());

    let mut child = match cmd.spawn() {
      Ok(child) => child,
      Err(err) => {
        let error = anyhow::Error::new(err).context(format!(
          "Failed to start {} process",
          config.interpreter.to_string_lossy()
        ));
        return LaunchOutcome::StartupFailed { error };
      }
    };
    log::debug!("child started with pid {}", child.id());

    match child.wait().context("Failed to wait for child process") {
      Ok(status) => LaunchOutcome::from_status(status),
      Err(error) => {
        // Never leave the child running unobserved
        let _ = child.kill();
        let _ = child.wait();
        LaunchOutcome::WaitFailed { error }
      }
    }
  }
}
