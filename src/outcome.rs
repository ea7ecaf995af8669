use std::io;
use std::process::ExitStatus;

/// Launcher status when the interpreter could not be found.
pub const EXIT_NOT_FOUND: i32 = 127;

/// Launcher status for any other startup failure.
pub const EXIT_CANNOT_EXECUTE: i32 = 126;

/// Result of a single launch attempt.
#[derive(Debug)]
pub enum LaunchOutcome {
  /// The child ran and exited normally.
  Exited { code: i32 },
  /// The child was terminated by a signal (Unix only).
  Signaled { signal: i32 },
  /// The child never started.
  StartupFailed { error: anyhow::Error },
  /// The child started but its termination could not be observed.
  WaitFailed { error: anyhow::Error },
}

impl LaunchOutcome {
  pub fn from_status(status: ExitStatus) -> Self {
    if let Some(code) = status.code() {
      return LaunchOutcome::Exited { code };
    }

    #[cfg(unix)]
    {
      use std::os::unix::process::ExitStatusExt;
      if let Some(signal) = status.signal() {
        return LaunchOutcome::Signaled { signal };
      }
    }

    // No code and no signal; treat as a generic failure
    LaunchOutcome::Exited { code: 1 }
  }

  pub fn started(&self) -> bool {
    !matches!(self, LaunchOutcome::StartupFailed { .. })
  }

  /// The child's own exit code, when it ran to a normal exit.
  pub fn exit_code(&self) -> Option<i32> {
    match self {
      LaunchOutcome::Exited { code } => Some(*code),
      _ => None,
    }
  }

  pub fn wait_error(&self) -> Option<&anyhow::Error> {
    match self {
      LaunchOutcome::WaitFailed { error } => Some(error),
      _ => None,
    }
  }

  pub fn startup_error(&self) -> Option<&anyhow::Error> {
    match self {
      LaunchOutcome::StartupFailed { error } => Some(error),
      _ => None,
    }
  }

  /// Exit status the launcher itself should terminate with.
  pub fn status(&self) -> i32 {
    match self {
      LaunchOutcome::Exited { code } => *code,
      LaunchOutcome::Signaled { signal } => 128 + signal,
      LaunchOutcome::StartupFailed { error } => startup_status(error),
      LaunchOutcome::WaitFailed { .. } => 1,
    }
  }
}

fn startup_status(error: &anyhow::Error) -> i32 {
  let not_found = error
    .chain()
    .filter_map(|cause| cause.downcast_ref::<io::Error>())
    .any(|err| err.kind() == io::ErrorKind::NotFound);

  if not_found { EXIT_NOT_FOUND } else { EXIT_CANNOT_EXECUTE }
}
