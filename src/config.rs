use anyhow::Result;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::phases::{LocatePhase, Platform};

/// Companion program, expected next to the launcher executable.
pub const COMPANION_SCRIPT: &str = "main.py";

/// Environment variable read for the launcher's own log level.
pub const LOG_ENV_VAR: &str = "DEVOPS_CLI_LOG";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LauncherConfig {
  pub interpreter: OsString,
  pub companion: PathBuf,
}

impl LauncherConfig {
  pub fn new(interpreter: impl Into<OsString>, companion: impl Into<PathBuf>) -> Self {
    Self {
      interpreter: interpreter.into(),
      companion: companion.into(),
    }
  }

  pub fn for_platform(platform: Platform, install_dir: &Path) -> Self {
    let locate = LocatePhase::new();
    Self::new(platform.interpreter(), locate.companion_path(install_dir))
  }

  pub fn detect() -> Result<Self> {
    let install_dir = LocatePhase::new().install_dir()?;
    Ok(Self::for_platform(Platform::current(), &install_dir))
  }
}
