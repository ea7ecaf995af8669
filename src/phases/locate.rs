use anyhow::{Context, Result, anyhow};
use std::path::{Path, PathBuf};

use crate::config::COMPANION_SCRIPT;

#[derive(Default)]
pub struct LocatePhase;

impl LocatePhase {
  pub fn new() -> Self {
    Self
  }

  /// Directory holding the running executable, never the working directory.
  pub fn install_dir(&self) -> Result<PathBuf> {
    let exe = std::env::current_exe().context("Could not determine the launcher's own location")?;
    self.install_dir_of(&exe)
  }

  pub fn install_dir_of(&self, exe: &Path) -> Result<PathBuf> {
    // Follows bin/ symlinks into the real package directory
    let exe = exe
      .canonicalize()
      .map(strip_verbatim)
      .with_context(|| format!("Could not resolve launcher path {}", exe.display()))?;

    exe
      .parent()
      .map(Path::to_path_buf)
      .ok_or_else(|| anyhow!("Launcher path {} has no parent directory", exe.display()))
  }

  pub fn companion_path(&self, install_dir: &Path) -> PathBuf {
    install_dir.join(COMPANION_SCRIPT)
  }
}

/// `canonicalize` yields `\\?\C:\...` on Windows, which the interpreter may not accept.
/// Rewrites plain drive paths back to `C:\...`; anything else is returned unchanged.
#[cfg(windows)]
fn strip_verbatim(path: PathBuf) -> PathBuf {
  use std::path::{Component, Prefix};

  // Longer paths need the verbatim form
  const MAX_PATH: usize = 260;

  let simplified = match path.components().next() {
    Some(Component::Prefix(prefix)) => match prefix.kind() {
      Prefix::VerbatimDisk(drive) => {
        let mut simple = PathBuf::from(format!("{}:\\", drive as char));
        simple.extend(
          path
            .components()
            .skip(1)
            .filter(|c| !matches!(c, Component::RootDir)),
        );
        Some(simple)
      }
      _ => None,
    },
    _ => None,
  };

  match simplified {
    Some(simple) if simple.as_os_str().len() < MAX_PATH => simple,
    _ => path,
  }
}

#[cfg(not(windows))]
fn strip_verbatim(path: PathBuf) -> PathBuf {
  path
}
