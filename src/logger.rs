use ansi_term::Colour;
use anyhow::Result;
use log::{Level, LevelFilter};
use std::io::IsTerminal;

use crate::config::LOG_ENV_VAR;

const DEFAULT_LEVEL: LevelFilter = LevelFilter::Warn;

/// Level from `DEVOPS_CLI_LOG`. `off` and unknown values keep the default,
/// so startup and exit diagnostics always reach stderr.
pub fn level_from(value: Option<&str>) -> LevelFilter {
  value
    .and_then(|v| v.trim().parse::<LevelFilter>().ok())
    .filter(|level| *level != LevelFilter::Off)
    .unwrap_or(DEFAULT_LEVEL)
}

fn prefix(level: Level, colors: bool) -> String {
  let text = match level {
    Level::Error => "devops-cli".to_string(),
    other => format!("devops-cli [{}]", other.as_str().to_lowercase()),
  };

  if !colors {
    return text;
  }

  let colour = match level {
    Level::Error => Colour::Red,
    Level::Warn => Colour::Yellow,
    Level::Info => Colour::Blue,
    Level::Debug | Level::Trace => Colour::Fixed(8),
  };
  colour.bold().paint(text).to_string()
}

pub fn init() -> Result<()> {
  let level = level_from(std::env::var(LOG_ENV_VAR).ok().as_deref());
  let colors = std::io::stderr().is_terminal();

  fern::Dispatch::new()
    .format(move |out, message, record| {
      out.finish(format_args!("{}: {}", prefix(record.level(), colors), message))
    })
    .level(level)
    .chain(std::io::stderr())
    .apply()?;

  Ok(())
}
