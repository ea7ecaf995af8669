/// Host classification used to pick the interpreter binary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Platform {
  Posix,
  Windows,
}

impl Platform {
  pub fn current() -> Self {
    if cfg!(windows) {
      Platform::Windows
    } else {
      Platform::Posix
    }
  }

  /// Interpreter name, looked up on the search path at spawn time.
  pub fn interpreter(self) -> &'static str {
    match self {
      Platform::Windows => "python",
      Platform::Posix => "python3",
    }
  }
}
