pub mod locate;
pub mod platform;
pub mod spawn;

pub use locate::LocatePhase;
pub use platform::Platform;
pub use spawn::SpawnPhase;
