pub mod clock;
pub mod root_bootstrap;

pub use clock::SystemClock;
pub use root_bootstrap::SystemRootBootstrap;
