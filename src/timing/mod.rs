// src/timing/mod.rs

pub mod clock;
pub mod watchdog;

pub use clock::format_elapsed;
pub use watchdog::IdleWatchdog;
