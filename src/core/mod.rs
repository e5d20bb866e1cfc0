pub mod calculator;
pub mod display;
pub mod log;
pub mod notifier;
pub mod scheduler;
pub mod session;
