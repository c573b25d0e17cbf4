mod log;

pub use log::{LogLevel, log_level, set_log_level};
