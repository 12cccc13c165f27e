// Web frontend tuning constants

// Console log level installed at startup
pub const LOG_LEVEL: log::Level = log::Level::Info;
