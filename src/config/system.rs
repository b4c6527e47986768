/// System-related configuration
#[derive(Debug, Clone)]
pub struct SystemConfig {
    pub log_level: LogLevel,
    pub target_fps: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        SystemConfig {
            log_level: LogLevel::Info,
            target_fps: 60,
        }
    }
}
