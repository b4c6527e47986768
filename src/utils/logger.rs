use crate::config::LogLevel;
use chrono::Local;
use lazy_static::lazy_static;
use std::io::{self, Write};
use std::sync::Mutex;

lazy_static! {
    pub static ref LOGGER: Mutex<Logger> = Mutex::new(Logger::new());
}

#[macro_export]
macro_rules! log_error {
    ($module:expr, $($arg:tt)*) => ({
        if let Ok(mut logger) = $crate::utils::logger::LOGGER.lock() {
            logger.log($crate::config::LogLevel::Error, $module, format_args!($($arg)*));
        }
    })
}

#[macro_export]
macro_rules! log_warn {
    ($module:expr, $($arg:tt)*) => ({
        if let Ok(mut logger) = $crate::utils::logger::LOGGER.lock() {
            logger.log($crate::config::LogLevel::Warn, $module, format_args!($($arg)*));
        }
    })
}

#[macro_export]
macro_rules! log_info {
    ($module:expr, $($arg:tt)*) => ({
        if let Ok(mut logger) = $crate::utils::logger::LOGGER.lock() {
            logger.log($crate::config::LogLevel::Info, $module, format_args!($($arg)*));
        }
    })
}

#[macro_export]
macro_rules! log_debug {
    ($module:expr, $($arg:tt)*) => ({
        if let Ok(mut logger) = $crate::utils::logger::LOGGER.lock() {
            logger.log($crate::config::LogLevel::Debug, $module, format_args!($($arg)*));
        }
    })
}

/// 日誌記錄器
///
/// 只寫到 stderr，不產生任何日誌檔案。
pub struct Logger {
    level: LogLevel,
    sink: Box<dyn Write + Send>,
}

impl Logger {
    /// 創建新的日誌記錄器
    pub fn new() -> Self {
        Logger {
            level: LogLevel::Info,
            sink: Box::new(io::stderr()),
        }
    }

    /// 使用自訂輸出目標（測試用）
    pub fn with_sink(level: LogLevel, sink: Box<dyn Write + Send>) -> Self {
        Logger { level, sink }
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn set_level(&mut self, level: LogLevel) {
        self.level = level;
    }

    pub fn enabled(&self, level: LogLevel) -> bool {
        level <= self.level
    }

    /// 記錄一行日誌
    pub fn log(&mut self, level: LogLevel, module: &str, message: std::fmt::Arguments<'_>) {
        if !self.enabled(level) {
            return;
        }
        let now = Local::now();
        if writeln!(
            self.sink,
            "[{} {}] [{}] {}",
            now.format("%Y-%m-%d %H:%M:%S"),
            level.as_str(),
            module,
            message
        )
        .is_ok()
        {
            self.sink.flush().ok();
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Logger::new()
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level)
            .finish()
    }
}

/// 設定全局日誌等級
pub fn init(level: LogLevel) {
    if let Ok(mut logger) = LOGGER.lock() {
        logger.set_level(level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_level_filtering() {
        let buffer = SharedBuffer::default();
        let mut logger = Logger::with_sink(LogLevel::Warn, Box::new(buffer.clone()));

        logger.log(LogLevel::Error, "grid", format_args!("bad row {}", 3));
        logger.log(LogLevel::Info, "grid", format_args!("hidden"));

        let output = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("ERROR] [grid] bad row 3"));
        assert!(!output.contains("hidden"));
        assert_eq!(output.lines().count(), 1);
    }

    #[test]
    fn test_debug_enables_everything() {
        let logger = Logger::with_sink(LogLevel::Debug, Box::new(io::sink()));
        assert!(logger.enabled(LogLevel::Error));
        assert!(logger.enabled(LogLevel::Info));
        assert!(logger.enabled(LogLevel::Debug));
    }
}
