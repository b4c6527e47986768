use crate::config::SystemConfig;
use crate::error::Result;
use crate::render::Display;
use crate::{log_debug, log_info};
use minifb::{Key, Window, WindowOptions};
use std::time::Duration;

/// 顯示一個已完成的畫面，直到使用者關閉為止
pub trait VideoInterface {
    fn show(&mut self, title: &str, frame: &Display) -> Result<()>;
}

/// minifb 視窗
#[derive(Debug, Clone)]
pub struct MinifbDisplay {
    target_fps: u64,
}

impl MinifbDisplay {
    pub fn new(system: &SystemConfig) -> Self {
        Self {
            target_fps: system.target_fps.max(1),
        }
    }

    fn open(&self, title: &str, width: usize, height: usize) -> Result<Window> {
        let mut window = Window::new(title, width, height, WindowOptions::default())?;
        window.limit_update_rate(Some(Duration::from_micros(1_000_000 / self.target_fps)));
        Ok(window)
    }
}

impl VideoInterface for MinifbDisplay {
    fn show(&mut self, title: &str, frame: &Display) -> Result<()> {
        let mut window = self.open(title, frame.width(), frame.height())?;
        log_info!("video", "window open, close it or press Escape to exit");

        let mut frames: u64 = 0;
        while window.is_open() && !window.is_key_down(Key::Escape) {
            window.update_with_buffer(frame.get_buffer(), frame.width(), frame.height())?;
            frames += 1;
        }

        log_debug!("video", "window closed after {} frames", frames);
        Ok(())
    }
}
