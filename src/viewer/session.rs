/*
================================================================================
網格檢視器 - 載入、繪圖、顯示
================================================================================
*/
use crate::config::Config;
use crate::error::Result;
use crate::grid::WallGrid;
use crate::interface::VideoInterface;
use crate::log_info;
use crate::render::{self, Display};
use std::path::Path;

pub struct GridViewer {
    pub config: Config,
}

impl GridViewer {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// 載入網格並繪製成畫面（不開視窗）
    pub fn render_file<P: AsRef<Path>>(&self, path: P) -> Result<Display> {
        let grid = WallGrid::load(path.as_ref())?;
        log_info!(
            "viewer",
            "{}: {}x{} grid, {} horizontal and {} vertical walls",
            path.as_ref().display(),
            grid.size(),
            grid.size(),
            grid.horizontal_segments().len(),
            grid.vertical_segments().len()
        );
        Ok(render::render_grid(&grid, &self.config.video))
    }

    /// 載入、繪製並顯示，直到視窗關閉
    pub fn run<P: AsRef<Path>>(&self, path: P, video: &mut dyn VideoInterface) -> Result<()> {
        let path = path.as_ref();
        let frame = self.render_file(path)?;
        let title = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        video.show(&title, &frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[derive(Default)]
    struct RecordingVideo {
        shown: Vec<(String, usize)>,
    }

    impl VideoInterface for RecordingVideo {
        fn show(&mut self, title: &str, frame: &Display) -> Result<()> {
            self.shown.push((title.to_string(), frame.count(0x000000)));
            Ok(())
        }
    }

    #[test]
    fn test_missing_file_never_reaches_video() {
        let viewer = GridViewer::new(Config::new());
        let mut video = RecordingVideo::default();

        let err = viewer
            .run("definitely/not/here.txt", &mut video)
            .unwrap_err();
        assert!(matches!(err, Error::FileNotFound(_)));
        assert!(video.shown.is_empty());
    }
}
