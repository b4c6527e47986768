/// 繪圖和視窗相關配置
#[derive(Debug, Clone)]
pub struct VideoConfig {
    pub width: usize,
    pub height: usize,
    /// Fraction of the data span added on each side of the plot.
    pub margin: f64,
    pub line_width: usize,
    pub line_color: u32,
    pub background_color: u32,
    pub frame_color: u32,
}

impl Default for VideoConfig {
    fn default() -> Self {
        VideoConfig {
            width: 640,
            height: 480,
            margin: 0.05,
            line_width: 2,
            line_color: 0x00_00_00,
            background_color: 0xFF_FF_FF,
            frame_color: 0x80_80_80,
        }
    }
}
