pub mod display;

pub use display::Display;

use crate::config::VideoConfig;
use crate::grid::{Orientation, Segment, WallGrid};
use crate::log_debug;

/// Fraction of the canvas left blank around the axes on each side.
const PLOT_INSET: f64 = 0.1;

/// Pixel rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: isize,
    pub y: isize,
    pub w: usize,
    pub h: usize,
}

/// Maps data coordinates onto the plot area. The y axis points up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
    pub area: Rect,
}

impl Viewport {
    /// Bounds of all segments, padded by `margin` of the span on each side.
    /// With nothing to draw the axes show the unit square.
    pub fn fit(segments: &[Segment], margin: f64, width: usize, height: usize) -> Self {
        let area = plot_area(width, height);
        if segments.is_empty() {
            return Viewport {
                x_min: 0.0,
                x_max: 1.0,
                y_min: 0.0,
                y_max: 1.0,
                area,
            };
        }

        let x_lo = segments.iter().map(|s| s.start.x).min().unwrap_or(0) as f64;
        let x_hi = segments.iter().map(|s| s.end.x).max().unwrap_or(0) as f64;
        let y_lo = segments.iter().map(|s| s.start.y).min().unwrap_or(0) as f64;
        let y_hi = segments.iter().map(|s| s.end.y).max().unwrap_or(0) as f64;

        let (x_min, x_max) = pad(x_lo, x_hi, margin);
        let (y_min, y_max) = pad(y_lo, y_hi, margin);
        Viewport {
            x_min,
            x_max,
            y_min,
            y_max,
            area,
        }
    }

    pub fn to_pixel(&self, x: f64, y: f64) -> (isize, isize) {
        let span_x = (self.area.w.max(1) - 1) as f64;
        let span_y = (self.area.h.max(1) - 1) as f64;
        let fx = (x - self.x_min) / (self.x_max - self.x_min);
        let fy = (y - self.y_min) / (self.y_max - self.y_min);

        let px = self.area.x + (fx * span_x).round() as isize;
        let py = self.area.y + span_y as isize - (fy * span_y).round() as isize;
        (px, py)
    }
}

fn pad(lo: f64, hi: f64, margin: f64) -> (f64, f64) {
    let span = hi - lo;
    if span == 0.0 {
        (lo - 0.5, hi + 0.5)
    } else {
        (lo - span * margin, hi + span * margin)
    }
}

fn plot_area(width: usize, height: usize) -> Rect {
    let inset_x = (width as f64 * PLOT_INSET).round() as usize;
    let inset_y = (height as f64 * PLOT_INSET).round() as usize;
    Rect {
        x: inset_x as isize,
        y: inset_y as isize,
        w: width.saturating_sub(2 * inset_x),
        h: height.saturating_sub(2 * inset_y),
    }
}

/// Rasterise segments onto a fresh canvas: background, axes frame, walls.
pub fn plot(segments: &[Segment], config: &VideoConfig) -> Display {
    let mut display = Display::new(config.width, config.height, config.background_color);
    let viewport = Viewport::fit(segments, config.margin, config.width, config.height);
    let area = viewport.area;
    display.stroke_rect(area.x, area.y, area.w, area.h, config.frame_color);

    let stroke = config.line_width.max(1);
    let offset = (stroke as isize - 1) / 2;
    for segment in segments {
        let (x0, y0) = viewport.to_pixel(segment.start.x as f64, segment.start.y as f64);
        let (x1, y1) = viewport.to_pixel(segment.end.x as f64, segment.end.y as f64);
        match segment.orientation() {
            Orientation::Horizontal => display.fill_rect(
                x0.min(x1) - offset,
                y0 - offset,
                x0.abs_diff(x1) + stroke,
                stroke,
                config.line_color,
            ),
            Orientation::Vertical => display.fill_rect(
                x0 - offset,
                y0.min(y1) - offset,
                stroke,
                y0.abs_diff(y1) + stroke,
                config.line_color,
            ),
        }
    }

    log_debug!(
        "render",
        "plotted {} segments on {}x{} canvas",
        segments.len(),
        config.width,
        config.height
    );
    display
}

pub fn render_grid(grid: &WallGrid, config: &VideoConfig) -> Display {
    plot(&grid.segments(), config)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: u32 = 0x000000;
    const WHITE: u32 = 0xFFFFFF;

    fn small_config() -> VideoConfig {
        VideoConfig {
            width: 100,
            height: 100,
            ..VideoConfig::default()
        }
    }

    #[test]
    fn test_viewport_fit_pads_bounds() {
        let segments = vec![Segment::horizontal(0, 0), Segment::vertical(3, 1)];
        let viewport = Viewport::fit(&segments, 0.05, 100, 100);

        assert!((viewport.x_min - -0.15).abs() < 1e-9);
        assert!((viewport.x_max - 3.15).abs() < 1e-9);
        assert!((viewport.y_min - -0.1).abs() < 1e-9);
        assert!((viewport.y_max - 2.1).abs() < 1e-9);
        assert_eq!(
            viewport.area,
            Rect {
                x: 10,
                y: 10,
                w: 80,
                h: 80
            }
        );
    }

    #[test]
    fn test_viewport_degenerate_span() {
        // 只有一條水平線：y 範圍為 0
        let viewport = Viewport::fit(&[Segment::horizontal(2, 4)], 0.05, 100, 100);
        assert_eq!(viewport.y_min, 3.5);
        assert_eq!(viewport.y_max, 4.5);
    }

    #[test]
    fn test_y_axis_points_up() {
        let viewport = Viewport::fit(&[Segment::vertical(0, 0)], 0.05, 100, 100);
        let (_, bottom) = viewport.to_pixel(0.0, 0.0);
        let (_, top) = viewport.to_pixel(0.0, 1.0);
        assert!(top < bottom);
    }

    #[test]
    fn test_plot_example_grid() {
        let grid = WallGrid::parse("2\n1\n1\n10\n").unwrap();
        let display = render_grid(&grid, &small_config());

        // (0,0) -> (14,85), (1,1) -> (85,14)
        assert_eq!(display.pixel(14, 85), Some(BLACK));
        assert_eq!(display.pixel(85, 14), Some(BLACK));
        // 兩條水平線
        assert_eq!(display.pixel(50, 85), Some(BLACK));
        assert_eq!(display.pixel(50, 14), Some(BLACK));
        // 左側垂直線
        assert_eq!(display.pixel(14, 50), Some(BLACK));
        // 右側沒有牆
        assert_eq!(display.pixel(85, 50), Some(WHITE));
        // 座標軸邊框
        assert_eq!(display.pixel(10, 10), Some(VideoConfig::default().frame_color));
    }

    #[test]
    fn test_plot_empty_grid() {
        let grid = WallGrid::parse("1\n\n").unwrap();
        let config = small_config();
        let display = render_grid(&grid, &config);

        assert_eq!(display.count(BLACK), 0);
        assert_eq!(display.count(config.frame_color), 4 * 80 - 4);
        assert_eq!(display.count(WHITE), 100 * 100 - (4 * 80 - 4));
    }
}
