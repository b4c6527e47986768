//! Text wall-grid format.
//!
//! ```text
//! n
//! <n lines, each n-1 chars of '0'/'1'>      horizontal wall rows
//! <n-1 lines, each n chars of '0'/'1'>      vertical wall rows
//! ```

pub mod segment;

pub use segment::{Orientation, Point, Segment};

use crate::error::{Error, Result, RowKind};
use crate::log_debug;
use std::fmt;
use std::fs;
use std::path::Path;

/// n×n wall layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WallGrid {
    size: usize,
    horizontal: Vec<Vec<bool>>,
    vertical: Vec<Vec<bool>>,
}

impl WallGrid {
    /// Grid of the given size with no walls at all.
    pub fn empty(size: usize) -> Self {
        let width = size.saturating_sub(1);
        WallGrid {
            size,
            horizontal: vec![vec![false; width]; size],
            vertical: vec![vec![false; size]; width],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn horizontal_rows(&self) -> &[Vec<bool>] {
        &self.horizontal
    }

    pub fn vertical_rows(&self) -> &[Vec<bool>] {
        &self.vertical
    }

    /// Wall from (w, h) to (w + 1, h).
    pub fn has_horizontal(&self, h: usize, w: usize) -> bool {
        self.horizontal
            .get(h)
            .and_then(|row| row.get(w))
            .copied()
            .unwrap_or(false)
    }

    /// Wall from (w, h) to (w, h + 1).
    pub fn has_vertical(&self, h: usize, w: usize) -> bool {
        self.vertical
            .get(h)
            .and_then(|row| row.get(w))
            .copied()
            .unwrap_or(false)
    }

    pub fn set_horizontal(&mut self, h: usize, w: usize, wall: bool) {
        self.horizontal[h][w] = wall;
    }

    pub fn set_vertical(&mut self, h: usize, w: usize, wall: bool) {
        self.vertical[h][w] = wall;
    }

    /// Parse the text format. Trailing whitespace on each line is ignored,
    /// as are blank lines after the last vertical row.
    pub fn parse(text: &str) -> Result<Self> {
        let lines: Vec<&str> = text.lines().map(str::trim_end).collect();

        let header = lines.first().copied().unwrap_or("");
        let size = match header.trim().parse::<usize>() {
            Ok(n) if n > 0 => n,
            _ => {
                return Err(Error::InvalidHeader {
                    found: header.to_string(),
                })
            }
        };

        let horizontal = (0..size)
            .map(|h| parse_row(&lines, 1 + h, size - 1, RowKind::Horizontal))
            .collect::<Result<Vec<_>>>()?;
        let vertical = (0..size - 1)
            .map(|h| parse_row(&lines, 1 + size + h, size, RowKind::Vertical))
            .collect::<Result<Vec<_>>>()?;

        if let Some((index, _)) = lines
            .iter()
            .enumerate()
            .skip(2 * size)
            .find(|(_, line)| !line.is_empty())
        {
            return Err(Error::TrailingContent { line: index + 1 });
        }

        Ok(WallGrid {
            size,
            horizontal,
            vertical,
        })
    }

    /// Read and parse a grid file. The file is closed before this returns.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::FileNotFound(path.to_path_buf()));
        }
        let text = fs::read_to_string(path)?;
        let grid = Self::parse(&text)?;
        log_debug!(
            "grid",
            "loaded {} ({}x{}, {} walls)",
            path.display(),
            grid.size,
            grid.size,
            grid.wall_count()
        );
        Ok(grid)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        fs::write(path, self.to_text())?;
        Ok(())
    }

    pub fn to_text(&self) -> String {
        self.to_string()
    }

    pub fn wall_count(&self) -> usize {
        self.horizontal
            .iter()
            .chain(self.vertical.iter())
            .map(|row| row.iter().filter(|&&wall| wall).count())
            .sum()
    }

    /// One segment per horizontal '1', row by row.
    pub fn horizontal_segments(&self) -> Vec<Segment> {
        collect_segments(&self.horizontal, Segment::horizontal)
    }

    /// One segment per vertical '1', row by row.
    pub fn vertical_segments(&self) -> Vec<Segment> {
        collect_segments(&self.vertical, Segment::vertical)
    }

    pub fn segments(&self) -> Vec<Segment> {
        let mut segments = self.horizontal_segments();
        segments.extend(self.vertical_segments());
        segments
    }
}

impl fmt::Display for WallGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.size)?;
        for row in self.horizontal.iter().chain(self.vertical.iter()) {
            for &wall in row {
                f.write_str(if wall { "1" } else { "0" })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn parse_row(lines: &[&str], index: usize, width: usize, kind: RowKind) -> Result<Vec<bool>> {
    let line = index + 1;
    let text = lines
        .get(index)
        .ok_or(Error::MissingRow { line, kind })?;

    let found = text.chars().count();
    if found != width {
        return Err(Error::RowLength {
            line,
            kind,
            expected: width,
            found,
        });
    }

    text.chars()
        .enumerate()
        .map(|(column, ch)| match ch {
            '1' => Ok(true),
            '0' => Ok(false),
            found => Err(Error::InvalidFlag {
                line,
                column: column + 1,
                found,
            }),
        })
        .collect()
}

fn collect_segments(rows: &[Vec<bool>], make: fn(usize, usize) -> Segment) -> Vec<Segment> {
    rows.iter()
        .enumerate()
        .flat_map(|(h, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &wall)| wall)
                .map(move |(w, _)| make(w, h))
        })
        .collect()
}
