// 牆壁網格檢視器庫
pub mod config;
pub mod error;
pub mod grid;
pub mod hamilton;
pub mod interface;
pub mod render;
pub mod utils;
pub mod viewer;

pub use crate::config::{Config, ConfigBuilder};
pub use crate::error::{Error, Result};
pub use crate::grid::{Segment, WallGrid};
pub use crate::viewer::GridViewer;
