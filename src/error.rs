use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// 牆壁網格的行類型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Horizontal,
    Vertical,
}

impl std::fmt::Display for RowKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RowKind::Horizontal => write!(f, "horizontal"),
            RowKind::Vertical => write!(f, "vertical"),
        }
    }
}

/// wallgrid 的錯誤類型
#[derive(Error, Debug)]
pub enum Error {
    /// IO 錯誤
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// 找不到網格文件
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// 第一行不是正整數
    #[error("line 1: expected a positive grid size, found {found:?}")]
    InvalidHeader { found: String },

    /// 文件行數不足
    #[error("line {line}: missing {kind} wall row")]
    MissingRow { line: usize, kind: RowKind },

    /// 行寬度不符
    #[error("line {line}: {kind} wall row must be {expected} chars wide, found {found}")]
    RowLength {
        line: usize,
        kind: RowKind,
        expected: usize,
        found: usize,
    },

    /// 非 '0'/'1' 字元
    #[error("line {line}, column {column}: expected '0' or '1', found {found:?}")]
    InvalidFlag {
        line: usize,
        column: usize,
        found: char,
    },

    /// 網格之後還有內容
    #[error("line {line}: unexpected content after the last wall row")]
    TrailingContent { line: usize },

    /// 生成器的網格大小無效
    #[error("grid size must be even and positive, got {0}")]
    InvalidSize(usize),

    /// 生成器內部錯誤
    #[error("generator error: {0}")]
    Generate(String),

    /// 視窗錯誤
    #[error("window error: {0}")]
    Window(String),
}

impl From<minifb::Error> for Error {
    fn from(err: minifb::Error) -> Self {
        Error::Window(err.to_string())
    }
}

/// 結果類型
pub type Result<T> = std::result::Result<T, Error>;
