//! 棋盤格子與外框標籤

use crate::error::{BoardError, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

/// 棋盤邊長
pub const BOARD_SIZE: u8 = 8;

/// 格子總數
pub const SQUARE_COUNT: usize = 64;

/// 外框上的檔案標籤（左到右）
pub const FILE_LABELS: [char; 8] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];

/// 外框上的橫列標籤（上到下）
pub const RANK_LABELS: [char; 8] = ['8', '7', '6', '5', '4', '3', '2', '1'];

/// 棋盤格子
///
/// `file` 為 0..8 對應 `a`..`h`，`rank` 為 0..8 對應 `1`..`8`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    file: u8,
    rank: u8,
}

/// 格子底色
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SquareShade {
    Light,
    Dark,
}

impl Square {
    /// 由 0 起算的 file / rank 建立格子，超出範圍回傳 `None`
    pub fn new(file: u8, rank: u8) -> Option<Self> {
        (file < BOARD_SIZE && rank < BOARD_SIZE).then_some(Self { file, rank })
    }

    /// 由列優先索引建立格子（0 = a8，63 = h1）
    pub fn from_index(index: usize) -> Option<Self> {
        if index >= SQUARE_COUNT {
            return None;
        }
        let row = (index / 8) as u8;
        let col = (index % 8) as u8;
        Some(Self {
            file: col,
            rank: BOARD_SIZE - 1 - row,
        })
    }

    /// 列優先索引：由畫面左上（a8）到右下（h1）
    pub fn index(self) -> usize {
        self.row() * 8 + self.col()
    }

    /// 畫面上的列（0 = 第 8 橫列）
    pub fn row(self) -> usize {
        (BOARD_SIZE - 1 - self.rank) as usize
    }

    /// 畫面上的欄（0 = a 檔）
    pub fn col(self) -> usize {
        self.file as usize
    }

    pub fn file(self) -> u8 {
        self.file
    }

    pub fn rank(self) -> u8 {
        self.rank
    }

    pub fn file_char(self) -> char {
        FILE_LABELS[self.file as usize]
    }

    pub fn rank_char(self) -> char {
        (b'1' + self.rank) as char
    }

    /// 左上角（a8）為淺色
    pub fn shade(self) -> SquareShade {
        if (self.row() + self.col()) % 2 == 0 {
            SquareShade::Light
        } else {
            SquareShade::Dark
        }
    }

    /// 依列優先順序列出全部 64 格
    pub fn all() -> impl Iterator<Item = Square> {
        (0..SQUARE_COUNT).filter_map(Square::from_index)
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

impl FromStr for Square {
    type Err = crate::error::Error;

    fn from_str(label: &str) -> Result<Self> {
        let invalid = || BoardError::InvalidSquare {
            label: label.to_string(),
        };
        let mut chars = label.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid().into());
        };
        if !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
            return Err(invalid().into());
        }
        Ok(Self {
            file: file as u8 - b'a',
            rank: rank as u8 - b'1',
        })
    }
}

impl Serialize for Square {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Square {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let label = String::deserialize(deserializer)?;
        label.parse().map_err(serde::de::Error::custom)
    }
}

/// 可轉為格子的參數：`Square` 本身或 `"e4"` 這類標籤
pub trait IntoSquare {
    fn into_square(self) -> Result<Square>;
}

impl IntoSquare for Square {
    fn into_square(self) -> Result<Square> {
        Ok(self)
    }
}

impl IntoSquare for &Square {
    fn into_square(self) -> Result<Square> {
        Ok(*self)
    }
}

impl IntoSquare for &str {
    fn into_square(self) -> Result<Square> {
        self.parse()
    }
}

impl IntoSquare for &String {
    fn into_square(self) -> Result<Square> {
        self.parse()
    }
}

impl IntoSquare for String {
    fn into_square(self) -> Result<Square> {
        self.parse()
    }
}
