//! 棋子種類、陣營與編碼符號

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// 空格子的編碼符號
pub const EMPTY_SYMBOL: char = '.';

/// 棋子種類
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// 陣營
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Side {
    White,
    Black,
}

/// 棋子（種類 + 陣營）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub side: Side,
}

impl PieceKind {
    /// 小寫字母（白方符號）
    pub fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    /// 由字母反查種類，大小寫不拘
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }
}

impl Piece {
    pub const fn new(side: Side, kind: PieceKind) -> Self {
        Self { kind, side }
    }

    /// 編碼符號：白方小寫、黑方大寫
    pub fn symbol(self) -> char {
        let letter = self.kind.letter();
        match self.side {
            Side::White => letter,
            Side::Black => letter.to_ascii_uppercase(),
        }
    }

    /// 由編碼符號還原棋子，非棋子符號（包含 `.`）回傳 `None`
    pub fn from_symbol(symbol: char) -> Option<Self> {
        let kind = PieceKind::from_letter(symbol)?;
        let side = if symbol.is_ascii_uppercase() {
            Side::Black
        } else {
            Side::White
        };
        Some(Self { kind, side })
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.side, self.kind)
    }
}
