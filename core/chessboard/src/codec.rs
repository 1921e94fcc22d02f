//! 64 字元棋盤編碼
//!
//! 每格一個字元，由 a8 依列優先排到 h1：
//! - 白方 `p n b r q k`，黑方 `P N B R Q K`
//! - 空格子為 [`EMPTY_SYMBOL`]
//!
//! 起始局面編碼為：
//! ```text
//! RNBQKBNRPPPPPPPP................................pppppppprnbqkbnr
//! ```

use crate::error::{BoardError, Result};
use crate::piece::{EMPTY_SYMBOL, Piece};
use crate::square::SQUARE_COUNT;

/// 64 格的原始內容，索引同 [`crate::square::Square::index`]
pub type Squares = [Option<Piece>; SQUARE_COUNT];

/// 起始局面的編碼
pub const INITIAL_POSITION: &str =
    "RNBQKBNRPPPPPPPP................................pppppppprnbqkbnr";

/// 空棋盤的編碼
pub const EMPTY_POSITION: &str =
    "................................................................";

pub fn encode(squares: &Squares) -> String {
    squares
        .iter()
        .map(|slot| slot.map_or(EMPTY_SYMBOL, Piece::symbol))
        .collect()
}

/// 解碼；長度不為 64 或出現無法辨識的字元時回傳 `MalformedEncoding`
pub fn decode(encoded: &str) -> Result<Squares> {
    let len = encoded.chars().count();
    if len != SQUARE_COUNT {
        return Err(BoardError::MalformedEncoding {
            reason: format!("長度應為 {SQUARE_COUNT} 字元，實際為 {len}"),
        }
        .into());
    }

    let mut squares: Squares = [None; SQUARE_COUNT];
    for (index, symbol) in encoded.chars().enumerate() {
        if symbol == EMPTY_SYMBOL {
            continue;
        }
        let piece = Piece::from_symbol(symbol).ok_or_else(|| BoardError::MalformedEncoding {
            reason: format!("第 {index} 個字元 {symbol:?} 不是棋子符號"),
        })?;
        squares[index] = Some(piece);
    }
    Ok(squares)
}
