//! 棋盤狀態：64 格各自可有一枚棋子

use crate::codec::{self, Squares};
use crate::error::{BoardError, Error, Result};
use crate::piece::{Piece, PieceKind, Side};
use crate::square::{IntoSquare, SQUARE_COUNT, Square};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

/// 起始局面的底線排列（a 檔到 h 檔）
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// 棋盤狀態
///
/// 直接持有 64 格陣列，以 [`Square::index`] 定址；每格最多一枚棋子。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardState {
    squares: Squares,
}

impl Default for BoardState {
    fn default() -> Self {
        Self {
            squares: [None; SQUARE_COUNT],
        }
    }
}

impl BoardState {
    /// 空棋盤
    pub fn new() -> Self {
        Self::default()
    }

    /// 起始局面
    pub fn initial() -> Self {
        let mut state = Self::new();
        state.fill();
        state
    }

    pub fn get_piece(&self, square: impl IntoSquare) -> Result<Option<Piece>> {
        let square = square.into_square()?;
        Ok(self.at(square))
    }

    /// 已驗證格子的查詢
    pub fn at(&self, square: Square) -> Option<Piece> {
        self.squares[square.index()]
    }

    /// 放置棋子，取代原有佔據者
    pub fn set_piece(&mut self, square: impl IntoSquare, piece: Piece) -> Result<()> {
        let square = square.into_square()?;
        self.put_piece(square, piece);
        Ok(())
    }

    /// 已驗證格子的放置
    pub fn put_piece(&mut self, square: Square, piece: Piece) {
        self.squares[square.index()] = Some(piece);
    }

    /// 移除格子上的棋子；空格子不做任何事
    pub fn clear_piece(&mut self, square: impl IntoSquare) -> Result<()> {
        let square = square.into_square()?;
        self.squares[square.index()] = None;
        Ok(())
    }

    /// 取出格子上的棋子並清空該格
    pub fn take_piece(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.index()].take()
    }

    /// 移動棋子，目的地原有的棋子被取代，回傳被移動的棋子
    ///
    /// 來源格為空時回傳 `EmptySquare`，棋盤不變。
    pub fn move_piece(&mut self, from: impl IntoSquare, to: impl IntoSquare) -> Result<Piece> {
        let from = from.into_square()?;
        let to = to.into_square()?;
        let piece = self.at(from).ok_or(BoardError::EmptySquare { square: from })?;
        self.squares[from.index()] = None;
        self.put_piece(to, piece);
        Ok(piece)
    }

    /// `place_piece(White, King, "e1")`
    pub fn place_piece(
        &mut self,
        side: Side,
        kind: PieceKind,
        square: impl IntoSquare,
    ) -> Result<()> {
        self.set_piece(square, Piece::new(side, kind))
    }

    /// 以 builder 放置棋子：`board.place().side(White).kind(King).at("e1").apply()`
    pub fn place(&mut self) -> Placement<'_> {
        Placement {
            board: self,
            side: None,
            kind: None,
            square: None,
        }
    }

    /// 重設為起始局面
    pub fn fill(&mut self) {
        self.clear();
        for (col, kind) in BACK_RANK.into_iter().enumerate() {
            let col = col as u8;
            self.put_at(col, 0, Piece::new(Side::White, kind));
            self.put_at(col, 1, Piece::new(Side::White, PieceKind::Pawn));
            self.put_at(col, 6, Piece::new(Side::Black, PieceKind::Pawn));
            self.put_at(col, 7, Piece::new(Side::Black, kind));
        }
    }

    fn put_at(&mut self, file: u8, rank: u8, piece: Piece) {
        if let Some(square) = Square::new(file, rank) {
            self.put_piece(square, piece);
        }
    }

    /// 清空全部 64 格
    pub fn clear(&mut self) {
        self.squares = [None; SQUARE_COUNT];
    }

    /// 編碼為 64 字元字串
    pub fn encode(&self) -> String {
        codec::encode(&self.squares)
    }

    /// 由 64 字元字串還原；失敗時棋盤不變
    pub fn decode(&mut self, encoded: &str) -> Result<()> {
        self.squares = codec::decode(encoded)?;
        Ok(())
    }

    /// 依列優先順序（a8 → h1）列出每一格
    pub fn iter(&self) -> impl Iterator<Item = (Square, Option<Piece>)> + '_ {
        Square::all().map(|square| (square, self.at(square)))
    }

    /// 只列出有棋子的格子
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.iter()
            .filter_map(|(square, piece)| piece.map(|piece| (square, piece)))
    }

    pub fn piece_count(&self) -> usize {
        self.squares.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.piece_count() == 0
    }
}

impl std::fmt::Display for BoardState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.encode())
    }
}

impl FromStr for BoardState {
    type Err = Error;

    fn from_str(encoded: &str) -> Result<Self> {
        Ok(Self {
            squares: codec::decode(encoded)?,
        })
    }
}

// 以 64 字元字串序列化
impl Serialize for BoardState {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.encode())
    }
}

impl<'de> Deserialize<'de> for BoardState {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let encoded = String::deserialize(deserializer)?;
        encoded.parse().map_err(serde::de::Error::custom)
    }
}

/// 放置棋子的 builder，三個欄位順序不拘，`apply` 時才寫入棋盤
#[must_use = "呼叫 apply() 才會寫入棋盤"]
pub struct Placement<'a> {
    board: &'a mut BoardState,
    side: Option<Side>,
    kind: Option<PieceKind>,
    square: Option<Result<Square>>,
}

impl Placement<'_> {
    pub fn side(mut self, side: Side) -> Self {
        self.side = Some(side);
        self
    }

    pub fn white(self) -> Self {
        self.side(Side::White)
    }

    pub fn black(self) -> Self {
        self.side(Side::Black)
    }

    pub fn kind(mut self, kind: PieceKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// 目標格子；無效標籤延到 `apply` 才回報
    pub fn at(mut self, square: impl IntoSquare) -> Self {
        self.square = Some(square.into_square());
        self
    }

    pub fn apply(self) -> Result<()> {
        let side = self
            .side
            .ok_or(BoardError::IncompletePlacement { missing: "side" })?;
        let kind = self
            .kind
            .ok_or(BoardError::IncompletePlacement { missing: "kind" })?;
        let square = self
            .square
            .ok_or(BoardError::IncompletePlacement { missing: "square" })??;
        self.board.set_piece(square, Piece::new(side, kind))
    }
}
