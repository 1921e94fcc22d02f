//! 與渲染無關的棋盤核心：棋盤狀態、64 字元編碼與拖放狀態機。
//!
//! 宿主（UI 層）讀取 [`BoardState`] 繪製格子，把指標事件轉給 [`DragController`]，
//! 並實作 [`BoardObserver`] 接收變動通知後重繪。

pub mod board_state;
pub mod boards;
pub mod chessboard;
pub mod codec;
pub mod drag;
pub mod error;
pub mod loader;
pub mod loader_schema;
pub mod piece;
pub mod square;

pub use board_state::{BoardState, Placement};
pub use boards::Chessboards;
pub use chessboard::Chessboard;
pub use drag::{
    BoardObserver, DragController, DragSession, DragState, DropOutcome, PointerPosition,
};
pub use error::{BoardError, Error, ErrorKind, LoadError, Result};
pub use piece::{Piece, PieceKind, Side};
pub use square::{IntoSquare, Square, SquareShade};
