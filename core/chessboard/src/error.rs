//! 錯誤處理系統
//!
//! 所有錯誤都是同步、可恢復的：操作失敗時狀態不變，呼叫端拿到錯誤自行決定如何呈現。

use crate::square::Square;
use thiserror::Error as ThisError;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// 頂層錯誤，包含原始錯誤和 context 鏈
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    contexts: Vec<String>,
}

/// 錯誤種類
#[derive(Debug, ThisError)]
pub enum ErrorKind {
    #[error(transparent)]
    Board(#[from] BoardError),
    #[error(transparent)]
    Load(#[from] LoadError),
}

/// 棋盤錯誤
#[derive(Debug, Clone, ThisError, PartialEq, Eq)]
pub enum BoardError {
    #[error("無效的格子標籤: {label:?}")]
    InvalidSquare { label: String },
    #[error("格子 {square} 上沒有棋子")]
    EmptySquare { square: Square },
    #[error("棋盤編碼格式錯誤: {reason}")]
    MalformedEncoding { reason: String },
    #[error("放置棋子缺少欄位: {missing}")]
    IncompletePlacement { missing: &'static str },
}

/// 格式載入錯誤
#[derive(Debug, Clone, ThisError, PartialEq, Eq)]
pub enum LoadError {
    #[error("{format} 反序列化失敗: {reason}")]
    DeserializeError { format: String, reason: String },
    #[error("{format} 序列化失敗: {reason}")]
    SerializeError { format: String, reason: String },
    #[error("找不到棋盤: {id}")]
    UnknownBoard { id: String },
}

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// 若為棋盤錯誤則回傳之
    pub fn board_error(&self) -> Option<&BoardError> {
        match &self.kind {
            ErrorKind::Board(err) => Some(err),
            _ => None,
        }
    }

    /// 添加錯誤上下文，自動記錄呼叫位置
    #[track_caller]
    pub fn context<C: Into<String>>(mut self, context: C) -> Self {
        let loc = std::panic::Location::caller();
        let msg = format!("{} [{}:{}]", context.into(), loc.file(), loc.line());
        self.contexts.push(msg);
        self
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind)?;
        for ctx in &self.contexts {
            write!(f, "\n  {}", ctx)?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}

impl<E: Into<ErrorKind>> From<E> for Error {
    fn from(error: E) -> Self {
        Self {
            kind: error.into(),
            contexts: Vec::new(),
        }
    }
}

/// Result 擴展 trait，用於添加錯誤上下文
pub trait Context<T> {
    fn context<C: Into<String>>(self, context: C) -> Result<T>;
}

impl<T> Context<T> for Result<T> {
    #[track_caller]
    fn context<C: Into<String>>(self, context: C) -> Result<T> {
        match self {
            Ok(value) => Ok(value),
            Err(e) => Err(e.context(context)),
        }
    }
}
