//! 拖放狀態機
//!
//! 狀態只有兩種：
//! - `Idle`：沒有進行中的拖曳
//! - `Dragging`：棋子已從起點格取出，跟著指標移動
//!
//! 控制器只改動 [`BoardState`] 並透過 [`BoardObserver`] 通知宿主，不碰任何渲染細節。
//! 宿主負責把螢幕座標換算成格子標籤（或 `None` 表示放在棋盤外）。

use crate::board_state::BoardState;
use crate::error::Result;
use crate::piece::Piece;
use crate::square::{IntoSquare, Square};
use tracing::debug;

/// 指標位置（宿主座標系）
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerPosition {
    pub x: f32,
    pub y: f32,
}

/// 宿主的渲染介面，控制器在每次狀態轉換時呼叫
pub trait BoardObserver {
    /// 某格內容改變，宿主應重繪該格
    fn on_square_changed(&mut self, square: Square, piece: Option<Piece>);

    /// 拖曳中的棋子移到新位置
    fn on_drag_visual_update(&mut self, position: PointerPosition);

    /// 拖曳結束（提交或取消）
    fn on_drag_ended(&mut self);
}

/// 不需要通知時使用
impl BoardObserver for () {
    fn on_square_changed(&mut self, _square: Square, _piece: Option<Piece>) {}
    fn on_drag_visual_update(&mut self, _position: PointerPosition) {}
    fn on_drag_ended(&mut self) {}
}

/// 一次拖曳手勢的暫存狀態
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub origin: Square,
    pub piece: Piece,
    pub position: Option<PointerPosition>,
}

/// 拖曳狀態
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

/// 放開指標的結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// 棋子放到 `to`
    Committed { from: Square, to: Square, piece: Piece },
    /// 放在棋盤外或無效格子，棋子回到 `origin`
    Cancelled { origin: Square, piece: Piece },
    /// 沒有進行中的拖曳
    Ignored,
}

#[derive(Debug, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn session(&self) -> Option<&DragSession> {
        match &self.state {
            DragState::Dragging(session) => Some(session),
            DragState::Idle => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    /// 按下指標；若在 Idle 且格子上有棋子，取出棋子開始拖曳並回傳 `true`
    ///
    /// 拖曳中再次按下、或按在空格子上都會被忽略。
    pub fn handle_pointer_down(
        &mut self,
        board: &mut BoardState,
        square: impl IntoSquare,
        observer: &mut impl BoardObserver,
    ) -> Result<bool> {
        if self.is_dragging() {
            debug!("拖曳中忽略重複按下");
            return Ok(false);
        }
        let square = square.into_square()?;
        let Some(piece) = board.take_piece(square) else {
            return Ok(false);
        };

        debug!("開始拖曳 {piece} 自 {square}");
        self.state = DragState::Dragging(DragSession {
            origin: square,
            piece,
            position: None,
        });
        observer.on_square_changed(square, None);
        Ok(true)
    }

    /// 移動指標；只更新追蹤位置，不改動棋盤
    pub fn handle_pointer_move(
        &mut self,
        position: PointerPosition,
        observer: &mut impl BoardObserver,
    ) {
        if let DragState::Dragging(session) = &mut self.state {
            session.position = Some(position);
            observer.on_drag_visual_update(position);
        }
    }

    /// 放開指標；`square` 為 `None` 或無效標籤時取消並把棋子放回起點
    pub fn handle_pointer_up<S: IntoSquare>(
        &mut self,
        board: &mut BoardState,
        square: Option<S>,
        observer: &mut impl BoardObserver,
    ) -> DropOutcome {
        let DragState::Dragging(session) = std::mem::take(&mut self.state) else {
            return DropOutcome::Ignored;
        };
        let DragSession { origin, piece, .. } = session;

        let release = square.and_then(|s| s.into_square().ok());
        let outcome = match release {
            Some(to) => {
                debug!("放下 {piece}: {origin} -> {to}");
                DropOutcome::Committed {
                    from: origin,
                    to,
                    piece,
                }
            }
            None => {
                debug!("取消拖曳，{piece} 回到 {origin}");
                DropOutcome::Cancelled { origin, piece }
            }
        };

        let target = match outcome {
            DropOutcome::Committed { to, .. } => to,
            _ => origin,
        };
        board.put_piece(target, piece);
        observer.on_square_changed(target, Some(piece));
        observer.on_drag_ended();
        outcome
    }

    /// 中止進行中的拖曳（例如宿主失去指標捕捉），棋子回到起點
    pub fn cancel(
        &mut self,
        board: &mut BoardState,
        observer: &mut impl BoardObserver,
    ) -> DropOutcome {
        self.handle_pointer_up(board, None::<Square>, observer)
    }
}
