//! 單一棋盤實例：id + 棋盤狀態 + 拖放控制器

use crate::board_state::BoardState;
use crate::drag::{BoardObserver, DragController, DropOutcome, PointerPosition};
use crate::error::Result;
use crate::piece::Piece;
use crate::square::{IntoSquare, Square};

/// 棋盤實例
///
/// 每個實例獨佔自己的狀態，多個棋盤之間不共享任何可變資料。
/// 透過這裡做的直接修改會對每個變動的格子呼叫 `on_square_changed`，
/// 進行中的拖曳會先取消，棋子回到起點後才套用修改。
#[derive(Debug)]
pub struct Chessboard {
    id: String,
    state: BoardState,
    drag: DragController,
}

impl Chessboard {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            state: BoardState::new(),
            drag: DragController::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn state(&self) -> &BoardState {
        &self.state
    }

    /// 直接存取狀態，不會發出通知
    pub fn state_mut(&mut self) -> &mut BoardState {
        &mut self.state
    }

    pub fn drag(&self) -> &DragController {
        &self.drag
    }

    pub fn set_piece(
        &mut self,
        square: impl IntoSquare,
        piece: Piece,
        observer: &mut impl BoardObserver,
    ) -> Result<()> {
        let square = square.into_square()?;
        self.end_drag(observer);
        self.state.put_piece(square, piece);
        observer.on_square_changed(square, Some(piece));
        Ok(())
    }

    pub fn clear_piece(
        &mut self,
        square: impl IntoSquare,
        observer: &mut impl BoardObserver,
    ) -> Result<()> {
        let square = square.into_square()?;
        self.end_drag(observer);
        if self.state.take_piece(square).is_some() {
            observer.on_square_changed(square, None);
        }
        Ok(())
    }

    pub fn move_piece(
        &mut self,
        from: impl IntoSquare,
        to: impl IntoSquare,
        observer: &mut impl BoardObserver,
    ) -> Result<Piece> {
        let from = from.into_square()?;
        let to = to.into_square()?;
        self.end_drag(observer);
        let piece = self.state.move_piece(from, to)?;
        observer.on_square_changed(from, self.state.at(from));
        observer.on_square_changed(to, Some(piece));
        Ok(piece)
    }

    pub fn fill(&mut self, observer: &mut impl BoardObserver) {
        self.replace_state(BoardState::initial(), observer);
    }

    pub fn clear(&mut self, observer: &mut impl BoardObserver) {
        self.replace_state(BoardState::new(), observer);
    }

    /// 由 64 字元字串還原；失敗時棋盤不變且不發通知
    pub fn decode(&mut self, encoded: &str, observer: &mut impl BoardObserver) -> Result<()> {
        let next: BoardState = encoded.parse()?;
        self.replace_state(next, observer);
        Ok(())
    }

    pub fn encode(&self) -> String {
        self.state.encode()
    }

    pub fn handle_pointer_down(
        &mut self,
        square: impl IntoSquare,
        observer: &mut impl BoardObserver,
    ) -> Result<bool> {
        self.drag.handle_pointer_down(&mut self.state, square, observer)
    }

    pub fn handle_pointer_move(
        &mut self,
        position: PointerPosition,
        observer: &mut impl BoardObserver,
    ) {
        self.drag.handle_pointer_move(position, observer);
    }

    pub fn handle_pointer_up<S: IntoSquare>(
        &mut self,
        square: Option<S>,
        observer: &mut impl BoardObserver,
    ) -> DropOutcome {
        self.drag.handle_pointer_up(&mut self.state, square, observer)
    }

    pub fn cancel_drag(&mut self, observer: &mut impl BoardObserver) -> DropOutcome {
        self.drag.cancel(&mut self.state, observer)
    }

    // 拖曳中的棋子不在狀態裡，直接修改前先放回起點
    fn end_drag(&mut self, observer: &mut impl BoardObserver) {
        if self.drag.is_dragging() {
            self.drag.cancel(&mut self.state, observer);
        }
    }

    fn replace_state(&mut self, next: BoardState, observer: &mut impl BoardObserver) {
        self.end_drag(observer);
        let changed: Vec<Square> = Square::all()
            .filter(|&square| self.state.at(square) != next.at(square))
            .collect();
        self.state = next;
        for square in changed {
            observer.on_square_changed(square, self.state.at(square));
        }
    }
}
