use chessboard::codec::INITIAL_POSITION;
use chessboard::{
    BoardObserver, BoardState, Chessboard, DragController, DragState, DropOutcome, Piece,
    PieceKind, PointerPosition, Side, Square,
};

/// 記錄所有通知的觀察者
#[derive(Debug, Default)]
struct Recorder {
    events: Vec<Event>,
}

#[derive(Debug, Clone, PartialEq)]
enum Event {
    SquareChanged(String, Option<Piece>),
    Visual(PointerPosition),
    Ended,
}

impl BoardObserver for Recorder {
    fn on_square_changed(&mut self, square: Square, piece: Option<Piece>) {
        self.events.push(Event::SquareChanged(square.to_string(), piece));
    }

    fn on_drag_visual_update(&mut self, position: PointerPosition) {
        self.events.push(Event::Visual(position));
    }

    fn on_drag_ended(&mut self) {
        self.events.push(Event::Ended);
    }
}

const WHITE_PAWN: Piece = Piece::new(Side::White, PieceKind::Pawn);

fn sq(label: &str) -> Square {
    label.parse().unwrap()
}

#[test]
fn test_drag_e2_to_e4_commits() {
    let mut board = BoardState::initial();
    let mut drag = DragController::new();
    let mut recorder = Recorder::default();

    let started = drag
        .handle_pointer_down(&mut board, "e2", &mut recorder)
        .unwrap();
    assert!(started);
    assert!(drag.is_dragging());
    assert_eq!(board.get_piece("e2").unwrap(), None, "e2 在拖曳中應為空");

    let session = drag.session().copied().unwrap();
    assert_eq!(session.origin, sq("e2"));
    assert_eq!(session.piece, WHITE_PAWN);

    let outcome = drag.handle_pointer_up(&mut board, Some("e4"), &mut recorder);
    assert_eq!(
        outcome,
        DropOutcome::Committed {
            from: sq("e2"),
            to: sq("e4"),
            piece: WHITE_PAWN,
        }
    );
    assert_eq!(*drag.state(), DragState::Idle);
    assert_eq!(board.get_piece("e4").unwrap(), Some(WHITE_PAWN));
    assert_eq!(board.get_piece("e2").unwrap(), None);

    assert_eq!(
        recorder.events,
        vec![
            Event::SquareChanged("e2".to_string(), None),
            Event::SquareChanged("e4".to_string(), Some(WHITE_PAWN)),
            Event::Ended,
        ]
    );
}

#[test]
fn test_drop_off_board_restores_origin() {
    let mut board = BoardState::initial();
    let mut drag = DragController::new();
    let mut recorder = Recorder::default();

    drag.handle_pointer_down(&mut board, "e2", &mut recorder).unwrap();
    let outcome = drag.handle_pointer_up(&mut board, None::<Square>, &mut recorder);

    assert_eq!(
        outcome,
        DropOutcome::Cancelled {
            origin: sq("e2"),
            piece: WHITE_PAWN,
        }
    );
    assert!(!drag.is_dragging());
    assert_eq!(board, BoardState::initial());
    assert_eq!(
        recorder.events,
        vec![
            Event::SquareChanged("e2".to_string(), None),
            Event::SquareChanged("e2".to_string(), Some(WHITE_PAWN)),
            Event::Ended,
        ]
    );
}

#[test]
fn test_drop_on_invalid_label_cancels() {
    let mut board = BoardState::initial();
    let mut drag = DragController::new();

    drag.handle_pointer_down(&mut board, "b1", &mut ()).unwrap();
    let outcome = drag.handle_pointer_up(&mut board, Some("x9"), &mut ());

    assert!(matches!(outcome, DropOutcome::Cancelled { .. }));
    assert_eq!(board, BoardState::initial());
}

#[test]
fn test_pointer_down_on_empty_square_is_ignored() {
    let mut board = BoardState::initial();
    let mut drag = DragController::new();
    let mut recorder = Recorder::default();

    let started = drag
        .handle_pointer_down(&mut board, "e4", &mut recorder)
        .unwrap();
    assert!(!started);
    assert_eq!(*drag.state(), DragState::Idle);
    assert!(recorder.events.is_empty());
}

#[test]
fn test_pointer_down_while_dragging_is_ignored() {
    let mut board = BoardState::initial();
    let mut drag = DragController::new();
    let mut recorder = Recorder::default();

    drag.handle_pointer_down(&mut board, "e2", &mut recorder).unwrap();
    let again = drag
        .handle_pointer_down(&mut board, "d2", &mut recorder)
        .unwrap();

    assert!(!again);
    assert_eq!(drag.session().map(|s| s.origin), Some(sq("e2")));
    assert_eq!(board.get_piece("d2").unwrap(), Some(WHITE_PAWN));
    assert_eq!(recorder.events.len(), 1);
}

#[test]
fn test_pointer_down_invalid_square_errors() {
    let mut board = BoardState::initial();
    let mut drag = DragController::new();

    assert!(drag.handle_pointer_down(&mut board, "j2", &mut ()).is_err());
    assert!(!drag.is_dragging());
    assert_eq!(board, BoardState::initial());
}

#[test]
fn test_pointer_move_updates_position_only() {
    let mut board = BoardState::initial();
    let mut drag = DragController::new();
    let mut recorder = Recorder::default();

    // Idle 時忽略
    drag.handle_pointer_move(PointerPosition { x: 1.0, y: 1.0 }, &mut recorder);
    assert!(recorder.events.is_empty());

    drag.handle_pointer_down(&mut board, "g1", &mut recorder).unwrap();
    let after_lift = board.clone();

    let pos = PointerPosition { x: 120.5, y: 64.0 };
    drag.handle_pointer_move(pos, &mut recorder);

    assert_eq!(board, after_lift);
    assert_eq!(drag.session().and_then(|s| s.position), Some(pos));
    assert_eq!(recorder.events.last(), Some(&Event::Visual(pos)));
}

#[test]
fn test_pointer_up_while_idle_is_ignored() {
    let mut board = BoardState::initial();
    let mut drag = DragController::new();
    let mut recorder = Recorder::default();

    let outcome = drag.handle_pointer_up(&mut board, Some("e4"), &mut recorder);
    assert_eq!(outcome, DropOutcome::Ignored);
    assert_eq!(board, BoardState::initial());
    assert!(recorder.events.is_empty());
}

#[test]
fn test_drop_on_occupied_square_replaces_occupant() {
    let mut board = BoardState::initial();
    let mut drag = DragController::new();

    drag.handle_pointer_down(&mut board, "d1", &mut ()).unwrap();
    drag.handle_pointer_up(&mut board, Some("d7"), &mut ());

    assert_eq!(
        board.get_piece("d7").unwrap(),
        Some(Piece::new(Side::White, PieceKind::Queen))
    );
    assert_eq!(board.get_piece("d1").unwrap(), None);
    assert_eq!(board.piece_count(), 31);
}

#[test]
fn test_cancel_restores_piece() {
    let mut board = BoardState::initial();
    let mut drag = DragController::new();
    let mut recorder = Recorder::default();

    drag.handle_pointer_down(&mut board, "b8", &mut recorder).unwrap();
    let outcome = drag.cancel(&mut board, &mut recorder);

    assert!(matches!(outcome, DropOutcome::Cancelled { .. }));
    assert_eq!(board, BoardState::initial());
    assert_eq!(recorder.events.last(), Some(&Event::Ended));
}

#[test]
fn test_chessboard_forwards_pointer_events() {
    let mut board = Chessboard::new("board-0");
    let mut recorder = Recorder::default();
    board.fill(&mut recorder);
    assert_eq!(recorder.events.len(), 32, "fill 應通知 32 個變動格子");
    recorder.events.clear();

    assert!(board.handle_pointer_down("e2", &mut recorder).unwrap());
    board.handle_pointer_move(PointerPosition { x: 5.0, y: 6.0 }, &mut recorder);
    board.handle_pointer_up(Some("e4"), &mut recorder);

    assert_eq!(board.state().get_piece("e4").unwrap(), Some(WHITE_PAWN));
    assert_eq!(recorder.events.len(), 4);
}

#[test]
fn test_chessboard_direct_mutations_notify() {
    let mut board = Chessboard::new("board-0");
    let mut recorder = Recorder::default();

    board.fill(&mut recorder);
    recorder.events.clear();

    board.move_piece("e2", "e4", &mut recorder).unwrap();
    assert_eq!(
        recorder.events,
        vec![
            Event::SquareChanged("e2".to_string(), None),
            Event::SquareChanged("e4".to_string(), Some(WHITE_PAWN)),
        ]
    );
    recorder.events.clear();

    // 空格子清除不通知
    board.clear_piece("e2", &mut recorder).unwrap();
    assert!(recorder.events.is_empty());

    assert!(board.move_piece("e2", "e3", &mut recorder).is_err());
    assert!(recorder.events.is_empty());

    board.clear(&mut recorder);
    assert_eq!(recorder.events.len(), 32);
    assert!(board.state().is_empty());
}

#[test]
fn test_chessboard_decode_during_drag_cancels_first() {
    let mut board = Chessboard::new("board-0");
    let mut recorder = Recorder::default();
    board.fill(&mut ());

    board.handle_pointer_down("a2", &mut recorder).unwrap();
    recorder.events.clear();

    board.decode(INITIAL_POSITION, &mut recorder).unwrap();

    assert!(!board.drag().is_dragging());
    assert_eq!(board.state(), &BoardState::initial());
    assert_eq!(
        recorder.events,
        vec![
            Event::SquareChanged("a2".to_string(), Some(WHITE_PAWN)),
            Event::Ended,
        ]
    );
}

#[test]
fn test_invalid_pointer_down_while_dragging_is_ignored() {
    let mut board = BoardState::initial();
    let mut drag = DragController::new();

    drag.handle_pointer_down(&mut board, "e2", &mut ()).unwrap();
    let again = drag.handle_pointer_down(&mut board, "z0", &mut ()).unwrap();

    assert!(!again);
    assert_eq!(drag.session().map(|s| s.origin), Some(sq("e2")));
}

#[test]
fn test_chessboard_set_piece_during_drag_cancels_first() {
    let mut board = Chessboard::new("board-0");
    let mut recorder = Recorder::default();
    let queen = Piece::new(Side::White, PieceKind::Queen);
    board.fill(&mut ());

    board.handle_pointer_down("e2", &mut recorder).unwrap();
    recorder.events.clear();

    board.set_piece("e2", queen, &mut recorder).unwrap();
    assert!(!board.drag().is_dragging());
    assert_eq!(
        recorder.events,
        vec![
            Event::SquareChanged("e2".to_string(), Some(WHITE_PAWN)),
            Event::Ended,
            Event::SquareChanged("e2".to_string(), Some(queen)),
        ]
    );

    // 後續放開不再覆寫 e2
    let outcome = board.handle_pointer_up(None::<Square>, &mut recorder);
    assert_eq!(outcome, DropOutcome::Ignored);
    assert_eq!(board.state().get_piece("e2").unwrap(), Some(queen));
}

#[test]
fn test_chessboard_move_during_drag_keeps_lifted_piece() {
    let mut board = Chessboard::new("board-0");
    board.fill(&mut ());

    board.handle_pointer_down("d2", &mut ()).unwrap();
    board.move_piece("e2", "d2", &mut ()).unwrap();
    board.handle_pointer_up(None::<Square>, &mut ());

    assert_eq!(board.state().get_piece("d2").unwrap(), Some(WHITE_PAWN));
    assert_eq!(board.state().get_piece("e2").unwrap(), None);
    assert_eq!(board.state().piece_count(), 31);
}
