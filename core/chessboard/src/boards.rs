//! 多棋盤集合

use crate::chessboard::Chessboard;

/// 一組彼此獨立的棋盤
///
/// `grid` 以列、欄排成網格（id 為 `board-{row}-{col}`），
/// `new` 則是單欄的長版面，之後以 `add` 逐一加入（id 為 `board-{n}`）。
#[derive(Debug, Default)]
pub struct Chessboards {
    boards: Vec<Chessboard>,
    rows: usize,
    columns: usize,
}

impl Chessboards {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grid(rows: usize, columns: usize) -> Self {
        let boards = (0..rows)
            .flat_map(|row| {
                (0..columns).map(move |col| Chessboard::new(format!("board-{row}-{col}")))
            })
            .collect();
        Self {
            boards,
            rows,
            columns,
        }
    }

    /// 加入新棋盤並回傳之；id 以目前數量編號
    pub fn add(&mut self) -> &mut Chessboard {
        let id = format!("board-{}", self.boards.len());
        self.boards.push(Chessboard::new(id));
        let last = self.boards.len() - 1;
        &mut self.boards[last]
    }

    pub fn boards(&self) -> &[Chessboard] {
        &self.boards
    }

    pub fn boards_mut(&mut self) -> &mut [Chessboard] {
        &mut self.boards
    }

    pub fn get(&self, id: &str) -> Option<&Chessboard> {
        self.boards.iter().find(|board| board.id() == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Chessboard> {
        self.boards.iter_mut().find(|board| board.id() == id)
    }

    /// 網格的列數；長版面為 0
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// 網格的欄數；長版面為 0
    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn len(&self) -> usize {
        self.boards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }
}
