//! 版面載入器
//!
//! 讀寫描述一組棋盤的 TOML，例如：
//! ```toml
//! rows = 1
//! columns = 2
//!
//! [[boards]]
//! id = "board-0-0"
//! fill = true
//!
//! [[boards]]
//! id = "board-0-1"
//! position = "RNBQKBNRPPPPPPPP................................pppppppprnbqkbnr"
//! ```

use crate::boards::Chessboards;
use crate::error::{Context, LoadError, Result};
use crate::loader_schema::{BoardEntry, LayoutToml};
use tracing::debug;

const LAYOUT_FORMAT: &str = "layout.toml";

/// 反序列化 TOML 並建立棋盤集合
pub fn load_layout(layout_toml: &str) -> Result<Chessboards> {
    let layout: LayoutToml =
        toml::from_str(layout_toml).map_err(|e| LoadError::DeserializeError {
            format: LAYOUT_FORMAT.to_string(),
            reason: e.to_string(),
        })?;
    build_layout(&layout)
}

/// 依版面設定建立棋盤集合
pub fn build_layout(layout: &LayoutToml) -> Result<Chessboards> {
    let is_grid = layout.rows > 0 && layout.columns > 0;
    let mut boards = if is_grid {
        Chessboards::grid(layout.rows, layout.columns)
    } else {
        Chessboards::new()
    };

    for entry in &layout.boards {
        // 網格之外以 add() 加入的棋盤，id 須接續目前數量
        let appended = boards.get(&entry.id).is_none()
            && entry.id == format!("board-{}", boards.len());
        if !is_grid || appended {
            boards.add();
        }
        apply_entry(&mut boards, entry).context(format!("套用棋盤設定：{}", entry.id))?;
    }

    debug!("載入版面：{} 個棋盤", boards.len());
    Ok(boards)
}

fn apply_entry(boards: &mut Chessboards, entry: &BoardEntry) -> Result<()> {
    let board = boards
        .get_mut(&entry.id)
        .ok_or_else(|| LoadError::UnknownBoard {
            id: entry.id.clone(),
        })?;

    match (&entry.position, entry.fill) {
        (Some(position), _) => board.decode(position, &mut ())?,
        (None, true) => board.fill(&mut ()),
        (None, false) => {}
    }
    Ok(())
}

/// 將棋盤集合轉為版面設定，每個棋盤都寫入目前的編碼
pub fn to_layout(boards: &Chessboards) -> LayoutToml {
    LayoutToml {
        rows: boards.rows(),
        columns: boards.columns(),
        boards: boards
            .boards()
            .iter()
            .map(|board| BoardEntry {
                id: board.id().to_string(),
                position: Some(board.encode()),
                fill: false,
            })
            .collect(),
    }
}

/// 序列化為 TOML
pub fn save_layout(boards: &Chessboards) -> Result<String> {
    let layout = to_layout(boards);
    let text = toml::to_string(&layout).map_err(|e| LoadError::SerializeError {
        format: LAYOUT_FORMAT.to_string(),
        reason: e.to_string(),
    })?;
    Ok(text)
}
