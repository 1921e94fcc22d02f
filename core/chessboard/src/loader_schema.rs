//! 版面 TOML 的資料結構定義

use serde::{Deserialize, Serialize};

/// 整個版面
///
/// `rows`、`columns` 皆大於 0 時為網格版面，否則為長版面（棋盤依 `boards` 順序逐一加入）。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutToml {
    #[serde(default)]
    pub rows: usize,
    #[serde(default)]
    pub columns: usize,
    #[serde(default)]
    pub boards: Vec<BoardEntry>,
}

/// 單一棋盤的設定
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoardEntry {
    pub id: String,
    /// 64 字元編碼；與 `fill` 同時出現時以此為準
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub fill: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}
