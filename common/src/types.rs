//! 分類結果の型定義
//!
//! 各モードの出力:
//! - ValidationResult: ISBN検証（有効・無効・重複）
//! - ComparisonResult: リスト比較（共通・Aのみ・Bのみ）
//! - StockResult: 在庫判定（不足・充足）
//! - IdentificationResult: ブランド識別（Todolivro・Happy Books・未識別）

use serde::{Deserialize, Serialize};

/// コードと付随する値（重複回数や在庫数）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeValue<V> {
    pub code: String,
    pub value: V,
}

impl<V> CodeValue<V> {
    pub fn new(code: impl Into<String>, value: V) -> Self {
        Self { code: code.into(), value }
    }
}

/// ISBN検証結果
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub valid: Vec<String>,
    pub invalid: Vec<String>,
    /// 2回以上出現したコードと出現回数
    pub duplicated: Vec<CodeValue<usize>>,
}

/// リスト比較結果
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    pub common: Vec<String>,
    pub only_in_a: Vec<String>,
    pub only_in_b: Vec<String>,
}

/// 在庫判定結果
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockResult {
    pub insufficient: Vec<CodeValue<f64>>,
    pub sufficient: Vec<CodeValue<f64>>,
    /// 数量が数値に変換できず除外したペア数
    pub skipped: usize,
    /// 長い側のリストで対応相手がなく無視したトークン数
    pub truncated: usize,
}

/// ブランド識別結果
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentificationResult {
    pub todolivro: Vec<String>,
    pub happy_books: Vec<String>,
    pub unidentified: Vec<String>,
}
