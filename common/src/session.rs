//! モードごとの画面状態
//!
//! 各モードは「入力・結果」を1つのレコードで持つ。結果がNoneなら未評価、
//! Some(空の結果)なら「評価済みだが該当なし」を表す。

use crate::bucket::Bucket;
use crate::error::Result;
use crate::types::{ComparisonResult, IdentificationResult, StockResult, ValidationResult};
use crate::{compare, identify, match_stock, validate};
use serde::{Deserialize, Serialize};

/// 最低在庫数の初期値
pub const DEFAULT_MINIMUM: &str = "1";

/// 動作モード
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Validator,
    Comparator,
    Stock,
    Identifier,
}

impl Mode {
    pub const ALL: [Mode; 4] = [Mode::Validator, Mode::Comparator, Mode::Stock, Mode::Identifier];

    /// 画面タイトル
    pub fn title(&self) -> &'static str {
        match self {
            Mode::Validator => "Validador ISBN",
            Mode::Comparator => "Comparador de Listas",
            Mode::Stock => "Validador de Estoque",
            Mode::Identifier => "Identificador",
        }
    }

    /// 画面の説明文
    pub fn description(&self) -> &'static str {
        match self {
            Mode::Validator => {
                "Verifique quais códigos seguem o Padrão Internacional de Números de Livros (ISBN)"
            }
            Mode::Comparator => "Compare duas listas para encontrar diferenças e códigos em comum.",
            Mode::Stock => "Encontre produtos com estoque abaixo do mínimo necessário.",
            Mode::Identifier => "Identifique a qual marca pertence os SKUs.",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Validator => write!(f, "validator"),
            Mode::Comparator => write!(f, "comparator"),
            Mode::Stock => write!(f, "stock"),
            Mode::Identifier => write!(f, "identifier"),
        }
    }
}

impl std::str::FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "validator" | "validate" | "isbn" => Ok(Mode::Validator),
            "comparator" | "compare" => Ok(Mode::Comparator),
            "stock" => Ok(Mode::Stock),
            "identifier" | "identify" => Ok(Mode::Identifier),
            _ => Err(format!(
                "Unknown mode: {}. Use validator, comparator, stock, or identifier",
                s
            )),
        }
    }
}

/// ISBN検証モードの状態
#[derive(Debug, Clone, Default)]
pub struct ValidatorState {
    pub input: String,
    result: Option<ValidationResult>,
}

impl ValidatorState {
    pub fn evaluate(&mut self) -> &ValidationResult {
        self.result.insert(validate(&self.input))
    }

    pub fn result(&self) -> Option<&ValidationResult> {
        self.result.as_ref()
    }

    pub fn is_evaluated(&self) -> bool {
        self.result.is_some()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn buckets(&self) -> Vec<Bucket> {
        self.result.as_ref().map(|r| r.buckets()).unwrap_or_default()
    }
}

/// リスト比較モードの状態
#[derive(Debug, Clone, Default)]
pub struct ComparatorState {
    pub list_a: String,
    pub list_b: String,
    result: Option<ComparisonResult>,
}

impl ComparatorState {
    pub fn evaluate(&mut self) -> &ComparisonResult {
        self.result.insert(compare(&self.list_a, &self.list_b))
    }

    pub fn result(&self) -> Option<&ComparisonResult> {
        self.result.as_ref()
    }

    pub fn is_evaluated(&self) -> bool {
        self.result.is_some()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn buckets(&self) -> Vec<Bucket> {
        self.result.as_ref().map(|r| r.buckets()).unwrap_or_default()
    }
}

/// 在庫判定モードの状態
#[derive(Debug, Clone)]
pub struct StockState {
    pub codes: String,
    pub quantities: String,
    pub minimum: String,
    /// 評価結果と、評価時点の最低在庫数テキスト
    result: Option<(StockResult, String)>,
}

impl Default for StockState {
    fn default() -> Self {
        Self {
            codes: String::new(),
            quantities: String::new(),
            minimum: DEFAULT_MINIMUM.to_string(),
            result: None,
        }
    }
}

impl StockState {
    /// 最低在庫数の初期値を指定して作る
    pub fn with_minimum(minimum: impl Into<String>) -> Self {
        Self {
            minimum: minimum.into(),
            ..Default::default()
        }
    }

    pub fn evaluate(&mut self) -> &StockResult {
        let result = match_stock(&self.codes, &self.quantities, &self.minimum);
        &self.result.insert((result, self.minimum.clone())).0
    }

    pub fn result(&self) -> Option<&StockResult> {
        self.result.as_ref().map(|(r, _)| r)
    }

    pub fn is_evaluated(&self) -> bool {
        self.result.is_some()
    }

    /// 入力を初期状態に戻す（最低在庫数は初期値の"1"）
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn buckets(&self) -> Vec<Bucket> {
        self.result
            .as_ref()
            .map(|(r, minimum)| r.buckets(minimum))
            .unwrap_or_default()
    }
}

/// ブランド識別モードの状態
///
/// 他のモードと異なり、入力の確定（デバウンス後）で自動評価される。
#[derive(Debug, Clone, Default)]
pub struct IdentifierState {
    pub input: String,
    result: Option<IdentificationResult>,
}

impl IdentifierState {
    /// 確定した入力で評価する
    ///
    /// 空入力なら未評価状態に戻す（空の3バケットは表示しない）。
    pub fn settle(&mut self) -> Option<&IdentificationResult> {
        if self.input.trim().is_empty() {
            self.result = None;
            return None;
        }
        let result = self.result.insert(identify(&self.input));
        Some(&*result)
    }

    pub fn result(&self) -> Option<&IdentificationResult> {
        self.result.as_ref()
    }

    pub fn is_evaluated(&self) -> bool {
        self.result.is_some()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn buckets(&self) -> Vec<Bucket> {
        self.result.as_ref().map(|r| r.buckets()).unwrap_or_default()
    }
}

/// 現在のモードの状態への参照
#[derive(Debug, Clone, Copy)]
pub enum ActiveMode<'a> {
    Validator(&'a ValidatorState),
    Comparator(&'a ComparatorState),
    Stock(&'a StockState),
    Identifier(&'a IdentifierState),
}

impl ActiveMode<'_> {
    pub fn mode(&self) -> Mode {
        match self {
            ActiveMode::Validator(_) => Mode::Validator,
            ActiveMode::Comparator(_) => Mode::Comparator,
            ActiveMode::Stock(_) => Mode::Stock,
            ActiveMode::Identifier(_) => Mode::Identifier,
        }
    }

    pub fn is_evaluated(&self) -> bool {
        match self {
            ActiveMode::Validator(s) => s.is_evaluated(),
            ActiveMode::Comparator(s) => s.is_evaluated(),
            ActiveMode::Stock(s) => s.is_evaluated(),
            ActiveMode::Identifier(s) => s.is_evaluated(),
        }
    }

    /// 評価済みならバケット、未評価なら空
    pub fn buckets(&self) -> Vec<Bucket> {
        match self {
            ActiveMode::Validator(s) => s.buckets(),
            ActiveMode::Comparator(s) => s.buckets(),
            ActiveMode::Stock(s) => s.buckets(),
            ActiveMode::Identifier(s) => s.buckets(),
        }
    }

    /// 結果をJSON化する（未評価ならNone）
    pub fn result_json(&self) -> Result<Option<String>> {
        let json = match self {
            ActiveMode::Validator(s) => s.result().map(serde_json::to_string_pretty),
            ActiveMode::Comparator(s) => s.result().map(serde_json::to_string_pretty),
            ActiveMode::Stock(s) => s.result().map(serde_json::to_string_pretty),
            ActiveMode::Identifier(s) => s.result().map(serde_json::to_string_pretty),
        };
        Ok(json.transpose()?)
    }
}

/// 4モード分の状態
///
/// モードを切り替えても他モードの入力・結果は保持される。
#[derive(Debug, Clone, Default)]
pub struct Session {
    mode: Mode,
    pub validator: ValidatorState,
    pub comparator: ComparatorState,
    pub stock: StockState,
    pub identifier: IdentifierState,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// モードを切り替える
    ///
    /// 識別モードに入ったときは現在の入力で即座に評価する。
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        if mode == Mode::Identifier {
            self.identifier.settle();
        }
    }

    pub fn active(&self) -> ActiveMode<'_> {
        match self.mode {
            Mode::Validator => ActiveMode::Validator(&self.validator),
            Mode::Comparator => ActiveMode::Comparator(&self.comparator),
            Mode::Stock => ActiveMode::Stock(&self.stock),
            Mode::Identifier => ActiveMode::Identifier(&self.identifier),
        }
    }

    /// デバウンス後の識別評価（識別モード表示中のみ）
    pub fn settle_identifier(&mut self) -> bool {
        if self.mode != Mode::Identifier {
            return false;
        }
        self.identifier.settle();
        true
    }

    pub fn buckets(&self) -> Vec<Bucket> {
        self.active().buckets()
    }
}
