//! 表示・出力用のバケット
//!
//! 分類結果を名前付きの区分に変換し、テキスト出力の内容とファイル名を決める。

use crate::types::{
    CodeValue, ComparisonResult, IdentificationResult, StockResult, ValidationResult,
};
use regex::Regex;
use serde::Serialize;

lazy_static::lazy_static! {
    static ref WHITESPACE_RE: Regex = Regex::new(r"\s+").unwrap();
    // パス区切りとファイル名に使えない文字、連続したドット
    static ref UNSAFE_NAME_RE: Regex = Regex::new(r#"[/\\:*?"<>|\x00-\x1F]|\.{2,}"#).unwrap();
}

/// 空のバケットに表示する文言
pub const EMPTY_PLACEHOLDER: &str = "Nenhum código nesta categoria.";

/// 重複回数のラベル
pub const REPEAT_LABEL: &str = "Repetições";

/// 在庫数のラベル
pub const STOCK_LABEL: &str = "Estoque";

/// バケットの中身
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum BucketItems {
    Codes(Vec<String>),
    /// コードと表示用に整形済みの値
    Values(Vec<CodeValue<String>>),
}

/// 名前付きの出力区分
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Bucket {
    pub title: String,
    pub items: BucketItems,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_label: Option<String>,
}

impl Bucket {
    pub fn codes(title: impl Into<String>, codes: &[String]) -> Self {
        Self {
            title: title.into(),
            items: BucketItems::Codes(codes.to_vec()),
            value_label: None,
        }
    }

    pub fn counts(title: impl Into<String>, items: &[CodeValue<usize>], label: &str) -> Self {
        Self {
            title: title.into(),
            items: BucketItems::Values(
                items
                    .iter()
                    .map(|i| CodeValue::new(i.code.clone(), i.value.to_string()))
                    .collect(),
            ),
            value_label: Some(label.to_string()),
        }
    }

    pub fn quantities(title: impl Into<String>, items: &[CodeValue<f64>], label: &str) -> Self {
        Self {
            title: title.into(),
            items: BucketItems::Values(
                items
                    .iter()
                    .map(|i| CodeValue::new(i.code.clone(), format_number(i.value)))
                    .collect(),
            ),
            value_label: Some(label.to_string()),
        }
    }

    pub fn len(&self) -> usize {
        match &self.items {
            BucketItems::Codes(codes) => codes.len(),
            BucketItems::Values(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 1件1行の表示・出力用テキスト
    pub fn lines(&self) -> Vec<String> {
        match &self.items {
            BucketItems::Codes(codes) => codes.clone(),
            BucketItems::Values(values) => values
                .iter()
                .map(|item| match &self.value_label {
                    Some(label) => format!("{}\t{}: {}", item.code, label, item.value),
                    None => item.code.clone(),
                })
                .collect(),
        }
    }

    /// 出力ファイルの内容（改行区切り、末尾改行なし）
    pub fn export_text(&self) -> String {
        self.lines().join("\n")
    }

    /// 出力ファイル名（空白を_に置換して小文字化、.txt付き）
    pub fn file_name(&self) -> String {
        file_name_for(&self.title)
    }

    /// ディレクトリにテキストファイルとして書き出す
    ///
    /// 空のバケットは書き出さずNoneを返す。
    #[cfg(not(feature = "wasm"))]
    pub fn write_to(&self, dir: &std::path::Path) -> crate::Result<Option<std::path::PathBuf>> {
        if self.is_empty() {
            return Ok(None);
        }
        std::fs::create_dir_all(dir)?;
        let path = dir.join(self.file_name());
        std::fs::write(&path, self.export_text())?;
        Ok(Some(path))
    }
}

/// タイトルから出力ファイル名を作る
///
/// 最低在庫数の入力がタイトルに入るため、パスとして解釈される文字は_に置換し、
/// 常に1つのパス要素になるようにする。
pub fn file_name_for(title: &str) -> String {
    let name = WHITESPACE_RE.replace_all(title, "_");
    let name = UNSAFE_NAME_RE.replace_all(&name, "_");
    format!("{}.txt", name.to_lowercase())
}

/// 数量の表示形式（整数は小数点なし、無限大はInfinity）
///
/// 1e21以上と1e-6未満は指数表記にする（"1e+21", "1.5e-7"）。
pub fn format_number(value: f64) -> String {
    if value.is_infinite() {
        if value > 0.0 { "Infinity".into() } else { "-Infinity".into() }
    } else if value == 0.0 {
        // -0 も 0 と表示
        "0".into()
    } else if value.abs() >= 1e21 || value.abs() < 1e-6 {
        let formatted = format!("{:e}", value);
        match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => formatted,
        }
    } else {
        value.to_string()
    }
}

impl ValidationResult {
    pub fn buckets(&self) -> Vec<Bucket> {
        vec![
            Bucket::codes("Códigos Válidos", &self.valid),
            Bucket::codes("Códigos Inválidos", &self.invalid),
            Bucket::counts("Códigos Duplicados", &self.duplicated, REPEAT_LABEL),
        ]
    }
}

impl ComparisonResult {
    pub fn buckets(&self) -> Vec<Bucket> {
        vec![
            Bucket::codes("Apenas na Lista A", &self.only_in_a),
            Bucket::codes("Apenas na Lista B", &self.only_in_b),
            Bucket::codes("Códigos em Comum", &self.common),
        ]
    }
}

impl StockResult {
    /// タイトルには入力された最低在庫数のテキストをそのまま使う
    pub fn buckets(&self, minimum: &str) -> Vec<Bucket> {
        vec![
            Bucket::quantities(
                format!("Produtos com menos de {} de estoque", minimum),
                &self.insufficient,
                STOCK_LABEL,
            ),
            Bucket::quantities(
                format!("Produtos com {} ou mais de estoque", minimum),
                &self.sufficient,
                STOCK_LABEL,
            ),
        ]
    }
}

impl IdentificationResult {
    pub fn buckets(&self) -> Vec<Bucket> {
        vec![
            Bucket::codes("Todolivro", &self.todolivro),
            Bucket::codes("Happy Books", &self.happy_books),
            Bucket::codes("Não Identificado", &self.unidentified),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_from_title() {
        assert_eq!(file_name_for("Códigos Válidos"), "códigos_válidos.txt");
        assert_eq!(file_name_for("Happy   Books"), "happy_books.txt");
        assert_eq!(
            file_name_for("Produtos com menos de 3 de estoque"),
            "produtos_com_menos_de_3_de_estoque.txt"
        );
    }

    #[test]
    fn test_file_name_is_single_path_component() {
        assert_eq!(
            file_name_for("Produtos com menos de 1/2 de estoque"),
            "produtos_com_menos_de_1_2_de_estoque.txt"
        );
        assert_eq!(file_name_for("a\\b:c*d?e\"f<g>h|i"), "a_b_c_d_e_f_g_h_i.txt");

        for minimum in ["1 ../x", "1/../../x", "..", "1\\..\\y"] {
            let title = format!("Produtos com menos de {} de estoque", minimum);
            let name = file_name_for(&title);
            let path = std::path::Path::new(&name);
            assert_eq!(path.components().count(), 1, "パス要素が1つではない: {}", name);
            assert!(!name.contains(".."), "親ディレクトリ参照が残っている: {}", name);
        }
    }

    #[test]
    fn test_export_text_plain_codes() {
        let bucket = Bucket::codes("Todolivro", &["1234567".to_string(), "1000000".to_string()]);
        assert_eq!(bucket.export_text(), "1234567\n1000000");
    }

    #[test]
    fn test_export_text_with_label() {
        let items = vec![CodeValue::new("X", 5.0), CodeValue::new("Z", 1.5)];
        let bucket = Bucket::quantities("Estoque", &items, STOCK_LABEL);
        assert_eq!(bucket.export_text(), "X\tEstoque: 5\nZ\tEstoque: 1.5");
    }

    #[test]
    fn test_export_text_without_label_keeps_codes_only() {
        let mut bucket = Bucket::counts("Dup", &[CodeValue::new("A", 2)], REPEAT_LABEL);
        bucket.value_label = None;
        assert_eq!(bucket.export_text(), "A");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(10.0), "10");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(0.25), "0.25");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn test_format_number_extremes_use_exponent() {
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(1.5e21), "1.5e+21");
        assert_eq!(format_number(-2e22), "-2e+22");
        assert_eq!(format_number(1e-7), "1e-7");
        assert_eq!(format_number(-1.5e-7), "-1.5e-7");
        // 境界の内側は通常表記
        assert_eq!(format_number(1e20), "100000000000000000000");
        assert_eq!(format_number(0.000001), "0.000001");
    }

    #[test]
    fn test_validation_buckets() {
        let result = crate::validate("9781234567890 9781234567890 abc");
        let buckets = result.buckets();
        assert_eq!(buckets.len(), 3);
        assert_eq!(buckets[0].title, "Códigos Válidos");
        assert_eq!(buckets[2].export_text(), "9781234567890\tRepetições: 2");
    }

    #[test]
    fn test_stock_bucket_titles_use_minimum_text() {
        let result = crate::match_stock("X Y", "5 1", "3");
        let buckets = result.buckets("3");
        assert_eq!(buckets[0].title, "Produtos com menos de 3 de estoque");
        assert_eq!(buckets[1].title, "Produtos com 3 ou mais de estoque");
        assert_eq!(buckets[0].export_text(), "Y\tEstoque: 1");
    }

    #[test]
    fn test_comparison_bucket_order() {
        let titles: Vec<String> = crate::compare("A", "B")
            .buckets()
            .into_iter()
            .map(|b| b.title)
            .collect();
        assert_eq!(titles, vec!["Apenas na Lista A", "Apenas na Lista B", "Códigos em Comum"]);
    }
}
