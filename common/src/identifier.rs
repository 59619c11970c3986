//! ブランド識別モジュール
//!
//! SKUの桁数と先頭文字からブランドを判定する。

use crate::tokenizer::tokenize;
use crate::types::IdentificationResult;
use serde::{Deserialize, Serialize};

/// 識別対象のブランド
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Brand {
    /// 7桁、1始まり
    Todolivro,
    /// 6桁、3始まり
    HappyBooks,
}

impl Brand {
    /// SKUのブランドを判定する（Todolivroが優先）
    ///
    /// 長さはUTF-16のコード単位で数える（ブラウザの文字列長と同じ）。
    pub fn classify(sku: &str) -> Option<Brand> {
        let len = sku.encode_utf16().count();
        if len == 7 && sku.starts_with('1') {
            Some(Brand::Todolivro)
        } else if len == 6 && sku.starts_with('3') {
            Some(Brand::HappyBooks)
        } else {
            None
        }
    }

    /// 表示名
    pub fn display_name(&self) -> &'static str {
        match self {
            Brand::Todolivro => "Todolivro",
            Brand::HappyBooks => "Happy Books",
        }
    }
}

impl std::fmt::Display for Brand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// SKUリストをブランドごとに振り分ける
pub fn identify(skus: &str) -> IdentificationResult {
    let mut result = IdentificationResult::default();

    for sku in tokenize(skus, true) {
        match Brand::classify(&sku) {
            Some(Brand::Todolivro) => result.todolivro.push(sku),
            Some(Brand::HappyBooks) => result.happy_books.push(sku),
            None => result.unidentified.push(sku),
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identify_scenario() {
        let result = identify("1234567 333333 99");
        assert_eq!(result.todolivro, vec!["1234567"]);
        assert_eq!(result.happy_books, vec!["333333"]);
        assert_eq!(result.unidentified, vec!["99"]);
    }

    #[test]
    fn test_classify_rules() {
        assert_eq!(Brand::classify("1000000"), Some(Brand::Todolivro));
        assert_eq!(Brand::classify("1abcdef"), Some(Brand::Todolivro));
        assert_eq!(Brand::classify("300000"), Some(Brand::HappyBooks));
        // 桁数違い
        assert_eq!(Brand::classify("100000"), None);
        assert_eq!(Brand::classify("3000000"), None);
        assert_eq!(Brand::classify("12345678"), None);
        // 先頭文字違い
        assert_eq!(Brand::classify("2234567"), None);
        assert_eq!(Brand::classify("433333"), None);
    }

    #[test]
    fn test_classify_non_ascii_length_in_utf16_units() {
        // 1文字 = 1単位
        assert_eq!(Brand::classify("1ção456"), Some(Brand::Todolivro));
        assert_eq!(Brand::classify("3ção45"), Some(Brand::HappyBooks));
        // サロゲートペアは2単位
        assert_eq!(Brand::classify("1😀2345"), Some(Brand::Todolivro));
        assert_eq!(Brand::classify("1😀23456"), None);
        assert_eq!(Brand::classify("3😀123"), Some(Brand::HappyBooks));
    }

    #[test]
    fn test_identify_dedupes() {
        let result = identify("1234567 1234567 333333");
        assert_eq!(result.todolivro, vec!["1234567"]);
        assert_eq!(result.happy_books, vec!["333333"]);
    }

    #[test]
    fn test_every_sku_lands_in_one_bucket() {
        let input = "1234567 333333 99 1111111 3 345678 abc 1234567";
        let result = identify(input);
        let unique = tokenize(input, true);

        let total = result.todolivro.len() + result.happy_books.len() + result.unidentified.len();
        assert_eq!(total, unique.len());
        for sku in &unique {
            let hits = [&result.todolivro, &result.happy_books, &result.unidentified]
                .iter()
                .filter(|bucket| bucket.contains(sku))
                .count();
            assert_eq!(hits, 1, "{} が複数/0個のバケットにある", sku);
        }
    }

    #[test]
    fn test_brand_display() {
        assert_eq!(Brand::HappyBooks.to_string(), "Happy Books");
    }
}
