//! ISBN検証モジュール
//!
//! チェックディジットは検証しない。978で始まる13桁の数字列のみを有効とする。

use crate::tokenizer::{self, tokenize};
use crate::types::{CodeValue, ValidationResult};
use regex::Regex;

lazy_static::lazy_static! {
    static ref ISBN_RE: Regex = Regex::new(r"^978[0-9]{10}$").unwrap();
}

/// トークンがISBN-13形式（978 + 10桁）か判定
pub fn is_isbn_like(token: &str) -> bool {
    ISBN_RE.is_match(token)
}

/// 入力テキストのコードを検証する
///
/// - 有効/無効の判定は重複除去後のトークンに対して行う
/// - 重複は除去前のトークン列から数える
pub fn validate(raw: &str) -> ValidationResult {
    let all = tokenize(raw, false);
    if all.is_empty() {
        return ValidationResult::default();
    }

    let duplicated: Vec<CodeValue<usize>> = tokenizer::occurrences(&all)
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(code, count)| CodeValue::new(code, count))
        .collect();

    let (valid, invalid): (Vec<String>, Vec<String>) = tokenizer::dedupe(all)
        .into_iter()
        .partition(|code| is_isbn_like(code));

    tracing::debug!(
        valid = valid.len(),
        invalid = invalid.len(),
        duplicated = duplicated.len(),
        "validated codes"
    );

    ValidationResult { valid, invalid, duplicated }
}
