//! 入力テキストのトークン分割
//!
//! 空白・カンマ・セミコロン・改行の連続を区切りとして扱う。
//! BOM（U+FEFF）も空白と同じく区切りになる。

use regex::Regex;
use std::collections::{HashMap, HashSet};

lazy_static::lazy_static! {
    static ref SEPARATOR_RE: Regex = Regex::new(r"[\s\x{FEFF},;]+").unwrap();
}

/// テキストをトークン列に分割する
///
/// # Arguments
/// * `text` - 貼り付けられた任意のテキスト
/// * `dedupe` - trueなら2回目以降の出現を除去（初出順を維持）
///
/// # Examples
/// ```
/// use codelist_common::tokenize;
///
/// let tokens = tokenize("A, B;B\nC", true);
/// assert_eq!(tokens, vec!["A", "B", "C"]);
/// ```
pub fn tokenize(text: &str, dedupe: bool) -> Vec<String> {
    if text.trim_matches(is_blank).is_empty() {
        return Vec::new();
    }

    let tokens: Vec<String> = SEPARATOR_RE
        .split(text)
        .map(|t| t.trim_matches(is_blank))
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect();

    if dedupe {
        self::dedupe(tokens)
    } else {
        tokens
    }
}

fn is_blank(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

/// 重複を除去する（初出順を維持）
pub fn dedupe(tokens: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    tokens
        .into_iter()
        .filter(|t| seen.insert(t.clone()))
        .collect()
}

/// トークンごとの出現回数（初出順）
pub fn occurrences(tokens: &[String]) -> Vec<(&str, usize)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(&str, usize)> = Vec::new();

    for token in tokens {
        match index.get(token.as_str()) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(token.as_str(), counts.len());
                counts.push((token.as_str(), 1));
            }
        }
    }

    counts
}
