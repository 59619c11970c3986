//! 在庫判定モジュール
//!
//! コード列と数量列を位置で対応付け、最低在庫数と比較する。
//! 長さの違いは短い方に合わせ、数値でない数量は除外する（どちらもエラーにしない）。

use crate::tokenizer::tokenize;
use crate::types::{CodeValue, StockResult};
use regex::Regex;

lazy_static::lazy_static! {
    static ref DECIMAL_RE: Regex =
        Regex::new(r"^[+-]?([0-9]+\.?[0-9]*|\.[0-9]+)([eE][+-]?[0-9]+)?$").unwrap();
    static ref LEADING_INT_RE: Regex = Regex::new(r"^\s*([+-]?)([0-9]+)").unwrap();
}

/// 最低在庫数をパースする
///
/// 先頭の整数部分のみを読む（"3.7" → 3, "3abc" → 3）。数字で始まらなければNone。
/// 桁数の多い値も飽和させず浮動小数点で保持する。
pub fn parse_minimum(text: &str) -> Option<f64> {
    let caps = LEADING_INT_RE.captures(text)?;
    let magnitude = caps[2].parse::<f64>().ok()?;
    Some(if &caps[1] == "-" { -magnitude } else { magnitude })
}

/// 数量トークンを数値に変換する
///
/// 対応形式:
/// - 10進数（符号・小数点・指数あり）
/// - 0x / 0o / 0b 接頭辞の整数
/// - Infinity（符号あり）
pub fn parse_quantity(token: &str) -> Option<f64> {
    let token = token.trim();

    match token {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    if let Some(value) = parse_radix_literal(token) {
        return Some(value);
    }

    if DECIMAL_RE.is_match(token) {
        return token.parse::<f64>().ok();
    }

    None
}

fn parse_radix_literal(token: &str) -> Option<f64> {
    let lower = token.get(..2)?.to_ascii_lowercase();
    let radix = match lower.as_str() {
        "0x" => 16,
        "0o" => 8,
        "0b" => 2,
        _ => return None,
    };

    let digits = &token[2..];
    if digits.is_empty() {
        return None;
    }

    digits.chars().try_fold(0f64, |acc, c| {
        c.to_digit(radix).map(|d| acc * radix as f64 + d as f64)
    })
}

/// 在庫数を最低在庫数と比較する
///
/// # Arguments
/// * `codes` - コード列のテキスト（重複除去しない）
/// * `quantities` - 数量列のテキスト（重複除去しない）
/// * `minimum` - 最低在庫数のテキスト
///
/// # Returns
/// 不足（数量 < 最低）と充足（数量 >= 最低）。
/// 最低在庫数が不正、またはどちらかの列が空なら両方空。
pub fn match_stock(codes: &str, quantities: &str, minimum: &str) -> StockResult {
    let codes = tokenize(codes, false);
    let quantities = tokenize(quantities, false);

    let minimum = match parse_minimum(minimum) {
        Some(m) if !codes.is_empty() && !quantities.is_empty() => m,
        _ => return StockResult::default(),
    };

    let paired = codes.len().min(quantities.len());
    let mut result = StockResult {
        truncated: codes.len().max(quantities.len()) - paired,
        ..Default::default()
    };

    for (code, quantity) in codes.iter().zip(quantities.iter()) {
        let Some(value) = parse_quantity(quantity) else {
            result.skipped += 1;
            continue;
        };

        let entry = CodeValue::new(code.clone(), value);
        if value < minimum {
            result.insufficient.push(entry);
        } else {
            result.sufficient.push(entry);
        }
    }

    if result.skipped > 0 || result.truncated > 0 {
        tracing::debug!(
            skipped = result.skipped,
            truncated = result.truncated,
            "stock pairs excluded"
        );
    }

    result
}
