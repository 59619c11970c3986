//! リスト比較モジュール

use crate::tokenizer::tokenize;
use crate::types::ComparisonResult;
use std::collections::HashSet;

/// 2つのリストを比較する
///
/// 共通・Aのみは Aの順序、Bのみは Bの順序で並ぶ。
pub fn compare(list_a: &str, list_b: &str) -> ComparisonResult {
    let codes_a = tokenize(list_a, true);
    let codes_b = tokenize(list_b, true);

    let set_a: HashSet<&str> = codes_a.iter().map(String::as_str).collect();
    let set_b: HashSet<&str> = codes_b.iter().map(String::as_str).collect();

    let mut result = ComparisonResult::default();
    for code in &codes_a {
        if set_b.contains(code.as_str()) {
            result.common.push(code.clone());
        } else {
            result.only_in_a.push(code.clone());
        }
    }
    result.only_in_b = codes_b
        .iter()
        .filter(|code| !set_a.contains(code.as_str()))
        .cloned()
        .collect();

    tracing::debug!(
        common = result.common.len(),
        only_in_a = result.only_in_a.len(),
        only_in_b = result.only_in_b.len(),
        "compared lists"
    );

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_scenario() {
        let result = compare("A B C", "B C D");
        assert_eq!(result.common, vec!["B", "C"]);
        assert_eq!(result.only_in_a, vec!["A"]);
        assert_eq!(result.only_in_b, vec!["D"]);
    }

    #[test]
    fn test_compare_both_empty() {
        let result = compare("", " \n");
        assert_eq!(result, ComparisonResult::default());
    }

    #[test]
    fn test_compare_one_side_empty() {
        let result = compare("X Y X", "");
        assert!(result.common.is_empty());
        assert_eq!(result.only_in_a, vec!["X", "Y"]);
        assert!(result.only_in_b.is_empty());
    }

    #[test]
    fn test_common_follows_order_of_a() {
        let result = compare("3 1 2", "1 2 3");
        assert_eq!(result.common, vec!["3", "1", "2"]);
    }

    #[test]
    fn test_outputs_partition_union() {
        let a = "a b c d a";
        let b = "c d e f e";
        let result = compare(a, b);

        let mut left: Vec<String> = result.common.clone();
        left.extend(result.only_in_a.clone());
        left.sort();
        let mut expected_a = tokenize(a, true);
        expected_a.sort();
        assert_eq!(left, expected_a);

        let mut right: Vec<String> = result.common.clone();
        right.extend(result.only_in_b.clone());
        right.sort();
        let mut expected_b = tokenize(b, true);
        expected_b.sort();
        assert_eq!(right, expected_b);

        assert!(result.only_in_a.iter().all(|c| !result.only_in_b.contains(c)));
    }
}
