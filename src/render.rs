//! 端末への結果表示

use codelist_common::bucket::EMPTY_PLACEHOLDER;
use codelist_common::{Bucket, BucketItems, Mode};

/// モードの見出し
pub fn render_header(mode: Mode) -> String {
    format!("{}\n{}\n", mode.title(), mode.description())
}

/// バケット1つ分の表示
pub fn render_bucket(bucket: &Bucket) -> String {
    let mut out = format!("■ {} ({})\n", bucket.title, bucket.len());

    if bucket.is_empty() {
        out.push_str(&format!("  {}\n", EMPTY_PLACEHOLDER));
        return out;
    }

    match &bucket.items {
        BucketItems::Codes(codes) => {
            for code in codes {
                out.push_str(&format!("  - {}\n", code));
            }
        }
        BucketItems::Values(values) => {
            for item in values {
                match &bucket.value_label {
                    Some(label) => {
                        out.push_str(&format!("  - {}    {}: {}\n", item.code, label, item.value))
                    }
                    None => out.push_str(&format!("  - {}\n", item.code)),
                }
            }
        }
    }

    out
}

/// 全バケットの表示（バケット間は空行）
pub fn render_buckets(buckets: &[Bucket]) -> String {
    buckets
        .iter()
        .map(render_bucket)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use codelist_common::CodeValue;

    #[test]
    fn test_render_empty_bucket_shows_placeholder() {
        let bucket = Bucket::codes("Todolivro", &[]);
        let text = render_bucket(&bucket);
        assert!(text.contains("■ Todolivro (0)"));
        assert!(text.contains(EMPTY_PLACEHOLDER));
    }

    #[test]
    fn test_render_labeled_values() {
        let bucket = Bucket::quantities("Baixo", &[CodeValue::new("Y", 1.0)], "Estoque");
        let text = render_bucket(&bucket);
        assert!(text.contains("- Y    Estoque: 1"));
    }

    #[test]
    fn test_render_buckets_joins_all() {
        let buckets = codelist_common::identify("1234567 333333 99").buckets();
        let text = render_buckets(&buckets);
        assert!(text.contains("■ Todolivro (1)"));
        assert!(text.contains("■ Happy Books (1)"));
        assert!(text.contains("■ Não Identificado (1)"));
        assert!(text.contains("- 99"));
    }
}
