//! バケットのテキスト出力

use crate::error::Result;
use codelist_common::Bucket;
use std::path::{Path, PathBuf};

/// 空でないバケットを `<dir>/<タイトル由来のファイル名>` に書き出す
///
/// # Returns
/// 書き出したファイルのパス（バケット順）
pub fn export_buckets(buckets: &[Bucket], output_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();

    for bucket in buckets {
        match bucket.write_to(output_dir)? {
            Some(path) => {
                println!("✔ {} ({}件): {}", bucket.title, bucket.len(), path.display());
                written.push(path);
            }
            None => {
                tracing::debug!(title = %bucket.title, "empty bucket not exported");
            }
        }
    }

    Ok(written)
}
