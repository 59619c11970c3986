//! 入力テキストの読み込み

use crate::error::{CodelistError, Result};
use std::io::Read;
use std::path::Path;

/// ファイルまたは標準入力からテキストを読む
///
/// パスが None または "-" のときは標準入力を最後まで読む。
pub fn read_source(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) if p != Path::new("-") => read_file(p),
        _ => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

/// ファイルを読む（存在しなければ FileNotFound）
pub fn read_file(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(CodelistError::FileNotFound(path.display().to_string()));
    }
    let text = std::fs::read_to_string(path)?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "read input");
    Ok(text)
}
