use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodelistError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("出力エラー: {0}")]
    Export(#[from] codelist_common::Error),

    #[error("入力プロンプトエラー: {0}")]
    Prompt(String),
}

pub type Result<T> = std::result::Result<T, CodelistError>;
