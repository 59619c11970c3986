use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "codelist")]
#[command(about = "ISBN・在庫・SKUコードリストの検証/比較/識別ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 出力形式 (text/json)
    #[arg(long, default_value = "text", global = true)]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// ISBNコードを検証（有効・無効・重複）
    Validate {
        /// コードリストのファイル（省略または - で標準入力）
        input: Option<PathBuf>,

        /// 各バケットを .txt で書き出すディレクトリ
        #[arg(short, long)]
        export: Option<PathBuf>,
    },

    /// 2つのリストを比較
    Compare {
        /// リストAのファイル
        #[arg(required = true)]
        list_a: PathBuf,

        /// リストBのファイル
        #[arg(required = true)]
        list_b: PathBuf,

        /// 各バケットを .txt で書き出すディレクトリ
        #[arg(short, long)]
        export: Option<PathBuf>,
    },

    /// 在庫数を最低在庫数と比較
    Stock {
        /// コードリストのファイル
        #[arg(required = true)]
        codes: PathBuf,

        /// 数量リストのファイル（コードと同じ順序）
        #[arg(required = true)]
        quantities: PathBuf,

        /// 最低在庫数（省略時は設定値、初期値 1）
        #[arg(short, long)]
        minimum: Option<String>,

        /// 各バケットを .txt で書き出すディレクトリ
        #[arg(short, long)]
        export: Option<PathBuf>,
    },

    /// SKUのブランドを識別
    Identify {
        /// SKUリストのファイル（省略または - で標準入力）
        input: Option<PathBuf>,

        /// 標準入力を1行ずつ編集として受け取り、入力が落ち着いたら再識別
        #[arg(long)]
        live: bool,

        /// 各バケットを .txt で書き出すディレクトリ
        #[arg(short, long)]
        export: Option<PathBuf>,
    },

    /// 対話的に4モードを切り替えて使う
    Session,

    /// 設定を表示/編集
    Config {
        /// 識別モードの待ち時間（ミリ秒）を設定
        #[arg(long)]
        set_debounce_ms: Option<u64>,

        /// 最低在庫数の初期値を設定
        #[arg(long)]
        set_default_minimum: Option<String>,

        /// 出力先ディレクトリの初期値を設定
        #[arg(long)]
        set_export_dir: Option<PathBuf>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}. Use text or json", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_stock_command() {
        let cli =
            Cli::try_parse_from(["codelist", "stock", "codes.txt", "qty.txt", "-m", "3"]).unwrap();
        match cli.command {
            Commands::Stock { codes, minimum, .. } => {
                assert_eq!(codes, PathBuf::from("codes.txt"));
                assert_eq!(minimum.as_deref(), Some("3"));
            }
            _ => panic!("stockコマンドとして解析されていない"),
        }
    }

    #[test]
    fn test_global_format_flag() {
        let cli = Cli::try_parse_from(["codelist", "validate", "--format", "json"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("xml".parse::<OutputFormat>().is_err());
    }
}
