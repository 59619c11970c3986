use clap::Parser;
use codelist_common::{Mode, Session};
use codelist_rust::{cli, config, error, export, input, interactive, live, logging, render};
use cli::{Cli, Commands, OutputFormat};
use config::Config;
use error::Result;
use std::path::PathBuf;

/// 評価済みのモードを表示し、必要ならバケットを書き出す
fn report(session: &Session, format: OutputFormat, export_dir: Option<PathBuf>) -> Result<()> {
    let active = session.active();

    match format {
        OutputFormat::Text => {
            println!("{}", render::render_header(active.mode()));
            println!("{}", render::render_buckets(&active.buckets()));
        }
        OutputFormat::Json => {
            if let Some(json) = active.result_json()? {
                println!("{}", json);
            }
        }
    }

    if let Some(dir) = export_dir {
        println!("- ファイル出力中...");
        let written = export::export_buckets(&active.buckets(), &dir)?;
        println!("✔ {}件のファイルを出力: {}", written.len(), dir.display());
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let config = Config::load()?;

    let mut session = Session::new();

    match cli.command {
        Commands::Validate { input, export } => {
            session.set_mode(Mode::Validator);
            session.validator.input = input::read_source(input.as_deref())?;
            session.validator.evaluate();
            report(&session, cli.format, export.or(config.export_dir.clone()))?;
        }

        Commands::Compare { list_a, list_b, export } => {
            session.set_mode(Mode::Comparator);
            session.comparator.list_a = input::read_file(&list_a)?;
            session.comparator.list_b = input::read_file(&list_b)?;
            session.comparator.evaluate();
            report(&session, cli.format, export.or(config.export_dir.clone()))?;
        }

        Commands::Stock { codes, quantities, minimum, export } => {
            session.set_mode(Mode::Stock);
            session.stock.codes = input::read_file(&codes)?;
            session.stock.quantities = input::read_file(&quantities)?;
            session.stock.minimum = minimum.unwrap_or_else(|| config.default_minimum.clone());
            let result = session.stock.evaluate();
            if result.skipped > 0 || result.truncated > 0 {
                eprintln!(
                    "注意: 数値でない数量 {}件、対応のないトークン {}件を除外しました",
                    result.skipped, result.truncated
                );
            }
            report(&session, cli.format, export.or(config.export_dir.clone()))?;
        }

        Commands::Identify { input, live, export } => {
            if live {
                let stdin = tokio::io::BufReader::new(tokio::io::stdin());
                live::run_live(stdin, &mut session, config.debounce()).await?;
            } else {
                session.identifier.input = input::read_source(input.as_deref())?;
                session.set_mode(Mode::Identifier);
            }

            if !session.identifier.is_evaluated() {
                // 空入力は未評価のまま（空の3バケットは出さない）
                println!("SKUが入力されていません");
                return Ok(());
            }
            report(&session, cli.format, export.or(config.export_dir.clone()))?;
        }

        Commands::Session => {
            interactive::run_session(&config)?;
        }

        Commands::Config { set_debounce_ms, set_default_minimum, set_export_dir, show } => {
            let mut config = config;
            let changed = set_debounce_ms.is_some()
                || set_default_minimum.is_some()
                || set_export_dir.is_some();

            if let Some(ms) = set_debounce_ms {
                config.set_debounce_ms(ms)?;
            }
            if let Some(minimum) = set_default_minimum {
                config.set_default_minimum(minimum)?;
            }
            if let Some(dir) = set_export_dir {
                config.set_export_dir(dir);
            }
            if changed {
                config.save()?;
                println!("✔ 設定を保存しました: {}", Config::config_path()?.display());
            }

            if show || !changed {
                println!("設定:");
                println!("  待ち時間: {}ms", config.debounce_ms);
                println!("  最低在庫数: {}", config.default_minimum);
                println!(
                    "  出力先: {}",
                    config
                        .export_dir
                        .as_ref()
                        .map(|d| d.display().to_string())
                        .unwrap_or_else(|| "未設定".into())
                );
            }
        }
    }

    Ok(())
}
