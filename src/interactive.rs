//! 対話式セッション
//!
//! モードを選び、入力・評価・出力・消去を繰り返す。モードを切り替えても
//! 各モードの入力と結果は保持される。

use crate::config::Config;
use crate::error::{CodelistError, Result};
use crate::{export, render};
use codelist_common::session::StockState;
use codelist_common::{Mode, Session};
use dialoguer::{Input, Select};
use std::path::PathBuf;

/// モード内の操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    /// 入力を編集
    Edit,
    /// 評価
    Evaluate,
    /// 結果をファイル出力
    Export,
    /// 入力と結果を消去
    Clear,
    /// モード選択に戻る
    Back,
}

impl SessionAction {
    pub fn label(&self) -> &'static str {
        match self {
            SessionAction::Edit => "入力",
            SessionAction::Evaluate => "評価",
            SessionAction::Export => "ファイル出力",
            SessionAction::Clear => "消去",
            SessionAction::Back => "モード選択へ戻る",
        }
    }
}

/// モードで選べる操作
///
/// 識別モードは入力の確定で自動評価されるため「評価」を持たない。
pub fn actions_for(mode: Mode) -> Vec<SessionAction> {
    match mode {
        Mode::Identifier => vec![
            SessionAction::Edit,
            SessionAction::Export,
            SessionAction::Clear,
            SessionAction::Back,
        ],
        _ => vec![
            SessionAction::Edit,
            SessionAction::Evaluate,
            SessionAction::Export,
            SessionAction::Clear,
            SessionAction::Back,
        ],
    }
}

fn prompt_text(prompt: &str, initial: &str) -> Result<String> {
    Input::new()
        .with_prompt(prompt)
        .with_initial_text(initial)
        .allow_empty(true)
        .interact_text()
        .map_err(|e| CodelistError::Prompt(e.to_string()))
}

fn select(prompt: &str, items: &[&str], default: usize) -> Result<usize> {
    Select::new()
        .with_prompt(prompt)
        .items(items)
        .default(default)
        .interact()
        .map_err(|e| CodelistError::Prompt(e.to_string()))
}

fn edit_inputs(session: &mut Session) -> Result<()> {
    match session.mode() {
        Mode::Validator => {
            session.validator.input =
                prompt_text("コード（カンマ・空白・セミコロン区切り）", &session.validator.input)?;
        }
        Mode::Comparator => {
            session.comparator.list_a = prompt_text("リストA", &session.comparator.list_a)?;
            session.comparator.list_b = prompt_text("リストB", &session.comparator.list_b)?;
        }
        Mode::Stock => {
            session.stock.codes = prompt_text("コードリスト", &session.stock.codes)?;
            session.stock.quantities = prompt_text("数量リスト", &session.stock.quantities)?;
            session.stock.minimum = prompt_text("最低在庫数", &session.stock.minimum)?;
        }
        Mode::Identifier => {
            session.identifier.input = prompt_text("SKU", &session.identifier.input)?;
            // 入力確定 = 入力が落ち着いた時点
            session.settle_identifier();
            print_result(session);
        }
    }
    Ok(())
}

fn evaluate(session: &mut Session) {
    match session.mode() {
        Mode::Validator => {
            session.validator.evaluate();
        }
        Mode::Comparator => {
            session.comparator.evaluate();
        }
        Mode::Stock => {
            session.stock.evaluate();
        }
        Mode::Identifier => {
            session.settle_identifier();
        }
    }
    print_result(session);
}

fn clear(session: &mut Session, config: &Config) {
    match session.mode() {
        Mode::Validator => session.validator.clear(),
        Mode::Comparator => session.comparator.clear(),
        Mode::Stock => session.stock = StockState::with_minimum(config.default_minimum.clone()),
        Mode::Identifier => session.identifier.clear(),
    }
    println!("✔ 消去しました");
}

fn print_result(session: &Session) {
    if session.active().is_evaluated() {
        println!("\n{}", render::render_buckets(&session.buckets()));
    } else {
        println!("(未評価)");
    }
}

fn export_result(session: &Session, config: &Config) -> Result<()> {
    if !session.active().is_evaluated() {
        println!("先に評価してください");
        return Ok(());
    }

    let default_dir = config
        .export_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));
    let dir = prompt_text("出力先ディレクトリ", &default_dir.display().to_string())?;
    let written = export::export_buckets(&session.buckets(), &PathBuf::from(dir))?;
    if written.is_empty() {
        println!("出力する項目がありません");
    }
    Ok(())
}

/// 対話式セッションを実行する
pub fn run_session(config: &Config) -> Result<()> {
    let mut session = Session::new();
    session.stock = StockState::with_minimum(config.default_minimum.clone());

    let mut mode_labels: Vec<&str> = Mode::ALL.iter().map(|m| m.title()).collect();
    mode_labels.push("終了");

    loop {
        let current = Mode::ALL.iter().position(|m| *m == session.mode()).unwrap_or(0);
        let choice = select("モード", &mode_labels, current)?;
        let Some(&mode) = Mode::ALL.get(choice) else {
            break;
        };

        session.set_mode(mode);
        println!("\n{}", render::render_header(mode));
        if session.active().is_evaluated() {
            print_result(&session);
        }

        let actions = actions_for(mode);
        let labels: Vec<&str> = actions.iter().map(SessionAction::label).collect();

        loop {
            let picked = select("操作", &labels, 0)?;
            match actions[picked] {
                SessionAction::Edit => edit_inputs(&mut session)?,
                SessionAction::Evaluate => evaluate(&mut session),
                SessionAction::Export => export_result(&session, config)?,
                SessionAction::Clear => clear(&mut session, config),
                SessionAction::Back => break,
            }
        }
    }

    println!("終了します");
    Ok(())
}
