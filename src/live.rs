//! 識別モードのライブ入力
//!
//! 標準入力の各行を入力欄への編集として扱い、最後の編集から待ち時間が
//! 経過したら再識別する。評価はメインループだけが行い、タイマーは
//! チャネルで通知するのみ。

use crate::error::Result;
use crate::render;
use codelist_common::{CancelHandle, Debouncer, Mode, Session, Timer};
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// 入力を空にするコマンド
pub const CLEAR_COMMAND: &str = ":clear";
/// 終了コマンド
pub const QUIT_COMMAND: &str = ":q";

/// tokioのsleepで遅延実行するタイマー
#[derive(Clone)]
pub struct TokioTimer {
    runtime: tokio::runtime::Handle,
}

impl TokioTimer {
    /// 現在のtokioランタイム上にタイマーを作る（ランタイム外では panic）
    pub fn current() -> Self {
        Self {
            runtime: tokio::runtime::Handle::current(),
        }
    }
}

pub struct TokioHandle(JoinHandle<()>);

impl CancelHandle for TokioHandle {
    fn cancel(&self) {
        self.0.abort();
    }
}

impl Timer for TokioTimer {
    type Handle = TokioHandle;

    fn schedule<F>(&self, delay: Duration, task: F) -> TokioHandle
    where
        F: FnOnce() + Send + 'static,
    {
        TokioHandle(self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            task();
        }))
    }
}

/// 1行分の編集
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    Append(String),
    Clear,
    Quit,
}

impl Edit {
    pub fn parse(line: &str) -> Self {
        match line.trim() {
            QUIT_COMMAND => Edit::Quit,
            CLEAR_COMMAND => Edit::Clear,
            _ => Edit::Append(line.to_string()),
        }
    }
}

/// 編集を入力欄に反映する（Quitなら false）
pub fn apply_edit(session: &mut Session, edit: Edit) -> bool {
    match edit {
        Edit::Append(line) => {
            let input = &mut session.identifier.input;
            if !input.is_empty() {
                input.push('\n');
            }
            input.push_str(&line);
            true
        }
        Edit::Clear => {
            session.identifier.input.clear();
            true
        }
        Edit::Quit => false,
    }
}

fn print_state(session: &Session) {
    if session.identifier.is_evaluated() {
        println!("{}", render::render_buckets(&session.buckets()));
    } else {
        println!("(入力待ち)");
    }
}

/// ライブ識別を実行する
///
/// 入力終了（EOF/`:q`）時は待ち時間を待たずに最終評価する。
pub async fn run_live<R>(reader: R, session: &mut Session, delay: Duration) -> Result<()>
where
    R: AsyncBufRead + Unpin,
{
    session.set_mode(Mode::Identifier);

    let (tx, mut rx) = mpsc::unbounded_channel::<()>();
    let mut debouncer = Debouncer::new(TokioTimer::current(), delay);
    let mut lines = reader.lines();

    println!("SKUを入力してください（{} で消去、{} で終了）", CLEAR_COMMAND, QUIT_COMMAND);

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                if !apply_edit(session, Edit::parse(&line)) {
                    break;
                }
                let tx = tx.clone();
                debouncer.call(move || {
                    let _ = tx.send(());
                });
            }
            Some(()) = rx.recv() => {
                session.settle_identifier();
                print_state(session);
            }
        }
    }

    debouncer.cancel();
    session.settle_identifier();
    print_state(session);

    Ok(())
}
