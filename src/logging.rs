//! ログ初期化
//!
//! 診断ログは標準エラーへ。RUST_LOG があればそちらを優先する。

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn init(verbose: bool) {
    let default_filter = if verbose {
        "codelist_rust=debug,codelist_common=debug"
    } else {
        "warn"
    };

    // 二重初期化（テスト等）は無視する
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
