use crate::config::LoggingConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 依設定安裝全域 subscriber；若已安裝過則回傳 `false`
pub fn init_logger(config: &LoggingConfig) -> bool {
    let level = config.level.as_deref().unwrap_or("info").to_lowercase();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("maybe_chain={}", level)));

    let layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    if config.json.unwrap_or(false) {
        tracing_subscriber::registry()
            .with(filter)
            .with(layer.json())
            .try_init()
            .is_ok()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(layer.compact())
            .try_init()
            .is_ok()
    }
}
