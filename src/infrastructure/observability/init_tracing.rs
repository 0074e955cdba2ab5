use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::presentation::config::{Environment, LoggingSettings};

/// Installs the global tracing subscriber. `RUST_LOG` wins when set;
/// otherwise the configured level applies to this crate and `tower_http`
/// while the rest of the dependency tree stays at `info`. JSON output is
/// forced in production regardless of the configured format.
pub fn init_tracing(settings: &LoggingSettings, environment: Environment, port: u16) {
    let default_directives = format!(
        "info,voxhire={level},tower_http={level}",
        level = settings.level
    );
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives));

    let fmt_layer = fmt::layer().with_target(true).with_line_number(true);
    if settings.enable_json || environment.is_production() {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer.json())
            .init();
    } else {
        tracing_subscriber::registry().with(env_filter).with(fmt_layer).init();
    }

    tracing::info!(
        port = port,
        environment = %environment,
        "Logging initialized"
    );
}
