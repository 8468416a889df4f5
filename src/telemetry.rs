use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LogConfig;

pub fn init_tracing(log: &LogConfig) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "info,hyper=warn,reqwest=warn,mongodb=warn,goose=info".into()
            }),
        )
        .with(log.json.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!log.json).then(|| tracing_subscriber::fmt::layer()))
        .init();
}
