use std::{io::IsTerminal, sync::Once};

use tracing_subscriber::{EnvFilter, filter::LevelFilter};

/// Initializes the tracing subscriber. Filter directives come from `RUST_LOG`,
/// defaulting to `info`.
pub fn init() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let env_filter = EnvFilter::builder()
            .with_default_directive(LevelFilter::INFO.into())
            .from_env_lossy();

        // Lambda stamps every line it forwards to CloudWatch
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_ansi(std::io::stderr().is_terminal())
            .without_time()
            .init();
    });
}
