mod config;
mod error;
mod logging;
mod notifier;

use std::sync::Arc;

use anyhow::Context;
use aws_lambda_events::event::cloudwatch_events::CloudWatchEvent;
use lambda_runtime::{LambdaEvent, service_fn};
use tracing::info;

use crate::config::NotifierConfig;
use crate::notifier::Notifier;
use crate::notifier::diagnostics::EmrDiagnostics;
use crate::notifier::store::PgJobStore;

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    logging::init();

    let notifier = Arc::new(bootstrap().await?);

    lambda_runtime::run(service_fn(move |event: LambdaEvent<CloudWatchEvent>| {
        let notifier = Arc::clone(&notifier);
        async move {
            notifier.handle_event(event.payload).await;
            Ok::<(), lambda_runtime::Error>(())
        }
    }))
    .await
}

/// Build the notifier once per process; warm invocations reuse its pool and client.
async fn bootstrap() -> anyhow::Result<Notifier<PgJobStore, EmrDiagnostics>> {
    let config = NotifierConfig::load().context("Failed to load notifier configuration")?;
    info!(
        "Using job table {} on {}:{}/{}",
        config.database.table, config.database.host, config.database.port, config.database.name
    );

    let store = PgJobStore::from_config(&config.database);
    let diagnostics = EmrDiagnostics::from_env(config.emr_region.as_deref()).await;

    Ok(Notifier::new(store, diagnostics))
}
