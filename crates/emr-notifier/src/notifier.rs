use aws_lambda_events::event::cloudwatch_events::CloudWatchEvent;
use emr_core::{EMR_SERVERLESS_SOURCE, JobDetail, JobLookup, JobStateChange, status};
use tracing::{debug, error, info, instrument, warn};

use crate::error::StoreError;
use crate::notifier::diagnostics::RunDiagnostics;
use crate::notifier::store::JobStore;

pub mod diagnostics;
pub mod store;

/// Mirrors EMR Serverless job run state changes into the job details table.
///
/// Every failure along the way is logged and swallowed: an event is either
/// applied or dropped, never retried, and the invoker always sees success.
pub struct Notifier<S, D> {
    store: S,
    diagnostics: D,
}

impl<S, D> Notifier<S, D>
where
    S: JobStore,
    D: RunDiagnostics,
{
    pub fn new(store: S, diagnostics: D) -> Self {
        Self { store, diagnostics }
    }

    #[instrument(skip_all, fields(job_run_id))]
    pub async fn handle_event(&self, event: CloudWatchEvent) {
        if event.source.as_deref() != Some(EMR_SERVERLESS_SOURCE) {
            debug!(source = ?event.source, "Ignoring event from unrelated source");
            return;
        }

        info!("Initiating EMR notifier");

        let change = match JobStateChange::from_detail(event.detail.as_ref()) {
            Ok(change) => change,
            Err(err) => {
                error!("Failed to deserialize event detail: {}", err);
                return;
            }
        };
        tracing::Span::current().record("job_run_id", change.job_run_id.as_str());

        let job_detail = match self.get_job_detail(&change.job_run_id).await {
            JobLookup::Found(job_detail) => job_detail,
            JobLookup::NotFound => {
                error!("No job details recorded for jobId: {}", change.job_run_id);
                return;
            }
            JobLookup::Fault(err) => {
                error!(
                    "Failed to get job details for jobId: {} with error: {}",
                    change.job_run_id, err
                );
                return;
            }
        };

        self.update_job(&job_detail, status::translate(&change.state))
            .await;

        // Compared against the event state, not the stored status
        if status::needs_diagnostics(&change.state) {
            self.log_diagnostics(&change).await;
        }
    }

    pub async fn get_job_detail(&self, job_id: &str) -> JobLookup<StoreError> {
        info!("Initiating GetJobDetail with jobId: {}", job_id);
        self.store.fetch_job_detail(job_id).await
    }

    /// Persist `status` for the job. Failures are logged, not returned.
    pub async fn update_job(&self, job_detail: &JobDetail, status: &str) {
        let id = &job_detail.id;
        let job_id = &job_detail.job_id;
        info!("{}-> Updating record for jobId: {}", id, job_id);

        match self.store.set_job_status(job_id, status).await {
            Ok(0) => {
                warn!("{}-> No record left to update for jobId: {}", id, job_id);
            }
            Ok(_) => {
                info!(
                    "{}-> Successfully updated jobStatus: {} for jobId: {}",
                    id, status, job_id
                );
            }
            Err(err) => {
                error!(
                    "{}-> Failed to update record for jobId: {} with error: {}",
                    id, job_id, err
                );
            }
        }
    }

    async fn log_diagnostics(&self, change: &JobStateChange) {
        match self
            .diagnostics
            .fetch_job_run(&change.application_id, &change.job_run_id)
            .await
        {
            Ok(job_run) => {
                error!(
                    "Job run {} of application {} failed: {}",
                    change.job_run_id, change.application_id, job_run
                );
            }
            Err(err) => {
                error!(
                    "Failed to fetch diagnostics for failed job run {}: {}",
                    change.job_run_id, err
                );
            }
        }
    }
}
