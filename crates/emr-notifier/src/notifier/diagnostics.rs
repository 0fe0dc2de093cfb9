use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_emrserverless::Client;
use aws_sdk_emrserverless::config::Region;
use aws_sdk_emrserverless::error::DisplayErrorContext;
use tracing::instrument;

use crate::error::DiagnosticsError;

/// Source of verbose job run details, consulted when a run fails.
#[async_trait]
pub trait RunDiagnostics: Send + Sync {
    /// Fetch the job run and render the service's response for logging.
    async fn fetch_job_run(
        &self,
        application_id: &str,
        job_run_id: &str,
    ) -> Result<String, DiagnosticsError>;
}

/// [`RunDiagnostics`] backed by the EMR Serverless `GetJobRun` API.
#[derive(Debug, Clone)]
pub struct EmrDiagnostics {
    client: Client,
}

impl EmrDiagnostics {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Build a client from the AWS default credential and region chain,
    /// optionally pinned to `region`.
    pub async fn from_env(region: Option<&str>) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = region {
            loader = loader.region(Region::new(region.to_owned()));
        }
        let sdk_config = loader.load().await;

        Self::new(Client::new(&sdk_config))
    }
}

#[async_trait]
impl RunDiagnostics for EmrDiagnostics {
    #[instrument(skip(self), err)]
    async fn fetch_job_run(
        &self,
        application_id: &str,
        job_run_id: &str,
    ) -> Result<String, DiagnosticsError> {
        let output = self
            .client
            .get_job_run()
            .application_id(application_id)
            .job_run_id(job_run_id)
            .send()
            .await
            .map_err(|err| DiagnosticsError::Request(DisplayErrorContext(&err).to_string()))?;

        Ok(format!("{output:#?}"))
    }
}
