use serde::{Deserialize, Serialize};

/// A row of the job details table.
///
/// Rows are created upstream when a job run is submitted; the notifier only
/// ever reads them and rewrites `job_status`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct JobDetail {
    pub id: String,
    pub job_id: String,
    pub job_status: String,
    pub request_id: String,
    pub query: String,
    pub destination: String,
    pub jti: Option<String>,
    pub region: Option<String>,
    pub client_ip: Option<String>,
}
