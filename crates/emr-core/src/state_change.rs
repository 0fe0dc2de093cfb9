use serde_json::{Map, Value};

use crate::DetailError;

/// EventBridge `source` of EMR Serverless job run state change events.
pub const EMR_SERVERLESS_SOURCE: &str = "aws.emr-serverless";

/// The fields of an EMR Serverless "Job Run State Change" detail the notifier acts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobStateChange {
    pub job_run_id: String,
    pub application_id: String,
    pub state: String,
}

impl JobStateChange {
    /// Extract the state change from an event's `detail` payload.
    ///
    /// The payload must be a JSON object. Fields are read leniently: strings
    /// are taken as-is, other values are rendered as JSON text and missing
    /// or `null` fields become empty strings.
    pub fn from_detail(detail: Option<&Value>) -> Result<Self, DetailError> {
        let detail = detail.ok_or(DetailError::Missing)?;
        let fields: Map<String, Value> =
            serde_json::from_value(detail.clone()).map_err(DetailError::NotAnObject)?;

        Ok(Self {
            job_run_id: field_text(&fields, "jobRunId"),
            application_id: field_text(&fields, "applicationId"),
            state: field_text(&fields, "state"),
        })
    }
}

fn field_text(fields: &Map<String, Value>, key: &str) -> String {
    match fields.get(key) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
