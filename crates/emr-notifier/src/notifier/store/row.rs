use emr_core::JobDetail;

/// Raw row of the job details table.
#[derive(Debug, sqlx::FromRow)]
pub struct JobDetailRow {
    pub id: String,
    pub jobid: String,
    pub jobstatus: String,
    pub requestid: String,
    pub query: String,
    pub destination: String,
    pub jti: Option<String>,
    pub cross_bucket_region: Option<String>,
    pub client_ip: Option<String>,
}

impl From<JobDetailRow> for JobDetail {
    fn from(row: JobDetailRow) -> Self {
        Self {
            id: row.id,
            job_id: row.jobid,
            job_status: row.jobstatus,
            request_id: row.requestid,
            query: row.query,
            destination: row.destination,
            jti: row.jti,
            region: row.cross_bucket_region,
            client_ip: row.client_ip,
        }
    }
}
