mod row;

use std::time::Duration;

use async_trait::async_trait;
use emr_core::{JobDetail, JobLookup};
use sqlx::{PgPool, postgres::PgPoolOptions};
use tracing::instrument;

use crate::config::DatabaseConfig;
use crate::error::StoreError;
use self::row::JobDetailRow;

/// Read and write access to the job details table.
#[async_trait]
pub trait JobStore: Send + Sync {
    /// Look up the single row for a job run id.
    async fn fetch_job_detail(&self, job_id: &str) -> JobLookup<StoreError>;

    /// Overwrite the status of the row for a job run id, returning the number
    /// of rows touched.
    async fn set_job_status(&self, job_id: &str, status: &str) -> Result<u64, StoreError>;
}

/// PostgreSQL backed [`JobStore`]. Clones share the same pool.
#[derive(Debug, Clone)]
pub struct PgJobStore {
    pool: PgPool,
    select_query: String,
    update_query: String,
}

impl PgJobStore {
    /// `table` is spliced into the queries verbatim and must already be a
    /// validated identifier.
    pub fn new(pool: PgPool, table: &str) -> Self {
        let select_query = indoc::formatdoc!(
            r#"
            SELECT id::text AS id, jobid, jobstatus, requestid, query, destination,
                   jti, cross_bucket_region, client_ip
            FROM {table}
            WHERE jobid = $1
            "#,
            table = table,
        );
        let update_query = indoc::formatdoc!(
            r#"
            UPDATE {table}
            SET jobstatus = $1
            WHERE jobid = $2
            "#,
            table = table,
        );

        Self {
            pool,
            select_query,
            update_query,
        }
    }

    /// Build a store over a lazily connected pool; no connection is opened
    /// until the first query.
    pub fn from_config(config: &DatabaseConfig) -> Self {
        let pool = PgPoolOptions::new()
            .max_connections(config.pool_size)
            .acquire_timeout(Duration::from_secs(5))
            .connect_lazy_with(config.connect_options());

        Self::new(pool, &config.table)
    }
}

#[async_trait]
impl JobStore for PgJobStore {
    #[instrument(skip(self))]
    async fn fetch_job_detail(&self, job_id: &str) -> JobLookup<StoreError> {
        let row: Result<Option<JobDetailRow>, sqlx::Error> = sqlx::query_as(&self.select_query)
            .bind(job_id)
            .fetch_optional(&self.pool)
            .await;

        JobLookup::from_result(
            row.map(|row| row.map(JobDetail::from))
                .map_err(StoreError::from),
        )
    }

    #[instrument(skip(self), err)]
    async fn set_job_status(&self, job_id: &str, status: &str) -> Result<u64, StoreError> {
        let result = sqlx::query(&self.update_query)
            .bind(status)
            .bind(job_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
