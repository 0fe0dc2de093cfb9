use crate::JobDetail;

/// Outcome of looking up a job record by its job run id.
///
/// A missing row is an expected outcome (the submitter may not have written
/// it yet), so it gets its own variant instead of riding on the error.
#[derive(Debug)]
pub enum JobLookup<E> {
    Found(JobDetail),
    NotFound,
    Fault(E),
}

impl<E> JobLookup<E> {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// Build a lookup from a fallible optional fetch.
    pub fn from_result(result: Result<Option<JobDetail>, E>) -> Self {
        match result {
            Ok(Some(detail)) => Self::Found(detail),
            Ok(None) => Self::NotFound,
            Err(err) => Self::Fault(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_result() {
        let detail = JobDetail {
            job_id: "00fbd1h3".to_string(),
            ..Default::default()
        };

        let found = JobLookup::<String>::from_result(Ok(Some(detail.clone())));
        assert!(matches!(found, JobLookup::Found(d) if d == detail));

        let missing = JobLookup::<String>::from_result(Ok(None));
        assert!(matches!(missing, JobLookup::NotFound));
        assert!(!missing.is_found());

        let fault = JobLookup::from_result(Err("connection reset".to_string()));
        assert!(matches!(fault, JobLookup::Fault(e) if e == "connection reset"));
    }
}
