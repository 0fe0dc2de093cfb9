pub mod error;
mod job_detail;
mod lookup;
mod state_change;
pub mod status;

pub use error::DetailError;
pub use job_detail::JobDetail;
pub use lookup::JobLookup;
pub use state_change::{JobStateChange, EMR_SERVERLESS_SOURCE};
