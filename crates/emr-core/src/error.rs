use thiserror::Error;

#[derive(Error, Debug)]
pub enum DetailError {
    #[error("Event has no detail payload")]
    Missing,

    #[error("Event detail is not a key/value mapping: {0}")]
    NotAnObject(#[source] serde_json::Error),
}
