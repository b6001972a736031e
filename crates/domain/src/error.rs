/// Shared error type used across all study tutor crates.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("IO: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A name that does not match any known variant (tutor mode, chip).
    #[error("unknown {kind}: {value:?}")]
    UnknownName { kind: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, Error>;
