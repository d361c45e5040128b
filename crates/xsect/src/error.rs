//! Error taxonomy for section computations and shape lookups.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SectionError {
    #[error("boundary has no points")]
    EmptyBoundary,

    #[error("degenerate section: area {area} is zero or not finite")]
    DegenerateSection { area: f64 },

    #[error("net area is not positive: added {added}, subtracted {subtracted}")]
    NonPositiveNetArea { added: f64, subtracted: f64 },

    #[error("composite section has no added boundaries")]
    EmptyComposite,

    #[error("shape {name} not found")]
    ShapeNotFound { name: String },

    #[error("unsupported shape database version: {version}")]
    UnsupportedDbVersion { version: String },

    #[error("record is missing required field `{field}`")]
    MissingField { field: String },

    #[error("invalid shape parameters: {message}")]
    InvalidShape { message: String },
}

pub type Result<T> = std::result::Result<T, SectionError>;
