use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormulaError {
    #[error("failed to read formula catalog {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed formula catalog")]
    Parse {
        #[from]
        source: toml::de::Error,
    },
    #[error("duplicate formula id `{id}`")]
    DuplicateId { id: String },
}
