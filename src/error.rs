use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CafeError {
    #[error("price must be a number, got {0:?}")]
    InvalidPrice(String),

    #[error("invalid choice {0:?}")]
    InvalidChoice(String),

    #[error("customer id must be a number, got {0:?}")]
    InvalidCustomerId(String),

    #[error("no customer ids left to assign")]
    CustomerIdsExhausted,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("could not load menu file {}: {source}", .path.display())]
    MenuFile {
        path: PathBuf,
        #[source]
        source: Box<CafeError>,
    },
}

pub type CafeResult<T> = Result<T, CafeError>;
