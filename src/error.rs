use std::io;

use thiserror::Error;
use tracing::subscriber::SetGlobalDefaultError;

#[allow(clippy::module_name_repetitions)]
#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO Error: {source:#?}")]
    IOError {
        #[from]
        source: io::Error,
    },

    #[error("Logging Error: {source:#?}")]
    LoggingError {
        #[from]
        source: SetGlobalDefaultError,
    },
}
