use reelstats_model::ModelError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Invalid record: {0}")]
    Model(#[from] ModelError),

    #[error("Record is missing required field '{0}'")]
    MissingField(&'static str),
}

pub type Result<T> = std::result::Result<T, ImportError>;
