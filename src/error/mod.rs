mod from;

use std::{fmt::Display, path::PathBuf};

use thiserror::Error;

use crate::provision::ProvisionStep;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, PartialEq)]
pub enum Error {
    #[error("`{0}` must be set")]
    MissingInput(&'static str),

    #[error("bucket `{0}` not found")]
    BucketNotFound(String),

    #[error("bucket `{0}` has no website configuration")]
    NoWebsiteConfiguration(String),

    #[error("failed to check if bucket `{bucket}` exists: {source}")]
    BucketCheck { bucket: String, source: Box<Error> },

    #[error(
        "bucket `{0}` already exists, but is not configured as a static website; \
         remove it manually and try again"
    )]
    ConflictingBucket(String),

    #[error("failed to get website configuration of bucket `{bucket}`: {source}")]
    WebsiteConfigRead { bucket: String, source: Box<Error> },

    #[error("bucket `{0}` already exists, but its website configuration is empty")]
    EmptyWebsiteConfig(String),

    #[error("unable to {step}: {source}")]
    ConfigurationWrite {
        step: ProvisionStep,
        source: Box<Error>,
    },

    #[error("error writing to `{path}`: {source}")]
    OutputWrite { path: PathBuf, source: AnyError },

    #[error(transparent)]
    Other(AnyError),
}

#[derive(Error, Debug)]
pub struct AnyError(anyhow::Error);

impl Display for AnyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PartialEq for AnyError {
    fn eq(&self, _other: &Self) -> bool {
        false
    }
}

impl Error {
    pub fn other<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::Other(AnyError(error.into()))
    }

    pub fn output_write<P, E>(path: P, error: E) -> Self
    where
        P: Into<PathBuf>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::OutputWrite {
            path: path.into(),
            source: AnyError(error.into()),
        }
    }

    pub fn configuration_write(step: ProvisionStep, error: Error) -> Self {
        Error::ConfigurationWrite {
            step,
            source: Box::new(error),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(error: anyhow::Error) -> Self {
        Error::Other(AnyError(error))
    }
}
