use std::{fmt::Debug, io};

use anyhow::anyhow;
use aws_sdk_s3::error::{BuildError, DisplayErrorContext, SdkError};

use super::{AnyError, Error};

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        Error::other(error)
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::other(error)
    }
}

impl<E: std::error::Error + Send + Sync + 'static, R: Debug + Send + Sync + 'static>
    From<SdkError<E, R>> for Error
{
    fn from(error: SdkError<E, R>) -> Self {
        // the SDK's own Display stops at "service error"
        Error::Other(AnyError(anyhow!("{}", DisplayErrorContext(&error))))
    }
}

impl From<BuildError> for Error {
    fn from(error: BuildError) -> Self {
        Error::other(error)
    }
}
