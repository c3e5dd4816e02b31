
use std::{fmt, path::PathBuf};

use crate::error::{Error, Result};

pub const ENV_VAR_ACCESS_KEY_ID: &str = "INPUT_AWS_ACCESS_KEY_ID";
pub const ENV_VAR_SECRET_ACCESS_KEY: &str = "INPUT_AWS_SECRET_ACCESS_KEY";
pub const ENV_VAR_REGION: &str = "INPUT_AWS_REGION";
pub const ENV_VAR_DOMAIN: &str = "INPUT_DOMAIN";
pub const ENV_VAR_INDEX_DOCUMENT: &str = "INPUT_INDEX_DOCUMENT";
pub const ENV_VAR_ERROR_DOCUMENT: &str = "INPUT_ERROR_DOCUMENT";
pub const ENV_VAR_OUTPUT: &str = "GITHUB_OUTPUT";

pub const DEFAULT_INDEX_DOCUMENT: &str = "index.html";
pub const DEFAULT_ERROR_DOCUMENT: &str = "index.html";

/// Raw, unvalidated inputs as they arrive from flags or the environment.
#[derive(Debug, Clone, Default)]
pub struct ProvisionInputs {
    pub access_key: Option<String>,
    pub secret_key: Option<String>,
    pub region: Option<String>,
    pub domain: Option<String>,
    pub index_document: Option<String>,
    pub error_document: Option<String>,
    pub output_path: Option<PathBuf>,
}

/// Everything needed for one provisioning run. The bucket is always named
/// after the domain.
#[derive(Clone, PartialEq, Eq)]
pub struct ProvisionRequest {
    pub access_key: String,
    pub secret_key: String,
    pub region: String,
    pub bucket: String,
    pub index_document: String,
    pub error_document: String,
    pub output_path: PathBuf,
}

impl ProvisionRequest {
    pub fn new(inputs: ProvisionInputs) -> Result<Self> {
        let ProvisionInputs {
            access_key,
            secret_key,
            region,
            domain,
            index_document,
            error_document,
            output_path,
        } = inputs;

        let access_key = required(access_key, ENV_VAR_ACCESS_KEY_ID)?;
        let secret_key = required(secret_key, ENV_VAR_SECRET_ACCESS_KEY)?;
        let region = required(region, ENV_VAR_REGION)?;
        let bucket = required(domain, ENV_VAR_DOMAIN)?;
        let index_document = optional(index_document, DEFAULT_INDEX_DOCUMENT);
        let error_document = optional(error_document, DEFAULT_ERROR_DOCUMENT);
        let output_path = output_path
            .filter(|path| !path.as_os_str().is_empty())
            .ok_or(Error::MissingInput(ENV_VAR_OUTPUT))?;

        Ok(ProvisionRequest {
            access_key,
            secret_key,
            region,
            bucket,
            index_document,
            error_document,
            output_path,
        })
    }
}

impl fmt::Debug for ProvisionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProvisionRequest")
            .field("access_key", &self.access_key)
            .field("secret_key", &"<redacted>")
            .field("region", &self.region)
            .field("bucket", &self.bucket)
            .field("index_document", &self.index_document)
            .field("error_document", &self.error_document)
            .field("output_path", &self.output_path)
            .finish()
    }
}

// CI runners pass unset action inputs as empty strings
fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_owned())
        .filter(|s| !s.is_empty())
}

fn required(value: Option<String>, name: &'static str) -> Result<String> {
    non_empty(value).ok_or(Error::MissingInput(name))
}

fn optional(value: Option<String>, default: &str) -> String {
    non_empty(value).unwrap_or_else(|| default.to_owned())
}
