
use std::fmt::{self, Display};

use serde_json::json;

pub const PROVIDER_DOMAIN: &str = "amazonaws.com";

const POLICY_VERSION: &str = "2012-10-17";

/// Host name at which a website bucket serves its content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebsiteUrl(String);

impl WebsiteUrl {
    pub fn new(bucket: &str, region: &str) -> Self {
        WebsiteUrl(format!("{bucket}.s3-website-{region}.{PROVIDER_DOMAIN}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for WebsiteUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WebsiteConfig {
    pub index_document: Option<String>,
    pub error_document: Option<String>,
    /// Host that every request is redirected to.
    pub redirect_host: Option<String>,
    pub has_routing_rules: bool,
}

impl WebsiteConfig {
    pub fn new<S: Into<String>, T: Into<String>>(index_document: S, error_document: T) -> Self {
        WebsiteConfig {
            index_document: Some(index_document.into()),
            error_document: Some(error_document.into()),
            redirect_host: None,
            has_routing_rules: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.index_document.is_none()
            && self.error_document.is_none()
            && self.redirect_host.is_none()
            && !self.has_routing_rules
    }
}

#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublicAccessBlock {
    pub block_public_acls: bool,
    pub block_public_policy: bool,
    pub ignore_public_acls: bool,
    pub restrict_public_buckets: bool,
}

impl PublicAccessBlock {
    /// All four flags off, so that a public bucket policy can take effect.
    pub fn disabled() -> Self {
        PublicAccessBlock {
            block_public_acls: false,
            block_public_policy: false,
            ignore_public_acls: false,
            restrict_public_buckets: false,
        }
    }
}

/// Bucket policy allowing anonymous reads of every object in `bucket`.
pub fn public_read_policy(bucket: &str) -> String {
    json!({
        "Version": POLICY_VERSION,
        "Statement": [
            {
                "Sid": "PublicReadGetObject",
                "Effect": "Allow",
                "Principal": "*",
                "Action": "s3:GetObject",
                "Resource": format!("arn:aws:s3:::{bucket}/*"),
            }
        ]
    })
    .to_string()
}
