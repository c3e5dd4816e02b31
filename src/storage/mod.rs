#[cfg(test)]
pub mod memory;
mod s3;

use std::fmt::Debug;

use async_trait::async_trait;

use crate::{
    error::{Error, Result},
    website::{PublicAccessBlock, WebsiteConfig},
};

pub use s3::S3Storage;

/// Region in which buckets are created without an explicit location constraint.
pub const DEFAULT_REGION: &str = "us-east-1";

pub type BoxedStorage = Box<dyn Storage + 'static>;

/// Bucket-level operations of an object-storage service.
///
/// Implementations classify failures: a missing bucket is
/// [`Error::BucketNotFound`] and a bucket without a website configuration is
/// [`Error::NoWebsiteConfiguration`]. Everything else is passed through as-is.
#[async_trait]
pub trait Storage: Debug + Send + Sync {
    async fn head_bucket(&self, bucket: &str) -> Result<()>;
    async fn get_bucket_website(&self, bucket: &str) -> Result<WebsiteConfig>;
    async fn create_bucket(&self, bucket: &str, region: &str) -> Result<()>;
    async fn put_public_access_block(
        &self,
        bucket: &str,
        block: &PublicAccessBlock,
    ) -> Result<()>;
    async fn put_bucket_policy(&self, bucket: &str, policy: &str) -> Result<()>;
    async fn put_bucket_website(&self, bucket: &str, config: &WebsiteConfig) -> Result<()>;

    async fn bucket_exists(&self, bucket: &str) -> Result<bool> {
        match self.head_bucket(bucket).await {
            Ok(()) => Ok(true),
            Err(Error::BucketNotFound(_)) => Ok(false),
            Err(err) => Err(err),
        }
    }
}

/// The default region rejects an explicit location constraint.
pub fn location_constraint(region: &str) -> Option<&str> {
    if region == DEFAULT_REGION {
        None
    } else {
        Some(region)
    }
}
