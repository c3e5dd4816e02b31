
use std::fmt::{self, Display};

use log::info;

use crate::{
    error::{Error, Result},
    request::ProvisionRequest,
    storage::Storage,
    website::{public_read_policy, PublicAccessBlock, WebsiteConfig, WebsiteUrl},
};

/// Mutating steps performed when the bucket does not exist yet, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProvisionStep {
    CreateBucket,
    DisablePublicAccessBlock,
    PutBucketPolicy,
    PutBucketWebsite,
}

impl Display for ProvisionStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let description = match self {
            ProvisionStep::CreateBucket => "create bucket",
            ProvisionStep::DisablePublicAccessBlock => "disable block public access",
            ProvisionStep::PutBucketPolicy => "set bucket policy",
            ProvisionStep::PutBucketWebsite => "set website configuration",
        };
        f.write_str(description)
    }
}

/// Makes sure the bucket named after the requested domain exists and serves a
/// public static website, returning the website endpoint.
///
/// An existing bucket is never modified: it is accepted only if it already
/// has a website configuration. A new bucket is created and configured step
/// by step; the first failing step aborts the run and leaves the earlier
/// steps in place.
pub async fn provision(storage: &dyn Storage, request: &ProvisionRequest) -> Result<WebsiteUrl> {
    let bucket = request.bucket.as_str();

    let exists = storage
        .bucket_exists(bucket)
        .await
        .map_err(|err| Error::BucketCheck {
            bucket: bucket.to_owned(),
            source: Box::new(err),
        })?;

    if exists {
        info!("bucket `{bucket}` already exists");
        verify_website(storage, bucket).await?;
    } else {
        create_website(storage, request).await?;
        info!("bucket `{bucket}` website configuration set");
    }

    Ok(WebsiteUrl::new(bucket, &request.region))
}

async fn verify_website(storage: &dyn Storage, bucket: &str) -> Result<()> {
    let config = storage
        .get_bucket_website(bucket)
        .await
        .map_err(|err| match err {
            Error::NoWebsiteConfiguration(bucket) => Error::ConflictingBucket(bucket),
            err => Error::WebsiteConfigRead {
                bucket: bucket.to_owned(),
                source: Box::new(err),
            },
        })?;

    if config.is_empty() {
        return Err(Error::EmptyWebsiteConfig(bucket.to_owned()));
    }

    Ok(())
}

async fn create_website(storage: &dyn Storage, request: &ProvisionRequest) -> Result<()> {
    let bucket = request.bucket.as_str();

    storage
        .create_bucket(bucket, &request.region)
        .await
        .map_err(|err| Error::configuration_write(ProvisionStep::CreateBucket, err))?;
    info!("bucket `{bucket}` created in `{}`", request.region);

    storage
        .put_public_access_block(bucket, &PublicAccessBlock::disabled())
        .await
        .map_err(|err| Error::configuration_write(ProvisionStep::DisablePublicAccessBlock, err))?;

    let policy = public_read_policy(bucket);
    storage
        .put_bucket_policy(bucket, &policy)
        .await
        .map_err(|err| Error::configuration_write(ProvisionStep::PutBucketPolicy, err))?;
    info!("bucket policy set");

    let config = WebsiteConfig::new(&request.index_document, &request.error_document);
    storage
        .put_bucket_website(bucket, &config)
        .await
        .map_err(|err| Error::configuration_write(ProvisionStep::PutBucketWebsite, err))?;

    Ok(())
}
