use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_s3::{
    config::Credentials,
    error::ProvideErrorMetadata,
    types::{
        BucketLocationConstraint, CreateBucketConfiguration, ErrorDocument, IndexDocument,
        PublicAccessBlockConfiguration, RedirectAllRequestsTo, WebsiteConfiguration,
    },
    Client,
};
use log::debug;

use crate::{
    error::{Error, Result},
    request::ProvisionRequest,
    website::{PublicAccessBlock, WebsiteConfig},
};

use super::{location_constraint, Storage};

const CREDENTIALS_PROVIDER_NAME: &str = "provision-request";
const NO_SUCH_WEBSITE_CONFIGURATION: &str = "NoSuchWebsiteConfiguration";

#[derive(Debug)]
pub struct S3Storage {
    client: Client,
}

impl S3Storage {
    pub async fn new(request: &ProvisionRequest) -> Self {
        let credentials = Credentials::new(
            &request.access_key,
            &request.secret_key,
            None,
            None,
            CREDENTIALS_PROVIDER_NAME,
        );

        let s3_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(request.region.clone()))
            .credentials_provider(credentials)
            .load()
            .await;
        let client = Client::new(&s3_config);
        S3Storage { client }
    }
}

#[async_trait]
impl Storage for S3Storage {
    async fn head_bucket(&self, bucket: &str) -> Result<()> {
        debug!("head bucket `{bucket}`");
        self.client
            .head_bucket()
            .bucket(bucket)
            .send()
            .await
            .map_err(|err| {
                if err.as_service_error().is_some_and(|e| e.is_not_found()) {
                    Error::BucketNotFound(bucket.to_owned())
                } else {
                    err.into()
                }
            })?;
        Ok(())
    }

    async fn get_bucket_website(&self, bucket: &str) -> Result<WebsiteConfig> {
        debug!("get website configuration of `{bucket}`");
        let response = self
            .client
            .get_bucket_website()
            .bucket(bucket)
            .send()
            .await
            .map_err(|err| {
                if err.as_service_error().and_then(ProvideErrorMetadata::code)
                    == Some(NO_SUCH_WEBSITE_CONFIGURATION)
                {
                    Error::NoWebsiteConfiguration(bucket.to_owned())
                } else {
                    err.into()
                }
            })?;

        Ok(WebsiteConfig {
            index_document: response.index_document().map(|doc| doc.suffix().to_owned()),
            error_document: response.error_document().map(|doc| doc.key().to_owned()),
            redirect_host: response
                .redirect_all_requests_to()
                .map(|redirect| redirect.host_name().to_owned()),
            has_routing_rules: response
                .routing_rules
                .as_ref()
                .is_some_and(|rules| !rules.is_empty()),
        })
    }

    async fn create_bucket(&self, bucket: &str, region: &str) -> Result<()> {
        debug!("create bucket `{bucket}` in `{region}`");
        let configuration = location_constraint(region).map(|constraint| {
            CreateBucketConfiguration::builder()
                .location_constraint(BucketLocationConstraint::from(constraint))
                .build()
        });

        self.client
            .create_bucket()
            .bucket(bucket)
            .set_create_bucket_configuration(configuration)
            .send()
            .await?;
        Ok(())
    }

    async fn put_public_access_block(
        &self,
        bucket: &str,
        block: &PublicAccessBlock,
    ) -> Result<()> {
        debug!("put public access block on `{bucket}`: {block:?}");
        let configuration = PublicAccessBlockConfiguration::builder()
            .block_public_acls(block.block_public_acls)
            .block_public_policy(block.block_public_policy)
            .ignore_public_acls(block.ignore_public_acls)
            .restrict_public_buckets(block.restrict_public_buckets)
            .build();

        self.client
            .put_public_access_block()
            .bucket(bucket)
            .public_access_block_configuration(configuration)
            .send()
            .await?;
        Ok(())
    }

    async fn put_bucket_policy(&self, bucket: &str, policy: &str) -> Result<()> {
        debug!("put bucket policy on `{bucket}`");
        self.client
            .put_bucket_policy()
            .bucket(bucket)
            .policy(policy)
            .send()
            .await?;
        Ok(())
    }

    async fn put_bucket_website(&self, bucket: &str, config: &WebsiteConfig) -> Result<()> {
        debug!("put website configuration on `{bucket}`: {config:?}");
        let index_document = config
            .index_document
            .as_deref()
            .map(|suffix| IndexDocument::builder().suffix(suffix).build())
            .transpose()?;
        let error_document = config
            .error_document
            .as_deref()
            .map(|key| ErrorDocument::builder().key(key).build())
            .transpose()?;

        let redirect = config
            .redirect_host
            .as_deref()
            .map(|host| RedirectAllRequestsTo::builder().host_name(host).build())
            .transpose()?;

        let configuration = WebsiteConfiguration::builder()
            .set_index_document(index_document)
            .set_error_document(error_document)
            .set_redirect_all_requests_to(redirect)
            .build();

        self.client
            .put_bucket_website()
            .bucket(bucket)
            .website_configuration(configuration)
            .send()
            .await?;
        Ok(())
    }
}
