use std::{
    collections::{HashMap, HashSet},
    io,
    sync::{Mutex, MutexGuard},
};

use async_trait::async_trait;

use crate::{
    error::{Error, Result},
    website::{PublicAccessBlock, WebsiteConfig},
};

use super::Storage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    HeadBucket,
    GetBucketWebsite,
    CreateBucket,
    PutPublicAccessBlock,
    PutBucketPolicy,
    PutBucketWebsite,
}

impl Operation {
    pub fn is_mutation(self) -> bool {
        !matches!(self, Operation::HeadBucket | Operation::GetBucketWebsite)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    HeadBucket(String),
    GetBucketWebsite(String),
    CreateBucket(String, String),
    PutPublicAccessBlock(String, PublicAccessBlock),
    PutBucketPolicy(String, String),
    PutBucketWebsite(String, WebsiteConfig),
}

impl Call {
    pub fn operation(&self) -> Operation {
        match self {
            Call::HeadBucket(_) => Operation::HeadBucket,
            Call::GetBucketWebsite(_) => Operation::GetBucketWebsite,
            Call::CreateBucket(..) => Operation::CreateBucket,
            Call::PutPublicAccessBlock(..) => Operation::PutPublicAccessBlock,
            Call::PutBucketPolicy(..) => Operation::PutBucketPolicy,
            Call::PutBucketWebsite(..) => Operation::PutBucketWebsite,
        }
    }
}

#[derive(Debug, Default)]
struct State {
    // `None` means the bucket exists without a website configuration
    buckets: HashMap<String, Option<WebsiteConfig>>,
    policies: HashMap<String, String>,
    public_access_blocks: HashMap<String, PublicAccessBlock>,
    failures: HashSet<Operation>,
    calls: Vec<Call>,
}

/// Storage that keeps buckets in memory and records every call made to it.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    state: Mutex<State>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bucket(self, bucket: &str) -> Self {
        self.state().buckets.insert(bucket.to_owned(), None);
        self
    }

    pub fn with_website(self, bucket: &str, config: WebsiteConfig) -> Self {
        self.state().buckets.insert(bucket.to_owned(), Some(config));
        self
    }

    pub fn failing(self, operation: Operation) -> Self {
        self.state().failures.insert(operation);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state().calls.clone()
    }

    pub fn operations(&self) -> Vec<Operation> {
        self.state().calls.iter().map(Call::operation).collect()
    }

    pub fn mutations(&self) -> Vec<Operation> {
        self.operations()
            .into_iter()
            .filter(|operation| operation.is_mutation())
            .collect()
    }

    pub fn clear_calls(&self) {
        self.state().calls.clear();
    }

    pub fn website(&self, bucket: &str) -> Option<WebsiteConfig> {
        self.state().buckets.get(bucket).cloned().flatten()
    }

    pub fn policy(&self, bucket: &str) -> Option<String> {
        self.state().policies.get(bucket).cloned()
    }

    pub fn public_access_block(&self, bucket: &str) -> Option<PublicAccessBlock> {
        self.state().public_access_blocks.get(bucket).copied()
    }

    fn state(&self) -> MutexGuard<State> {
        self.state.lock().unwrap()
    }

    fn record(&self, call: Call) -> Result<MutexGuard<State>> {
        let operation = call.operation();
        let mut state = self.state();
        state.calls.push(call);
        if state.failures.contains(&operation) {
            let message = format!("injected failure in {operation:?}");
            return Err(Error::other(io::Error::other(message)));
        }

        Ok(state)
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn head_bucket(&self, bucket: &str) -> Result<()> {
        let state = self.record(Call::HeadBucket(bucket.to_owned()))?;
        if state.buckets.contains_key(bucket) {
            Ok(())
        } else {
            Err(Error::BucketNotFound(bucket.to_owned()))
        }
    }

    async fn get_bucket_website(&self, bucket: &str) -> Result<WebsiteConfig> {
        let state = self.record(Call::GetBucketWebsite(bucket.to_owned()))?;
        match state.buckets.get(bucket) {
            Some(Some(config)) => Ok(config.clone()),
            Some(None) => Err(Error::NoWebsiteConfiguration(bucket.to_owned())),
            None => Err(Error::BucketNotFound(bucket.to_owned())),
        }
    }

    async fn create_bucket(&self, bucket: &str, region: &str) -> Result<()> {
        let mut state = self.record(Call::CreateBucket(bucket.to_owned(), region.to_owned()))?;
        state.buckets.insert(bucket.to_owned(), None);
        Ok(())
    }

    async fn put_public_access_block(
        &self,
        bucket: &str,
        block: &PublicAccessBlock,
    ) -> Result<()> {
        let mut state = self.record(Call::PutPublicAccessBlock(bucket.to_owned(), *block))?;
        state.public_access_blocks.insert(bucket.to_owned(), *block);
        Ok(())
    }

    async fn put_bucket_policy(&self, bucket: &str, policy: &str) -> Result<()> {
        let mut state =
            self.record(Call::PutBucketPolicy(bucket.to_owned(), policy.to_owned()))?;
        state.policies.insert(bucket.to_owned(), policy.to_owned());
        Ok(())
    }

    async fn put_bucket_website(&self, bucket: &str, config: &WebsiteConfig) -> Result<()> {
        let mut state =
            self.record(Call::PutBucketWebsite(bucket.to_owned(), config.clone()))?;
        state
            .buckets
            .insert(bucket.to_owned(), Some(config.clone()));
        Ok(())
    }
}
