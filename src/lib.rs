#![deny(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod error;
pub mod output;
pub mod provision;
pub mod request;
pub mod storage;
pub mod website;

mod logger;

pub use {
    error::{Error, Result},
    provision::{provision, ProvisionStep},
    request::{ProvisionInputs, ProvisionRequest},
    storage::{S3Storage, Storage},
    website::WebsiteUrl,
};
