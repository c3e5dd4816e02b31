use std::path::PathBuf;

use clap::{ArgAction, Args, ColorChoice};

use crate::request::{
    ProvisionInputs, ENV_VAR_ACCESS_KEY_ID, ENV_VAR_DOMAIN, ENV_VAR_ERROR_DOCUMENT,
    ENV_VAR_INDEX_DOCUMENT, ENV_VAR_OUTPUT, ENV_VAR_REGION, ENV_VAR_SECRET_ACCESS_KEY,
};

#[derive(Args, Debug)]
pub struct ProvisionArgs {
    /// Access key ID used to authenticate with S3
    #[arg(long, value_name = "KEY", env = ENV_VAR_ACCESS_KEY_ID, hide_env_values = true)]
    pub access_key_id: Option<String>,

    /// Secret access key used to authenticate with S3
    #[arg(long, value_name = "SECRET", env = ENV_VAR_SECRET_ACCESS_KEY, hide_env_values = true)]
    pub secret_access_key: Option<String>,

    /// Region to create the bucket in
    #[arg(long, value_name = "REGION", env = ENV_VAR_REGION)]
    pub region: Option<String>,

    /// Domain served by the website (also the bucket name)
    #[arg(long, value_name = "DOMAIN", env = ENV_VAR_DOMAIN)]
    pub domain: Option<String>,

    /// Document served for directory requests [default: index.html]
    #[arg(long, value_name = "KEY", env = ENV_VAR_INDEX_DOCUMENT)]
    pub index_document: Option<String>,

    /// Document served when an object is missing [default: index.html]
    #[arg(long, value_name = "KEY", env = ENV_VAR_ERROR_DOCUMENT)]
    pub error_document: Option<String>,

    /// File that receives the `website_url` output
    #[arg(short, long, value_name = "PATH", env = ENV_VAR_OUTPUT)]
    pub output: Option<PathBuf>,
}

impl From<ProvisionArgs> for ProvisionInputs {
    fn from(args: ProvisionArgs) -> Self {
        ProvisionInputs {
            access_key: args.access_key_id,
            secret_key: args.secret_access_key,
            region: args.region,
            domain: args.domain,
            index_document: args.index_document,
            error_document: args.error_document,
            output_path: args.output,
        }
    }
}

#[derive(Args, Debug)]
pub struct LoggerArgs {
    /// When to use color in output
    #[arg(short, long, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Print more output
    #[arg(short, long, action = ArgAction::Count, group = "verbosity")]
    pub verbose: u8,

    /// Print less output
    #[arg(short, long, action = ArgAction::Count, group = "verbosity")]
    pub quiet: u8,
}
