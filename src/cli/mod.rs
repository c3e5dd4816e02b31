mod args;

use std::process::ExitCode;

use clap::{
    builder::{styling::AnsiColor, Styles},
    ColorChoice, Parser,
};
use env_logger::WriteStyle;
use log::{error, info};

use crate::{
    error::Result,
    logger,
    output::{append_output, WEBSITE_URL_KEY},
    provision::provision,
    request::{ProvisionInputs, ProvisionRequest},
    storage::{BoxedStorage, S3Storage, Storage},
    website::WebsiteUrl,
};

pub use args::{LoggerArgs, ProvisionArgs};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None, styles = cli_styles())]
pub struct Cli {
    #[command(flatten)]
    pub provision: ProvisionArgs,

    #[command(flatten)]
    pub logger: LoggerArgs,
}

pub async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(&cli.logger);

    match run(cli.provision).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: ProvisionArgs) -> Result<()> {
    let request = ProvisionRequest::new(ProvisionInputs::from(args))?;
    let storage: BoxedStorage = Box::new(S3Storage::new(&request).await);
    let url = publish(storage.as_ref(), &request).await?;
    info!("website available at {url}");
    Ok(())
}

/// Provisions the website and writes its URL to the request's output file.
pub async fn publish(storage: &dyn Storage, request: &ProvisionRequest) -> Result<WebsiteUrl> {
    let url = provision(storage, request).await?;
    append_output(&request.output_path, WEBSITE_URL_KEY, url.as_str()).await?;
    Ok(url)
}

fn init_logger(args: &LoggerArgs) {
    let level = logger::log_level_from_args(args.verbose, args.quiet);
    let style = match args.color {
        ColorChoice::Auto => WriteStyle::Auto,
        ColorChoice::Always => WriteStyle::Always,
        ColorChoice::Never => WriteStyle::Never,
    };
    logger::init(level, style);
}

fn cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::BrightMagenta.on_default())
        .usage(AnsiColor::BrightMagenta.on_default())
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightCyan.on_default())
}
