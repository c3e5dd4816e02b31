
use std::path::Path;

use tokio::{fs::OpenOptions, io::AsyncWriteExt};

use crate::error::{Error, Result};

pub const WEBSITE_URL_KEY: &str = "website_url";

/// Appends `key=value` to a CI output file. The file must already exist.
pub async fn append_output(path: &Path, key: &str, value: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .append(true)
        .open(path)
        .await
        .map_err(|err| Error::output_write(path, err))?;

    let line = format!("{key}={value}\n");
    file.write_all(line.as_bytes())
        .await
        .map_err(|err| Error::output_write(path, err))?;
    file.flush()
        .await
        .map_err(|err| Error::output_write(path, err))?;
    Ok(())
}
