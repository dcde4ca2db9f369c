//! Archive download over HTTP

use crate::error::VerifyError;
use reqwest::blocking::Client;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Download `url` into `dest_dir`, returning the path of the written file.
///
/// Non-2xx responses are failures; there is nothing meaningful to compare
/// in an error body.
pub fn download(url: &str, dest_dir: &Path) -> Result<PathBuf, VerifyError> {
    let dest = dest_dir.join(archive_file_name(url));
    info!(url, dest = %dest.display(), "Downloading archive");

    let client = Client::new();
    let mut response = client
        .get(url)
        .send()
        .and_then(|r| r.error_for_status())
        .map_err(|source| VerifyError::Fetch {
            url: url.to_string(),
            source,
        })?;

    let mut file = File::create(&dest)?;
    let bytes = response
        .copy_to(&mut file)
        .map_err(|source| VerifyError::Fetch {
            url: url.to_string(),
            source,
        })?;

    debug!(bytes, "Download complete");
    Ok(dest)
}

/// Derive the local file name from the last URL path segment, the same
/// name the layout check later expects to find beside the extracted root.
fn archive_file_name(url: &str) -> String {
    let trimmed = url.trim_end_matches('/');
    let last = trimmed.rsplit('/').next().unwrap_or(trimmed);
    let last = last.split(['?', '#']).next().unwrap_or(last);
    if last.is_empty() {
        "archive".to_string()
    } else {
        last.to_string()
    }
}
