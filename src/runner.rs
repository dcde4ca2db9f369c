//! Orchestrates one verification run end to end

use crate::cli::Reporter;
use crate::compare::{build_inventory, diff, Comparison};
use crate::error::VerifyError;
use crate::extract;
use crate::fetch;
use crate::staging::Staging;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info};

/// One verification request: which archive, compared against which tree.
#[derive(Debug, Clone)]
pub struct VerifyRequest {
    pub url: String,
    pub local_root: PathBuf,
}

/// Fetch, extract, inventory, and diff.
///
/// The staging area owns all temporary filesystem state (the downloaded
/// archive and the extracted root) and removes it when this function
/// returns, whether with a verdict or an error. The local root is only
/// ever read.
pub fn run(request: &VerifyRequest, reporter: &Reporter) -> Result<Comparison, VerifyError> {
    let start = Instant::now();
    let staging = Staging::create()?;

    reporter.status(&format!("Downloading \"{}\" ...", request.url));
    let archive_file = fetch::download(&request.url, staging.path())?;
    reporter.status("Download completed!");

    reporter.status("Unpacking ...");
    extract::unpack(&archive_file, staging.path())?;
    reporter.status("Unpacking complete!");

    let archive_root = staging.locate_extracted_root(&archive_file)?;

    reporter.status(&format!(
        "Comparing \"{}\" to \"{}\" ...",
        archive_root.display(),
        request.local_root.display()
    ));

    let archive_inventory = build_inventory(&archive_root)?;
    let local_inventory = build_inventory(&request.local_root)?;
    let verdict = diff(archive_inventory, local_inventory)?;

    match &verdict {
        Comparison::Equal => info!("Trees are equal"),
        Comparison::NotEqual(mismatch) => info!(%mismatch, "Trees are not equal"),
    }
    debug!(elapsed_ms = start.elapsed().as_millis() as u64, "Run finished");

    Ok(verdict)
}
