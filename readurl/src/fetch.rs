use std::io::Write;

use tracing::{debug, info};

use crate::{error::FetchError, lines::LineSplitter};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

pub const ERROR_PREFIX: &str = "Error occured: ";

/// Fetches `url` and writes each line of the body to `out`. Any failure is
/// written to `out` as one `Error occured: ...` line instead of returned.
pub async fn fetch_and_print<W: Write>(url: &str, out: &mut W) {
    match fetch_lines(url, out).await {
        Ok(count) => debug!(%url, count, "Printed response body"),
        Err(e) => {
            debug!(%url, error = %e, "Fetch failed");
            if let Err(write_err) = writeln!(out, "{ERROR_PREFIX}{e}").and_then(|_| out.flush())
            {
                debug!(%url, error = %write_err, "Could not report fetch failure");
            }
        }
    }
}

/// Writes the body of `url` to `out` line by line and returns the line count.
/// Each call builds its own client.
pub async fn fetch_lines<W: Write>(url: &str, out: &mut W) -> Result<usize, FetchError> {
    let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;

    let mut response = client.get(url).send().await?.error_for_status()?;
    info!(status = %response.status(), %url, "Got response");

    let mut splitter = LineSplitter::new();
    let mut count = 0;
    while let Some(chunk) = response.chunk().await? {
        for line in splitter.feed(&chunk) {
            writeln!(out, "{line}")?;
            count += 1;
        }
    }
    if let Some(line) = splitter.finish() {
        writeln!(out, "{line}")?;
        count += 1;
    }
    out.flush()?;

    Ok(count)
}
