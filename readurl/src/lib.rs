//! Fetches URLs over HTTP(S) and prints their bodies line by line.

use std::io::Write;

pub mod error;
pub mod fetch;
pub mod lines;
pub mod setup;

pub use error::FetchError;
pub use fetch::{fetch_and_print, fetch_lines, ERROR_PREFIX};
pub use lines::LineSplitter;

pub const BASINS_URL: &str = "https://api.rsgis.dev/development/cumulus/basins";
pub const PRODUCTS_URL: &str = "https://api.rsgis.dev/development/cumulus/products";

/// The URLs fetched at startup, in order.
pub const DEFAULT_URLS: [&str; 2] = [BASINS_URL, PRODUCTS_URL];

/// Fetches each URL in turn. A fetch always finishes, successfully or with an
/// error line, before the next one starts.
pub async fn run<W: Write>(urls: &[&str], out: &mut W) {
    for url in urls {
        fetch_and_print(url, out).await;
    }
}
