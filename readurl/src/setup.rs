use std::str::FromStr;

use tracing_subscriber::{filter::targets::Targets, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the error-report hook and the log subscriber.
///
/// Logs go to stderr so that stdout carries nothing but fetched lines. The
/// filter comes from `RUST_LOG` and defaults to `warn`.
pub fn setup() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let filter_layer = Targets::from_str(std::env::var("RUST_LOG").as_deref().unwrap_or("warn"))?;
    let format_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
    tracing_subscriber::registry()
        .with(filter_layer)
        .with(format_layer)
        .try_init()?;

    Ok(())
}
