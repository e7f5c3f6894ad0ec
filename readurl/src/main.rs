use readurl::{setup::setup, DEFAULT_URLS};

#[tokio::main(flavor = "current_thread")]
async fn main() -> color_eyre::Result<()> {
    setup()?;

    readurl::run(&DEFAULT_URLS, &mut std::io::stdout()).await;

    Ok(())
}
