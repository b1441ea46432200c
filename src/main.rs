use anyhow::{Context, Result};
use std::process::ExitCode;
use wherenow::{ApiClient, App, AppConfig, SystemClock, WhereNowError, logging};

async fn run() -> Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;
    logging::init(&config.logging)?;

    let app = App::new(&config, ApiClient::new()?, SystemClock)?;
    let mut stdout = std::io::stdout();
    app.run(&mut stdout).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{:#}", err);
            match err.downcast_ref::<WhereNowError>() {
                Some(err) => eprintln!("Error: {}", err.user_message()),
                None => eprintln!("Error: {err:#}"),
            }
            ExitCode::FAILURE
        }
    }
}
