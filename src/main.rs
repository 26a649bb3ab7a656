use anyhow::Result;
use tracing_subscriber::EnvFilter;
use twinlink::config;
use twinlink::server;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_from_env()?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with_level(true);

    if config.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }

    config.print_summary();

    server::run(config).await
}
