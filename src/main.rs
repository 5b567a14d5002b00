use repo_lifecycle::{run_lifecycle, EnvConfig, GithubClient, RepoCheckError};
use std::process::exit;

/// Load the configuration and run every lifecycle step
async fn repo_lifecycle_main() -> Result<(), RepoCheckError> {
    let config = EnvConfig::from_env()?;
    log::debug!("{config:?}");
    let client = GithubClient::new()?;
    run_lifecycle(&client, &config).await
}

#[tokio::main]
async fn main() {
    println!(concat!(
        env!("CARGO_PKG_NAME"),
        " ",
        env!("CARGO_PKG_VERSION")
    ));
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .format_target(false)
        .format_timestamp(None)
        .init();
    match repo_lifecycle_main().await {
        Ok(_) => {
            exit(0);
        }
        Err(e) => {
            eprintln!("{e}");
            exit(1);
        }
    };
}
