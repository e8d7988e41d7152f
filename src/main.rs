use algosec_import::application::config::{Config, Credentials};
use algosec_import::application::import::run_import;
use algosec_import::constants::{
    DEFAULT_APPS_FILE, DEFAULT_SERVER, ENV_APPS_FILE, ENV_PASS, ENV_SERVER, ENV_USER,
    ENV_VERIFY_TLS,
};
use algosec_import::utils::setup_logger;
use clap::Parser;
use clap::builder::BoolishValueParser;
use dotenv::dotenv;
use std::path::PathBuf;
use tracing::{debug, error, info};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Import applications into Algosec AppViz",
    long_about = None
)]
struct Cli {
    /// Algosec server URL (with or without https://)
    #[arg(long, env = ENV_SERVER, default_value = DEFAULT_SERVER)]
    server: String,

    /// Username
    #[arg(long, env = ENV_USER)]
    username: Option<String>,

    /// Password secret
    #[arg(long, env = ENV_PASS, hide_env_values = true)]
    password: Option<String>,

    /// Path to file containing application names
    #[arg(long, env = ENV_APPS_FILE, default_value = DEFAULT_APPS_FILE)]
    file: PathBuf,

    /// Verify the server TLS certificate
    #[arg(long, env = ENV_VERIFY_TLS, value_parser = BoolishValueParser::new())]
    verify_tls: bool,
}

// Every path exits 0, failures are only logged.
#[tokio::main(flavor = "current_thread")]
async fn main() {
    let dotenv_result = dotenv();
    setup_logger();
    match dotenv_result {
        Ok(path) => debug!("Loaded {}", path.display()),
        Err(e) => debug!("No .env file loaded: {e}"),
    }

    let cli = Cli::parse();

    let credentials = match Credentials::new(
        &cli.server,
        cli.username.as_deref().unwrap_or_default(),
        cli.password.as_deref().unwrap_or_default(),
    ) {
        Ok(credentials) => credentials,
        Err(e) => {
            error!(
                "Error: Missing required credentials. Please provide server, username, and password either via arguments or environment variables. ({e})"
            );
            return;
        }
    };

    let config = match Config::from_parts(credentials, &cli.file, cli.verify_tls) {
        Ok(config) => config,
        Err(e) => {
            error!("Error: {e}");
            return;
        }
    };

    info!(
        "Importing applications from {} into {}",
        config.apps_file.display(),
        config.credentials.server
    );

    match run_import(config).await {
        Ok(report) => println!("{report}"),
        Err(e) => error!("Import aborted: {e}"),
    }
}
