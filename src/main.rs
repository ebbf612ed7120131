use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use storefront_login::flow::FlowSettings;
use storefront_login::form::LoginForm;
use storefront_login::net::api::HttpAuthEndpoint;
use storefront_login::state::auth::SharedAuthState;
use storefront_login::store::{FileStore, clear_session, load_session};
use storefront_login::ui::ConsoleSurface;
use storefront_login::{ConfigError, LoginConfig, LoginError, LoginFlow, LoginOutcome, StoreError};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Login(#[from] LoginError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("{0}")]
    Input(&'static str),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "storefront-login", about = "Log in to the storefront backend and manage the stored session")]
struct Cli {
    /// Override `LOGIN_URL`.
    #[arg(long, env = "LOGIN_URL")]
    login_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Submit credentials and store the resulting session.
    Login {
        #[arg(long)]
        username: String,
        #[arg(long, env = "STOREFRONT_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Print the stored session user.
    Whoami,
    /// Remove the stored session.
    Logout,
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode, CliError> {
    let mut config = LoginConfig::from_env()?;
    if let Some(url) = cli.login_url.as_deref() {
        config = config.with_login_url(url)?;
    }
    let store = Arc::new(FileStore::new(&config.session_file));

    match cli.command {
        Command::Login { username, password } => run_login(&config, store, username, password).await,
        Command::Whoami => {
            let Some(session) = load_session(store.as_ref())? else {
                eprintln!("not logged in");
                return Ok(ExitCode::FAILURE);
            };
            println!("{}", serde_json::to_string_pretty(&session.user)?);
            Ok(ExitCode::SUCCESS)
        }
        Command::Logout => {
            clear_session(store.as_ref())?;
            tracing::info!(path = %store.path().display(), "session cleared");
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn run_login(
    config: &LoginConfig,
    store: Arc<FileStore>,
    username: String,
    password: String,
) -> Result<ExitCode, CliError> {
    let mut form = LoginForm::new();
    form.set_username(username);
    form.set_password(password);
    let credentials = form.take_credentials().map_err(CliError::Input)?;

    let endpoint = HttpAuthEndpoint::new(&config.login_url, config.timeouts)?;
    let previous = load_session(store.as_ref()).ok().flatten();
    let auth = SharedAuthState::from_session(previous.as_ref());
    let surface = Arc::new(ConsoleSurface::new());
    let flow = LoginFlow::new(
        Arc::new(endpoint),
        store,
        Arc::new(auth.clone()),
        surface.clone(),
        surface.clone(),
        FlowSettings::from(config),
    );

    tracing::debug!(url = %config.login_url, "submitting login");
    let outcome = flow.submit(credentials).await;
    if let (LoginOutcome::Authenticated(_), Some(location)) = (&outcome, surface.location()) {
        println!("{location}");
    }
    if outcome.is_authenticated() {
        tracing::debug!(authenticated = auth.snapshot().is_authenticated(), "auth state updated");
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
