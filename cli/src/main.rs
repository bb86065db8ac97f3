use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use signup::config::SignupConfig;
use signup::flow;
use signup::oauth::{self, GoogleOAuthConfig};
use signup::password::{classify_strength, is_unique};
use signup::session::SessionError;
use signup::{Action, ApiError, AuthClient, FileTokenStore, HttpAuthApi, Session, SignupError, SignupState};
use tracing_subscriber::EnvFilter;


const DEFAULT_TOKEN_FILE: &str = ".signup-token.json";

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Signup(#[from] SignupError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error("google login is not configured; pass --client-id and --redirect-uri or set GOOGLE_CLIENT_ID and GOOGLE_REDIRECT_URI")]
    MissingGoogleConfig,
    #[error("no session token stored in {0}")]
    NoToken(String),
}

#[derive(Parser, Debug)]
#[command(name = "signup-cli", about = "Sign-up client for the auth API")]
struct Cli {
    #[arg(long, env = "SIGNUP_API_BASE_URL")]
    base_url: Option<String>,

    #[arg(long, env = "SIGNUP_TOKEN_FILE", help = "JSON file holding the session token")]
    token_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create an account and store the issued session token.
    Register(RegisterArgs),
    /// Exchange a Google authorization code (or the whole redirect URL) for a session.
    GoogleLogin(GoogleLoginArgs),
    /// Print the Google consent URL and the state value to verify on return.
    GoogleUrl(GoogleUrlArgs),
    /// Rate a password without registering.
    Strength { password: String },
    /// Print the stored session token.
    Token,
}

#[derive(Args, Debug)]
struct RegisterArgs {
    #[arg(long)]
    name: String,

    #[arg(long)]
    email: String,

    #[arg(long, env = "SIGNUP_PASSWORD", hide_env_values = true)]
    password: String,

    #[arg(long, default_value_t = false)]
    remember_me: bool,
}

#[derive(Args, Debug)]
struct GoogleLoginArgs {
    #[arg(long, conflicts_with = "callback_url", required_unless_present = "callback_url")]
    code: Option<String>,

    #[arg(long, help = "Redirect URL (or query string) Google sent the browser to")]
    callback_url: Option<String>,

    #[arg(long, requires = "callback_url", conflicts_with = "code", help = "State printed by `google-url`")]
    state: Option<String>,
}

#[derive(Args, Debug)]
struct GoogleUrlArgs {
    #[arg(long, env = "GOOGLE_CLIENT_ID")]
    client_id: Option<String>,

    #[arg(long, env = "GOOGLE_REDIRECT_URI")]
    redirect_uri: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config = resolve_config(SignupConfig::from_env(), cli.base_url, cli.token_file);
    tracing::debug!(base_url = %config.api_base_url, token_file = ?config.token_file, "resolved config");

    match cli.command {
        Command::Register(args) => run_register(&config, args).await,
        Command::GoogleLogin(args) => run_google_login(&config, args).await,
        Command::GoogleUrl(args) => run_google_url(&config, args),
        Command::Strength { password } => {
            run_strength(&password);
            Ok(())
        }
        Command::Token => run_token(&config),
    }
}

/// Flags win over environment-derived config.
fn resolve_config(mut config: SignupConfig, base_url: Option<String>, token_file: Option<PathBuf>) -> SignupConfig {
    if let Some(base_url) = base_url {
        config.api_base_url = base_url.trim_end_matches('/').to_owned();
    }
    if let Some(token_file) = token_file {
        config.token_file = Some(token_file);
    }
    config
}

fn token_path(config: &SignupConfig) -> PathBuf {
    config.token_file.clone().unwrap_or_else(|| PathBuf::from(DEFAULT_TOKEN_FILE))
}

fn build_client(config: &SignupConfig) -> Result<AuthClient<HttpAuthApi>, CliError> {
    let api = HttpAuthApi::new(&config.api_base_url)?;
    let session = Session::new(FileTokenStore::new(token_path(config)));
    Ok(AuthClient::new(api, session))
}

async fn run_register(config: &SignupConfig, args: RegisterArgs) -> Result<(), CliError> {
    let client = build_client(config)?;
    let mut state = SignupState::default();
    state.dispatch(Action::SetName(args.name));
    state.dispatch(Action::SetEmail(args.email));
    state.dispatch(Action::SetPassword(args.password));
    state.dispatch(Action::SetRememberMe(args.remember_me));

    let result = flow::submit_registration(&mut state, &client).await;
    print_feedback(&state);
    result?;
    Ok(())
}

async fn run_google_login(config: &SignupConfig, args: GoogleLoginArgs) -> Result<(), CliError> {
    let client = build_client(config)?;
    let mut state = SignupState::default();

    let result = match (args.code, args.callback_url) {
        (_, Some(url)) => flow::complete_google_callback(&mut state, &client, &url, args.state.as_deref()).await,
        (Some(code), None) => flow::submit_google_code(&mut state, &client, &code).await,
        (None, None) => flow::submit_google_code(&mut state, &client, "").await,
    };
    print_feedback(&state);
    result?;
    Ok(())
}

fn run_google_url(config: &SignupConfig, args: GoogleUrlArgs) -> Result<(), CliError> {
    let google = match (args.client_id, args.redirect_uri) {
        (Some(client_id), Some(redirect_uri)) => GoogleOAuthConfig { client_id, redirect_uri },
        _ => config.google.clone().ok_or(CliError::MissingGoogleConfig)?,
    };
    let state = oauth::generate_state();
    println!("{}", google.authorize_url(&state)?);
    eprintln!("state: {state}");
    Ok(())
}

fn run_strength(password: &str) {
    println!("{}", strength_report(password));
}

fn strength_report(password: &str) -> String {
    let strength = classify_strength(password);
    if is_unique(password) {
        format!("Password strength: {strength}")
    } else {
        format!("Password strength: {strength} (common password, will be rejected)")
    }
}

fn run_token(config: &SignupConfig) -> Result<(), CliError> {
    let path = token_path(config);
    let session = Session::new(FileTokenStore::new(&path));
    let token = session.token()?.ok_or_else(|| CliError::NoToken(path.display().to_string()))?;
    println!("{token}");
    Ok(())
}

fn print_feedback(state: &SignupState) {
    if !state.form.feedback_message.is_empty() {
        println!("{}", state.form.feedback_message);
    }
}
