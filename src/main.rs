use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use shelfdesk::api::{Credentials, HttpAuthApi, Registration};
use shelfdesk::config::{self, SessionConfig};
use shelfdesk::manager::SessionWatch;
use shelfdesk::store::FileStore;
use shelfdesk::guard::{Navigation, navigate};
use shelfdesk::{Completion, SessionService, SystemClock};
use tokio::sync::mpsc;
use tracing::debug;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{0}")]
    AuthFailed(String),
    #[error("auth attempt was superseded; try again")]
    Superseded,
    #[error("no active session; run `shelfdesk login` first")]
    NoSession,
    #[error("session expired; run `shelfdesk login` again")]
    Expired,
    #[error("signal handler failed: {0}")]
    Signal(#[from] std::io::Error),
}

#[derive(Parser, Debug)]
#[command(name = "shelfdesk", about = "Library admin session console")]
struct Cli {
    /// API root; defaults to `SHELFDESK_API_BASE_URL`, then the hosted backend.
    #[arg(long)]
    base_url: Option<String>,

    #[arg(long, env = "SHELFDESK_SESSION_FILE", default_value = ".shelfdesk-session.json")]
    session_file: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sign in and store the session.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "SHELFDESK_PASSWORD")]
        password: String,
    },
    /// Create an admin account and store the session.
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long, env = "SHELFDESK_PASSWORD")]
        password: String,
    },
    /// Clear the stored session.
    Logout,
    /// Show whether the stored session may open a route.
    Status {
        #[arg(long, default_value = shelfdesk::routes::DASHBOARD_ROUTE)]
        path: String,
    },
    /// Keep re-checking the session until it expires or Ctrl-C.
    Watch,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let store = Arc::new(FileStore::new(&cli.session_file));
    let service = SessionService::new(store, Arc::new(SystemClock), SessionConfig::from_env());
    let base_url = cli.base_url.map_or_else(config::api_base_url, |url| url.trim_end_matches('/').to_owned());
    let api = HttpAuthApi::new(base_url);
    debug!(base_url = api.base_url(), "auth api configured");

    let result = match cli.command {
        Command::Login { email, password } => run_login(&service, &api, Credentials { email, password }).await,
        Command::Register { name, email, password } => {
            run_register(&service, &api, Registration { name, email, password }).await
        }
        Command::Logout => {
            service.logout();
            println!("logged out");
            Ok(())
        }
        Command::Status { path } => run_status(&service, &path),
        Command::Watch => run_watch(service).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run_login(service: &SessionService, api: &HttpAuthApi, credentials: Credentials) -> Result<(), CliError> {
    let completion = service.login(api, &credentials).await;
    report_completion(service, completion)
}

async fn run_register(
    service: &SessionService,
    api: &HttpAuthApi,
    registration: Registration,
) -> Result<(), CliError> {
    let completion = service.register(api, &registration).await;
    report_completion(service, completion)
}

fn report_completion(service: &SessionService, completion: Completion) -> Result<(), CliError> {
    match completion {
        Completion::Authenticated => {
            let name = service.snapshot().display_name().unwrap_or("admin").to_owned();
            println!("signed in as {name}");
            Ok(())
        }
        Completion::Failed(message) => Err(CliError::AuthFailed(message)),
        Completion::Stale => Err(CliError::Superseded),
    }
}

fn run_status(service: &SessionService, path: &str) -> Result<(), CliError> {
    let had_session = service.is_authenticated();
    let remaining = service.remaining();
    match navigate(service, path) {
        Navigation::Render(route) if !route.requires_auth() => {
            println!("{} is public", route.path());
            Ok(())
        }
        Navigation::Render(route) => {
            let name = service
                .current_user()
                .map_or_else(|| "unknown user".to_owned(), |u| u.name);
            let left = remaining.map_or_else(String::new, |d| format!(" ({} left)", format_duration(d)));
            println!("signed in as {name}{left}; {} is open", route.path());
            Ok(())
        }
        Navigation::Redirect(_) if had_session => Err(CliError::Expired),
        Navigation::Redirect(_) => Err(CliError::NoSession),
    }
}

async fn run_watch(service: SessionService) -> Result<(), CliError> {
    if !service.is_authenticated() {
        return Err(CliError::NoSession);
    }
    let period = service.config().check_interval;
    let (tx, mut rx) = mpsc::unbounded_channel();
    let handle = SessionWatch::new(service).spawn(move |to| {
        let _ = tx.send(to);
    });
    println!("watching session every {}", format_duration(period));

    tokio::select! {
        _ = rx.recv() => Err(CliError::Expired),
        signal = tokio::signal::ctrl_c() => {
            handle.stop();
            signal?;
            println!("stopped watching");
            Ok(())
        }
    }
}

fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    let (h, m, s) = (secs / 3600, (secs % 3600) / 60, secs % 60);
    if h > 0 {
        format!("{h}h{m:02}m")
    } else if m > 0 {
        format!("{m}m{s:02}s")
    } else {
        format!("{s}s")
    }
}
