use std::env;
use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use ielts_core::model::UserRole;
use services::{AppServices, AuthService, CatalogService, Clock, ContentManagerService};
use services::{ExamLoopService, ResultService};
use storage::Storage;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use ui::{App, UiApp, build_app_context};

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidUser { raw: String },
    InvalidRoute { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidUser { raw } => {
                write!(f, "invalid --user value: {raw} (expected <email>:<role>)")
            }
            ArgsError::InvalidRoute { raw } => write!(f, "invalid --start value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn env_bool(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .and_then(|v| match v.as_str() {
            "1" | "true" | "TRUE" | "yes" | "YES" => Some(true),
            "0" | "false" | "FALSE" | "no" | "NO" => Some(false),
            _ => None,
        })
        .unwrap_or(default)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if env_bool("IELTS_LOG_JSON", false) {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

/// A simulated sign-in given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SeedUser {
    email: String,
    role: UserRole,
}

fn parse_user(raw: &str) -> Result<SeedUser, ArgsError> {
    let invalid = || ArgsError::InvalidUser {
        raw: raw.to_string(),
    };
    let (email, role) = raw.rsplit_once(':').ok_or_else(invalid)?;
    let role = role.parse::<UserRole>().map_err(|_| invalid())?;
    if email.trim().is_empty() {
        return Err(invalid());
    }
    Ok(SeedUser {
        email: email.trim().to_string(),
        role,
    })
}

fn parse_route(raw: String) -> Result<String, ArgsError> {
    if raw.starts_with('/') {
        Ok(raw)
    } else {
        Err(ArgsError::InvalidRoute { raw })
    }
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    user: Option<SeedUser>,
    start_route: Option<String>,
    help: bool,
}

impl Args {
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env_user: Option<String>,
        env_route: Option<String>,
    ) -> Result<Self, ArgsError> {
        let mut user = env_user.as_deref().map(parse_user).transpose()?;
        let mut start_route = env_route.map(parse_route).transpose()?;
        let mut help = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--user" => {
                    let value = require_value(args, "--user")?;
                    user = Some(parse_user(&value)?);
                }
                "--start" => {
                    let value = require_value(args, "--start")?;
                    start_route = Some(parse_route(value)?);
                }
                "--help" | "-h" => help = true,
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            user,
            start_route,
            help,
        })
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--user <email>:<role>] [--start <route>]");
    eprintln!();
    eprintln!("Roles: admin, content_manager, candidate");
    eprintln!("Routes: /, /tests/<skill>, /tests/<skill>/<test-id>, /content-manager");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  IELTS_USER, IELTS_START_ROUTE, IELTS_LOG_JSON, RUST_LOG");
}

struct DesktopApp {
    services: AppServices,
    start_route: Option<String>,
}

impl UiApp for DesktopApp {
    fn app_name(&self) -> &str {
        "IELTS Practice"
    }

    fn clock(&self) -> Clock {
        self.services.clock()
    }

    fn start_route(&self) -> Option<String> {
        self.start_route.clone()
    }

    fn catalog(&self) -> Arc<CatalogService> {
        self.services.catalog()
    }

    fn results(&self) -> Arc<ResultService> {
        self.services.results()
    }

    fn auth(&self) -> Arc<AuthService> {
        self.services.auth()
    }

    fn content(&self) -> Arc<ContentManagerService> {
        self.services.content()
    }

    fn exams(&self) -> Arc<ExamLoopService> {
        self.services.exams()
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = env::args().skip(1);
    let args = Args::parse(
        &mut argv,
        env::var("IELTS_USER").ok(),
        env::var("IELTS_START_ROUTE").ok(),
    )
    .inspect_err(|_| print_usage())?;
    if args.help {
        print_usage();
        return Ok(());
    }

    init_tracing();

    // Everything lives in memory; content edits are gone after exit.
    let storage = Storage::seeded();
    let services = AppServices::new(&storage, Clock::system());
    if let Some(user) = &args.user {
        services.auth().sign_in(&user.email, user.role).await?;
    } else {
        warn!("no user given; the content manager will ask for a sign-in");
    }
    info!(start = args.start_route.as_deref().unwrap_or("/"), "launching desktop app");

    let app = DesktopApp {
        services,
        start_route: args.start_route,
    };
    let context = build_app_context(Arc::new(app));

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("IELTS Practice")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
