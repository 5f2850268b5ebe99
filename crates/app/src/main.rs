use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{Clock, THINKING_DELAY_MS, TransitionPolicy};
use tracing::info;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

const DEFAULT_TITLE: &str = "Stream Quiz";
const DEFAULT_LOG_DIRECTIVES: &str = "services=info,ui=info,app=info";

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDelay { raw: String },
    EmptyTitle,
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDelay { raw } => write!(f, "invalid delay in milliseconds: {raw}"),
            ArgsError::EmptyTitle => write!(f, "window title must not be empty"),
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

fn parse_delay(raw: &str) -> Result<i64, ArgsError> {
    raw.trim()
        .parse::<u32>()
        .map(i64::from)
        .map_err(|_| ArgsError::InvalidDelay {
            raw: raw.to_string(),
        })
}

fn parse_title(raw: String) -> Result<String, ArgsError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ArgsError::EmptyTitle);
    }
    Ok(trimmed.to_string())
}

struct DesktopApp {
    title: String,
    policy: TransitionPolicy,
    clock: Clock,
}

impl UiApp for DesktopApp {
    fn app_name(&self) -> &str {
        &self.title
    }

    fn transition_policy(&self) -> TransitionPolicy {
        self.policy
    }

    fn clock(&self) -> Clock {
        self.clock
    }
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    delay_ms: i64,
    title: String,
}

#[derive(Debug, PartialEq, Eq)]
enum Parsed {
    Run(Args),
    Help,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--delay-ms <ms>] [--no-delay] [--title <text>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --delay-ms {THINKING_DELAY_MS}");
    eprintln!("  --title \"{DEFAULT_TITLE}\"");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_DELAY_MS, QUIZ_WINDOW_TITLE, RUST_LOG");
}

impl Args {
    /// Flags override environment values, which override defaults.
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Parsed, ArgsError> {
        let mut delay_ms = match env("QUIZ_DELAY_MS") {
            Some(raw) => parse_delay(&raw)?,
            None => THINKING_DELAY_MS,
        };
        let mut title = match env("QUIZ_WINDOW_TITLE") {
            Some(raw) => parse_title(raw)?,
            None => DEFAULT_TITLE.to_string(),
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--delay-ms" => {
                    let value = require_value(args, "--delay-ms")?;
                    delay_ms = parse_delay(&value)?;
                }
                "--no-delay" => delay_ms = 0,
                "--title" => {
                    let value = require_value(args, "--title")?;
                    title = parse_title(value)?;
                }
                "--help" | "-h" => return Ok(Parsed::Help),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Parsed::Run(Self { delay_ms, title }))
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_DIRECTIVES));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv, |key| std::env::var(key).ok()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;
    let args = match parsed {
        Parsed::Run(args) => args,
        Parsed::Help => {
            print_usage();
            return Ok(());
        }
    };

    let policy = TransitionPolicy::from_millis(args.delay_ms);
    info!(delay_ms = args.delay_ms, title = %args.title, "launching quiz");

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(args.title.clone())
            .with_always_on_top(false),
    );
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        title: args.title,
        policy,
        clock: Clock::system(),
    });
    let context = build_app_context(&app);

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    init_tracing();
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
