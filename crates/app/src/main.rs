use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use dynform_core::{Clock, SchemaRegistry};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

const DEFAULT_TITLE: &str = "Dynamic Form";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    EmptyValue { flag: &'static str },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::EmptyValue { flag } => write!(f, "{flag} cannot be empty"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    let value = args.next().ok_or(ArgsError::MissingValue { flag })?;
    if value.trim().is_empty() {
        return Err(ArgsError::EmptyValue { flag });
    }
    Ok(value)
}

struct DesktopApp {
    title: String,
    registry: Arc<SchemaRegistry>,
    initial_form: Option<String>,
}

impl UiApp for DesktopApp {
    fn app_name(&self) -> &str {
        &self.title
    }

    fn registry(&self) -> Arc<SchemaRegistry> {
        Arc::clone(&self.registry)
    }

    fn clock(&self) -> Clock {
        Clock::system()
    }

    fn initial_form(&self) -> Option<String> {
        self.initial_form.clone()
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui     [--schema <path>] [--form <name>] [--title <text>]");
    eprintln!("  cargo run -p app -- schema [--schema <path>]   # print the schema table as JSON");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  built-in schema table, no form selected, title \"{DEFAULT_TITLE}\"");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  DYNFORM_SCHEMA, DYNFORM_FORM, DYNFORM_TITLE, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Schema,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "schema" => Some(Self::Schema),
            _ => None,
        }
    }
}

#[derive(Debug, Default)]
struct Args {
    schema_path: Option<PathBuf>,
    initial_form: Option<String>,
    title: Option<String>,
}

impl Args {
    fn from_env() -> Self {
        let non_empty = |key: &str| std::env::var(key).ok().filter(|v| !v.trim().is_empty());
        Self {
            schema_path: non_empty("DYNFORM_SCHEMA").map(PathBuf::from),
            initial_form: non_empty("DYNFORM_FORM"),
            title: non_empty("DYNFORM_TITLE"),
        }
    }

    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        Self::from_env().apply_args(args)
    }

    /// Flags override whatever `self` already holds (env values in practice).
    fn apply_args(mut self, args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--schema" => {
                    self.schema_path = Some(PathBuf::from(require_value(args, "--schema")?));
                }
                "--form" => self.initial_form = Some(require_value(args, "--form")?),
                "--title" => self.title = Some(require_value(args, "--title")?),
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(self)
    }

    fn load_registry(&self) -> Result<SchemaRegistry, Box<dyn std::error::Error>> {
        let Some(path) = &self.schema_path else {
            return Ok(SchemaRegistry::builtin());
        };
        tracing::info!(path = %path.display(), "loading schema table");
        let raw = std::fs::read_to_string(path)?;
        Ok(SchemaRegistry::from_json(&raw)?)
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // Ignore the error if a subscriber is already installed.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // Default behavior: launching UI when no subcommand is provided.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let parsed = Args::parse(&mut argv.into_iter()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;
    let registry = parsed.load_registry()?;

    match cmd {
        Command::Ui => {
            if let Some(form) = &parsed.initial_form {
                if !registry.contains(form) {
                    tracing::warn!(form = %form, "configured form type is not in the schema table");
                }
            }

            let title = parsed.title.unwrap_or_else(|| DEFAULT_TITLE.to_owned());
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
                title: title.clone(),
                registry: Arc::new(registry),
                initial_form: parsed.initial_form,
            });
            let context = build_app_context(&app);

            // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title(title)
                    .with_always_on_top(false),
            );

            tracing::info!(form_types = app.registry().len(), "launching desktop window");
            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Schema => {
            println!("{}", registry.to_json()?);
            Ok(())
        }
    }
}

fn main() {
    init_tracing();
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
