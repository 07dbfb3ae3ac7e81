use anyhow::{Context, Result, anyhow};
use chainsite::config::{Settings, SettingsManager, parse_target};
use chainsite::countdown::Countdown;
use chainsite::document::TracingDocument;
use chainsite::download::{
    DownloadStatus, FileDownloadSink, SimulatedDownload, WHITEPAPERS, catalog,
};
use chainsite::format::{format_countdown, format_percent};
use chainsite::i18n::{Language, LanguageStore, SiteContext};
use chainsite::interactive::{InteractiveSite, SiteApp};
use chainsite::logging::{init_file_tracing, init_tracing};
use chainsite::storage::FileStorage;
use chainsite::timer::SystemClock;
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{self, Write};
use std::path::PathBuf;
use std::thread;
use std::time::Instant;

#[derive(Parser)]
#[command(
    name = "chainsite",
    version,
    about = "Terminal front end for the Chainsite ecosystem site",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Settings file (default: <config dir>/chainsite/settings.json)
    #[arg(long, global = true, env = "CHAINSITE_CONFIG")]
    config: Option<PathBuf>,

    /// Preference storage file (default: <data dir>/chainsite/storage.json)
    #[arg(long, global = true, env = "CHAINSITE_STORAGE")]
    storage: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse and download whitepapers in the terminal UI (default)
    Interactive,

    /// Show or change the preferred language
    Lang {
        #[command(subcommand)]
        action: LangCommand,
    },

    /// Download a whitepaper with a progress bar
    Download {
        /// Whitepaper slug (defaults to the first one in the catalog)
        slug: Option<String>,

        /// Directory to save into
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Time left until the mainnet launch
    Countdown {
        /// Launch instant in RFC 3339, e.g. 2027-01-01T00:00:00Z
        #[arg(long)]
        target: Option<String>,
    },

    /// List the whitepaper catalog
    Whitepapers {
        #[arg(short = 'f', long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

#[derive(Subcommand)]
enum LangCommand {
    /// Print the active language and its text direction
    Show {
        #[arg(short = 'f', long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Persist a new language preference
    Set {
        /// Language code: en, tr, uz, ru, ar or es
        code: String,
    },
    /// List supported languages
    List,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Interactive);

    if matches!(command, Commands::Interactive) {
        let log_path = log_file_path();
        init_file_tracing(cli.verbose, &log_path)
            .with_context(|| format!("Failed to open log file {}", log_path.display()))?;
    } else {
        init_tracing(cli.verbose);
    }

    let settings = load_settings(cli.config)?;
    let storage_path = cli.storage.or_else(|| settings.storage_path.clone());

    match command {
        Commands::Interactive => run_interactive(&settings, storage_path),
        Commands::Lang { action } => run_lang(&settings, storage_path, action),
        Commands::Download { slug, output } => {
            run_download(&settings, storage_path, slug.as_deref(), output)
        }
        Commands::Countdown { target } => run_countdown(&settings, storage_path, target),
        Commands::Whitepapers { format } => run_whitepapers(format),
    }
}

fn load_settings(config: Option<PathBuf>) -> Result<Settings> {
    let manager = match config {
        Some(path) => SettingsManager::with_path(path),
        None => SettingsManager::new()?,
    };
    let settings = manager.load()?;
    tracing::debug!(path = %manager.path().display(), "settings loaded");
    Ok(settings)
}

fn log_file_path() -> PathBuf {
    dirs::data_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join("chainsite")
        .join("chainsite.log")
}

fn open_language_store(settings: &Settings, storage_path: Option<PathBuf>) -> Result<LanguageStore> {
    let mut store = language_store(settings, storage_path)?;
    store.initialize();
    Ok(store)
}

/// Language store backed by the preference file
fn language_store(settings: &Settings, storage_path: Option<PathBuf>) -> Result<LanguageStore> {
    let storage = match storage_path {
        Some(path) => FileStorage::with_path(path),
        None => FileStorage::new()?,
    };
    Ok(LanguageStore::new(
        settings.default_language,
        Box::new(storage),
        Box::new(TracingDocument),
    ))
}

fn output_dir(settings: &Settings, output: Option<PathBuf>) -> PathBuf {
    output
        .or_else(|| settings.download.output_dir.clone())
        .unwrap_or_else(FileDownloadSink::default_dir)
}

fn run_interactive(settings: &Settings, storage_path: Option<PathBuf>) -> Result<()> {
    let mut context = SiteContext::new();
    context.provide(language_store(settings, storage_path)?);

    let app = SiteApp::new(
        context,
        SystemClock,
        StdRng::from_entropy(),
        settings.search_timings(),
        settings.progress_timings(),
        settings.launch_countdown()?,
        Box::new(FileDownloadSink::new(output_dir(settings, None))),
    )?;

    InteractiveSite::new(app).run()
}

fn run_lang(settings: &Settings, storage_path: Option<PathBuf>, action: LangCommand) -> Result<()> {
    let mut store = open_language_store(settings, storage_path)?;

    match action {
        LangCommand::Show { format } => {
            let language = store.language();
            match format {
                OutputFormat::Text => println!(
                    "{} ({}) {}",
                    language.native_name().bold(),
                    language.code(),
                    language.direction().to_string().dimmed()
                ),
                OutputFormat::Json => {
                    let output = serde_json::json!({
                        "language": language,
                        "native_name": language.native_name(),
                        "direction": language.direction(),
                    });
                    let stdout = io::stdout();
                    let mut handle = stdout.lock();
                    serde_json::to_writer_pretty(&mut handle, &output)?;
                    writeln!(&mut handle)?;
                }
            }
        }
        LangCommand::Set { code } => {
            store.set_language(&code);
            if Language::from_code(&code).is_none() {
                let supported: Vec<&str> = Language::ALL.iter().map(|l| l.code()).collect();
                eprintln!(
                    "{} unsupported language '{}', keeping {} (supported: {})",
                    "warning:".yellow().bold(),
                    code,
                    store.language().code(),
                    supported.join(", ")
                );
            } else {
                println!(
                    "{} {}",
                    "Language set to".green(),
                    store.language().native_name().bold()
                );
            }
        }
        LangCommand::List => {
            let active = store.language();
            for language in Language::ALL.iter().copied() {
                let marker = if language == active { "*" } else { " " };
                println!(
                    "{} {}  {} {}",
                    marker.green().bold(),
                    language.code().cyan(),
                    language.native_name(),
                    language.direction().to_string().dimmed()
                );
            }
        }
    }
    Ok(())
}

fn run_download(
    settings: &Settings,
    storage_path: Option<PathBuf>,
    slug: Option<&str>,
    output: Option<PathBuf>,
) -> Result<()> {
    let language = open_language_store(settings, storage_path)?.language();
    let strings = &language.translations().download;

    let paper = match slug {
        Some(slug) => catalog::find(slug).ok_or_else(|| {
            anyhow!("Unknown whitepaper '{slug}'. Run `chainsite whitepapers` to list them")
        })?,
        None => &WHITEPAPERS[0],
    };

    let mut download = SimulatedDownload::new(
        SystemClock,
        StdRng::from_entropy(),
        settings.progress_timings(),
        paper,
        Box::new(FileDownloadSink::new(output_dir(settings, output))),
    );

    let pb = ProgressBar::new(100);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{bar:40.cyan/blue}] {prefix}")?
            .progress_chars("=>-"),
    );
    pb.set_message(format!("{} {}", strings.running, paper.title));

    download.start();
    while download.status() == DownloadStatus::Running {
        let Some(deadline) = download.next_deadline() else {
            break;
        };
        thread::sleep(deadline.saturating_duration_since(Instant::now()));
        download.tick();
        pb.set_position(download.percent() as u64);
        pb.set_prefix(format_percent(language, download.percent()));
    }
    pb.finish_with_message(strings.complete);

    let path = download
        .saved_to()
        .ok_or_else(|| anyhow!("Failed to save {}", paper.file_name))?;
    println!("{} {}", strings.saved_to.green(), path.display());
    Ok(())
}

fn run_countdown(
    settings: &Settings,
    storage_path: Option<PathBuf>,
    target: Option<String>,
) -> Result<()> {
    let language = open_language_store(settings, storage_path)?.language();
    let countdown = match target {
        Some(target) => Countdown::new(parse_target(&target)?),
        None => settings.launch_countdown()?,
    };

    let parts = countdown.remaining(chrono::Utc::now());
    let strings = &language.translations().countdown;
    if parts.is_finished() {
        println!("{}", format_countdown(language, &parts).green().bold());
    } else {
        println!(
            "{} {}",
            strings.title,
            format_countdown(language, &parts).cyan().bold()
        );
    }
    Ok(())
}

fn run_whitepapers(format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for paper in WHITEPAPERS {
                println!(
                    "{} {} {}",
                    paper.slug.cyan().bold(),
                    paper.title,
                    format!("v{}", paper.version).dimmed()
                );
                println!("    {}", paper.summary);
            }
        }
        OutputFormat::Json => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            serde_json::to_writer_pretty(&mut handle, WHITEPAPERS)?;
            writeln!(&mut handle)?;
        }
    }
    Ok(())
}
