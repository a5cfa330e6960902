use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use contentquill::config::Config;
use contentquill::document::parser::{parse_input_value, to_json_string};
use contentquill::document::template::village_profile;
use contentquill::editor::{EditorSession, Mutation};
use contentquill::file::loader::{load_content_file, load_content_from_stdin};
use contentquill::file::saver::save_content_file;
use contentquill::file::FileContentService;
use contentquill::path::{resolve, ContentPath};
use contentquill::resources::{
    Event, EventCatalog, EventStatus, ResourceListController, ResourceQuery,
};

/// ContentQuill - edit village page content by path
#[derive(Parser)]
#[command(name = "contentquill")]
#[command(version)]
#[command(about = "Path-addressed editor for nested page-content JSON", long_about = None)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Create missing parent objects instead of failing
    #[arg(long, global = true)]
    create_missing: bool,

    #[command(subcommand)]
    command: Command,
}

/// FILE argument that reads the document from stdin.
const STDIN_FILE: &str = "-";

#[derive(Subcommand)]
enum Command {
    /// Print the value at PATH (FILE may be `-` for stdin)
    Get { file: PathBuf, path: String },

    /// Replace the value at PATH (VALUE is JSON, or plain text).
    /// With `-` as FILE the document is read from stdin and the result printed.
    Set {
        file: PathBuf,
        path: String,
        value: String,
        /// Print the result instead of saving it
        #[arg(long)]
        dry_run: bool,
    },

    /// Append VALUE to the array at PATH
    Append {
        file: PathBuf,
        path: String,
        value: String,
        #[arg(long)]
        dry_run: bool,
    },

    /// Remove element INDEX from the array at PATH
    Remove {
        file: PathBuf,
        path: String,
        #[arg(allow_negative_numbers = true)]
        index: isize,
        #[arg(long)]
        dry_run: bool,
    },

    /// Apply a JSON array of mutations as one edit
    Apply {
        file: PathBuf,
        mutations: PathBuf,
        #[arg(long)]
        dry_run: bool,
    },

    /// Write a new village profile document
    Init {
        file: PathBuf,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// List events from a JSON array of event records
    Events {
        file: PathBuf,
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        status: Option<EventStatus>,
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = 10)]
        per_page: u32,
    },

    /// Print the effective configuration as TOML
    Config {
        /// Also write it to the default config file
        #[arg(long)]
        write: bool,
    },
}

fn is_stdin(file: &Path) -> bool {
    file.as_os_str() == STDIN_FILE
}

fn load_document(file: &Path) -> Result<contentquill::ContentNode> {
    if is_stdin(file) {
        load_content_from_stdin()
    } else {
        load_content_file(file)
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load();
    if cli.create_missing {
        config.create_missing_parents = true;
    }
    debug!(?config, "configuration loaded");

    match cli.command {
        Command::Get { file, path } => {
            let document = load_document(&file)?;
            let path = ContentPath::parse(&path)?;
            let node = resolve(&document, &path)?;
            println!("{}", to_json_string(node, config.indent_size)?);
            Ok(())
        }
        Command::Set {
            file,
            path,
            value,
            dry_run,
        } => edit(&file, &config, dry_run, vec![Mutation::Set {
            path,
            value: parse_input_value(&value),
        }]),
        Command::Append {
            file,
            path,
            value,
            dry_run,
        } => edit(&file, &config, dry_run, vec![Mutation::Append {
            path,
            value: parse_input_value(&value),
        }]),
        Command::Remove {
            file,
            path,
            index,
            dry_run,
        } => edit(&file, &config, dry_run, vec![Mutation::RemoveAt { path, index }]),
        Command::Apply {
            file,
            mutations,
            dry_run,
        } => {
            let text = std::fs::read_to_string(&mutations)
                .with_context(|| format!("Failed to read {}", mutations.display()))?;
            let batch: Vec<Mutation> =
                serde_json::from_str(&text).context("Invalid mutation list")?;
            edit(&file, &config, dry_run, batch)
        }
        Command::Init { file, force } => {
            if file.exists() && !force {
                bail!("{} already exists (use --force to overwrite)", file.display());
            }
            save_content_file(&file, &village_profile(), &config)?;
            println!("Created {}", file.display());
            Ok(())
        }
        Command::Events {
            file,
            search,
            category,
            status,
            page,
            per_page,
        } => {
            let query = ResourceQuery {
                search,
                category,
                status,
                page,
                per_page,
            };
            list_events(&file, query)
        }
        Command::Config { write } => {
            print!("{}", toml::to_string_pretty(&config)?);
            if write {
                config.save()?;
                if let Some(path) = Config::config_path() {
                    eprintln!("Wrote {}", path.display());
                }
            }
            Ok(())
        }
    }
}

/// Loads `file`, applies `mutations` as one edit, and saves or prints the result.
///
/// A document read from stdin has nowhere to be saved, so it is always printed.
fn edit(file: &Path, config: &Config, dry_run: bool, mutations: Vec<Mutation>) -> Result<()> {
    let mut service = FileContentService::new(file, config.clone());
    let mut session = if is_stdin(file) {
        EditorSession::with_config(load_content_from_stdin()?, config)
    } else {
        EditorSession::load(&service, config)?
    };

    if let Err((position, e)) = session.apply_all(&mutations) {
        if mutations.len() > 1 {
            bail!("mutation #{} ({}) failed: {}", position + 1, mutations[position].op_name(), e);
        }
        bail!(e);
    }

    if dry_run || is_stdin(file) {
        println!("{}", to_json_string(session.current(), config.indent_size)?);
        return Ok(());
    }

    if session.is_dirty() {
        session.save(&mut service)?;
    }
    Ok(())
}

fn list_events(file: &Path, query: ResourceQuery) -> Result<()> {
    let text = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let events: Vec<Event> = serde_json::from_str(&text).context("Invalid event list")?;

    let catalog = EventCatalog::new(events, chrono::Utc::now());
    let page = query.page;
    let mut list = ResourceListController::with_query(catalog, query);
    let listing = list.go_to_page(page)?;

    for item in &listing.items {
        println!(
            "{:>5}  {:<10}  {}  {}",
            item.event.id,
            item.status,
            item.event.start_date.format("%Y-%m-%d"),
            item.event.title
        );
    }
    println!(
        "page {}/{} ({} events)",
        listing.page,
        listing.total_pages(),
        listing.total
    );
    Ok(())
}
