//! Command-line access to the radiology reference catalog.
//!
//! Lists categories, resolves entries by id, and filters by attribute. Reads
//! the bundled catalog unless `--catalog` (or `RADREF_CATALOG`) names a JSON
//! catalog file, which is schema-checked before use.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use radref::{CatalogIndex, CatalogSource, EntryFilter, EntryKind, EntrySummary, Modality};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    if let Err(err) = run(cli) {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

/// Radiology classification and scoring reference tables
#[derive(Parser)]
#[command(name = "radref", version)]
struct Cli {
    /// Catalog JSON file to use instead of the bundled catalog; empty means bundled
    #[arg(
        long,
        global = true,
        env = radref::CATALOG_ENV,
        value_name = "PATH",
        value_parser = parse_catalog_path
    )]
    catalog: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List categories with their entry counts
    Categories {
        #[arg(long)]
        json: bool,
    },
    /// Show one category and its entries
    Category {
        id: String,
        #[arg(long)]
        json: bool,
    },
    /// Show one entry as JSON, or only its content
    Entry {
        id: String,
        /// Print the raw content markup instead of the JSON record
        #[arg(long)]
        content: bool,
    },
    /// List entries matching every supplied criterion
    Filter {
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        subcategory: Option<String>,
        /// informative or dynamic
        #[arg(long, value_parser = parse_kind)]
        kind: Option<EntryKind>,
        /// Modality code; repeat to accept any of several
        #[arg(long = "modality", value_name = "CODE")]
        modalities: Vec<String>,
        /// Case-insensitive substring of the entry name
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// Print the whole catalog as JSON
    Export,
    /// Check a catalog file against the schema and catalog invariants
    Validate { path: PathBuf },
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_env("RADREF_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_catalog_path(raw: &str) -> Result<PathBuf, String> {
    Ok(PathBuf::from(raw))
}

fn parse_kind(raw: &str) -> Result<EntryKind, String> {
    raw.parse::<EntryKind>().map_err(|err| err.to_string())
}

fn run(cli: Cli) -> Result<()> {
    let catalog_path = cli.catalog.filter(|path| !path.as_os_str().is_empty());
    let open = || -> Result<CatalogSource> {
        let source = CatalogSource::open(catalog_path.as_deref())?;
        tracing::info!(
            bundled = matches!(source, CatalogSource::Bundled(_)),
            entries = source.index().entry_count(),
            "catalog ready"
        );
        Ok(source)
    };

    match cli.command {
        Command::Categories { json } => list_categories(open()?.index(), json),
        Command::Category { id, json } => show_category(open()?.index(), &id, json),
        Command::Entry { id, content } => show_entry(open()?.index(), &id, content),
        Command::Filter {
            category,
            subcategory,
            kind,
            modalities,
            name,
            json,
        } => {
            let filter = EntryFilter {
                category: category.as_deref().map(Into::into),
                subcategory,
                kind,
                modality: if modalities.is_empty() {
                    None
                } else {
                    Some(modalities.iter().map(|code| Modality::from_code(code)).collect())
                },
                name,
            };
            let source = open()?;
            let matches: Vec<EntrySummary> = source
                .index()
                .filter(&filter)
                .map(|entry| entry.summary())
                .collect();
            tracing::debug!(?filter, matches = matches.len(), "filtered entries");
            print_summaries(&matches, json)
        }
        Command::Export => {
            let source = open()?;
            println!("{}", serde_json::to_string_pretty(source.index().catalog())?);
            Ok(())
        }
        Command::Validate { path } => validate(&path),
    }
}

#[derive(Serialize)]
struct CategoryRow<'a> {
    id: &'a str,
    name: &'a str,
    icon: &'a str,
    entries: usize,
}

fn list_categories(index: &CatalogIndex, json: bool) -> Result<()> {
    let rows: Vec<CategoryRow> = index
        .categories()
        .iter()
        .map(|category| CategoryRow {
            id: category.id.as_str(),
            name: &category.name,
            icon: &category.icon,
            entries: category.entries.len(),
        })
        .collect();
    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }
    for row in rows {
        println!("{:<14} {:>3}  {}", row.id, row.entries, row.name);
    }
    Ok(())
}

fn show_category(index: &CatalogIndex, id: &str, json: bool) -> Result<()> {
    let Some(category) = index.category(id) else {
        bail!("category '{id}' not found");
    };
    let summaries: Vec<EntrySummary> = category.entries.iter().map(|e| e.summary()).collect();
    if json {
        let value = serde_json::json!({
            "id": category.id,
            "name": category.name,
            "icon": category.icon,
            "subcategories": index.subcategories(id).unwrap_or_default(),
            "entries": summaries,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }
    println!("{} ({})", category.name, category.id);
    print_summaries(&summaries, false)
}

fn show_entry(index: &CatalogIndex, id: &str, content_only: bool) -> Result<()> {
    let Some(entry) = index.entry(id) else {
        bail!("entry '{id}' not found");
    };
    if content_only {
        println!("{}", entry.content);
    } else {
        println!("{}", serde_json::to_string_pretty(entry)?);
    }
    Ok(())
}

fn print_summaries(summaries: &[EntrySummary], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(summaries)?);
        return Ok(());
    }
    for summary in summaries {
        let modality = summary
            .modality
            .as_ref()
            .map(|codes| {
                codes
                    .iter()
                    .map(Modality::as_str)
                    .collect::<Vec<_>>()
                    .join(",")
            })
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<20} {:<11} {:<14} {}",
            summary.id.as_str(),
            summary.kind.as_str(),
            modality,
            summary.name
        );
    }
    Ok(())
}

fn validate(path: &Path) -> Result<()> {
    let index = CatalogIndex::load(path)
        .with_context(|| format!("catalog {} is invalid", path.display()))?;
    println!(
        "{}: ok ({} categories, {} entries)",
        path.display(),
        index.categories().len(),
        index.entry_count()
    );
    Ok(())
}
