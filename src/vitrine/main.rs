use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use unicode_width::UnicodeWidthStr;
use vitrine::api::{CmdMessage, CmdResult, Facet, MessageLevel, VitrineApi};
use vitrine::error::Result;
use vitrine::filter::{DateRange, FilterSet};
use vitrine::model::AssetRecord;
use vitrine::session::DEFAULT_FETCH_LATENCY;
use vitrine::store::fs::FileStore;

mod args;
use args::{Cli, Commands, ListArgs};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let catalog_flag = cli.catalog.clone();

    match cli.command {
        Some(Commands::List(opts)) => {
            let latency = if opts.no_delay {
                Duration::ZERO
            } else {
                DEFAULT_FETCH_LATENCY
            };
            handle_list(&init_api(catalog_flag, latency), opts)
        }
        Some(Commands::Show { ids }) => handle_show(&init_api(catalog_flag, Duration::ZERO), ids),
        Some(Commands::Collections) => {
            handle_facet(&init_api(catalog_flag, Duration::ZERO), Facet::Collections)
        }
        Some(Commands::Chains) => {
            handle_facet(&init_api(catalog_flag, Duration::ZERO), Facet::Chains)
        }
        Some(Commands::Init { force }) => handle_init(catalog_flag, force),
        None => handle_list(
            &init_api(catalog_flag, DEFAULT_FETCH_LATENCY),
            ListArgs::default(),
        ),
    }
}

fn init_api(catalog: Option<PathBuf>, latency: Duration) -> VitrineApi<FileStore> {
    let catalog_path = resolve_catalog_path(catalog);
    VitrineApi::new(FileStore::new(catalog_path)).with_latency(latency)
}

fn default_catalog_path() -> PathBuf {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    cwd.join(".vitrine").join("catalog.json")
}

fn resolve_catalog_path(explicit: Option<PathBuf>) -> PathBuf {
    if let Some(path) = explicit {
        return path;
    }
    let project_catalog = default_catalog_path();
    if project_catalog.exists() {
        return project_catalog;
    }
    match ProjectDirs::from("com", "vitrine", "vitrine") {
        Some(dirs) => dirs.data_dir().join("catalog.json"),
        None => project_catalog,
    }
}

fn handle_list(api: &VitrineApi<FileStore>, opts: ListArgs) -> Result<()> {
    let raw_query = opts.query.join(" ");

    let mut filters = FilterSet::new();
    filters.chains.extend(opts.chains);
    filters.collections.extend(opts.collections);
    if opts.minted_after.is_some() || opts.minted_before.is_some() {
        filters.date_range = Some(DateRange::new(opts.minted_after, opts.minted_before));
    }

    let pages = if opts.all { usize::MAX } else { opts.pages.max(1) };

    let result = api.browse(&raw_query, filters, pages)?;
    print_records(&result.listed_records);
    print_summary(&result);
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(api: &VitrineApi<FileStore>, ids: Vec<String>) -> Result<()> {
    let result = api.show(&ids)?;
    print_full_records(&result.listed_records);
    print_messages(&result.messages);
    Ok(())
}

fn handle_facet(api: &VitrineApi<FileStore>, facet: Facet) -> Result<()> {
    let result = match facet {
        Facet::Collections => api.collections()?,
        Facet::Chains => api.chains()?,
    };
    for (value, count) in &result.facet_counts {
        println!("{:>5}  {}", count.to_string().dimmed(), value);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_init(catalog: Option<PathBuf>, force: bool) -> Result<()> {
    let path = catalog.unwrap_or_else(default_catalog_path);
    let api = init_api(Some(path.clone()), Duration::ZERO);
    let result = api.init(&path, force)?;
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 16;

fn print_records(records: &[AssetRecord]) {
    for (i, record) in records.iter().enumerate() {
        let idx_str = format!("{:>3}. ", i + 1);

        let chain_str = match record.chain.as_deref() {
            Some(chain) => format!(" [{}]", chain),
            None => String::new(),
        };

        let label = match record.collection.as_deref() {
            Some(collection) => format!("{} · {}", record.name, collection),
            None => record.name.clone(),
        };

        let fixed_width = idx_str.width() + chain_str.width() + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);
        let label_display = truncate_to_width(&label, available);
        let padding = available.saturating_sub(label_display.width());

        println!(
            "{}{}{}{}{}",
            idx_str.dimmed(),
            label_display,
            " ".repeat(padding),
            chain_str.cyan(),
            format_minted_ago(record).dimmed()
        );
    }
}

fn print_summary(result: &CmdResult) {
    if result.listed_records.is_empty() {
        return;
    }
    println!(
        "\n{}",
        format!(
            "Showing {} of {} records",
            result.listed_records.len(),
            result.total_matched
        )
        .dimmed()
    );
    if result.has_more {
        println!(
            "{}",
            "More available: raise --pages or pass --all".dimmed()
        );
    }
}

fn print_full_records(records: &[AssetRecord]) {
    for (i, record) in records.iter().enumerate() {
        if i > 0 {
            println!("\n================================\n");
        }
        println!(
            "{} {}",
            format!("#{}", record.id).yellow(),
            record.name.bold()
        );
        println!("--------------------------------");
        if !record.description.is_empty() {
            println!("{}", record.description);
        }
        if let Some(collection) = &record.collection {
            println!("Collection: {}", collection);
        }
        if let Some(chain) = &record.chain {
            println!("Chain: {}", chain);
        }
        if let Some(mint_date) = &record.mint_date {
            println!("Minted: {}", mint_date);
        }
        if !record.image.is_empty() {
            println!("Image: {}", record.image);
        }
        if !record.attributes.is_empty() {
            println!("Traits:");
            for attr in &record.attributes {
                println!("  {}: {}", attr.trait_type.dimmed(), attr.value);
            }
        }
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_minted_ago(record: &AssetRecord) -> String {
    let time_str = match record.parsed_mint_date() {
        Some(date) => {
            let days = (chrono::Utc::now().date_naive() - date).num_days();
            if days <= 0 {
                "today".to_string()
            } else {
                timeago::Formatter::new()
                    .convert(std::time::Duration::from_secs(days as u64 * 86_400))
            }
        }
        None => String::new(),
    };
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
