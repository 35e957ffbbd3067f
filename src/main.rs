// oceanwp: command-line front end for an OceanWP site adapter
//
// Prints listings, item details and filters as JSON.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use oceanwp_source::{OceanWpSource, SearchFilterSelection, SiteConfig, SiteRequest};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "oceanwp", version, about = "Browse OceanWP-templated catalog sites")]
struct Cli {
    /// Site root, e.g. https://example.com
    #[arg(long, global = true, conflicts_with = "config")]
    base_url: Option<String>,

    /// JSON site config (see SiteConfig)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the catalog root
    Popular {
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// List the newest entries
    Latest {
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Search by text or by category/tag key
    Search {
        #[arg(long, default_value_t = 1)]
        page: u32,
        /// Free-text query; takes precedence over --key
        #[arg(long, default_value = "")]
        query: String,
        /// Category or tag key, e.g. `category/romance` or `romance`
        #[arg(long = "key")]
        keys: Vec<String>,
        /// Only print the resolved request
        #[arg(long)]
        resolve_only: bool,
    },
    /// Show details of an item page
    Details { url: String },
    /// Show the chapter list of an item page
    Chapters { url: String },
    /// Show the image pages of an item page
    Pages { url: String },
    /// Show available category and tag filters
    Filters,
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn load_config(cli: &Cli) -> Result<SiteConfig> {
    if let Some(path) = &cli.config {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        return SiteConfig::from_json(&json).context("Invalid site config");
    }
    let base_url = cli
        .base_url
        .as_deref()
        .context("Either --base-url or --config is required")?;
    Ok(SiteConfig::builder().base_url(base_url).build()?)
}

/// Item URLs may be given site-relative, as they are printed by listings
fn absolute_url(source: &OceanWpSource, url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("{}/{}", source.config().base_url(), url.trim_start_matches('/'))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let source = OceanWpSource::new(load_config(&cli)?)?;

    match cli.command {
        Command::Popular { page } => print_json(&source.list_popular(page).await?),
        Command::Latest { page } => print_json(&source.list_latest(page).await?),
        Command::Search {
            page,
            query,
            keys,
            resolve_only,
        } => {
            let selection = SearchFilterSelection::new(query, keys);
            if resolve_only {
                print_json(&source.search_request(page, &selection).await)
            } else {
                print_json(&source.search(page, &selection).await?)
            }
        }
        Command::Details { url } => {
            let document = source
                .fetch_document(SiteRequest::get(absolute_url(&source, &url)))
                .await?;
            print_json(&source.fetch_details(&document)?)
        }
        Command::Chapters { url } => {
            let response = source
                .execute_checked(SiteRequest::get(absolute_url(&source, &url)))
                .await?;
            print_json(&source.fetch_chapter_list(response).await?)
        }
        Command::Pages { url } => {
            let document = source
                .fetch_document(SiteRequest::get(absolute_url(&source, &url)))
                .await?;
            print_json(&source.fetch_page_list(&document))
        }
        Command::Filters => print_json(&source.get_filter_options().await),
    }
}
