mod logging;
mod render;

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use async_std::task;
use clap::{Parser, Subcommand};
use core_types::NormalizedContent;
use domain::{content_normalizer::normalize, menu::MenuRegistry, trustee_groups::group_trustees};
use http_fetcher::ops::DefaultContentFetcher;
use serde_json::Value;
use service::{content_service::ContentService, settings::Settings};
use tracing::info;

const TRUSTEES_ENDPOINT: &str = "/trustees?_format=json";

#[derive(Parser, Debug)]
#[command(name = "temple", about = "Browse the temple website content from the terminal")]
struct Cli {
    /// Base URL of the CMS (overrides TEMPLE_CMS_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Request timeout in seconds (overrides TEMPLE_REQUEST_TIMEOUT_SECS)
    #[arg(long, global = true)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the navigation menu
    Menu {
        #[arg(long)]
        json: bool,
    },
    /// Select a menu entry and print its content
    Show {
        entry_id: String,
        #[arg(long)]
        json: bool,
        /// Fail on fetch errors instead of printing the error page
        #[arg(long)]
        strict: bool,
    },
    /// Normalize a saved JSON payload
    Normalize {
        file: PathBuf,
        /// Endpoint the payload was fetched from, e.g. /events?_format=json
        #[arg(long)]
        endpoint: String,
        #[arg(long)]
        filter: Option<String>,
        #[arg(long)]
        entry_id: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// Print a saved trustees payload grouped by category
    Trustees { file: PathBuf },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Cli::parse();
    let _guard = logging::init_logging();

    task::block_on(async move {
        match args.command {
            Command::Menu { json } => {
                let registry = MenuRegistry::temple();
                if json {
                    let menu = serde_json::json!({
                        "left": registry.left(),
                        "right": registry.right(),
                    });
                    println!("{}", serde_json::to_string_pretty(&menu)?);
                } else {
                    println!("{}", render::render_menu(&registry));
                }
            }
            Command::Show {
                entry_id,
                json,
                strict,
            } => {
                let settings = load_settings(args.base_url, args.timeout)?;
                info!(base_url = %settings.cms_base_url, "Using CMS");
                let fetcher =
                    DefaultContentFetcher::new(settings.cms_base_url, settings.request_timeout);
                let service =
                    ContentService::new(Arc::new(MenuRegistry::temple()), Arc::new(fetcher));

                let content = if strict {
                    Arc::new(service.preview(&entry_id).await?)
                } else {
                    service.select(&entry_id).await?;
                    service.current()
                };
                print_content(&content, json)?;
            }
            Command::Normalize {
                file,
                endpoint,
                filter,
                entry_id,
                json,
            } => {
                let payload = read_payload(&file)?;
                let content = normalize(
                    &payload,
                    &endpoint,
                    filter.as_deref(),
                    entry_id.as_deref(),
                );
                print_content(&content, json)?;
            }
            Command::Trustees { file } => {
                let payload = read_payload(&file)?;
                let content = normalize(&payload, TRUSTEES_ENDPOINT, None, Some("trustees"));
                println!("{}", render::render_trustees(&group_trustees(content.items())));
            }
        }
        Ok::<(), Box<dyn std::error::Error>>(())
    })
}

fn load_settings(
    base_url: Option<String>,
    timeout: Option<u64>,
) -> Result<Settings, service::error::Error> {
    let mut settings = Settings::from_env()?;
    if let Some(base_url) = base_url {
        settings = settings.with_base_url(base_url)?;
    }
    if let Some(timeout) = timeout {
        settings = settings.with_timeout_secs(timeout)?;
    }
    Ok(settings)
}

fn read_payload(file: &Path) -> Result<Value, Box<dyn std::error::Error>> {
    let raw = std::fs::read_to_string(file)
        .map_err(|e| format!("Failed to read {}: {}", file.display(), e))?;
    Ok(serde_json::from_str(&raw)?)
}

fn print_content(
    content: &NormalizedContent,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(content)?);
    } else {
        println!("{}", render::render_content(content));
    }
    Ok(())
}
