//! Operator CLI: runs the reconciliation pipeline over captured raw
//! payload files. The files stand in for the upstream fetch layer —
//! each one is a provider response body saved as JSON.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};

use mealmux_core::{GeoPoint, ReconConfig, ServiceHits, ServiceId, ServiceMenu};
use mealmux_recon::{merge_menus, rank, resolve};

#[derive(Debug, Parser)]
#[command(name = "mealmux-cli")]
#[command(about = "Cross-service restaurant reconciliation over captured payloads")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Deduplicate search results across services and rank by
    /// distance from the given origin.
    Search {
        #[arg(long)]
        lat: f64,
        #[arg(long)]
        lon: f64,
        /// Postmates search feed payload.
        #[arg(long)]
        postmates: Option<PathBuf>,
        /// Grubhub search payload.
        #[arg(long)]
        grubhub: Option<PathBuf>,
        /// DoorDash mobile search feed payload.
        #[arg(long)]
        doordash: Option<PathBuf>,
    },
    /// Merge per-service store menus and print one page.
    Menu {
        /// 1-based page number; each page is one category.
        #[arg(long)]
        page: usize,
        /// Postmates store-detail payload.
        #[arg(long)]
        postmates: Option<PathBuf>,
        /// Grubhub store-detail payload.
        #[arg(long)]
        grubhub: Option<PathBuf>,
        /// DoorDash store-detail payload.
        #[arg(long, requires = "doordash_id")]
        doordash: Option<PathBuf>,
        /// The store id the DoorDash detail was fetched by (the
        /// payload does not carry one).
        #[arg(long)]
        doordash_id: Option<String>,
    },
}

fn read_payload<T: serde::de::DeserializeOwned>(path: &Path, service: ServiceId) -> anyhow::Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading {service} payload {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("parsing {service} payload {}", path.display()))
}

fn run_search(
    origin: GeoPoint,
    postmates: Option<&Path>,
    grubhub: Option<&Path>,
    doordash: Option<&Path>,
    config: &ReconConfig,
) -> anyhow::Result<()> {
    // Fixed service order: it decides first-seen semantics, so the
    // output stays deterministic no matter how flags were given.
    let mut hits_by_service = Vec::new();
    if let Some(path) = postmates {
        let feed = read_payload(path, ServiceId::Postmates)?;
        hits_by_service.push(ServiceHits {
            service: ServiceId::Postmates,
            hits: mealmux_services::postmates::normalize_search(feed),
        });
    }
    if let Some(path) = grubhub {
        let search = read_payload(path, ServiceId::Grubhub)?;
        hits_by_service.push(ServiceHits {
            service: ServiceId::Grubhub,
            hits: mealmux_services::grubhub::normalize_search(search),
        });
    }
    if let Some(path) = doordash {
        let feed = read_payload(path, ServiceId::Doordash)?;
        hits_by_service.push(ServiceHits {
            service: ServiceId::Doordash,
            hits: mealmux_services::doordash::normalize_search(feed),
        });
    }

    let total_hits: usize = hits_by_service.iter().map(|s| s.hits.len()).sum();
    let stores = rank(resolve(&hits_by_service, config), origin);
    tracing::info!(
        services = hits_by_service.len(),
        hits = total_hits,
        stores = stores.len(),
        "reconciled search page"
    );

    println!("{}", serde_json::to_string_pretty(&stores)?);
    Ok(())
}

fn run_menu(
    page: usize,
    postmates: Option<&Path>,
    grubhub: Option<&Path>,
    doordash: Option<(&Path, &str)>,
    config: &ReconConfig,
) -> anyhow::Result<()> {
    // Same fixed order; the first service present is primary.
    let mut menus_by_service: Vec<ServiceMenu> = Vec::new();
    if let Some(path) = postmates {
        let store = read_payload(path, ServiceId::Postmates)?;
        menus_by_service.push(mealmux_services::postmates::normalize_store(store)?);
    }
    if let Some(path) = grubhub {
        let store = read_payload(path, ServiceId::Grubhub)?;
        menus_by_service.push(mealmux_services::grubhub::normalize_store(store));
    }
    if let Some((path, store_id)) = doordash {
        let store = read_payload(path, ServiceId::Doordash)?;
        menus_by_service.push(mealmux_services::doordash::normalize_store(store_id, store));
    }

    let menu_page = merge_menus(&menus_by_service, page, config)?;
    println!("{}", serde_json::to_string_pretty(&menu_page)?);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = ReconConfig::from_env()?;
    let cli = Cli::parse();

    match cli.command {
        Commands::Search {
            lat,
            lon,
            postmates,
            grubhub,
            doordash,
        } => run_search(
            GeoPoint {
                latitude: lat,
                longitude: lon,
            },
            postmates.as_deref(),
            grubhub.as_deref(),
            doordash.as_deref(),
            &config,
        ),
        Commands::Menu {
            page,
            postmates,
            grubhub,
            doordash,
            doordash_id,
        } => {
            let doordash = match (doordash.as_deref(), doordash_id.as_deref()) {
                (Some(path), Some(id)) => Some((path, id)),
                _ => None,
            };
            run_menu(page, postmates.as_deref(), grubhub.as_deref(), doordash, &config)
        }
    }
}
