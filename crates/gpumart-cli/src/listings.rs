//! # Listings Subcommand
//!
//! Filters an export of marketplace listings the way the browse toolbar
//! does and prints the matching summary cards.
//!
//! ```bash
//! gpumart listings export.json --max-price 10 --vram 24 --sort price-asc
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};

use gpumart_core::{filter_listings, GpuListing, ListingCard, ListingFilter, SortOrder};

use crate::input::load_document;

/// Sort order accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SortArg {
    #[default]
    Newest,
    PriceAsc,
    PriceDesc,
}

impl From<SortArg> for SortOrder {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Newest => SortOrder::Newest,
            SortArg::PriceAsc => SortOrder::PriceAsc,
            SortArg::PriceDesc => SortOrder::PriceDesc,
        }
    }
}

/// Arguments for the `listings` subcommand.
#[derive(Args, Debug)]
pub struct ListingsArgs {
    /// JSON or YAML array of listings.
    pub input: PathBuf,

    /// Lowest asking price, inclusive.
    #[arg(long)]
    pub min_price: Option<f64>,

    /// Highest asking price, inclusive.
    #[arg(long)]
    pub max_price: Option<f64>,

    /// Exact VRAM size in GB.
    #[arg(long)]
    pub vram: Option<u32>,

    /// Seller location. "all" means unconstrained.
    #[arg(long)]
    pub location: Option<String>,

    /// Free-text search over model name and location.
    #[arg(long, short)]
    pub query: Option<String>,

    /// Include sold and cancelled listings.
    #[arg(long)]
    pub include_inactive: bool,

    #[arg(long, value_enum, default_value_t = SortArg::Newest)]
    pub sort: SortArg,
}

impl ListingsArgs {
    fn filter(&self) -> ListingFilter {
        ListingFilter {
            price_min: self.min_price,
            price_max: self.max_price,
            vram_gb: self.vram,
            location: self
                .location
                .clone()
                .filter(|l| !l.eq_ignore_ascii_case("all")),
            query: self.query.clone(),
            include_inactive: self.include_inactive,
            sort: self.sort.into(),
        }
    }
}

/// Filter the listings in an export and return the matching cards.
pub fn select_listings(args: &ListingsArgs) -> Result<Vec<ListingCard>> {
    let listings: Vec<GpuListing> = load_document(&args.input)?;
    let cards: Vec<ListingCard> = listings.iter().map(ListingCard::from).collect();
    let filter = args.filter();
    tracing::debug!(
        listings = cards.len(),
        active_filters = filter.active_filter_count(),
        "filtering listings"
    );
    filter_listings(&cards, &filter).context("applying listing filter")
}

/// Execute the `listings` subcommand.
pub fn run_listings(args: &ListingsArgs) -> Result<u8> {
    let cards = select_listings(args)?;
    if cards.is_empty() {
        tracing::warn!("no listings matched the filter");
    }
    println!(
        "{}",
        serde_json::to_string_pretty(&cards).context("serializing listings")?
    );
    Ok(0)
}
