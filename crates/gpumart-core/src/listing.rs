//! # Listings
//!
//! A GPU offered for sale, the summary card shown on the browse page, and
//! the buyer-side filter applied to those cards.
//!
//! Cards are projected from full listings with `From<&GpuListing>`; missing
//! model names fall back to `"Unknown GPU"` so a half-populated row still
//! renders.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::benchmark::BenchmarkScore;
use crate::error::GpumartError;

/// Lifecycle state of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingStatus {
    #[default]
    Active,
    Sold,
    Cancelled,
}

/// Hardware description of the listed card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GpuDetails {
    /// Marketing model name, e.g. "NVIDIA RTX 4090".
    pub model: String,
    #[serde(default)]
    pub aib_partner: String,
    #[serde(default)]
    pub uuid: String,
    #[serde(default)]
    pub gpu_arch: String,
    #[serde(default)]
    pub manufacturer: String,
    /// VRAM in GB.
    pub memory_gb: u32,
    /// e.g. "GDDR6X".
    #[serde(default)]
    pub memory_type: String,
    #[serde(default)]
    pub num_sm: u32,
    #[serde(default)]
    pub cuda_cores: u32,
    #[serde(default)]
    pub tensor_cores: u32,
    #[serde(default)]
    pub rt_cores: u32,
}

/// Asking price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Price {
    pub amount: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "SOL".to_string()
}

/// Public seller profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seller {
    pub id: Uuid,
    pub username: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// A GPU available for sale, with its verified benchmark.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GpuListing {
    pub id: Uuid,
    pub gpu: GpuDetails,
    pub price: Price,
    pub benchmark: BenchmarkScore,
    pub seller: Seller,
    pub listed_at: DateTime<Utc>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub status: ListingStatus,
}

/// Summary shown in the browse grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingCard {
    pub id: Uuid,
    pub gpu_model: String,
    pub vram_gb: u32,
    /// Display string such as "24GB GDDR6X".
    pub memory: String,
    pub price: f64,
    pub currency: String,
    pub fp16_flops: f64,
    pub fp32_flops: f64,
    pub tensor_flops_fp16: f64,
    pub avg_pwr_draw: f64,
    pub avg_temp: f64,
    pub listed_at: DateTime<Utc>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub status: ListingStatus,
}

impl From<&GpuListing> for ListingCard {
    fn from(listing: &GpuListing) -> Self {
        let gpu_model = if listing.gpu.model.trim().is_empty() {
            "Unknown GPU".to_string()
        } else {
            listing.gpu.model.clone()
        };
        let memory = if listing.gpu.memory_type.is_empty() {
            format!("{}GB", listing.gpu.memory_gb)
        } else {
            format!("{}GB {}", listing.gpu.memory_gb, listing.gpu.memory_type)
        };
        Self {
            id: listing.id,
            gpu_model,
            vram_gb: listing.gpu.memory_gb,
            memory,
            price: listing.price.amount,
            currency: listing.price.currency.clone(),
            fp16_flops: listing.benchmark.fp16_flops,
            fp32_flops: listing.benchmark.fp32_flops,
            tensor_flops_fp16: listing.benchmark.tensor_flops_fp16,
            avg_pwr_draw: listing.benchmark.avg_pwr_draw,
            avg_temp: listing.benchmark.avg_temp,
            listed_at: listing.listed_at,
            location: listing.location.clone(),
            image_url: listing.image_url.clone(),
            status: listing.status,
        }
    }
}

/// Order of the filtered card grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Most recently listed first.
    #[default]
    Newest,
    /// Cheapest first.
    PriceAsc,
    /// Most expensive first.
    PriceDesc,
}

/// Buyer-side browse filter. `None` fields are unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListingFilter {
    #[serde(default)]
    pub price_min: Option<f64>,
    #[serde(default)]
    pub price_max: Option<f64>,
    #[serde(default)]
    pub vram_gb: Option<u32>,
    #[serde(default)]
    pub location: Option<String>,
    /// Case-insensitive substring over model name and location.
    #[serde(default)]
    pub query: Option<String>,
    /// Also show sold and cancelled listings.
    #[serde(default)]
    pub include_inactive: bool,
    #[serde(default)]
    pub sort: SortOrder,
}

impl ListingFilter {
    /// Reject negative or inverted price bounds.
    pub fn validate(&self) -> Result<(), GpumartError> {
        for bound in [self.price_min, self.price_max].into_iter().flatten() {
            if !bound.is_finite() || bound < 0.0 {
                return Err(GpumartError::Listing(format!(
                    "price bound must be a non-negative number, got {bound}"
                )));
            }
        }
        if let (Some(min), Some(max)) = (self.price_min, self.price_max) {
            if min > max {
                return Err(GpumartError::Listing(format!(
                    "price range is inverted: {min} > {max}"
                )));
            }
        }
        Ok(())
    }

    /// Number of constrained fields, shown as a badge on the toolbar.
    pub fn active_filter_count(&self) -> usize {
        [
            self.price_min.is_some(),
            self.price_max.is_some(),
            self.vram_gb.is_some(),
            self.location.is_some(),
            self.query.as_deref().is_some_and(|q| !q.trim().is_empty()),
            self.include_inactive,
        ]
        .into_iter()
        .filter(|set| *set)
        .count()
    }

    pub fn matches(&self, card: &ListingCard) -> bool {
        if !self.include_inactive && card.status != ListingStatus::Active {
            return false;
        }
        if self.price_min.is_some_and(|min| card.price < min) {
            return false;
        }
        if self.price_max.is_some_and(|max| card.price > max) {
            return false;
        }
        if self.vram_gb.is_some_and(|vram| card.vram_gb != vram) {
            return false;
        }
        if let Some(location) = &self.location {
            let same = card
                .location
                .as_deref()
                .is_some_and(|l| l.eq_ignore_ascii_case(location));
            if !same {
                return false;
            }
        }
        if let Some(query) = self.query.as_deref().map(str::trim).filter(|q| !q.is_empty()) {
            let needle = query.to_lowercase();
            let in_model = card.gpu_model.to_lowercase().contains(&needle);
            let in_location = card
                .location
                .as_deref()
                .is_some_and(|l| l.to_lowercase().contains(&needle));
            if !in_model && !in_location {
                return false;
            }
        }
        true
    }
}

/// Apply a browse filter and sort the surviving cards.
pub fn filter_listings(
    cards: &[ListingCard],
    filter: &ListingFilter,
) -> Result<Vec<ListingCard>, GpumartError> {
    filter.validate()?;
    let mut matched: Vec<ListingCard> = cards.iter().filter(|c| filter.matches(c)).cloned().collect();
    match filter.sort {
        SortOrder::Newest => matched.sort_by(|a, b| b.listed_at.cmp(&a.listed_at)),
        SortOrder::PriceAsc => matched.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortOrder::PriceDesc => matched.sort_by(|a, b| b.price.total_cmp(&a.price)),
    }
    Ok(matched)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::benchmark::fixtures::rtx_4090;
    use chrono::TimeZone;

    fn listing(model: &str, vram: u32, price: f64, day: u32, location: Option<&str>) -> GpuListing {
        GpuListing {
            id: Uuid::new_v4(),
            gpu: GpuDetails {
                model: model.to_string(),
                aib_partner: "ASUS".into(),
                uuid: String::new(),
                gpu_arch: "Ada".into(),
                manufacturer: "NVIDIA".into(),
                memory_gb: vram,
                memory_type: "GDDR6X".into(),
                num_sm: 128,
                cuda_cores: 16384,
                tensor_cores: 512,
                rt_cores: 128,
            },
            price: Price {
                amount: price,
                currency: "SOL".into(),
            },
            benchmark: rtx_4090(),
            seller: Seller {
                id: Uuid::new_v4(),
                username: "seller".into(),
                avatar_url: None,
            },
            listed_at: Utc.with_ymd_and_hms(2026, 3, day, 12, 0, 0).unwrap(),
            location: location.map(str::to_string),
            image_url: None,
            status: ListingStatus::Active,
        }
    }

    fn cards() -> Vec<ListingCard> {
        vec![
            ListingCard::from(&listing("NVIDIA RTX 4090", 24, 12.0, 1, Some("Berlin"))),
            ListingCard::from(&listing("NVIDIA RTX 3080", 12, 4.5, 3, Some("Austin"))),
            ListingCard::from(&listing("NVIDIA RTX 4080", 16, 8.0, 2, None)),
        ]
    }

    #[test]
    fn test_card_projection() {
        let card = ListingCard::from(&listing("NVIDIA RTX 4090", 24, 12.0, 1, None));
        assert_eq!(card.memory, "24GB GDDR6X");
        assert_eq!(card.fp32_flops, 82.6e12);
        assert_eq!(card.currency, "SOL");
    }

    #[test]
    fn test_card_unknown_model_fallback() {
        let card = ListingCard::from(&listing("  ", 8, 1.0, 1, None));
        assert_eq!(card.gpu_model, "Unknown GPU");
    }

    #[test]
    fn test_default_filter_sorts_newest_first() {
        let out = filter_listings(&cards(), &ListingFilter::default()).unwrap();
        let models: Vec<&str> = out.iter().map(|c| c.gpu_model.as_str()).collect();
        assert_eq!(models, ["NVIDIA RTX 3080", "NVIDIA RTX 4080", "NVIDIA RTX 4090"]);
    }

    #[test]
    fn test_price_range_and_sort() {
        let filter = ListingFilter {
            price_min: Some(5.0),
            price_max: Some(12.0),
            sort: SortOrder::PriceAsc,
            ..Default::default()
        };
        let out = filter_listings(&cards(), &filter).unwrap();
        let prices: Vec<f64> = out.iter().map(|c| c.price).collect();
        assert_eq!(prices, [8.0, 12.0]);
    }

    #[test]
    fn test_vram_location_and_query() {
        let by_vram = ListingFilter {
            vram_gb: Some(16),
            ..Default::default()
        };
        assert_eq!(filter_listings(&cards(), &by_vram).unwrap().len(), 1);

        let by_location = ListingFilter {
            location: Some("berlin".into()),
            ..Default::default()
        };
        let out = filter_listings(&cards(), &by_location).unwrap();
        assert_eq!(out[0].gpu_model, "NVIDIA RTX 4090");

        let by_query = ListingFilter {
            query: Some("aust".into()),
            ..Default::default()
        };
        let out = filter_listings(&cards(), &by_query).unwrap();
        assert_eq!(out[0].gpu_model, "NVIDIA RTX 3080");
    }

    #[test]
    fn test_inactive_hidden_by_default() {
        let mut all = cards();
        all[0].status = ListingStatus::Sold;
        assert_eq!(filter_listings(&all, &ListingFilter::default()).unwrap().len(), 2);
        let filter = ListingFilter {
            include_inactive: true,
            ..Default::default()
        };
        assert_eq!(filter_listings(&all, &filter).unwrap().len(), 3);
    }

    #[test]
    fn test_inverted_price_range_rejected() {
        let filter = ListingFilter {
            price_min: Some(10.0),
            price_max: Some(1.0),
            ..Default::default()
        };
        assert!(matches!(
            filter_listings(&cards(), &filter),
            Err(GpumartError::Listing(_))
        ));
        let negative = ListingFilter {
            price_min: Some(-1.0),
            ..Default::default()
        };
        assert!(negative.validate().is_err());
    }

    #[test]
    fn test_active_filter_count() {
        assert_eq!(ListingFilter::default().active_filter_count(), 0);
        let filter = ListingFilter {
            price_max: Some(10.0),
            vram_gb: Some(24),
            query: Some("   ".into()),
            ..Default::default()
        };
        assert_eq!(filter.active_filter_count(), 2);
    }
}
