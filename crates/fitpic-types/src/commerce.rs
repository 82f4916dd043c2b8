use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{OutfitId, Product};

/// A product line in the shopping cart.
///
/// Line identity for merging is `(product_name, product_brand)`; `id` only
/// addresses the line for quantity updates and removal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    #[serde(deserialize_with = "crate::util::string_or_number")]
    pub id: String,
    pub outfit_id: OutfitId,
    pub product_name: String,
    pub product_brand: String,
    pub price: f64,
    pub quantity: u32,
    pub added_at: DateTime<Utc>,
}

impl CartItem {
    pub fn matches(&self, product: &Product) -> bool {
        self.product_name == product.name && self.product_brand == product.brand
    }

    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// User-defined named grouping of outfit references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    #[serde(deserialize_with = "crate::util::string_or_number")]
    pub id: String,
    pub name: String,
    pub icon: String,
    #[serde(default)]
    pub outfits: Vec<OutfitId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Collection {
    pub fn contains(&self, outfit_id: OutfitId) -> bool {
        self.outfits.contains(&outfit_id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledOutfit {
    pub outfit_id: OutfitId,
    /// Day the outfit is planned for, as selected in the schedule modal
    pub date: String,
    pub occasion: String,
    pub scheduled_at: DateTime<Utc>,
}

/// Onboarding selections saved with "save for later".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDraft {
    #[serde(default)]
    pub brands: Vec<String>,
    #[serde(default)]
    pub events: Vec<String>,
    #[serde(default)]
    pub aesthetics: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}
