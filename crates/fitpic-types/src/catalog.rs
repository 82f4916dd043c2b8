use serde::{Deserialize, Serialize};

use crate::FilterCategory;

/// Identifier of an outfit in the catalog.
pub type OutfitId = u64;

/// A styled clothing combination from the static catalog.
///
/// Catalog records are reference data. Only `rating`/`reviews` change at
/// runtime (rating submission); remixes are separate records derived from an
/// original via [`Outfit::remix_of`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Outfit {
    pub id: OutfitId,
    pub image: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub tag_labels: Vec<String>,
    /// Combined category tags used by the quick filter
    #[serde(default)]
    pub filter_categories: Vec<String>,
    #[serde(default)]
    pub filter_location: Vec<String>,
    #[serde(default)]
    pub filter_style: Vec<String>,
    #[serde(default)]
    pub filter_event: Vec<String>,
    #[serde(default)]
    pub filter_season: Vec<String>,
    pub title: String,
    pub description: String,
    /// Match confidence, 0-100
    pub confidence: u8,
    #[serde(default)]
    pub chips: Vec<String>,
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather_suitability: Option<WeatherSuitability>,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub reviews: u32,
    #[serde(default)]
    pub saved_by: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_added: Option<String>,
    #[serde(default)]
    pub occasion_tags: Vec<String>,
    #[serde(default)]
    pub style_notes: Vec<String>,
    #[serde(default)]
    pub social_metrics: SocialMetrics,

    // Remix provenance
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifications: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_id: Option<OutfitId>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_remix: bool,
}

impl Outfit {
    /// Tag values this outfit carries for one multi-category filter dimension.
    pub fn tags_for(&self, category: FilterCategory) -> &[String] {
        match category {
            FilterCategory::Location => &self.filter_location,
            FilterCategory::Style => &self.filter_style,
            FilterCategory::Event => &self.filter_event,
            FilterCategory::Season => &self.filter_season,
        }
    }

    /// Space-joined `filterCategories`, the string the quick filter matches against.
    pub fn category_string(&self) -> String {
        self.filter_categories.join(" ")
    }

    /// Sum of product prices.
    pub fn total_price(&self) -> f64 {
        self.products.iter().map(|p| p.price).sum()
    }

    pub fn remix_of(
        original: &Outfit,
        id: OutfitId,
        modifications: Vec<String>,
        confidence: u8,
    ) -> Outfit {
        Outfit {
            id,
            title: format!("{} (Remix)", original.title),
            description: format!(
                "Modified version with {} changes",
                modifications.join(", ")
            ),
            confidence,
            modifications,
            original_id: Some(original.id),
            is_remix: true,
            ..original.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub name: String,
    pub brand: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Product {
    pub fn new(name: impl Into<String>, brand: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            brand: brand.into(),
            price,
            image: None,
            url: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherSuitability {
    pub temperature: String,
    pub conditions: Vec<String>,
    pub icon: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SocialMetrics {
    pub likes: u32,
    pub shares: u32,
    pub saves: u32,
    pub comments: u32,
}

/// Country entry for the phone-number dial code picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    pub name: String,
    /// ISO 3166-1 alpha-2 code
    pub code: String,
    pub flag: String,
    pub dial_code: String,
}
