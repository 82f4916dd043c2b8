use once_cell::sync::Lazy;
use regex::Regex;

use fitpic_types::{Country, Product};

const COUNTRIES_JSON: &str = include_str!("../data/countries.json");

static COUNTRIES: Lazy<Vec<Country>> = Lazy::new(|| {
    serde_json::from_str(COUNTRIES_JSON).unwrap_or_else(|err| {
        tracing::error!("Embedded country list failed to parse: {}", err);
        Vec::new()
    })
});

static NON_DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\D").unwrap());

pub const POPULAR_LOCATIONS: [&str; 25] = [
    "New York, NY",
    "Los Angeles, CA",
    "Chicago, IL",
    "Houston, TX",
    "Phoenix, AZ",
    "Philadelphia, PA",
    "San Antonio, TX",
    "San Diego, CA",
    "Dallas, TX",
    "San Jose, CA",
    "Austin, TX",
    "Jacksonville, FL",
    "Fort Worth, TX",
    "Columbus, OH",
    "Indianapolis, IN",
    "Charlotte, NC",
    "San Francisco, CA",
    "Seattle, WA",
    "Denver, CO",
    "Boston, MA",
    "Miami, FL",
    "Atlanta, GA",
    "Las Vegas, NV",
    "Portland, OR",
    "Nashville, TN",
];

pub const PRODUCT_CATEGORIES: [&str; 5] = ["shirts", "t-shirts", "shoes", "jackets", "pants"];

/// Minimum input length before location suggestions are offered.
const MIN_LOCATION_QUERY: usize = 2;

/// Minimum number of digits for a phone number to be accepted.
const MIN_PHONE_DIGITS: usize = 7;

pub fn countries() -> &'static [Country] {
    &COUNTRIES
}

/// Countries whose name contains `query` (case-insensitive) or whose dial
/// code contains it. An empty query matches everything.
pub fn search_countries(query: &str) -> Vec<&'static Country> {
    let needle = query.trim().to_lowercase();
    countries()
        .iter()
        .filter(|c| c.name.to_lowercase().contains(&needle) || c.dial_code.contains(&needle))
        .collect()
}

pub fn location_suggestions(input: &str) -> Vec<&'static str> {
    if input.chars().count() < MIN_LOCATION_QUERY {
        return Vec::new();
    }
    let needle = input.to_lowercase();
    POPULAR_LOCATIONS
        .iter()
        .copied()
        .filter(|loc| loc.to_lowercase().contains(&needle))
        .collect()
}

/// A phone number is valid once it carries at least seven digits; all
/// formatting characters are ignored.
pub fn is_valid_phone(input: &str) -> bool {
    NON_DIGIT.replace_all(input, "").len() >= MIN_PHONE_DIGITS
}

/// Shop-the-look products for a category key; unknown categories are empty.
pub fn products_in_category(category: &str) -> Vec<Product> {
    let items: &[(&str, &str, f64)] = match category {
        "shirts" => &[("Cotton Shirt", "ZARA", 35.0), ("Linen Shirt", "COS", 65.0)],
        "t-shirts" => &[("Basic Tee", "H&M", 12.0), ("Premium Tee", "ZARA", 25.0)],
        "shoes" => &[("Sneakers", "Nike", 120.0), ("Dress Shoes", "COS", 180.0)],
        "jackets" => &[("Denim Jacket", "ZARA", 89.0), ("Blazer", "COS", 199.0)],
        "pants" => &[
            ("Skyline Chinos", "ZARA", 45.0),
            ("Urban Slacks", "ZARA", 120.0),
            ("Premium Pants", "COS", 299.0),
            ("Casual Trousers", "H&M", 75.0),
        ],
        _ => &[],
    };
    items
        .iter()
        .map(|(name, brand, price)| Product::new(*name, *brand, *price))
        .collect()
}
