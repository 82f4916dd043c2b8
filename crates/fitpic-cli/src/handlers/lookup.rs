use anyhow::Result;
use serde_json::json;

use fitpic_catalog::{
    PRODUCT_CATEGORIES, is_valid_phone, location_suggestions, products_in_category,
    search_countries,
};
use fitpic_engine::cart::format_price;

use super::HandlerContext;
use crate::presentation::LookupView;

pub fn countries(ctx: &HandlerContext, query: Option<&str>) -> Result<()> {
    let matches = search_countries(query.unwrap_or(""));
    let lines = matches
        .iter()
        .map(|c| format!("{} {} ({})  {}", c.flag, c.name, c.code, c.dial_code))
        .collect();
    ctx.render(LookupView::new(serde_json::to_value(&matches)?, lines), Vec::new())
}

pub fn locations(ctx: &HandlerContext, input: &str) -> Result<()> {
    let matches = location_suggestions(input);
    let lines = matches.iter().map(|l| l.to_string()).collect();
    ctx.render(LookupView::new(json!(matches), lines), Vec::new())
}

pub fn products(ctx: &HandlerContext, category: &str) -> Result<()> {
    if !PRODUCT_CATEGORIES.contains(&category) {
        anyhow::bail!(
            "Unknown category '{}' (expected one of: {})",
            category,
            PRODUCT_CATEGORIES.join(", ")
        );
    }
    let products = products_in_category(category);
    let lines = products
        .iter()
        .map(|p| format!("{} ({})  {}", p.name, p.brand, format_price(p.price)))
        .collect();
    ctx.render(LookupView::new(serde_json::to_value(&products)?, lines), Vec::new())
}

pub fn phone(ctx: &HandlerContext, number: &str) -> Result<()> {
    let valid = is_valid_phone(number);
    let line = if valid { "valid" } else { "invalid: at least 7 digits required" };
    let value = json!({ "number": number, "valid": valid });
    ctx.render(LookupView::new(value, vec![line.to_string()]), Vec::new())
}
