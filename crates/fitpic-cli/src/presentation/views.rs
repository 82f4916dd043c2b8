use serde::{Serialize, Serializer};
use serde_json::Value;
use std::fmt;

use fitpic_engine::cart::format_price;
use fitpic_types::{CartItem, Collection, Outfit, OutfitId, PageId};

use super::style;

#[derive(Debug, Serialize)]
pub struct OutfitRow {
    pub id: OutfitId,
    pub title: String,
    pub rating: f64,
    pub reviews: u32,
    pub price: f64,
    pub tags: Vec<String>,
    pub wishlisted: bool,
    pub is_remix: bool,
}

impl OutfitRow {
    pub fn new(outfit: &Outfit, wishlisted: bool) -> Self {
        Self {
            id: outfit.id,
            title: outfit.title.clone(),
            rating: outfit.rating,
            reviews: outfit.reviews,
            price: outfit.total_price(),
            tags: outfit.tags.clone(),
            wishlisted,
            is_remix: outfit.is_remix,
        }
    }
}

impl fmt::Display for OutfitRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>3}  {}  {} {:.1} ({})  {}",
            self.id,
            style::bold(&self.title),
            style::warn("★"),
            self.rating,
            self.reviews,
            format_price(self.price)
        )?;
        if self.wishlisted {
            write!(f, "  {}", style::bad("♥"))?;
        }
        if self.is_remix {
            write!(f, "  {}", style::dim("remix"))?;
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct OutfitPageView {
    pub page: u32,
    pub total_pages: u32,
    pub filter: String,
    pub has_more: bool,
    pub outfits: Vec<OutfitRow>,
}

impl fmt::Display for OutfitPageView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Page {} of {}  {}",
            self.page,
            self.total_pages,
            style::dim(format!("[{}]", self.filter))
        )?;
        if self.outfits.is_empty() {
            writeln!(f, "No outfits match.")?;
        }
        for row in &self.outfits {
            writeln!(f, "{}", row)?;
        }
        if self.has_more {
            writeln!(f, "{}", style::dim(format!("More: --page {}", self.page + 1)))?;
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutfitView {
    #[serde(flatten)]
    pub outfit: Outfit,
    pub wishlisted: bool,
    pub user_rating: Option<u8>,
    pub total_price: f64,
}

impl OutfitView {
    pub fn new(outfit: Outfit, wishlisted: bool, user_rating: Option<u8>) -> Self {
        let total_price = outfit.total_price();
        Self {
            outfit,
            wishlisted,
            user_rating,
            total_price,
        }
    }
}

impl fmt::Display for OutfitView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let outfit = &self.outfit;
        writeln!(f, "{}  {}", style::bold(&outfit.title), style::dim(format!("#{}", outfit.id)))?;
        writeln!(f, "{}", outfit.description)?;
        write!(
            f,
            "{} {:.1} ({} reviews)  {}% match",
            style::warn("★"),
            outfit.rating,
            outfit.reviews,
            outfit.confidence
        )?;
        if let Some(rating) = self.user_rating {
            write!(f, "  you rated {}", rating)?;
        }
        if self.wishlisted {
            write!(f, "  {}", style::bad("♥"))?;
        }
        writeln!(f)?;
        if !outfit.chips.is_empty() {
            writeln!(f, "{}", style::dim(outfit.chips.join(" · ")))?;
        }
        if let Some(original) = outfit.original_id {
            writeln!(f, "Remix of #{}: {}", original, outfit.modifications.join(", "))?;
        }
        writeln!(f)?;
        for (i, product) in outfit.products.iter().enumerate() {
            writeln!(
                f,
                "  {}. {} ({})  {}",
                i + 1,
                product.name,
                product.brand,
                format_price(product.price)
            )?;
        }
        writeln!(f, "  Total {}", style::bold(format_price(self.total_price)))
    }
}

#[derive(Debug, Serialize)]
pub struct CartView {
    pub items: Vec<CartItem>,
    pub count: u32,
    pub total: f64,
}

impl fmt::Display for CartView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.items.is_empty() {
            return writeln!(f, "Your cart is empty");
        }
        for item in &self.items {
            writeln!(
                f,
                "{}  {} ({}) x{}  {}",
                style::dim(&item.id),
                item.product_name,
                item.product_brand,
                item.quantity,
                format_price(item.price * f64::from(item.quantity))
            )?;
        }
        writeln!(
            f,
            "Total ({} items): {}",
            self.count,
            style::bold(format_price(self.total))
        )
    }
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct CollectionsView {
    pub collections: Vec<Collection>,
}

impl fmt::Display for CollectionsView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for collection in &self.collections {
            writeln!(
                f,
                "{} {} ({} outfits)  {}",
                collection.icon,
                style::bold(&collection.name),
                collection.outfits.len(),
                style::dim(&collection.id)
            )?;
        }
        Ok(())
    }
}

/// Arbitrary JSON, pretty-printed in plain mode.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct ValueView(pub Value);

impl fmt::Display for ValueView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = serde_json::to_string_pretty(&self.0).map_err(|_| fmt::Error)?;
        writeln!(f, "{}", text)
    }
}

/// Structured lookup results with a precomputed plain rendering.
#[derive(Debug)]
pub struct LookupView {
    value: Value,
    lines: Vec<String>,
}

impl LookupView {
    pub fn new(value: Value, lines: Vec<String>) -> Self {
        Self { value, lines }
    }
}

impl Serialize for LookupView {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value.serialize(serializer)
    }
}

impl fmt::Display for LookupView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.lines.is_empty() {
            return writeln!(f, "No matches");
        }
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Result of a command whose effect is reported by toasts. `message` is
/// only printed when set.
#[derive(Debug, Serialize)]
pub struct Notice {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(flatten)]
    pub data: serde_json::Map<String, Value>,
}

impl Notice {
    pub fn silent() -> Self {
        Self {
            message: None,
            data: serde_json::Map::new(),
        }
    }

    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            data: serde_json::Map::new(),
        }
    }

    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.data.insert(key.to_string(), value.into());
        self
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => writeln!(f, "{}", message),
            None => Ok(()),
        }
    }
}

/// Summary printed after a simulated session.
#[derive(Debug, Serialize)]
pub struct SimulationView {
    pub reached: PageId,
    pub processing_failed: bool,
    pub pages: Vec<PageId>,
    pub feed: Vec<OutfitId>,
    pub elapsed_ms: u128,
}

impl fmt::Display for SimulationView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.processing_failed {
            writeln!(
                f,
                "{} after {}ms",
                style::bad("Style processing failed"),
                self.elapsed_ms
            )
        } else {
            writeln!(
                f,
                "Reached {} with {} outfits in {}ms",
                style::good(self.reached),
                self.feed.len(),
                self.elapsed_ms
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_view_plain() {
        let view = CartView {
            items: Vec::new(),
            count: 0,
            total: 0.0,
        };
        assert_eq!(view.to_string(), "Your cart is empty\n");
    }

    #[test]
    fn test_notice_json_flattens_data() {
        let notice = Notice::silent().with("wishlisted", true);
        assert_eq!(
            serde_json::to_value(&notice).unwrap(),
            serde_json::json!({"wishlisted": true})
        );
        assert_eq!(notice.to_string(), "");
    }
}
