use super::enums::Speed;
use clap::Subcommand;
use fitpic_types::OutfitId;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Inspect and edit the persisted application state")]
    State {
        #[command(subcommand)]
        command: StateCommand,
    },

    #[command(about = "Browse the outfit feed one page at a time")]
    Outfits {
        #[arg(long, default_value = "1")]
        page: u32,

        #[arg(
            long,
            help = "Quick filter tag (e.g. casual, elegant)",
            conflicts_with_all = ["location", "style", "event", "season"]
        )]
        tag: Option<String>,

        #[arg(long)]
        location: Vec<String>,

        #[arg(long)]
        style: Vec<String>,

        #[arg(long)]
        event: Vec<String>,

        #[arg(long)]
        season: Vec<String>,
    },

    #[command(about = "Show one outfit with its products")]
    Outfit { id: OutfitId },

    #[command(about = "Manage the shopping cart")]
    Cart {
        #[command(subcommand)]
        command: CartCommand,
    },

    #[command(about = "Manage liked outfits")]
    Wishlist {
        #[command(subcommand)]
        command: WishlistCommand,
    },

    #[command(about = "Manage outfit collections")]
    Collections {
        #[command(subcommand)]
        command: CollectionsCommand,
    },

    #[command(about = "Rate an outfit from 1 to 5 stars")]
    Rate { outfit_id: OutfitId, rating: u8 },

    #[command(about = "Schedule an outfit for a day and occasion")]
    Schedule {
        outfit_id: OutfitId,

        #[arg(long)]
        day: String,

        #[arg(long, help = "work, casual, date or event")]
        occasion: String,
    },

    #[command(about = "Create a remix of an outfit with the given modifications")]
    Remix {
        outfit_id: OutfitId,

        #[arg(long = "modify", required = true)]
        modifications: Vec<String>,
    },

    #[command(about = "Toggle between the light and dark theme")]
    Theme,

    #[command(about = "Run a UI action from element attributes given as key=value")]
    Dispatch {
        #[arg(required = true, value_parser = parse_attribute)]
        attributes: Vec<(String, String)>,
    },

    #[command(about = "Replay onboarding, style processing and the feed on throwaway state")]
    Simulate {
        #[arg(long, default_value = "fast")]
        speed: Speed,

        #[arg(long, help = "Make style processing end in the error state")]
        fail: bool,
    },

    #[command(about = "Export profile, wishlist, cart and collections as JSON")]
    Export {
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    #[command(about = "Delete all stored data")]
    DeleteAccount {
        #[arg(long, help = "Confirm the deletion")]
        yes: bool,
    },

    #[command(about = "Search reference data used by the profile forms")]
    Lookup {
        #[command(subcommand)]
        command: LookupCommand,
    },

    #[command(about = "Show or create the configuration file")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum StateCommand {
    #[command(about = "Print the full state")]
    Show,

    #[command(about = "Read a dot-path such as commerce.wishlist")]
    Get {
        path: String,

        #[arg(long, help = "JSON value printed when the path is unset")]
        default: Option<String>,
    },

    #[command(about = "Write a JSON value at a dot-path")]
    Set { path: String, value: String },

    #[command(about = "Restore default state")]
    Reset,
}

#[derive(Subcommand)]
pub enum CartCommand {
    #[command(about = "List cart items")]
    List,

    #[command(about = "Add one product of an outfit, or all of them")]
    Add {
        outfit_id: OutfitId,

        #[arg(long, help = "1-based product position; omit to add every product")]
        product: Option<usize>,
    },

    #[command(about = "Set the quantity of a cart item (0 or less removes it)")]
    Quantity {
        item_id: String,

        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },

    #[command(about = "Remove a cart item")]
    Remove { item_id: String },

    #[command(about = "Empty the cart")]
    Clear,

    #[command(about = "Place a simulated order")]
    Checkout,
}

#[derive(Subcommand)]
pub enum WishlistCommand {
    #[command(about = "List liked outfits")]
    List,

    #[command(about = "Like or unlike an outfit")]
    Toggle { outfit_id: OutfitId },
}

#[derive(Subcommand)]
pub enum CollectionsCommand {
    #[command(about = "List collections (creates the defaults on first use)")]
    List,

    #[command(about = "Create a collection holding one outfit")]
    Create {
        name: String,

        #[arg(long)]
        outfit: OutfitId,
    },

    #[command(about = "Add an outfit to a collection or take it out")]
    Toggle {
        collection_id: String,
        outfit_id: OutfitId,
    },
}

#[derive(Subcommand)]
pub enum LookupCommand {
    #[command(about = "Countries by name or dial code")]
    Countries { query: Option<String> },

    #[command(about = "Location suggestions (two characters minimum)")]
    Locations { input: String },

    #[command(about = "Shop-the-look products for a category")]
    Products { category: String },

    #[command(about = "Check whether a phone number is acceptable")]
    Phone { number: String },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Print the effective configuration")]
    Show,

    #[command(about = "Write the default configuration file")]
    Init {
        #[arg(long, help = "Overwrite an existing file")]
        force: bool,
    },
}

fn parse_attribute(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected key=value, got '{}'", raw)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_attribute() {
        assert_eq!(
            parse_attribute("data-action=toggle-theme").unwrap(),
            ("data-action".to_string(), "toggle-theme".to_string())
        );
        assert_eq!(
            parse_attribute("data-params={\"a\":\"b=c\"}").unwrap().1,
            "{\"a\":\"b=c\"}"
        );
        assert!(parse_attribute("novalue").is_err());
        assert!(parse_attribute("=x").is_err());
    }
}
