use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// Number of onboarding steps. `navigation.currentStep` stays within `1..=ONBOARDING_STEPS`.
pub const ONBOARDING_STEPS: u8 = 7;

/// Top-level pages of the app.
///
/// Serialized as the DOM element id the view layer renders the page into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PageId {
    #[default]
    #[serde(rename = "entry-page")]
    Entry,
    #[serde(rename = "onboarding-page")]
    Onboarding,
    #[serde(rename = "processing-page")]
    Processing,
    #[serde(rename = "home-page")]
    Home,
    #[serde(rename = "outfit-detail-page")]
    OutfitDetail,
    #[serde(rename = "favs-page")]
    Favorites,
    #[serde(rename = "settings-page")]
    Settings,
    #[serde(rename = "profile-page")]
    Profile,
    #[serde(rename = "cart-page")]
    Cart,
}

impl PageId {
    pub const ALL: [PageId; 9] = [
        PageId::Entry,
        PageId::Onboarding,
        PageId::Processing,
        PageId::Home,
        PageId::OutfitDetail,
        PageId::Favorites,
        PageId::Settings,
        PageId::Profile,
        PageId::Cart,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PageId::Entry => "entry-page",
            PageId::Onboarding => "onboarding-page",
            PageId::Processing => "processing-page",
            PageId::Home => "home-page",
            PageId::OutfitDetail => "outfit-detail-page",
            PageId::Favorites => "favs-page",
            PageId::Settings => "settings-page",
            PageId::Profile => "profile-page",
            PageId::Cart => "cart-page",
        }
    }

    /// Navigation item highlighted while this page is active.
    pub fn nav_item(&self) -> Option<NavItem> {
        match self {
            PageId::Home => Some(NavItem::Home),
            PageId::Favorites => Some(NavItem::Wishlist),
            PageId::Settings => Some(NavItem::Settings),
            PageId::Profile => Some(NavItem::Profile),
            PageId::Cart => Some(NavItem::ShoppingBag),
            _ => None,
        }
    }

    /// Whether the collapsible navigation chrome is visible on this page.
    pub fn shows_navigation(&self) -> bool {
        matches!(
            self,
            PageId::Home | PageId::OutfitDetail | PageId::Favorites | PageId::Settings
        )
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        PageId::ALL
            .into_iter()
            .find(|page| page.as_str() == s)
            .ok_or_else(|| Error::UnknownIdentifier {
                kind: "page",
                value: s.to_string(),
            })
    }
}

/// Entries of the slide-out navigation menu (`data-page` attribute values).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NavItem {
    Home,
    Wishlist,
    Settings,
    Profile,
    ShoppingBag,
}

impl NavItem {
    pub fn as_str(&self) -> &'static str {
        match self {
            NavItem::Home => "home",
            NavItem::Wishlist => "wishlist",
            NavItem::Settings => "settings",
            NavItem::Profile => "profile",
            NavItem::ShoppingBag => "shopping-bag",
        }
    }
}

impl fmt::Display for NavItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tabs reachable from the slide-out menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    Outfits,
    Favs,
    Cart,
    Settings,
    Profile,
}

impl Tab {
    pub fn page(&self) -> PageId {
        match self {
            Tab::Outfits => PageId::Home,
            Tab::Favs => PageId::Favorites,
            Tab::Cart => PageId::Cart,
            Tab::Settings => PageId::Settings,
            Tab::Profile => PageId::Profile,
        }
    }
}

impl FromStr for Tab {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "outfits" => Ok(Tab::Outfits),
            "favs" => Ok(Tab::Favs),
            "cart" => Ok(Tab::Cart),
            "settings" => Ok(Tab::Settings),
            "profile" => Ok(Tab::Profile),
            other => Err(Error::UnknownIdentifier {
                kind: "tab",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}
