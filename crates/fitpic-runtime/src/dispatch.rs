//! Attribute-driven action dispatch.
//!
//! A view layer reports the `data-*` attributes of the element the user
//! interacted with; [`Action::from_attributes`] turns them into a typed
//! action and [`App::dispatch`] runs it.
//!
//! Recognized attribute sets, checked in this order:
//!
//! | Attributes | Action |
//! |---|---|
//! | `data-nav-action` (`navigate` + `data-nav-target`, `back`, `toggle-nav`) | navigation |
//! | `data-form-action="onboarding"` | next onboarding step |
//! | `data-input-action="theme-toggle"` | toggle theme |
//! | `data-modal-close` | close the named modal |
//! | `data-role` (`like`, `shop`, `save`) + `data-outfit-id` | outfit card buttons |
//! | `data-item-id` + `data-quantity` | cart quantity |
//! | `data-filter` | quick filter chip |
//! | `data-action` (kebab-case name) + optional `data-params` JSON | named behavior |

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use fitpic_engine::ActiveFilters;
use fitpic_engine::profile::SelectionKind;
use fitpic_types::{FilterCategory, OutfitId, Product};

use crate::app::App;
use crate::events::UiEvent;
use crate::{Error, Result};

/// Pages reachable through `data-nav-target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Entry,
    Onboarding,
    Processing,
    Home,
    Favs,
    Settings,
    Profile,
    Cart,
}

impl FromStr for NavTarget {
    type Err = Error;

    /// Accepts both the `navigateToHome` and the `navigate-to-home` spelling.
    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();
        let name = normalized.strip_prefix("navigateto").unwrap_or(&normalized);
        match name {
            "entry" => Ok(NavTarget::Entry),
            "onboarding" => Ok(NavTarget::Onboarding),
            "processing" => Ok(NavTarget::Processing),
            "home" => Ok(NavTarget::Home),
            "favs" => Ok(NavTarget::Favs),
            "settings" => Ok(NavTarget::Settings),
            "profile" => Ok(NavTarget::Profile),
            "cart" | "cartpage" => Ok(NavTarget::Cart),
            _ => Err(Error::Dispatch(format!("Navigation target '{}' not found", s))),
        }
    }
}

/// A user action, decoded from element attributes.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Navigate(NavTarget),
    NavigateToTab(String),
    OutfitDetail(OutfitId),
    Back,
    ToggleNavigation,
    ExpandNavigation,
    CollapseNavigation,
    NextStep,
    ToggleTag { kind: SelectionKind, value: String },
    SaveForLater,
    RetryProcessing,
    ToggleTheme,
    CloseModal(String),

    LoadMore,
    RefreshFeed,
    QuickFilter(String),
    ApplyFilters(ActiveFilters),
    ClearFilters,

    ToggleLike(OutfitId),
    SaveOptions(OutfitId),
    AddToCart { product: Product, outfit_id: OutfitId },
    AddAllToCart,
    SetQuantity { item_id: String, quantity: i64 },
    RemoveFromCart(String),
    ClearCart,
    Checkout,
    CreateCollection { name: String, outfit_id: OutfitId },
    ToggleInCollection { collection_id: String, outfit_id: OutfitId },
    Rate { outfit_id: OutfitId, rating: u8 },
    SelectScheduleDay(String),
    SelectOccasion(String),
    ConfirmSchedule,
    CancelSchedule,
    ToggleModification(String),
    GenerateRemix,
    ExportData,
    DeleteAccount,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct OutfitParams {
    outfit_id: OutfitId,
}

#[derive(Deserialize)]
struct TabParams {
    tab: String,
}

#[derive(Deserialize)]
struct FilterParams {
    filter: String,
}

#[derive(Deserialize)]
struct TagParams {
    kind: String,
    value: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CartParams {
    #[serde(flatten)]
    product: Product,
    outfit_id: OutfitId,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ItemParams {
    item_id: String,
    #[serde(default)]
    quantity: Option<i64>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CollectionParams {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    collection_id: Option<String>,
    outfit_id: OutfitId,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RateParams {
    outfit_id: OutfitId,
    rating: u8,
}

#[derive(Deserialize)]
struct ValueParams {
    value: String,
}

fn params<T: DeserializeOwned>(action: &str, params: &Value) -> Result<T> {
    serde_json::from_value(params.clone())
        .map_err(|err| Error::Dispatch(format!("Invalid params for '{}': {}", action, err)))
}

fn parse_outfit_id(raw: &str) -> Result<OutfitId> {
    raw.trim()
        .parse()
        .map_err(|_| Error::Dispatch(format!("Invalid outfit id '{}'", raw)))
}

fn selection_kind(kind: &str) -> Result<SelectionKind> {
    match kind {
        "brand" => Ok(SelectionKind::Brand),
        "event" => Ok(SelectionKind::Event),
        "aesthetic" => Ok(SelectionKind::Aesthetic),
        other => Err(Error::Dispatch(format!("Unknown tag kind '{}'", other))),
    }
}

/// Filter modal selection: `{"style": ["casual"], "season": ["fall"]}`.
fn active_filters(value: &Value) -> Result<ActiveFilters> {
    let selection: BTreeMap<String, Vec<String>> = params("apply-filters", value)?;
    let mut filters = ActiveFilters::new();
    for (category, values) in selection {
        let category: FilterCategory = category
            .parse()
            .map_err(|err: fitpic_types::Error| Error::Dispatch(err.to_string()))?;
        for value in values {
            filters.select(category, value);
        }
    }
    Ok(filters)
}

impl Action {
    /// Decode an attribute map (keys are full attribute names such as
    /// `data-action`).
    pub fn from_attributes(attrs: &BTreeMap<String, String>) -> Result<Action> {
        let attr = |name: &str| attrs.get(name).map(String::as_str);

        if let Some(nav) = attr("data-nav-action") {
            return match nav {
                "navigate" => {
                    let target = attr("data-nav-target").ok_or_else(|| {
                        Error::Dispatch("data-nav-action=navigate without data-nav-target".into())
                    })?;
                    Ok(Action::Navigate(target.parse()?))
                }
                "back" => Ok(Action::Back),
                "toggle-nav" => Ok(Action::ToggleNavigation),
                other => Err(Error::Dispatch(format!("Navigation action '{}' not handled", other))),
            };
        }

        if let Some(form) = attr("data-form-action") {
            return match form {
                "onboarding" => Ok(Action::NextStep),
                other => Err(Error::Dispatch(format!("Form action '{}' not handled", other))),
            };
        }

        if let Some(input) = attr("data-input-action") {
            return match input {
                "theme-toggle" => Ok(Action::ToggleTheme),
                other => Err(Error::Dispatch(format!("Input action '{}' not handled", other))),
            };
        }

        if let Some(modal) = attr("data-modal-close") {
            return Ok(Action::CloseModal(modal.to_string()));
        }

        if let (Some(role), Some(id)) = (attr("data-role"), attr("data-outfit-id")) {
            let outfit_id = parse_outfit_id(id)?;
            return match role {
                "like" => Ok(Action::ToggleLike(outfit_id)),
                "shop" => Ok(Action::OutfitDetail(outfit_id)),
                "save" => Ok(Action::SaveOptions(outfit_id)),
                other => Err(Error::Dispatch(format!("Outfit role '{}' not handled", other))),
            };
        }

        if let (Some(item_id), Some(quantity)) = (attr("data-item-id"), attr("data-quantity")) {
            let quantity = quantity
                .trim()
                .parse()
                .map_err(|_| Error::Dispatch(format!("Invalid quantity '{}'", quantity)))?;
            return Ok(Action::SetQuantity {
                item_id: item_id.to_string(),
                quantity,
            });
        }

        if let Some(filter) = attr("data-filter") {
            return Ok(Action::QuickFilter(filter.to_string()));
        }

        if let Some(name) = attr("data-action") {
            let value = match attr("data-params") {
                Some(raw) => serde_json::from_str(raw).map_err(|err| {
                    Error::Dispatch(format!("Invalid data-params for '{}': {}", name, err))
                })?,
                None => Value::Object(Default::default()),
            };
            return Action::named(name, &value);
        }

        Err(Error::Dispatch("No action attributes".to_string()))
    }

    /// Resolve a kebab-case behavior name with its JSON params.
    pub fn named(name: &str, value: &Value) -> Result<Action> {
        let action = match name {
            "next-step" => Action::NextStep,
            "navigate-to-tab" => Action::NavigateToTab(params::<TabParams>(name, value)?.tab),
            "navigate-to-outfit-detail" => {
                Action::OutfitDetail(params::<OutfitParams>(name, value)?.outfit_id)
            }
            "toggle-navigation" => Action::ToggleNavigation,
            "expand-navigation" => Action::ExpandNavigation,
            "collapse-navigation" => Action::CollapseNavigation,
            "toggle-tag" => {
                let p: TagParams = params(name, value)?;
                Action::ToggleTag {
                    kind: selection_kind(&p.kind)?,
                    value: p.value,
                }
            }
            "save-for-later" => Action::SaveForLater,
            "retry-processing" => Action::RetryProcessing,
            "toggle-theme" => Action::ToggleTheme,
            "load-more-outfits" => Action::LoadMore,
            "refresh-feed" => Action::RefreshFeed,
            "apply-quick-filter" => {
                Action::QuickFilter(params::<FilterParams>(name, value)?.filter)
            }
            "apply-filters" => Action::ApplyFilters(active_filters(value)?),
            "clear-filters" => Action::ClearFilters,
            "toggle-like" | "toggle-wishlist" => {
                Action::ToggleLike(params::<OutfitParams>(name, value)?.outfit_id)
            }
            "show-save-options" => {
                Action::SaveOptions(params::<OutfitParams>(name, value)?.outfit_id)
            }
            "add-to-cart" => {
                let p: CartParams = params(name, value)?;
                Action::AddToCart {
                    product: p.product,
                    outfit_id: p.outfit_id,
                }
            }
            "add-all-to-cart" => Action::AddAllToCart,
            "update-cart-quantity" => {
                let p: ItemParams = params(name, value)?;
                let quantity = p.quantity.ok_or_else(|| {
                    Error::Dispatch("update-cart-quantity requires quantity".to_string())
                })?;
                Action::SetQuantity {
                    item_id: p.item_id,
                    quantity,
                }
            }
            "remove-from-cart" => {
                Action::RemoveFromCart(params::<ItemParams>(name, value)?.item_id)
            }
            "clear-cart" => Action::ClearCart,
            "proceed-to-checkout" | "checkout" => Action::Checkout,
            "create-collection" => {
                let p: CollectionParams = params(name, value)?;
                Action::CreateCollection {
                    name: p.name.unwrap_or_default(),
                    outfit_id: p.outfit_id,
                }
            }
            "toggle-outfit-in-collection" => {
                let p: CollectionParams = params(name, value)?;
                let collection_id = p.collection_id.ok_or_else(|| {
                    Error::Dispatch("toggle-outfit-in-collection requires collectionId".into())
                })?;
                Action::ToggleInCollection {
                    collection_id,
                    outfit_id: p.outfit_id,
                }
            }
            "rate-outfit" => {
                let p: RateParams = params(name, value)?;
                Action::Rate {
                    outfit_id: p.outfit_id,
                    rating: p.rating,
                }
            }
            "select-schedule-day" => {
                Action::SelectScheduleDay(params::<ValueParams>(name, value)?.value)
            }
            "select-occasion" => Action::SelectOccasion(params::<ValueParams>(name, value)?.value),
            "confirm-schedule" => Action::ConfirmSchedule,
            "cancel-schedule" => Action::CancelSchedule,
            "toggle-modification" => {
                Action::ToggleModification(params::<ValueParams>(name, value)?.value)
            }
            "generate-remix" => Action::GenerateRemix,
            "export-data" => Action::ExportData,
            "delete-account" => Action::DeleteAccount,
            other => return Err(Error::Dispatch(format!("Action '{}' not found", other))),
        };
        Ok(action)
    }
}

impl App {
    /// Decode and run an attribute set. Unknown or malformed attribute sets
    /// are logged and ignored; returns whether an action ran.
    pub fn dispatch_attributes(&self, attrs: &BTreeMap<String, String>) -> bool {
        match Action::from_attributes(attrs) {
            Ok(action) => {
                self.dispatch(action);
                true
            }
            Err(err) => {
                tracing::warn!("{}", err);
                false
            }
        }
    }

    pub fn dispatch(&self, action: Action) {
        tracing::debug!(?action, "Dispatch");
        match action {
            Action::Navigate(target) => match target {
                NavTarget::Entry => self.navigate_to_entry(),
                NavTarget::Onboarding => self.navigate_to_onboarding(),
                NavTarget::Processing => self.navigate_to_processing(),
                NavTarget::Home => self.navigate_to_home(),
                NavTarget::Favs => self.navigate_to_tab("favs"),
                NavTarget::Settings => self.navigate_to_tab("settings"),
                NavTarget::Profile => self.navigate_to_tab("profile"),
                NavTarget::Cart => self.navigate_to_tab("cart"),
            },
            Action::NavigateToTab(tab) => self.navigate_to_tab(&tab),
            Action::OutfitDetail(id) => self.navigate_to_outfit_detail(id),
            Action::Back => self.navigate_to_entry(),
            Action::ToggleNavigation => self.toggle_navigation(),
            Action::ExpandNavigation => self.expand_navigation(),
            Action::CollapseNavigation => self.collapse_navigation(),
            Action::NextStep => self.next_step(),
            Action::ToggleTag { kind, value } => {
                self.toggle_selection(kind, &value);
            }
            Action::SaveForLater => self.save_profile_draft(),
            Action::RetryProcessing => self.retry_processing(),
            Action::ToggleTheme => self.toggle_theme(),
            Action::CloseModal(modal) => self.emit(UiEvent::ModalClosed { modal }),
            Action::LoadMore => self.load_more_outfits(),
            Action::RefreshFeed => self.refresh_feed(),
            Action::QuickFilter(tag) => self.apply_quick_filter(&tag),
            Action::ApplyFilters(filters) => self.apply_filters(filters),
            Action::ClearFilters => self.clear_filters(),
            Action::ToggleLike(id) => {
                self.toggle_wishlist(id);
            }
            Action::SaveOptions(id) => self.open_collections(id),
            Action::AddToCart { product, outfit_id } => self.add_to_cart(&product, outfit_id),
            Action::AddAllToCart => self.add_all_to_cart(),
            Action::SetQuantity { item_id, quantity } => {
                self.update_cart_quantity(&item_id, quantity)
            }
            Action::RemoveFromCart(item_id) => self.remove_from_cart(&item_id),
            Action::ClearCart => self.clear_cart(),
            Action::Checkout => self.checkout(),
            Action::CreateCollection { name, outfit_id } => {
                self.create_collection(&name, outfit_id)
            }
            Action::ToggleInCollection {
                collection_id,
                outfit_id,
            } => self.toggle_outfit_in_collection(&collection_id, outfit_id),
            Action::Rate { outfit_id, rating } => self.rate_outfit(outfit_id, rating),
            Action::SelectScheduleDay(day) => self.select_schedule_day(&day),
            Action::SelectOccasion(occasion) => self.select_occasion(&occasion),
            Action::ConfirmSchedule => self.confirm_schedule(),
            Action::CancelSchedule => self.cancel_schedule(),
            Action::ToggleModification(modification) => self.toggle_modification(&modification),
            Action::GenerateRemix => self.generate_remix(),
            Action::ExportData => {
                if let Err(err) = self.export_data() {
                    tracing::error!("Export failed: {}", err);
                }
            }
            Action::DeleteAccount => self.delete_account(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_nav_target_spellings() {
        assert_eq!("navigateToHome".parse::<NavTarget>().unwrap(), NavTarget::Home);
        assert_eq!("navigate-to-home".parse::<NavTarget>().unwrap(), NavTarget::Home);
        assert_eq!("navigateToCartPage".parse::<NavTarget>().unwrap(), NavTarget::Cart);
        assert!("navigateToCloset".parse::<NavTarget>().is_err());
    }

    #[test]
    fn test_nav_attributes() {
        let action = Action::from_attributes(&attrs(&[
            ("data-nav-action", "navigate"),
            ("data-nav-target", "navigateToOnboarding"),
        ]))
        .unwrap();
        assert_eq!(action, Action::Navigate(NavTarget::Onboarding));

        let back = Action::from_attributes(&attrs(&[("data-nav-action", "back")])).unwrap();
        assert_eq!(back, Action::Back);

        let missing = Action::from_attributes(&attrs(&[("data-nav-action", "navigate")]));
        assert!(missing.is_err());
    }

    #[test]
    fn test_card_roles() {
        let like = Action::from_attributes(&attrs(&[
            ("data-role", "like"),
            ("data-outfit-id", "3"),
        ]))
        .unwrap();
        assert_eq!(like, Action::ToggleLike(3));

        let shop = Action::from_attributes(&attrs(&[
            ("data-role", "shop"),
            ("data-outfit-id", "7"),
        ]))
        .unwrap();
        assert_eq!(shop, Action::OutfitDetail(7));

        let bad = Action::from_attributes(&attrs(&[
            ("data-role", "like"),
            ("data-outfit-id", "seven"),
        ]));
        assert!(bad.is_err());
    }

    #[test]
    fn test_quantity_and_filter() {
        let action = Action::from_attributes(&attrs(&[
            ("data-item-id", "abc"),
            ("data-quantity", "0"),
        ]))
        .unwrap();
        assert_eq!(
            action,
            Action::SetQuantity {
                item_id: "abc".to_string(),
                quantity: 0
            }
        );

        let filter = Action::from_attributes(&attrs(&[("data-filter", "date-night")])).unwrap();
        assert_eq!(filter, Action::QuickFilter("date-night".to_string()));
    }

    #[test]
    fn test_generic_action_with_params() {
        let action = Action::from_attributes(&attrs(&[
            ("data-action", "rate-outfit"),
            ("data-params", r#"{"outfitId": 2, "rating": 4}"#),
        ]))
        .unwrap();
        assert_eq!(
            action,
            Action::Rate {
                outfit_id: 2,
                rating: 4
            }
        );

        let cart = Action::from_attributes(&attrs(&[
            ("data-action", "add-to-cart"),
            (
                "data-params",
                r#"{"outfitId": 7, "name": "Silk Blouse", "brand": "Equipment", "price": 188}"#,
            ),
        ]))
        .unwrap();
        match cart {
            Action::AddToCart { product, outfit_id } => {
                assert_eq!(outfit_id, 7);
                assert_eq!(product.name, "Silk Blouse");
                assert_eq!(product.price, 188.0);
            }
            other => panic!("unexpected action {:?}", other),
        }
    }

    #[test]
    fn test_apply_filters_params() {
        let action = Action::named(
            "apply-filters",
            &serde_json::json!({"style": ["casual", "boho"], "season": ["fall"]}),
        )
        .unwrap();
        let Action::ApplyFilters(filters) = action else {
            panic!("expected ApplyFilters");
        };
        assert_eq!(filters.count(), 3);
        assert!(filters.is_selected(FilterCategory::Style, "boho"));

        let bad = Action::named("apply-filters", &serde_json::json!({"colour": ["red"]}));
        assert!(bad.is_err());
    }

    #[test]
    fn test_unknown_action_is_error() {
        let err = Action::from_attributes(&attrs(&[("data-action", "teleport")])).unwrap_err();
        assert_eq!(err.to_string(), "Dispatch error: Action 'teleport' not found");

        let malformed = Action::from_attributes(&attrs(&[
            ("data-action", "rate-outfit"),
            ("data-params", "{not json"),
        ]));
        assert!(malformed.is_err());

        assert!(Action::from_attributes(&BTreeMap::new()).is_err());
    }
}
