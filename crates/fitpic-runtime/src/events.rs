use std::pin::Pin;
use std::task::{Context, Poll};

use futures::stream::Stream;
use serde::Serialize;

use fitpic_catalog::{ProcessingStep, Weather};
use fitpic_engine::profile::ProfilePreview;
use fitpic_types::{Collection, NavItem, Outfit, OutfitId, PageId, Theme};

/// Notification to the view layer.
///
/// The runtime never renders; it reports what changed and the view decides
/// how to show it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UiEvent {
    /// Current page starts its exit animation
    PageExiting { page: PageId },
    /// Transition finished; `page` is now the only active page
    PageShown {
        page: PageId,
        nav_item: Option<NavItem>,
    },
    /// Navigation chrome (menu button and bar) shown or hidden
    NavigationVisible { visible: bool },
    MenuToggled { expanded: bool },
    ModalClosed { modal: String },

    StepFadingOut { step: u8 },
    StepShown { step: u8 },
    ProfilePreview(ProfilePreview),

    ProcessingStarted,
    ProcessingStep {
        index: usize,
        step: Option<ProcessingStep>,
    },
    ProcessingInsight { index: usize, text: &'static str },
    ProcessingFailed { message: &'static str },

    FeedSkeletons { count: usize },
    FeedCleared,
    FeedLoading { loading: bool },
    FeedAppended { outfits: Vec<Outfit> },
    FeedEnd,
    /// Visible subset of the rendered feed after a filter change
    FeedFiltered {
        label: String,
        visible: Vec<OutfitId>,
    },

    Toast { message: String },
    CartBadge { count: u32 },
    AddToCartPending { outfit_id: OutfitId },
    AddToCartDone { outfit_id: OutfitId },
    WishlistChanged { outfit_id: OutfitId, wishlisted: bool },
    CollectionsChanged { collections: Vec<Collection> },
    RatingChanged {
        outfit_id: OutfitId,
        rating: f64,
        reviews: u32,
    },
    ScheduleSelection { day: Option<String>, occasion: Option<String>, ready: bool },
    ModificationsChanged { selected: Vec<String> },
    ThemeChanged { theme: Theme },
    Greeting { text: &'static str, recommendation: &'static str, weather: Weather },
    DataExported { file_name: &'static str, json: String },
}

impl UiEvent {
    pub fn toast(message: impl Into<String>) -> Self {
        UiEvent::Toast {
            message: message.into(),
        }
    }
}

/// Stream of [`UiEvent`]s from a running app.
pub struct UiEventStream {
    receiver: tokio::sync::mpsc::UnboundedReceiver<UiEvent>,
}

impl UiEventStream {
    pub(crate) fn new(receiver: tokio::sync::mpsc::UnboundedReceiver<UiEvent>) -> Self {
        Self { receiver }
    }

    /// Poll for the next event (non-blocking).
    ///
    /// Returns `None` if no event is available immediately.
    pub fn try_next(&mut self) -> Option<UiEvent> {
        self.receiver.try_recv().ok()
    }

    /// Every event currently queued.
    pub fn drain(&mut self) -> Vec<UiEvent> {
        std::iter::from_fn(|| self.try_next()).collect()
    }
}

impl Stream for UiEventStream {
    type Item = UiEvent;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.receiver.poll_recv(cx)
    }
}
