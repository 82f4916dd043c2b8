use fitpic_runtime::UiEvent;

use super::style;

/// One-line plain rendering of a UI event.
pub fn describe(event: &UiEvent) -> String {
    match event {
        UiEvent::PageExiting { page } => style::dim(format!("leaving {}", page)),
        UiEvent::PageShown { page, nav_item } => match nav_item {
            Some(item) => format!("page {} ({})", style::bold(page), item),
            None => format!("page {}", style::bold(page)),
        },
        UiEvent::NavigationVisible { visible } => {
            style::dim(if *visible { "navigation shown" } else { "navigation hidden" })
        }
        UiEvent::MenuToggled { expanded } => {
            style::dim(if *expanded { "menu expanded" } else { "menu collapsed" })
        }
        UiEvent::ModalClosed { modal } => style::dim(format!("closed {}", modal)),

        UiEvent::StepFadingOut { step } => style::dim(format!("step {} fading out", step)),
        UiEvent::StepShown { step } => format!("step {}/7", style::bold(step)),
        UiEvent::ProfilePreview(preview) => format!(
            "profile: {} | {} | {}",
            preview.brands.join(", "),
            preview.events.join(", "),
            preview.aesthetics.join(", ")
        ),

        UiEvent::ProcessingStarted => style::bold("processing started"),
        UiEvent::ProcessingStep { index, step } => match step {
            Some(step) => format!("{} {}", style::accent(format!("[{}/4]", index + 1)), step.title),
            None => style::good("[4/4] done"),
        },
        UiEvent::ProcessingInsight { text, .. } => style::dim(*text),
        UiEvent::ProcessingFailed { message } => style::bad(*message),

        UiEvent::FeedSkeletons { count } => style::dim(format!("{} placeholders", count)),
        UiEvent::FeedCleared => style::dim("feed cleared"),
        UiEvent::FeedLoading { loading } => {
            style::dim(if *loading { "loading outfits..." } else { "outfits loaded" })
        }
        UiEvent::FeedAppended { outfits } => {
            let titles: Vec<&str> = outfits.iter().map(|o| o.title.as_str()).collect();
            format!("+{} {}", outfits.len(), titles.join(", "))
        }
        UiEvent::FeedEnd => style::dim("no more outfits"),
        UiEvent::FeedFiltered { label, visible } => {
            format!("{}: {} visible", label, visible.len())
        }

        UiEvent::Toast { message } => format!("{} {}", style::accent("»"), message),
        UiEvent::CartBadge { count } => format!("cart {}", count),
        UiEvent::AddToCartPending { outfit_id } => {
            style::dim(format!("adding outfit {} to cart...", outfit_id))
        }
        UiEvent::AddToCartDone { outfit_id } => format!("outfit {} added to cart", outfit_id),
        UiEvent::WishlistChanged {
            outfit_id,
            wishlisted,
        } => {
            if *wishlisted {
                format!("liked outfit {}", outfit_id)
            } else {
                format!("unliked outfit {}", outfit_id)
            }
        }
        UiEvent::CollectionsChanged { collections } => {
            format!("{} collections", collections.len())
        }
        UiEvent::RatingChanged {
            outfit_id,
            rating,
            reviews,
        } => format!(
            "outfit {} rated {:.1} ({} reviews)",
            outfit_id, rating, reviews
        ),
        UiEvent::ScheduleSelection {
            day,
            occasion,
            ready,
        } => format!(
            "schedule {} / {}{}",
            day.as_deref().unwrap_or("-"),
            occasion.as_deref().unwrap_or("-"),
            if *ready { " (ready)" } else { "" }
        ),
        UiEvent::ModificationsChanged { selected } => {
            format!("modifications: {}", selected.join(", "))
        }
        UiEvent::ThemeChanged { theme } => format!("theme {}", theme.as_str()),
        UiEvent::Greeting {
            text,
            recommendation,
            weather,
        } => format!(
            "{} {} {} {}. {}",
            style::bold(*text),
            weather.icon,
            weather.temp,
            weather.condition,
            recommendation
        ),
        UiEvent::DataExported { file_name, json } => {
            format!("exported {} ({} bytes)", file_name, json.len())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fitpic_types::PageId;

    #[test]
    fn test_describe_plain() {
        assert_eq!(
            describe(&UiEvent::PageShown {
                page: PageId::Home,
                nav_item: None
            }),
            "page home-page"
        );
        assert_eq!(describe(&UiEvent::toast("Added to cart")), "» Added to cart");
        assert_eq!(
            describe(&UiEvent::RatingChanged {
                outfit_id: 2,
                rating: 4.225,
                reviews: 32
            }),
            "outfit 2 rated 4.2 (32 reviews)"
        );
    }
}
