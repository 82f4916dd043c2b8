use fitpic_types::ScrollState;

/// Distance from the bottom (px) at which the next page is requested.
pub const DEFAULT_SCROLL_THRESHOLD: f64 = 200.0;

/// Half-open catalog index range of one feed page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRange {
    pub page: u32,
    pub start: usize,
    pub end: usize,
}

impl PageRange {
    pub fn for_page(page: u32, per_page: u32) -> Self {
        let per_page = per_page as usize;
        let start = (page.max(1) as usize - 1) * per_page;
        Self {
            page,
            start,
            end: start + per_page,
        }
    }
}

/// Claim the next page for loading.
///
/// Returns `None` while a load is in flight or after the feed is exhausted;
/// otherwise marks the scroll state as loading and returns the range to
/// fetch. The loading flag is the only guard against concurrent loads.
pub fn begin_load(scroll: &mut ScrollState) -> Option<PageRange> {
    if scroll.is_loading || !scroll.has_more_outfits {
        return None;
    }
    scroll.is_loading = true;
    Some(PageRange::for_page(
        scroll.current_outfit_page,
        scroll.outfits_per_page,
    ))
}

/// Finish a load started by [`begin_load`]. Returns whether more pages remain.
pub fn complete_load(scroll: &mut ScrollState, range: PageRange, total: usize) -> bool {
    scroll.current_outfit_page = range.page + 1;
    scroll.has_more_outfits = range.end < total;
    scroll.is_loading = false;
    scroll.has_more_outfits
}

/// Back to page 1 with more pages available and nothing loading.
pub fn reset(scroll: &mut ScrollState) {
    scroll.current_outfit_page = 1;
    scroll.has_more_outfits = true;
    scroll.is_loading = false;
}

/// Whether a scroll position is close enough to the bottom to load more.
pub fn near_bottom(scroll_top: f64, client_height: f64, scroll_height: f64, threshold: f64) -> bool {
    scroll_top + client_height >= scroll_height - threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_ranges() {
        assert_eq!(PageRange::for_page(1, 8), PageRange { page: 1, start: 0, end: 8 });
        assert_eq!(PageRange::for_page(3, 8), PageRange { page: 3, start: 16, end: 24 });
    }

    #[test]
    fn test_loading_flag_blocks_second_claim() {
        let mut scroll = ScrollState::default();
        let first = begin_load(&mut scroll).unwrap();
        assert!(scroll.is_loading);
        assert!(begin_load(&mut scroll).is_none());
        assert_eq!(scroll.current_outfit_page, 1);

        assert!(complete_load(&mut scroll, first, 12));
        assert_eq!(scroll.current_outfit_page, 2);
        assert!(!scroll.is_loading);
    }

    #[test]
    fn test_exhausted_feed_stays_exhausted_until_reset() {
        let mut scroll = ScrollState::default();
        let first = begin_load(&mut scroll).unwrap();
        complete_load(&mut scroll, first, 12);
        let second = begin_load(&mut scroll).unwrap();
        assert_eq!((second.start, second.end), (8, 16));
        assert!(!complete_load(&mut scroll, second, 12));

        assert!(begin_load(&mut scroll).is_none());
        assert_eq!(scroll.current_outfit_page, 3);

        reset(&mut scroll);
        assert_eq!(begin_load(&mut scroll).map(|r| r.page), Some(1));
    }

    #[test]
    fn test_exact_multiple_has_no_more() {
        let mut scroll = ScrollState::default();
        let first = begin_load(&mut scroll).unwrap();
        assert!(!complete_load(&mut scroll, first, 8));
    }

    #[test]
    fn test_near_bottom_threshold() {
        assert!(near_bottom(1300.0, 500.0, 2000.0, DEFAULT_SCROLL_THRESHOLD));
        assert!(!near_bottom(1299.0, 500.0, 2000.0, DEFAULT_SCROLL_THRESHOLD));
    }
}
