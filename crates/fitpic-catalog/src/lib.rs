// Static reference data
// The outfit catalog is embedded at build time; everything else is constant tables.

mod copy;
mod error;
mod outfits;
mod reference;

// Public API
pub use copy::{
    MODIFICATION_OPTIONS, PROCESSING_ERROR, PROCESSING_INSIGHTS, PROCESSING_STEPS,
    ProcessingStep, SCHEDULE_OCCASIONS, WEATHER_OPTIONS, Weather,
};
pub use error::{Error, Result};
pub use outfits::{Catalog, builtin_outfits};
pub use reference::{
    POPULAR_LOCATIONS, PRODUCT_CATEGORIES, countries, is_valid_phone, location_suggestions,
    products_in_category, search_countries,
};
