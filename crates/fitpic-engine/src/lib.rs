//! State transitions for FitPic.
//!
//! Every operation here is synchronous and side-effect free apart from the
//! `&mut AppState` (and, where noted, `&mut Catalog`) it is given. Timing,
//! persistence and UI notification live in `fitpic-runtime`, which applies
//! these functions inside a single store write.

pub mod cart;
pub mod collections;
pub mod error;
pub mod export;
pub mod filter;
pub mod pagination;
pub mod profile;
pub mod ratings;
pub mod remix;
pub mod schedule;
pub mod wishlist;

pub use error::{Error, Result};
pub use export::UserDataExport;
pub use filter::{ActiveFilters, FeedFilter};
pub use pagination::PageRange;
