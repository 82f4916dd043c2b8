mod context;

pub mod account;
pub mod cart;
pub mod collections;
pub mod config;
pub mod dispatch;
pub mod lookup;
pub mod outfits;
pub mod simulate;
pub mod state;
pub mod wishlist;

pub use context::{HandlerContext, settle_timeout};
