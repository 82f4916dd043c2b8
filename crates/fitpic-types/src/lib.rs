pub mod catalog;
pub mod commerce;
pub mod error;
pub mod fields;
pub mod filter;
pub mod page;
pub mod state;
mod util;

pub use catalog::*;
pub use commerce::*;
pub use error::{Error, Result};
pub use fields::Field;
pub use filter::FilterCategory;
pub use page::*;
pub use state::*;
pub use util::*;
