pub mod card;
pub mod error;
pub mod listing_card;
pub mod search_box;

pub use card::{card, notice};
pub use error::html_error_response;
pub use listing_card::{listing_card, listing_grid, price_label};
pub use search_box::search_box;
