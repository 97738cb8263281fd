pub mod listing;
pub mod new_listing;

pub use listing::{format_rupiah, Certificate, Condition, Listing, ListingStatus, RoadType};
pub use new_listing::NewListing;
