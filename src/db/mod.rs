pub mod store;

pub use store::{ListingStore, StoreError};
