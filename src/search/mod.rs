pub mod browse;
pub mod criteria;
pub mod extract;
pub mod filter;
pub mod rules;
pub mod service;

pub use browse::PropertyFilters;
pub use criteria::{Amenity, Budget, Criteria, PricePreference, SizePreference};
pub use extract::{extract_criteria, is_property_related};
pub use filter::filter_strict;
pub use service::{search, SearchOutcome};
