pub mod admin;
pub mod chat;
pub mod detail;
pub mod home;
pub mod predict;
pub mod properties;
pub mod search;

pub use admin::{admin_page, notice_text, AdminVm};
pub use chat::chat_page;
pub use detail::detail_page;
pub use home::home_page;
pub use predict::{predict_page, PredictOutcome};
pub use properties::properties_page;
pub use search::search_page;
