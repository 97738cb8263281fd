pub mod errors;
pub mod files;
pub mod html;
pub mod json;
pub mod redirect;

pub use errors::{json_error_response, ResultResp};

pub use files::file_response;
pub use html::html_response;
pub use json::json_response;
pub use redirect::redirect;
