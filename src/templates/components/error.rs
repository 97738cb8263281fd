use crate::errors::ServerError;
use crate::templates::desktop_layout;
use astra::{Body, Response, ResponseBuilder};
use maud::html;
use tracing::error;

/// Convert a ServerError into a proper HTML response page
pub fn html_error_response(err: ServerError) -> Response {
    let status = err.status();

    let message = match &err {
        ServerError::NotFound => "Halaman tidak ditemukan.".to_string(),
        ServerError::BadRequest(msg) => msg.clone(),
        ServerError::PayloadTooLarge => "Berkas yang diunggah terlalu besar.".to_string(),
        ServerError::Store(_) | ServerError::InternalError(_) => {
            error!(error = %err, "request failed");
            "Terjadi kesalahan pada server.".to_string()
        }
    };

    let page = desktop_layout(
        &format!("Error {status}"),
        html! {
            main class="container" style="max-width: 720px; margin: 4rem auto;" {
                h1 { "Error " (status) }
                p style="font-size: 1.1rem; color: #444;" { (message) }
                p { a href="/" { "← Kembali ke beranda" } }
            }
        },
    );

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .body(Body::from(page.into_string()))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
