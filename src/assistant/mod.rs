// src/assistant/mod.rs

pub mod gemini;

use crate::domain::{format_rupiah, Listing};
use thiserror::Error;
use tracing::warn;

pub use gemini::GeminiClient;

pub const MSG_NO_ANSWER: &str = "Maaf, saya tidak dapat memproses pertanyaan Anda saat ini.";
pub const MSG_FAILURE: &str = "Maaf, terjadi kesalahan pada sistem chatbot. Silakan coba lagi.";

#[derive(Debug, Error)]
pub enum AssistantError {
    #[error("chat backend has no API key configured")]
    NotConfigured,
    #[error("request failed: {0}")]
    RequestFailed(String),
    #[error("API error: {0}")]
    ApiError(String),
}

/// A text-generation backend. `Ok(None)` means the backend answered with no
/// usable text.
pub trait LanguageModel: Send + Sync {
    fn generate(&self, prompt: &str) -> Result<Option<String>, AssistantError>;
}

/// Real-estate chat assistant. Backend failures never escape: they become a
/// fixed apology.
pub struct Assistant {
    backend: Box<dyn LanguageModel>,
}

impl Assistant {
    pub fn new(backend: Box<dyn LanguageModel>) -> Self {
        Self { backend }
    }

    pub fn reply(&self, message: &str, listings: &[Listing]) -> String {
        let prompt = build_prompt(message, &listing_context(listings));

        match self.backend.generate(&prompt) {
            Ok(Some(text)) => text,
            Ok(None) => MSG_NO_ANSWER.to_string(),
            Err(e) => {
                warn!(error = %e, "chat backend failed");
                MSG_FAILURE.to_string()
            }
        }
    }
}

/// "Available properties count: N, Average price: Rp X". The average only
/// covers priced listings and is left out when there are none.
pub fn listing_context(listings: &[Listing]) -> String {
    let mut context = format!("Available properties count: {}", listings.len());

    let prices: Vec<f64> = listings.iter().filter_map(Listing::priced).collect();
    if !prices.is_empty() {
        let avg = prices.iter().sum::<f64>() / prices.len() as f64;
        context.push_str(&format!(", Average price: {}", format_rupiah(avg)));
    }
    context
}

fn build_prompt(message: &str, context: &str) -> String {
    format!(
        "You are a helpful real estate assistant for a property recommendation system.\n\
         Context: {context}\n\n\
         Help users with:\n\
         - Property searches and recommendations\n\
         - Price predictions and market analysis\n\
         - Location and facility information\n\
         - Answering questions about property features\n\n\
         Be friendly, informative, and helpful. Respond in Bahasa Indonesia when appropriate.\n\n\
         User question: {message}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::utils::{listing, FakeModel};

    #[test]
    fn context_averages_priced_listings_only() {
        let mut a = listing("a");
        a.price = Some(400_000_000.0);
        let mut b = listing("b");
        b.price = Some(600_000_000.0);
        let mut c = listing("c");
        c.price = None;

        assert_eq!(
            listing_context(&[a, b, c]),
            "Available properties count: 3, Average price: Rp 500,000,000"
        );
        assert_eq!(listing_context(&[]), "Available properties count: 0");
    }

    #[test]
    fn reply_passes_context_and_question() {
        let fake = FakeModel::answering("Tentu!");
        let seen = fake.prompts();
        let assistant = Assistant::new(Box::new(fake));

        assert_eq!(assistant.reply("rumah murah?", &[listing("a")]), "Tentu!");

        let prompts = seen.lock();
        assert!(prompts[0].contains("Available properties count: 1"));
        assert!(prompts[0].ends_with("User question: rumah murah?"));
    }

    #[test]
    fn failures_become_apologies() {
        let assistant = Assistant::new(Box::new(FakeModel::failing()));
        assert_eq!(assistant.reply("halo", &[]), MSG_FAILURE);

        let assistant = Assistant::new(Box::new(FakeModel::silent()));
        assert_eq!(assistant.reply("halo", &[]), MSG_NO_ANSWER);
    }
}
