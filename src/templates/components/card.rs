use maud::{html, Markup};

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

/// One-line flash message shown above page content.
pub fn notice(message: &str) -> Markup {
    html! {
        div class="notice" role="status" style="padding: 10px 14px; margin-bottom: 1rem; background: #ecfdf5; border: 1px solid #a7f3d0; border-radius: 6px;" {
            (message)
        }
    }
}
