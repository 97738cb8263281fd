use crate::search::SearchOutcome;
use crate::templates::{desktop_layout, listing_grid, notice, search_box};
use maud::{html, Markup};

pub fn search_page(query: &str, outcome: &SearchOutcome) -> Markup {
    desktop_layout(
        "Hasil Pencarian",
        html! {
            main class="container" {
                h1 { "Hasil Pencarian" }
                (search_box(query))
                (notice(&outcome.explanation))
                (listing_grid(&outcome.properties))
            }
        },
    )
}
