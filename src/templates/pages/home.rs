// templates/pages/home.rs

use crate::domain::Listing;
use crate::templates::{desktop_layout, listing_grid, search_box};
use maud::{html, Markup};

pub fn home_page(featured: &[Listing]) -> Markup {
    desktop_layout(
        "Beranda",
        html! {
            main class="container" {
                section class="hero" {
                    h1 { "Temukan rumah yang pas untuk Anda" }
                    p { "Tulis kebutuhan Anda dalam bahasa sehari-hari. Kami mencarikan properti yang benar-benar cocok." }
                    (search_box(""))
                }

                h2 { "Properti pilihan" }
                (listing_grid(featured))

                p { a href="/properties" { "Lihat semua properti →" } }
            }
        },
    )
}
