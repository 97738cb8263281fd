use crate::domain::Listing;
use crate::search::PropertyFilters;
use crate::templates::{desktop_layout, listing_grid};
use maud::{html, Markup};

pub fn properties_page(listings: &[Listing], filters: &PropertyFilters) -> Markup {
    desktop_layout(
        "Daftar Properti",
        html! {
            main class="container" {
                h1 { "Daftar Properti" }

                form method="get" action="/properties" style="display: flex; gap: 10px; align-items: end; flex-wrap: wrap; margin-bottom: 1.5rem;" {
                    label {
                        "Harga minimum"
                        input type="number" name="budget_min" min="0" value=[filters.budget_min];
                    }
                    label {
                        "Harga maksimum"
                        input type="number" name="budget_max" min="0" value=[filters.budget_max];
                    }
                    label {
                        "Kamar tidur (min)"
                        input type="number" name="kamar_tidur" min="0" value=[filters.bedrooms];
                    }
                    button type="submit" class="primary" { "Terapkan" }
                }

                p class="muted" { (listings.len()) " properti" }
                (listing_grid(listings))
            }
        },
    )
}
