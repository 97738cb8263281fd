use crate::domain::{format_rupiah, Listing};
use maud::{html, Markup};

pub fn price_label(listing: &Listing) -> String {
    listing
        .priced()
        .map(format_rupiah)
        .unwrap_or_else(|| "Harga belum tersedia".to_string())
}

pub fn listing_card(listing: &Listing) -> Markup {
    html! {
        article class="card listing-card" {
            @if let Some(image) = &listing.image {
                img src=(format!("/static/images/{image}")) alt=(listing.title()) loading="lazy";
            }
            div class="card-body" {
                h3 {
                    a href=(format!("/property/{}", listing.id)) { (listing.title()) }
                }
                p class="price" style="font-weight: 600; color: #1e40af;" { (price_label(listing)) }
                ul class="facts" {
                    li { (listing.bedrooms) " KT" }
                    li { (listing.bathrooms) " KM" }
                    li { "LT " (listing.land_area) " m²" }
                    li { "LB " (listing.building_area) " m²" }
                }
                @if let Some(area) = &listing.neighborhood {
                    p class="muted" style="color: #6b7280;" { "Kec. " (area) }
                }
            }
        }
    }
}

pub fn listing_grid(listings: &[Listing]) -> Markup {
    html! {
        @if listings.is_empty() {
            p class="muted" { "Belum ada properti yang cocok." }
        } @else {
            div class="listing-grid" style="display: grid; grid-template-columns: repeat(auto-fill, minmax(260px, 1fr)); gap: 1rem;" {
                @for listing in listings {
                    (listing_card(listing))
                }
            }
        }
    }
}
