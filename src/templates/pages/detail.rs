use crate::domain::{format_rupiah, Listing};
use crate::templates::{card, desktop_layout, listing_grid};
use crate::templates::components::price_label;
use maud::{html, Markup};

fn distance(meters: Option<f64>) -> String {
    match meters {
        Some(m) if m >= 1000.0 => format!("{:.1} km", m / 1000.0),
        Some(m) => format!("{m:.0} m"),
        None => "-".to_string(),
    }
}

pub fn detail_page(listing: &Listing, others: &[Listing]) -> Markup {
    let title = listing.title();

    desktop_layout(
        &title,
        html! {
            main class="container" {
                h1 { (title) }
                p class="price" style="font-size: 1.5rem; font-weight: 600; color: #1e40af;" { (price_label(listing)) }

                @if let Some(image) = &listing.image {
                    img src=(format!("/static/images/{image}")) alt=(title) style="max-width: 100%; border-radius: 8px;";
                }

                (card("Spesifikasi", html! {
                    table style="width: 100%; border-collapse: collapse;" {
                        tbody {
                            tr { th { "Luas tanah" } td { (listing.land_area) " m²" } }
                            tr { th { "Luas bangunan" } td { (listing.building_area) " m²" } }
                            tr { th { "Kamar tidur" } td { (listing.bedrooms) } }
                            tr { th { "Kamar mandi" } td { (listing.bathrooms) } }
                            tr { th { "Carport" } td { (listing.carport) } }
                            tr { th { "Tahun dibangun" } td { (listing.year_built) } }
                            tr { th { "Jalan" } td { (listing.road_type.map_or("-", |r| r.display_name())) } }
                            tr { th { "Kondisi" } td { (listing.condition.map_or("-", |c| c.display_name())) } }
                            tr { th { "Sertifikat" } td { (listing.certificate.map_or("-", |c| c.label())) } }
                            tr { th { "Status" } td { (listing.status.display_name()) } }
                        }
                    }
                }))

                (card("Lokasi", html! {
                    @if let Some(addr) = &listing.address {
                        p { (addr) }
                    }
                    @if let Some(area) = &listing.neighborhood {
                        p { "Kecamatan " (area) }
                    }
                    ul {
                        li { "Sekolah: " (distance(listing.distance_school)) }
                        li { "Rumah sakit: " (distance(listing.distance_hospital)) }
                        li { "Pasar: " (distance(listing.distance_market)) }
                    }
                    @if let (Some(lat), Some(lng)) = (listing.latitude, listing.longitude) {
                        p class="muted" { "Koordinat: " (lat) ", " (lng) }
                    }
                }))

                @if let Some(price) = listing.priced() {
                    @if listing.land_area > 0.0 {
                        p class="muted" { "Sekitar " (format_rupiah(price / listing.land_area)) " per m² tanah" }
                    }
                }

                h2 { "Properti lainnya" }
                (listing_grid(others))
            }
        },
    )
}
