use crate::domain::{new_listing, Listing};
use crate::templates::components::price_label;
use crate::templates::pages::predict::category_selects;
use crate::templates::{desktop_layout, notice};
use maud::{html, Markup};

pub struct AdminVm<'a> {
    pub listings: &'a [Listing],
    pub notice: Option<&'a str>,
    pub model_ready: bool,
}

/// Flash text for the `?notice=` codes the admin redirects carry.
pub fn notice_text(code: &str) -> Option<&'static str> {
    match code {
        "added" => Some("Properti berhasil ditambahkan."),
        "deleted" => Some("Properti berhasil dihapus."),
        "missing" => Some("Properti tidak ditemukan."),
        _ => None,
    }
}

fn field(name: &str, label: &str, kind: &str, placeholder: String) -> Markup {
    html! {
        label style="display: flex; flex-direction: column; gap: 4px;" {
            (label)
            input type=(kind) step="any" name=(name) placeholder=(placeholder) style="padding: 6px; border: 1px solid #ccc; border-radius: 4px;";
        }
    }
}

pub fn admin_page(vm: &AdminVm) -> Markup {
    desktop_layout(
        "Admin",
        html! {
            main class="container" {
                h1 { "Kelola Properti" }

                @if let Some(msg) = vm.notice {
                    (notice(msg))
                }

                p class="muted" {
                    (vm.listings.len()) " properti tersimpan. Model harga: "
                    @if vm.model_ready { "siap" } @else { "belum cukup data" }
                }

                div class="card" style="margin-bottom: 2rem;" {
                    h3 { "Tambah Properti" }
                    form action="/admin/add_property" method="post" enctype="multipart/form-data" style="display: grid; grid-template-columns: repeat(auto-fill, minmax(200px, 1fr)); gap: 12px;" {
                        (field("alamat", "Alamat", "text", "Jl. Kaliurang km 7".into()))
                        (field("kecamatan", "Kecamatan", "text", "Depok".into()))
                        (field("harga", "Harga (Rp)", "number", "500000000".into()))
                        (field("luas_tanah", "Luas tanah (m²)", "number", "0".into()))
                        (field("luas_bangunan", "Luas bangunan (m²)", "number", "0".into()))
                        (field("kamar_tidur", "Kamar tidur", "number", "2".into()))
                        (field("kamar_mandi", "Kamar mandi", "number", "1".into()))
                        (field("carport", "Carport", "number", "0".into()))
                        (field("tahun_dibangun", "Tahun dibangun", "number", "2020".into()))
                        (field("jarak_sekolah", "Jarak sekolah (m)", "number", new_listing::DEFAULT_DISTANCE_SCHOOL.to_string()))
                        (field("jarak_rs", "Jarak rumah sakit (m)", "number", new_listing::DEFAULT_DISTANCE_HOSPITAL.to_string()))
                        (field("jarak_pasar", "Jarak pasar (m)", "number", new_listing::DEFAULT_DISTANCE_MARKET.to_string()))
                        (field("latitude", "Latitude", "number", "-7.78".into()))
                        (field("longitude", "Longitude", "number", "110.37".into()))
                        (category_selects())
                        label style="display: flex; flex-direction: column; gap: 4px;" {
                            "Foto"
                            input type="file" name="image" accept="image/*";
                        }
                        button type="submit" style="padding: 8px 16px; background: #10b981; color: white; border: none; border-radius: 4px; cursor: pointer;" { "Simpan" }
                    }
                }

                div class="card" {
                    h3 { "Daftar Properti" }
                    div style="overflow-x: auto;" {
                        table style="width: 100%; border-collapse: collapse; margin-top: 1rem;" {
                            thead {
                                tr {
                                    th style="padding: 12px 8px; border-bottom: 2px solid #e5e7eb; text-align: left;" { "Properti" }
                                    th style="padding: 12px 8px; border-bottom: 2px solid #e5e7eb; text-align: left;" { "Kecamatan" }
                                    th style="padding: 12px 8px; border-bottom: 2px solid #e5e7eb; text-align: left;" { "Harga" }
                                    th style="padding: 12px 8px; border-bottom: 2px solid #e5e7eb; text-align: left;" { "KT/KM" }
                                    th style="padding: 12px 8px; border-bottom: 2px solid #e5e7eb; text-align: left;" { "Ditambahkan" }
                                    th style="padding: 12px 8px; border-bottom: 2px solid #e5e7eb; text-align: left;" { "Aksi" }
                                }
                            }
                            tbody {
                                @for listing in vm.listings {
                                    tr {
                                        td style="padding: 8px; border-bottom: 1px solid #f3f4f6;" {
                                            a href=(format!("/property/{}", listing.id)) { (listing.title()) }
                                        }
                                        td style="padding: 8px; border-bottom: 1px solid #f3f4f6;" {
                                            (listing.neighborhood.as_deref().unwrap_or("-"))
                                        }
                                        td style="padding: 8px; border-bottom: 1px solid #f3f4f6;" { (price_label(listing)) }
                                        td style="padding: 8px; border-bottom: 1px solid #f3f4f6;" { (listing.bedrooms) "/" (listing.bathrooms) }
                                        td style="padding: 8px; border-bottom: 1px solid #f3f4f6; color: #6b7280; font-size: 0.9em;" {
                                            (listing.created_at.format("%Y-%m-%d %H:%M").to_string())
                                        }
                                        td style="padding: 8px; border-bottom: 1px solid #f3f4f6;" {
                                            form action=(format!("/admin/delete_property/{}", listing.id)) method="post" onsubmit="return confirm('Hapus properti ini?');" style="margin: 0;" {
                                                button type="submit" style="color: #dc2626; background: none; border: none; cursor: pointer; font-size: 0.9em; font-weight: 500; padding: 0;" {
                                                    "Hapus"
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}
