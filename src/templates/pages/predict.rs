use crate::domain::{Certificate, Condition, RoadType};
use crate::templates::{card, desktop_layout};
use maud::{html, Markup};

/// What the prediction form shows after a submit.
#[derive(Debug, Clone, PartialEq)]
pub enum PredictOutcome {
    Estimate(String),
    NotReady,
    Invalid(String),
}

fn number_field(name: &str, label: &str, placeholder: &str) -> Markup {
    html! {
        label style="display: flex; flex-direction: column; gap: 4px;" {
            (label)
            input type="number" step="any" min="0" name=(name) placeholder=(placeholder);
        }
    }
}

pub fn category_selects() -> Markup {
    html! {
        label style="display: flex; flex-direction: column; gap: 4px;" {
            "Jenis jalan"
            select name="jenis_jalan" {
                option value="" { "-" }
                @for road in RoadType::ALL {
                    option value=(road.label()) { (road.display_name()) }
                }
            }
        }
        label style="display: flex; flex-direction: column; gap: 4px;" {
            "Kondisi"
            select name="kondisi" {
                option value="" { "-" }
                @for cond in Condition::ALL {
                    option value=(cond.label()) { (cond.display_name()) }
                }
            }
        }
        label style="display: flex; flex-direction: column; gap: 4px;" {
            "Sertifikat"
            select name="sertifikat" {
                option value="" { "-" }
                @for cert in Certificate::ALL {
                    option value=(cert.label()) { (cert.display_name()) }
                }
            }
        }
    }
}

pub fn predict_page(outcome: Option<&PredictOutcome>) -> Markup {
    desktop_layout(
        "Prediksi Harga",
        html! {
            main class="container" {
                h1 { "Prediksi Harga Properti" }

                @match outcome {
                    Some(PredictOutcome::Estimate(formatted)) => {
                        (card("Estimasi harga", html! {
                            p class="price" style="font-size: 1.75rem; font-weight: 700; color: #047857;" { (formatted) }
                        }))
                    }
                    Some(PredictOutcome::NotReady) => {
                        div class="notice" style="color: #b45309;" {
                            "Data properti belum cukup untuk memprediksi harga."
                        }
                    }
                    Some(PredictOutcome::Invalid(msg)) => {
                        div class="notice" style="color: #dc2626;" { (msg) }
                    }
                    None => {}
                }

                form method="post" action="/predict" style="display: grid; grid-template-columns: repeat(auto-fill, minmax(200px, 1fr)); gap: 12px;" {
                    (number_field("luas_tanah", "Luas tanah (m²)", "100"))
                    (number_field("luas_bangunan", "Luas bangunan (m²)", "80"))
                    (number_field("kamar_tidur", "Kamar tidur", "2"))
                    (number_field("kamar_mandi", "Kamar mandi", "1"))
                    (number_field("carport", "Carport", "0"))
                    (number_field("tahun_dibangun", "Tahun dibangun", "2020"))
                    (number_field("jarak_sekolah", "Jarak sekolah (m)", "1000"))
                    (number_field("jarak_rs", "Jarak rumah sakit (m)", "2000"))
                    (number_field("jarak_pasar", "Jarak pasar (m)", "1500"))
                    (category_selects())
                    button type="submit" class="primary" { "Prediksi" }
                }
            }
        },
    )
}
