// src/search/extract.rs

use crate::search::criteria::{Budget, Criteria};
use crate::search::rules::{
    KeywordSet, Magnitude, NumberCategory, NumberField, AMENITIES, CERTIFICATES, CONDITIONS, FILLERS,
    NEIGHBORHOODS, NUMBER_CATEGORIES, PRICE_PREFERENCES, PROPERTY_KEYWORDS, SIZE_PREFERENCES,
};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

struct CompiledRule {
    regex: Regex,
    not_followed_by: Option<Regex>,
    not_preceded_by: Option<Regex>,
    magnitude: Magnitude,
}

struct CompiledCategory {
    field: NumberField,
    rules: Vec<CompiledRule>,
}

static NUMBER_RULES: LazyLock<Vec<CompiledCategory>> =
    LazyLock::new(|| NUMBER_CATEGORIES.iter().map(compile_category).collect());

fn compile_category(category: &NumberCategory) -> CompiledCategory {
    CompiledCategory {
        field: category.field,
        rules: category
            .rules
            .iter()
            .map(|r| CompiledRule {
                regex: Regex::new(r.pattern).expect("number rule pattern must compile"),
                not_followed_by: r
                    .not_followed_by
                    .map(|g| Regex::new(g).expect("number rule guard must compile")),
                not_preceded_by: r
                    .not_preceded_by
                    .map(|g| Regex::new(g).expect("number rule guard must compile")),
                magnitude: r.magnitude,
            })
            .collect(),
    }
}

/// Parses a free-text search query into a [`Criteria`].
///
/// Never fails: text that matches nothing gives an empty `Criteria`.
pub fn extract_criteria(query: &str) -> Criteria {
    let text = normalize(query);
    let mut criteria = Criteria::default();

    if text.is_empty() {
        return criteria;
    }

    for category in NUMBER_RULES.iter() {
        if let Some(value) = first_number(&text, category) {
            apply_number(&mut criteria, category.field, value);
        }
    }

    for rule in AMENITIES {
        if contains_any(&text, rule.keywords) {
            criteria.set_max_distance(rule.amenity, rule.max_distance);
        }
    }

    criteria.condition = first_keyword_match(&text, CONDITIONS);
    criteria.certificate = first_keyword_match(&text, CERTIFICATES);
    criteria.neighborhood = NEIGHBORHOODS
        .iter()
        .find(|name| contains_phrase(&text, &name.to_lowercase()))
        .map(|name| name.to_string());
    criteria.price_preference = first_keyword_match(&text, PRICE_PREFERENCES);
    criteria.size_preference = first_keyword_match(&text, SIZE_PREFERENCES);

    debug!(query, normalized = %text, ?criteria, "extracted search criteria");
    criteria
}

/// True when the message mentions anything real-estate related.
pub fn is_property_related(query: &str) -> bool {
    let lowered = query.to_lowercase();
    PROPERTY_KEYWORDS.iter().any(|k| contains_phrase(&lowered, k))
}

/// Case-folds, strips punctuation and conversational filler, and collapses
/// whitespace. `.` and `,` survive inside numbers ("1,5 miliar").
pub fn normalize(query: &str) -> String {
    let folded: String = query
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '.' || c == ',' {
                c
            } else {
                ' '
            }
        })
        .collect();

    let tokens: Vec<&str> = folded
        .split_whitespace()
        .map(|t| t.trim_matches(|c| c == '.' || c == ','))
        .filter(|t| !t.is_empty())
        .collect();

    let mut kept = Vec::with_capacity(tokens.len());
    for (i, token) in tokens.iter().enumerate() {
        let next = tokens.get(i + 1).copied();
        let is_filler = FILLERS
            .iter()
            .any(|f| f.word == *token && !(f.unless_next.is_some() && f.unless_next == next));
        if !is_filler {
            kept.push(*token);
        }
    }

    kept.join(" ")
}

/// First accepted match of a category, in rule order, already scaled.
fn first_number(text: &str, category: &CompiledCategory) -> Option<f64> {
    for rule in &category.rules {
        for caps in rule.regex.captures_iter(text) {
            let (Some(whole), Some(number)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            if let Some(guard) = &rule.not_followed_by {
                if guard.is_match(&text[whole.end()..]) {
                    continue;
                }
            }
            if let Some(guard) = &rule.not_preceded_by {
                if guard.is_match(&text[..whole.start()]) {
                    continue;
                }
            }
            if let Some(value) = parse_number(number.as_str()) {
                return Some(rule.magnitude.apply(value));
            }
        }
    }
    None
}

/// "1,5" and "1.5" are decimals; "1.200" and "1.200.000.000" use thousands
/// separators.
fn parse_number(raw: &str) -> Option<f64> {
    let separators = raw.chars().filter(|c| *c == '.' || *c == ',').count();
    let thousands_dot = raw
        .split_once('.')
        .is_some_and(|(_, tail)| tail.len() == 3 && tail.bytes().all(|b| b.is_ascii_digit()));
    let cleaned = if separators > 1 || thousands_dot {
        raw.replace(['.', ','], "")
    } else {
        raw.replace(',', ".")
    };
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn as_count(value: f64) -> Option<u32> {
    (value >= 0.0 && value <= f64::from(u32::MAX) && value.fract() == 0.0).then(|| value as u32)
}

fn apply_number(criteria: &mut Criteria, field: NumberField, value: f64) {
    match field {
        NumberField::Budget => criteria.budget = Some(Budget::around(value)),
        NumberField::Bedrooms => criteria.bedrooms = as_count(value),
        NumberField::Bathrooms => criteria.bathrooms = as_count(value),
        NumberField::MinLandArea => criteria.min_land_area = Some(value),
        NumberField::MinBuildingArea => criteria.min_building_area = Some(value),
        NumberField::MinCarport => criteria.min_carport = as_count(value),
    }
}

fn first_keyword_match<T: Copy>(text: &str, table: &[KeywordSet<T>]) -> Option<T> {
    table
        .iter()
        .find(|set| contains_any(text, set.keywords))
        .map(|set| set.value)
}

fn contains_any(text: &str, phrases: &[&str]) -> bool {
    phrases.iter().any(|p| contains_phrase(text, p))
}

/// Substring match that must start and end on word boundaries, so "baru"
/// does not fire inside "terbarukan".
fn contains_phrase(text: &str, phrase: &str) -> bool {
    if phrase.is_empty() {
        return false;
    }
    text.match_indices(phrase).any(|(start, _)| {
        let end = start + phrase.len();
        let before_ok = text[..start]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric());
        let after_ok = text[end..].chars().next().map_or(true, |c| !c.is_alphanumeric());
        before_ok && after_ok
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Certificate, Condition};
    use crate::search::criteria::{PricePreference, SizePreference};

    #[test]
    fn all_rule_patterns_compile() {
        let compiled = NUMBER_RULES.len();
        assert_eq!(compiled, NUMBER_CATEGORIES.len());
    }

    #[test]
    fn normalization_strips_filler_and_punctuation() {
        assert_eq!(
            normalize("  Apakah ada RUMAH yang dekat Sekolah?? "),
            "dekat sekolah"
        );
        assert_eq!(normalize("cari rumah dengan 3 kamar, ya!"), "3 kamar");
        assert_eq!(normalize("budget 1,5 miliar."), "budget 1,5 miliar");
    }

    #[test]
    fn rumah_sakit_survives_normalization() {
        assert_eq!(normalize("rumah dekat rumah sakit"), "dekat rumah sakit");
    }

    #[test]
    fn empty_and_small_talk_give_empty_criteria() {
        assert!(extract_criteria("").is_empty());
        assert!(extract_criteria("   ").is_empty());
        assert!(extract_criteria("halo apa kabar").is_empty());
    }

    #[test]
    fn budget_in_juta() {
        let budget = extract_criteria("500 juta").budget.unwrap();
        assert_eq!(budget.point, 500_000_000.0);
        assert_eq!(budget.min, 400_000_000.0);
        assert_eq!(budget.max, 600_000_000.0);
    }

    #[test]
    fn budget_units_and_keywords() {
        let point = |q: &str| extract_criteria(q).budget.map(|b| b.point);

        assert_eq!(point("1,5 miliar"), Some(1_500_000_000.0));
        assert_eq!(point("2 milyar"), Some(2_000_000_000.0));
        assert_eq!(point("750jt"), Some(750_000_000.0));
        assert_eq!(point("rumah 800m"), Some(800_000_000.0));
        assert_eq!(point("budget 300"), Some(300_000_000.0));
        assert_eq!(point("harga rp 1.200.000.000"), Some(1_200_000_000.0));
        assert_eq!(point("3 kamar tidur"), None);
    }

    #[test]
    fn billion_unit_takes_precedence_over_keyword() {
        let budget = extract_criteria("budget 2 miliar").budget.unwrap();
        assert_eq!(budget.point, 2_000_000_000.0);
    }

    #[test]
    fn bedroom_synonyms() {
        let beds = |q: &str| extract_criteria(q).bedrooms;

        assert_eq!(beds("3 kamar tidur"), Some(3));
        assert_eq!(beds("2 kamar"), Some(2));
        assert_eq!(beds("4kt"), Some(4));
        assert_eq!(beds("3 bedroom"), Some(3));
        assert_eq!(beds("kamar tidur 5"), Some(5));
        assert_eq!(beds("kamar 2"), Some(2));
    }

    #[test]
    fn bathroom_phrase_is_not_a_bedroom_count() {
        let criteria = extract_criteria("2 kamar mandi");
        assert_eq!(criteria.bedrooms, None);
        assert_eq!(criteria.bathrooms, Some(2));
    }

    #[test]
    fn bare_kamar_after_a_bathroom_phrase_still_counts() {
        let criteria = extract_criteria("2 kamar mandi 3 kamar");
        assert_eq!(criteria.bedrooms, Some(3));
        assert_eq!(criteria.bathrooms, Some(2));
    }

    #[test]
    fn bathroom_synonyms() {
        let baths = |q: &str| extract_criteria(q).bathrooms;

        assert_eq!(baths("3 kt 2 km"), Some(2));
        assert_eq!(baths("1 wc"), Some(1));
        assert_eq!(baths("2 bathrooms"), Some(2));
        assert_eq!(baths("kamar mandi 3"), Some(3));
    }

    #[test]
    fn bathroom_qualifier_keeps_its_own_number() {
        let c = extract_criteria("kamar mandi 2 kamar tidur 3");
        assert_eq!(c.bedrooms, Some(3));
        assert_eq!(c.bathrooms, Some(2));

        let c = extract_criteria("kamar tidur 3 kamar mandi 2");
        assert_eq!(c.bedrooms, Some(3));
        assert_eq!(c.bathrooms, Some(2));

        let c = extract_criteria("km 1 kt 4");
        assert_eq!(c.bedrooms, Some(4));
        assert_eq!(c.bathrooms, Some(1));
    }

    #[test]
    fn area_and_distance_meters_are_not_a_budget() {
        let c = extract_criteria("luas tanah 200m²");
        assert_eq!(c.budget, None);
        assert_eq!(c.min_land_area, Some(200.0));

        let c = extract_criteria("tanah 150m");
        assert_eq!(c.budget, None);
        assert_eq!(c.min_land_area, Some(150.0));

        let c = extract_criteria("lt 120m lb 90m");
        assert_eq!(c.budget, None);
        assert_eq!(c.min_land_area, Some(120.0));
        assert_eq!(c.min_building_area, Some(90.0));

        let c = extract_criteria("dekat pasar 500m");
        assert_eq!(c.budget, None);
        assert_eq!(c.max_distance_market, Some(800.0));

        assert_eq!(extract_criteria("300m dari sekolah").budget, None);
        assert_eq!(extract_criteria("2 kamar mandi").bedrooms, None);
    }

    #[test]
    fn compact_m_budget_next_to_area_words() {
        let c = extract_criteria("rumah 800m luas tanah 120");
        assert_eq!(c.budget.map(|b| b.point), Some(800_000_000.0));
        assert_eq!(c.min_land_area, Some(120.0));
    }

    #[test]
    fn dot_before_three_digits_groups_thousands() {
        let point = |q: &str| extract_criteria(q).budget.map(|b| b.point);

        assert_eq!(point("budget 1.200 juta"), Some(1_200_000_000.0));
        assert_eq!(point("1.5 miliar"), Some(1_500_000_000.0));
        assert_eq!(point("1,5 miliar"), Some(1_500_000_000.0));
        assert_eq!(extract_criteria("tanah 1.500").min_land_area, Some(1500.0));
    }

    #[test]
    fn land_and_building_area_in_both_orders() {
        let c = extract_criteria("luas tanah 120 m2 luas bangunan minimal 90");
        assert_eq!(c.min_land_area, Some(120.0));
        assert_eq!(c.min_building_area, Some(90.0));

        let c = extract_criteria("150 m2 tanah");
        assert_eq!(c.min_land_area, Some(150.0));
        assert_eq!(c.min_building_area, None);

        let c = extract_criteria("lt 200 lb 100");
        assert_eq!(c.min_land_area, Some(200.0));
        assert_eq!(c.min_building_area, Some(100.0));
    }

    #[test]
    fn carport_in_both_orders() {
        assert_eq!(extract_criteria("2 carport").min_carport, Some(2));
        assert_eq!(extract_criteria("garasi 1").min_carport, Some(1));
        assert_eq!(extract_criteria("muat 3 mobil").min_carport, Some(3));
    }

    #[test]
    fn amenity_flags_use_fixed_thresholds() {
        let c = extract_criteria("dekat sekolah, dekat rs dan pasar");
        assert_eq!(c.max_distance_school, Some(500.0));
        assert_eq!(c.max_distance_hospital, Some(1000.0));
        assert_eq!(c.max_distance_market, Some(800.0));

        let c = extract_criteria("rumah dekat rumah sakit");
        assert_eq!(c.max_distance_hospital, Some(1000.0));
        assert_eq!(c.max_distance_school, None);
    }

    #[test]
    fn condition_checks_new_before_good() {
        assert_eq!(extract_criteria("rumah baru").condition, Some(Condition::Baru));
        assert_eq!(extract_criteria("kondisi baik").condition, Some(Condition::Baik));
        assert_eq!(extract_criteria("baru dan baik").condition, Some(Condition::Baru));
        assert_eq!(
            extract_criteria("butuh renovasi").condition,
            Some(Condition::ButuhRenovasi)
        );
        assert_eq!(extract_criteria("3 kamar").condition, None);
    }

    #[test]
    fn certificate_and_neighborhood() {
        let c = extract_criteria("rumah SHM di Sleman daerah depok");
        assert_eq!(c.certificate, Some(Certificate::Shm));
        assert_eq!(c.neighborhood.as_deref(), Some("Depok"));

        assert_eq!(extract_criteria("sertifikat hgb").certificate, Some(Certificate::Hgb));
    }

    #[test]
    fn preferences() {
        let c = extract_criteria("rumah murah yang besar");
        assert_eq!(c.price_preference, Some(PricePreference::Low));
        assert_eq!(c.size_preference, Some(SizePreference::Large));

        let c = extract_criteria("rumah mewah kecil");
        assert_eq!(c.price_preference, Some(PricePreference::High));
        assert_eq!(c.size_preference, Some(SizePreference::Small));
    }

    #[test]
    fn keywords_need_word_boundaries() {
        assert_eq!(extract_criteria("energi terbarukan").condition, None);
    }

    #[test]
    fn full_sentence_populates_several_keys() {
        let c = extract_criteria("cari rumah 3 kamar tidur dekat sekolah budget 500 juta");
        assert_eq!(c.bedrooms, Some(3));
        assert_eq!(c.max_distance_school, Some(500.0));
        assert_eq!(c.budget.map(|b| b.point), Some(500_000_000.0));
        assert_eq!(c.bathrooms, None);
        assert_eq!(c.condition, None);
    }

    #[test]
    fn oversized_numbers_do_not_panic() {
        let c = extract_criteria("99999999999999999999 kamar");
        assert_eq!(c.bedrooms, None);
    }

    #[test]
    fn property_related_detection() {
        assert!(is_property_related("Berapa harga rumah di Depok?"));
        assert!(is_property_related("any 3 bedroom house"));
        assert!(!is_property_related("halo apa kabar"));
    }
}
