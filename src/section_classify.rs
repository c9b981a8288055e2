use serde::Serialize;

/// Closed taxonomy for document sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionType {
    Rates,
    Terms,
    Policies,
    Offers,
    Amenities,
    Transfers,
    Meals,
    Cancellation,
    General,
}

const SECTION_RULES: &[(&[&str], SectionType)] = &[
    (&["rate", "price", "tariff", "cost"], SectionType::Rates),
    (&["term", "condition"], SectionType::Terms),
    (&["policy", "policies"], SectionType::Policies),
    (
        &["offer", "special", "promotion", "package", "deal"],
        SectionType::Offers,
    ),
    (
        &["amenity", "facility", "service", "complimentary"],
        SectionType::Amenities,
    ),
    (&["transfer", "airport", "transport"], SectionType::Transfers),
    (
        &["meal", "dining", "restaurant", "food", "beverage"],
        SectionType::Meals,
    ),
    (
        &["cancel", "modification", "refund"],
        SectionType::Cancellation,
    ),
];

/// Classifies a section from its title, first matching rule wins.
#[must_use]
pub fn classify_section(title: &str) -> SectionType {
    let title_lower = title.to_lowercase();

    for (keywords, section_type) in SECTION_RULES {
        if keywords.iter().any(|keyword| title_lower.contains(keyword)) {
            return *section_type;
        }
    }

    SectionType::General
}
