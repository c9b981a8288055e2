use serde::Serialize;

use crate::model::RawTable;

/// Closed taxonomy for rate-sheet tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TableType {
    RoomCategories,
    RoomRates,
    MealSupplements,
    CompulsorySupplements,
    SpecialOffers,
    CancellationPolicy,
    Transfers,
    ChildPolicy,
    ResortInfo,
    General,
    Unknown,
}

/// Ordered rule list; the first rule with any keyword hit wins.
const TABLE_RULES: &[(&[&str], TableType)] = &[
    (
        &["room category", "max occupancy", "no. of rooms"],
        TableType::RoomCategories,
    ),
    (
        &["sgl", "dbl", "single", "double", "period", "accommodation"],
        TableType::RoomRates,
    ),
    (&["meal", "supplement", "board"], TableType::MealSupplements),
    (
        &["christmas", "new year", "compulsory", "gala"],
        TableType::CompulsorySupplements,
    ),
    (
        &["offer", "discount", "special", "promotion"],
        TableType::SpecialOffers,
    ),
    (
        &["cancel", "modification", "policy"],
        TableType::CancellationPolicy,
    ),
    (
        &["transfer", "airport", "speedboat", "seaplane"],
        TableType::Transfers,
    ),
    (&["child", "infant", "age"], TableType::ChildPolicy),
    (&["location", "distance", "atoll"], TableType::ResortInfo),
];

/// Classifies a table from its header row plus the first data row only.
/// Later rows never influence the result.
#[must_use]
pub fn classify_table(table: &RawTable) -> TableType {
    let Some(headers) = table.rows.first() else {
        return TableType::Unknown;
    };

    let mut combined = headers.join(" ").to_lowercase();
    combined.push(' ');
    if let Some(first_data_row) = table.rows.get(1) {
        combined.push_str(&first_data_row.join(" ").to_lowercase());
    }

    for (keywords, table_type) in TABLE_RULES {
        if keywords.iter().any(|keyword| combined.contains(keyword)) {
            return *table_type;
        }
    }

    TableType::General
}

#[cfg(test)]
mod tests {
    use super::{TableType, classify_table};
    use crate::model::RawTable;

    fn table(rows: &[&[&str]]) -> RawTable {
        RawTable {
            id: 1,
            rows: rows
                .iter()
                .map(|row| row.iter().map(ToString::to_string).collect())
                .collect(),
        }
    }

    #[test]
    fn empty_table_is_unknown() {
        assert_eq!(classify_table(&table(&[])), TableType::Unknown);
    }

    #[test]
    fn header_only_table_still_classifies() {
        let rates = table(&[&["SGL", "DBL"]]);
        assert_eq!(classify_table(&rates), TableType::RoomRates);
    }

    #[test]
    fn unmatched_table_falls_back_to_general() {
        let misc = table(&[&["Alpha", "Beta"], &["x", "y"]]);
        assert_eq!(classify_table(&misc), TableType::General);
    }

    #[test]
    fn room_categories_outranks_rates_keywords() {
        let categories = table(&[&["Room Category", "Max Occupancy"], &["Villa", "2"]]);
        assert_eq!(classify_table(&categories), TableType::RoomCategories);
    }

    #[test]
    fn first_data_row_participates_in_matching() {
        let transfers = table(&[&["Option", "Price"], &["Seaplane", "450"]]);
        assert_eq!(classify_table(&transfers), TableType::Transfers);
    }

    #[test]
    fn rows_beyond_the_first_are_ignored() {
        let base = table(&[&["Option", "Price"], &["Seaplane", "450"]]);
        let longer = table(&[
            &["Option", "Price"],
            &["Seaplane", "450"],
            &["Christmas gala", "120"],
        ]);
        assert_eq!(classify_table(&base), classify_table(&longer));
    }
}
