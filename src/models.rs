use std::fmt;

/// Sentinel shown wherever a count could not be fetched
pub const NOT_AVAILABLE: &str = "N/A";

/// Item condition as listed in the inventory and on the marketplace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    New,
    Used,
}

impl Condition {
    /// Parse the inventory `Condition` column. Only "New" maps to New,
    /// everything else (including blank cells) is treated as used.
    pub fn parse(s: &str) -> Self {
        if s.trim().eq_ignore_ascii_case("new") {
            Condition::New
        } else {
            Condition::Used
        }
    }

    /// Parse the single-letter code used by the API (`N` / `U`)
    pub fn from_code(code: &str) -> Self {
        if code.trim().eq_ignore_ascii_case("n") {
            Condition::New
        } else {
            Condition::Used
        }
    }

    /// Returns the single-letter code sent as `new_or_used`
    pub fn code(&self) -> &'static str {
        match self {
            Condition::New => "N",
            Condition::Used => "U",
        }
    }

    /// Returns the display name (e.g., "New", "Used")
    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::New => "New",
            Condition::Used => "Used",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the uploaded inventory file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryRow {
    pub description: String,
    pub color: String,
    pub condition: Condition,
    /// 0-based index of the data row in the source file
    pub source_index: usize,
}

impl InventoryRow {
    pub fn dedup_key(&self) -> DedupKey {
        DedupKey {
            description: self.description.clone(),
            color: self.color.clone(),
            condition: self.condition,
        }
    }
}

/// Identity used to collapse duplicate inventory rows
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DedupKey {
    pub description: String,
    pub color: String,
    pub condition: Condition,
}

/// Canonical catalog identity of a part
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PartIdentity {
    /// Catalog item number (e.g., "3001")
    pub number: String,
    /// Catalog item type (e.g., "PART", "MINIFIG")
    pub item_type: String,
}

/// Aggregate stock figures for one item/condition across all listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Availability {
    pub total_quantity: Option<u32>,
    /// Number of lots, used as the seller count
    pub total_lots: Option<u32>,
}

impl Availability {
    /// Availability for a lookup that failed
    pub fn unavailable() -> Self {
        Self::default()
    }
}

/// One ranked output row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRecord {
    pub description: String,
    pub color: String,
    pub condition: Condition,
    pub part_number: String,
    pub part_type: String,
    pub seller_count: Option<u32>,
    pub quantity_available: Option<u32>,
}

impl ResultRecord {
    pub fn new(row: &InventoryRow, part: &PartIdentity, availability: Availability) -> Self {
        Self {
            description: row.description.clone(),
            color: row.color.clone(),
            condition: row.condition,
            part_number: part.number.clone(),
            part_type: part.item_type.clone(),
            seller_count: availability.total_lots,
            quantity_available: availability.total_quantity,
        }
    }

    /// Seller count as shown to the user, `N/A` when unknown
    pub fn sellers_display(&self) -> String {
        display_count(self.seller_count)
    }

    /// Available quantity as shown to the user, `N/A` when unknown
    pub fn quantity_display(&self) -> String {
        display_count(self.quantity_available)
    }
}

fn display_count(count: Option<u32>) -> String {
    count
        .map(|n| n.to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// A lot in the user's live store inventory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreLot {
    pub inventory_id: u64,
    pub item_number: String,
    pub condition: Condition,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn condition_parse_only_new_is_new() {
        assert_eq!(Condition::parse("New"), Condition::New);
        assert_eq!(Condition::parse(" new "), Condition::New);
        assert_eq!(Condition::parse("Used"), Condition::Used);
        assert_eq!(Condition::parse(""), Condition::Used);
        assert_eq!(Condition::parse("Mint"), Condition::Used);
    }

    #[test]
    fn condition_codes() {
        assert_eq!(Condition::New.code(), "N");
        assert_eq!(Condition::Used.code(), "U");
        assert_eq!(Condition::from_code("N"), Condition::New);
        assert_eq!(Condition::from_code("U"), Condition::Used);
    }

    #[test]
    fn dedup_key_distinguishes_color_and_condition() {
        let row = |color: &str, condition| InventoryRow {
            description: "Brick 2 x 4".to_string(),
            color: color.to_string(),
            condition,
            source_index: 0,
        };

        assert_eq!(
            row("Red", Condition::New).dedup_key(),
            row("Red", Condition::New).dedup_key()
        );
        assert_ne!(
            row("Red", Condition::New).dedup_key(),
            row("Blue", Condition::New).dedup_key()
        );
        assert_ne!(
            row("Red", Condition::New).dedup_key(),
            row("Red", Condition::Used).dedup_key()
        );
    }

    #[test]
    fn missing_counts_display_sentinel() {
        let record = ResultRecord {
            description: "Plate 1 x 2".to_string(),
            color: "Blue".to_string(),
            condition: Condition::Used,
            part_number: "3023".to_string(),
            part_type: "PART".to_string(),
            seller_count: None,
            quantity_available: Some(7),
        };

        assert_eq!(record.sellers_display(), "N/A");
        assert_eq!(record.quantity_display(), "7");
    }
}
