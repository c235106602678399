use crate::models::ResultRecord;
use std::cmp::Ordering;

/// Result records sorted by scarcity, fewest sellers first.
///
/// Records with an unknown seller count sort after every known count.
/// Ties keep their original order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RankedResults {
    records: Vec<ResultRecord>,
}

impl RankedResults {
    pub fn new(mut records: Vec<ResultRecord>) -> Self {
        // sort_by is stable, so equal counts stay in input order
        records.sort_by(|a, b| compare_sellers(a.seller_count, b.seller_count));
        Self { records }
    }

    /// The `limit` scarcest records
    pub fn top(&self, limit: usize) -> &[ResultRecord] {
        &self.records[..limit.min(self.records.len())]
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResultRecord> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[ResultRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn compare_sellers(a: Option<u32>, b: Option<u32>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
