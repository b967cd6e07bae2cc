use crate::shortcode::ShortCode;
use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Identifier of a tracked record.
///
/// Ids are minted from a registry-owned monotonic counter, so they stay
/// unique even for records created in the same instant. They are not
/// stable across process restarts; nothing here is persisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordId(u64);

impl RecordId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One tracked URL entry.
///
/// The short code and id are assigned at creation and never change;
/// only `clicks` is mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UrlRecord {
    /// Identifier unique among currently-held records.
    pub id: RecordId,
    /// The original URL that was shortened.
    pub original_url: String,
    /// The short code standing in for the original URL.
    pub short_code: ShortCode,
    /// Calendar date the record was created.
    pub created_at: Date,
    /// Simulated usage counter.
    pub clicks: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_id_display() {
        assert_eq!(RecordId::new(42).to_string(), "42");
        assert_eq!(RecordId::new(42).value(), 42);
    }

    #[test]
    fn record_ids_compare_by_value() {
        assert_eq!(RecordId::new(1), RecordId::new(1));
        assert_ne!(RecordId::new(1), RecordId::new(2));
    }
}
