use serde::Serialize;
use shortly_core::UrlRecord;

/// Returns the number of tracked records.
pub fn total_urls(records: &[UrlRecord]) -> usize {
    records.len()
}

/// Returns the sum of clicks over all tracked records.
pub fn total_clicks(records: &[UrlRecord]) -> u64 {
    records.iter().map(|r| r.clicks).sum()
}

/// Aggregate usage totals derived from the registry's current contents.
///
/// Holds no independent state: totals are recomputed from
/// [`Registry::list`](crate::Registry::list) on every call, so they can
/// never go stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UsageStats {
    pub total_urls: usize,
    pub total_clicks: u64,
}

impl UsageStats {
    /// Derives the totals from a snapshot of records.
    pub fn collect(records: &[UrlRecord]) -> Self {
        Self {
            total_urls: total_urls(records),
            total_clicks: total_clicks(records),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;
    use shortly_core::{RecordId, ShortCode};

    fn record(id: u64, clicks: u64) -> UrlRecord {
        UrlRecord {
            id: RecordId::new(id),
            original_url: format!("https://example{}.com", id),
            short_code: ShortCode::new_unchecked(format!("{:06}", id)),
            created_at: date(2026, 8, 23),
            clicks,
        }
    }

    #[test]
    fn empty_slice_yields_zero_totals() {
        let stats = UsageStats::collect(&[]);
        assert_eq!(stats.total_urls, 0);
        assert_eq!(stats.total_clicks, 0);
    }

    #[test]
    fn totals_sum_over_all_records() {
        let records = [record(0, 3), record(1, 0), record(2, 7)];

        assert_eq!(total_urls(&records), 3);
        assert_eq!(total_clicks(&records), 10);
        assert_eq!(
            UsageStats::collect(&records),
            UsageStats {
                total_urls: 3,
                total_clicks: 10
            }
        );
    }
}
