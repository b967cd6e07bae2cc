//! End-to-end lifecycle of the registry: submit, click, fill to
//! capacity, reject, free a slot, submit again.

use anyhow::Result;
use shortly_registry::{Registry, RegistryError, CAPACITY};

#[test]
fn full_lifecycle() -> Result<()> {
    let mut registry = Registry::new();

    // First submission.
    let record = registry.add("https://example.com")?;
    assert_eq!(record.clicks, 0);

    // Three simulated clicks land on exactly that record.
    for _ in 0..3 {
        registry.increment_clicks(record.id);
    }
    assert_eq!(registry.get(record.id).unwrap().clicks, 3);
    assert_eq!(registry.stats().total_clicks, 3);

    // Four more distinct URLs fill the registry.
    for i in 0..4 {
        registry.add(&format!("https://site{}.example.com", i))?;
    }
    assert_eq!(registry.len(), CAPACITY);
    assert!(registry.is_full());

    // A sixth submission is rejected and nothing changes.
    let err = registry.add("https://rejected.example.com").unwrap_err();
    assert_eq!(err, RegistryError::CapacityExceeded(CAPACITY));
    assert_eq!(registry.len(), CAPACITY);

    // Freeing one slot makes the next submission succeed.
    registry.remove(record.id);
    assert_eq!(registry.len(), CAPACITY - 1);
    registry.add("https://finally.example.com")?;
    assert_eq!(registry.len(), CAPACITY);

    // Totals always match the sum over the listing.
    let clicks: u64 = registry.list().iter().map(|r| r.clicks).sum();
    assert_eq!(registry.stats().total_clicks, clicks);
    assert_eq!(registry.stats().total_urls, registry.list().len());

    Ok(())
}

#[test]
fn every_short_code_is_well_formed() -> Result<()> {
    let mut registry = Registry::new();
    for i in 0..CAPACITY {
        registry.add(&format!("https://site{}.example.com", i))?;
    }

    for record in registry.list() {
        assert_eq!(record.short_code.as_str().len(), 6);
        assert!(record
            .short_code
            .as_str()
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    // Codes are unique among held records thanks to the occupancy check.
    let mut codes: Vec<&str> = registry
        .list()
        .iter()
        .map(|r| r.short_code.as_str())
        .collect();
    codes.sort_unstable();
    codes.dedup();
    assert_eq!(codes.len(), CAPACITY);

    Ok(())
}
