use crate::error::{RegistryError, Result};
use crate::generator::random::RandomGenerator;
use crate::generator::Generator;
use crate::stats::UsageStats;
use jiff::Zoned;
use shortly_core::{is_valid_url, RecordId, ShortCode, UrlRecord};
use tracing::debug;

/// Maximum number of records the registry may hold.
pub const CAPACITY: usize = 5;

/// Bounded, insertion-ordered collection of shortened-URL records.
///
/// The registry exclusively owns its records. All mutations run to
/// completion synchronously, so no locking discipline is needed; the
/// one async boundary of the system (clipboard) lives elsewhere.
///
/// Record ids come from a registry-owned monotonic counter, never from
/// wall-clock time, so two `add` calls in the same instant still get
/// distinct ids. Short codes are generated-and-checked against current
/// contents until an unused one comes up.
#[derive(Debug)]
pub struct Registry<G = RandomGenerator> {
    records: Vec<UrlRecord>,
    generator: G,
    next_id: u64,
}

impl Registry<RandomGenerator> {
    /// Creates an empty registry backed by the random code generator.
    pub fn new() -> Self {
        Self::with_generator(RandomGenerator::new())
    }
}

impl Default for Registry<RandomGenerator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: Generator> Registry<G> {
    /// Creates an empty registry with a custom code generator.
    pub fn with_generator(generator: G) -> Self {
        Self {
            records: Vec::with_capacity(CAPACITY),
            generator,
            next_id: 0,
        }
    }

    /// Validates the candidate URL and appends a fresh record for it.
    ///
    /// Fails with [`RegistryError::EmptyInput`] for blank input,
    /// [`RegistryError::InvalidUrl`] when the candidate is not an
    /// absolute URL, and [`RegistryError::CapacityExceeded`] when the
    /// registry is full. The registry is left unchanged on any failure.
    ///
    /// Duplicate original URLs are ordinary distinct records; no
    /// deduplication is performed.
    pub fn add(&mut self, original_url: &str) -> Result<UrlRecord> {
        if original_url.trim().is_empty() {
            return Err(RegistryError::EmptyInput);
        }
        if !is_valid_url(original_url) {
            return Err(RegistryError::InvalidUrl(original_url.to_owned()));
        }
        if self.records.len() >= CAPACITY {
            return Err(RegistryError::CapacityExceeded(CAPACITY));
        }

        let id = RecordId::new(self.next_id);
        self.next_id += 1;

        let record = UrlRecord {
            id,
            original_url: original_url.to_owned(),
            short_code: self.unused_code(),
            created_at: Zoned::now().date(),
            clicks: 0,
        };
        debug!(%id, code = %record.short_code, "record added");

        self.records.push(record.clone());
        Ok(record)
    }

    /// Removes the record with the given id, if present.
    ///
    /// Returns `true` if a record existed and was removed. Absence is
    /// not an error; calling twice with the same id is a no-op the
    /// second time.
    pub fn remove(&mut self, id: RecordId) -> bool {
        let Some(index) = self.records.iter().position(|r| r.id == id) else {
            return false;
        };
        self.records.remove(index);
        debug!(%id, "record removed");
        true
    }

    /// Increments the click counter of the record with the given id.
    ///
    /// Returns `true` if a record was found. An unknown id changes
    /// nothing and reports no error.
    pub fn increment_clicks(&mut self, id: RecordId) -> bool {
        let Some(record) = self.records.iter_mut().find(|r| r.id == id) else {
            return false;
        };
        record.clicks += 1;
        debug!(%id, clicks = record.clicks, "click recorded");
        true
    }

    /// Read-only view of the records in insertion order.
    pub fn list(&self) -> &[UrlRecord] {
        &self.records
    }

    /// Looks up a record by id.
    pub fn get(&self, id: RecordId) -> Option<&UrlRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether the registry has reached [`CAPACITY`].
    pub fn is_full(&self) -> bool {
        self.records.len() >= CAPACITY
    }

    /// How many more records fit before the registry is full.
    pub fn remaining_capacity(&self) -> usize {
        CAPACITY - self.records.len()
    }

    /// Usage totals recomputed from the current contents.
    pub fn stats(&self) -> UsageStats {
        UsageStats::collect(self.list())
    }

    // Generate-and-check: at most CAPACITY of the 36^6 possible codes
    // are taken at any time, so the loop terminates.
    fn unused_code(&self) -> ShortCode {
        loop {
            let candidate: ShortCode = self.generator.generate().into();
            if !self.records.iter().any(|r| r.short_code == candidate) {
                return candidate;
            }
        }
    }
}
