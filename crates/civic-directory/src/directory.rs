use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use thiserror::Error;

use crate::display::WardDisplayRecord;
use crate::record::{DistrictId, DistrictRecord};

const EMBEDDED_WARDS_JSON: &str = include_str!("../data/chicago-wards.json");
const EMBEDDED_POPULATION_JSON: &str = include_str!("../data/ward-population.json");

/// Population shown when the side table has no entry for a ward.
pub const DEFAULT_WARD_POPULATION: u32 = 54_000;

#[derive(Debug, Error)]
/// Enumerates supported `DirectoryError` values.
pub enum DirectoryError {
    #[error("failed to parse ward data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("ward table is empty")]
    Empty,
    #[error("ward table is not contiguous: expected ward {expected}, found ward {found}")]
    NonContiguousId {
        expected: DistrictId,
        found: DistrictId,
    },
    #[error("ward {id} has no representative name")]
    MissingRepresentative { id: DistrictId },
    #[error("ward {id} has no neighborhoods")]
    MissingNeighborhoods { id: DistrictId },
}

#[derive(Debug, Clone)]
/// Immutable ward table plus the population side table.
///
/// Construct once at startup and share behind an `Arc`; every query borrows.
pub struct WardDirectory {
    records: Vec<DistrictRecord>,
    population: BTreeMap<DistrictId, u32>,
}

impl WardDirectory {
    /// Builds the directory from the JSON tables compiled into the crate.
    pub fn embedded() -> Result<Self, DirectoryError> {
        let records: Vec<DistrictRecord> = serde_json::from_str(EMBEDDED_WARDS_JSON)?;
        let population: BTreeMap<DistrictId, u32> =
            serde_json::from_str(EMBEDDED_POPULATION_JSON)?;
        Self::from_parts(records, population)
    }

    /// Validates that ids run 1..=N in table order with no gaps or repeats.
    pub fn from_parts(
        records: Vec<DistrictRecord>,
        population: BTreeMap<DistrictId, u32>,
    ) -> Result<Self, DirectoryError> {
        if records.is_empty() {
            return Err(DirectoryError::Empty);
        }
        for (index, record) in records.iter().enumerate() {
            let expected = DistrictId::try_from(index + 1).unwrap_or(DistrictId::MAX);
            if record.id != expected {
                return Err(DirectoryError::NonContiguousId {
                    expected,
                    found: record.id,
                });
            }
            if record.representative_name.trim().is_empty() {
                return Err(DirectoryError::MissingRepresentative { id: record.id });
            }
            if record.neighborhoods.is_empty() {
                return Err(DirectoryError::MissingNeighborhoods { id: record.id });
            }
        }
        Ok(Self {
            records,
            population,
        })
    }

    pub fn records(&self) -> &[DistrictRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Valid ward ids, `1..=len`.
    pub fn id_range(&self) -> RangeInclusive<DistrictId> {
        let last = DistrictId::try_from(self.records.len()).unwrap_or(DistrictId::MAX);
        1..=last
    }

    pub fn by_id(&self, id: DistrictId) -> Option<&DistrictRecord> {
        let index = usize::try_from(id).ok()?.checked_sub(1)?;
        self.records.get(index)
    }

    /// Resolves an untrusted signed id, e.g. from a request body.
    pub fn resolve(&self, id: i64) -> Option<&DistrictRecord> {
        DistrictId::try_from(id)
            .ok()
            .and_then(|id| self.by_id(id))
    }

    /// Case-insensitive match on representative name or any neighborhood, or an
    /// exact match of the query against the decimal ward id. An empty query
    /// matches every record.
    pub fn search(&self, query: &str) -> Vec<&DistrictRecord> {
        let lowered = query.to_lowercase();
        self.records
            .iter()
            .filter(|record| record.matches_query(&lowered, query))
            .collect()
    }

    pub fn population(&self, id: DistrictId) -> u32 {
        self.population
            .get(&id)
            .copied()
            .unwrap_or(DEFAULT_WARD_POPULATION)
    }

    pub fn to_display_record(&self, record: &DistrictRecord) -> WardDisplayRecord {
        WardDisplayRecord::from_record(record, self.population(record.id))
    }

    pub fn display_records(&self) -> Vec<WardDisplayRecord> {
        self.records
            .iter()
            .map(|record| self.to_display_record(record))
            .collect()
    }
}
