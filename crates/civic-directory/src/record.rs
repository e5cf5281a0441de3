use serde::{Deserialize, Serialize};

/// Ward number. Valid wards are contiguous from 1 through 50.
pub type DistrictId = u32;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
/// One ward office record as published by the city data portal.
pub struct DistrictRecord {
    pub id: DistrictId,
    pub representative_name: String,
    pub office_address: String,
    pub office_city: String,
    pub office_state: String,
    pub office_zip: String,
    pub office_phone: String,
    #[serde(default)]
    pub office_fax: Option<String>,
    pub email: String,
    #[serde(default)]
    pub website: Option<String>,
    pub headquarters_address: String,
    pub headquarters_phone: String,
    #[serde(default)]
    pub photo_url: Option<String>,
    pub neighborhoods: Vec<String>,
    pub latitude: f64,
    pub longitude: f64,
}

impl DistrictRecord {
    /// `"1958 North Milwaukee Avenue, Chicago, IL 60647"`
    pub fn office_full_address(&self) -> String {
        format!(
            "{}, {}, {} {}",
            self.office_address, self.office_city, self.office_state, self.office_zip
        )
    }

    /// First `count` neighborhoods joined for previews.
    pub fn neighborhood_preview(&self, count: usize) -> String {
        self.neighborhoods
            .iter()
            .take(count)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn neighborhood_list(&self) -> String {
        self.neighborhoods.join(", ")
    }

    pub(crate) fn matches_query(&self, lowered_query: &str, raw_query: &str) -> bool {
        self.representative_name
            .to_lowercase()
            .contains(lowered_query)
            || self
                .neighborhoods
                .iter()
                .any(|neighborhood| neighborhood.to_lowercase().contains(lowered_query))
            || self.id.to_string() == raw_query
    }
}
