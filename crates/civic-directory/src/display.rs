use serde::{Deserialize, Serialize};

use crate::record::{DistrictId, DistrictRecord};

pub const REPRESENTATIVE_TITLE: &str = "Alderperson";
pub const TERM_START: &str = "2023-05-15";
pub const TERM_END: &str = "2027-05-15";
pub const OFFICE_HOURS: &str = "Mon-Fri: 9:00 AM - 5:00 PM";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
/// UI-facing ward shape. Every optional source field is materialized, absent
/// values become empty strings.
pub struct WardDisplayRecord {
    pub id: DistrictId,
    pub name: String,
    pub representative: RepresentativeDisplay,
    pub neighborhoods: Vec<String>,
    pub population: u32,
    pub office: OfficeDisplay,
    pub headquarters: HeadquartersDisplay,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RepresentativeDisplay {
    pub id: String,
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub photo_url: String,
    pub website: String,
    pub term_start: String,
    pub term_end: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OfficeDisplay {
    pub address: String,
    pub phone: String,
    pub fax: String,
    pub email: String,
    pub hours: String,
    pub location: GeoPoint,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HeadquartersDisplay {
    pub address: String,
    pub phone: String,
}

impl WardDisplayRecord {
    pub(crate) fn from_record(record: &DistrictRecord, population: u32) -> Self {
        Self {
            id: record.id,
            name: format!("Ward {}", record.id),
            representative: RepresentativeDisplay {
                id: format!("alderman-{}", record.id),
                name: record.representative_name.clone(),
                title: REPRESENTATIVE_TITLE.to_string(),
                email: record.email.clone(),
                phone: record.office_phone.clone(),
                photo_url: record.photo_url.clone().unwrap_or_default(),
                website: record.website.clone().unwrap_or_default(),
                term_start: TERM_START.to_string(),
                term_end: TERM_END.to_string(),
            },
            neighborhoods: record.neighborhoods.clone(),
            population,
            office: OfficeDisplay {
                address: record.office_full_address(),
                phone: record.office_phone.clone(),
                fax: record.office_fax.clone().unwrap_or_default(),
                email: record.email.clone(),
                hours: OFFICE_HOURS.to_string(),
                location: GeoPoint {
                    lat: record.latitude,
                    lng: record.longitude,
                },
            },
            headquarters: HeadquartersDisplay {
                address: record.headquarters_address.clone(),
                phone: record.headquarters_phone.clone(),
            },
        }
    }
}
