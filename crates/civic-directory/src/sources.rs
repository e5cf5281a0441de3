//! Canonical public sources for ward data and civic services.

pub const WARD_OFFICES_API: &str = "https://data.cityofchicago.org/resource/htai-wnw4.json";
pub const WARDS_PAGE: &str = "https://www.chicago.gov/city/en/about/wards.html";
pub const VOTER_INFORMATION: &str = "chicagoelections.gov/your-voter-information";
pub const BOARD_OF_ELECTIONS: &str = "chicagoelections.gov";
pub const CITY_SERVICES_311: &str = "311.chicago.gov";
pub const CITY_SERVICES_PHONE: &str = "(312) 744-5000";
pub const CITY_CLERK_LEGISLATION: &str = "chicityclerkelms.chicago.gov";

/// Chicago.gov page for one ward, id zero-padded to two digits.
///
/// Takes the untrusted request-side id so citations can be built before the
/// id is resolved against the table.
pub fn ward_detail_url(id: i64) -> String {
    format!("https://www.chicago.gov/city/en/about/wards/{id:02}.html")
}
