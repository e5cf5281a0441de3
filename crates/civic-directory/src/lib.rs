//! Read-only directory of the 50 Chicago wards.
//!
//! Records are embedded at build time and validated once at construction; all
//! queries afterwards are infallible lookups over the immutable table.

mod directory;
mod display;
mod record;
pub mod sources;

pub use directory::{DirectoryError, WardDirectory, DEFAULT_WARD_POPULATION};
pub use display::{
    GeoPoint, HeadquartersDisplay, OfficeDisplay, RepresentativeDisplay, WardDisplayRecord,
    OFFICE_HOURS, REPRESENTATIVE_TITLE, TERM_END, TERM_START,
};
pub use record::{DistrictId, DistrictRecord};
