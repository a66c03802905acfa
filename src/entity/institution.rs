//! Worlds, countries and the institutions they own

use serde::{Deserialize, Serialize};

use crate::core::types::{CompanyId, CountryId, OfficeId, RoleId, SchoolId, WorldId, Year};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct World {
    pub id: WorldId,
    pub name: String,
    pub current_year: Year,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub id: CountryId,
    pub world_id: WorldId,
    pub name: String,
}

/// Industry a company operates in
///
/// Unknown industry codes deserialize to `Other`, so rows written by newer
/// producers still load and land in the catch-all bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Industry {
    Technology,
    Finance,
    Manufacturing,
    #[serde(other)]
    Other,
}

impl Industry {
    pub const ALL: [Industry; 4] = [
        Industry::Technology,
        Industry::Finance,
        Industry::Manufacturing,
        Industry::Other,
    ];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub id: CompanyId,
    pub country_id: CountryId,
    pub name: String,
    pub industry: Industry,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SchoolLevel {
    Primary,
    Secondary,
    University,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct School {
    pub id: SchoolId,
    pub country_id: CountryId,
    pub name: String,
    pub level: SchoolLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OfficeLevel {
    National,
    Regional,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Office {
    pub id: OfficeId,
    pub country_id: CountryId,
    pub title: String,
    pub level: OfficeLevel,
    /// Higher is more prestigious
    pub prestige: u32,
    /// Years per term; `None` means the office never expires on its own
    pub term_length: Option<u32>,
    pub min_age: u32,
}

/// A ranked slot that every company of an industry has
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndustryRole {
    pub id: RoleId,
    pub industry: Industry,
    pub title: String,
    /// 1 is the most senior
    pub rank: u32,
}
