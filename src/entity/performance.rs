//! Append-only yearly performance rows

use serde::{Deserialize, Serialize};

use crate::core::types::{CompanyId, CountryId, Year};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyYearPerformance {
    pub company_id: CompanyId,
    pub year: Year,
    pub headcount: u32,
    /// Mean overall of active employees
    pub talent: f64,
    /// Mean leadership of position holders
    pub leadership: f64,
    /// Mean of discipline, stability and integrity
    pub reliability: f64,
    pub output: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryYearPerformance {
    pub country_id: CountryId,
    pub year: Year,
    pub company_count: u32,
    pub total_output: f64,
    pub average_output: f64,
    /// Living persons
    pub population: u32,
    pub employed: u32,
    pub average_overall: f64,
}
