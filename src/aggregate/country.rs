//! Country performance summaries
//!
//! Joins each company of a country to its performance row for a year,
//! buckets by industry and ranks the top performers.

use std::cmp::Reverse;

use ahash::AHashSet;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::error::{Result, SimError};
use crate::core::types::{CompanyId, CountryId, PersonId, Year};
use crate::entity::{CountryYearPerformance, Industry};
use crate::storage::WorldSnapshot;

pub const TOP_COMPANY_COUNT: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndustryBucket {
    pub industry: Industry,
    pub company_count: u32,
    pub total_output: f64,
    pub average_output: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedCompany {
    pub company_id: CompanyId,
    pub name: String,
    pub industry: Industry,
    pub output: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryPerformance {
    pub country_id: CountryId,
    pub year: Year,
    /// One bucket per industry in [`Industry::ALL`] order
    pub industries: Vec<IndustryBucket>,
    /// Companies that have a row for the year
    pub company_count: u32,
    pub total_output: f64,
    pub average_output: f64,
    pub top_companies: Vec<RankedCompany>,
}

/// Summarize a country's companies for one year
///
/// Companies without a performance row that year are left out.
pub fn country_performance(
    snapshot: &WorldSnapshot,
    country_id: CountryId,
    year: Year,
) -> Result<CountryPerformance> {
    if !snapshot.countries.contains_key(&country_id) {
        return Err(SimError::Validation(format!(
            "country {} is not part of world {}",
            country_id, snapshot.world.id
        )));
    }

    let rows: Vec<RankedCompany> = snapshot
        .companies_in(country_id)
        .filter_map(|company| {
            snapshot
                .company_performance
                .get(&(company.id, year))
                .map(|row| RankedCompany {
                    company_id: company.id,
                    name: company.name.clone(),
                    industry: company.industry,
                    output: row.output,
                })
        })
        .collect();

    let industries = Industry::ALL
        .iter()
        .map(|&industry| {
            let outputs: Vec<f64> = rows
                .iter()
                .filter(|r| r.industry == industry)
                .map(|r| r.output)
                .collect();
            let total: f64 = outputs.iter().sum();
            IndustryBucket {
                industry,
                company_count: outputs.len() as u32,
                total_output: total,
                average_output: average(total, outputs.len()),
            }
        })
        .collect();

    let total_output: f64 = rows.iter().map(|r| r.output).sum();
    let company_count = rows.len();

    let mut top_companies = rows;
    top_companies.sort_by_key(|r| (Reverse(OrderedFloat(r.output)), r.company_id));
    top_companies.truncate(TOP_COMPANY_COUNT);

    Ok(CountryPerformance {
        country_id,
        year,
        industries,
        company_count: company_count as u32,
        total_output,
        average_output: average(total_output, company_count),
        top_companies,
    })
}

/// The append-only row persisted for a country each tick
pub fn country_year_row(
    snapshot: &WorldSnapshot,
    country_id: CountryId,
    year: Year,
) -> Result<CountryYearPerformance> {
    let summary = country_performance(snapshot, country_id, year)?;

    let residents: Vec<_> = snapshot
        .living_persons()
        .filter(|p| p.country_id == Some(country_id))
        .collect();
    let employed_ids: AHashSet<PersonId> = snapshot
        .employments
        .values()
        .filter(|e| e.is_active())
        .map(|e| e.person_id)
        .collect();
    let employed = residents.iter().filter(|p| employed_ids.contains(&p.id)).count();
    let overall_sum: f64 = residents.iter().map(|p| p.stats.mean() as f64).sum();

    Ok(CountryYearPerformance {
        country_id,
        year,
        company_count: summary.company_count,
        total_output: summary.total_output,
        average_output: summary.average_output,
        population: residents.len() as u32,
        employed: employed as u32,
        average_overall: average(overall_sum, residents.len()),
    })
}

fn average(total: f64, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        total / count as f64
    }
}
