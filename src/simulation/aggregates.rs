//! Yearly performance rows

use crate::aggregate::{all_company_performance, country_year_row};
use crate::core::error::{Result, SimError};
use crate::core::types::CountryId;
use crate::simulation::context::TickContext;

/// Record company rows, then country rows built from them
pub fn record_performance(ctx: &mut TickContext) -> Result<()> {
    let year = ctx.year;

    for row in all_company_performance(&ctx.state, year) {
        let key = (row.company_id, row.year);
        if ctx.state.company_performance.insert(key, row).is_some() {
            return Err(SimError::ConsistencyViolation(format!(
                "company {} already has performance for {}",
                key.0, year
            )));
        }
        ctx.result.performance_rows += 1;
    }

    let countries: Vec<CountryId> = ctx.state.countries.keys().copied().collect();
    for country_id in countries {
        let row = country_year_row(&ctx.state, country_id, year)?;
        if ctx.state.country_performance.insert((country_id, year), row).is_some() {
            return Err(SimError::ConsistencyViolation(format!(
                "country {} already has performance for {}",
                country_id, year
            )));
        }
        ctx.result.performance_rows += 1;
    }

    tracing::debug!(rows = ctx.result.performance_rows, "performance recorded");
    Ok(())
}
