//! Institutional aggregators
//!
//! Read-side summaries over a world snapshot. Nothing here mutates persons,
//! employments or terms; the tick persists what these functions return.

pub mod company;
pub mod country;
pub mod government;

pub use company::{all_company_performance, company_performance};
pub use country::{
    country_performance, country_year_row, CountryPerformance, IndustryBucket, RankedCompany,
    TOP_COMPANY_COUNT,
};
pub use government::{
    government_overview, office_fit, years_remaining, OfficeHolder, OfficeOverview,
};
