pub mod institution;
pub mod names;
pub mod performance;
pub mod person;
pub mod relations;

pub use institution::{
    Company, Country, Industry, IndustryRole, Office, OfficeLevel, School, SchoolLevel, World,
};
pub use performance::{CompanyYearPerformance, CountryYearPerformance};
pub use person::{Birth, Person};
pub use relations::{CompanyPosition, Employment, Enrollment, Friendship, Marriage, Term};
