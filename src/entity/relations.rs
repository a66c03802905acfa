//! Time-bounded relations between persons and institutions
//!
//! Every row with an `end_year` is active while `end_year` is `None`. Rows
//! are closed, never deleted, so history stays queryable.

use serde::{Deserialize, Serialize};

use crate::core::types::{
    CompanyId, EmploymentId, EnrollmentId, OfficeId, PairKey, PersonId, PositionId, RoleId,
    SchoolId, TermId, Year,
};
use crate::entity::institution::SchoolLevel;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employment {
    pub id: EmploymentId,
    pub person_id: PersonId,
    pub company_id: CompanyId,
    pub title: String,
    pub salary: u32,
    pub start_year: Year,
    pub end_year: Option<Year>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enrollment {
    pub id: EnrollmentId,
    pub person_id: PersonId,
    pub school_id: SchoolId,
    pub level: SchoolLevel,
    pub start_year: Year,
    pub end_year: Option<Year>,
}

/// Occupancy of an industry role inside one company
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyPosition {
    pub id: PositionId,
    pub company_id: CompanyId,
    pub role_id: RoleId,
    pub person_id: PersonId,
    /// Player override: the yearly pass never reassigns or closes it
    pub locked: bool,
    pub start_year: Year,
    pub end_year: Option<Year>,
}

/// Occupancy of a political office
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Term {
    pub id: TermId,
    pub office_id: OfficeId,
    pub person_id: PersonId,
    pub start_year: Year,
    pub end_year: Option<Year>,
    /// Player override: never replaced by automatic elections
    pub player_locked: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marriage {
    pub pair: PairKey,
    pub start_year: Year,
    pub end_year: Option<Year>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Friendship {
    pub pair: PairKey,
    /// 0-100
    pub strength: u8,
    pub since_year: Year,
}

macro_rules! impl_active {
    ($($row:ty),*) => {
        $(
            impl $row {
                pub fn is_active(&self) -> bool {
                    self.end_year.is_none()
                }

                pub fn close(&mut self, year: Year) {
                    if self.end_year.is_none() {
                        self.end_year = Some(year);
                    }
                }
            }
        )*
    };
}

impl_active!(Employment, Enrollment, CompanyPosition, Term, Marriage);

impl Term {
    /// Whole years the holder has served as of `year`
    pub fn years_served(&self, year: Year) -> u32 {
        (year - self.start_year).max(0) as u32
    }
}
