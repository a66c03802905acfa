//! Batched writes applied at the storage boundary

use serde::{Deserialize, Serialize};

use crate::core::types::{
    CompanyId, CountryId, EmploymentId, EnrollmentId, OfficeId, PairKey, PositionId, RoleId,
    SchoolId, TermId, Year,
};
use crate::entity::{
    Company, CompanyPosition, CompanyYearPerformance, Country, CountryYearPerformance, Employment,
    Enrollment, Friendship, IndustryRole, Marriage, Office, Person, School, Term,
};

/// One create/update/delete against a world's tables
///
/// Persons have no delete: death is logical. Performance rows are insert-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Write {
    SetCurrentYear(Year),

    UpsertCountry(Country),
    UpsertCompany(Company),
    UpsertSchool(School),
    UpsertOffice(Office),
    UpsertRole(IndustryRole),
    UpsertPerson(Person),
    UpsertEmployment(Employment),
    UpsertEnrollment(Enrollment),
    UpsertPosition(CompanyPosition),
    UpsertTerm(Term),
    UpsertMarriage(Marriage),
    UpsertFriendship(Friendship),

    InsertCompanyPerformance(CompanyYearPerformance),
    InsertCountryPerformance(CountryYearPerformance),

    DeleteCountry(CountryId),
    DeleteCompany(CompanyId),
    DeleteSchool(SchoolId),
    DeleteOffice(OfficeId),
    DeleteRole(RoleId),
    DeleteEmployment(EmploymentId),
    DeleteEnrollment(EnrollmentId),
    DeletePosition(PositionId),
    DeleteTerm(TermId),
    DeleteMarriage(PairKey),
    DeleteFriendship(PairKey),
}

/// Ordered list of writes that commit together or not at all
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WriteSet {
    writes: Vec<Write>,
}

impl WriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, write: Write) {
        self.writes.push(write);
    }

    pub fn len(&self) -> usize {
        self.writes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.writes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Write> {
        self.writes.iter()
    }
}

impl FromIterator<Write> for WriteSet {
    fn from_iter<I: IntoIterator<Item = Write>>(iter: I) -> Self {
        Self {
            writes: iter.into_iter().collect(),
        }
    }
}

impl Extend<Write> for WriteSet {
    fn extend<I: IntoIterator<Item = Write>>(&mut self, iter: I) {
        self.writes.extend(iter);
    }
}

impl IntoIterator for WriteSet {
    type Item = Write;
    type IntoIter = std::vec::IntoIter<Write>;

    fn into_iter(self) -> Self::IntoIter {
        self.writes.into_iter()
    }
}
