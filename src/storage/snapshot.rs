//! WorldSnapshot - every row belonging to one world
//!
//! The tick reads one snapshot at the start, mutates a private copy, and
//! hands the difference back to the store as a single [`WriteSet`].

use std::collections::BTreeMap;

use crate::core::error::{Result, SimError};
use crate::core::types::{
    CompanyId, CountryId, EmploymentId, EnrollmentId, OfficeId, PairKey, PersonId, PositionId,
    RoleId, SchoolId, TermId, Year,
};
use crate::entity::{
    Company, CompanyPosition, CompanyYearPerformance, Country, CountryYearPerformance, Employment,
    Enrollment, Friendship, Industry, IndustryRole, Marriage, Office, Person, School, SchoolLevel,
    Term, World,
};
use crate::storage::write::{Write, WriteSet};

#[derive(Debug, Clone, PartialEq)]
pub struct WorldSnapshot {
    pub world: World,
    pub countries: BTreeMap<CountryId, Country>,
    pub companies: BTreeMap<CompanyId, Company>,
    pub schools: BTreeMap<SchoolId, School>,
    pub offices: BTreeMap<OfficeId, Office>,
    pub roles: BTreeMap<RoleId, IndustryRole>,
    pub persons: BTreeMap<PersonId, Person>,
    pub employments: BTreeMap<EmploymentId, Employment>,
    pub enrollments: BTreeMap<EnrollmentId, Enrollment>,
    pub positions: BTreeMap<PositionId, CompanyPosition>,
    pub terms: BTreeMap<TermId, Term>,
    pub marriages: BTreeMap<PairKey, Marriage>,
    pub friendships: BTreeMap<PairKey, Friendship>,
    pub company_performance: BTreeMap<(CompanyId, Year), CompanyYearPerformance>,
    pub country_performance: BTreeMap<(CountryId, Year), CountryYearPerformance>,
}

impl WorldSnapshot {
    /// An empty world
    pub fn new(world: World) -> Self {
        Self {
            world,
            countries: BTreeMap::new(),
            companies: BTreeMap::new(),
            schools: BTreeMap::new(),
            offices: BTreeMap::new(),
            roles: BTreeMap::new(),
            persons: BTreeMap::new(),
            employments: BTreeMap::new(),
            enrollments: BTreeMap::new(),
            positions: BTreeMap::new(),
            terms: BTreeMap::new(),
            marriages: BTreeMap::new(),
            friendships: BTreeMap::new(),
            company_performance: BTreeMap::new(),
            country_performance: BTreeMap::new(),
        }
    }

    // === QUERIES ===

    pub fn living_persons(&self) -> impl Iterator<Item = &Person> {
        self.persons.values().filter(|p| p.alive)
    }

    pub fn companies_in(&self, country: CountryId) -> impl Iterator<Item = &Company> {
        self.companies.values().filter(move |c| c.country_id == country)
    }

    pub fn schools_in(
        &self,
        country: CountryId,
        level: SchoolLevel,
    ) -> impl Iterator<Item = &School> {
        self.schools
            .values()
            .filter(move |s| s.country_id == country && s.level == level)
    }

    pub fn offices_in(&self, country: CountryId) -> impl Iterator<Item = &Office> {
        self.offices.values().filter(move |o| o.country_id == country)
    }

    /// Roles of an industry, most senior first
    pub fn roles_for(&self, industry: Industry) -> Vec<&IndustryRole> {
        let mut roles: Vec<&IndustryRole> =
            self.roles.values().filter(|r| r.industry == industry).collect();
        roles.sort_by_key(|r| (r.rank, r.id));
        roles
    }

    pub fn active_employment(&self, person: PersonId) -> Option<&Employment> {
        self.employments
            .values()
            .find(|e| e.person_id == person && e.is_active())
    }

    pub fn active_term_for_office(&self, office: OfficeId) -> Option<&Term> {
        self.terms.values().find(|t| t.office_id == office && t.is_active())
    }

    pub fn active_marriage(&self, person: PersonId) -> Option<&Marriage> {
        self.marriages
            .values()
            .find(|m| m.is_active() && m.pair.contains(person))
    }

    // === VALIDATION ===

    /// Check every foreign key in the snapshot
    ///
    /// Runs before a tick mutates anything; any dangling reference aborts
    /// the tick with a validation error.
    pub fn validate(&self) -> Result<()> {
        let world_id = self.world.id;
        let invalid = |msg: String| Err(SimError::Validation(msg));

        for country in self.countries.values() {
            if country.world_id != world_id {
                return invalid(format!("country {} belongs to another world", country.id));
            }
        }

        for company in self.companies.values() {
            if !self.countries.contains_key(&company.country_id) {
                return invalid(format!("company {} references missing country", company.id));
            }
        }
        for school in self.schools.values() {
            if !self.countries.contains_key(&school.country_id) {
                return invalid(format!("school {} references missing country", school.id));
            }
        }
        for office in self.offices.values() {
            if !self.countries.contains_key(&office.country_id) {
                return invalid(format!("office {} references missing country", office.id));
            }
        }

        for person in self.persons.values() {
            if person.world_id != world_id {
                return invalid(format!("person {} belongs to another world", person.id));
            }
            if let Some(country) = person.country_id {
                if !self.countries.contains_key(&country) {
                    return invalid(format!("person {} references missing country", person.id));
                }
            }
        }

        for e in self.employments.values() {
            if !self.persons.contains_key(&e.person_id)
                || !self.companies.contains_key(&e.company_id)
            {
                return invalid(format!("employment {} has a dangling reference", e.id));
            }
        }
        for e in self.enrollments.values() {
            if !self.persons.contains_key(&e.person_id)
                || !self.schools.contains_key(&e.school_id)
            {
                return invalid(format!("enrollment {} has a dangling reference", e.id));
            }
        }
        for p in self.positions.values() {
            if !self.persons.contains_key(&p.person_id)
                || !self.companies.contains_key(&p.company_id)
                || !self.roles.contains_key(&p.role_id)
            {
                return invalid(format!("position {} has a dangling reference", p.id));
            }
        }
        for t in self.terms.values() {
            if !self.persons.contains_key(&t.person_id)
                || !self.offices.contains_key(&t.office_id)
            {
                return invalid(format!("term {} has a dangling reference", t.id));
            }
        }
        let relations = self
            .marriages
            .iter()
            .map(|(key, m)| (key, &m.pair))
            .chain(self.friendships.iter().map(|(key, f)| (key, &f.pair)));
        for (key, pair) in relations {
            if key != pair {
                return invalid(format!(
                    "relation {}-{} is stored under another key",
                    pair.low(),
                    pair.high()
                ));
            }
            if pair.low() >= pair.high() {
                return invalid(format!("person {} is related to themself", pair.low()));
            }
            if !self.persons.contains_key(&pair.low()) || !self.persons.contains_key(&pair.high()) {
                return invalid(format!(
                    "relation {}-{} references a missing person",
                    pair.low(),
                    pair.high()
                ));
            }
        }

        Ok(())
    }

    // === WRITES ===

    /// Apply one write in place
    pub fn apply(&mut self, write: Write) -> Result<()> {
        match write {
            Write::SetCurrentYear(year) => self.world.current_year = year,

            Write::UpsertCountry(row) => {
                self.countries.insert(row.id, row);
            }
            Write::UpsertCompany(row) => {
                self.companies.insert(row.id, row);
            }
            Write::UpsertSchool(row) => {
                self.schools.insert(row.id, row);
            }
            Write::UpsertOffice(row) => {
                self.offices.insert(row.id, row);
            }
            Write::UpsertRole(row) => {
                self.roles.insert(row.id, row);
            }
            Write::UpsertPerson(row) => {
                if let Some(existing) = self.persons.get(&row.id) {
                    if row.potential_overall < existing.potential_overall {
                        return Err(SimError::Storage(format!(
                            "potential of person {} may not decrease",
                            row.id
                        )));
                    }
                }
                self.persons.insert(row.id, row);
            }
            Write::UpsertEmployment(row) => {
                self.employments.insert(row.id, row);
            }
            Write::UpsertEnrollment(row) => {
                self.enrollments.insert(row.id, row);
            }
            Write::UpsertPosition(row) => {
                self.positions.insert(row.id, row);
            }
            Write::UpsertTerm(row) => {
                self.terms.insert(row.id, row);
            }
            Write::UpsertMarriage(row) => {
                reject_self_pair(&row.pair)?;
                self.marriages.insert(row.pair, row);
            }
            Write::UpsertFriendship(row) => {
                reject_self_pair(&row.pair)?;
                self.friendships.insert(row.pair, row);
            }

            Write::InsertCompanyPerformance(row) => {
                let key = (row.company_id, row.year);
                if self.company_performance.contains_key(&key) {
                    return Err(SimError::Storage(format!(
                        "performance for company {} in {} already recorded",
                        row.company_id, row.year
                    )));
                }
                self.company_performance.insert(key, row);
            }
            Write::InsertCountryPerformance(row) => {
                let key = (row.country_id, row.year);
                if self.country_performance.contains_key(&key) {
                    return Err(SimError::Storage(format!(
                        "performance for country {} in {} already recorded",
                        row.country_id, row.year
                    )));
                }
                self.country_performance.insert(key, row);
            }

            Write::DeleteCountry(id) => {
                self.countries.remove(&id);
            }
            Write::DeleteCompany(id) => {
                self.companies.remove(&id);
            }
            Write::DeleteSchool(id) => {
                self.schools.remove(&id);
            }
            Write::DeleteOffice(id) => {
                self.offices.remove(&id);
            }
            Write::DeleteRole(id) => {
                self.roles.remove(&id);
            }
            Write::DeleteEmployment(id) => {
                self.employments.remove(&id);
            }
            Write::DeleteEnrollment(id) => {
                self.enrollments.remove(&id);
            }
            Write::DeletePosition(id) => {
                self.positions.remove(&id);
            }
            Write::DeleteTerm(id) => {
                self.terms.remove(&id);
            }
            Write::DeleteMarriage(pair) => {
                self.marriages.remove(&pair);
            }
            Write::DeleteFriendship(pair) => {
                self.friendships.remove(&pair);
            }
        }
        Ok(())
    }

    /// Writes that turn `base` into `self`
    ///
    /// Only rows that changed are emitted. Performance rows are emitted as
    /// inserts, so rewriting a closed year is rejected by the store.
    pub fn diff(&self, base: &WorldSnapshot) -> WriteSet {
        let mut out = WriteSet::new();

        if self.world.current_year != base.world.current_year {
            out.push(Write::SetCurrentYear(self.world.current_year));
        }

        diff_table(
            &base.countries,
            &self.countries,
            &mut out,
            Write::UpsertCountry,
            Some(Write::DeleteCountry),
        );
        diff_table(
            &base.companies,
            &self.companies,
            &mut out,
            Write::UpsertCompany,
            Some(Write::DeleteCompany),
        );
        diff_table(
            &base.schools,
            &self.schools,
            &mut out,
            Write::UpsertSchool,
            Some(Write::DeleteSchool),
        );
        diff_table(
            &base.offices,
            &self.offices,
            &mut out,
            Write::UpsertOffice,
            Some(Write::DeleteOffice),
        );
        diff_table(&base.roles, &self.roles, &mut out, Write::UpsertRole, Some(Write::DeleteRole));
        diff_table(&base.persons, &self.persons, &mut out, Write::UpsertPerson, None);
        diff_table(
            &base.employments,
            &self.employments,
            &mut out,
            Write::UpsertEmployment,
            Some(Write::DeleteEmployment),
        );
        diff_table(
            &base.enrollments,
            &self.enrollments,
            &mut out,
            Write::UpsertEnrollment,
            Some(Write::DeleteEnrollment),
        );
        diff_table(
            &base.positions,
            &self.positions,
            &mut out,
            Write::UpsertPosition,
            Some(Write::DeletePosition),
        );
        diff_table(&base.terms, &self.terms, &mut out, Write::UpsertTerm, Some(Write::DeleteTerm));
        diff_table(
            &base.marriages,
            &self.marriages,
            &mut out,
            Write::UpsertMarriage,
            Some(Write::DeleteMarriage),
        );
        diff_table(
            &base.friendships,
            &self.friendships,
            &mut out,
            Write::UpsertFriendship,
            Some(Write::DeleteFriendship),
        );
        diff_table(
            &base.company_performance,
            &self.company_performance,
            &mut out,
            Write::InsertCompanyPerformance,
            None,
        );
        diff_table(
            &base.country_performance,
            &self.country_performance,
            &mut out,
            Write::InsertCountryPerformance,
            None,
        );

        out
    }
}

fn reject_self_pair(pair: &PairKey) -> Result<()> {
    if pair.is_self_pair() {
        return Err(SimError::Storage(format!("person {} is related to themself", pair.low())));
    }
    Ok(())
}

fn diff_table<K, V>(
    base: &BTreeMap<K, V>,
    next: &BTreeMap<K, V>,
    out: &mut WriteSet,
    upsert: fn(V) -> Write,
    delete: Option<fn(K) -> Write>,
) where
    K: Ord + Copy,
    V: PartialEq + Clone,
{
    for (key, row) in next {
        if base.get(key) != Some(row) {
            out.push(upsert(row.clone()));
        }
    }
    if let Some(delete) = delete {
        for key in base.keys() {
            if !next.contains_key(key) {
                out.push(delete(*key));
            }
        }
    }
}
