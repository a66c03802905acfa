//! Company performance computation

use ahash::AHashMap;

use crate::core::types::{CompanyId, Year};
use crate::entity::{CompanyYearPerformance, Person};
use crate::stats::StatKey;
use crate::storage::WorldSnapshot;

const TALENT_WEIGHT: f64 = 0.4;
const LEADERSHIP_WEIGHT: f64 = 0.3;
const RELIABILITY_WEIGHT: f64 = 0.3;

/// Who works where, built once per computation
struct Staffing<'a> {
    employees: AHashMap<CompanyId, Vec<&'a Person>>,
    position_holders: AHashMap<CompanyId, Vec<&'a Person>>,
}

impl<'a> Staffing<'a> {
    fn build(snapshot: &'a WorldSnapshot) -> Self {
        let mut employees: AHashMap<CompanyId, Vec<&Person>> = AHashMap::new();
        for employment in snapshot.employments.values().filter(|e| e.is_active()) {
            if let Some(person) = snapshot.persons.get(&employment.person_id).filter(|p| p.alive) {
                employees.entry(employment.company_id).or_default().push(person);
            }
        }

        let mut position_holders: AHashMap<CompanyId, Vec<&Person>> = AHashMap::new();
        for position in snapshot.positions.values().filter(|p| p.is_active()) {
            if let Some(person) = snapshot.persons.get(&position.person_id).filter(|p| p.alive) {
                position_holders.entry(position.company_id).or_default().push(person);
            }
        }

        Self {
            employees,
            position_holders,
        }
    }

    fn compute(&self, company_id: CompanyId, year: Year) -> CompanyYearPerformance {
        let staff = self.employees.get(&company_id).map(Vec::as_slice).unwrap_or(&[]);
        if staff.is_empty() {
            return CompanyYearPerformance {
                company_id,
                year,
                headcount: 0,
                talent: 0.0,
                leadership: 0.0,
                reliability: 0.0,
                output: 0.0,
            };
        }

        let talent = mean(staff.iter().map(|p| p.stats.mean() as f64));
        let leaders = self
            .position_holders
            .get(&company_id)
            .filter(|holders| !holders.is_empty())
            .map(Vec::as_slice)
            .unwrap_or(staff);
        let leadership = mean(leaders.iter().map(|p| p.stats.get(StatKey::Leadership) as f64));
        let reliability = mean(staff.iter().map(|p| {
            p.stats
                .average_of(&[StatKey::Discipline, StatKey::Stability, StatKey::Integrity])
                as f64
        }));

        let quality = TALENT_WEIGHT * talent
            + LEADERSHIP_WEIGHT * leadership
            + RELIABILITY_WEIGHT * reliability;
        let output = quality * (staff.len() as f64).sqrt();

        CompanyYearPerformance {
            company_id,
            year,
            headcount: staff.len() as u32,
            talent,
            leadership,
            reliability,
            output,
        }
    }
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// Performance of one company from its current staff
pub fn company_performance(
    snapshot: &WorldSnapshot,
    company_id: CompanyId,
    year: Year,
) -> CompanyYearPerformance {
    Staffing::build(snapshot).compute(company_id, year)
}

/// Performance of every company in the world, ordered by company id
pub fn all_company_performance(
    snapshot: &WorldSnapshot,
    year: Year,
) -> Vec<CompanyYearPerformance> {
    let staffing = Staffing::build(snapshot);
    snapshot
        .companies
        .keys()
        .map(|&id| staffing.compute(id, year))
        .collect()
}
