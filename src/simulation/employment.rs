//! Hiring, promotion and retirement

use crate::core::config::SimConfig;
use crate::core::random::{chance, pick};
use crate::core::types::{CompanyId, EmploymentId};
use crate::entity::{Employment, Person};
use crate::simulation::context::TickContext;
use crate::stats::StatKey;

/// Career ladder, entry rung first
pub const JOB_LADDER: [&str; 9] = [
    "Intern",
    "Junior Analyst",
    "Analyst",
    "Senior Analyst",
    "Associate",
    "Manager",
    "Senior Manager",
    "Director",
    "VP",
];

/// The rung above `title`; `None` at the top or for titles off the ladder
pub fn next_title(title: &str) -> Option<&'static str> {
    let rung = JOB_LADDER.iter().position(|t| *t == title)?;
    JOB_LADDER.get(rung + 1).copied()
}

/// Entry salary from intelligence, discipline and charisma
///
/// Their mean over [20, 80] maps linearly onto the configured salary range.
pub fn starting_salary(person: &Person, config: &SimConfig) -> u32 {
    let aptitude = person.stats.average_of(&[
        StatKey::Intelligence,
        StatKey::Discipline,
        StatKey::Charisma,
    ]) as f64;
    let t = ((aptitude - 20.0) / 60.0).clamp(0.0, 1.0);
    (config.salary_floor + t * (config.salary_ceiling - config.salary_floor)).round() as u32
}

pub fn resolve_employment(ctx: &mut TickContext) {
    let year = ctx.year;
    let config = ctx.config;
    let employed = ctx.employment_index();
    let students = ctx.enrollment_index();

    for person_id in ctx.living_ids() {
        let Some(person) = ctx.state.persons.get(&person_id) else {
            continue;
        };
        let age = person.age(year);

        if let Some(&employment_id) = employed.get(&person_id) {
            if age > config.working_ages.max {
                if let Some(employment) = ctx.state.employments.get_mut(&employment_id) {
                    employment.close(year);
                    ctx.result.retirements += 1;
                }
                continue;
            }
            if person.is_player || !chance(&mut ctx.rng, config.promotion_chance) {
                continue;
            }
            if let Some(employment) = ctx.state.employments.get_mut(&employment_id) {
                if let Some(title) = next_title(&employment.title) {
                    employment.title = title.to_string();
                    employment.salary =
                        (employment.salary as f64 * (1.0 + config.promotion_raise)).round() as u32;
                    ctx.result.promotions += 1;
                }
            }
            continue;
        }

        if person.is_player
            || !config.working_ages.contains(age)
            || students.contains_key(&person_id)
        {
            continue;
        }
        let Some(country_id) = person.country_id else {
            continue;
        };
        let salary = starting_salary(person, config);
        if !chance(&mut ctx.rng, config.hire_chance) {
            continue;
        }

        let companies: Vec<CompanyId> = ctx.state.companies_in(country_id).map(|c| c.id).collect();
        let Some(&company_id) = pick(&mut ctx.rng, &companies) else {
            continue;
        };
        let employment = Employment {
            id: EmploymentId::generate(&mut ctx.rng),
            person_id,
            company_id,
            title: JOB_LADDER[0].to_string(),
            salary,
            start_year: year,
            end_year: None,
        };
        ctx.state.employments.insert(employment.id, employment);
        ctx.result.new_employments += 1;
    }

    tracing::debug!(
        hired = ctx.result.new_employments,
        promoted = ctx.result.promotions,
        retired = ctx.result.retirements,
        "employment resolved"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Birth;
    use crate::core::types::WorldId;
    use crate::stats::Stats;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_ladder_order() {
        assert_eq!(next_title("Intern"), Some("Junior Analyst"));
        assert_eq!(next_title("Director"), Some("VP"));
        assert_eq!(next_title("VP"), None);
        assert_eq!(next_title("Chief Wizard"), None);
    }

    #[test]
    fn test_starting_salary_bounds() {
        let config = SimConfig::default();
        let mut person = Person::born(
            Birth {
                world_id: WorldId::new(),
                country_id: None,
                name: "Kit Vale".into(),
                birth_year: 1990,
            },
            &mut ChaCha8Rng::seed_from_u64(4),
        );

        person.stats = Stats::uniform(10.0);
        assert_eq!(starting_salary(&person, &config), 25_000);
        person.stats = Stats::uniform(90.0);
        assert_eq!(starting_salary(&person, &config), 150_000);
        person.stats = Stats::uniform(50.0);
        assert_eq!(starting_salary(&person, &config), 87_500);
    }
}
