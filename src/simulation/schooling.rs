//! School enrollment pass

use crate::core::config::SimConfig;
use crate::core::random::{chance, pick};
use crate::core::types::{EnrollmentId, SchoolId};
use crate::entity::{Enrollment, Person, SchoolLevel};
use crate::simulation::context::TickContext;
use crate::stats::StatKey;

/// Chance an 18-year-old is admitted to university
///
/// Linear in the mean of intelligence and discipline over [20, 80].
pub fn admission_probability(person: &Person, config: &SimConfig) -> f64 {
    let aptitude = person
        .stats
        .average_of(&[StatKey::Intelligence, StatKey::Discipline]) as f64;
    let t = ((aptitude - 20.0) / 60.0).clamp(0.0, 1.0);
    config.university_admission_floor
        + t * (config.university_admission_ceiling - config.university_admission_floor)
}

pub fn resolve_schooling(ctx: &mut TickContext) {
    let year = ctx.year;
    let config = ctx.config;
    let enrolled = ctx.enrollment_index();

    for person_id in ctx.living_ids() {
        let Some(person) = ctx.state.persons.get(&person_id) else {
            continue;
        };
        let age = person.age(year);
        let country = person.country_id;
        let current = enrolled
            .get(&person_id)
            .and_then(|id| ctx.state.enrollments.get(id))
            .map(|e| (e.id, e.level));

        let desired = if config.primary_ages.contains(age) {
            Some(SchoolLevel::Primary)
        } else if config.secondary_ages.contains(age) {
            Some(SchoolLevel::Secondary)
        } else if config.university_ages.contains(age) {
            match current {
                Some((_, SchoolLevel::University)) => Some(SchoolLevel::University),
                _ if age == config.university_ages.min => {
                    let p = admission_probability(person, config);
                    chance(&mut ctx.rng, p).then_some(SchoolLevel::University)
                }
                _ => None,
            }
        } else {
            None
        };

        if current.map(|(_, level)| level) == desired {
            continue;
        }

        if let Some((enrollment_id, _)) = current {
            close_enrollment(ctx, enrollment_id);
        }

        let (Some(level), Some(country_id)) = (desired, country) else {
            continue;
        };
        let schools: Vec<SchoolId> =
            ctx.state.schools_in(country_id, level).map(|s| s.id).collect();
        let Some(&school_id) = pick(&mut ctx.rng, &schools) else {
            continue;
        };

        let enrollment = Enrollment {
            id: EnrollmentId::generate(&mut ctx.rng),
            person_id,
            school_id,
            level,
            start_year: year,
            end_year: None,
        };
        ctx.state.enrollments.insert(enrollment.id, enrollment);
        ctx.result.enrollments_opened += 1;
    }

    tracing::debug!(
        opened = ctx.result.enrollments_opened,
        closed = ctx.result.enrollments_closed,
        "schooling resolved"
    );
}

fn close_enrollment(ctx: &mut TickContext, id: EnrollmentId) {
    if let Some(enrollment) = ctx.state.enrollments.get_mut(&id) {
        enrollment.close(ctx.year);
        ctx.result.enrollments_closed += 1;
    }
}
