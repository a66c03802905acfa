//! Company hierarchy pass
//!
//! Vacates positions whose holder left or died and fills empty roles with
//! the best-suited employee. Locked positions and sitting incumbents are
//! never moved.

use std::cmp::Reverse;

use ahash::{AHashMap, AHashSet};
use ordered_float::OrderedFloat;

use crate::core::types::{CompanyId, PersonId, PositionId, RoleId};
use crate::entity::CompanyPosition;
use crate::simulation::context::TickContext;
use crate::stats::{StatKey, Stats};

/// Suitability of a person for a company role
pub fn role_fit(stats: &Stats) -> f64 {
    0.3 * stats.get(StatKey::Intelligence) as f64
        + 0.2 * stats.get(StatKey::Discipline) as f64
        + 0.2 * stats.get(StatKey::Charisma) as f64
        + 0.3 * stats.get(StatKey::Leadership) as f64
}

pub fn resolve_hierarchy(ctx: &mut TickContext) {
    let year = ctx.year;

    // Living employees per company
    let mut staff: AHashMap<CompanyId, Vec<PersonId>> = AHashMap::new();
    for employment in ctx.state.employments.values().filter(|e| e.is_active()) {
        if ctx.state.persons.get(&employment.person_id).is_some_and(|p| p.alive) {
            staff.entry(employment.company_id).or_default().push(employment.person_id);
        }
    }

    let vacated: Vec<PositionId> = ctx
        .state
        .positions
        .values()
        .filter(|p| p.is_active() && !p.locked)
        .filter(|p| {
            let alive = ctx.state.persons.get(&p.person_id).is_some_and(|h| h.alive);
            let still_employed = staff
                .get(&p.company_id)
                .is_some_and(|ids| ids.contains(&p.person_id));
            !alive || !still_employed
        })
        .map(|p| p.id)
        .collect();
    for id in &vacated {
        if let Some(position) = ctx.state.positions.get_mut(id) {
            position.close(year);
        }
    }
    ctx.result.positions_vacated = vacated.len() as u32;

    let mut filled_roles: AHashSet<(CompanyId, RoleId)> = AHashSet::new();
    let mut holders: AHashSet<(CompanyId, PersonId)> = AHashSet::new();
    for position in ctx.state.positions.values().filter(|p| p.is_active()) {
        filled_roles.insert((position.company_id, position.role_id));
        holders.insert((position.company_id, position.person_id));
    }

    let mut appointments = Vec::new();
    for company in ctx.state.companies.values() {
        let Some(employees) = staff.get(&company.id) else {
            continue;
        };
        for role in ctx.state.roles_for(company.industry) {
            if filled_roles.contains(&(company.id, role.id)) {
                continue;
            }
            let best = employees
                .iter()
                .filter(|id| !holders.contains(&(company.id, **id)))
                .filter_map(|id| ctx.state.persons.get(id))
                .filter(|p| !p.is_player)
                .min_by_key(|p| (Reverse(OrderedFloat(role_fit(&p.stats))), p.id));
            let Some(best) = best else {
                break;
            };
            holders.insert((company.id, best.id));
            filled_roles.insert((company.id, role.id));
            appointments.push((company.id, role.id, best.id));
        }
    }

    for (company_id, role_id, person_id) in appointments {
        let position = CompanyPosition {
            id: PositionId::generate(&mut ctx.rng),
            company_id,
            role_id,
            person_id,
            locked: false,
            start_year: year,
            end_year: None,
        };
        ctx.state.positions.insert(position.id, position);
        ctx.result.positions_filled += 1;
    }

    tracing::debug!(
        vacated = ctx.result.positions_vacated,
        filled = ctx.result.positions_filled,
        "hierarchy resolved"
    );
}
