//! Pre-commit invariant check

use ahash::AHashSet;

use crate::core::error::{Result, SimError};
use crate::storage::WorldSnapshot;

fn violation(msg: String) -> Result<()> {
    Err(SimError::ConsistencyViolation(msg))
}

/// Check the working copy before it is committed
///
/// `base` is the snapshot the tick started from; persons may not disappear
/// and their potential may not drop.
pub fn check_consistency(base: &WorldSnapshot, next: &WorldSnapshot) -> Result<()> {
    let mut seen = AHashSet::new();
    for e in next.employments.values().filter(|e| e.is_active()) {
        if !seen.insert(e.person_id) {
            return violation(format!("person {} has two active employments", e.person_id));
        }
    }

    let mut seen = AHashSet::new();
    for e in next.enrollments.values().filter(|e| e.is_active()) {
        if !seen.insert(e.person_id) {
            return violation(format!("person {} has two active enrollments", e.person_id));
        }
    }

    let mut roles = AHashSet::new();
    let mut holders = AHashSet::new();
    for p in next.positions.values().filter(|p| p.is_active()) {
        if !roles.insert((p.company_id, p.role_id)) {
            return violation(format!(
                "role {} of company {} is filled twice",
                p.role_id, p.company_id
            ));
        }
        if !holders.insert((p.company_id, p.person_id)) {
            return violation(format!(
                "person {} holds two positions in company {}",
                p.person_id, p.company_id
            ));
        }
    }

    let mut offices = AHashSet::new();
    let mut office_holders = AHashSet::new();
    for t in next.terms.values().filter(|t| t.is_active()) {
        if !offices.insert(t.office_id) {
            return violation(format!("office {} has two active terms", t.office_id));
        }
        if !office_holders.insert(t.person_id) {
            return violation(format!("person {} holds two offices", t.person_id));
        }
    }

    let keys = next
        .marriages
        .iter()
        .map(|(key, m)| (key, &m.pair))
        .chain(next.friendships.iter().map(|(key, f)| (key, &f.pair)));
    for (key, pair) in keys {
        if key != pair || pair.low() >= pair.high() {
            return violation(format!(
                "relation {}-{} is not keyed in order",
                pair.low(),
                pair.high()
            ));
        }
    }

    let mut married = AHashSet::new();
    for m in next.marriages.values().filter(|m| m.is_active()) {
        if !married.insert(m.pair.low()) || !married.insert(m.pair.high()) {
            return violation(format!(
                "marriage {}-{} overlaps another",
                m.pair.low(),
                m.pair.high()
            ));
        }
    }

    for person in next.persons.values() {
        if !person.stats.in_bounds() {
            return violation(format!("stats of person {} left [1, 99]", person.id));
        }
    }
    for (id, before) in &base.persons {
        match next.persons.get(id) {
            None => return violation(format!("person {} was removed", id)),
            Some(after) if after.potential_overall < before.potential_overall => {
                return violation(format!("potential of person {} decreased", id));
            }
            Some(_) => {}
        }
    }

    Ok(())
}
