//! Flavor subtypes within each archetype
//!
//! Subtypes carry no mechanics; they are weighted labels for display.

use crate::personality::archetype::Archetype;

/// The seven `(label, weight)` subtypes of an archetype
pub fn subtypes(archetype: Archetype) -> &'static [(&'static str, u32); 7] {
    match archetype {
        Archetype::Visionary => &[
            ("Dreamer", 3),
            ("Inventor", 2),
            ("Futurist", 2),
            ("Idealist", 3),
            ("Pioneer", 2),
            ("Architect", 1),
            ("Prophet", 1),
        ],
        Archetype::Leader => &[
            ("Commander", 2),
            ("Diplomat", 3),
            ("Mentor", 3),
            ("Strategist", 2),
            ("Champion", 2),
            ("Figurehead", 1),
            ("Tyrant", 1),
        ],
        Archetype::Pragmatist => &[
            ("Fixer", 3),
            ("Operator", 3),
            ("Realist", 2),
            ("Engineer", 2),
            ("Broker", 2),
            ("Survivor", 1),
            ("Technocrat", 1),
        ],
        Archetype::Caregiver => &[
            ("Nurturer", 3),
            ("Healer", 2),
            ("Guardian", 2),
            ("Peacemaker", 3),
            ("Volunteer", 2),
            ("Confidant", 2),
            ("Martyr", 1),
        ],
        Archetype::Rebel => &[
            ("Iconoclast", 2),
            ("Maverick", 3),
            ("Agitator", 2),
            ("Outsider", 3),
            ("Provocateur", 1),
            ("Free Spirit", 2),
            ("Revolutionary", 1),
        ],
        Archetype::Analyst => &[
            ("Scholar", 3),
            ("Skeptic", 2),
            ("Researcher", 3),
            ("Auditor", 2),
            ("Theorist", 2),
            ("Planner", 2),
            ("Savant", 1),
        ],
        Archetype::Opportunist => &[
            ("Hustler", 3),
            ("Climber", 3),
            ("Dealmaker", 2),
            ("Gambler", 2),
            ("Chameleon", 2),
            ("Schemer", 1),
            ("Speculator", 2),
        ],
        Archetype::Traditionalist => &[
            ("Steward", 3),
            ("Loyalist", 2),
            ("Custodian", 2),
            ("Patriarch", 1),
            ("Conformist", 3),
            ("Elder", 2),
            ("Purist", 1),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_subtype_weights_in_range() {
        for archetype in Archetype::ALL {
            for (label, weight) in subtypes(archetype) {
                assert!((1..=3).contains(weight), "{} weight {}", label, weight);
            }
        }
    }

    #[test]
    fn test_subtype_labels_unique() {
        let mut seen = HashSet::new();
        for archetype in Archetype::ALL {
            for (label, _) in subtypes(archetype) {
                assert!(seen.insert(*label), "duplicate subtype {}", label);
            }
        }
        assert_eq!(seen.len(), 56);
    }
}
