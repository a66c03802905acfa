//! Person - a simulated individual

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::types::{CountryId, PersonId, WorldId, Year};
use crate::development::DevelopmentProfile;
use crate::personality::{assign_personality, Archetype};
use crate::stats::{
    generate_development_style, generate_peak_age, generate_potential_overall, DevelopmentStyle,
    Stats,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub world_id: WorldId,
    /// `None` for stateless persons
    pub country_id: Option<CountryId>,
    pub name: String,
    pub birth_year: Year,
    pub alive: bool,
    pub death_year: Option<Year>,
    /// Player-controlled persons make their own career and family choices
    pub is_player: bool,

    pub stats: Stats,
    /// Fixed at birth, never below the birth overall
    pub potential_overall: u32,
    pub peak_age: u32,
    pub development_style: DevelopmentStyle,
    pub personality_archetype: Archetype,
    pub personality_subtype: String,
}

/// Identity of a person about to be born
#[derive(Debug, Clone)]
pub struct Birth {
    pub world_id: WorldId,
    pub country_id: Option<CountryId>,
    pub name: String,
    pub birth_year: Year,
}

impl Person {
    /// Create a newborn: baseline stats, potential, development profile and
    /// personality are all drawn here and never redrawn.
    pub fn born<R: Rng + ?Sized>(birth: Birth, rng: &mut R) -> Self {
        let stats = Stats::generate(rng);
        let potential_overall = generate_potential_overall(rng, stats.overall());
        let development_style = generate_development_style(rng);
        let peak_age = generate_peak_age(rng, development_style);
        let personality = assign_personality(&stats, rng);

        Self {
            id: PersonId::generate(rng),
            world_id: birth.world_id,
            country_id: birth.country_id,
            name: birth.name,
            birth_year: birth.birth_year,
            alive: true,
            death_year: None,
            is_player: false,
            stats,
            potential_overall,
            peak_age,
            development_style,
            personality_archetype: personality.archetype,
            personality_subtype: personality.subtype,
        }
    }

    /// Age in `year`; zero for years before birth
    pub fn age(&self, year: Year) -> u32 {
        (year - self.birth_year).max(0) as u32
    }

    /// Rounded mean of all stats, computed on demand
    pub fn overall(&self) -> u32 {
        self.stats.overall()
    }

    pub fn development_profile(&self) -> DevelopmentProfile {
        DevelopmentProfile {
            potential_overall: self.potential_overall,
            peak_age: self.peak_age,
            style: self.development_style,
        }
    }

    pub fn mark_dead(&mut self, year: Year) {
        self.alive = false;
        self.death_year = Some(year);
    }

    /// Family name, the last word of the full name
    pub fn surname(&self) -> &str {
        self.name.rsplit(' ').next().unwrap_or(&self.name)
    }
}
