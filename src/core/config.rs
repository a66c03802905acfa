//! Simulation configuration with documented constants
//!
//! All tunable numbers used by the yearly tick are collected here. The
//! defaults reproduce the reference behavior; a TOML file can override any
//! subset of them.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{Result, SimError};

/// Inclusive age range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeBand {
    pub min: u32,
    pub max: u32,
}

impl AgeBand {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, age: u32) -> bool {
        age >= self.min && age <= self.max
    }
}

/// Death probability for every age strictly below `below_age`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MortalityBracket {
    pub below_age: u32,
    pub probability: f64,
}

/// Configuration for the yearly tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    // === MORTALITY ===
    /// Age brackets checked in order; the first bracket whose `below_age`
    /// exceeds the person's age supplies the death probability.
    pub mortality: Vec<MortalityBracket>,

    /// Death probability for anyone older than every bracket
    pub mortality_ceiling: f64,

    // === SCHOOLING ===
    pub primary_ages: AgeBand,
    pub secondary_ages: AgeBand,
    pub university_ages: AgeBand,

    /// Admission probability for the weakest applicant
    /// ((intelligence + discipline) / 2 at or below 20)
    pub university_admission_floor: f64,

    /// Admission probability for the strongest applicant (at or above 80)
    pub university_admission_ceiling: f64,

    // === EMPLOYMENT ===
    /// Ages at which persons look for work; past `max` they retire
    pub working_ages: AgeBand,

    /// Yearly chance that an unemployed working-age person is hired
    pub hire_chance: f64,

    /// Yearly chance that an employee moves one rung up the title ladder
    pub promotion_chance: f64,

    /// Salary multiplier applied on promotion (0.10 = +10%)
    pub promotion_raise: f64,

    /// Salary for a (intelligence + discipline + charisma) / 3 of 20
    pub salary_floor: f64,

    /// Salary for an average of 80
    pub salary_ceiling: f64,

    // === BIRTHS ===
    pub fertile_ages: AgeBand,

    /// Yearly chance that an eligible married couple has a child
    pub birth_chance: f64,

    // === RELATIONSHIPS ===
    pub marriage_ages: AgeBand,

    /// Yearly chance that an unmarried eligible adult marries
    pub marriage_chance: f64,

    /// Yearly chance that an adult forms or deepens a friendship
    pub friendship_chance: f64,

    /// Strength added when an existing friendship deepens
    pub friendship_growth: u8,

    // === READ SIDE ===
    /// Ages considered when scouting prospects
    pub youth_ages: AgeBand,

    /// How many offices the government overview reports
    pub government_overview_limit: usize,

    // === PARALLELIZATION ===
    /// Minimum living population before development runs on rayon
    ///
    /// Below this threshold thread overhead exceeds the benefit.
    pub parallel_threshold: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            mortality: vec![
                MortalityBracket { below_age: 50, probability: 0.001 },
                MortalityBracket { below_age: 65, probability: 0.005 },
                MortalityBracket { below_age: 80, probability: 0.02 },
                MortalityBracket { below_age: 95, probability: 0.08 },
            ],
            mortality_ceiling: 0.25,

            primary_ages: AgeBand::new(6, 11),
            secondary_ages: AgeBand::new(12, 17),
            university_ages: AgeBand::new(18, 22),
            university_admission_floor: 0.1,
            university_admission_ceiling: 0.9,

            working_ages: AgeBand::new(18, 67),
            hire_chance: 0.35,
            promotion_chance: 0.15,
            promotion_raise: 0.10,
            salary_floor: 25_000.0,
            salary_ceiling: 150_000.0,

            fertile_ages: AgeBand::new(20, 45),
            birth_chance: 0.08,

            marriage_ages: AgeBand::new(22, 50),
            marriage_chance: 0.05,
            friendship_chance: 0.10,
            friendship_growth: 5,

            youth_ages: AgeBand::new(12, 21),
            government_overview_limit: 5,

            parallel_threshold: 1000,
        }
    }
}

impl SimConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a TOML document; missing keys keep their defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: SimConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Death probability for a person of the given age
    pub fn death_probability(&self, age: u32) -> f64 {
        self.mortality
            .iter()
            .find(|bracket| age < bracket.below_age)
            .map(|bracket| bracket.probability)
            .unwrap_or(self.mortality_ceiling)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        let probabilities = [
            ("mortality_ceiling", self.mortality_ceiling),
            ("university_admission_floor", self.university_admission_floor),
            ("university_admission_ceiling", self.university_admission_ceiling),
            ("hire_chance", self.hire_chance),
            ("promotion_chance", self.promotion_chance),
            ("birth_chance", self.birth_chance),
            ("marriage_chance", self.marriage_chance),
            ("friendship_chance", self.friendship_chance),
        ];
        for (name, value) in probabilities {
            if !(0.0..=1.0).contains(&value) {
                return Err(SimError::Config(format!("{} ({}) must be within [0, 1]", name, value)));
            }
        }

        for bracket in &self.mortality {
            if !(0.0..=1.0).contains(&bracket.probability) {
                return Err(SimError::Config(format!(
                    "mortality probability for ages below {} ({}) must be within [0, 1]",
                    bracket.below_age, bracket.probability
                )));
            }
        }
        if self.mortality.windows(2).any(|w| w[0].below_age >= w[1].below_age) {
            return Err(SimError::Config("mortality brackets must be sorted by age".into()));
        }

        let bands = [
            ("primary_ages", self.primary_ages),
            ("secondary_ages", self.secondary_ages),
            ("university_ages", self.university_ages),
            ("working_ages", self.working_ages),
            ("fertile_ages", self.fertile_ages),
            ("marriage_ages", self.marriage_ages),
            ("youth_ages", self.youth_ages),
        ];
        for (name, band) in bands {
            if band.min > band.max {
                return Err(SimError::Config(format!(
                    "{} min ({}) exceeds max ({})",
                    name, band.min, band.max
                )));
            }
        }

        // School bands must not overlap or a person would need two enrollments
        if self.primary_ages.max >= self.secondary_ages.min
            || self.secondary_ages.max >= self.university_ages.min
        {
            return Err(SimError::Config("school age bands must be ordered and disjoint".into()));
        }

        if self.salary_floor > self.salary_ceiling {
            return Err(SimError::Config(format!(
                "salary_floor ({}) exceeds salary_ceiling ({})",
                self.salary_floor, self.salary_ceiling
            )));
        }

        Ok(())
    }
}
