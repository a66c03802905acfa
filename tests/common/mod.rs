//! World builder shared by the integration tests
#![allow(dead_code)]

use populace::core::config::SimConfig;
use populace::core::types::{
    CompanyId, CountryId, EmploymentId, EnrollmentId, OfficeId, PersonId, PositionId, RoleId,
    SchoolId, TermId, WorldId, Year,
};
use populace::entity::{
    Birth, Company, CompanyPosition, Country, Employment, Enrollment, Industry, IndustryRole,
    Office, OfficeLevel, Person, School, SchoolLevel, Term, World,
};
use populace::storage::{InMemoryStore, WorldSnapshot};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub struct Fixture {
    pub rng: ChaCha8Rng,
    pub snapshot: WorldSnapshot,
}

impl Fixture {
    /// Every id and person drawn from `seed`, so equal seeds give equal worlds
    pub fn new(seed: u64, year: Year) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let snapshot = WorldSnapshot::new(World {
            id: WorldId::generate(&mut rng),
            name: "Fixture".into(),
            current_year: year,
        });
        Self { rng, snapshot }
    }

    pub fn world_id(&self) -> WorldId {
        self.snapshot.world.id
    }

    pub fn year(&self) -> Year {
        self.snapshot.world.current_year
    }

    pub fn country(&mut self, name: &str) -> CountryId {
        let country = Country {
            id: CountryId::generate(&mut self.rng),
            world_id: self.world_id(),
            name: name.into(),
        };
        let id = country.id;
        self.snapshot.countries.insert(id, country);
        id
    }

    pub fn company(&mut self, country_id: CountryId, industry: Industry) -> CompanyId {
        let company = Company {
            id: CompanyId::generate(&mut self.rng),
            country_id,
            name: format!("Company {}", self.snapshot.companies.len() + 1),
            industry,
        };
        let id = company.id;
        self.snapshot.companies.insert(id, company);
        id
    }

    pub fn school(&mut self, country_id: CountryId, level: SchoolLevel) -> SchoolId {
        let school = School {
            id: SchoolId::generate(&mut self.rng),
            country_id,
            name: format!("{:?} School", level),
            level,
        };
        let id = school.id;
        self.snapshot.schools.insert(id, school);
        id
    }

    pub fn role(&mut self, industry: Industry, rank: u32) -> RoleId {
        let role = IndustryRole {
            id: RoleId::generate(&mut self.rng),
            industry,
            title: format!("Rank {}", rank),
            rank,
        };
        let id = role.id;
        self.snapshot.roles.insert(id, role);
        id
    }

    pub fn office(
        &mut self,
        country_id: CountryId,
        level: OfficeLevel,
        prestige: u32,
        term_length: Option<u32>,
        min_age: u32,
    ) -> OfficeId {
        let office = Office {
            id: OfficeId::generate(&mut self.rng),
            country_id,
            title: format!("Office {}", prestige),
            level,
            prestige,
            term_length,
            min_age,
        };
        let id = office.id;
        self.snapshot.offices.insert(id, office);
        id
    }

    /// A person who is `age` in the fixture's current year
    pub fn person(&mut self, country_id: Option<CountryId>, age: u32) -> PersonId {
        let person = Person::born(
            Birth {
                world_id: self.world_id(),
                country_id,
                name: format!("Person {}", self.snapshot.persons.len() + 1),
                birth_year: self.year() - age as Year,
            },
            &mut self.rng,
        );
        let id = person.id;
        self.snapshot.persons.insert(id, person);
        id
    }

    pub fn person_mut(&mut self, id: PersonId) -> &mut Person {
        self.snapshot
            .persons
            .get_mut(&id)
            .expect("fixture person exists")
    }

    pub fn employ(&mut self, person_id: PersonId, company_id: CompanyId) -> EmploymentId {
        let employment = Employment {
            id: EmploymentId::generate(&mut self.rng),
            person_id,
            company_id,
            title: "Analyst".into(),
            salary: 60_000,
            start_year: self.year() - 1,
            end_year: None,
        };
        let id = employment.id;
        self.snapshot.employments.insert(id, employment);
        id
    }

    pub fn enroll(
        &mut self,
        person_id: PersonId,
        school_id: SchoolId,
        level: SchoolLevel,
    ) -> EnrollmentId {
        let enrollment = Enrollment {
            id: EnrollmentId::generate(&mut self.rng),
            person_id,
            school_id,
            level,
            start_year: self.year() - 1,
            end_year: None,
        };
        let id = enrollment.id;
        self.snapshot.enrollments.insert(id, enrollment);
        id
    }

    pub fn position(
        &mut self,
        company_id: CompanyId,
        role_id: RoleId,
        person_id: PersonId,
        locked: bool,
    ) -> PositionId {
        let position = CompanyPosition {
            id: PositionId::generate(&mut self.rng),
            company_id,
            role_id,
            person_id,
            locked,
            start_year: self.year() - 1,
            end_year: None,
        };
        let id = position.id;
        self.snapshot.positions.insert(id, position);
        id
    }

    pub fn term(
        &mut self,
        office_id: OfficeId,
        person_id: PersonId,
        start_year: Year,
        player_locked: bool,
    ) -> TermId {
        let term = Term {
            id: TermId::generate(&mut self.rng),
            office_id,
            person_id,
            start_year,
            end_year: None,
            player_locked,
        };
        let id = term.id;
        self.snapshot.terms.insert(id, term);
        id
    }

    pub fn store(&self) -> InMemoryStore {
        let store = InMemoryStore::new();
        store
            .insert_snapshot(self.snapshot.clone())
            .expect("fresh store accepts snapshot");
        store
    }
}

/// No deaths, births, hiring, promotions, marriages or friendships
///
/// Leaves only development, schooling, hierarchy and elections active.
pub fn quiet_config() -> SimConfig {
    SimConfig {
        mortality: Vec::new(),
        mortality_ceiling: 0.0,
        birth_chance: 0.0,
        hire_chance: 0.0,
        promotion_chance: 0.0,
        marriage_chance: 0.0,
        friendship_chance: 0.0,
        ..SimConfig::default()
    }
}

/// A populated single-country world for whole-tick tests
pub fn small_world(seed: u64, population: u32) -> Fixture {
    use rand::Rng;

    let mut fixture = Fixture::new(seed, 2000);
    let country = fixture.country("Aldoria");
    for industry in [Industry::Technology, Industry::Finance, Industry::Manufacturing] {
        fixture.company(country, industry);
        fixture.company(country, industry);
        for rank in 1..=3 {
            fixture.role(industry, rank);
        }
    }
    for level in [SchoolLevel::Primary, SchoolLevel::Secondary, SchoolLevel::University] {
        fixture.school(country, level);
    }
    fixture.office(country, OfficeLevel::National, 100, Some(4), 35);
    fixture.office(country, OfficeLevel::National, 60, Some(2), 25);
    fixture.office(country, OfficeLevel::Regional, 20, None, 25);

    for _ in 0..population {
        let age = fixture.rng.gen_range(0..85);
        fixture.person(Some(country), age);
    }
    fixture
}
