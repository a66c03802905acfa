//! Yearly simulation demo
//!
//! Seeds a small in-memory world, runs a number of yearly ticks and reports
//! what each year changed.

use std::path::PathBuf;

use clap::Parser;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use populace::aggregate::{country_performance, government_overview};
use populace::core::types::{CompanyId, CountryId, OfficeId, RoleId, SchoolId, WorldId, Year};
use populace::core::{Result, SimConfig};
use populace::entity::names::random_full_name;
use populace::entity::{
    Birth, Company, Country, Industry, IndustryRole, Office, OfficeLevel, Person, School,
    SchoolLevel, World,
};
use populace::prospect::scout_prospects;
use populace::simulation::YearlySimulator;
use populace::storage::{InMemoryStore, Write, WorldStore, WriteSet};

/// Run yearly ticks over a generated world
#[derive(Parser, Debug)]
#[command(name = "yearly_sim")]
#[command(about = "Simulate a small world year by year")]
struct Args {
    /// Random seed for reproducible runs
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Number of years to simulate
    #[arg(long, default_value_t = 10)]
    years: u32,

    /// Initial population per country
    #[arg(long, default_value_t = 400)]
    population: u32,

    /// Year the world starts in
    #[arg(long, default_value_t = 2000)]
    start_year: Year,

    /// TOML file overriding simulation constants
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print each tick result as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
}

const COUNTRY_NAMES: [&str; 2] = ["Aldoria", "Brevia"];

const ROLE_TITLES: [&str; 3] = ["Chief Executive", "Chief Financial Officer", "Head of Operations"];

/// (title, level, prestige, term length, minimum age)
const OFFICES: [(&str, OfficeLevel, u32, Option<u32>, u32); 4] = [
    ("President", OfficeLevel::National, 100, Some(4), 35),
    ("Chancellor", OfficeLevel::National, 80, Some(5), 30),
    ("Chief Justice", OfficeLevel::National, 70, None, 40),
    ("Governor", OfficeLevel::Regional, 40, Some(4), 25),
];

fn seed_world(
    store: &InMemoryStore,
    args: &Args,
    rng: &mut ChaCha8Rng,
) -> Result<(WorldId, Vec<CountryId>)> {
    let world = World {
        id: WorldId::generate(rng),
        name: "Demo".to_string(),
        current_year: args.start_year,
    };
    let world_id = world.id;
    store.create_world(world)?;

    let mut writes = WriteSet::new();
    for industry in [Industry::Technology, Industry::Finance, Industry::Manufacturing] {
        for (i, title) in ROLE_TITLES.iter().enumerate() {
            writes.push(Write::UpsertRole(IndustryRole {
                id: RoleId::generate(rng),
                industry,
                title: title.to_string(),
                rank: i as u32 + 1,
            }));
        }
    }

    let mut countries = Vec::new();
    for name in COUNTRY_NAMES {
        let country_id = CountryId::generate(rng);
        countries.push(country_id);
        writes.push(Write::UpsertCountry(Country {
            id: country_id,
            world_id,
            name: name.to_string(),
        }));

        for industry in [Industry::Technology, Industry::Finance, Industry::Manufacturing] {
            for n in 1..=2 {
                writes.push(Write::UpsertCompany(Company {
                    id: CompanyId::generate(rng),
                    country_id,
                    name: format!("{} {:?} {}", name, industry, n),
                    industry,
                }));
            }
        }
        for level in [SchoolLevel::Primary, SchoolLevel::Secondary, SchoolLevel::University] {
            writes.push(Write::UpsertSchool(School {
                id: SchoolId::generate(rng),
                country_id,
                name: format!("{} {:?} School", name, level),
                level,
            }));
        }
        for (title, level, prestige, term_length, min_age) in OFFICES {
            writes.push(Write::UpsertOffice(Office {
                id: OfficeId::generate(rng),
                country_id,
                title: title.to_string(),
                level,
                prestige,
                term_length,
                min_age,
            }));
        }
        for _ in 0..args.population {
            let age: i32 = rng.gen_range(0..80);
            let name = random_full_name(rng);
            let person = Person::born(
                Birth {
                    world_id,
                    country_id: Some(country_id),
                    name,
                    birth_year: args.start_year - age,
                },
                rng,
            );
            writes.push(Write::UpsertPerson(person));
        }
    }

    store.commit(world_id, args.start_year, writes)?;
    Ok((world_id, countries))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("populace=info")),
        )
        .init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => SimConfig::load(path)?,
        None => SimConfig::default(),
    };
    let limit = config.government_overview_limit;
    let youth_ages = config.youth_ages;

    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let store = InMemoryStore::new();
    let (world_id, countries) = seed_world(&store, &args, &mut rng)?;
    let simulator = YearlySimulator::new(store, config)?;

    for _ in 0..args.years {
        let result = simulator.run_yearly_tick_with_rng(world_id, &mut rng)?;
        if args.json {
            println!("{}", serde_json::to_string(&result)?);
        } else {
            println!(
                "{}: aged {}, died {}, born {}, hired {}, promoted {}, filled {}, \
                 elected {}, married {}",
                result.new_year,
                result.persons_aged,
                result.deaths,
                result.births,
                result.new_employments,
                result.promotions,
                result.positions_filled,
                result.elections_held,
                result.marriages,
            );
        }
    }

    let snapshot = simulator.store().load_world(world_id)?;
    let year = snapshot.world.current_year;
    for country_id in countries {
        let Some(country) = snapshot.countries.get(&country_id) else {
            continue;
        };
        println!("\n== {} ({}) ==", country.name, year);

        let performance = country_performance(&snapshot, country_id, year)?;
        println!(
            "companies {}, total output {:.1}, average {:.1}",
            performance.company_count, performance.total_output, performance.average_output
        );
        for ranked in &performance.top_companies {
            println!("  {:<28} {:>8.1}", ranked.name, ranked.output);
        }

        println!("government:");
        for office in government_overview(&snapshot, country_id, year, limit) {
            match office.holder {
                Some(holder) => println!(
                    "  {:<14} {} (fit {:.0}, served {})",
                    office.title, holder.name, holder.fit, holder.years_served
                ),
                None => println!("  {:<14} vacant", office.title),
            }
        }

        println!("top prospects:");
        for entry in scout_prospects(&snapshot, country_id, youth_ages).iter().take(5) {
            println!("  {:<20} {:>3} {}", entry.name, entry.score, entry.grade);
        }
    }

    Ok(())
}
