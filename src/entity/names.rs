//! Name generation for newborns

use rand::Rng;

use crate::core::random::pick;

const GIVEN_NAMES: &[&str] = &[
    "Ada", "Alan", "Amara", "Bea", "Bruno", "Cato", "Clara", "Dario", "Edith", "Elias", "Farah",
    "Felix", "Greta", "Hugo", "Ines", "Ivan", "Jonah", "Kira", "Leon", "Lina", "Mateo", "Mira",
    "Nadia", "Noel", "Olga", "Omar", "Petra", "Quinn", "Rosa", "Sami", "Tess", "Tobias", "Uma",
    "Viktor", "Wren", "Yara", "Zane",
];

const SURNAMES: &[&str] = &[
    "Abbott", "Brandt", "Castillo", "Dalton", "Eriksen", "Fontaine", "Gallo", "Hart", "Ivers",
    "Jansen", "Keller", "Lindqvist", "Marsh", "Novak", "Okafor", "Price", "Quint", "Rowe",
    "Sato", "Thorne", "Ueda", "Varga", "Weller", "Young", "Zeller",
];

pub fn random_given_name<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    pick(rng, GIVEN_NAMES).copied().unwrap_or("Alex")
}

pub fn random_full_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    let surname = pick(rng, SURNAMES).copied().unwrap_or("Doe");
    format!("{} {}", random_given_name(rng), surname)
}

/// A fresh given name under an existing family name
pub fn child_name<R: Rng + ?Sized>(rng: &mut R, surname: &str) -> String {
    format!("{} {}", random_given_name(rng), surname)
}
