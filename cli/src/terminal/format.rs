use crate::terminal::colors;
use colored::*;
use kennel_common::model::{Pet, PetType};

pub fn pet_type_color(pet_type: PetType) -> Color {
    match pet_type {
        PetType::Dog => colors::DOG,
        PetType::Cat => colors::CAT,
        PetType::Rodent => colors::RODENT,
        PetType::Bird => colors::BIRD,
        PetType::Reptile => colors::REPTILE,
        PetType::Exotic => colors::EXOTIC,
    }
}

pub fn pet_type_label(pet_type: PetType) -> ColoredString {
    pet_type.as_str().color(pet_type_color(pet_type))
}

/// Renders pets as `Name (type), Name (type)`, or a dimmed placeholder when empty.
pub fn pet_list(pets: &[&Pet]) -> ColoredString {
    if pets.is_empty() {
        return "no pets".dimmed();
    }

    pets.iter()
        .map(|pet| format!("{} ({})", pet.name(), pet_type_label(pet.pet_type())))
        .collect::<Vec<String>>()
        .join(", ")
        .normal()
}

pub fn owner_label(owner: Option<&str>) -> ColoredString {
    match owner {
        Some(name) => name.color(colors::PRIMARY),
        None => "stray".color(colors::STRAY),
    }
}
