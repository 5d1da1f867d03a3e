//! # Pet Types
//!
//! The closed set of animal kinds a pet may be. Parsing is exact and
//! case-sensitive: only the lowercase spellings below are accepted.

use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PetType {
    Dog,
    Cat,
    Rodent,
    Bird,
    Reptile,
    Exotic,
}

impl PetType {
    /// Every supported type, in canonical order.
    pub const ALL: [PetType; 6] = [
        PetType::Dog,
        PetType::Cat,
        PetType::Rodent,
        PetType::Bird,
        PetType::Reptile,
        PetType::Exotic,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PetType::Dog => "dog",
            PetType::Cat => "cat",
            PetType::Rodent => "rodent",
            PetType::Bird => "bird",
            PetType::Reptile => "reptile",
            PetType::Exotic => "exotic",
        }
    }

    /// Comma separated list of the canonical spellings, used in error messages.
    pub fn joined() -> String {
        Self::ALL
            .iter()
            .map(|pet_type| pet_type.as_str())
            .collect::<Vec<&str>>()
            .join(", ")
    }
}

impl FromStr for PetType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|pet_type| pet_type.as_str() == s)
            .ok_or_else(|| ModelError::UnknownPetType(s.to_string()))
    }
}

impl fmt::Display for PetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
