//! # Roster Entries
//!
//! A compact text syntax for describing pets and who owns them, used by the
//! `roster` command.
//!
//! Supported forms:
//! * **Stray**: `NAME:TYPE` creates a pet with no owner (e.g., `Buddy:dog`).
//! * **Owned**: `NAME:TYPE@OWNER` creates a pet already owned (e.g., `Fluffy:cat@John`).
//! * **Assign**: `NAME@OWNER` hands the most recent pet called `NAME` to `OWNER`.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::error::ModelError;
use crate::model::PetType;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// Create a new pet, optionally handing it straight to an owner.
    Create {
        name: String,
        pet_type: PetType,
        owner: Option<String>,
    },
    /// Give an existing pet to an owner.
    Assign { name: String, owner: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("roster entry is empty")]
    Empty,

    #[error("missing owner after '@' in '{0}'")]
    MissingOwner(String),

    #[error("missing pet name in '{0}'")]
    MissingName(String),

    #[error("'{0}' needs a pet type ('NAME:TYPE') or an owner ('NAME@OWNER')")]
    MissingType(String),

    #[error(transparent)]
    Model(#[from] ModelError),
}

impl FromStr for Entry {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(RosterError::Empty);
        }

        let (pet_part, owner) = match s.split_once('@') {
            Some((pet_part, owner)) => (pet_part, Some(parse_owner(owner, s)?)),
            None => (s, None),
        };

        match pet_part.split_once(':') {
            Some((name, type_str)) => {
                let name = parse_pet_name(name, s)?;
                let pet_type = type_str.trim().parse::<PetType>()?;
                Ok(Entry::Create {
                    name,
                    pet_type,
                    owner,
                })
            }
            None => {
                let Some(owner) = owner else {
                    return Err(RosterError::MissingType(s.to_string()));
                };
                let name = parse_pet_name(pet_part, s)?;
                Ok(Entry::Assign { name, owner })
            }
        }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entry::Create {
                name,
                pet_type,
                owner: Some(owner),
            } => write!(f, "{name}:{pet_type}@{owner}"),
            Entry::Create {
                name,
                pet_type,
                owner: None,
            } => write!(f, "{name}:{pet_type}"),
            Entry::Assign { name, owner } => write!(f, "{name}@{owner}"),
        }
    }
}

fn parse_owner(owner: &str, original_s: &str) -> Result<String, RosterError> {
    let owner = owner.trim();
    if owner.is_empty() {
        return Err(RosterError::MissingOwner(original_s.to_string()));
    }
    Ok(owner.to_string())
}

fn parse_pet_name(name: &str, original_s: &str) -> Result<String, RosterError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(RosterError::MissingName(original_s.to_string()));
    }
    Ok(name.to_string())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
