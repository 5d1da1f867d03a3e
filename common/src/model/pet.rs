use std::fmt;

use crate::model::{OwnerId, PetId, PetType};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pet {
    id: PetId,
    name: String,
    pet_type: PetType,
    owner: Option<OwnerId>,
}

impl Pet {
    /// Builds an unowned pet. Linking to an owner is the kennel's job.
    pub fn new(id: PetId, name: impl Into<String>, pet_type: PetType) -> Self {
        Self {
            id,
            name: name.into(),
            pet_type,
            owner: None,
        }
    }

    pub fn id(&self) -> PetId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pet_type(&self) -> PetType {
        self.pet_type
    }

    pub fn owner(&self) -> Option<OwnerId> {
        self.owner
    }

    pub fn set_owner(&mut self, owner: OwnerId) {
        self.owner = Some(owner);
    }
}

impl fmt::Display for Pet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pet(name={}, pet_type={})", self.name, self.pet_type)
    }
}
