use std::fmt;

/// Handle to an owner inside a kennel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OwnerId {
    kennel: u32,
    index: usize,
}

/// Handle to a pet inside a kennel. The index doubles as the pet's position
/// in the kennel's registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PetId {
    kennel: u32,
    index: usize,
}

impl OwnerId {
    pub fn new(kennel: u32, index: usize) -> Self {
        Self { kennel, index }
    }

    /// Tag of the kennel that issued this handle.
    pub fn kennel(self) -> u32 {
        self.kennel
    }

    pub fn index(self) -> usize {
        self.index
    }
}

impl PetId {
    pub fn new(kennel: u32, index: usize) -> Self {
        Self { kennel, index }
    }

    /// Tag of the kennel that issued this handle.
    pub fn kennel(self) -> u32 {
        self.kennel
    }

    pub fn index(self) -> usize {
        self.index
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "owner#{}", self.index)
    }
}

impl fmt::Display for PetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pet#{}", self.index)
    }
}
