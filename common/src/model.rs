//! # Kennel Models
//!
//! The entities kept by a kennel and the handles used to refer to them.
//!
//! ## Core Entities
//! * [`owner::Owner`]: a named person holding an ordered list of pets.
//! * [`pet::Pet`]: a named animal of a [`pet_type::PetType`] with an optional owner.
//!
//! ## Handles
//! * [`ids::OwnerId`] and [`ids::PetId`]: copyable handles carrying the tag of
//!   the kennel that issued them and an index into it. A pet records its owner
//!   as an `OwnerId` instead of a live reference, so neither side owns the other.

pub mod ids;
pub mod owner;
pub mod pet;
pub mod pet_type;

pub use ids::{OwnerId, PetId};
pub use owner::Owner;
pub use pet::Pet;
pub use pet_type::PetType;
