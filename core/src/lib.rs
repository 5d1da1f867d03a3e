//! # Kennel Core
//!
//! Owns the relationship logic between owners and pets.
//!
//! * **[`kennel`]**: the [`Kennel`] registry. Every pet ever created lives here,
//!   and all linking between owners and pets goes through it so both sides
//!   stay consistent.
//! * **[`roster`]**: applies parsed roster entries to a kennel in order.
//! * **[`error`]**: failures raised by kennel operations.

pub mod error;
pub mod kennel;
pub mod roster;

pub use error::{KennelError, Result};
pub use kennel::{Kennel, Link};
