//! # Kennel Common
//!
//! Shared building blocks for the kennel workspace: the owner and pet models,
//! their validation errors, runtime configuration and the roster entry syntax
//! understood by the command line.

pub mod config;
pub mod error;
pub mod model;
pub mod roster;

pub use error::ModelError;
