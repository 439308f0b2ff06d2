//! # graha-core
//!
//! Core types, static graha descriptors, and error types for Graha.
//!
//! This crate provides the inert data shared by the resolution engine:
//! - `ObjectKey` identifiers for the nine grahas
//! - Classification enums (character, bhuta, guna, varna, dignity, ...)
//! - `PositionSnapshot`, the validated house/degree input for one chart instant
//! - `ObjectDescriptor`, the immutable reference record for one graha
//! - The builtin descriptor table in [`grahas`]
//! - Cross-cutting error types

pub mod descriptor;
pub mod enums;
pub mod errors;
pub mod grahas;
pub mod keys;
pub mod position;

pub use descriptor::{AgePeriod, AspectWeights, ObjectDescriptor, SignRange, SpecialPoint};
pub use errors::CoreError;
pub use keys::ObjectKey;
pub use position::{Degree, House, Position, PositionSnapshot};
