//! Type system of the Nimble language
//!
//! Nimble has three primitive value types plus an `Error` sentinel that
//! marks expressions which could not be given a sound type.

mod primitive;

pub use primitive::PrimitiveType;
