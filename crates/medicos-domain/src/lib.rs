//! Domain types shared across the Medicos workspace.
//!
//! This crate contains only pure types with no framework dependencies.
//! Import in `usecase/` and `domain/` layers; `handlers/` map them to wire shapes.

pub mod appointment;
pub mod id;
pub mod user;
