//! Core coordinate types for Gridfold.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! value types every grid is built on: [`Position`] arithmetic, the eight
//! compass [`Direction`]s and their [`DirectionSet`], the admissible
//! coordinate rectangle [`Bounds`], and the [`GridError`] taxonomy.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bounds;
pub mod direction;
pub mod error;
pub mod position;

pub use bounds::Bounds;
pub use direction::{Direction, DirectionIter, DirectionSet};
pub use error::GridError;
pub use position::Position;
