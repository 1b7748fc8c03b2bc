//! Core types and traits for voxlink.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the identifiers shared across the workspace (cell indices, cell
//! coordinates, component ids) and the [`CellSource`] trait through which
//! grids are populated.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod id;
pub mod traits;

pub use id::{CellCoord, CellIndex, ComponentId};
pub use traits::CellSource;
