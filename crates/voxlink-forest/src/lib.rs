//! Disjoint-set (union-find) forests for voxlink.
//!
//! Two backends implement the shared [`UnionFind`] contract:
//!
//! - [`DisjointSet`]: generic over any totally ordered `Copy` element type,
//!   backed by an ordered map.
//! - [`DenseDisjointSet`]: an arena forest over dense `usize` keys (cell
//!   indices), backed by a parent array. This is what the union-find sweep
//!   uses by default.
//!
//! Both compress paths on every find and delegate the choice of surviving
//! root to a [`LinkPolicy`]. The default [`CoinFlip`] policy links at random;
//! [`AlwaysFirst`] and [`AlwaysSecond`] give deterministic forests for tests.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod dense;
pub mod ordered;
pub mod policy;
pub mod union_find;

#[cfg(test)]
pub(crate) mod compliance;

pub use dense::DenseDisjointSet;
pub use ordered::DisjointSet;
pub use policy::{AlwaysFirst, AlwaysSecond, CoinFlip, LinkPolicy, Survivor};
pub use union_find::UnionFind;
