//! Named in-memory symbol tables.
//!
//! A [`Registry`] holds up to 256 [`Table`]s, each stored at the slot its
//! name digests to. A table holds 256 buckets; each bucket is a binary tree
//! descended one digest bit per level, so placement is fixed by the key's
//! 32-bit digest alone.
//!
//! # Structure
//!
//! - **Digest**: [`Crc32`] by default, any [`Digest`] on request. The low
//!   byte selects the bucket; the remaining bits steer tree descent.
//! - **Bucket tree**: a node is passed over only when its digest differs
//!   from the target's. Bit 1 branches left, bit 0 right. At most 32 levels.
//! - **Collision chain**: keys whose full digest equals a node's but whose
//!   key differs are chained on that node. A lookup resolved there returns
//!   an [`Liveness::Ephemeral`] [`Hit`]; the chain is never consumed.
//!
//! # Example
//!
//! ```
//! use bittree_tables::{Error, Registry};
//!
//! let mut globals = Registry::new();
//! globals.register_table("globals").unwrap();
//! globals.put("globals", "x", 42).unwrap();
//! globals.put("globals", "y", 7).unwrap();
//!
//! assert_eq!(globals.get("globals", "x"), Ok(&42));
//! assert!(matches!(globals.get("globals", "z"), Err(Error::NotFound { .. })));
//! assert!(matches!(globals.get("missing", "x"), Err(Error::NoSuchTable { .. })));
//! ```
//!
//! Not thread-safe, never shrinks, never resizes.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod chain;
pub mod digest;
pub mod error;
pub mod iter;
pub mod node;

mod ops;
mod registry;
mod table;

#[cfg(test)]
mod tests;

pub use digest::{BUCKETS, Crc32, Digest};
pub use error::{Error, Result};
pub use node::{Hit, Liveness};
pub use ops::insert::Put;
pub use registry::{Registration, Registry};
pub use table::Table;
