//! File-backed todo list storage.
//!
//! # Overview
//! Owns the `Item` and `List` types, their JSON representation, and the
//! load/save/mutate primitives over a single JSON file. The file holds a bare
//! array of `{task, done}` objects and is the only durable state.
//!
//! # Design
//! - Items are addressed by 1-based position in the list; deleting an item
//!   shifts every later id down by one. Insertion order is id order.
//! - Persistence is whole-file: `load` reads and parses the entire file,
//!   `save` serializes and rewrites it. O(N) per mutation, intentional at
//!   this scale — there is no incremental log or index.
//! - Everything is synchronous and deterministic; the crate has no knowledge
//!   of HTTP or async, so it unit-tests without a server.

pub mod error;
pub mod types;

pub use error::StoreError;
pub use types::{Item, List};
