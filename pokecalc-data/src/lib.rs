//! Static data tables for the damage calculator: species, moves, and the type chart, along with
//! name resolution and search over them.

extern crate alloc;

mod datastore;
mod mons;
mod moves;
mod search;

#[cfg(test)]
pub mod test_util;

pub use datastore::*;
pub use mons::*;
pub use moves::*;
pub use search::*;
