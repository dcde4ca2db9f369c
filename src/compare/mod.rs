//! Tree Comparison Core
//!
//! Builds normalized path inventories for two directory roots, diffs them
//! for structural equality, and verifies file content equality by digest.

pub mod differ;
pub mod digest;
pub mod inventory;

pub use differ::{diff, Comparison, Mismatch};
pub use inventory::{build_inventory, PathInventory};
