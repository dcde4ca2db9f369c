//! Relcheck: Release Archive Verification
//!
//! Downloads a release archive, extracts it into a scoped temporary work
//! area, and verifies that the extracted tree is byte-identical to a local
//! directory tree. Structure is compared first (directories, then file
//! names), content last (per-file SHA-512 digests).

pub mod cli;
pub mod compare;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod logging;
pub mod runner;
pub mod staging;
