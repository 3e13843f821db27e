//! Outer surfaces: file formats the command-line driver reads and writes.

pub mod csv;
pub mod json;
