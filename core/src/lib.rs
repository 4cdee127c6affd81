//! Core generation and rendering for the DAC sine lookup table.
//!
//! The table is computed once from fixed constants, rendered as a C array
//! initializer, and optionally summarized for diagnostics.

pub mod analysis;
pub mod math;
pub mod prelude;
pub mod table;
pub mod telemetry;

pub use prelude::{TableError, TableResult};
pub use table::{render, write_initializer, SineTable};
