//! Test support utilities for BarKit layout tests
//!
//! - Fixtures: bars built from fixed-size children
//! - Assertions: geometry assertions with float tolerance

mod assertions;

pub use assertions::*;
pub use fixtures::*;
