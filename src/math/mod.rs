//! Miscellaneous math functions for general use

/// Free functions used in more than one module of the crate.
pub mod ancillary;
pub use ancillary::latitude_from_tsfn;
pub use ancillary::msfn;
pub use ancillary::tsfn;
