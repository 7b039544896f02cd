//! Analysis of generated levels

/// Color supply and demand statistics
pub mod balance;
