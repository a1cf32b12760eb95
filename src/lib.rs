//! Floodsim - Stochastic flood event simulation over bounded geographic regions

pub mod core;
pub mod hazard;
