pub mod assembler;
pub mod calculator;
pub mod filter;
pub mod grouper;
pub mod logic;
pub mod merger;
pub mod orderer;

pub use logic::{Consolidation, Consolidator, Settings, consolidate};
