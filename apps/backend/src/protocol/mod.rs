//! Wire formats exchanged with the stats pipeline.

pub mod finalized_match;

pub use finalized_match::FinalizedMatch;
