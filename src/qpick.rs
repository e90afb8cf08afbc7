//! Parsing weighted names off the command line, and picking one of them.
pub mod args;
pub mod entry;
pub mod weighted_random;

pub use args::{parse_args, ParseError, ParsedArgs};
pub use entry::{Entry, DEFAULT_WEIGHT};
pub use weighted_random::{seeded_rng, weighted_random, Pick, SelectError};
