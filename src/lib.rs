//! My Ride host: configuration, logging and wiring of the favorites use
//! cases behind a command-line interface.

pub mod bootstrap;
pub mod cli;
