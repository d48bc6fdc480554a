//! zmap-cli: command line front end for the zmap library.
//!
//! `demos` holds the worksheet examples, `config` the JSON configuration for
//! one-off plots, and `util` small file helpers shared by the subcommands.
pub mod config;
pub mod demos;
pub mod util;
