//! # CLI Layer
//!
//! This module is **one possible UI client** for blogdex: it plays the part of
//! the blog page in a terminal. It is the only place that:
//! - Parses arguments (`setup.rs`)
//! - Reads stdin for interactive sessions and installs logging (`commands.rs`)
//! - Prints messages and the visible articles (`print.rs`)
//!
//! Every invocation loads the page manifest, shows the first page, applies
//! `--location` once, then runs the requested command. `session` keeps the
//! page alive across many commands read from stdin, the way a reader clicks
//! around one page load.

pub mod commands;
mod print;
mod setup;
