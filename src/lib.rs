//! The library code for the `team-roster` generator. It turns an ordered list
//! of portrait filenames into HTML fragments for a team page. The work breaks
//! down into three steps:
//!
//! 1. Loading the configuration, which is the built-in roster unless a
//!    `team.yaml` file overrides it ([`crate::config`])
//! 2. Deriving an [`crate::entry::Entry`] for each filename, which carries the
//!    display name and the sequence number
//! 3. Rendering every entry through the fragment template and writing the
//!    concatenation to disk ([`crate::write`])
//!
//! [`crate::build::build_roster`] stitches the steps together.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]

pub mod build;
pub mod config;
pub mod entry;
pub mod roster;
pub mod write;
