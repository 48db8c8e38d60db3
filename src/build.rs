//! Exports the [`build_roster`] function which stitches together the steps of
//! producing the roster page fragment: numbering the configured members
//! ([`crate::entry`]) and rendering them to the output file
//! ([`crate::write`]).

use crate::config::Config;
use crate::write::{Result, Writer};
use tracing::info;

/// Builds the roster fragment from a [`Config`] object. The output file is
/// overwritten on every run, so building twice from the same configuration
/// leaves byte-identical output. This calls into [`Writer::write_roster`]
/// which does the heavy-lifting.
pub fn build_roster(config: &Config) -> Result<()> {
    info!(
        members = config.members.len(),
        output = %config.output.display(),
        "building roster"
    );
    let writer = Writer::new(&config.assets_prefix, &config.role)?;
    writer.write_roster(&config.members, &config.output)
}
