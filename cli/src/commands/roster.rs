use anyhow::Context;
use kennel_common::config::Config;
use kennel_common::roster::Entry;
use kennel_core::Kennel;
use tracing::info;

use crate::commands::report;

pub fn roster(entries: &[Entry], cfg: &Config) -> anyhow::Result<()> {
    let mut kennel = Kennel::with_config(*cfg);

    let applied = kennel_core::roster::apply(&mut kennel, entries).context("roster could not be applied")?;

    report::print_kennel(&kennel, cfg)?;

    let moves: &str = if applied.reassignments == 1 { "reassignment" } else { "reassignments" };
    info!(
        "{} entries applied, {} {moves}",
        entries.len(),
        applied.reassignments
    );
    Ok(())
}
