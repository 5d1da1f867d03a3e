use anyhow::Context;
use kennel_common::config::Config;
use kennel_core::Kennel;

use crate::commands::report;

/// Two owners, three pets: Buddy starts as a stray and is adopted by John
/// after Fluffy, so John's pets read `[Fluffy, Buddy]` and sort as
/// `[Buddy, Fluffy]`.
pub fn demo(cfg: &Config) -> anyhow::Result<()> {
    let kennel = build_demo(cfg).context("demo kennel could not be built")?;
    report::print_kennel(&kennel, cfg)
}

fn build_demo(cfg: &Config) -> kennel_core::Result<Kennel> {
    let mut kennel = Kennel::with_config(*cfg);

    let john = kennel.add_owner("John");
    let alice = kennel.add_owner("Alice");

    let buddy = kennel.create_pet("Buddy", "dog", None)?;
    kennel.create_pet("Fluffy", "cat", Some(john))?;
    kennel.create_pet("Charlie", "bird", Some(alice))?;

    kennel.add_pet(john, buddy)?;

    Ok(kennel)
}
