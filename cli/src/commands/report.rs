use colored::*;
use kennel_common::config::Config;
use kennel_common::model::Pet;
use kennel_core::Kennel;
use tracing::info;

use crate::kprint;
use crate::terminal::{colors, format, print};

type Detail = (String, ColoredString);

/// Prints every owner with their pets, then the registry of all pets.
pub fn print_kennel(kennel: &Kennel, cfg: &Config) -> anyhow::Result<()> {
    if cfg.quiet < 2 {
        print::header("owners", cfg.quiet);
        print_owners(kennel)?;

        print::header("registry", cfg.quiet);
        print_registry(kennel)?;
    }

    print_summary(kennel, cfg);
    Ok(())
}

fn print_owners(kennel: &Kennel) -> anyhow::Result<()> {
    for (idx, owner) in kennel.owners().iter().enumerate() {
        print::tree_head(idx, owner.name());

        let details: Vec<Detail> = vec![
            ("Pets".to_string(), format::pet_list(&kennel.pets(owner.id())?)),
            ("Sorted".to_string(), format::pet_list(&kennel.sorted_pets(owner.id())?)),
        ];
        print::as_tree_one_level(details);

        if idx + 1 != kennel.owners().len() {
            kprint!();
        }
    }
    Ok(())
}

fn print_registry(kennel: &Kennel) -> anyhow::Result<()> {
    let reprs: Vec<String> = kennel.all_pets().iter().map(Pet::to_string).collect();
    let key_width: usize = reprs.iter().map(|repr| repr.chars().count()).max().unwrap_or(0);

    for (pet, repr) in kennel.all_pets().iter().zip(&reprs) {
        let owner = kennel.owner_of(pet.id())?.map(|owner| owner.name());
        print::aligned_line(repr, key_width, format::owner_label(owner));
    }
    Ok(())
}

fn print_summary(kennel: &Kennel, cfg: &Config) {
    let owners: ColoredString = format!("{} owners", kennel.owners().len()).bold().green();
    let pets: ColoredString = format!("{} pets", kennel.all_pets().len()).bold().yellow();
    let strays: usize = kennel
        .all_pets()
        .iter()
        .filter(|pet| pet.owner().is_none())
        .count();
    let output: String = format!("Kennel holds {pets} across {owners}, {strays} stray")
        .color(colors::TEXT_DEFAULT)
        .to_string();

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(&output);
        }
        _ => {
            info!("{}", output)
        }
    }
}
