use kennel_common::config::Config;
use kennel_common::model::PetType;
use tracing::info;

use crate::terminal::{format, print};

pub fn types(cfg: &Config) {
    if cfg.quiet < 2 {
        for (idx, pet_type) in PetType::ALL.into_iter().enumerate() {
            print::aligned_line(&format!("{}", idx + 1), 1, format::pet_type_label(pet_type));
        }
    }
    info!("A kennel accepts {} pet types", PetType::ALL.len());
}
