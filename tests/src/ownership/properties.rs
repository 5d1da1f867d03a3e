//! Property tests for the owner/pet relationship.
//!
//! Random sequences of pet creation and adoption are replayed against a
//! kennel and a plain reference model; after every step both must agree and
//! the kennel's bookkeeping must stay consistent in both directions.

#![cfg(test)]
use std::collections::HashMap;

use kennel_common::model::{OwnerId, PetId, PetType};
use kennel_core::Kennel;
use proptest::prelude::*;

const OWNERS: usize = 3;

#[derive(Debug, Clone)]
enum Op {
    Create { type_idx: usize, owner: Option<usize> },
    Adopt { owner: usize, pet: usize },
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..PetType::ALL.len(), proptest::option::of(0..OWNERS))
            .prop_map(|(type_idx, owner)| Op::Create { type_idx, owner }),
        (0..OWNERS, 0..16usize).prop_map(|(owner, pet)| Op::Adopt { owner, pet }),
    ]
}

/// Reference model: owner index -> pets in assignment order.
#[derive(Default)]
struct Model {
    lists: HashMap<usize, Vec<usize>>,
    owner_of: HashMap<usize, usize>,
}

impl Model {
    fn adopt(&mut self, owner: usize, pet: usize) {
        match self.owner_of.get(&pet) {
            Some(current) if *current == owner => return,
            Some(previous) => {
                let previous = *previous;
                self.lists.entry(previous).or_default().retain(|p| *p != pet);
            }
            None => {}
        }
        self.lists.entry(owner).or_default().push(pet);
        self.owner_of.insert(pet, owner);
    }
}

fn assert_consistent(kennel: &Kennel, model: &Model) -> Result<(), TestCaseError> {
    for owner in kennel.owners() {
        let expected: Vec<PetId> = model
            .lists
            .get(&owner.id().index())
            .map(|list| list.iter().map(|p| PetId::new(kennel.tag(), *p)).collect())
            .unwrap_or_default();
        prop_assert_eq!(owner.pets(), expected.as_slice());

        for pet in owner.pets() {
            let listed = owner.pets().iter().filter(|p| *p == pet).count();
            prop_assert_eq!(listed, 1);
            prop_assert_eq!(kennel.pet(*pet).unwrap().owner(), Some(owner.id()));
        }
    }

    for pet in kennel.all_pets() {
        let listing_owners = kennel
            .owners()
            .iter()
            .filter(|owner| owner.has_pet(pet.id()))
            .count();
        match pet.owner() {
            Some(owner) => {
                prop_assert_eq!(listing_owners, 1);
                prop_assert!(kennel.owner(owner).unwrap().has_pet(pet.id()));
            }
            None => prop_assert_eq!(listing_owners, 0),
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn relationship_stays_consistent(ops in proptest::collection::vec(op(), 0..40)) {
        let mut kennel = Kennel::new();
        let owners: Vec<OwnerId> = ["Ann", "Bob", "Cy"]
            .iter()
            .map(|name| kennel.add_owner(name))
            .collect();
        let mut model = Model::default();
        let mut created = 0usize;

        for op in ops {
            match op {
                Op::Create { type_idx, owner } => {
                    let name = format!("pet{created}");
                    let id = kennel
                        .create_typed_pet(&name, PetType::ALL[type_idx], owner.map(|o| owners[o]))
                        .unwrap();
                    prop_assert_eq!(id, PetId::new(kennel.tag(), created));
                    if let Some(owner) = owner {
                        model.adopt(owner, created);
                    }
                    created += 1;
                }
                Op::Adopt { owner, pet } => {
                    let result = kennel.add_pet(owners[owner], PetId::new(kennel.tag(), pet));
                    if pet < created {
                        prop_assert!(result.is_ok());
                        model.adopt(owner, pet);
                    } else {
                        prop_assert!(result.is_err());
                    }
                }
            }
            assert_consistent(&kennel, &model)?;
        }

        // The registry only ever grows, in creation order.
        let registry: Vec<PetId> = kennel.all_pets().iter().map(|pet| pet.id()).collect();
        let expected: Vec<PetId> = (0..created).map(|idx| PetId::new(kennel.tag(), idx)).collect();
        prop_assert_eq!(registry, expected);
    }

    #[test]
    fn sorted_pets_is_a_stable_name_sort(names in proptest::collection::vec("[a-cA-C]{1,2}", 0..12)) {
        let mut kennel = Kennel::new();
        let owner = kennel.add_owner("Sorter");
        for name in &names {
            kennel.create_pet(name, "exotic", Some(owner)).unwrap();
        }

        let before: Vec<PetId> = kennel.owner(owner).unwrap().pets().to_vec();
        let sorted = kennel.sorted_pets(owner).unwrap();

        prop_assert_eq!(sorted.len(), names.len());
        for pair in sorted.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            prop_assert!(a.name() <= b.name());
            if a.name() == b.name() {
                prop_assert!(a.id() < b.id());
            }
        }

        // Sorting never touches the stored order.
        prop_assert_eq!(kennel.owner(owner).unwrap().pets(), before.as_slice());
    }
}
