#![cfg(test)]
use kennel_common::config::Config;
use kennel_common::model::{Owner, OwnerId, Pet, PetId, PetType};
use kennel_common::ModelError;
use kennel_core::{Kennel, KennelError, Link};

fn names(pets: Vec<&Pet>) -> Vec<String> {
    pets.into_iter().map(|pet| pet.name().to_string()).collect()
}

/// John adopts the stray Buddy after Fluffy, so his pets keep assignment
/// order while the sorted view goes by name.
#[test]
fn john_and_alice_walkthrough() {
    let mut kennel = Kennel::new();
    let john: OwnerId = kennel.add_owner("John");
    let alice: OwnerId = kennel.add_owner("Alice");

    let buddy: PetId = kennel.create_pet("Buddy", "dog", None).unwrap();
    let fluffy: PetId = kennel.create_pet("Fluffy", "cat", Some(john)).unwrap();
    let charlie: PetId = kennel.create_pet("Charlie", "bird", Some(alice)).unwrap();

    assert_eq!(kennel.add_pet(john, buddy), Ok(Link::Added));

    assert_eq!(names(kennel.pets(john).unwrap()), ["Fluffy", "Buddy"]);
    assert_eq!(names(kennel.sorted_pets(john).unwrap()), ["Buddy", "Fluffy"]);
    assert_eq!(names(kennel.pets(alice).unwrap()), ["Charlie"]);

    let registry: Vec<PetId> = kennel.all_pets().iter().map(Pet::id).collect();
    assert_eq!(registry, vec![buddy, fluffy, charlie]);

    assert_eq!(kennel.owner_of(buddy).unwrap().map(Owner::name), Some("John"));
}

#[test]
fn every_listed_type_is_accepted() {
    let mut kennel = Kennel::new();
    for (idx, spelling) in ["dog", "cat", "rodent", "bird", "reptile", "exotic"]
        .into_iter()
        .enumerate()
    {
        let pet = kennel.create_pet(&format!("pet{idx}"), spelling, None).unwrap();
        assert_eq!(kennel.pet(pet).unwrap().pet_type(), PetType::ALL[idx]);
    }
    assert_eq!(kennel.all_pets().len(), 6);
}

#[test]
fn unlisted_type_is_rejected() {
    let mut kennel = Kennel::new();
    let result = kennel.create_pet("X", "fish", None);

    assert_eq!(
        result,
        Err(KennelError::Model(ModelError::UnknownPetType("fish".into())))
    );
    assert!(kennel.all_pets().is_empty());
}

#[test]
fn reassignment_moves_the_pet() {
    let mut kennel = Kennel::new();
    let a: OwnerId = kennel.add_owner("A");
    let b: OwnerId = kennel.add_owner("B");
    let p: PetId = kennel.create_pet("P", "rodent", Some(a)).unwrap();

    assert_eq!(kennel.add_pet(b, p), Ok(Link::Reassigned { from: a }));

    assert!(!kennel.owner(a).unwrap().has_pet(p));
    assert_eq!(kennel.owner(b).unwrap().pets(), &[p]);
    assert_eq!(kennel.pet(p).unwrap().owner(), Some(b));
}

#[test]
fn readding_to_the_same_owner_does_not_duplicate() {
    let mut kennel = Kennel::new();
    let john: OwnerId = kennel.add_owner("John");
    let rex: PetId = kennel.create_pet("Rex", "dog", Some(john)).unwrap();

    assert_eq!(kennel.add_pet(john, rex), Ok(Link::Unchanged));
    assert_eq!(kennel.add_pet(john, rex), Ok(Link::Unchanged));
    assert_eq!(kennel.owner(john).unwrap().pets(), &[rex]);
}

#[test]
fn handles_from_another_kennel_are_rejected() {
    let mut other = Kennel::new();
    let stranger: OwnerId = other.add_owner("Stranger");
    let ghost: PetId = other.create_pet("Ghost", "exotic", None).unwrap();

    let mut kennel = Kennel::new();
    let john: OwnerId = kennel.add_owner("John");
    let buddy: PetId = kennel.create_pet("Buddy", "dog", None).unwrap();

    // Same indices, different kennels.
    assert_eq!(ghost.index(), buddy.index());
    assert_eq!(stranger.index(), john.index());

    assert_eq!(kennel.add_pet(john, ghost), Err(KennelError::UnknownPet(ghost)));
    assert_eq!(
        kennel.create_pet("Rex", "dog", Some(stranger)),
        Err(KennelError::UnknownOwner(stranger))
    );
    assert_eq!(kennel.owner_of(buddy).unwrap(), None);
    assert!(kennel.pets(john).unwrap().is_empty());
    assert_eq!(other.pet(ghost).unwrap().owner(), None);
}

#[test]
fn empty_names_are_accepted() {
    let mut kennel = Kennel::new();
    let nobody: OwnerId = kennel.add_owner("");
    let pet: PetId = kennel.create_pet("", "dog", None).unwrap();

    assert_eq!(kennel.add_pet(nobody, pet), Ok(Link::Added));
    assert_eq!(kennel.pet(pet).unwrap().to_string(), "Pet(name=, pet_type=dog)");
    assert_eq!(kennel.owner(nobody).unwrap().name(), "");
}

#[test]
fn strict_kennel_keeps_existing_owner() {
    let mut kennel = Kennel::with_config(Config {
        allow_reassign: false,
        ..Config::default()
    });
    let a: OwnerId = kennel.add_owner("A");
    let b: OwnerId = kennel.add_owner("B");
    let p: PetId = kennel.create_pet("P", "cat", Some(a)).unwrap();

    let err = kennel.add_pet(b, p).unwrap_err();
    assert_eq!(err.to_string(), "pet#0 already has an owner (owner#0)");
    assert_eq!(kennel.pet(p).unwrap().owner(), Some(a));
    assert!(kennel.owner(b).unwrap().pets().is_empty());
}
