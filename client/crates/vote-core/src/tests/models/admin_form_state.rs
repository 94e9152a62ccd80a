use crate::{AdminFormState, Candidate, CandidateId, FormMode};

use std::str::FromStr;

use proptest::prelude::*;

fn candidate(id: &str, name: &str, party: &str, age: u32) -> Candidate {
    Candidate {
        id: CandidateId::from_str(id).unwrap(),
        name: name.to_string(),
        party: party.to_string(),
        age,
    }
}

#[test]
fn test_new_form_is_in_create_mode() {
    let form = AdminFormState::new();

    assert!(!form.edit_mode());
    assert!(form.selected_candidate_id().is_none());
    assert_eq!(form.mode(), &FormMode::Create);
}

#[test]
fn test_begin_edit_copies_candidate() {
    let mut form = AdminFormState::new();
    let target = candidate("c1", "Alice", "Blue", 44);

    form.begin_edit(&target);

    assert!(form.edit_mode());
    assert_eq!(form.selected_candidate_id(), Some(&target.id));
    assert_eq!(form.name, "Alice");
    assert_eq!(form.party, "Blue");
    assert_eq!(form.age, 44);
}

#[test]
fn test_reset_leaves_edit_mode() {
    let mut form = AdminFormState::new();
    form.begin_edit(&candidate("c1", "Alice", "Blue", 44));

    form.reset();

    assert_eq!(form, AdminFormState::new());
}

#[test]
fn test_to_input_takes_current_fields() {
    let mut form = AdminFormState::new();
    form.begin_edit(&candidate("c1", "Alice", "Blue", 44));
    form.party = "Green".to_string();

    let input = form.to_input();

    assert_eq!(input.name, "Alice");
    assert_eq!(input.party, "Green");
    assert_eq!(input.age, 44);
}

proptest! {
    #[test]
    fn given_any_candidate_when_edit_begins_then_form_mirrors_it(
        id in "[a-f0-9]{1,24}",
        name in ".{0,20}",
        party in ".{0,20}",
        age in 0u32..130,
    ) {
        let mut form = AdminFormState::new();
        let target = candidate(&id, &name, &party, age);

        form.begin_edit(&target);

        prop_assert!(form.edit_mode());
        prop_assert_eq!(form.selected_candidate_id(), Some(&target.id));
        prop_assert_eq!(&form.name, &name);
        prop_assert_eq!(&form.party, &party);
        prop_assert_eq!(form.age, age);
    }

    #[test]
    fn given_any_sequence_when_applied_then_id_present_iff_edit_mode(
        ops in proptest::collection::vec(0u8..3, 0..20),
    ) {
        let mut form = AdminFormState::new();
        for (i, op) in ops.iter().enumerate() {
            match op {
                0 => form.begin_edit(&candidate(&format!("c{}", i), "n", "p", 30)),
                1 => form.reset(),
                _ => form.name.push('x'),
            }
            prop_assert_eq!(form.edit_mode(), form.selected_candidate_id().is_some());
        }
    }
}
