//! End-to-end submit/remove lifecycle tests over the in-memory surfaces.

use rollcall_core::{
    Controller, Field, MemoryDisplay, MemoryInput, MemoryStatus, PhotoSource, ProfileId,
    RawSubmission, RemoveOutcome, SubmitOutcome,
};

fn controller() -> Controller<MemoryDisplay, MemoryInput, MemoryStatus> {
    Controller::new(MemoryDisplay::new(), MemoryInput::new(), MemoryStatus::new())
}

fn submission(first: &str, last: &str, email: &str) -> RawSubmission {
    RawSubmission {
        first_name: first.into(),
        last_name: last.into(),
        email: email.into(),
        programme: "CS".into(),
        year: "2".into(),
        interests: String::new(),
        photo: String::new(),
    }
}

fn accept(c: &mut Controller<MemoryDisplay, MemoryInput, MemoryStatus>, raw: RawSubmission) -> ProfileId {
    c.input_mut().set_values(raw);
    match c.submit().expect("submit") {
        SubmitOutcome::Accepted(id) => id,
        SubmitOutcome::Rejected(errors) => panic!("unexpected rejection: {errors:?}"),
    }
}

// ---------------------------------------------------------------------------
// The Ada Lovelace scenario
// ---------------------------------------------------------------------------

#[test]
fn ada_lovelace_end_to_end() {
    let mut c = controller();
    let id = accept(&mut c, submission("Ada", "Lovelace", "ada@math.org"));

    assert_eq!(c.registry().len(), 1);
    let card = &c.display().cards()[0];
    assert_eq!(card.id, id);
    assert_eq!(card.display_name, "Ada Lovelace");
    assert_eq!(card.email, "ada@math.org");
    assert_eq!(card.programme_line, "CS • Year 2");
    assert_eq!(card.interests_line, "Interests: —");
    match &card.photo {
        PhotoSource::Placeholder(d) => assert_eq!(d.initials, "AL"),
        PhotoSource::Url(u) => panic!("expected placeholder avatar, got {u}"),
    }
    let row = &c.display().rows()[0];
    assert_eq!(row.id, id);
    assert_eq!(row.programme, "CS");
    assert_eq!(row.year, "2");
    assert_eq!(c.status().last(), Some("Added profile for Ada Lovelace."));

    assert_eq!(c.remove(&id), RemoveOutcome::Removed);
    assert!(c.registry().is_empty());
    assert!(c.display().cards().is_empty());
    assert!(c.display().rows().is_empty());
    assert_eq!(c.status().last(), Some("Removed profile for Ada Lovelace."));
}

// ---------------------------------------------------------------------------
// Membership invariant across a mixed sequence
// ---------------------------------------------------------------------------

#[test]
fn registry_membership_always_matches_views() {
    let mut c = controller();
    let a = accept(&mut c, submission("Ada", "Lovelace", "ada@math.org"));
    let b = accept(&mut c, submission("Grace", "Hopper", "grace@navy.mil"));
    let d = accept(&mut c, submission("Edsger", "Dijkstra", "ewd@cs.utexas.edu"));

    // Newest-first in both views; prior entries untouched.
    let card_ids: Vec<ProfileId> = c.display().cards().iter().map(|v| v.id).collect();
    let row_ids: Vec<ProfileId> = c.display().rows().iter().map(|v| v.id).collect();
    assert_eq!(card_ids, vec![d, b, a]);
    assert_eq!(row_ids, vec![d, b, a]);

    c.remove(&b);
    assert_eq!(c.registry().len(), 2);
    let card_ids: Vec<ProfileId> = c.display().cards().iter().map(|v| v.id).collect();
    assert_eq!(card_ids, vec![d, a], "remaining cards keep relative order");
    for id in [d, a] {
        assert!(c.registry().contains(&id));
        assert_eq!(c.display().cards().iter().filter(|v| v.id == id).count(), 1);
        assert_eq!(c.display().rows().iter().filter(|v| v.id == id).count(), 1);
    }
}

#[test]
fn rejection_between_accepts_disturbs_nothing() {
    let mut c = controller();
    let a = accept(&mut c, submission("Ada", "Lovelace", "ada@math.org"));

    c.input_mut().set_values(submission("", "", "broken"));
    let outcome = c.submit().expect("submit");
    assert!(matches!(outcome, SubmitOutcome::Rejected(_)));
    assert!(c.input().errors().contains_key(&Field::FirstName));

    assert_eq!(c.registry().len(), 1);
    assert_eq!(c.display().cards().len(), 1);
    assert_eq!(c.display().cards()[0].id, a);
}

#[test]
fn minted_ids_are_never_reused_within_a_session() {
    let mut c = controller();
    let a = accept(&mut c, submission("Ada", "Lovelace", "ada@math.org"));
    c.remove(&a);
    let b = accept(&mut c, submission("Ada", "Lovelace", "ada@math.org"));
    assert_ne!(a, b);
}
