//! Unit tests for the gallery controller

use super::*;
use crate::gallery::edit::TagEdit;
use crate::output::MessageLevel;
use crate::testing::{FakeClipboard, MockStorage, Request, record};

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|t| (*t).to_string()).collect()
}

fn loaded(storage: MockStorage) -> GalleryController<MockStorage> {
    let mut controller = GalleryController::new(storage, "https://media.example.com");
    assert!(matches!(controller.load(), LoadOutcome::Loaded(_)));
    controller.drain_notices();
    controller
}

fn three_files() -> MockStorage {
    MockStorage::new(vec![
        record("F1", 0, &["a", "b"]),
        record("F2", 1, &["a"]),
        record("F3", 2, &[]),
    ])
}

#[test]
fn test_load_sorts_by_order() {
    let storage = MockStorage::new(vec![
        record("c", 2, &[]),
        record("a", 0, &[]),
        record("b", 1, &[]),
    ]);
    let controller = loaded(storage);
    assert_eq!(controller.gallery().ids(), vec!["a", "b", "c"]);
    assert_eq!(controller.edit_state("a"), Some(&TagEdit::Confirmed(Vec::new())));
}

#[test]
fn test_load_failure_leaves_gallery_empty() {
    let mut controller = GalleryController::new(three_files().failing_list(), "https://x");
    assert!(matches!(controller.load(), LoadOutcome::Failed(_)));
    assert!(controller.gallery().is_empty());

    let notices = controller.drain_notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].level, MessageLevel::Error);
    assert_eq!(controller.storage().requests(), vec![Request::List]);
}

#[test]
fn test_commit_unchanged_tags_sends_nothing() {
    let mut controller = loaded(three_files());
    assert!(controller.input_tags("F1", " a , b ,  "));

    assert_eq!(controller.commit_tags("F1"), TagCommit::Unchanged);
    assert!(controller.storage().updates().is_empty());
    assert_eq!(controller.edit_state("F1"), Some(&TagEdit::Confirmed(tags(&["a", "b"]))));
    assert!(controller.drain_notices().is_empty());
}

#[test]
fn test_commit_changed_tags_updates_baseline() {
    let mut controller = loaded(three_files());
    controller.input_tags("F2", "a,c");

    assert_eq!(controller.commit_tags("F2"), TagCommit::Saved(tags(&["a", "c"])));
    assert_eq!(
        controller.storage().updates(),
        vec![("F2".to_string(), FilePatch::tags(tags(&["a", "c"])))]
    );
    assert_eq!(controller.gallery().get("F2").unwrap().tags, tags(&["a", "c"]));
    assert_eq!(controller.edit_state("F2"), Some(&TagEdit::Confirmed(tags(&["a", "c"]))));

    // Same text again now matches the new baseline
    controller.input_tags("F2", "a, c");
    assert_eq!(controller.commit_tags("F2"), TagCommit::Unchanged);
    assert_eq!(controller.storage().updates().len(), 1);
}

#[test]
fn test_commit_failure_keeps_confirmed_tags_and_draft() {
    let mut controller = loaded(three_files().failing_update("F2"));
    controller.input_tags("F2", "a, z");

    assert!(matches!(controller.commit_tags("F2"), TagCommit::Failed(_)));
    assert_eq!(controller.gallery().get("F2").unwrap().tags, tags(&["a"]));
    assert_eq!(
        controller.edit_state("F2"),
        Some(&TagEdit::Editing { confirmed: tags(&["a"]), draft: "a, z".to_string() })
    );
    assert_eq!(controller.tags_text("F2").as_deref(), Some("a, z"));

    let notices = controller.drain_notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].level, MessageLevel::Error);
}

#[test]
fn test_commit_retry_after_failure_resends() {
    let mut controller = loaded(three_files().failing_update("F2"));
    controller.input_tags("F2", "q");
    controller.commit_tags("F2");
    controller.commit_tags("F2");
    assert_eq!(controller.storage().updates().len(), 2);
}

#[test]
fn test_commit_without_input_is_noop() {
    let mut controller = loaded(three_files());
    assert_eq!(controller.commit_tags("F1"), TagCommit::NoDraft);
    assert_eq!(controller.commit_tags("missing"), TagCommit::UnknownFile);
    assert!(!controller.input_tags("missing", "x"));
    assert!(controller.storage().updates().is_empty());
}

#[test]
fn test_edits_to_different_files_are_independent() {
    let mut controller = loaded(three_files());
    controller.input_tags("F1", "x");
    controller.input_tags("F3", "y");

    assert_eq!(controller.commit_tags("F3"), TagCommit::Saved(tags(&["y"])));
    assert_eq!(controller.tags_text("F1").as_deref(), Some("x"));
    assert_eq!(controller.commit_tags("F1"), TagCommit::Saved(tags(&["x"])));
}

#[test]
fn test_same_file_last_write_wins() {
    let mut controller = loaded(three_files());
    controller.input_tags("F3", "first");
    controller.input_tags("F3", "second");

    assert_eq!(controller.commit_tags("F3"), TagCommit::Saved(tags(&["second"])));
}

#[test]
fn test_reorder_swaps_and_sends_changed_positions_only() {
    let mut controller = loaded(three_files());

    let outcome = controller.reorder("F1", "F3");
    assert!(matches!(&outcome, ReorderOutcome::Applied { failed, .. } if failed.is_empty()));

    assert_eq!(controller.gallery().ids(), vec!["F3", "F2", "F1"]);
    let orders: Vec<_> = controller.gallery().files().iter().map(|f| f.order).collect();
    assert_eq!(orders, vec![0, 1, 2]);
    assert_eq!(
        controller.storage().updates(),
        vec![
            ("F1".to_string(), FilePatch::order(2)),
            ("F3".to_string(), FilePatch::order(0)),
        ]
    );
    assert_eq!(controller.drain_notices()[0].level, MessageLevel::Success);
}

#[test]
fn test_reorder_noops_issue_nothing() {
    let mut controller = loaded(three_files());
    assert_eq!(controller.reorder("F2", "F2"), ReorderOutcome::Ignored);
    assert_eq!(controller.reorder("F2", "missing"), ReorderOutcome::Ignored);
    assert_eq!(controller.reorder("", "F2"), ReorderOutcome::Ignored);

    assert_eq!(controller.gallery().ids(), vec!["F1", "F2", "F3"]);
    assert!(controller.storage().updates().is_empty());
    assert!(controller.drain_notices().is_empty());
}

#[test]
fn test_reorder_partial_failure_keeps_local_order() {
    let mut controller = loaded(three_files().failing_update("F3"));

    let outcome = controller.reorder("F1", "F3");
    let ReorderOutcome::Applied { sent, failed } = outcome else {
        panic!("expected the swap to apply");
    };

    assert_eq!(sent.len(), 2);
    assert_eq!(failed.len(), 1);
    assert_eq!(failed[0].id, "F3");
    assert_eq!(failed[0].order, 0);
    assert_eq!(controller.gallery().ids(), vec!["F3", "F2", "F1"]);
    assert_eq!(controller.storage().stored("F1").unwrap().order, 2);
    assert_eq!(controller.storage().stored("F3").unwrap().order, 2);
    assert_eq!(controller.drain_notices()[0].level, MessageLevel::Error);
}

#[test]
fn test_consecutive_reorders_stay_a_permutation() {
    let mut controller = loaded(three_files());
    controller.reorder("F1", "F2");
    controller.reorder("F3", "F1");

    assert_eq!(controller.gallery().ids(), vec!["F2", "F3", "F1"]);
    let orders: Vec<_> = controller.gallery().files().iter().map(|f| f.order).collect();
    assert_eq!(orders, vec![0, 1, 2]);
}

#[test]
fn test_copy_share_link() {
    let mut controller = loaded(three_files());
    let mut clipboard = FakeClipboard::default();

    let outcome = controller.copy_share_link("F2", &mut clipboard);
    let expected = "https://media.example.com/files/view/share-F2".to_string();
    assert_eq!(outcome, ShareOutcome::Copied(expected.clone()));
    assert_eq!(clipboard.copied, vec![expected]);
    assert_eq!(controller.drain_notices()[0].level, MessageLevel::Success);
}

#[test]
fn test_copy_share_link_failure_keeps_state() {
    let mut controller = loaded(three_files());
    let before = controller.gallery().clone();
    let mut clipboard = FakeClipboard::broken();

    assert!(matches!(
        controller.copy_share_link("F1", &mut clipboard),
        ShareOutcome::Failed(_)
    ));
    assert_eq!(controller.gallery(), &before);
    assert_eq!(controller.drain_notices()[0].level, MessageLevel::Error);
    assert_eq!(
        controller.copy_share_link("missing", &mut clipboard),
        ShareOutcome::UnknownFile
    );
}

#[test]
fn test_set_shared_replaces_record() {
    let mut controller = loaded(three_files());

    let outcome = controller.set_shared("F1", true);
    assert!(matches!(outcome, RecordUpdate::Updated(ref r) if r.is_shared));
    assert!(controller.gallery().get("F1").unwrap().is_shared);
    assert_eq!(
        controller.storage().updates(),
        vec![("F1".to_string(), FilePatch::shared(true))]
    );
}

#[test]
fn test_record_view_increments() {
    let mut controller = loaded(three_files());
    controller.record_view("F2");
    controller.record_view("F2");

    assert_eq!(controller.gallery().get("F2").unwrap().view_count, 2);
    assert_eq!(controller.record_view("missing"), RecordUpdate::UnknownFile);
}

#[test]
fn test_record_update_failure_reports() {
    let mut controller = loaded(three_files().failing_update("F1"));
    assert!(matches!(controller.record_view("F1"), RecordUpdate::Failed(_)));
    assert_eq!(controller.gallery().get("F1").unwrap().view_count, 0);
    assert_eq!(controller.drain_notices()[0].level, MessageLevel::Error);
}

#[test]
fn test_expired_session_points_to_sign_in() {
    let mut controller = GalleryController::new(
        three_files().failing_list().expired_session(),
        "https://x",
    );
    assert!(matches!(controller.load(), LoadOutcome::Failed(_)));

    let notices = controller.drain_notices();
    assert_eq!(notices.len(), 2);
    assert_eq!(notices[0].level, MessageLevel::Error);
    assert_eq!(notices[1], Notice::warning(SIGN_IN_HINT));
}

#[test]
fn test_expired_session_on_update_points_to_sign_in() {
    let mut controller = loaded(three_files().failing_update("F3").expired_session());

    assert!(matches!(controller.set_shared("F3", true), RecordUpdate::Failed(_)));
    let notices = controller.drain_notices();
    assert!(notices[0].message.starts_with("Failed to change sharing"));
    assert_eq!(notices.last(), Some(&Notice::warning(SIGN_IN_HINT)));

    controller.reorder("F1", "F3");
    assert_eq!(controller.drain_notices().last(), Some(&Notice::warning(SIGN_IN_HINT)));
}

#[test]
fn test_unavailable_service_gives_no_sign_in_hint() {
    let mut controller = loaded(three_files().failing_update("F1"));
    controller.record_view("F1");
    assert_eq!(controller.drain_notices().len(), 1);
}
