//! Tests for the undo/redo history

use super::*;
use proptest::prelude::*;

#[test]
fn test_new_history_starts_with_empty_buffer() {
    let history = EditHistory::new();
    assert_eq!(history.current(), "");
    assert_eq!(history.len(), 1);
    assert_eq!(history.index(), 0);
    assert!(!history.can_undo());
    assert!(!history.can_redo());
}

#[test]
fn test_commit_advances_index() {
    let mut history = EditHistory::new();
    history.commit("a".to_string());
    history.commit("ab".to_string());

    assert_eq!(history.current(), "ab");
    assert_eq!(history.index(), 2);
    assert!(history.can_undo());
}

#[test]
fn test_undo_and_redo_walk_snapshots() {
    let mut history = EditHistory::new();
    history.commit("a".to_string());
    history.commit("ab".to_string());

    assert_eq!(history.undo(), Some("a"));
    assert_eq!(history.undo(), Some(""));
    assert_eq!(history.redo(), Some("a"));
    assert_eq!(history.redo(), Some("ab"));
}

#[test]
fn test_undo_at_oldest_is_noop() {
    let mut history = EditHistory::new();
    assert_eq!(history.undo(), None);
    assert_eq!(history.undo(), None);
    assert_eq!(history.current(), "");
    assert_eq!(history.index(), 0);
}

#[test]
fn test_redo_at_newest_is_noop() {
    let mut history = EditHistory::new();
    history.commit("x".to_string());
    assert_eq!(history.redo(), None);
    assert_eq!(history.redo(), None);
    assert_eq!(history.current(), "x");
}

#[test]
fn test_commit_after_undo_drops_redo_tail() {
    let mut history = EditHistory::new();
    history.commit("one".to_string());
    history.commit("two".to_string());
    history.commit("three".to_string());

    history.undo();
    history.undo();
    history.commit("branch".to_string());

    assert_eq!(history.current(), "branch");
    assert_eq!(history.len(), 3);
    assert!(!history.can_redo());
    assert_eq!(history.undo(), Some("one"));
}

#[test]
fn test_limit_evicts_oldest_entries() {
    let mut history = EditHistory::with_initial(String::new(), Some(3));
    for text in ["a", "b", "c", "d"] {
        history.commit(text.to_string());
    }

    assert_eq!(history.len(), 3);
    assert_eq!(history.current(), "d");
    assert_eq!(history.undo(), Some("c"));
    assert_eq!(history.undo(), Some("b"));
    assert_eq!(history.undo(), None);
}

#[test]
fn test_zero_limit_keeps_one_entry() {
    let mut history = EditHistory::with_initial("start".to_string(), Some(0));
    history.commit("next".to_string());
    assert_eq!(history.len(), 1);
    assert_eq!(history.current(), "next");
}

#[test]
fn test_unbounded_history_keeps_everything() {
    let mut history = EditHistory::with_initial(String::new(), None);
    for i in 0..500 {
        history.commit(i.to_string());
    }
    assert_eq!(history.len(), 501);
}

#[test]
fn test_initial_entry_from_file_content() {
    let mut history = EditHistory::with_initial("verse one".to_string(), None);
    assert_eq!(history.current(), "verse one");
    history.commit("verse one\n".to_string());
    assert_eq!(history.undo(), Some("verse one"));
}

#[derive(Debug, Clone)]
enum Op {
    Commit(String),
    Undo,
    Redo,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        "[a-z ]{0,8}".prop_map(Op::Commit),
        Just(Op::Undo),
        Just(Op::Redo),
    ]
}

// For any interleaving of commit/undo/redo, the visible buffer (tracked the way
// the editor tracks it) equals the entry at the current index.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_visible_buffer_matches_current_entry(
        ops in prop::collection::vec(op_strategy(), 0..60),
        limit in prop::option::of(1usize..10),
    ) {
        let mut history = EditHistory::with_initial(String::new(), limit);
        let mut visible = String::new();

        for op in ops {
            match op {
                Op::Commit(text) => {
                    visible = text.clone();
                    history.commit(text);
                }
                Op::Undo => {
                    if let Some(text) = history.undo() {
                        visible = text.to_string();
                    }
                }
                Op::Redo => {
                    if let Some(text) = history.redo() {
                        visible = text.to_string();
                    }
                }
            }

            prop_assert_eq!(history.current(), visible.as_str());
            prop_assert!(history.index() < history.len());
            prop_assert!(history.len() >= 1);
            if let Some(limit) = limit {
                prop_assert!(history.len() <= limit);
            }
        }
    }

    #[test]
    fn prop_repeated_undo_at_start_is_idempotent(times in 1usize..10) {
        let mut history = EditHistory::new();
        for _ in 0..times {
            prop_assert!(history.undo().is_none());
        }
        prop_assert_eq!(history.index(), 0);
        prop_assert_eq!(history.current(), "");
    }

    #[test]
    fn prop_repeated_redo_at_end_is_idempotent(
        commits in prop::collection::vec("[a-z]{1,5}", 1..10),
        times in 1usize..10,
    ) {
        let mut history = EditHistory::new();
        for c in &commits {
            history.commit(c.clone());
        }
        let last = commits.last().cloned().unwrap_or_default();
        for _ in 0..times {
            prop_assert!(history.redo().is_none());
        }
        prop_assert_eq!(history.current(), last.as_str());
    }
}
