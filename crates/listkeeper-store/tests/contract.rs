//! Data-access contract tests, run against every backend.
//!
//! Each check takes a fresh [`ListDal`] so the in-memory and SQLite backends
//! are held to identical semantics.

use std::sync::Arc;

use proptest::prelude::*;

use listkeeper_store::{
    ErrorKind, InMemoryStore, ListDal, ListId, SqliteStore, StoreError, TodoList,
};

fn backends() -> Vec<(&'static str, ListDal)> {
    vec![
        ("memory", ListDal::new(Arc::new(InMemoryStore::new()))),
        (
            "sqlite",
            ListDal::new(Arc::new(SqliteStore::in_memory().expect("open sqlite"))),
        ),
    ]
}

fn labels(list: &TodoList) -> Vec<&str> {
    list.items.iter().map(|i| i.label.as_str()).collect()
}

#[test]
fn create_then_get_returns_empty_named_list() {
    for (backend, dal) in backends() {
        let id = dal.create_list("groceries").unwrap();
        let list = dal.get_list(id.as_str()).unwrap();
        assert_eq!(list.id, id, "{backend}");
        assert_eq!(list.name, "groceries", "{backend}");
        assert!(list.items.is_empty(), "{backend}");
    }
}

#[test]
fn names_need_not_be_unique() {
    for (backend, dal) in backends() {
        let a = dal.create_list("same").unwrap();
        let b = dal.create_list("same").unwrap();
        assert_ne!(a, b, "{backend}");
        assert_eq!(dal.list_summaries().unwrap().count(), 2, "{backend}");
    }
}

#[test]
fn items_keep_insertion_order() {
    for (backend, dal) in backends() {
        let id = dal.create_list("errands").unwrap().to_string();
        for label in ["bank", "post office", "pharmacy"] {
            dal.create_item(&id, label).unwrap();
        }
        let list = dal.get_list(&id).unwrap();
        assert_eq!(labels(&list), vec!["bank", "post office", "pharmacy"], "{backend}");
        assert!(list.items.iter().all(|i| !i.checked), "{backend}");
    }
}

#[test]
fn item_ids_are_unique_within_a_list() {
    for (backend, dal) in backends() {
        let id = dal.create_list("dupes").unwrap().to_string();
        for _ in 0..20 {
            dal.create_item(&id, "same label").unwrap();
        }
        let list = dal.get_list(&id).unwrap();
        let mut ids: Vec<_> = list.items.iter().map(|i| i.id).collect();
        ids.sort_by_key(|id| id.to_string());
        ids.dedup();
        assert_eq!(ids.len(), 20, "{backend}");
    }
}

#[test]
fn summaries_are_sorted_by_name_and_count_items() {
    for (backend, dal) in backends() {
        let zoo = dal.create_list("zoo").unwrap().to_string();
        let apples = dal.create_list("apples").unwrap().to_string();
        let mid = dal.create_list("middle").unwrap().to_string();
        dal.create_item(&zoo, "lion").unwrap();
        dal.create_item(&zoo, "tiger").unwrap();
        dal.create_item(&mid, "one").unwrap();

        let summaries: Vec<_> = dal.list_summaries().unwrap().collect();
        let names: Vec<&str> = summaries.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["apples", "middle", "zoo"], "{backend}");

        for summary in &summaries {
            let list = dal.get_list(summary.id.as_str()).unwrap();
            assert_eq!(summary.item_count, list.items.len(), "{backend}");
        }
        assert_eq!(summaries[0].id.as_str(), apples);
    }
}

#[test]
fn summaries_cursor_is_single_pass() {
    for (backend, dal) in backends() {
        dal.create_list("one").unwrap();
        dal.create_list("two").unwrap();
        let mut cursor = dal.list_summaries().unwrap();
        assert_eq!(cursor.len(), 2, "{backend}");
        assert!(cursor.next().is_some());
        assert!(cursor.next().is_some());
        assert!(cursor.next().is_none(), "{backend}");
        assert!(cursor.next().is_none(), "{backend}");
    }
}

#[test]
fn delete_list_reports_whether_it_removed_anything() {
    for (backend, dal) in backends() {
        let id = dal.create_list("temporary").unwrap().to_string();
        dal.create_item(&id, "gone soon").unwrap();

        assert!(dal.delete_list(&id).unwrap(), "{backend}");
        let err = dal.get_list(&id).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound, "{backend}");
        assert!(!dal.delete_list(&id).unwrap(), "{backend}");

        let never_existed = ListId::mint();
        assert!(!dal.delete_list(never_existed.as_str()).unwrap(), "{backend}");
    }
}

#[test]
fn checked_toggle_round_trips() {
    for (backend, dal) in backends() {
        let id = dal.create_list("toggles").unwrap().to_string();
        dal.create_item(&id, "a").unwrap();
        let original = dal.create_item(&id, "b").unwrap();
        let target = original.items[1].id.to_string();

        let checked = dal.set_item_checked(&id, &target, true).unwrap();
        assert!(checked.items[1].checked, "{backend}");
        assert!(!checked.items[0].checked, "{backend}");

        let unchecked = dal.set_item_checked(&id, &target, false).unwrap();
        assert_eq!(unchecked, original, "{backend}");
    }
}

#[test]
fn setting_checked_twice_is_idempotent() {
    for (backend, dal) in backends() {
        let id = dal.create_list("idempotent").unwrap().to_string();
        let list = dal.create_item(&id, "once").unwrap();
        let item = list.items[0].id.to_string();
        let first = dal.set_item_checked(&id, &item, true).unwrap();
        let second = dal.set_item_checked(&id, &item, true).unwrap();
        assert_eq!(first, second, "{backend}");
    }
}

#[test]
fn delete_item_leaves_siblings_untouched() {
    for (backend, dal) in backends() {
        let id = dal.create_list("siblings").unwrap().to_string();
        for label in ["first", "second", "third"] {
            dal.create_item(&id, label).unwrap();
        }
        let before = dal.get_list(&id).unwrap();
        dal.set_item_checked(&id, &before.items[2].id.to_string(), true)
            .unwrap();
        let before = dal.get_list(&id).unwrap();

        let after = dal
            .delete_item(&id, &before.items[1].id.to_string())
            .unwrap();
        assert_eq!(after.items.len(), 2, "{backend}");
        assert_eq!(after.items[0], before.items[0], "{backend}");
        assert_eq!(after.items[1], before.items[2], "{backend}");
    }
}

#[test]
fn unknown_item_is_not_an_error() {
    for (backend, dal) in backends() {
        let id = dal.create_list("stable").unwrap().to_string();
        let before = dal.create_item(&id, "keep").unwrap();
        let stranger = listkeeper_store::ItemId::mint().to_string();

        assert_eq!(dal.set_item_checked(&id, &stranger, true).unwrap(), before, "{backend}");
        assert_eq!(dal.delete_item(&id, &stranger).unwrap(), before, "{backend}");
    }
}

#[test]
fn missing_list_is_not_found_for_every_operation() {
    for (backend, dal) in backends() {
        let missing = ListId::mint().to_string();
        let item = listkeeper_store::ItemId::mint().to_string();

        let errors = [
            dal.get_list(&missing).unwrap_err(),
            dal.create_item(&missing, "x").unwrap_err(),
            dal.set_item_checked(&missing, &item, true).unwrap_err(),
            dal.delete_item(&missing, &item).unwrap_err(),
        ];
        for err in errors {
            assert!(matches!(err, StoreError::NotFound(_)), "{backend}: {err}");
        }
    }
}

#[test]
fn malformed_list_id_is_invalid_argument() {
    for (backend, dal) in backends() {
        for bad in ["", "L1", "not-an-object-id-at-all!!"] {
            let err = dal.get_list(bad).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidArgument, "{backend}: {bad:?}");
        }
    }
}

#[test]
fn concurrent_appends_are_all_kept() {
    for (backend, dal) in backends() {
        let id = dal.create_list("busy").unwrap().to_string();
        let handles: Vec<_> = (0..8)
            .map(|n| {
                let dal = dal.clone();
                let id = id.clone();
                std::thread::spawn(move || {
                    for k in 0..5 {
                        dal.create_item(&id, &format!("t{n}-{k}")).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        let list = dal.get_list(&id).unwrap();
        assert_eq!(list.items.len(), 40, "{backend}");
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn get_list_preserves_append_order(
        name in "[a-z ]{0,12}",
        item_labels in prop::collection::vec("[a-zA-Z0-9 ]{0,10}", 0..12),
    ) {
        for (_, dal) in backends() {
            let id = dal.create_list(&name).unwrap().to_string();
            for label in &item_labels {
                dal.create_item(&id, label).unwrap();
            }
            let list = dal.get_list(&id).unwrap();
            prop_assert_eq!(&list.name, &name);
            let got: Vec<String> = list.items.iter().map(|i| i.label.clone()).collect();
            prop_assert_eq!(&got, &item_labels);
        }
    }

    #[test]
    fn item_count_matches_items_after_removals(
        total in 0usize..10,
        removals in prop::collection::vec(any::<prop::sample::Index>(), 0..5),
    ) {
        for (_, dal) in backends() {
            let id = dal.create_list("counted").unwrap().to_string();
            for n in 0..total {
                dal.create_item(&id, &format!("item {n}")).unwrap();
            }
            for index in &removals {
                let list = dal.get_list(&id).unwrap();
                if list.items.is_empty() {
                    break;
                }
                let victim = list.items[index.index(list.items.len())].id.to_string();
                dal.delete_item(&id, &victim).unwrap();
            }
            let list = dal.get_list(&id).unwrap();
            let summary = dal
                .list_summaries()
                .unwrap()
                .find(|s| s.id == list.id)
                .unwrap();
            prop_assert_eq!(summary.item_count, list.items.len());
        }
    }
}
