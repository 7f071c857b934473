use pretty_assertions::assert_eq;
use qs_core::ObjectUri;
use qs_store::{Location, MemoryStore, ObjectStore, Operation, StoreError};

fn uri(key: &str) -> ObjectUri {
    ObjectUri::new("bucket", key)
}

#[test]
fn lists_only_matching_bucket_and_prefix() {
    let store = MemoryStore::with_objects([
        (uri("quickshare/a.ipynb"), b"a".as_slice()),
        (uri("other/b.ipynb"), b"b".as_slice()),
        (ObjectUri::new("elsewhere", "quickshare/c.ipynb"), b"c".as_slice()),
    ]);

    let keys: Vec<String> = store
        .list_objects("bucket", "quickshare/")
        .unwrap()
        .into_iter()
        .map(|object| object.key)
        .collect();

    assert_eq!(keys, vec!["quickshare/a.ipynb".to_string()]);
}

#[test]
fn move_renames_object() {
    let store = MemoryStore::with_objects([(uri("quickshare/a.ipynb"), b"{}".as_slice())]);

    store
        .move_object(&uri("quickshare/a.ipynb"), &uri("quickshare/_hide_a.ipynb"))
        .unwrap();

    assert!(!store.contains(&uri("quickshare/a.ipynb")));
    assert_eq!(store.get(&uri("quickshare/_hide_a.ipynb")), Some(b"{}".to_vec()));
}

#[test]
fn move_of_missing_object_fails_and_changes_nothing() {
    let store = MemoryStore::with_objects([(uri("quickshare/a.ipynb"), b"{}".as_slice())]);

    let err = store
        .move_object(&uri("quickshare/zzz.ipynb"), &uri("quickshare/_hide_zzz.ipynb"))
        .unwrap_err();

    assert!(matches!(err, StoreError::NotFound(_)));
    assert!(store.contains(&uri("quickshare/a.ipynb")));
}

#[test]
fn copies_between_local_files_and_objects() {
    let dir = tempfile::tempdir().unwrap();
    let local = dir.path().join("up.ipynb");
    std::fs::write(&local, b"notebook").unwrap();

    let store = MemoryStore::new();
    store
        .copy(
            &Location::Local(local),
            &Location::Remote(uri("quickshare/up.ipynb")),
        )
        .unwrap();

    let fetched = dir.path().join("down.ipynb");
    store
        .copy(
            &Location::Remote(uri("quickshare/up.ipynb")),
            &Location::Local(fetched.clone()),
        )
        .unwrap();

    assert_eq!(std::fs::read(fetched).unwrap(), b"notebook");
    assert_eq!(store.calls(), vec![Operation::Copy, Operation::Copy]);
}

#[test]
fn injected_failures_are_recorded() {
    let store = MemoryStore::new();
    store.fail_on(Operation::List);

    let err = store.list_objects("bucket", "quickshare/").unwrap_err();

    assert!(err.to_string().contains("injected"));
    assert_eq!(store.calls(), vec![Operation::List]);
}
