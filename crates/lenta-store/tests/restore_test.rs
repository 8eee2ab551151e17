//! Session persistence across process restarts. Each test builds two
//! stores over the same snapshot file, "before" and "after" a restart.

use lenta_store::{SessionStore, Snapshot};
use lenta_types::forms::{LoginForm, ProfilePatch, RegisterForm};

fn store_at(dir: &tempfile::TempDir) -> SessionStore {
    SessionStore::seeded(Snapshot::new(dir.path().join("lenta_session.json")))
}

#[test]
fn restore_reproduces_the_persisted_user() {
    let dir = tempfile::tempdir().unwrap();

    let mut first = store_at(&dir);
    let registered = first
        .register(&RegisterForm {
            email: "pavel@example.ru".into(),
            password: "secret".into(),
            username: "pavel_new".into(),
            display_name: "Павел".into(),
        })
        .unwrap();
    drop(first);

    let mut second = store_at(&dir);
    let restored = second.restore_session().unwrap();
    assert_eq!(restored, registered);
    assert_eq!(second.current_user(), Some(&registered));
}

#[test]
fn restored_user_is_upserted_into_the_catalog() {
    let dir = tempfile::tempdir().unwrap();

    // A registered user (id 5) is not part of the seed catalog the next
    // run boots with; restore has to bring the record back.
    let mut first = store_at(&dir);
    first
        .register(&RegisterForm {
            username: "pavel_new".into(),
            ..Default::default()
        })
        .unwrap();
    drop(first);

    let mut second = store_at(&dir);
    let restored = second.restore_session().unwrap();
    assert!(second.users().iter().any(|u| u.id == restored.id));
}

#[test]
fn profile_update_survives_a_restart() {
    let dir = tempfile::tempdir().unwrap();

    let mut first = store_at(&dir);
    first.login(&LoginForm::default()).unwrap();
    let updated = first
        .update_profile(&ProfilePatch {
            display_name: Some("Лента Official".into()),
            ..Default::default()
        })
        .unwrap();
    drop(first);

    let mut second = store_at(&dir);
    let restored = second.restore_session().unwrap();
    assert_eq!(restored, updated);
}

#[test]
fn corrupt_snapshot_means_no_session_and_gets_removed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lenta_session.json");
    std::fs::write(&path, "definitely not json").unwrap();

    let mut store = store_at(&dir);
    assert!(store.restore_session().is_none());
    assert!(store.current_user().is_none());
    assert!(!path.exists());
}

#[test]
fn missing_snapshot_means_no_session() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = store_at(&dir);
    assert!(store.restore_session().is_none());
    assert!(!store.is_signed_in());
}

#[test]
fn logout_leaves_nothing_to_restore() {
    let dir = tempfile::tempdir().unwrap();

    let mut first = store_at(&dir);
    first.login(&LoginForm::default()).unwrap();
    first.logout().unwrap();
    drop(first);

    let mut second = store_at(&dir);
    assert!(second.restore_session().is_none());
}
