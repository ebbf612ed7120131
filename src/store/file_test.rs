use super::*;

fn scratch_path(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("storefront-login-{}-{name}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    dir.join("nested").join("session.json")
}

#[test]
fn missing_file_reads_as_empty() {
    let store = FileStore::new(scratch_path("missing"));
    assert_eq!(store.get("jwt").unwrap(), None);
}

#[test]
fn set_creates_parent_dirs_and_persists() {
    let path = scratch_path("create");
    let store = FileStore::new(&path);
    store.set("jwt", "T").unwrap();

    assert!(path.exists());
    let reopened = FileStore::new(&path);
    assert_eq!(reopened.get("jwt").unwrap().as_deref(), Some("T"));
}

#[test]
fn set_overwrites_and_keeps_other_keys() {
    let store = FileStore::new(scratch_path("overwrite"));
    store.set("jwt", "old").unwrap();
    store.set("theme", "dark").unwrap();
    store.set("jwt", "new").unwrap();

    assert_eq!(store.get("jwt").unwrap().as_deref(), Some("new"));
    assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
}

#[test]
fn remove_deletes_only_that_key() {
    let store = FileStore::new(scratch_path("remove"));
    store.set("jwt", "T").unwrap();
    store.set("user", "{}").unwrap();
    store.remove("jwt").unwrap();

    assert_eq!(store.get("jwt").unwrap(), None);
    assert_eq!(store.get("user").unwrap().as_deref(), Some("{}"));
}

#[test]
fn remove_on_missing_file_is_noop() {
    let path = scratch_path("remove-missing");
    let store = FileStore::new(&path);
    store.remove("jwt").unwrap();
    assert!(!path.exists());
}

#[test]
fn no_temp_file_left_behind() {
    let path = scratch_path("tmp");
    let store = FileStore::new(&path);
    store.set("jwt", "T").unwrap();

    let mut tmp = path.clone().into_os_string();
    tmp.push(".tmp");
    assert!(!PathBuf::from(tmp).exists());
}

#[test]
fn corrupt_file_is_json_error() {
    let path = scratch_path("corrupt");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "not json").unwrap();

    let store = FileStore::new(&path);
    assert!(matches!(store.get("jwt"), Err(StoreError::Json(_))));
}
