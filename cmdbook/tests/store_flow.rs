//! End-to-end lifecycle of a stored command: add, search, touch, update,
//! delete, observed through the public store API.

use chrono::Local;
use cmdbook::db::Db;
use cmdbook::query::SearchFilters;
use cmdbook::refine;
use cmdbook::store::CommandStore;
use cmdbook_types::StoreError;
use tempfile::TempDir;

fn open_store(dir: &TempDir) -> CommandStore {
    let db = Db::new(dir.path().join("commands.db")).unwrap();
    CommandStore::new(db)
}

#[test]
fn test_full_command_lifecycle() {
    let dir = TempDir::new().unwrap();
    let store = open_store(&dir);

    // add
    let t0 = Local::now().timestamp();
    let id = store.add("ls-la", "ls -la", "fs,list", "").unwrap();
    let created = store.get_by_id(id).unwrap();
    assert_eq!(created.alias, "ls-la");
    assert!(created.last_used >= t0);

    // search by command substring finds it
    let found = store.search(&SearchFilters::command("ls")).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, Some(id));

    // selection stamps the record as used
    store.touch_last_used(Some(id)).unwrap();
    let touched = store.get_by_id(id).unwrap();
    assert!(touched.last_used >= created.last_used);
    assert_eq!(touched.command, created.command);

    // update replaces every mutable field at once
    store
        .update_by_id(id, "ls-all", "ls -la", "fs", "lists all files")
        .unwrap();
    let updated = store.get_by_id(id).unwrap();
    assert_eq!(updated.alias, "ls-all");
    assert_eq!(updated.tags, "fs");
    assert_eq!(updated.note, "lists all files");

    // delete succeeds once, then the id is gone
    store.delete_by_id(id).unwrap();
    assert!(matches!(store.get_by_id(id), Err(StoreError::NotFound(_))));
    assert!(matches!(
        store.delete_by_id(id),
        Err(StoreError::NotFound(_))
    ));
}

#[test]
fn test_search_never_touches_usage_metadata() {
    let dir = TempDir::new().unwrap();
    let store = open_store(&dir);

    let id = store.add("push", "git push origin", "vcs", "").unwrap();
    let before = store.get_by_id(id).unwrap();

    store.search(&SearchFilters::command("git")).unwrap();
    store.search(&SearchFilters::tag("vcs")).unwrap();

    let after = store.get_by_id(id).unwrap();
    assert_eq!(after.last_used, before.last_used);
}

#[test]
fn test_cascade_then_recency_listing() {
    let dir = TempDir::new().unwrap();
    let db = Db::new(dir.path().join("commands.db")).unwrap();
    let store = CommandStore::new(db.clone());

    let ls = store.add("ls-la", "ls -la", "fs,list", "").unwrap();
    let push = store.add("push", "git push origin", "vcs", "").unwrap();
    let status = store.add("status", "git status", "vcs", "").unwrap();

    // storage query on the tag, in-memory refinement on the command text
    let filters = SearchFilters {
        command: "push".to_string(),
        alias: String::new(),
        tag: "vcs".to_string(),
    };
    let found = refine::cascade(&store, &filters).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, Some(push));

    // selecting the match bumps it to the top of the recency listing
    db.get_connection()
        .execute("UPDATE command SET last_used = 1000", [])
        .unwrap();
    store.touch_last_used(Some(push)).unwrap();

    let recent = store.list_all(10, true).unwrap();
    assert_eq!(recent[0].id, Some(push));
    let rest: Vec<_> = recent[1..].iter().map(|c| c.id).collect();
    assert_eq!(rest, vec![Some(status), Some(ls)]);
}
