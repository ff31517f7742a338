use inode_core::config::NamespaceConfig;
use inode_core::{
    ChildResolution, FolderKind, InodeAttrs, InodeError, InodeFile, InodeFolder, InodeTable,
    NO_PARENT,
};

fn build_tree() -> InodeTable {
    let mut table = InodeTable::new();
    table.insert(InodeFolder::new("", 1, NO_PARENT, 0)).unwrap();
    table.insert(InodeFolder::new("logs", 2, NO_PARENT, 0)).unwrap();
    table
        .insert(InodeFolder::with_type("metrics", 3, NO_PARENT, FolderKind::RawTable, 0))
        .unwrap();
    table.insert(InodeFile::new("app.log", 4, NO_PARENT, 100, 0)).unwrap();
    table.attach(1, 2).unwrap();
    table.attach(1, 3).unwrap();
    table.attach(2, 4).unwrap();
    table
}

#[test]
fn tree_children_resolve_through_table() {
    let table = build_tree();
    let root = table.folder(1).unwrap();
    let names: Vec<&str> = root.children(&table).into_iter().map(|c| c.name()).collect();
    assert_eq!(names, vec!["logs", "metrics"]);
    assert!(root.child("metrics", &table).unwrap().is_raw_table());
    assert_eq!(table.get(4).unwrap().parent_id(), 2);
}

#[test]
fn rename_replace_sequence_uses_reversal() {
    let mut table = build_tree();

    // Supersede app.log: reverse the old record, then link a new one under the same name
    let old = table.reverse(4).unwrap();
    assert_eq!(old, -4);
    table.detach(2, 4).unwrap();
    table.insert(InodeFile::new("app.log", 5, NO_PARENT, 0, 0)).unwrap();
    table.attach(2, 5).unwrap();

    let logs = table.folder(2).unwrap();
    assert_eq!(logs.find_child_id("app.log", &table), Some(5));
    assert_eq!(table.get(-4).unwrap().name(), "app.log");
    assert_eq!(table.get(-4).unwrap().parent_id(), 2);
}

#[test]
fn configured_strict_resolution_reports_dangling_child() {
    let config = NamespaceConfig {
        strict_child_resolution: true,
    };
    let mut table = InodeTable::from_config(&config);
    assert_eq!(table.resolution(), ChildResolution::Strict);

    table.insert(InodeFolder::new("", 1, NO_PARENT, 0)).unwrap();
    table.insert(InodeFile::new("a", 2, NO_PARENT, 0, 0)).unwrap();
    table.attach(1, 2).unwrap();
    table.remove(2);

    assert_eq!(
        table.remove_child_by_name(1, "a"),
        Err(InodeError::MissingFromIndex { folder: 1, child: 2 })
    );
    assert_eq!(table.folder(1).unwrap().children_ids(), &[2]);
}

#[test]
fn lenient_resolution_skips_dangling_child() {
    let mut table = build_tree();
    table.remove(2);
    assert_eq!(table.remove_child_by_name(1, "metrics"), Ok(Some(3)));
    assert_eq!(table.folder(1).unwrap().children_ids(), &[2]);
}

#[test]
fn file_completion_through_table() {
    let mut table = build_tree();
    let file = table.get_mut(4).and_then(|i| i.as_file_mut()).unwrap();
    file.set_length_bytes(4096).unwrap();
    file.set_complete();
    assert_eq!(file.set_length_bytes(1), Err(InodeError::FileComplete(4)));
    assert_eq!(table.get(4).unwrap().as_file().unwrap().length_bytes(), 4096);
}
