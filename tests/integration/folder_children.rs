use std::collections::HashMap;

use inode_core::{FolderKind, Inode, InodeFile, InodeFolder, InodeId, InodeType};

fn now() -> i64 {
    inode_core::types::now_ms()
}

#[test]
fn add_children_preserves_first_insertion_order() {
    let mut folder = InodeFolder::new("testFolder1", 1, 0, now());
    folder.add_child(2);
    folder.add_child(3);
    assert_eq!(folder.children_ids()[0], 2);
    assert_eq!(folder.children_ids()[1], 3);
}

#[test]
fn same_id_children_stored_once() {
    let mut folder = InodeFolder::new("testFolder1", 1, 0, now());
    folder.add_child(2);
    folder.add_child(2);
    assert_eq!(folder.children_ids()[0], 2);
    assert_eq!(folder.number_of_children(), 1);
}

#[test]
fn remove_child_by_id() {
    let mut folder = InodeFolder::new("testFolder1", 1, 0, now());
    folder.add_child(2);
    assert_eq!(folder.number_of_children(), 1);
    folder.remove_child(2);
    assert_eq!(folder.number_of_children(), 0);
}

#[test]
fn remove_non_existent_child_is_noop() {
    let mut folder = InodeFolder::new("testFolder1", 1, 0, now());
    folder.add_child(2);
    assert_eq!(folder.number_of_children(), 1);
    assert!(!folder.remove_child(3));
    assert_eq!(folder.number_of_children(), 1);
    assert!(folder.children_ids().contains(&2));
}

#[test]
fn remove_child_by_name_through_index() {
    let mut folder = InodeFolder::new("testFolder1", 1, 0, now());
    let file1 = InodeFile::new("testFile1", 2, 1, 1000, now());
    let file2 = InodeFile::new("testFile2", 3, 1, 1000, now());
    folder.add_child(2);
    folder.add_child(3);
    folder.add_child(4);

    let mut index: HashMap<InodeId, Inode> = HashMap::with_capacity(2);
    index.insert(2, file1.into());
    index.insert(3, file2.into());

    assert_eq!(folder.number_of_children(), 3);
    assert!(folder.remove_child_by_name("testFile1", &index));
    assert_eq!(folder.number_of_children(), 2);
    assert!(!folder.children_ids().contains(&2));
    assert_eq!(folder.children_ids(), &[3, 4]);
}

#[test]
fn remove_child_by_name_picks_first_match() {
    let mut folder = InodeFolder::new("dup", 1, 0, now());
    let mut index: HashMap<InodeId, Inode> = HashMap::new();
    index.insert(5, InodeFile::new("same", 5, 1, 0, now()).into());
    index.insert(6, InodeFolder::new("same", 6, 1, now()).into());
    folder.add_child(6);
    folder.add_child(5);

    assert!(folder.remove_child_by_name("same", &index));
    assert_eq!(folder.children_ids(), &[5]);
}

#[test]
fn raw_table_flag_fixed_at_construction() {
    let folder = InodeFolder::new("testFolder1", 1, 0, now());
    let raw_table = InodeFolder::with_type("testRawTable1", 2, 0, FolderKind::RawTable, now());
    assert!(!folder.is_raw_table());
    assert!(raw_table.is_raw_table());

    let from_type = InodeFolder::try_with_type("t", 3, 0, InodeType::RawTable, now()).unwrap();
    assert!(from_type.is_raw_table());
}

#[test]
fn raw_table_manages_children_like_folder() {
    let mut table = InodeFolder::with_type("events", 10, 1, FolderKind::RawTable, now());
    for column in [11, 12, 11, 13] {
        table.add_child(column);
    }
    assert!(table.remove_child(12));
    assert_eq!(table.children_ids(), &[11, 13]);
}
