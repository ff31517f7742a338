use std::cmp::Ordering;
use std::collections::BTreeSet;

use inode_core::{Inode, InodeAttrs, InodeFile, InodeFolder, InodeType};

#[test]
fn comparable_by_id() {
    let inode1 = InodeFolder::new("test1", 1, 0, 0);
    let inode2 = InodeFolder::new("test2", 2, 0, 0);
    assert_eq!(inode1.compare_to(&inode2), -1);
    assert_eq!(inode1.cmp(&inode2), Ordering::Less);
}

#[test]
fn equals_by_id_only() {
    let inode1 = InodeFolder::new("test1", 1, 0, 0);
    let inode2 = InodeFolder::new("test2", 1, 0, 0);
    let inode3 = InodeFolder::new("test1", 3, 0, 0);
    assert_eq!(inode1, inode2);
    assert_ne!(inode1, inode3);
}

#[test]
fn sorted_walk_follows_ids() {
    let inodes: BTreeSet<Inode> = [
        Inode::from(InodeFile::new("c", 30, 1, 0, 0)),
        Inode::from(InodeFolder::new("a", 10, 1, 0)),
        Inode::from(InodeFile::new("b", -20, 1, 0, 0)),
    ]
    .into_iter()
    .collect();

    let ids: Vec<i64> = inodes.iter().map(|i| i.id()).collect();
    assert_eq!(ids, vec![-20, 10, 30]);
}

#[test]
fn is_directory_and_is_file() {
    let folder = InodeFolder::new("test1", 1, 0, 0);
    assert!(folder.is_directory());
    assert!(!folder.is_file());

    let file = InodeFile::new("f", 2, 1, 0, 0);
    assert!(file.is_file());
    assert!(!file.is_directory());
}

#[test]
fn inode_type_and_id() {
    let folder = InodeFolder::new("test1", 1, 0, 0);
    assert_eq!(folder.inode_type(), InodeType::Folder);
    assert_eq!(folder.id(), 1);
}

#[test]
fn reverse_id_negates() {
    let mut inode = InodeFolder::new("test1", 1, 0, 0);
    inode.reverse_id();
    assert_eq!(inode.id(), -1);
}

#[test]
fn set_name_and_parent() {
    let mut inode = InodeFolder::new("test1", 1, 0, 0);
    inode.add_child(5);
    assert_eq!(inode.name(), "test1");
    inode.set_name("test2");
    assert_eq!(inode.name(), "test2");

    assert_eq!(inode.parent_id(), 0);
    inode.set_parent_id(2);
    assert_eq!(inode.parent_id(), 2);

    assert_eq!(inode.id(), 1);
    assert_eq!(inode.inode_type(), InodeType::Folder);
    assert_eq!(inode.children_ids(), &[5]);
}
