use proptest::prelude::*;

use inode_core::{InodeAttrs, InodeFolder, InodeId};

#[derive(Debug, Clone)]
enum Op {
    Add(InodeId),
    Remove(InodeId),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0i64..20).prop_map(Op::Add),
        (0i64..20).prop_map(Op::Remove),
    ]
}

proptest! {
    #[test]
    fn adds_keep_distinct_ids_in_first_insertion_order(ids in prop::collection::vec(-50i64..50, 0..64)) {
        let mut folder = InodeFolder::new("p", 1, 0, 0);
        let mut expected: Vec<InodeId> = Vec::new();
        for id in ids {
            folder.add_child(id);
            if !expected.contains(&id) {
                expected.push(id);
            }
        }
        prop_assert_eq!(folder.children_ids(), expected.as_slice());
        prop_assert_eq!(folder.number_of_children(), expected.len());
    }

    #[test]
    fn mixed_ops_match_model(ops in prop::collection::vec(op_strategy(), 0..100)) {
        let mut folder = InodeFolder::new("p", 1, 0, 0);
        let mut model: Vec<InodeId> = Vec::new();
        for op in ops {
            match op {
                Op::Add(id) => {
                    folder.add_child(id);
                    if !model.contains(&id) {
                        model.push(id);
                    }
                }
                Op::Remove(id) => {
                    let before = folder.number_of_children();
                    let removed = folder.remove_child(id);
                    let expected = model.iter().position(|&c| c == id);
                    prop_assert_eq!(removed, expected.is_some());
                    if let Some(pos) = expected {
                        model.remove(pos);
                        prop_assert_eq!(folder.number_of_children(), before - 1);
                    } else {
                        prop_assert_eq!(folder.number_of_children(), before);
                    }
                }
            }
        }
        prop_assert_eq!(folder.children_ids(), model.as_slice());
    }

    #[test]
    fn reverse_id_is_an_involution(id in any::<i64>()) {
        let mut folder = InodeFolder::new("p", id, 0, 0);
        folder.reverse_id();
        prop_assert_eq!(folder.id(), id.wrapping_neg());
        folder.reverse_id();
        prop_assert_eq!(folder.id(), id);
    }
}
