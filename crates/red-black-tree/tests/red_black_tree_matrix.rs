use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use red_black_tree::{Color, Direction, Node, NodeId, RbTree, Slot, TreeError};

fn insert_value(tree: &mut RbTree<i32>, value: i32) -> NodeId {
    let id = tree.insert(Node::new(value)).unwrap();
    if let Err(err) = tree.validate() {
        panic!("invalid red-black tree after insert({value}): {err}");
    }
    id
}

fn delete_value(tree: &mut RbTree<i32>, value: i32) -> bool {
    let Some(id) = tree.search(&value).map(|n| n.id()) else {
        return false;
    };
    let node = tree.delete(id).unwrap();
    assert_eq!(*node.data(), value);
    if let Err(err) = tree.validate() {
        panic!("invalid red-black tree after delete({value}): {err}");
    }
    true
}

fn tree_of(values: &[i32]) -> RbTree<i32> {
    let mut tree = RbTree::new();
    for &v in values {
        insert_value(&mut tree, v);
    }
    tree
}

fn in_order(tree: &RbTree<i32>) -> Vec<i32> {
    tree.iter().map(|n| *n.data()).collect()
}

#[test]
fn rb_tree_new_tree_matrix() {
    let tree = RbTree::<i32>::new();
    assert_eq!(tree.len(), 0);
    assert!(tree.is_empty());
    assert!(!tree.any());
    assert!(tree.root().is_none());
    assert!(tree.min().is_none());
    assert!(tree.search(&1).is_none());
    assert!(!tree.contains(&1));
    tree.validate().unwrap();
}

#[test]
fn rb_tree_first_insert_becomes_black_root_matrix() {
    let mut tree = RbTree::new();
    let id = insert_value(&mut tree, 10);

    let root = tree.root().unwrap();
    assert_eq!(root.id(), id);
    assert!(root.is_black());
    assert!(root.left().is_sentinel());
    assert!(root.right().is_sentinel());
    assert_eq!(root.parent(), None);
    assert_eq!(tree.min().map(|n| n.id()), Some(id));
    assert_eq!(tree.len(), 1);
    assert!(tree.any());
}

#[test]
fn rb_tree_lesser_greater_and_equal_placement_matrix() {
    let mut tree = tree_of(&[10]);
    let five = insert_value(&mut tree, 5);
    let fifteen = insert_value(&mut tree, 15);

    let root = tree.root().unwrap();
    assert_eq!(root.left().id(), Slot::Node(five));
    assert_eq!(root.right().id(), Slot::Node(fifteen));
    assert_eq!(root.left().color(), Color::Red);
    assert_eq!(root.right().color(), Color::Red);
    assert_eq!(tree.min().map(|n| n.id()), Some(five));

    let mut tree = tree_of(&[10]);
    let again = insert_value(&mut tree, 10);
    let root = tree.root().unwrap();
    assert_eq!(root.right().id(), Slot::Node(again));
    assert!(root.left().is_sentinel());
    assert_eq!(tree.min().map(|n| n.id()), Some(root.id()));
}

#[test]
fn rb_tree_delete_node_with_two_children_matrix() {
    let mut tree = tree_of(&[10, 5, 15, 1, 9]);
    let root = tree.root().unwrap();
    assert_eq!(*root.data(), 10);
    assert!(root.is_black());

    assert!(delete_value(&mut tree, 5));

    let root = tree.root().unwrap();
    assert_eq!(*root.data(), 10);
    assert!(root.is_black());
    let Slot::Node(left) = root.left() else {
        panic!("left child missing");
    };
    assert_eq!(*left.data(), 1);
    assert!(left.is_black());
    assert!(left.left().is_sentinel());
    assert_eq!(left.right().data(), Some(&9));
    assert_eq!(left.right().color(), Color::Red);
    assert_eq!(root.right().data(), Some(&15));
    assert_eq!(root.right().color(), Color::Black);
    assert_eq!(tree.min().map(|n| *n.data()), Some(1));
    assert_eq!(tree.len(), 4);
}

#[test]
fn rb_tree_delete_root_with_single_child_matrix() {
    let mut tree = tree_of(&[10, 5]);
    assert!(delete_value(&mut tree, 10));

    let root = tree.root().unwrap();
    assert_eq!(*root.data(), 5);
    assert!(root.is_black());
    assert!(root.left().is_sentinel());
    assert!(root.right().is_sentinel());
    assert_eq!(tree.len(), 1);
}

#[test]
fn rb_tree_delete_last_node_empties_tree_matrix() {
    let mut tree = tree_of(&[7]);
    assert!(delete_value(&mut tree, 7));
    assert!(tree.root().is_none());
    assert!(tree.min().is_none());
    assert!(tree.is_empty());
}

#[test]
fn rb_tree_handles_follow_their_data_across_deletes_matrix() {
    let mut tree = RbTree::new();
    let ids: Vec<(i32, NodeId)> = [10, 5, 15, 1, 9]
        .into_iter()
        .map(|v| (v, insert_value(&mut tree, v)))
        .collect();

    let five = ids[1].1;
    let removed = tree.delete(five).unwrap();
    assert_eq!(removed.into_data(), 5);
    tree.validate().unwrap();

    for &(value, id) in &ids {
        if value == 5 {
            assert_eq!(tree.data(id), None);
        } else {
            assert_eq!(tree.data(id), Some(&value));
        }
    }
}

#[test]
fn rb_tree_explicit_insert_straightens_zig_zag_matrix() {
    let mut tree = RbTree::new();
    let root = tree.insert_at(Node::new("root"), None, None).unwrap();
    let left = tree
        .insert_at(Node::new("left child"), Some(root), Some(Direction::Left))
        .unwrap();
    assert_eq!(tree.len(), 2);
    assert_eq!(tree.get(left).unwrap().color(), Color::Red);
    assert_eq!(tree.min().map(|n| n.id()), Some(left));

    tree.insert_at(
        Node::new("left child's right child"),
        Some(left),
        Some(Direction::Right),
    )
    .unwrap();
    assert_eq!(tree.len(), 3);

    let top = tree.root().unwrap();
    assert_eq!(*top.data(), "left child's right child");
    assert!(top.is_black());
    assert_eq!(top.left().data(), Some(&"left child"));
    assert_eq!(top.left().color(), Color::Red);
    assert_eq!(top.right().data(), Some(&"root"));
    assert_eq!(top.right().color(), Color::Red);
    assert_eq!(tree.min().map(|n| n.id()), Some(left));
    tree.validate().unwrap();
}

#[test]
fn rb_tree_rejected_inserts_leave_tree_untouched_matrix() {
    let mut tree = RbTree::new();
    let root = tree.insert_at(Node::new(10), None, None).unwrap();
    tree.insert_at(Node::new(5), Some(root), Some(Direction::Left))
        .unwrap();
    let before = tree.print();

    assert_eq!(
        tree.insert_at(Node::new(1), None, None),
        Err(TreeError::RootOccupied)
    );
    assert_eq!(
        tree.insert_at(Node::new(1), Some(root), None),
        Err(TreeError::MissingDirection)
    );
    let err = tree
        .insert_at(Node::new(1), Some(root), Some(Direction::Left))
        .unwrap_err();
    assert_eq!(err, TreeError::SlotOccupied(Direction::Left));
    assert_eq!(err.to_string(), "target parent already has left child");

    assert_eq!(tree.len(), 2);
    assert_eq!(tree.print(), before);
    tree.validate().unwrap();
}

#[test]
fn rb_tree_rejected_deletes_leave_tree_untouched_matrix() {
    let mut tree = tree_of(&[10, 5, 15]);
    let mut other = tree_of(&[10]);
    let foreign = other.root().unwrap().id();
    let before = tree.print();

    assert_eq!(tree.delete(Slot::Sentinel).unwrap_err(), TreeError::Sentinel);
    let five = tree.search(&5).unwrap();
    let sentinel = five.left().id();
    assert_eq!(tree.delete(sentinel).unwrap_err(), TreeError::Sentinel);
    assert_eq!(tree.delete(foreign).unwrap_err(), TreeError::ForeignNode);

    assert_eq!(tree.len(), 3);
    assert_eq!(tree.print(), before);

    let five = tree.search(&5).unwrap().id();
    tree.delete(five).unwrap();
    assert_eq!(tree.delete(five).unwrap_err(), TreeError::StaleNode);
    assert_eq!(
        tree.insert_at(Node::new(4), Some(five), Some(Direction::Left)),
        Err(TreeError::StaleNode)
    );
    assert_eq!(tree.len(), 2);
    assert_eq!(other.delete(foreign).unwrap().into_data(), 10);
}

#[test]
fn rb_tree_shift_drains_in_order_matrix() {
    let mut tree = tree_of(&[50, 20, 80, 20, 10, 90, 60, 30]);
    let mut drained = Vec::new();
    while let Some(node) = tree.shift().unwrap() {
        drained.push(node.into_data());
        tree.validate().unwrap();
    }
    assert_eq!(drained, vec![10, 20, 20, 30, 50, 60, 80, 90]);
    assert!(tree.shift().unwrap().is_none());
    assert!(tree.root().is_none());
}

#[test]
fn rb_tree_insert_delete_various_numbers_matrix() {
    let mut tree = tree_of(&[10, 11, 12, 50, 60, 25, 100, 88, 33, 22, 55, 59, 51]);
    assert_eq!(tree.len(), 13);

    assert!(delete_value(&mut tree, 100));
    assert_eq!(tree.len(), 12);

    assert!(delete_value(&mut tree, 33));
    assert!(!delete_value(&mut tree, 33));
    assert_eq!(tree.len(), 11);

    for v in [10, 60, 22] {
        assert!(delete_value(&mut tree, v));
    }
    assert_eq!(tree.len(), 8);
    assert_eq!(in_order(&tree), vec![11, 12, 25, 50, 51, 55, 59, 88]);
}

#[test]
fn rb_tree_numbers_both_directions_from_50_matrix() {
    let mut tree = RbTree::new();
    for i in 0..=100 {
        insert_value(&mut tree, 50 + i);
        insert_value(&mut tree, 50 - i);
        assert_eq!(tree.len(), (i * 2 + 2) as usize);
    }
    for i in 0..=100 {
        assert!(delete_value(&mut tree, 50 - i));
        assert!(delete_value(&mut tree, 50 + i));
    }
    assert!(tree.root().is_none());
}

#[test]
fn rb_tree_shuffled_round_trip_matrix() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut values: Vec<i32> = (0..1000).collect();
    values.shuffle(&mut rng);

    let mut tree = RbTree::with_capacity(values.len());
    for &v in &values {
        tree.insert(Node::new(v)).unwrap();
    }
    tree.validate().unwrap();
    assert_eq!(in_order(&tree), (0..1000).collect::<Vec<_>>());

    values.shuffle(&mut rng);
    for (removed, &v) in values.iter().enumerate() {
        let id = tree.search(&v).unwrap().id();
        assert_eq!(tree.delete(id).unwrap().into_data(), v);
        assert_eq!(tree.len(), values.len() - removed - 1);
        if removed % 50 == 0 {
            tree.validate().unwrap();
        }
    }
    assert!(tree.root().is_none());
    assert!(tree.min().is_none());
    tree.validate().unwrap();
}

#[test]
fn rb_tree_search_select_and_include_matrix() {
    let tree = tree_of(&(1..=20).collect::<Vec<_>>());

    assert_eq!(tree.search(&7).map(|n| *n.data()), Some(7));
    assert!(tree.search(&21).is_none());
    assert!(tree.contains(&20));
    assert!(!tree.contains(&0));

    let first_over_ten = tree.search_by(|n| *n.data() > 10);
    assert_eq!(first_over_ten.map(|n| *n.data()), Some(11));
    assert!(tree.search_by(|n| *n.data() > 20).is_none());

    let evens: Vec<i32> = tree
        .select(|n| n.data() % 2 == 0)
        .into_iter()
        .map(|n| *n.data())
        .collect();
    assert_eq!(evens, vec![2, 4, 6, 8, 10, 12, 14, 16, 18, 20]);
    assert!(tree.select(|n| *n.data() > 100).is_empty());

    let reds = tree.select(|n| n.is_red());
    assert!(reds.iter().all(|n| n.parent().is_some()));
}

#[test]
fn rb_tree_clear_stales_handles_matrix() {
    let mut tree = tree_of(&[3, 1, 2]);
    let two = tree.search(&2).unwrap().id();
    tree.clear();

    assert!(tree.is_empty());
    assert!(tree.root().is_none());
    assert!(tree.min().is_none());
    assert!(tree.get(two).is_none());
    assert_eq!(tree.delete(two).unwrap_err(), TreeError::StaleNode);
    tree.validate().unwrap();

    insert_value(&mut tree, 4);
    assert!(tree.get(two).is_none());
    assert_eq!(in_order(&tree), vec![4]);
}

#[test]
fn rb_tree_custom_comparator_matrix() {
    let mut tree = RbTree::with_comparator(|a: &i32, b: &i32| b.cmp(a) as i32);
    for v in [3, 9, 1, 7, 5] {
        tree.insert(Node::new(v)).unwrap();
    }
    tree.validate().unwrap();
    let values: Vec<i32> = tree.iter().map(|n| *n.data()).collect();
    assert_eq!(values, vec![9, 7, 5, 3, 1]);
    assert_eq!(tree.min().map(|n| *n.data()), Some(9));
}

#[derive(Debug, PartialEq)]
struct Job {
    priority: u32,
    name: &'static str,
}

#[test]
fn rb_tree_priority_queue_keeps_ties_fifo_matrix() {
    let mut queue = RbTree::with_comparator(|a: &Job, b: &Job| a.priority.cmp(&b.priority) as i32);
    for (priority, name) in [(2, "a"), (1, "b"), (2, "c"), (1, "d"), (3, "e"), (1, "f")] {
        queue.insert(Node::new(Job { priority, name })).unwrap();
        queue.validate().unwrap();
    }

    let mut order = Vec::new();
    while let Some(job) = queue.shift().unwrap() {
        order.push(job.into_data().name);
    }
    assert_eq!(order, vec!["b", "d", "f", "a", "c", "e"]);
}

#[test]
fn rb_tree_print_and_debug_matrix() {
    let tree = tree_of(&[10, 5]);
    assert_eq!(
        tree.print(),
        "Node[0] black 10\nL=Node[1] red 5\n  L=∅\n  R=∅\nR=∅"
    );
    assert_eq!(format!("{tree:?}"), "{5, 10}");
    assert_eq!(RbTree::<i32>::new().print(), "∅");
}

#[test]
fn rb_tree_clone_is_independent_matrix() {
    let mut tree = tree_of(&[2, 1, 3]);
    let one = tree.search(&1).unwrap().id();
    let copy = tree.clone();

    assert_eq!(in_order(&copy), vec![1, 2, 3]);
    assert!(copy.get(one).is_none());
    copy.validate().unwrap();

    tree.delete(one).unwrap();
    assert_eq!(in_order(&tree), vec![2, 3]);
    assert_eq!(in_order(&copy), vec![1, 2, 3]);
}
