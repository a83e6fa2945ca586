use avl_tree::{AvlTree, Balance};

fn forward<T: Copy>(tree: &AvlTree<T>) -> Vec<T>
where
    T: PartialOrd,
{
    let mut out = Vec::new();
    let mut curr = tree.get_smallest();
    while let Some(node) = curr {
        out.push(*node.element());
        curr = node.next();
    }
    out
}

fn backward<T: Copy>(tree: &AvlTree<T>) -> Vec<T>
where
    T: PartialOrd,
{
    let mut out = Vec::new();
    let mut curr = tree.get_largest();
    while let Some(node) = curr {
        out.push(*node.element());
        curr = node.previous();
    }
    out
}

const SHUFFLED: [i32; 20] = [16, 13, 15, 14, 2, 0, 12, 9, 8, 5, 11, 18, 19, 17, 4, 7, 1, 3, 6, 10];

#[test]
fn shuffled_insert_matrix() {
    let mut tree = AvlTree::new();
    for v in SHUFFLED {
        tree.insert(v);
        tree.assert_valid().unwrap();
    }

    assert_eq!(tree.size(), 20);
    assert_eq!(tree.len(), 20);
    for v in SHUFFLED {
        assert_eq!(tree.get_not_smaller(&v).map(|n| *n.element()), Some(v));
        assert_eq!(tree.get_not_larger(&v).map(|n| *n.element()), Some(v));
    }
    assert_eq!(forward(&tree), (0..20).collect::<Vec<_>>());
    assert_eq!(backward(&tree), (0..20).rev().collect::<Vec<_>>());
    // 20 nodes fit in 5 levels; AVL allows at most 6.
    assert!(tree.height() <= 6);
}

#[test]
fn duplicates_matrix() {
    let mut tree = AvlTree::new();
    for v in [1, 1, 3, 3, 4, 5, 6, 7, 7, 7, 7, 7] {
        tree.insert(v);
        tree.assert_valid().unwrap();
    }
    assert_eq!(tree.size(), 12);

    let three = tree.get_not_smaller(&3).unwrap();
    assert_eq!(*three.element(), 3);
    assert_eq!(three.previous().map(|n| *n.element()), Some(1));
    let other_three = three.next().unwrap();
    assert_eq!(*other_three.element(), 3);
    assert_ne!(three, other_three);
    assert_ne!(three.id(), other_three.id());

    let last_seven = tree.get_not_larger(&7).unwrap();
    assert_eq!(last_seven, tree.get_largest().unwrap());
    assert_eq!(forward(&tree), vec![1, 1, 3, 3, 4, 5, 6, 7, 7, 7, 7, 7]);
}

#[test]
fn delete_non_member_matrix() {
    let mut tree: AvlTree<i32> = SHUFFLED.into_iter().collect();
    assert!(!tree.delete(&-2000));
    assert!(!tree.delete(&2000));
    assert!(!tree.delete(&25));
    assert_eq!(tree.size(), 20);
    tree.assert_valid().unwrap();
}

#[test]
fn absent_input_matrix() {
    let mut tree = AvlTree::<i32>::new();
    assert_eq!(tree.insert(None::<i32>), None);
    assert!(tree.is_empty());
    assert!(!tree.delete(None::<&i32>));

    tree.insert(Some(4));
    assert_eq!(tree.size(), 1);
    assert!(!tree.delete(None::<&i32>));
    assert_eq!(tree.size(), 1);
}

#[test]
fn empty_tree_matrix() {
    let mut tree = AvlTree::<i32>::new();
    assert!(tree.is_empty());
    assert_eq!(tree.size(), 0);
    assert_eq!(tree.height(), 0);
    assert!(tree.get_smallest().is_none());
    assert!(tree.get_largest().is_none());
    assert!(tree.get_not_smaller(&0).is_none());
    assert!(tree.get_not_larger(&0).is_none());
    assert!(tree.root().is_none());
    assert!(!tree.delete(&0));
    assert_eq!(tree.iter().next(), None);
    tree.assert_valid().unwrap();
}

#[test]
fn single_node_lifecycle_matrix() {
    let mut tree = AvlTree::new();
    tree.insert(42);
    assert!(!tree.is_empty());
    assert_eq!(tree.get_smallest(), tree.get_largest());
    assert!(tree.get_smallest().unwrap().next().is_none());
    assert!(tree.get_smallest().unwrap().previous().is_none());

    assert!(tree.delete(&42));
    assert!(tree.is_empty());
    assert_eq!(tree.size(), 0);
    assert!(tree.root().is_none());
    tree.assert_valid().unwrap();

    tree.insert(7);
    assert_eq!(forward(&tree), vec![7]);
}

#[test]
fn nearest_match_matrix() {
    let tree: AvlTree<i32> = [10, 20, 30, 40, 50].into_iter().collect();

    let not_smaller = |r: i32| tree.get_not_smaller(&r).map(|n| *n.element());
    let not_larger = |r: i32| tree.get_not_larger(&r).map(|n| *n.element());

    assert_eq!(not_smaller(5), Some(10));
    assert_eq!(not_smaller(10), Some(10));
    assert_eq!(not_smaller(11), Some(20));
    assert_eq!(not_smaller(50), Some(50));
    assert_eq!(not_smaller(51), None);

    assert_eq!(not_larger(5), None);
    assert_eq!(not_larger(10), Some(10));
    assert_eq!(not_larger(29), Some(20));
    assert_eq!(not_larger(50), Some(50));
    assert_eq!(not_larger(99), Some(50));
}

#[test]
fn ascending_ladder_matrix() {
    let mut tree = AvlTree::new();
    for i in 0..300 {
        tree.insert(i);
        tree.assert_valid().unwrap();
    }
    assert_eq!(tree.size(), 300);
    // A perfectly balanced tree of 300 nodes has 9 levels; AVL stays within 1.44 log2.
    assert!(tree.height() <= 12);

    for i in (0..300).step_by(3) {
        assert!(tree.delete(&i));
        tree.assert_valid().unwrap();
    }
    assert_eq!(tree.size(), 200);
    for i in 0..300 {
        let found = tree.get_not_smaller(&i).map(|n| *n.element());
        if i % 3 == 0 {
            assert_ne!(found, Some(i));
        } else {
            assert_eq!(found, Some(i));
        }
    }
}

#[test]
fn descending_drain_matrix() {
    let mut tree: AvlTree<i32> = (0..64).rev().collect();
    tree.assert_valid().unwrap();
    for i in (0..64).rev() {
        assert!(tree.delete(&i));
        tree.assert_valid().unwrap();
        assert_eq!(tree.size(), i as usize);
    }
    assert!(tree.is_empty());
}

#[test]
fn root_balance_matrix() {
    let tree: AvlTree<i32> = [2, 1].into_iter().collect();
    assert_eq!(tree.root().unwrap().balance(), Balance::LeftHigh);

    let tree: AvlTree<i32> = [1, 2].into_iter().collect();
    assert_eq!(tree.root().unwrap().balance(), Balance::RightHigh);

    // The third insertion forces a rotation and leaves a balanced root.
    let tree: AvlTree<i32> = [1, 2, 3].into_iter().collect();
    let root = tree.root().unwrap();
    assert_eq!(*root.element(), 2);
    assert_eq!(root.balance(), Balance::Balanced);
    assert_eq!(root.left().map(|n| *n.element()), Some(1));
    assert_eq!(root.right().map(|n| *n.element()), Some(3));
    assert_eq!(root.left().and_then(|n| n.parent()), Some(root));
}

#[test]
fn subtree_navigation_matrix() {
    let tree: AvlTree<i32> = (1..=7).collect();
    let root = tree.root().unwrap();
    assert_eq!(*root.element(), 4);
    assert_eq!(root.size(), 7);
    assert_eq!(*root.smallest().element(), 1);
    assert_eq!(*root.largest().element(), 7);

    let right = root.right().unwrap();
    assert_eq!(right.size(), 3);
    assert_eq!(*right.smallest().element(), 5);
    assert_eq!(*right.largest().element(), 7);
}

#[test]
fn iterator_matrix() {
    let tree: AvlTree<i32> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();

    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![1, 3, 4, 5, 7, 8, 9]);
    assert_eq!(tree.iter().rev().copied().collect::<Vec<_>>(), vec![9, 8, 7, 5, 4, 3, 1]);
    assert_eq!(tree.iter().len(), 7);

    let mut it = tree.iter();
    assert_eq!(it.next(), Some(&1));
    assert_eq!(it.next_back(), Some(&9));
    assert_eq!(it.next(), Some(&3));
    assert_eq!(it.next_back(), Some(&8));
    assert_eq!(it.len(), 3);
    assert_eq!(it.by_ref().copied().collect::<Vec<_>>(), vec![4, 5, 7]);
    assert_eq!(it.next(), None);
    assert_eq!(it.next_back(), None);

    let mut sum = 0;
    for v in &tree {
        sum += v;
    }
    assert_eq!(sum, 37);
}

#[test]
fn custom_comparator_matrix() {
    let mut tree = AvlTree::with_comparator(|a: &i32, b: &i32| b - a);
    tree.extend([3, 1, 2, 5, 4]);
    tree.assert_valid().unwrap();
    assert!((tree.comparator())(&1, &2) > 0);

    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![5, 4, 3, 2, 1]);
    assert_eq!(tree.get_smallest().map(|n| *n.element()), Some(5));
    // "Not smaller" follows the comparator's order.
    assert_eq!(tree.get_not_smaller(&6).map(|n| *n.element()), Some(5));
    assert_eq!(tree.get_not_larger(&0).map(|n| *n.element()), Some(1));
    assert!(tree.delete(&3));
    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![5, 4, 2, 1]);
}

#[derive(Clone, Debug, PartialEq)]
struct Job {
    priority: u8,
    name: &'static str,
}

#[test]
fn equal_elements_keep_insertion_order_matrix() {
    let mut tree = AvlTree::with_comparator(|a: &Job, b: &Job| a.priority as i32 - b.priority as i32);
    let jobs = [
        Job { priority: 2, name: "a" },
        Job { priority: 1, name: "b" },
        Job { priority: 2, name: "c" },
        Job { priority: 2, name: "d" },
        Job { priority: 1, name: "e" },
        Job { priority: 3, name: "f" },
        Job { priority: 2, name: "g" },
    ];
    tree.extend(jobs.iter().cloned());
    tree.assert_valid().unwrap();

    let names: Vec<_> = tree.iter().map(|j| j.name).collect();
    assert_eq!(names, vec!["b", "e", "a", "c", "d", "g", "f"]);

    let probe = Job { priority: 2, name: "" };
    assert_eq!(tree.get_not_smaller(&probe).map(|n| n.element().name), Some("a"));
    assert_eq!(tree.get_not_larger(&probe).map(|n| n.element().name), Some("g"));
}

#[test]
fn with_capacity_matrix() {
    let mut tree = AvlTree::with_capacity(16);
    tree.extend(["pear", "apple", "fig"]);
    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec!["apple", "fig", "pear"]);

    let mut by_len = AvlTree::with_capacity_and_comparator(4, |a: &&str, b: &&str| a.len() as i32 - b.len() as i32);
    by_len.extend(["pear", "apple", "fig"]);
    assert_eq!(by_len.iter().copied().collect::<Vec<_>>(), vec!["fig", "pear", "apple"]);
}

#[test]
fn clone_is_independent_matrix() {
    let mut a: AvlTree<i32> = (0..10).collect();
    let b = a.clone();
    assert!(a.delete(&5));
    assert_eq!(a.size(), 9);
    assert_eq!(b.size(), 10);
    assert_eq!(b.get_not_smaller(&5).map(|n| *n.element()), Some(5));
}
