use splay_tree::{ord_comparator, Node, SplayTree};

#[derive(Clone, Debug, Default)]
struct Entry {
    key: i32,
    l: Option<u32>,
    r: Option<u32>,
}

impl Node for Entry {
    fn l(&self) -> Option<u32> {
        self.l
    }

    fn r(&self) -> Option<u32> {
        self.r
    }

    fn set_l(&mut self, v: Option<u32>) {
        self.l = v;
    }

    fn set_r(&mut self, v: Option<u32>) {
        self.r = v;
    }
}

type Tree = SplayTree<Entry>;

fn cmp_entry(a: &Entry, b: &Entry) -> i32 {
    ord_comparator(&a.key, &b.key)
}

fn new_tree() -> Tree {
    SplayTree::with_comparator(cmp_entry as fn(&Entry, &Entry) -> i32)
}

fn entry(key: i32) -> Entry {
    Entry {
        key,
        ..Default::default()
    }
}

fn arena_of(keys: &[i32]) -> Vec<Entry> {
    keys.iter().copied().map(entry).collect()
}

fn build(keys: &[i32]) -> (Vec<Entry>, Tree) {
    let mut arena = arena_of(keys);
    let mut tree = new_tree();
    for handle in 0..keys.len() as u32 {
        assert!(tree.insert(&mut arena, handle));
    }
    (arena, tree)
}

fn inorder_keys(arena: &[Entry], tree: &Tree) -> Vec<i32> {
    tree.iter(arena).map(|h| arena[h as usize].key).collect()
}

fn root_key(arena: &[Entry], tree: &Tree) -> Option<i32> {
    tree.root().map(|h| arena[h as usize].key)
}

fn dump(arena: &[Entry], tree: &Tree) -> String {
    tree.print(arena, "", |n| n.key.to_string())
}

#[test]
fn tree_odd_keys_scenario_matrix() {
    let mut arena = arena_of(&[1, 3, 5, 7, 9]);
    let mut tree = new_tree();

    for handle in 0..5u32 {
        assert!(tree.insert(&mut arena, handle));
        assert_eq!(tree.root(), Some(handle));
    }
    assert_eq!(inorder_keys(&arena, &tree), vec![1, 3, 5, 7, 9]);

    let found = tree.search(&mut arena, &entry(5)).unwrap();
    assert_eq!(arena[found as usize].key, 5);
    assert_eq!(tree.root(), Some(found));

    let bound = tree.lower_bound(&mut arena, &entry(4)).unwrap();
    assert_eq!(arena[bound as usize].key, 5);
    assert_eq!(tree.lower_bound(&mut arena, &entry(9)), None);

    assert!(tree.delete(&mut arena, &entry(5)));
    assert_eq!(tree.search(&mut arena, &entry(5)), None);
    let bound = tree.lower_bound(&mut arena, &entry(4)).unwrap();
    assert_eq!(arena[bound as usize].key, 7);

    assert_eq!(inorder_keys(&arena, &tree), vec![1, 3, 7, 9]);
    assert_eq!(tree.validate(&arena), Ok(4), "{}", dump(&arena, &tree));
}

#[test]
fn tree_failed_search_restructures_matrix() {
    // Sequential inserts leave a left spine 8 -> 6 -> 4 -> 2.
    let (mut arena, mut tree) = build(&[2, 4, 6, 8]);
    assert_eq!(root_key(&arena, &tree), Some(8));

    assert_eq!(tree.search(&mut arena, &entry(5)), None);
    assert_eq!(root_key(&arena, &tree), Some(4), "{}", dump(&arena, &tree));
    assert_eq!(arena[tree.root().unwrap() as usize].r, Some(2));

    assert_eq!(tree.search(&mut arena, &entry(100)), None);
    assert_eq!(root_key(&arena, &tree), Some(8));

    assert_eq!(tree.search(&mut arena, &entry(-3)), None);
    assert_eq!(root_key(&arena, &tree), Some(2));

    assert_eq!(inorder_keys(&arena, &tree), vec![2, 4, 6, 8]);
    assert_eq!(tree.validate(&arena), Ok(4));
}

#[test]
fn tree_duplicate_rejection_matrix() {
    let mut arena = arena_of(&[1, 2, 3, 2]);
    let mut tree = new_tree();
    for handle in 0..3u32 {
        assert!(tree.insert(&mut arena, handle));
    }

    assert!(!tree.insert(&mut arena, 3));
    // The present duplicate was splayed up; the rejected node is not linked.
    assert_eq!(tree.root(), Some(1));
    assert_eq!(tree.iter(&arena).collect::<Vec<_>>(), vec![0, 1, 2]);
    assert_eq!(tree.validate(&arena), Ok(3));
}

#[test]
fn tree_delete_root_without_left_subtree_matrix() {
    let (mut arena, mut tree) = build(&[5, 1, 9]);

    assert!(tree.delete(&mut arena, &entry(1)));
    assert_eq!(root_key(&arena, &tree), Some(5));
    assert_eq!(inorder_keys(&arena, &tree), vec![5, 9]);

    assert!(tree.delete(&mut arena, &entry(9)));
    assert!(tree.delete(&mut arena, &entry(5)));
    assert!(tree.is_empty());
    assert!(!tree.delete(&mut arena, &entry(5)));
}

#[test]
fn tree_delete_promotes_predecessor_matrix() {
    // Splaying the deepest key of the left spine leaves 2 -> 10 with
    // 10's left subtree 6 (4, 8): deleting 10 then promotes 8 out from
    // under its parent 6.
    let (mut arena, mut tree) = build(&[2, 4, 6, 8, 10, 12]);
    tree.search(&mut arena, &entry(2)).unwrap();
    assert_eq!(root_key(&arena, &tree), Some(2));

    assert!(tree.delete(&mut arena, &entry(10)));
    assert_eq!(root_key(&arena, &tree), Some(8), "{}", dump(&arena, &tree));
    assert_eq!(inorder_keys(&arena, &tree), vec![2, 4, 6, 8, 12]);
    assert_eq!(tree.validate(&arena), Ok(5));

    assert!(tree.delete(&mut arena, &entry(8)));
    assert_eq!(root_key(&arena, &tree), Some(6));
    assert_eq!(inorder_keys(&arena, &tree), vec![2, 4, 6, 12]);
    assert_eq!(tree.validate(&arena), Ok(4));
}

#[test]
fn tree_delete_promotes_direct_left_child_matrix() {
    // Sequential inserts: 9 -> 5 -> 1 down the left spine.
    let (mut arena, mut tree) = build(&[1, 5, 9]);
    assert!(tree.delete(&mut arena, &entry(9)));
    assert_eq!(root_key(&arena, &tree), Some(5));
    assert_eq!(arena[1].l, Some(0));
    assert_eq!(arena[1].r, None);
    assert_eq!(tree.validate(&arena), Ok(2));
}

#[test]
fn tree_delete_missing_key_matrix() {
    let (mut arena, mut tree) = build(&[10, 20, 30]);
    assert!(!tree.delete(&mut arena, &entry(25)));
    // Left spine 30 -> 20 -> 10; the walk stops at 20, the tightest smaller key.
    assert_eq!(root_key(&arena, &tree), Some(20), "{}", dump(&arena, &tree));
    assert_eq!(arena[1].l, Some(0));
    assert_eq!(arena[1].r, Some(2));
    assert_eq!(inorder_keys(&arena, &tree), vec![10, 20, 30]);
}

#[test]
fn tree_reinsert_linked_node_matrix() {
    let (mut arena, mut tree) = build(&[1, 2, 3, 4, 5]);
    let root = tree.root().unwrap();

    assert!(!tree.insert(&mut arena, root));
    assert_eq!(tree.root(), Some(root));
    assert_eq!(tree.len(&arena), 5);
    assert_eq!(tree.validate(&arena), Ok(5));

    // A linked node deep in the tree is splayed up, not cut loose.
    assert!(!tree.insert(&mut arena, 0));
    assert_eq!(tree.root(), Some(0));
    assert_eq!(tree.validate(&arena), Ok(5), "{}", dump(&arena, &tree));
    assert_eq!(inorder_keys(&arena, &tree), vec![1, 2, 3, 4, 5]);

    assert!(!tree.insert(&mut arena, 2));
    assert_eq!(tree.len(&arena), 5);
    assert_eq!(tree.validate(&arena), Ok(5));
}

#[test]
fn tree_lower_bound_every_query_matrix() {
    let keys = [40, 10, 70, 20, 60, 30, 50];
    let (mut arena, mut tree) = build(&keys);
    let mut sorted = keys.to_vec();
    sorted.sort();

    for q in 0..=80 {
        let expected = sorted.iter().copied().find(|&k| k > q);
        let got = tree
            .lower_bound(&mut arena, &entry(q))
            .map(|h| arena[h as usize].key);
        assert_eq!(got, expected, "query {q}");
        assert_eq!(tree.validate(&arena), Ok(keys.len()));
    }
}

#[test]
fn tree_remove_and_reinsert_matrix() {
    let (mut arena, mut tree) = build(&[3, 1, 4, 5, 9, 2, 6]);
    let handle = tree.remove(&mut arena, &entry(4)).unwrap();
    assert_eq!(arena[handle as usize].key, 4);
    assert_eq!((arena[handle as usize].l, arena[handle as usize].r), (None, None));
    assert_eq!(tree.len(&arena), 6);

    arena[handle as usize].key = 8;
    assert!(tree.insert(&mut arena, handle));
    assert_eq!(tree.root(), Some(handle));
    assert_eq!(inorder_keys(&arena, &tree), vec![1, 2, 3, 5, 6, 8, 9]);
    assert_eq!(tree.first(&arena).map(|h| arena[h as usize].key), Some(1));
    assert_eq!(tree.last(&arena).map(|h| arena[h as usize].key), Some(9));
}
