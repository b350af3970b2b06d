use ordtree::tree::Tree;

use quickcheck_macros::quickcheck;

use std::collections::{BTreeSet, HashSet};

use crate::Op;

fn in_order(tree: &Tree<i8>) -> Vec<i8> {
    tree.fold_in_order(Vec::new(), |mut left, v, right| {
        left.push(*v);
        left.extend(right);
        left
    })
}

fn tree_of(values: &[i8]) -> Tree<i8> {
    values.iter().copied().collect()
}

/// Applies a set of operations to a tree and an ordered set.
/// This way we can ensure that after a random smattering of inserts
/// and removes we have the same values in both.
fn do_ops(ops: &[Op<i8>], mut tree: Tree<i8>, set: &mut BTreeSet<i8>) -> Tree<i8> {
    for op in ops {
        match op {
            Op::Insert(v) => {
                tree = tree.insert(*v);
                set.insert(*v);
            }
            Op::Remove(v) => {
                tree = tree.remove(v);
                set.remove(v);
            }
        }
    }

    tree
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    tree = do_ops(&ops, tree, &mut set);

    tree.size() == set.len()
        && in_order(&tree) == set.iter().copied().collect::<Vec<_>>()
        && set.iter().all(|v| tree.member(v))
}

#[quickcheck]
fn in_order_is_strictly_increasing(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    tree = do_ops(&ops, tree, &mut set);

    in_order(&tree).windows(2).all(|w| w[0] < w[1])
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree = tree_of(&xs);

    xs.iter().all(|x| tree.member(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = tree_of(&xs);

    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.member(x))
}

#[quickcheck]
fn duplicate_insert_keeps_size(xs: Vec<i8>, x: i8) -> bool {
    let once = tree_of(&xs).insert(x);
    let twice = once.insert(x);

    once.size() == twice.size() && once.member(&x) && twice.member(&x)
}

#[quickcheck]
fn insert_then_remove_absent_roundtrips(xs: Vec<i8>, x: i8) -> bool {
    let tree = tree_of(&xs);
    if tree.member(&x) {
        return true;
    }

    in_order(&tree.insert(x).remove(&x)) == in_order(&tree)
}

#[quickcheck]
fn merge_membership_commutes(xs: Vec<i8>, ys: Vec<i8>) -> bool {
    let a = tree_of(&xs);
    let b = tree_of(&ys);

    // The two merges may differ in shape but never in contents.
    in_order(&a.merge(&b)) == in_order(&b.merge(&a))
}

#[quickcheck]
fn merge_is_set_union(xs: Vec<i8>, ys: Vec<i8>) -> bool {
    let merged = tree_of(&xs).merge(&tree_of(&ys));

    let union: BTreeSet<i8> = xs.iter().chain(ys.iter()).copied().collect();

    in_order(&merged) == union.iter().copied().collect::<Vec<_>>()
}

#[quickcheck]
fn merge_with_self_absorbs_duplicates(xs: Vec<i8>) -> bool {
    let tree = tree_of(&xs);

    in_order(&tree.merge(&tree)) == in_order(&tree)
}

#[quickcheck]
fn merge_size_is_monotone(xs: Vec<i8>, ys: Vec<i8>) -> bool {
    let a = tree_of(&xs);
    let b = tree_of(&ys);
    let merged_size = a.merge(&b).size();

    let disjoint = xs.iter().all(|x| !ys.contains(x));

    merged_size <= a.size() + b.size()
        && (merged_size == a.size() + b.size()) == disjoint
}

#[quickcheck]
fn join_is_valid_for_any_ranges(xs: Vec<i8>, x: i8, ys: Vec<i8>) -> bool {
    let joined = Tree::join(tree_of(&xs), x, tree_of(&ys));

    let mut expected: BTreeSet<i8> = xs.iter().chain(ys.iter()).copied().collect();
    expected.insert(x);

    in_order(&joined) == expected.iter().copied().collect::<Vec<_>>()
}

#[quickcheck]
fn linearizations_agree(xs: Vec<i8>) -> bool {
    let tree = tree_of(&xs);

    let list = tree.to_list_pre_order_left();
    let pre = tree.fold_pre_order(Vec::new(), |v, mut left, right| {
        let mut out = vec![*v];
        out.append(&mut left);
        out.extend(right);
        out
    });

    list.len() == tree.size() && list.iter().copied().collect::<Vec<_>>() == pre
}
