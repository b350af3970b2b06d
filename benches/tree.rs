use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use ordtree::tree::Tree;

/// Returns how many nodes are needed to fill a binary tree with `num_levels` levels.
fn num_nodes_in_full_tree(num_levels: usize) -> usize {
    2usize.pow(num_levels as u32) - 1
}

/// Builds a tree by inserting values in an unbalanced manner. This adds elements in an
/// ascending manner to ensure the tree is unbalanced, i.e. a right spine.
fn get_unbalanced_tree(num_levels: usize) -> Tree<i32> {
    let tree_size = num_nodes_in_full_tree(num_levels);
    (0..tree_size as i32).collect()
}

/// Builds a tree by inserting values in a balanced manner. Without any
/// rebalancing, insertion order decides the shape, so midpoint-first
/// insertion yields a full tree of `num_levels` levels.
fn get_balanced_tree(num_levels: usize) -> Tree<i32> {
    let tree = Tree::new();
    let tree_size = num_nodes_in_full_tree(num_levels);
    let xs = (0..tree_size as i32).collect::<Vec<_>>();
    fill_balanced_tree(tree, &xs)
}

/// Recursive helper for [`get_balanced_tree`].
fn fill_balanced_tree(mut tree: Tree<i32>, xs: &[i32]) -> Tree<i32> {
    if !xs.is_empty() {
        let mid = xs.len() / 2;
        tree = tree.insert(xs[mid]);
        tree = fill_balanced_tree(tree, &xs[..mid]);
        tree = fill_balanced_tree(tree, &xs[mid + 1..]);
    }
    tree
}

/// Helper to bench a function on a tree.
/// It creates a group for the given name and closure and runs tests for various sizes and
/// shapes of trees before finishing the group.
fn bench_helper(c: &mut Criterion, name: &str, f: impl Fn(&Tree<i32>, i32)) {
    let mut group = c.benchmark_group(name);

    // Keep the unbalanced sizes modest - every operation recurses once per
    // level, and an unbalanced tree has one level per node.
    for num_levels in [3, 7, 9] {
        let tree_tests = [
            ("unbalanced", get_unbalanced_tree(num_levels)),
            ("balanced", get_balanced_tree(num_levels)),
        ];
        let largest_element_in_tree = num_nodes_in_full_tree(num_levels) - 1;
        for (name, tree) in tree_tests {
            let id = BenchmarkId::new(name.to_string(), largest_element_in_tree);

            group.bench_with_input(id, &largest_element_in_tree, |b, _| {
                b.iter(|| {
                    f(&tree, largest_element_in_tree as i32);
                })
            });
        }
    }

    group.finish();
}

/// Benchmarks `merge` on pairs of balanced trees whose value ranges fully
/// interleave (worst case for dedup-free merging).
fn bench_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge");

    for num_levels in [3, 7, 9] {
        let size = num_nodes_in_full_tree(num_levels);
        let evens: Tree<i32> = {
            let xs = (0..size as i32).map(|x| x * 2).collect::<Vec<_>>();
            fill_balanced_tree(Tree::new(), &xs)
        };
        let odds: Tree<i32> = {
            let xs = (0..size as i32).map(|x| x * 2 + 1).collect::<Vec<_>>();
            fill_balanced_tree(Tree::new(), &xs)
        };

        let id = BenchmarkId::new("interleaved", size);
        group.bench_with_input(id, &size, |b, _| {
            b.iter(|| {
                let _merged = evens.merge(&odds);
            })
        });
    }

    group.finish();
}

/// Benchmark the tree operations. All benches run against balanced and unbalanced trees of
/// various sizes and test successful and unsuccessful actions.
pub fn criterion_benchmark(c: &mut Criterion) {
    bench_helper(c, "member", |tree, i| {
        let _found = tree.member(&i);
    });
    bench_helper(c, "remove", |tree, i| {
        let _new_tree = tree.remove(&i);
    });

    bench_helper(c, "insert", |tree, i| {
        let _new_tree = tree.insert(i + 1);
    });

    bench_helper(c, "member-miss", |tree, i| {
        let _found = tree.member(&(i + 1));
    });
    bench_helper(c, "remove-miss", |tree, i| {
        let _new_tree = tree.remove(&(i + 1));
    });

    bench_merge(c);
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
