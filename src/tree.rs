//! A persistent ordered binary tree (a functional BST). Any operation
//! that one would expect to modify the tree (e.g. [`insert`](Tree::insert)
//! or [`remove`](Tree::remove)) instead returns a new tree that references
//! many of the nodes of the original tree.
//!
//! Values are their own keys: the tree behaves as an ordered set, and
//! inserting a value equal to one already present replaces it rather than
//! duplicating it.
//!
//! Beyond the usual BST operations the tree supports a structural
//! [`merge`](Tree::merge) of two arbitrary ordered trees and a family of
//! traversal-order folds ([`fold_in_order`](Tree::fold_in_order) and
//! friends) that linearize the tree.
//!
//! Every operation recurses to at most the height of the tree, so none of
//! them are safe for pathologically unbalanced trees deeper than the call
//! stack. No rebalancing is performed; callers needing bounded height must
//! impose it themselves.
//!
//! # Examples
//!
//! ```
//! use ordtree::tree::Tree;
//!
//! let tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.member(&1));
//!
//! // This `insert` returns a new tree!
//! let new_tree = tree.insert(1);
//!
//! // The new tree has the value but the old one doesn't.
//! assert!(new_tree.member(&1));
//! assert!(!tree.member(&1));
//!
//! // And remove it for good measure.
//! let newest_tree = new_tree.remove(&1);
//!
//! // All history is preserved.
//! assert!(!newest_tree.member(&1));
//! assert!(new_tree.member(&1));
//! ```

use std::cmp;
use std::iter::FromIterator;
use std::rc::Rc;

use crate::list::List;

/// A persistent ordered binary tree. For every node, all values in its
/// left subtree are less than its own value and all values in its right
/// subtree are greater. Operations that would modify the tree instead
/// return a new tree sharing subtrees with the original.
pub enum Tree<A> {
    /// The empty tree. Carries no data, so the empty case needs no shared
    /// singleton - any `Leaf` is as good as any other.
    Leaf,
    /// A non-empty tree: a value and two subtrees. This enum trivially
    /// wraps the [`Node`] struct.
    Node(Node<A>),
}

impl<A> Default for Tree<A> {
    fn default() -> Self {
        Self::new()
    }
}

/// Manual implementation of `Clone` so cloning shares subtrees instead of
/// requiring `A: Clone`.
impl<A> Clone for Tree<A> {
    fn clone(&self) -> Self {
        match self {
            Self::Leaf => Self::Leaf,
            Self::Node(n) => Self::Node(n.clone()),
        }
    }
}

impl<A> Tree<A> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self::Leaf
    }

    /// Returns whether this tree has no values.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Leaf)
    }

    /// Returns a new tree that contains `a`. If an equal value is already
    /// present it is replaced, not duplicated, so `size` grows by at most
    /// one.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::tree::Tree;
    ///
    /// let tree = Tree::new();
    /// let new_tree = tree.insert(1);
    /// let newer_tree = new_tree.insert(1);
    ///
    /// assert_eq!(newer_tree.size(), 1);
    /// assert!(new_tree.member(&1));
    /// assert!(!tree.member(&1));
    /// ```
    pub fn insert(&self, a: A) -> Self
    where
        A: cmp::Ord,
    {
        match self {
            Self::Leaf => Self::Node(Node::singleton(a)),
            Self::Node(n) => Self::Node(n.insert(a)),
        }
    }

    /// Returns whether `a` is in this tree. Takes O(height) comparisons.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::tree::Tree;
    ///
    /// let tree = Tree::new().insert(2).insert(1).insert(3);
    ///
    /// assert!(tree.member(&3));
    /// assert!(!tree.member(&42));
    /// ```
    pub fn member(&self, a: &A) -> bool
    where
        A: cmp::Ord,
    {
        match self {
            Self::Leaf => false,
            Self::Node(n) => n.member(a),
        }
    }

    /// Returns the number of values in this tree. Recomputed on every
    /// call - nothing is cached in the nodes.
    pub fn size(&self) -> usize {
        match self {
            Self::Leaf => 0,
            Self::Node(n) => 1 + n.left().size() + n.right().size(),
        }
    }

    /// Returns the height of this tree: the longest root-to-leaf edge
    /// count. The empty tree has height `-1` and a single node has
    /// height `0`.
    pub fn height(&self) -> isize {
        match self {
            Self::Leaf => -1,
            Self::Node(n) => 1 + n.left().height().max(n.right().height()),
        }
    }

    /// Returns the smallest value in this tree, or `None` if it is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::tree::Tree;
    ///
    /// let tree = Tree::new().insert(2).insert(1).insert(3);
    ///
    /// assert_eq!(tree.min(), Some(&1));
    /// assert_eq!(Tree::<i32>::new().min(), None);
    /// ```
    pub fn min(&self) -> Option<&A> {
        match self {
            Self::Leaf => None,
            Self::Node(n) => n.left().min().or_else(|| Some(n.value())),
        }
    }

    /// Returns the largest value in this tree, or `None` if it is empty.
    pub fn max(&self) -> Option<&A> {
        match self {
            Self::Leaf => None,
            Self::Node(n) => n.right().max().or_else(|| Some(n.value())),
        }
    }

    /// Returns a new tree without `a`. Removing a value that isn't
    /// present (or removing from an empty tree) returns the tree
    /// unchanged.
    ///
    /// When the removed value sits on a node with two children, the two
    /// subtrees are stitched back together; their values are already
    /// disjoint and ordered around the removed value, so no comparison
    /// with the rest of the tree is needed.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::tree::Tree;
    ///
    /// let tree = Tree::new().insert(2).insert(1).insert(3);
    /// let new_tree = tree.remove(&2);
    ///
    /// assert!(!new_tree.member(&2));
    /// assert!(new_tree.member(&1));
    /// assert!(new_tree.member(&3));
    ///
    /// // All history is preserved.
    /// assert!(tree.member(&2));
    /// ```
    pub fn remove(&self, a: &A) -> Self
    where
        A: cmp::Ord,
    {
        match self {
            Self::Leaf => Self::new(),
            Self::Node(n) => n.remove(a),
        }
    }

    /// Stitches together the two subtrees of a removed node. `self` and
    /// `other` were the left and right children of the same node, so every
    /// value of `self` is below every value of `other`; `other` only ever
    /// descends along one spine of `self`.
    fn remove_merge(&self, other: &Self) -> Self
    where
        A: cmp::Ord,
    {
        let (node, other_node) = match (self, other) {
            (Self::Leaf, _) => return other.clone(),
            (_, Self::Leaf) => return self.clone(),
            (Self::Node(n), Self::Node(o)) => (n, o),
        };

        match other_node.value().cmp(node.value()) {
            cmp::Ordering::Less => Self::Node(Node {
                value: Rc::clone(&node.value),
                left: Subtree::from_tree(node.left().remove_merge(other)),
                right: node.right.clone(),
            }),
            cmp::Ordering::Greater => Self::Node(Node {
                value: Rc::clone(&node.value),
                left: node.left.clone(),
                right: Subtree::from_tree(node.right().remove_merge(other)),
            }),
            cmp::Ordering::Equal => {
                // The children of a single node can never share a value.
                unreachable!("remove_merge called on subtrees sharing a value")
            }
        }
    }

    /// Merges two arbitrary ordered trees into one ordered tree. The key
    /// ranges of `self` and `other` may interleave in any way; values
    /// present in both appear once in the result (the copy from `self`
    /// wins), so `size` of the result is at most the sum of the input
    /// sizes, with equality exactly when the inputs are disjoint.
    ///
    /// The merge is structural: neither input is flattened and rebuilt.
    /// Each step peels the root of `other`, pushes the half of it known to
    /// be on one side of `self`'s root down the matching subtree, and
    /// recurses on the rest. No rebalancing is done, so the result can be
    /// taller than `log2(size)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::tree::Tree;
    ///
    /// let a: Tree<i32> = [1, 2, 3].iter().copied().collect();
    /// let b: Tree<i32> = [2, 3, 4].iter().copied().collect();
    ///
    /// let merged = a.merge(&b);
    /// assert_eq!(merged.size(), 4);
    ///
    /// let in_order = merged.fold_in_order(Vec::new(), |mut l, v, r| {
    ///     l.push(*v);
    ///     l.extend(r);
    ///     l
    /// });
    /// assert_eq!(in_order, [1, 2, 3, 4]);
    /// ```
    pub fn merge(&self, other: &Self) -> Self
    where
        A: cmp::Ord,
    {
        let (node, other_node) = match (self, other) {
            (Self::Leaf, _) => return other.clone(),
            (_, Self::Leaf) => return self.clone(),
            (Self::Node(n), Self::Node(o)) => (n, o),
        };

        match other_node.value().cmp(node.value()) {
            cmp::Ordering::Greater => {
                // `other`'s root and right subtree belong to the right of
                // our root; `other`'s left subtree could fall anywhere.
                let upper = Self::Node(Node {
                    value: Rc::clone(&other_node.value),
                    left: Subtree::empty(),
                    right: other_node.right.clone(),
                });
                Self::Node(Node {
                    value: Rc::clone(&node.value),
                    left: node.left.clone(),
                    right: Subtree::from_tree(node.right().merge(&upper)),
                })
                .merge(other_node.left())
            }
            cmp::Ordering::Less => {
                let lower = Self::Node(Node {
                    value: Rc::clone(&other_node.value),
                    left: other_node.left.clone(),
                    right: Subtree::empty(),
                });
                Self::Node(Node {
                    value: Rc::clone(&node.value),
                    left: Subtree::from_tree(node.left().merge(&lower)),
                    right: node.right.clone(),
                })
                .merge(other_node.right())
            }
            cmp::Ordering::Equal => Self::Node(Node {
                value: Rc::clone(&node.value),
                left: Subtree::from_tree(node.left().merge(other_node.left())),
                right: Subtree::from_tree(node.right().merge(other_node.right())),
            }),
        }
    }

    /// Builds a valid tree from two subtrees and a value whose ranges may
    /// overlap arbitrarily. If `left`, `value`, `right` are already
    /// correctly ordered (in the given or the swapped orientation) they
    /// are used as-is; otherwise everything is merged into a singleton
    /// holding `value`, which is correct regardless of the inputs' ranges
    /// at the cost of extra merge work.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::tree::Tree;
    ///
    /// let low: Tree<i32> = [1, 2].iter().copied().collect();
    /// let high: Tree<i32> = [4, 5].iter().copied().collect();
    ///
    /// // Already ordered - also accepted with the sides flipped.
    /// let tree = Tree::join(low.clone(), 3, high.clone());
    /// let flipped = Tree::join(high, 3, low);
    ///
    /// assert_eq!(tree.size(), 5);
    /// assert_eq!(flipped.size(), 5);
    /// assert_eq!(tree.min(), Some(&1));
    /// assert_eq!(flipped.max(), Some(&5));
    /// ```
    pub fn join(left: Self, value: A, right: Self) -> Self
    where
        A: cmp::Ord,
    {
        if Self::ordered(&left, &value, &right) {
            Self::Node(Node {
                value: Rc::new(value),
                left: Subtree::from_tree(left),
                right: Subtree::from_tree(right),
            })
        } else if Self::ordered(&right, &value, &left) {
            Self::Node(Node {
                value: Rc::new(value),
                left: Subtree::from_tree(right),
                right: Subtree::from_tree(left),
            })
        } else {
            Self::new().insert(value).merge(&left).merge(&right)
        }
    }

    /// Whether `left`, `value`, `right` already satisfy the ordering
    /// invariant, treating an empty side as trivially ordered.
    fn ordered(left: &Self, value: &A, right: &Self) -> bool
    where
        A: cmp::Ord,
    {
        left.max().map_or(true, |max| max < value)
            && right.min().map_or(true, |min| min > value)
    }

    /// Folds the tree with separate combiners for values and subtree
    /// results: each node contributes `g(f(left, value), right)` where
    /// `left` and `right` are the folded subtrees and each leaf
    /// contributes `identity`.
    ///
    /// Despite the name, the *right* subtree is folded before the left
    /// one. This visiting order is historical and deliberately preserved;
    /// it is only observable through side effects of the combiners.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::tree::Tree;
    ///
    /// let tree: Tree<i32> = [2, 1, 3].iter().copied().collect();
    /// let sum = tree.fold_left(0, |acc, v| acc + v, |a, b| a + b);
    ///
    /// assert_eq!(sum, 6);
    /// ```
    pub fn fold_left<B, F, G>(&self, identity: B, f: F, g: G) -> B
    where
        B: Clone,
        F: Fn(B, &A) -> B,
        G: Fn(B, B) -> B,
    {
        self.fold_left_ref(&identity, &f, &g)
    }

    fn fold_left_ref<B, F, G>(&self, identity: &B, f: &F, g: &G) -> B
    where
        B: Clone,
        F: Fn(B, &A) -> B,
        G: Fn(B, B) -> B,
    {
        match self {
            Self::Leaf => identity.clone(),
            Self::Node(n) => {
                // Right subtree first.
                let right = n.right().fold_left_ref(identity, f, g);
                let left = n.left().fold_left_ref(identity, f, g);
                g(f(left, n.value()), right)
            }
        }
    }

    /// Symmetric counterpart of [`fold_left`](Tree::fold_left): each node
    /// contributes `g(f(value, left), right)`, and the left subtree is
    /// folded first.
    pub fn fold_right<B, F, G>(&self, identity: B, f: F, g: G) -> B
    where
        B: Clone,
        F: Fn(&A, B) -> B,
        G: Fn(B, B) -> B,
    {
        self.fold_right_ref(&identity, &f, &g)
    }

    fn fold_right_ref<B, F, G>(&self, identity: &B, f: &F, g: &G) -> B
    where
        B: Clone,
        F: Fn(&A, B) -> B,
        G: Fn(B, B) -> B,
    {
        match self {
            Self::Leaf => identity.clone(),
            Self::Node(n) => {
                let left = n.left().fold_right_ref(identity, f, g);
                let with_value = f(n.value(), left);
                let right = n.right().fold_right_ref(identity, f, g);
                g(with_value, right)
            }
        }
    }

    /// Classic in-order fold: each node contributes
    /// `f(left, value, right)`. Because of the ordering invariant this
    /// visits values in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::tree::Tree;
    ///
    /// let tree: Tree<i32> = [5, 3, 8, 1].iter().copied().collect();
    ///
    /// let sorted = tree.fold_in_order(Vec::new(), |mut left, v, right| {
    ///     left.push(*v);
    ///     left.extend(right);
    ///     left
    /// });
    /// assert_eq!(sorted, [1, 3, 5, 8]);
    /// ```
    pub fn fold_in_order<B, F>(&self, identity: B, f: F) -> B
    where
        B: Clone,
        F: Fn(B, &A, B) -> B,
    {
        self.fold_in_order_ref(&identity, &f)
    }

    fn fold_in_order_ref<B, F>(&self, identity: &B, f: &F) -> B
    where
        B: Clone,
        F: Fn(B, &A, B) -> B,
    {
        match self {
            Self::Leaf => identity.clone(),
            Self::Node(n) => {
                let left = n.left().fold_in_order_ref(identity, f);
                let right = n.right().fold_in_order_ref(identity, f);
                f(left, n.value(), right)
            }
        }
    }

    /// Pre-order fold: each node contributes `f(value, left, right)`.
    pub fn fold_pre_order<B, F>(&self, identity: B, f: F) -> B
    where
        B: Clone,
        F: Fn(&A, B, B) -> B,
    {
        self.fold_pre_order_ref(&identity, &f)
    }

    fn fold_pre_order_ref<B, F>(&self, identity: &B, f: &F) -> B
    where
        B: Clone,
        F: Fn(&A, B, B) -> B,
    {
        match self {
            Self::Leaf => identity.clone(),
            Self::Node(n) => {
                let left = n.left().fold_pre_order_ref(identity, f);
                let right = n.right().fold_pre_order_ref(identity, f);
                f(n.value(), left, right)
            }
        }
    }

    /// Post-order fold: each node contributes `f(left, right, value)`.
    pub fn fold_post_order<B, F>(&self, identity: B, f: F) -> B
    where
        B: Clone,
        F: Fn(B, B, &A) -> B,
    {
        self.fold_post_order_ref(&identity, &f)
    }

    fn fold_post_order_ref<B, F>(&self, identity: &B, f: &F) -> B
    where
        B: Clone,
        F: Fn(B, B, &A) -> B,
    {
        match self {
            Self::Leaf => identity.clone(),
            Self::Node(n) => {
                let left = n.left().fold_post_order_ref(identity, f);
                let right = n.right().fold_post_order_ref(identity, f);
                f(left, right, n.value())
            }
        }
    }

    /// Linearizes the tree pre-order, left subtree before right: the
    /// node's value followed by the left subtree's linearization, then
    /// the right subtree's.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::tree::Tree;
    ///
    /// let tree: Tree<i32> = [5, 3, 8, 1, 4].iter().copied().collect();
    /// let list = tree.to_list_pre_order_left();
    ///
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), [5, 3, 1, 4, 8]);
    /// ```
    pub fn to_list_pre_order_left(&self) -> List<A>
    where
        A: Clone,
    {
        match self {
            Self::Leaf => List::new(),
            Self::Node(n) => n
                .left()
                .to_list_pre_order_left()
                .concat(&n.right().to_list_pre_order_left())
                .cons(n.value().clone()),
        }
    }

    /// Convenience two-argument fold: linearizes the tree with
    /// [`to_list_pre_order_left`](Tree::to_list_pre_order_left) and folds
    /// the resulting list with the list's own loop-based fold. Less
    /// efficient than the structural folds, but reuses the list's
    /// machinery and needs no combiner for subtree results.
    pub fn fold<B>(&self, identity: B, f: impl Fn(B, &A) -> B) -> B
    where
        A: Clone,
    {
        self.to_list_pre_order_left().fold_left(identity, f)
    }

    /// Returns a tree holding `f` applied to every value. The result is
    /// rebuilt with [`insert`](Tree::insert), so it is a valid ordered
    /// tree even when `f` does not preserve ordering, and values that
    /// `f` maps to equal results are deduplicated.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::tree::Tree;
    ///
    /// let tree: Tree<i32> = [1, 2, 3].iter().copied().collect();
    /// let negated = tree.map(|v| -v);
    ///
    /// assert_eq!(negated.min(), Some(&-3));
    /// assert_eq!(negated.max(), Some(&-1));
    /// ```
    pub fn map<B, F>(&self, f: F) -> Tree<B>
    where
        B: cmp::Ord,
        F: Fn(&A) -> B,
    {
        self.map_into(Tree::new(), &f)
    }

    fn map_into<B, F>(&self, acc: Tree<B>, f: &F) -> Tree<B>
    where
        B: cmp::Ord,
        F: Fn(&A) -> B,
    {
        match self {
            Self::Leaf => acc,
            Self::Node(n) => {
                let acc = acc.insert(f(n.value()));
                let acc = n.left().map_into(acc, f);
                n.right().map_into(acc, f)
            }
        }
    }
}

/// Builds a tree by folding [`insert`](Tree::insert) over the values, so
/// later duplicates replace earlier ones.
impl<A: cmp::Ord> FromIterator<A> for Tree<A> {
    fn from_iter<I: IntoIterator<Item = A>>(iter: I) -> Self {
        iter.into_iter().fold(Self::new(), |tree, a| tree.insert(a))
    }
}

/// Builds a tree from the elements of a persistent list.
impl<A: cmp::Ord + Clone> From<&List<A>> for Tree<A> {
    fn from(list: &List<A>) -> Self {
        list.iter().cloned().collect()
    }
}

struct Subtree<A>(Rc<Tree<A>>);

impl<A> Clone for Subtree<A> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<A> Subtree<A> {
    fn empty() -> Self {
        Self(Rc::new(Tree::new()))
    }

    fn from_tree(tree: Tree<A>) -> Self {
        Self(Rc::new(tree))
    }

    fn as_tree(&self) -> &Tree<A> {
        &self.0
    }

    fn insert(&self, a: A) -> Self
    where
        A: cmp::Ord,
    {
        Self(Rc::new(self.0.insert(a)))
    }

    fn remove(&self, a: &A) -> Self
    where
        A: cmp::Ord,
    {
        Self(Rc::new(self.0.remove(a)))
    }
}

/// A non-empty tree: a value and two children (which may be
/// [`Leaf`][Tree::Leaf]s). Because a `Node` exists only for non-empty
/// trees, its accessors can never be called on an empty tree.
pub struct Node<A> {
    value: Rc<A>,
    left: Subtree<A>,
    right: Subtree<A>,
}

/// Manual implementation of `Clone` so we don't clone the value or the
/// subtrees themselves when `A` isn't `Clone`.
impl<A> Clone for Node<A> {
    fn clone(&self) -> Self {
        Self {
            value: Rc::clone(&self.value),
            left: self.left.clone(),
            right: self.right.clone(),
        }
    }
}

impl<A> Node<A> {
    /// A node with no children.
    fn singleton(a: A) -> Self {
        Self {
            value: Rc::new(a),
            left: Subtree::empty(),
            right: Subtree::empty(),
        }
    }

    /// The value at this node.
    pub fn value(&self) -> &A {
        &self.value
    }

    /// The left subtree; all of its values are less than
    /// [`value`](Node::value).
    pub fn left(&self) -> &Tree<A> {
        self.left.as_tree()
    }

    /// The right subtree; all of its values are greater than
    /// [`value`](Node::value).
    pub fn right(&self) -> &Tree<A> {
        self.right.as_tree()
    }

    fn insert(&self, a: A) -> Self
    where
        A: cmp::Ord,
    {
        match a.cmp(self.value()) {
            cmp::Ordering::Less => Self {
                value: Rc::clone(&self.value),
                left: self.left.insert(a),
                right: self.right.clone(),
            },
            cmp::Ordering::Equal => Self {
                value: Rc::new(a),
                left: self.left.clone(),
                right: self.right.clone(),
            },
            cmp::Ordering::Greater => Self {
                value: Rc::clone(&self.value),
                left: self.left.clone(),
                right: self.right.insert(a),
            },
        }
    }

    fn member(&self, a: &A) -> bool
    where
        A: cmp::Ord,
    {
        match a.cmp(self.value()) {
            cmp::Ordering::Less => self.left().member(a),
            cmp::Ordering::Equal => true,
            cmp::Ordering::Greater => self.right().member(a),
        }
    }

    fn remove(&self, a: &A) -> Tree<A>
    where
        A: cmp::Ord,
    {
        match a.cmp(self.value()) {
            cmp::Ordering::Less => Tree::Node(Self {
                value: Rc::clone(&self.value),
                left: self.left.remove(a),
                right: self.right.clone(),
            }),
            cmp::Ordering::Equal => self.left().remove_merge(self.right()),
            cmp::Ordering::Greater => Tree::Node(Self {
                value: Rc::clone(&self.value),
                left: self.left.clone(),
                right: self.right.remove(a),
            }),
        }
    }
}
