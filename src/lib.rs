//! Persistent ordered collections built around an immutable Binary
//! Search Tree (BST) with structural merge.
//!
//! ## Ordered tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` holds a value and
//! two child trees, either of which may be empty. The most important
//! invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the values in its left subtree are
//!    less than its own value.
//! 2. For every `Node` in a BST, all the values in its right subtree are
//!    greater than its own value.
//!
//! The tree in this crate is *persistent*: operations that would modify
//! the tree instead return a new tree sharing most of its nodes with the
//! original. Sharing is safe because no node is ever mutated after
//! construction.
//!
//! On top of the usual insert/member/remove operations, [`tree::Tree`]
//! supports a structural [`merge`](tree::Tree::merge) of two arbitrary
//! ordered trees into one ordered tree, without flattening either side
//! and rebuilding, and a family of traversal-order folds used to
//! linearize a tree.
//!
//! The [`list`] module provides the persistent singly-linked [`list::List`]
//! that [`tree::Tree::to_list_pre_order_left`] linearizes into.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod list;
pub mod tree;
