//! A persistent singly-linked list. This is the classic cons list from
//! functional languages: prepending shares the entire existing list with
//! the new one, so `cons` is O(1) in time and additional space and no
//! operation ever mutates an existing list.
//!
//! The tree in this crate uses [`List`] as the target of its pre-order
//! linearization; the list is also useful on its own.
//!
//! # Examples
//!
//! ```
//! use ordtree::list::List;
//!
//! let list = List::new().cons(3).cons(2).cons(1);
//! assert_eq!(list.head(), Some(&1));
//! assert_eq!(list.len(), 3);
//!
//! // The original is untouched by `cons` - only a new list comes back.
//! let longer = list.cons(0);
//! assert_eq!(list.len(), 3);
//! assert_eq!(longer.len(), 4);
//! ```

use std::fmt;
use std::iter::FromIterator;
use std::rc::Rc;

struct Node<A> {
    element: A,
    next: Option<Rc<Node<A>>>,
}

/// A persistent singly-linked list with structural sharing.
///
/// The length is carried alongside the head pointer so [`len`](List::len)
/// is O(1) even though the nodes themselves store no counts.
pub struct List<A> {
    head: Option<Rc<Node<A>>>,
    len: usize,
}

/// Manual implementation so lists of non-`Clone` elements are still
/// cheaply clonable - only the head pointer and length are copied.
impl<A> Clone for List<A> {
    fn clone(&self) -> Self {
        Self {
            head: self.head.as_ref().map(Rc::clone),
            len: self.len,
        }
    }
}

impl<A> Default for List<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> List<A> {
    /// Generates a new, empty `List`.
    pub const fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Returns whether this list has no elements.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the number of elements in this list. O(1).
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns a new list with `element` prepended. The new list shares
    /// every existing node with `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::list::List;
    ///
    /// let list = List::new().cons(2).cons(1);
    /// assert_eq!(list.iter().collect::<Vec<_>>(), [&1, &2]);
    /// ```
    pub fn cons(&self, element: A) -> Self {
        Self {
            head: Some(Rc::new(Node {
                element,
                next: self.head.as_ref().map(Rc::clone),
            })),
            len: self.len + 1,
        }
    }

    /// Returns the first element, or `None` for an empty list.
    pub fn head(&self) -> Option<&A> {
        self.head.as_deref().map(|n| &n.element)
    }

    /// Returns the list after the first element, or `None` for an empty
    /// list. The returned list shares its nodes with `self`.
    pub fn tail(&self) -> Option<Self> {
        self.head.as_deref().map(|n| Self {
            head: n.next.as_ref().map(Rc::clone),
            len: self.len - 1,
        })
    }

    /// Returns a new list holding the elements of `self` followed by the
    /// elements of `other`. `other`'s nodes are shared, `self`'s elements
    /// are re-consed in front of them.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::list::List;
    ///
    /// let front: List<i32> = [1, 2].iter().copied().collect();
    /// let back: List<i32> = [3, 4].iter().copied().collect();
    ///
    /// let joined = front.concat(&back);
    /// assert_eq!(joined.iter().copied().collect::<Vec<_>>(), [1, 2, 3, 4]);
    /// ```
    pub fn concat(&self, other: &Self) -> Self
    where
        A: Clone,
    {
        let mut front: Vec<A> = self.iter().cloned().collect();
        let mut out = other.clone();
        while let Some(element) = front.pop() {
            out = out.cons(element);
        }
        out
    }

    /// Folds the list front-to-back. This runs as a loop rather than by
    /// recursing through the nodes, so it stays within constant stack
    /// space no matter how long the list is.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::list::List;
    ///
    /// let list: List<i32> = [1, 2, 3, 4].iter().copied().collect();
    /// assert_eq!(list.fold_left(0, |sum, x| sum + x), 10);
    /// ```
    pub fn fold_left<B>(&self, identity: B, f: impl Fn(B, &A) -> B) -> B {
        let mut acc = identity;
        for element in self {
            acc = f(acc, element);
        }
        acc
    }

    /// Returns an iterator over references to the elements, front to back.
    pub fn iter(&self) -> Iter<'_, A> {
        Iter {
            next: self.head.as_deref(),
        }
    }
}

/// Iterator over the elements of a [`List`], front to back.
pub struct Iter<'a, A> {
    next: Option<&'a Node<A>>,
}

impl<'a, A> Iterator for Iter<'a, A> {
    type Item = &'a A;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.as_deref();
        Some(&node.element)
    }
}

impl<'a, A> IntoIterator for &'a List<A> {
    type Item = &'a A;
    type IntoIter = Iter<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<A> FromIterator<A> for List<A> {
    fn from_iter<I: IntoIterator<Item = A>>(iter: I) -> Self {
        let mut elements: Vec<A> = iter.into_iter().collect();
        let mut out = Self::new();
        while let Some(element) = elements.pop() {
            out = out.cons(element);
        }
        out
    }
}

impl<A: PartialEq> PartialEq for List<A> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<A: Eq> Eq for List<A> {}

impl<A: fmt::Debug> fmt::Debug for List<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Unlink the nodes iteratively. The derived drop would recurse once per
/// node and overflow the stack on a long uniquely-owned list. Nodes still
/// referenced by other lists are left for their remaining owners.
impl<A> Drop for List<A> {
    fn drop(&mut self) {
        let mut head = self.head.take();
        while let Some(node) = head {
            match Rc::try_unwrap(node) {
                Ok(mut node) => head = node.next.take(),
                Err(_) => break,
            }
        }
    }
}
