use crate::{Error, Result};

/// The index of a node in a [`BinaryTree`].
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Returns the position of the node in the arena.
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
struct TreeNode<T> {
    value: T,
    left: Option<NodeId>,
    right: Option<NodeId>,
}

/// A binary tree stored in an arena.
///
/// Nodes are never removed, and children are referenced by [`NodeId`], so
/// there are no owning pointers between nodes. Traversals use an explicit
/// stack and thus work on degenerate (list-like) trees of any height.
///
/// # Examples
///
/// ```
/// use classic_algo::algo::recursion::BinaryTree;
///
/// let mut tree = BinaryTree::new(1);
/// let root = tree.root();
/// let two = tree.add_left(root, 2).unwrap();
/// tree.add_right(root, 3).unwrap();
/// tree.add_left(two, 4).unwrap();
/// tree.add_right(two, 5).unwrap();
///
/// assert_eq!(tree.inorder(), [&4, &2, &5, &1, &3]);
/// assert_eq!(tree.preorder(), [&1, &2, &4, &5, &3]);
/// assert_eq!(tree.postorder(), [&4, &5, &2, &3, &1]);
/// ```
#[derive(Debug, Clone)]
pub struct BinaryTree<T> {
    nodes: Vec<TreeNode<T>>,
}

impl<T> BinaryTree<T> {
    /// Creates a tree made of a root with the given value.
    pub fn new(root: T) -> Self {
        Self {
            nodes: vec![TreeNode {
                value: root,
                left: None,
                right: None,
            }],
        }
    }

    /// Returns the root of the tree.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Returns the number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: a tree has at least a root.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the value of a node.
    pub fn value(&self, node: NodeId) -> &T {
        &self.nodes[node.0].value
    }

    /// Returns the left child of a node.
    pub fn left(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node.0].left
    }

    /// Returns the right child of a node.
    pub fn right(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node.0].right
    }

    /// Adds a left child to `parent`.
    ///
    /// # Errors
    ///
    /// [`Error::OccupiedChild`] if `parent` already has a left child.
    pub fn add_left(&mut self, parent: NodeId, value: T) -> Result<NodeId> {
        if self.nodes[parent.0].left.is_some() {
            return Err(Error::OccupiedChild {
                parent: parent.0,
                side: "left",
            });
        }
        let child = self.push(value);
        self.nodes[parent.0].left = Some(child);
        Ok(child)
    }

    /// Adds a right child to `parent`.
    ///
    /// # Errors
    ///
    /// [`Error::OccupiedChild`] if `parent` already has a right child.
    pub fn add_right(&mut self, parent: NodeId, value: T) -> Result<NodeId> {
        if self.nodes[parent.0].right.is_some() {
            return Err(Error::OccupiedChild {
                parent: parent.0,
                side: "right",
            });
        }
        let child = self.push(value);
        self.nodes[parent.0].right = Some(child);
        Ok(child)
    }

    fn push(&mut self, value: T) -> NodeId {
        self.nodes.push(TreeNode {
            value,
            left: None,
            right: None,
        });
        NodeId(self.nodes.len() - 1)
    }

    /// Returns the values in in-order (left, root, right).
    pub fn inorder(&self) -> Vec<&T> {
        let mut order = Vec::with_capacity(self.len());
        let mut stack = Vec::new();
        let mut curr = Some(self.root());

        loop {
            // Descend along left children, remembering the path
            while let Some(node) = curr {
                stack.push(node);
                curr = self.left(node);
            }
            let Some(node) = stack.pop() else {
                return order;
            };
            order.push(self.value(node));
            curr = self.right(node);
        }
    }

    /// Returns the values in pre-order (root, left, right).
    pub fn preorder(&self) -> Vec<&T> {
        let mut order = Vec::with_capacity(self.len());
        let mut stack = vec![self.root()];

        while let Some(node) = stack.pop() {
            order.push(self.value(node));
            stack.extend(self.right(node));
            stack.extend(self.left(node));
        }

        order
    }

    /// Returns the values in post-order (left, right, root).
    pub fn postorder(&self) -> Vec<&T> {
        let mut order = Vec::with_capacity(self.len());
        // The Boolean tells whether the children have been expanded
        let mut stack = vec![(self.root(), false)];

        while let Some((node, expanded)) = stack.pop() {
            if expanded {
                order.push(self.value(node));
            } else {
                stack.push((node, true));
                stack.extend(self.right(node).map(|child| (child, false)));
                stack.extend(self.left(node).map(|child| (child, false)));
            }
        }

        order
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_occupied() {
        let mut tree = BinaryTree::new('r');
        let root = tree.root();
        tree.add_left(root, 'l').unwrap();
        assert_eq!(
            tree.add_left(root, 'x'),
            Err(Error::OccupiedChild {
                parent: 0,
                side: "left"
            })
        );
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn test_degenerate() {
        // A right spine deep enough to overflow a naive recursion
        let mut tree = BinaryTree::new(0);
        let mut node = tree.root();
        for i in 1..200_000 {
            node = tree.add_right(node, i).unwrap();
        }
        let expected: Vec<i32> = (0..200_000).collect();
        assert_eq!(tree.inorder().into_iter().copied().collect::<Vec<_>>(), expected);
        assert_eq!(tree.preorder().into_iter().copied().collect::<Vec<_>>(), expected);
        let mut rev = expected;
        rev.reverse();
        assert_eq!(tree.postorder().into_iter().copied().collect::<Vec<_>>(), rev);
    }
}
