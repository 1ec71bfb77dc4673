//! # Binary Search Tree / Red-Black Tree
//!
//! Word → frequency tree that is either a plain binary search tree or a
//! red-black tree. The kind is fixed when the tree is created and stored on
//! the tree itself, so trees of both kinds can coexist.
//!
//! ## Insertion (red-black)
//!
//! Each mutating step takes ownership of a subtree and hands back the subtree
//! that replaces it. After the recursive call returns, `fix` looks at most two
//! levels below the current node and repairs a red-red violation there:
//!
//! ```text
//!   left-left, uncle black         left-right, uncle black
//!   (rotate right at N)            (rotate left at L, rotate right at N)
//!
//!         N(b)                           N(b)
//!        /    \                         /    \
//!      L(r)    U(b)     ──►           L(r)    U(b)     ──►     X(b)
//!      /                                 \                    /    \
//!    X(r)                                X(r)               L(r)   N(r)
//!
//!          ──►   L(b)
//!               /    \
//!             X(r)   N(r)
//!                      \
//!                      U(b)
//!
//!   red uncle (any side): recolour, push the red up
//!
//!         N(b)                  N(r)
//!        /    \       ──►      /    \
//!      L(r)   U(r)           L(b)   U(b)
//!      /                     /
//!    X(r)                  X(r)
//! ```
//!
//! The right-hand cases are the mirror image. Because `fix` runs once per
//! ancestor while the insert unwinds, violations move up until they are
//! absorbed; the root is blackened after every insert.
//!
//! ## Plain BST
//!
//! Without rebalancing a sorted input degenerates into a chain, so BST
//! insertion, lookups, traversals and `Drop` walk the tree iteratively.

use std::cmp::Ordering;
use std::io::{self, Write};

use log::{debug, trace};

use crate::common::config::{Frequency, TreeConfig};
use crate::common::exception::DictError;
use crate::container::dictionary::WordDictionary;
use crate::container::tree_dot::write_dot;

/// Balancing discipline of a [`SearchTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TreeKind {
    #[default]
    Bst,
    RedBlack,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Colour {
    Red,
    Black,
}

pub(crate) type Link = Option<Box<TreeNode>>;

#[derive(Debug)]
pub(crate) struct TreeNode {
    pub(crate) key: Box<str>,
    pub(crate) frequency: Frequency,
    pub(crate) colour: Colour,
    pub(crate) left: Link,
    pub(crate) right: Link,
}

impl TreeNode {
    fn new(word: &str, kind: TreeKind) -> Self {
        let colour = match kind {
            TreeKind::RedBlack => Colour::Red,
            TreeKind::Bst => Colour::Black,
        };
        TreeNode {
            key: word.into(),
            frequency: 1,
            colour,
            left: None,
            right: None,
        }
    }
}

fn is_red(link: &Link) -> bool {
    matches!(link, Some(node) if node.colour == Colour::Red)
}

fn set_colour(link: &mut Link, colour: Colour) {
    if let Some(node) = link {
        node.colour = colour;
    }
}

/// Right child becomes the subtree root; its old left subtree moves under `node`.
fn rotate_left(mut node: Box<TreeNode>) -> Box<TreeNode> {
    match node.right.take() {
        Some(mut pivot) => {
            node.right = pivot.left.take();
            pivot.left = Some(node);
            pivot
        }
        None => node,
    }
}

/// Left child becomes the subtree root; its old right subtree moves under `node`.
fn rotate_right(mut node: Box<TreeNode>) -> Box<TreeNode> {
    match node.left.take() {
        Some(mut pivot) => {
            node.left = pivot.right.take();
            pivot.right = Some(node);
            pivot
        }
        None => node,
    }
}

/// Colours both children black and `node` red.
fn push_red_up(mut node: Box<TreeNode>) -> Box<TreeNode> {
    trace!("Recolouring around {:?}", node.key);
    set_colour(&mut node.left, Colour::Black);
    set_colour(&mut node.right, Colour::Black);
    node.colour = Colour::Red;
    node
}

/// Repairs a red-red violation among `node`'s children and grandchildren.
fn fix(mut node: Box<TreeNode>) -> Box<TreeNode> {
    if let Some(left) = node.left.as_deref() {
        if left.colour == Colour::Red {
            let outer_red = is_red(&left.left);
            let inner_red = is_red(&left.right);
            let uncle_red = is_red(&node.right);

            if outer_red && uncle_red {
                return push_red_up(node);
            }
            if outer_red {
                trace!("Left-left case at {:?}, rotating right", node.key);
                node.colour = Colour::Red;
                set_colour(&mut node.left, Colour::Black);
                return rotate_right(node);
            }
            if inner_red && uncle_red {
                return push_red_up(node);
            }
            if inner_red {
                trace!("Left-right case at {:?}, double rotation", node.key);
                node.colour = Colour::Red;
                if let Some(mut left) = node.left.take() {
                    set_colour(&mut left.right, Colour::Black);
                    node.left = Some(rotate_left(left));
                }
                return rotate_right(node);
            }
        }
    }

    if let Some(right) = node.right.as_deref() {
        if right.colour == Colour::Red {
            let inner_red = is_red(&right.left);
            let outer_red = is_red(&right.right);
            let uncle_red = is_red(&node.left);

            if inner_red && uncle_red {
                return push_red_up(node);
            }
            if inner_red {
                trace!("Right-left case at {:?}, double rotation", node.key);
                node.colour = Colour::Red;
                if let Some(mut right) = node.right.take() {
                    set_colour(&mut right.left, Colour::Black);
                    node.right = Some(rotate_right(right));
                }
                return rotate_left(node);
            }
            if outer_red && uncle_red {
                return push_red_up(node);
            }
            if outer_red {
                trace!("Right-right case at {:?}, rotating left", node.key);
                node.colour = Colour::Red;
                set_colour(&mut node.right, Colour::Black);
                return rotate_left(node);
            }
        }
    }

    node
}

/// Recursive red-black insert; returns the subtree that replaces `link`.
fn insert_red_black(link: Link, word: &str, frequency: &mut Frequency) -> Box<TreeNode> {
    let mut node = match link {
        Some(node) => node,
        None => {
            *frequency = 1;
            return Box::new(TreeNode::new(word, TreeKind::RedBlack));
        }
    };

    match word.cmp(&node.key) {
        Ordering::Equal => {
            node.frequency += 1;
            *frequency = node.frequency;
        }
        Ordering::Less => {
            node.left = Some(insert_red_black(node.left.take(), word, frequency));
        }
        Ordering::Greater => {
            node.right = Some(insert_red_black(node.right.take(), word, frequency));
        }
    }
    fix(node)
}

#[derive(Debug, Default)]
pub struct SearchTree {
    root: Link,
    kind: TreeKind,
    len: usize,
}

impl SearchTree {
    pub fn new(kind: TreeKind) -> Self {
        debug!("Creating search tree: kind={:?}", kind);
        Self {
            root: None,
            kind,
            len: 0,
        }
    }

    pub fn with_config(config: TreeConfig) -> Self {
        Self::new(config.kind)
    }

    pub fn kind(&self) -> TreeKind {
        self.kind
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub(crate) fn root(&self) -> Option<&TreeNode> {
        self.root.as_deref()
    }

    /// Colour of the root node, `None` for an empty tree.
    pub fn root_colour(&self) -> Option<Colour> {
        self.root.as_ref().map(|node| node.colour)
    }

    /// Adds one occurrence of `word` and returns its new frequency.
    pub fn insert(&mut self, word: &str) -> Frequency {
        let frequency = match self.kind {
            TreeKind::Bst => self.insert_bst(word),
            TreeKind::RedBlack => {
                let mut frequency = 0;
                let root = insert_red_black(self.root.take(), word, &mut frequency);
                self.root = Some(root);
                frequency
            }
        };
        if frequency == 1 {
            self.len += 1;
        }
        self.blacken_root();
        frequency
    }

    fn insert_bst(&mut self, word: &str) -> Frequency {
        let mut cursor = &mut self.root;
        while let Some(node) = cursor {
            cursor = match word.cmp(&node.key) {
                Ordering::Equal => {
                    node.frequency += 1;
                    return node.frequency;
                }
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
            };
        }
        *cursor = Some(Box::new(TreeNode::new(word, TreeKind::Bst)));
        1
    }

    /// Colours the root black. Only meaningful for red-black trees; `insert`
    /// already does this, so calling it again is harmless.
    pub fn blacken_root(&mut self) {
        if self.kind == TreeKind::RedBlack {
            set_colour(&mut self.root, Colour::Black);
        }
    }

    pub fn search(&self, word: &str) -> bool {
        self.frequency(word).is_some()
    }

    pub fn frequency(&self, word: &str) -> Option<Frequency> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match word.cmp(&node.key) {
                Ordering::Equal => return Some(node.frequency),
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
            };
        }
        None
    }

    /// Visits node, then left subtree, then right subtree.
    pub fn preorder(&self, mut visit: impl FnMut(&str, Frequency)) {
        let mut stack: Vec<&TreeNode> = self.root.as_deref().into_iter().collect();
        while let Some(node) = stack.pop() {
            visit(&node.key, node.frequency);
            if let Some(right) = node.right.as_deref() {
                stack.push(right);
            }
            if let Some(left) = node.left.as_deref() {
                stack.push(left);
            }
        }
    }

    /// Visits words in ascending order.
    pub fn inorder(&self, mut visit: impl FnMut(&str, Frequency)) {
        let mut stack: Vec<&TreeNode> = Vec::new();
        let mut current = self.root.as_deref();
        loop {
            while let Some(node) = current {
                stack.push(node);
                current = node.left.as_deref();
            }
            match stack.pop() {
                Some(node) => {
                    visit(&node.key, node.frequency);
                    current = node.right.as_deref();
                }
                None => break,
            }
        }
    }

    /// Edges on the longest root-to-leaf path; 0 for an empty or single-node tree.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack: Vec<(&TreeNode, usize)> =
            self.root.as_deref().map(|node| (node, 0)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            for child in [node.left.as_deref(), node.right.as_deref()].into_iter().flatten() {
                stack.push((child, depth + 1));
            }
        }
        deepest
    }

    /// Writes a Graphviz DOT description of the tree.
    pub fn output_dot<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write_dot(self, out)
    }

    /// Checks the red-black colour rules and returns the black height
    /// (black nodes on every root-to-leaf path).
    pub fn check_red_black(&self) -> Result<usize, String> {
        if is_red(&self.root) {
            return Err("root is red".to_string());
        }
        black_height(&self.root)
    }

    /// True if an inorder walk yields strictly increasing keys.
    pub fn is_ordered(&self) -> bool {
        let mut previous: Option<String> = None;
        let mut ordered = true;
        self.inorder(|word, _| {
            if let Some(prev) = previous.as_deref() {
                ordered &= prev < word;
            }
            previous = Some(word.to_string());
        });
        ordered
    }
}

fn black_height(link: &Link) -> Result<usize, String> {
    let node = match link {
        Some(node) => node,
        None => return Ok(1),
    };
    if node.colour == Colour::Red && (is_red(&node.left) || is_red(&node.right)) {
        return Err(format!("red node {:?} has a red child", node.key));
    }
    let left = black_height(&node.left)?;
    let right = black_height(&node.right)?;
    if left != right {
        return Err(format!(
            "black heights differ under {:?}: {} vs {}",
            node.key, left, right
        ));
    }
    Ok(left + usize::from(node.colour == Colour::Black))
}

impl Drop for SearchTree {
    fn drop(&mut self) {
        let mut stack: Vec<Box<TreeNode>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl WordDictionary for SearchTree {
    fn insert(&mut self, word: &str) -> Result<Frequency, DictError> {
        Ok(SearchTree::insert(self, word))
    }

    fn frequency(&self, word: &str) -> Option<Frequency> {
        SearchTree::frequency(self, word)
    }

    fn len(&self) -> usize {
        self.len
    }

    fn for_each_entry(&self, visit: &mut dyn FnMut(&str, Frequency)) {
        self.preorder(|word, frequency| visit(word, frequency));
    }
}
