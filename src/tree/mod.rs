//! Arena representation of a verse-object tree.
//!
//! Nested verse objects are flattened into a node table addressed by
//! [`NodeId`] handles, with each node owning a list of child handles:
//! - Replacing a node is a table write; its slot in the parent list is unchanged
//! - Child lists ("arrays") are identified by [`Parent`]
//! - Pre-order iteration uses an explicit stack
//!
//! # Example
//!
//! ```
//! use versealign::VerseObject;
//! use versealign::tree::{Parent, VerseTree};
//!
//! let objects = vec![
//!     VerseObject::milestone("λόγος", 1, 1, vec![VerseObject::word("word", 1, 1)]),
//!     VerseObject::text("."),
//! ];
//! let tree = VerseTree::from_objects(&objects);
//! assert_eq!(tree.children(Parent::Root).len(), 2);
//! assert_eq!(tree.to_objects(), objects);
//! ```

pub mod array;
pub mod word_map;

pub use array::{delete_indices, flatten_array, group_consecutive_numbers};
pub use word_map::{
    OrderedVerse, WordLocation, WordMap, build_ordered_verse_objects, get_ordered_verse_objects,
    get_ordered_verse_objects_from_string,
};

use crate::model::VerseObject;

/// Handle of a node within a [`VerseTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

/// Owner of a child list: the top-level verse array or a node's children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parent {
    Root,
    Node(NodeId),
}

/// A verse object stored in the arena.
///
/// `object.children` is always `None`; nesting lives in `children`.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub object: VerseObject,
    pub children: Option<Vec<NodeId>>,
}

impl Node {
    /// A node without a children list.
    pub fn leaf(object: VerseObject) -> Self {
        Self {
            object,
            children: None,
        }
    }

    /// A node owning the given child handles.
    pub fn branch(object: VerseObject, children: Vec<NodeId>) -> Self {
        Self {
            object,
            children: Some(children),
        }
    }

    fn from_shallow(object: &VerseObject) -> Self {
        Self {
            object: object.shallow_clone(),
            children: object.children.as_ref().map(|_| Vec::new()),
        }
    }
}

/// A verse held as a node table plus the top-level child list.
#[derive(Debug, Clone, Default)]
pub struct VerseTree {
    nodes: Vec<Node>,
    root: Vec<NodeId>,
}

impl VerseTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deep-copy nested verse objects into a new arena.
    pub fn from_objects(objects: &[VerseObject]) -> Self {
        let mut tree = Self::new();
        for object in objects {
            let id = tree.alloc_object(object);
            tree.root.push(id);
        }
        tree
    }

    /// True if the top-level list is empty.
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0 as usize)
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0 as usize)
    }

    pub fn object(&self, id: NodeId) -> Option<&VerseObject> {
        self.node(id).map(|n| &n.object)
    }

    /// Number of allocated nodes, including detached ones.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Allocate a new node and return its handle.
    pub fn alloc_node(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Allocate a verse object and all of its descendants.
    pub fn alloc_object(&mut self, object: &VerseObject) -> NodeId {
        let top = self.alloc_node(Node::from_shallow(object));
        let mut stack: Vec<(NodeId, &[VerseObject])> = Vec::new();
        if let Some(children) = &object.children {
            stack.push((top, children));
        }
        while let Some((parent, children)) = stack.pop() {
            for child in children {
                let id = self.alloc_node(Node::from_shallow(child));
                self.append_child(Parent::Node(parent), id);
                if let Some(grandchildren) = &child.children {
                    stack.push((id, grandchildren));
                }
            }
        }
        top
    }

    /// Overwrite the node behind `id`. Positions in child lists are unaffected.
    pub fn set_node(&mut self, id: NodeId, node: Node) {
        if let Some(slot) = self.nodes.get_mut(id.0 as usize) {
            *slot = node;
        }
    }

    /// Append a child handle to a child list, creating the list if needed.
    pub fn append_child(&mut self, parent: Parent, child: NodeId) {
        match parent {
            Parent::Root => self.root.push(child),
            Parent::Node(id) => {
                if let Some(node) = self.nodes.get_mut(id.0 as usize) {
                    node.children.get_or_insert_with(Vec::new).push(child);
                }
            }
        }
    }

    /// Handles in a child list (empty if the node has no children).
    pub fn children(&self, parent: Parent) -> &[NodeId] {
        match parent {
            Parent::Root => &self.root,
            Parent::Node(id) => self
                .node(id)
                .and_then(|n| n.children.as_deref())
                .unwrap_or(&[]),
        }
    }

    pub fn children_mut(&mut self, parent: Parent) -> Option<&mut Vec<NodeId>> {
        match parent {
            Parent::Root => Some(&mut self.root),
            Parent::Node(id) => self.node_mut(id).and_then(|n| n.children.as_mut()),
        }
    }

    /// Handle stored at `pos` of a child list.
    pub fn child_at(&self, parent: Parent, pos: usize) -> Option<NodeId> {
        self.children(parent).get(pos).copied()
    }

    /// Remove the handle at `pos` if it is still `expected`.
    ///
    /// Returns false for stale or out-of-range slots.
    pub fn remove_child(&mut self, parent: Parent, pos: usize, expected: NodeId) -> bool {
        match self.children_mut(parent) {
            Some(list) if list.get(pos) == Some(&expected) => {
                list.remove(pos);
                true
            }
            _ => false,
        }
    }

    /// Iterate over all reachable nodes in pre-order.
    pub fn iter_preorder(&self) -> PreorderIter<'_> {
        let mut stack = Vec::with_capacity(self.root.len());
        push_reversed(&mut stack, Parent::Root, &self.root);
        PreorderIter { tree: self, stack }
    }

    /// Rebuild nested verse objects from the reachable nodes.
    pub fn to_objects(&self) -> Vec<VerseObject> {
        self.root.iter().filter_map(|&id| self.build_object(id)).collect()
    }

    /// Nested verse object rooted at `id`.
    ///
    /// Children are built before their parent from an explicit stack, so
    /// milestone chains of any depth are rebuilt without recursion.
    pub fn build_object(&self, id: NodeId) -> Option<VerseObject> {
        let mut stack = vec![self.open_frame(id)?];
        loop {
            let top = stack.last_mut()?;
            if let Some(&child) = top.pending.next() {
                if let Some(frame) = self.open_frame(child) {
                    stack.push(frame);
                }
                continue;
            }

            let frame = stack.pop()?;
            let mut object = frame.object;
            object.children = frame.built;
            match stack.last_mut() {
                Some(parent) => parent.built.get_or_insert_with(Vec::new).push(object),
                None => return Some(object),
            }
        }
    }

    fn open_frame(&self, id: NodeId) -> Option<BuildFrame<'_>> {
        let node = self.node(id)?;
        Some(BuildFrame {
            object: node.object.clone(),
            pending: node.children.as_deref().unwrap_or_default().iter(),
            built: node.children.as_ref().map(|c| Vec::with_capacity(c.len())),
        })
    }
}

/// A node being rebuilt, with the child handles not yet visited.
struct BuildFrame<'a> {
    object: VerseObject,
    pending: std::slice::Iter<'a, NodeId>,
    built: Option<Vec<VerseObject>>,
}

/// A position in a child list together with the handle stored there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub parent: Parent,
    pub pos: usize,
    pub node: NodeId,
}

fn push_reversed(stack: &mut Vec<Slot>, parent: Parent, children: &[NodeId]) {
    for (pos, &node) in children.iter().enumerate().rev() {
        stack.push(Slot { parent, pos, node });
    }
}

/// Pre-order iterator over reachable nodes.
pub struct PreorderIter<'a> {
    tree: &'a VerseTree,
    stack: Vec<Slot>,
}

impl<'a> Iterator for PreorderIter<'a> {
    type Item = Slot;

    fn next(&mut self) -> Option<Self::Item> {
        let slot = self.stack.pop()?;

        // Children go on top so they're visited before later siblings
        let children = self.tree.children(Parent::Node(slot.node));
        push_reversed(&mut self.stack, Parent::Node(slot.node), children);

        Some(slot)
    }
}
