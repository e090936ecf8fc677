//! NodeRef - externally owned handle to a mounted element

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use crate::tree::{NodeId, TreeId};

/// The tree and node a reference is bound to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Binding {
    pub(crate) tree: TreeId,
    pub(crate) node: NodeId,
}

/// Handle that the caller owns and an element binds to when mounted
///
/// Clones share the same slot. Attach it with
/// [`Element::node_ref`](crate::Element::node_ref); after
/// [`RenderTree::mount`](crate::RenderTree::mount) it resolves to the
/// element's [`NodeId`]. It is unbound again when that tree is unmounted
/// or dropped, and resolves only against the tree that bound it.
///
/// ```ignore
/// let save = NodeRef::new();
/// let tree = RenderTree::mount(button().node_ref(&save).child("Save"));
/// tree.focus(&save);
/// ```
#[derive(Clone, Default)]
pub struct NodeRef {
    inner: Rc<Cell<Option<Binding>>>,
}

impl NodeRef {
    /// Create an unbound reference
    pub fn new() -> Self {
        Self::default()
    }

    /// The bound node, if the element is mounted
    pub fn get(&self) -> Option<NodeId> {
        self.inner.get().map(|binding| binding.node)
    }

    /// Whether the reference is bound to a mounted element
    pub fn is_bound(&self) -> bool {
        self.inner.get().is_some()
    }

    /// Whether two handles share the same slot
    pub fn ptr_eq(&self, other: &NodeRef) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    pub(crate) fn binding(&self) -> Option<Binding> {
        self.inner.get()
    }

    pub(crate) fn bind(&self, tree: TreeId, node: NodeId) {
        self.inner.set(Some(Binding { tree, node }));
    }

    /// Unbind, unless a later mount has rebound the handle elsewhere
    pub(crate) fn release(&self, tree: TreeId) {
        if self.inner.get().is_some_and(|binding| binding.tree == tree) {
            self.inner.set(None);
        }
    }
}

impl fmt::Debug for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("node", &self.get())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::SlotMap;

    #[test]
    fn test_clones_share_binding() {
        let mut sm: SlotMap<NodeId, ()> = SlotMap::with_key();
        let id = sm.insert(());

        let (first, second) = (TreeId::next(), TreeId::next());
        assert_ne!(first, second);

        let node_ref = NodeRef::new();
        let handle = node_ref.clone();
        assert!(!handle.is_bound());

        node_ref.bind(first, id);
        assert_eq!(handle.get(), Some(id));
        assert!(handle.ptr_eq(&node_ref));
        assert!(!handle.ptr_eq(&NodeRef::new()));

        handle.release(second);
        assert!(node_ref.is_bound());
        handle.release(first);
        assert!(!node_ref.is_bound());
    }
}
