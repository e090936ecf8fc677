//! Mounted render trees
//!
//! Mounting assigns every element a [`NodeId`] in document order and binds
//! any [`NodeRef`]s attached while building. The mounted tree routes events
//! to element handlers and tracks keyboard focus.

use std::cell::Cell;

use slotmap::{new_key_type, SlotMap};
use tracing::{debug, trace};

use crate::element::{Element, Node};
use crate::event::{EventContext, EventType};
use crate::node_ref::NodeRef;

new_key_type! {
    /// Id of a mounted element
    pub struct NodeId;
}

/// Identity of one mount, so refs never resolve against another tree
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct TreeId(u64);

thread_local! {
    static NEXT_TREE: Cell<u64> = const { Cell::new(0) };
}

impl TreeId {
    pub(crate) fn next() -> Self {
        NEXT_TREE.with(|next| {
            let id = next.get();
            next.set(id + 1);
            TreeId(id)
        })
    }
}

/// Where a mounted element lives
#[derive(Clone, Debug)]
struct Slot {
    /// Child indices from the root to the element
    path: Vec<usize>,
    parent: Option<NodeId>,
}

/// A mounted tree of nodes
///
/// Dropping the tree unbinds every ref it bound, like [`unmount`](Self::unmount).
#[derive(Debug)]
pub struct RenderTree {
    id: TreeId,
    root: Node,
    nodes: SlotMap<NodeId, Slot>,
    order: Vec<NodeId>,
    refs: Vec<NodeRef>,
    focused: Option<NodeId>,
}

impl RenderTree {
    /// Mount a node, assigning ids and binding refs
    pub fn mount(root: impl Into<Node>) -> Self {
        let mut tree = Self {
            id: TreeId::next(),
            root: root.into(),
            nodes: SlotMap::with_key(),
            order: Vec::new(),
            refs: Vec::new(),
            focused: None,
        };

        let mut pending = Vec::new();
        if let Node::Element(element) = &tree.root {
            collect(element, Vec::new(), None, &mut pending);
        }

        // Parents are collected before their children, so a parent's id
        // exists by the time its children are inserted.
        let mut ids: Vec<NodeId> = Vec::with_capacity(pending.len());
        for (path, parent_index, node_ref) in pending {
            let parent = parent_index.map(|index: usize| ids[index]);
            let id = tree.nodes.insert(Slot { path, parent });
            if let Some(node_ref) = node_ref {
                node_ref.bind(tree.id, id);
                tree.refs.push(node_ref);
            }
            ids.push(id);
        }
        tree.order = ids;

        debug!(
            elements = tree.order.len(),
            refs = tree.refs.len(),
            "mounted render tree"
        );
        tree
    }

    /// Release the tree, unbinding every ref it bound
    pub fn unmount(mut self) -> Node {
        std::mem::replace(&mut self.root, Node::Text(String::new()))
    }

    /// The root node
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Element ids in document order
    pub fn ids(&self) -> &[NodeId] {
        &self.order
    }

    /// Number of mounted elements
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the tree has no elements
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Look up a mounted element
    pub fn element(&self, id: NodeId) -> Option<&Element> {
        let slot = self.nodes.get(id)?;
        let mut element = self.root.as_element()?;
        for &index in &slot.path {
            element = element.child_nodes().get(index)?.as_element()?;
        }
        Some(element)
    }

    /// The element a ref is bound to, if it is bound to this tree
    pub fn element_for(&self, node_ref: &NodeRef) -> Option<&Element> {
        self.resolve(node_ref).and_then(|id| self.element(id))
    }

    /// The id a ref is bound to, if it was bound by this tree
    pub fn resolve(&self, node_ref: &NodeRef) -> Option<NodeId> {
        node_ref
            .binding()
            .filter(|binding| binding.tree == self.id)
            .map(|binding| binding.node)
    }

    /// The parent element id
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id).and_then(|slot| slot.parent)
    }

    /// Ids of elements with the given tag, in document order
    pub fn find_by_tag(&self, tag: &str) -> Vec<NodeId> {
        self.order
            .iter()
            .copied()
            .filter(|&id| self.element(id).is_some_and(|el| el.tag() == tag))
            .collect()
    }

    /// Whether the element or one of its ancestors is disabled
    pub fn is_disabled(&self, id: NodeId) -> bool {
        self.ancestry(id)
            .iter()
            .any(|&node| self.element(node).is_some_and(Element::is_disabled))
    }

    /// Dispatch an event to an element
    ///
    /// Bubbling events run the target's handlers and then each ancestor's.
    /// Events aimed at a disabled element (or inside one) are dropped.
    /// Returns the number of handlers invoked.
    pub fn dispatch(&self, id: NodeId, event_type: EventType) -> usize {
        self.dispatch_context(&EventContext::new(event_type, id))
    }

    /// Dispatch a prepared event context to its target
    pub fn dispatch_context(&self, ctx: &EventContext) -> usize {
        let target = ctx.target;
        if !self.nodes.contains_key(target) {
            debug!(?target, "dispatch to unknown node");
            return 0;
        }
        if self.is_disabled(target) {
            trace!(?target, event = ctx.event_type.name(), "event dropped on disabled element");
            return 0;
        }

        let path = if ctx.event_type.bubbles() {
            self.ancestry(target)
        } else {
            vec![target]
        };

        let mut invoked = 0;
        for node in path {
            if let Some(element) = self.element(node) {
                invoked += element.event_handlers().dispatch(&ctx.at(node));
            }
        }
        invoked
    }

    /// Activate an element as a click would
    pub fn click(&self, id: NodeId) -> usize {
        self.dispatch(id, EventType::Click)
    }

    /// Move focus to the element bound to `node_ref`
    ///
    /// Only focusable, enabled elements take focus. The previously focused
    /// element receives a blur event and the new one a focus event.
    pub fn focus(&mut self, node_ref: &NodeRef) -> bool {
        let Some(id) = self.resolve(node_ref) else {
            return false;
        };
        self.focus_id(id)
    }

    /// Move focus to an element by id
    pub fn focus_id(&mut self, id: NodeId) -> bool {
        let focusable = self.element(id).is_some_and(Element::is_focusable);
        if !focusable || self.is_disabled(id) {
            return false;
        }
        if self.focused == Some(id) {
            return true;
        }
        self.blur();
        self.focused = Some(id);
        self.dispatch(id, EventType::Focus);
        true
    }

    /// Clear focus, sending a blur event to the focused element
    pub fn blur(&mut self) {
        if let Some(previous) = self.focused.take() {
            if let Some(element) = self.element(previous) {
                element
                    .event_handlers()
                    .dispatch(&EventContext::new(EventType::Blur, previous));
            }
        }
    }

    /// The focused element
    pub fn focused(&self) -> Option<NodeId> {
        self.focused
    }

    /// Serialize the tree to HTML
    pub fn to_html(&self) -> String {
        crate::html::to_html(&self.root)
    }

    /// The element followed by its ancestors up to the root
    fn ancestry(&self, id: NodeId) -> Vec<NodeId> {
        let mut path = vec![id];
        let mut current = self.parent(id);
        while let Some(parent) = current {
            path.push(parent);
            current = self.parent(parent);
        }
        path
    }
}

impl Drop for RenderTree {
    fn drop(&mut self) {
        for node_ref in &self.refs {
            node_ref.release(self.id);
        }
    }
}

type PendingSlot = (Vec<usize>, Option<usize>, Option<NodeRef>);

/// Collect elements in document order with their paths and parent indices
fn collect(
    element: &Element,
    path: Vec<usize>,
    parent: Option<usize>,
    out: &mut Vec<PendingSlot>,
) {
    let index = out.len();
    out.push((path.clone(), parent, element.bound_ref().cloned()));
    for (position, child) in element.child_nodes().iter().enumerate() {
        if let Node::Element(child) = child {
            let mut child_path = path.clone();
            child_path.push(position);
            collect(child, child_path, Some(index), out);
        }
    }
}
