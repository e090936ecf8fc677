//! Event handler storage for elements
//!
//! Handlers are registered on an [`Element`](crate::Element) while building
//! the tree and invoked by [`RenderTree::dispatch`](crate::RenderTree::dispatch)
//! once the tree is mounted.
//!
//! ```ignore
//! use tint_markup::prelude::*;
//!
//! let ui = button()
//!     .child("Save")
//!     .on_click(|_| println!("saved"))
//!     .on_focus(|ctx| println!("focused {:?}", ctx.node_id));
//! ```

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::tree::NodeId;

/// Callback for handling events
///
/// Uses Rc since UI is single-threaded.
pub type EventCallback = Rc<dyn Fn(&EventContext)>;

/// Event kinds an element can listen for
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventType {
    /// Pointer or keyboard activation
    Click,
    /// Element gained keyboard focus
    Focus,
    /// Element lost keyboard focus
    Blur,
    /// Key pressed while focused
    KeyDown,
    /// Key released while focused
    KeyUp,
    /// Pointer entered the element
    HoverEnter,
    /// Pointer left the element
    HoverLeave,
}

impl EventType {
    /// Whether the event propagates from the target up to its ancestors
    pub fn bubbles(self) -> bool {
        matches!(self, EventType::Click | EventType::KeyDown | EventType::KeyUp)
    }

    /// The DOM event name
    pub fn name(self) -> &'static str {
        match self {
            EventType::Click => "click",
            EventType::Focus => "focus",
            EventType::Blur => "blur",
            EventType::KeyDown => "keydown",
            EventType::KeyUp => "keyup",
            EventType::HoverEnter => "mouseenter",
            EventType::HoverLeave => "mouseleave",
        }
    }
}

/// Context passed to event handlers
#[derive(Clone, Debug, PartialEq)]
pub struct EventContext {
    /// The type of event that occurred
    pub event_type: EventType,
    /// The node whose handler is running
    pub node_id: NodeId,
    /// The node the event was dispatched to
    pub target: NodeId,
    /// Key name for key events
    pub key: Option<String>,
    /// Whether shift modifier is held
    pub shift: bool,
    /// Whether ctrl modifier is held
    pub ctrl: bool,
    /// Whether alt modifier is held
    pub alt: bool,
    /// Whether meta modifier is held (Cmd on macOS, Win on Windows)
    pub meta: bool,
}

impl EventContext {
    /// Create a new event context targeting `node_id`
    pub fn new(event_type: EventType, node_id: NodeId) -> Self {
        Self {
            event_type,
            node_id,
            target: node_id,
            key: None,
            shift: false,
            ctrl: false,
            alt: false,
            meta: false,
        }
    }

    /// Set the key name (for key events)
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Set modifier keys
    pub fn with_modifiers(mut self, shift: bool, ctrl: bool, alt: bool, meta: bool) -> Self {
        self.shift = shift;
        self.ctrl = ctrl;
        self.alt = alt;
        self.meta = meta;
        self
    }

    pub(crate) fn at(&self, node_id: NodeId) -> Self {
        Self {
            node_id,
            ..self.clone()
        }
    }
}

/// Storage for event handlers on an element
#[derive(Default, Clone)]
pub struct EventHandlers {
    handlers: HashMap<EventType, Vec<EventCallback>>,
}

impl EventHandlers {
    /// Create a new empty event handlers storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if there are any handlers registered
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Check if a handler is registered for a specific event type
    pub fn has_handler(&self, event_type: EventType) -> bool {
        self.handlers.contains_key(&event_type)
    }

    /// Register a handler for an event type
    pub fn on<F>(&mut self, event_type: EventType, handler: F)
    where
        F: Fn(&EventContext) + 'static,
    {
        self.push(event_type, Rc::new(handler));
    }

    /// Register an already shared callback
    pub fn push(&mut self, event_type: EventType, handler: EventCallback) {
        self.handlers.entry(event_type).or_default().push(handler);
    }

    /// Get handlers for an event type
    pub fn get(&self, event_type: EventType) -> Option<&[EventCallback]> {
        self.handlers.get(&event_type).map(|v| v.as_slice())
    }

    /// Get all registered event types
    pub fn event_types(&self) -> impl Iterator<Item = EventType> + '_ {
        self.handlers.keys().copied()
    }

    /// Dispatch an event to all registered handlers for that type
    ///
    /// Returns the number of handlers invoked.
    pub fn dispatch(&self, ctx: &EventContext) -> usize {
        match self.handlers.get(&ctx.event_type) {
            Some(handlers) => {
                for handler in handlers {
                    handler(ctx);
                }
                handlers.len()
            }
            None => 0,
        }
    }

    /// Merge another set of handlers into this one
    pub fn merge(&mut self, other: EventHandlers) {
        for (event_type, handlers) in other.handlers {
            self.handlers
                .entry(event_type)
                .or_default()
                .extend(handlers);
        }
    }

    /// Register a click handler
    pub fn on_click<F>(&mut self, handler: F)
    where
        F: Fn(&EventContext) + 'static,
    {
        self.on(EventType::Click, handler);
    }

    /// Register a focus handler
    pub fn on_focus<F>(&mut self, handler: F)
    where
        F: Fn(&EventContext) + 'static,
    {
        self.on(EventType::Focus, handler);
    }

    /// Register a blur handler
    pub fn on_blur<F>(&mut self, handler: F)
    where
        F: Fn(&EventContext) + 'static,
    {
        self.on(EventType::Blur, handler);
    }

    /// Register a key down handler
    pub fn on_key_down<F>(&mut self, handler: F)
    where
        F: Fn(&EventContext) + 'static,
    {
        self.on(EventType::KeyDown, handler);
    }

    /// Register a key up handler
    pub fn on_key_up<F>(&mut self, handler: F)
    where
        F: Fn(&EventContext) + 'static,
    {
        self.on(EventType::KeyUp, handler);
    }

    /// Register a hover enter handler
    pub fn on_hover_enter<F>(&mut self, handler: F)
    where
        F: Fn(&EventContext) + 'static,
    {
        self.on(EventType::HoverEnter, handler);
    }

    /// Register a hover leave handler
    pub fn on_hover_leave<F>(&mut self, handler: F)
    where
        F: Fn(&EventContext) + 'static,
    {
        self.on(EventType::HoverLeave, handler);
    }
}

impl fmt::Debug for EventHandlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut counts: Vec<(&str, usize)> = self
            .handlers
            .iter()
            .map(|(event_type, handlers)| (event_type.name(), handlers.len()))
            .collect();
        counts.sort_unstable();
        f.debug_struct("EventHandlers")
            .field("handlers", &counts)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::SlotMap;
    use std::cell::Cell;

    fn create_node_id() -> NodeId {
        let mut sm: SlotMap<NodeId, ()> = SlotMap::with_key();
        sm.insert(())
    }

    #[test]
    fn test_event_handlers_registration() {
        let mut handlers = EventHandlers::new();
        handlers.on_click(|_| {});

        assert!(!handlers.is_empty());
        assert!(handlers.has_handler(EventType::Click));
        assert!(!handlers.has_handler(EventType::Focus));
    }

    #[test]
    fn test_event_dispatch() {
        let mut handlers = EventHandlers::new();
        let call_count = Rc::new(Cell::new(0));
        let node_id = create_node_id();

        let count = Rc::clone(&call_count);
        handlers.on_click(move |_| count.set(count.get() + 1));

        let ctx = EventContext::new(EventType::Click, node_id);
        assert_eq!(handlers.dispatch(&ctx), 1);
        assert_eq!(call_count.get(), 1);

        handlers.dispatch(&ctx);
        assert_eq!(call_count.get(), 2);

        let blur = EventContext::new(EventType::Blur, node_id);
        assert_eq!(handlers.dispatch(&blur), 0);
        assert_eq!(call_count.get(), 2);
    }

    #[test]
    fn test_multiple_handlers_and_merge() {
        let mut handlers = EventHandlers::new();
        let call_count = Rc::new(Cell::new(0));
        let node_id = create_node_id();

        let count1 = Rc::clone(&call_count);
        handlers.on_key_down(move |_| count1.set(count1.get() + 1));

        let mut other = EventHandlers::new();
        let count2 = Rc::clone(&call_count);
        other.on_key_down(move |ctx| {
            assert_eq!(ctx.key.as_deref(), Some("Enter"));
            count2.set(count2.get() + 10);
        });
        handlers.merge(other);

        let ctx = EventContext::new(EventType::KeyDown, node_id).with_key("Enter");
        assert_eq!(handlers.dispatch(&ctx), 2);
        assert_eq!(call_count.get(), 11);
    }

    #[test]
    fn test_bubbling_kinds() {
        assert!(EventType::Click.bubbles());
        assert!(EventType::KeyUp.bubbles());
        assert!(!EventType::Focus.bubbles());
        assert!(!EventType::HoverEnter.bubbles());
    }
}
