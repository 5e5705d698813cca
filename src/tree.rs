//! Rendered tree - the immutable output of one component render.
//!
//! A `Tree<P, A>` is a value, not a live display: element nodes describe
//! flex-box-like containers, text nodes carry content, and placeholder nodes
//! stand in for embedded sub-components or widgets. Element handlers pair an
//! event position with a response producer of type `A` that the driver
//! invokes when the event fires.
//!
//! Every operation here is total and applies at render time only. Nothing in
//! this module touches component state.
//!
//! # Example
//!
//! ```
//! use ember_tui::tree::{Element, Tree};
//! use ember_tui::types::EventKind;
//!
//! let view: Tree<(), &str> = Element::new("box")
//!     .child(Tree::text("Hello"))
//!     .on(EventKind::Click, "clicked")
//!     .into_tree();
//!
//! assert_eq!(view.handlers().len(), 1);
//! ```

use crate::types::{Attr, Color, EventKind};

// =============================================================================
// Style
// =============================================================================

/// Visual styling shared by element and text nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub fg: Color,
    pub bg: Color,
    pub attrs: Attr,
}

// =============================================================================
// Handler
// =============================================================================

/// An event position paired with the response producer the driver invokes
/// when that event fires on the owning element.
#[derive(Debug, Clone, PartialEq)]
pub struct Handler<A> {
    pub event: EventKind,
    pub action: A,
}

// =============================================================================
// Tree
// =============================================================================

/// One node of a rendered tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Tree<P, A> {
    /// A container element with styling, handlers, and children.
    Element(Element<P, A>),
    /// A text leaf.
    Text(Text),
    /// A marker standing in for an embedded sub-component or widget.
    Placeholder(P),
}

/// A container element.
#[derive(Debug, Clone, PartialEq)]
pub struct Element<P, A> {
    pub tag: &'static str,
    pub style: Style,
    pub handlers: Vec<Handler<A>>,
    pub children: Vec<Tree<P, A>>,
}

/// A text leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    pub content: String,
    pub style: Style,
}

impl<P, A> Element<P, A> {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            style: Style::default(),
            handlers: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Attach a response producer to an event position.
    pub fn on(mut self, event: EventKind, action: A) -> Self {
        self.handlers.push(Handler { event, action });
        self
    }

    pub fn child(mut self, child: Tree<P, A>) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Tree<P, A>>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn into_tree(self) -> Tree<P, A> {
        Tree::Element(self)
    }
}

impl<P, A> Tree<P, A> {
    /// A plain text leaf with default styling.
    pub fn text(content: impl Into<String>) -> Self {
        Tree::Text(Text {
            content: content.into(),
            style: Style::default(),
        })
    }

    /// A text leaf with explicit styling.
    pub fn styled_text(content: impl Into<String>, style: Style) -> Self {
        Tree::Text(Text {
            content: content.into(),
            style,
        })
    }

    /// A placeholder node carrying an embeddable value.
    pub fn placeholder(value: P) -> Self {
        Tree::Placeholder(value)
    }

    // =========================================================================
    // Structural transforms
    // =========================================================================

    /// Replace every placeholder value `p` with `f(p)`.
    pub fn map_placeholder<Q>(self, f: &impl Fn(P) -> Q) -> Tree<Q, A> {
        match self {
            Tree::Element(element) => Tree::Element(Element {
                tag: element.tag,
                style: element.style,
                handlers: element.handlers,
                children: element
                    .children
                    .into_iter()
                    .map(|child| child.map_placeholder(f))
                    .collect(),
            }),
            Tree::Text(text) => Tree::Text(text),
            Tree::Placeholder(value) => Tree::Placeholder(f(value)),
        }
    }

    /// Replace every handler payload `a` with `f(a)`.
    ///
    /// Preserves handler order and event kinds; adds and drops nothing.
    pub fn map_action<B>(self, f: &impl Fn(A) -> B) -> Tree<P, B> {
        match self {
            Tree::Element(element) => Tree::Element(Element {
                tag: element.tag,
                style: element.style,
                handlers: element
                    .handlers
                    .into_iter()
                    .map(|handler| Handler {
                        event: handler.event,
                        action: f(handler.action),
                    })
                    .collect(),
                children: element
                    .children
                    .into_iter()
                    .map(|child| child.map_action(f))
                    .collect(),
            }),
            Tree::Text(text) => Tree::Text(text),
            Tree::Placeholder(value) => Tree::Placeholder(value),
        }
    }

    /// Replace every placeholder node with the subtree `f(p)`.
    pub fn graft<Q>(self, f: &impl Fn(P) -> Tree<Q, A>) -> Tree<Q, A> {
        match self {
            Tree::Element(element) => Tree::Element(Element {
                tag: element.tag,
                style: element.style,
                handlers: element.handlers,
                children: element
                    .children
                    .into_iter()
                    .map(|child| child.graft(f))
                    .collect(),
            }),
            Tree::Text(text) => Tree::Text(text),
            Tree::Placeholder(value) => f(value),
        }
    }

    // =========================================================================
    // Walkers
    // =========================================================================

    /// Visit every placeholder value in document order.
    pub fn for_each_placeholder<'a>(&'a self, f: &mut impl FnMut(&'a P)) {
        match self {
            Tree::Element(element) => {
                for child in &element.children {
                    child.for_each_placeholder(f);
                }
            }
            Tree::Text(_) => {}
            Tree::Placeholder(value) => f(value),
        }
    }

    /// All placeholder values in document order.
    pub fn placeholders(&self) -> Vec<&P> {
        let mut found = Vec::new();
        self.for_each_placeholder(&mut |value| found.push(value));
        found
    }

    /// Visit every handler in document order (an element's own handlers
    /// before its children's).
    pub fn for_each_handler<'a>(&'a self, f: &mut impl FnMut(&'a Handler<A>)) {
        if let Tree::Element(element) = self {
            for handler in &element.handlers {
                f(handler);
            }
            for child in &element.children {
                child.for_each_handler(f);
            }
        }
    }

    /// All handlers in document order.
    pub fn handlers(&self) -> Vec<&Handler<A>> {
        let mut found = Vec::new();
        self.for_each_handler(&mut |handler| found.push(handler));
        found
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Tree<i32, &'static str> {
        Element::new("box")
            .on(EventKind::Click, "outer")
            .child(Tree::text("title"))
            .child(Tree::placeholder(1))
            .child(
                Element::new("box")
                    .on(EventKind::KeyPress, "inner")
                    .child(Tree::placeholder(2))
                    .into_tree(),
            )
            .into_tree()
    }

    #[test]
    fn test_placeholders_in_document_order() {
        let tree = sample();
        assert_eq!(tree.placeholders(), vec![&1, &2]);
    }

    #[test]
    fn test_handlers_in_document_order() {
        let tree = sample();
        let actions: Vec<&str> = tree.handlers().iter().map(|h| h.action).collect();
        assert_eq!(actions, vec!["outer", "inner"]);
    }

    #[test]
    fn test_map_placeholder_is_structural() {
        let tree = sample().map_placeholder(&|n| n * 10);
        assert_eq!(tree.placeholders(), vec![&10, &20]);

        // Handlers untouched.
        let actions: Vec<&str> = tree.handlers().iter().map(|h| h.action).collect();
        assert_eq!(actions, vec!["outer", "inner"]);
    }

    #[test]
    fn test_map_action_preserves_order_and_events() {
        let tree = sample().map_action(&|a| format!("[{a}]"));
        let handlers = tree.handlers();

        assert_eq!(handlers.len(), 2);
        assert_eq!(handlers[0].event, EventKind::Click);
        assert_eq!(handlers[0].action, "[outer]");
        assert_eq!(handlers[1].event, EventKind::KeyPress);
        assert_eq!(handlers[1].action, "[inner]");

        // Placeholders untouched.
        assert_eq!(tree.placeholders(), vec![&1, &2]);
    }

    #[test]
    fn test_graft_replaces_placeholder_nodes() {
        let tree: Tree<i32, &str> = sample().graft(&|n| Tree::text(format!("slot {n}")));

        assert!(tree.placeholders().is_empty());

        let mut texts = Vec::new();
        collect_texts(&tree, &mut texts);
        assert_eq!(texts, vec!["title", "slot 1", "slot 2"]);
    }

    #[test]
    fn test_graft_can_introduce_new_placeholders() {
        let tree: Tree<String, &str> = sample().graft(&|n| Tree::placeholder(format!("p{n}")));
        let values: Vec<&String> = tree.placeholders();
        assert_eq!(values, vec!["p1", "p2"]);
    }

    fn collect_texts<'a, P, A>(tree: &'a Tree<P, A>, out: &mut Vec<&'a str>) {
        match tree {
            Tree::Element(element) => {
                for child in &element.children {
                    collect_texts(child, out);
                }
            }
            Tree::Text(text) => out.push(&text.content),
            Tree::Placeholder(_) => {}
        }
    }
}
