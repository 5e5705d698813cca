//! Component - a stateful transducer from requests to rendered trees.
//!
//! A `Component<P, A, Req>` consumes an ordered stream of `Req` values and
//! produces one rendered [`Tree<P, A>`] per request. The tree produced at
//! step *n* may depend on every request delivered at steps <= *n*, never on
//! future ones. `P` is the placeholder type (what the tree embeds), `A` the
//! response-producer payload carried by event handlers.
//!
//! Components are combined before a driver ever sees them:
//!
//! - [`Component::map_placeholder`] - transform the placeholder type.
//! - [`Component::install`] - graft a rendered subtree over every
//!   placeholder, fresh at every render.
//! - [`combine`] - run two components side by side under a tagged union of
//!   their request/response channels.
//! - [`Component::hoist`] - retarget every response producer.
//!
//! The driver surface is two calls: [`Component::render`] for the current
//! tree (available before any request arrives) and [`Component::step`] to
//! feed the next request.
//!
//! # Example
//!
//! ```
//! use ember_tui::component::Component;
//! use ember_tui::tree::Tree;
//!
//! let mut counter: Component<(), (), i32> = Component::stateful(
//!     0,
//!     Tree::text("total 0"),
//!     |total: &mut i32, n: i32| {
//!         *total += n;
//!         Tree::text(format!("total {total}"))
//!     },
//! );
//!
//! assert_eq!(*counter.render(), Tree::text("total 0"));
//! assert_eq!(*counter.step(5), Tree::text("total 5"));
//! assert_eq!(*counter.step(2), Tree::text("total 7"));
//! ```

use crate::signal::{self, Sf1};
use crate::tree::Tree;
use crate::types::Either;

// =============================================================================
// Component
// =============================================================================

/// A stateful transducer from `Req` inputs to rendered trees.
pub struct Component<P, A, Req> {
    sf: Sf1<Req, Tree<P, A>>,
}

impl<P: 'static, A: 'static, Req: 'static> Component<P, A, Req> {
    /// Wrap a primed signal function of rendered trees.
    pub fn new(sf: Sf1<Req, Tree<P, A>>) -> Self {
        Self { sf }
    }

    /// A component that owns a state value and re-renders it per request.
    ///
    /// `initial` is the tree shown before the first request arrives.
    pub fn stateful<S: 'static>(
        seed: S,
        initial: Tree<P, A>,
        render: impl Fn(&mut S, Req) -> Tree<P, A> + 'static,
    ) -> Self {
        Self::new(signal::stateful(seed, render).starting_with(initial))
    }

    /// A component rendered purely from the latest request.
    pub fn stateless(
        initial: Tree<P, A>,
        render: impl Fn(Req) -> Tree<P, A> + 'static,
    ) -> Self {
        Self::new(signal::input().map(render).starting_with(initial))
    }

    /// The current rendered tree.
    ///
    /// Before the first request this is the primed initial output; a driver
    /// mounts from it, then calls [`step`](Self::step) per request.
    pub fn render(&self) -> &Tree<P, A> {
        self.sf.head()
    }

    /// Deliver the next request and return the new rendered tree.
    pub fn step(&mut self, req: Req) -> &Tree<P, A> {
        self.sf.step(req)
    }

    // =========================================================================
    // Placeholder algebra
    // =========================================================================

    /// Replace every placeholder value with `f(p)` at every render.
    ///
    /// Total and structural; never fails, never touches internal state.
    pub fn map_placeholder<Q: 'static>(
        self,
        f: impl Fn(P) -> Q + 'static,
    ) -> Component<Q, A, Req> {
        Component {
            sf: self.sf.map(move |tree| tree.map_placeholder(&f)),
        }
    }

    /// Graft `f(p)` over every placeholder node at every render.
    ///
    /// The grafted subtree is recomputed fresh from the latest placeholder
    /// value each time this component renders. It keeps no signal state of
    /// its own across renders beyond what `f`'s closure captures, and none
    /// of this component's requests are routed into it.
    pub fn install<Q: 'static>(
        self,
        f: impl Fn(P) -> Tree<Q, A> + 'static,
    ) -> Component<Q, A, Req> {
        Component {
            sf: self.sf.map(move |tree| tree.graft(&f)),
        }
    }

    /// Retarget every response producer in the rendered tree.
    ///
    /// Order-preserving and total: no handler is added, dropped, or
    /// reordered, and which requests advance state is unchanged.
    pub fn hoist<B: 'static>(self, f: impl Fn(A) -> B + 'static) -> Component<P, B, Req> {
        Component {
            sf: self.sf.map(move |tree| tree.map_action(&f)),
        }
    }
}

// =============================================================================
// combine
// =============================================================================

/// Run two components independently under a tagged union of their channels.
///
/// A `Left` request advances only `left`'s state; `right`'s most recent tree
/// is held unchanged for that tick, and symmetrically for `Right`. The two
/// sub-states never share memory and never observe each other's inputs.
///
/// `merge` combines the two most recently produced trees into the output
/// tree. Response producers from each side are re-tagged `Left`/`Right`
/// before `merge` sees them, so provenance survives the combination and the
/// driver can route each response back to the side that produced it.
pub fn combine<P, A1, A2, Req1, Req2>(
    merge: impl Fn(&Tree<P, Either<A1, A2>>, &Tree<P, Either<A1, A2>>) -> Tree<P, Either<A1, A2>>
        + 'static,
    left: Component<P, A1, Req1>,
    right: Component<P, A2, Req2>,
) -> Component<P, Either<A1, A2>, Either<Req1, Req2>>
where
    P: 'static,
    A1: 'static,
    A2: 'static,
    Req1: 'static,
    Req2: 'static,
{
    let left = left.hoist(Either::Left);
    let right = right.hoist(Either::Right);
    Component {
        sf: signal::merge_with(merge, left.sf, right.sf),
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::Element;
    use crate::types::EventKind;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Counter that renders its count as a placeholder plus a labeled
    /// handler.
    fn counter(label: &'static str) -> Component<u32, &'static str, ()> {
        let render = move |count: u32| {
            Element::new("box")
                .on(EventKind::Click, label)
                .child(Tree::placeholder(count))
                .into_tree()
        };
        Component::stateful(0u32, render(0), move |count: &mut u32, _: ()| {
            *count += 1;
            render(*count)
        })
    }

    #[test]
    fn test_render_before_first_request() {
        let c = counter("a");
        assert_eq!(c.render().placeholders(), vec![&0]);
    }

    #[test]
    fn test_step_is_history_sensitive() {
        let mut c = counter("a");
        assert_eq!(c.step(()).placeholders(), vec![&1]);
        assert_eq!(c.step(()).placeholders(), vec![&2]);
        assert_eq!(c.step(()).placeholders(), vec![&3]);
    }

    #[test]
    fn test_stateless_renders_latest_request() {
        let mut c: Component<(), (), &'static str> =
            Component::stateless(Tree::text("empty"), |name: &'static str| Tree::text(name));

        assert_eq!(*c.render(), Tree::text("empty"));
        assert_eq!(*c.step("a"), Tree::text("a"));
        assert_eq!(*c.step("b"), Tree::text("b"));
    }

    #[test]
    fn test_map_placeholder_identity_law() {
        let mut plain = counter("a");
        let mut mapped = counter("a").map_placeholder(|p| p);

        assert_eq!(*plain.render(), *mapped.render());
        for _ in 0..4 {
            let expected = plain.step(()).clone();
            assert_eq!(*mapped.step(()), expected);
        }
    }

    #[test]
    fn test_map_placeholder_transforms_every_render() {
        let mut c = counter("a").map_placeholder(|p| p * 100);
        assert_eq!(c.render().placeholders(), vec![&0]);
        assert_eq!(c.step(()).placeholders(), vec![&100]);
        assert_eq!(c.step(()).placeholders(), vec![&200]);
    }

    #[test]
    fn test_install_grafts_fresh_from_latest_value_only() {
        let seen: Rc<RefCell<Vec<u32>>> = Rc::new(RefCell::new(Vec::new()));
        let log = seen.clone();

        let mut c: Component<(), &'static str, ()> = counter("a").install(move |count| {
            log.borrow_mut().push(count);
            Tree::text(format!("count {count}"))
        });

        // Priming grafts the initial render once.
        assert_eq!(*seen.borrow(), vec![0]);

        c.step(());
        c.step(());
        c.step(());

        // One graft per render, always with the current value, no replays
        // of stale values.
        assert_eq!(*seen.borrow(), vec![0, 1, 2, 3]);
        assert!(c.render().placeholders().is_empty());
    }

    #[test]
    fn test_install_does_not_route_requests_into_graft() {
        let calls: Rc<RefCell<u32>> = Rc::new(RefCell::new(0));
        let log = calls.clone();

        let mut c: Component<(), &'static str, ()> = counter("a").install(move |count| {
            *log.borrow_mut() += 1;
            Tree::text(format!("{count}"))
        });

        let before = *calls.borrow();
        c.step(());
        // Exactly one fresh graft per request, nothing else reaches f.
        assert_eq!(*calls.borrow(), before + 1);
    }

    #[test]
    fn test_hoist_preserves_order_and_stepping() {
        let base = |_: &mut u32, _: ()| {
            Element::new("box")
                .on(EventKind::Click, 1u8)
                .on(EventKind::KeyPress, 2u8)
                .into_tree()
        };
        let initial: Tree<(), u8> = Element::new("box")
            .on(EventKind::Click, 1u8)
            .on(EventKind::KeyPress, 2u8)
            .into_tree();

        let mut c = Component::stateful(0u32, initial, base).hoist(|n| format!("h{n}"));

        let check = |tree: &Tree<(), String>| {
            let handlers = tree.handlers();
            assert_eq!(handlers.len(), 2);
            assert_eq!(handlers[0].event, EventKind::Click);
            assert_eq!(handlers[0].action, "h1");
            assert_eq!(handlers[1].event, EventKind::KeyPress);
            assert_eq!(handlers[1].action, "h2");
        };

        check(c.render());
        check(c.step(()));
    }

    #[test]
    fn test_combine_routes_left_and_right_independently() {
        let merged = |a: &Tree<u32, Either<&'static str, &'static str>>,
                      b: &Tree<u32, Either<&'static str, &'static str>>| {
            Element::new("row")
                .child(a.clone())
                .child(b.clone())
                .into_tree()
        };

        let mut both = combine(merged, counter("left"), counter("right"));

        // Initial: both sides primed at zero.
        assert_eq!(both.render().placeholders(), vec![&0, &0]);

        // A Left request advances the left side only.
        assert_eq!(both.step(Either::Left(())).placeholders(), vec![&1, &0]);
        assert_eq!(both.step(Either::Left(())).placeholders(), vec![&2, &0]);

        // A Right request advances the right side only; the left side's
        // output is held unchanged for that tick.
        assert_eq!(both.step(Either::Right(())).placeholders(), vec![&2, &1]);
    }

    #[test]
    fn test_combine_retags_response_producers() {
        let merged = |a: &Tree<u32, Either<&'static str, &'static str>>,
                      b: &Tree<u32, Either<&'static str, &'static str>>| {
            Element::new("row")
                .child(a.clone())
                .child(b.clone())
                .into_tree()
        };

        let mut both = combine(merged, counter("left"), counter("right"));
        both.step(Either::Left(()));

        let handlers = both.render().handlers();
        assert_eq!(handlers.len(), 2);
        assert_eq!(handlers[0].action, Either::Left("left"));
        assert_eq!(handlers[1].action, Either::Right("right"));
    }
}
