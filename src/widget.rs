//! Widget adapter - imperative lifecycles inside the signal/tree model.
//!
//! Third-party widgets manage their own display subtree through an
//! init/update/destroy lifecycle and mutate external state behind the
//! component's back. This module bridges that model into the pure
//! request-to-tree world: [`widget`] turns a [`WidgetSpec`] into an ordinary
//! [`Component`] whose rendered tree is a single placeholder carrying a
//! versioned [`Widget`] value.
//!
//! # Versioning
//!
//! Each request delivered to the adapted component produces a widget value
//! stamped with a monotonically increasing version (0 at the first request,
//! then 1, 2, ...). A driver keeps one [`Mounted`] record per live instance;
//! [`Widget::update`] compares the value's version against the version
//! recorded there and only reaches into the imperative `update` callback
//! when the value is strictly newer. Stale, repeated, or out-of-order
//! values are silently "no update due", never an error. This is what lets a
//! tree-matching substrate tell "structurally unchanged, skip the
//! imperative call" from "needs an imperative call".
//!
//! The primed render (shown before any request) carries a pristine value at
//! version 0 whose comparator is a no-op, so the first `update` callback a
//! widget observes happens at the second request. The first request's
//! effect is whatever `init` already established.
//!
//! # Lifecycle contract
//!
//! - `init` runs once on mount. It receives an [`Emit`] callback the widget
//!   may invoke at any later time (a timer, an external interaction) to feed
//!   a response back into the driver as a brand-new external event.
//! - `update` runs per due request, synchronously within the push cycle.
//! - `destroy` runs exactly once on removal and must release every resource
//!   the widget holds. After it returns, calling `emit` is a contract
//!   violation; nothing checks it at runtime.
//!
//! Panics raised inside the callbacks propagate to the driver uncaught.
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//! use ember_tui::component::Component;
//! use ember_tui::widget::{widget, Applied, Emit, Widget, WidgetSpec};
//!
//! let spec: WidgetSpec<u32, (), u32, String> = WidgetSpec {
//!     name: "gauge",
//!     id: "g1".to_string(),
//!     init: Box::new(|_emit| (0, "gauge@0".to_string())),
//!     update: Box::new(|level, shown, _node| {
//!         *shown = *level;
//!         Some(format!("gauge@{shown}"))
//!     }),
//!     destroy: Box::new(|_shown, _node| {}),
//! };
//!
//! let mut gauge: Component<Widget<(), String>, (), u32> = widget(spec);
//!
//! let emit: Emit<()> = Rc::new(|_| {});
//! let mut mounted = gauge.render().placeholders()[0].init(emit);
//!
//! // First request: version 0 matches the mounted version, no call.
//! let first = gauge.step(10).placeholders()[0].clone();
//! assert_eq!(first.update(&mut mounted), Applied::Skipped);
//!
//! // Second request: version 1 is newer, the imperative update runs.
//! let second = gauge.step(25).placeholders()[0].clone();
//! assert_eq!(second.update(&mut mounted), Applied::Replaced);
//! assert_eq!(mounted.node(), "gauge@25");
//! ```

use std::any::Any;
use std::rc::Rc;

use crate::component::Component;
use crate::signal;
use crate::tree::Tree;

// =============================================================================
// Emit
// =============================================================================

/// Callback a widget uses to feed a response back into the driver.
///
/// Supplied by the driver at [`Widget::init`] time. May be invoked
/// asynchronously, at any later time, until `destroy` runs.
pub type Emit<Res> = Rc<dyn Fn(Res)>;

// =============================================================================
// WidgetSpec
// =============================================================================

/// Caller-supplied description of an imperative widget.
///
/// `Req` is the adapted component's request type, `Res` what the widget
/// emits back, `Ctx` its private state, and `N` the external element type
/// it mounts.
pub struct WidgetSpec<Req, Res, Ctx, N> {
    /// Tag distinguishing widget kinds for tree matching.
    pub name: &'static str,
    /// Unique identity of this instance.
    pub id: String,
    /// Runs once on mount: returns the private context and the mounted root
    /// element.
    pub init: Box<dyn Fn(Emit<Res>) -> (Ctx, N)>,
    /// Runs per due request: returns a replacement element if the subtree
    /// must be swapped, `None` if the widget updated itself in place.
    pub update: Box<dyn Fn(&Req, &mut Ctx, &mut N) -> Option<N>>,
    /// Runs exactly once on removal.
    pub destroy: Box<dyn Fn(Ctx, N)>,
}

// =============================================================================
// Applied
// =============================================================================

/// Outcome of presenting a widget value to a mounted instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// The recorded version is already current; no imperative call was made.
    Skipped,
    /// The widget updated its element in place.
    InPlace,
    /// The element was replaced; the new root is in [`Mounted::node`].
    Replaced,
}

// =============================================================================
// Mounted
// =============================================================================

/// A live widget instance, created by [`Widget::init`].
///
/// Holds the widget's opaque private context, its mounted root element, and
/// the version of the last applied value. Destroying it consumes the record,
/// so a second destroy of the same instance does not typecheck.
pub struct Mounted<N> {
    context: Box<dyn Any>,
    node: N,
    version: u64,
}

impl<N> Mounted<N> {
    /// The mounted root element.
    pub fn node(&self) -> &N {
        &self.node
    }

    pub fn node_mut(&mut self) -> &mut N {
        &mut self.node
    }

    /// Version of the last applied widget value.
    pub fn version(&self) -> u64 {
        self.version
    }
}

// =============================================================================
// Widget
// =============================================================================

/// A versioned widget value, embedded as a placeholder in a rendered tree.
///
/// The request and context types of the originating [`WidgetSpec`] are
/// erased into the value's closures; a driver only sees the response type
/// and the element type it has to host.
pub struct Widget<Res, N> {
    name: Rc<str>,
    id: Rc<str>,
    version: u64,
    init: Rc<dyn Fn(Emit<Res>) -> Mounted<N>>,
    update: Rc<dyn Fn(&mut Mounted<N>) -> Applied>,
    destroy: Rc<dyn Fn(Mounted<N>)>,
}

impl<Res, N> Clone for Widget<Res, N> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            id: self.id.clone(),
            version: self.version,
            init: self.init.clone(),
            update: self.update.clone(),
            destroy: self.destroy.clone(),
        }
    }
}

impl<Res, N> Widget<Res, N> {
    /// Widget kind tag, for tree matching.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Instance identity, for tree matching.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Version stamped on this value.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Whether two values belong to the same widget instance.
    pub fn matches(&self, other: &Widget<Res, N>) -> bool {
        self.name == other.name && self.id == other.id
    }

    /// Mount the widget: runs the spec's `init` and records this value's
    /// version on the new instance.
    pub fn init(&self, emit: Emit<Res>) -> Mounted<N> {
        (self.init)(emit)
    }

    /// Present this value to a mounted instance.
    ///
    /// Invokes the spec's `update` only when this value's version is
    /// strictly newer than the recorded one; otherwise returns
    /// [`Applied::Skipped`] without any imperative call.
    pub fn update(&self, mounted: &mut Mounted<N>) -> Applied {
        (self.update)(mounted)
    }

    /// Unmount the widget: runs the spec's `destroy` with the instance's
    /// context and element.
    pub fn destroy(&self, mounted: Mounted<N>) {
        (self.destroy)(mounted)
    }
}

fn build_widget<Req, Res, Ctx, N>(
    spec: &Rc<WidgetSpec<Req, Res, Ctx, N>>,
    name: &Rc<str>,
    id: &Rc<str>,
    version: u64,
    req: Option<Req>,
) -> Widget<Res, N>
where
    Req: 'static,
    Res: 'static,
    Ctx: 'static,
    N: 'static,
{
    let init: Rc<dyn Fn(Emit<Res>) -> Mounted<N>> = {
        let spec = spec.clone();
        Rc::new(move |emit| {
            let (context, node) = (spec.init)(emit);
            Mounted {
                context: Box::new(context),
                node,
                version,
            }
        })
    };

    let update: Rc<dyn Fn(&mut Mounted<N>) -> Applied> = match req {
        // Pristine value: no-op comparator, never reaches the callback.
        None => Rc::new(|_| Applied::Skipped),
        Some(req) => {
            let spec = spec.clone();
            Rc::new(move |mounted| {
                if version <= mounted.version {
                    return Applied::Skipped;
                }
                let Some(context) = mounted.context.downcast_mut::<Ctx>() else {
                    // Instance from a different widget kind: not ours to touch.
                    return Applied::Skipped;
                };
                mounted.version = version;
                match (spec.update)(&req, context, &mut mounted.node) {
                    Some(node) => {
                        mounted.node = node;
                        Applied::Replaced
                    }
                    None => Applied::InPlace,
                }
            })
        }
    };

    let destroy: Rc<dyn Fn(Mounted<N>)> = {
        let spec = spec.clone();
        Rc::new(move |mounted| {
            let Mounted { context, node, .. } = mounted;
            if let Ok(context) = context.downcast::<Ctx>() {
                (spec.destroy)(*context, node);
            }
        })
    };

    Widget {
        name: name.clone(),
        id: id.clone(),
        version,
        init,
        update,
        destroy,
    }
}

// =============================================================================
// Adapter
// =============================================================================

/// Adapt an imperative widget into a component.
///
/// The component renders a single placeholder node carrying a versioned
/// [`Widget`] value. An internal counter signal increments by exactly 1 on
/// every request, independent of request payload: the request at step 0
/// yields version 0, step 1 version 1, and so on. The primed render is the
/// pristine value at version 0 with a no-op comparator, so against an
/// instance mounted from it the first imperative `update` fires at step 1.
pub fn widget<Req, Res, Ctx, N, A>(
    spec: WidgetSpec<Req, Res, Ctx, N>,
) -> Component<Widget<Res, N>, A, Req>
where
    Req: Clone + 'static,
    Res: 'static,
    Ctx: 'static,
    N: 'static,
    A: 'static,
{
    let spec = Rc::new(spec);
    let name: Rc<str> = Rc::from(spec.name);
    let id: Rc<str> = Rc::from(spec.id.as_str());

    let pristine = build_widget(&spec, &name, &id, 0, None);

    let versions = signal::stateful(0u64, move |version: &mut u64, req: Req| {
        let current = *version;
        *version += 1;
        build_widget(&spec, &name, &id, current, Some(req))
    });

    Component::new(
        versions
            .map(|value| Tree::Placeholder(value))
            .starting_with(Tree::Placeholder(pristine)),
    )
}

// =============================================================================
// Tests
// =============================================================================
