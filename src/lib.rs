//! # ember-tui
//!
//! Composable signal-driven UI components for terminal applications.
//!
//! ## Architecture
//!
//! A component is a stateful transducer: it consumes a stream of requests
//! and produces one immutable rendered tree per request. Trees carry
//! placeholder nodes (slots for embedded sub-components and widgets) and
//! event handlers holding response producers for the driver to invoke.
//!
//! ```text
//! Request → Component (signal function) → Tree → driver (diff, display)
//! ```
//!
//! Everything downstream of the tree (diffing, layout, terminal output,
//! event capture) belongs to a driver crate; this one defines the algebra:
//!
//! - [`signal`] - explicit-step signal functions ([`Sf`], [`Sf1`])
//! - [`tree`] - the rendered tree and its total transforms
//! - [`component`] - [`Component`] plus `map_placeholder`, `install`,
//!   [`combine`], and `hoist`
//! - [`mod@widget`] - the imperative-widget adapter with its versioning
//!   protocol
//!
//! ## Modules
//!
//! - [`types`] - `Either`, colors, text attributes, event positions
//! - [`signal`] - stateful steppers, priming, lockstep merging
//! - [`tree`] - `Element` / `Text` / `Placeholder` nodes
//! - [`component`] - the component type and composition operators
//! - [`mod@widget`] - `WidgetSpec`, versioned `Widget` values, `Mounted`
//!   instances

pub mod component;
pub mod signal;
pub mod tree;
pub mod types;
pub mod widget;

// Re-export commonly used items
pub use component::{combine, Component};
pub use signal::{input, merge_with, stateful, Sf, Sf1};
pub use tree::{Element, Handler, Style, Text, Tree};
pub use types::{Attr, Color, Either, EventKind};
pub use widget::{widget, Applied, Emit, Mounted, Widget, WidgetSpec};
