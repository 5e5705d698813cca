//! Counter Example - composing components.
//!
//! Two counter components run side by side under `combine`, each rendering
//! its count into a placeholder that `install` grafts a gauge subtree over.
//! Responses produced by event handlers come back tagged with the side that
//! produced them and can be fed straight back in as the next request.
//!
//! Run with: cargo run --example counter

use std::rc::Rc;

use ember_tui::component::{combine, Component};
use ember_tui::tree::{Element, Style, Tree};
use ember_tui::types::{Attr, Color, Either, EventKind};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Msg {
    Increment,
}

type Action = Rc<dyn Fn() -> Msg>;

/// A counter: bold label, click handler, and a placeholder slot carrying
/// the current count for a gauge to be installed over.
fn counter(label: &'static str) -> Component<u32, Action, Msg> {
    let render = move |count: u32| -> Tree<u32, Action> {
        Element::new("box")
            .style(Style {
                fg: Color::CYAN,
                ..Style::default()
            })
            .on(EventKind::Click, Rc::new(|| Msg::Increment) as Action)
            .child(Tree::styled_text(
                label,
                Style {
                    attrs: Attr::BOLD,
                    ..Style::default()
                },
            ))
            .child(Tree::placeholder(count))
            .into_tree()
    };

    Component::stateful(0u32, render(0), move |count: &mut u32, msg: Msg| {
        match msg {
            Msg::Increment => *count += 1,
        }
        render(*count)
    })
}

/// Gauge subtree grafted over the count placeholder, fresh every render.
fn gauge(count: u32) -> Tree<(), Action> {
    let filled = (count as usize).min(8);
    Element::new("gauge")
        .child(Tree::text(format!(
            "[{}{}]",
            "#".repeat(filled),
            "-".repeat(8 - filled)
        )))
        .into_tree()
}

fn print_tree<A>(tree: &Tree<(), A>, indent: usize) {
    let pad = "  ".repeat(indent);
    match tree {
        Tree::Element(element) => {
            println!("{pad}<{}> ({} handlers)", element.tag, element.handlers.len());
            for child in &element.children {
                print_tree(child, indent + 1);
            }
        }
        Tree::Text(text) => println!("{pad}\"{}\"", text.content),
        Tree::Placeholder(_) => println!("{pad}[placeholder]"),
    }
}

fn main() {
    println!("=== ember-tui Counter Example ===\n");

    let left = counter("left").install(gauge);
    let right = counter("right").install(gauge);

    let merge = |a: &Tree<(), Either<Action, Action>>, b: &Tree<(), Either<Action, Action>>| {
        Element::new("row")
            .child(a.clone())
            .child(b.clone())
            .into_tree()
    };

    let mut app = combine(merge, left, right);

    println!("Initial render (before any request):");
    print_tree(app.render(), 1);

    println!("\nAfter two Left increments and one Right increment:");
    app.step(Either::Left(Msg::Increment));
    app.step(Either::Left(Msg::Increment));
    app.step(Either::Right(Msg::Increment));
    print_tree(app.render(), 1);

    // Simulate the driver dispatching a click on the first handler: the
    // produced response keeps the tag of the side that owns the handler,
    // so it can be routed straight back in.
    let response = {
        let handlers = app.render().handlers();
        match &handlers[0].action {
            Either::Left(produce) => Either::Left(produce()),
            Either::Right(produce) => Either::Right(produce()),
        }
    };
    println!("\nDispatched click produced: {response:?}");

    app.step(response);
    println!("\nAfter feeding the response back:");
    print_tree(app.render(), 1);

    println!("\n=== Example Complete ===");
}
