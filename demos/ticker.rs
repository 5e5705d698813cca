//! Ticker Example - driving an imperative widget.
//!
//! A stopwatch widget with an init/update/destroy lifecycle is adapted into
//! a component. The demo plays driver: it mounts the widget from the primed
//! render, feeds tick requests, applies the versioned values to the mounted
//! instance, and drains the responses the widget emits back.
//!
//! Run with: cargo run --example ticker

use std::cell::RefCell;
use std::rc::Rc;

use ember_tui::component::Component;
use ember_tui::widget::{widget, Emit, Widget, WidgetSpec};

fn main() {
    println!("=== ember-tui Ticker Example ===\n");

    // Responses the widget emits back to the driver.
    let emitted: Rc<RefCell<Vec<u32>>> = Rc::new(RefCell::new(Vec::new()));

    let spec: WidgetSpec<(), u32, (u32, Emit<u32>), String> = WidgetSpec {
        name: "stopwatch",
        id: "s1".to_string(),
        init: Box::new(|emit| ((0, emit), "stopwatch [0s]".to_string())),
        update: Box::new(|_req, context, _node| {
            let (elapsed, emit) = context;
            *elapsed += 1;
            emit(*elapsed);
            Some(format!("stopwatch [{elapsed}s]"))
        }),
        destroy: Box::new(|context, node| {
            let (elapsed, _emit) = context;
            println!("  destroy: released after {elapsed} applied ticks ({node})");
        }),
    };

    let mut stopwatch: Component<Widget<u32, String>, (), ()> = widget(spec);

    // Mount from the primed render.
    let sink = emitted.clone();
    let emit: Emit<u32> = Rc::new(move |elapsed| sink.borrow_mut().push(elapsed));
    let pristine = stopwatch.render().placeholders()[0].clone();
    let mut mounted = pristine.init(emit);
    println!("mounted: {} (version {})", mounted.node(), mounted.version());

    // Feed five tick requests, applying each versioned value.
    for tick in 1..=5 {
        let value = stopwatch.step(()).placeholders()[0].clone();
        let applied = value.update(&mut mounted);
        println!(
            "tick {tick}: version {} -> {:?}, node {}",
            value.version(),
            applied,
            mounted.node()
        );
    }

    // A value applied twice makes no second imperative call.
    let last = stopwatch.render().placeholders()[0].clone();
    println!("re-apply version {}: {:?}", last.version(), last.update(&mut mounted));

    println!("\nresponses emitted back to the driver: {:?}", emitted.borrow());

    println!("\nunmounting:");
    last.destroy(mounted);

    println!("\n=== Example Complete ===");
}
