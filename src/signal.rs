//! Signal functions - explicit-step stateful transducers.
//!
//! A signal function maps an input stream to an output stream. The output at
//! step *n* depends only on inputs delivered at steps <= *n*, never on
//! future inputs. State is an explicit value owned by the stepper and
//! threaded through each `step` call, not a hidden mutable capture.
//!
//! Two flavors:
//!
//! - [`Sf`] - a bare stepper: nothing to show until the first input arrives.
//! - [`Sf1`] - a primed stepper: carries a current output (`head`) that
//!   exists before any input, so consumers always have something to read.
//!
//! # Example
//!
//! ```
//! use ember_tui::signal;
//!
//! let mut total = signal::stateful(0, |sum: &mut i32, n: i32| {
//!     *sum += n;
//!     *sum
//! });
//!
//! assert_eq!(total.step(2), 2);
//! assert_eq!(total.step(3), 5);
//! ```

use std::rc::Rc;

use crate::types::Either;

// =============================================================================
// Stepper
// =============================================================================

/// One step of a signal function: consume an input, produce an output.
trait Stepper<I, O> {
    fn step(&mut self, input: I) -> O;
}

// =============================================================================
// Sf - bare signal function
// =============================================================================

/// A signal function from `I` inputs to `O` outputs.
pub struct Sf<I, O> {
    stepper: Box<dyn Stepper<I, O>>,
}

impl<I: 'static, O: 'static> Sf<I, O> {
    /// Advance one step: consume the next input, produce the next output.
    pub fn step(&mut self, input: I) -> O {
        self.stepper.step(input)
    }

    /// Post-compose a total output transform.
    ///
    /// Applies at output time only; internal state is untouched.
    pub fn map<T: 'static>(self, f: impl Fn(O) -> T + 'static) -> Sf<I, T> {
        Sf {
            stepper: Box::new(Mapped {
                inner: self,
                f: Rc::new(f),
            }),
        }
    }

    /// Prime with an initial output, available before the first input.
    pub fn starting_with(self, initial: O) -> Sf1<I, O> {
        Sf1 {
            head: initial,
            tail: self,
        }
    }
}

/// Build a signal function from a seed state and a transition function.
///
/// The seed is owned by the stepper; the transition receives it mutably on
/// every step together with the next input.
pub fn stateful<S, I, O>(seed: S, transition: impl Fn(&mut S, I) -> O + 'static) -> Sf<I, O>
where
    S: 'static,
    I: 'static,
    O: 'static,
{
    Sf {
        stepper: Box::new(Stateful {
            state: seed,
            transition: Box::new(transition),
        }),
    }
}

/// The raw input stream, unmodified.
pub fn input<I: 'static>() -> Sf<I, I> {
    stateful((), |_, input| input)
}

struct Stateful<S, I, O> {
    state: S,
    transition: Box<dyn Fn(&mut S, I) -> O>,
}

impl<S, I, O> Stepper<I, O> for Stateful<S, I, O> {
    fn step(&mut self, input: I) -> O {
        (self.transition)(&mut self.state, input)
    }
}

struct Mapped<I, O, T> {
    inner: Sf<I, O>,
    f: Rc<dyn Fn(O) -> T>,
}

impl<I: 'static, O: 'static, T> Stepper<I, T> for Mapped<I, O, T> {
    fn step(&mut self, input: I) -> T {
        (self.f)(self.inner.step(input))
    }
}

// =============================================================================
// Sf1 - primed signal function
// =============================================================================

/// A signal function with a current output.
///
/// The head exists before the first input arrives and is replaced by each
/// subsequent step's output.
pub struct Sf1<I, O> {
    head: O,
    tail: Sf<I, O>,
}

impl<I: 'static, O: 'static> Sf1<I, O> {
    /// The current output.
    pub fn head(&self) -> &O {
        &self.head
    }

    /// Advance one step and return the new current output.
    pub fn step(&mut self, input: I) -> &O {
        self.head = self.tail.step(input);
        &self.head
    }

    /// Post-compose a total output transform over the head and every future
    /// output.
    pub fn map<T: 'static>(self, f: impl Fn(O) -> T + 'static) -> Sf1<I, T> {
        let f = Rc::new(f);
        let head = f(self.head);
        let tail = {
            let f = f.clone();
            self.tail.map(move |output| f(output))
        };
        Sf1 { head, tail }
    }
}

// =============================================================================
// merge_with - lockstep combination
// =============================================================================

/// Run two primed signal functions side by side, addressed by `Either`.
///
/// A `Left` input advances only the left stepper and a `Right` input only
/// the right one; the output is always `merge(left.head(), right.head())`,
/// so the non-addressed side contributes its most recent output unchanged.
/// Each side keeps exclusive ownership of its own state.
pub fn merge_with<I, J, A, B, O>(
    merge: impl Fn(&A, &B) -> O + 'static,
    left: Sf1<I, A>,
    right: Sf1<J, B>,
) -> Sf1<Either<I, J>, O>
where
    I: 'static,
    J: 'static,
    A: 'static,
    B: 'static,
    O: 'static,
{
    let head = merge(left.head(), right.head());
    Sf1 {
        head,
        tail: Sf {
            stepper: Box::new(Merged {
                left,
                right,
                merge: Box::new(merge),
            }),
        },
    }
}

struct Merged<I, J, A, B, O> {
    left: Sf1<I, A>,
    right: Sf1<J, B>,
    merge: Box<dyn Fn(&A, &B) -> O>,
}

impl<I: 'static, J: 'static, A: 'static, B: 'static, O> Stepper<Either<I, J>, O>
    for Merged<I, J, A, B, O>
{
    fn step(&mut self, input: Either<I, J>) -> O {
        match input {
            Either::Left(input) => {
                self.left.step(input);
            }
            Either::Right(input) => {
                self.right.step(input);
            }
        }
        (self.merge)(self.left.head(), self.right.head())
    }
}

// =============================================================================
// Tests
// =============================================================================
