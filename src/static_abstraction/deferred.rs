/*!

# Deferred Completion (the explicit-instantiation analog)

The deferred model's promise, in its home ecosystem, is a build-artifact one:
callers compile against the generic consumer's *declaration* only, the bodies
are compiled exactly once per concrete unit in an explicitly enumerated list,
and a unit missing from the list surfaces as an undefined symbol at link
time. Rust cannot reproduce the artifact story, because a generic's bodies
always travel with its declaration and every consuming crate monomorphizes
for itself. What Rust can reproduce, faithfully, is the part of the model
that was ever worth wanting: a closed, crate-controlled list of admitted
pairings, with everything off the list refused before the program exists.

The pieces, all in this file:

- a sealed marker trait, implementable only here, that plays the role of the
  enumeration: a unit is "on the list" exactly when the marker is implemented
  for it;
- the generic consumer, bounded by the boundary *and* the marker, so its
  declaration is public but its completion is not open;
- a completion macro that admits one unit: it implements the marker, exports
  the completed pairing under a concrete alias (the name callers are expected
  to reach for, the way a C++ caller reaches for the one predeclared
  `B<A>`), and records the unit's name before `main` so the enumerated list
  is observable at runtime;
- the list itself, behind [`enumerated_completions`].

A unit off the list fails where the eager exhibit's unconstrained types fail,
at compile time, with the sealed bound named in the diagnostic. That is one
build stage *earlier* than the linker error the deferred model classically
produces; the refusal is the same, only sooner:

```compile_fail
use abstraction_patterns::static_abstraction::deferred::Turnstile;
use abstraction_patterns::units::Tick;

struct Outsider;

impl Tick for Outsider {
    fn tick(&mut self) {}

    fn describe() -> &'static str {
        "satisfies the boundary, but was never enumerated"
    }
}

let _ = Turnstile::new(Outsider);
```

One more fidelity note. In the classic model, the single translation unit
that performs the instantiations is the one place allowed to see the concrete
units' definitions; callers are not. The same asymmetry holds here: this file
imports [`Counter`] and [`CallLog`] by name because enumerating them is its
job, while the generic consumer above the macro invocations names nothing but
the boundary.

*/

use std::sync::Mutex;

use crate::units::{CallLog, Counter, Tick};

mod sealed {
    /// Implemented only by `complete_turnstile_for!` invocations in the
    /// parent module. Downstream code cannot name this trait, so the
    /// completion list is closed.
    pub trait Enumerated {}
}

/// The generic consumer, declared once, completable only for units on the
/// enumerated list.
///
/// The API mirrors the eager exhibit's consumer; the only difference is the
/// sealed bound. Callers outside this crate cannot even spell `Turnstile<X>`
/// for a new `X`; they use the exported aliases instead.
pub struct Turnstile<T: Tick + sealed::Enumerated> {
    counter: T,
}

impl<T: Tick + sealed::Enumerated> Turnstile<T> {
    pub fn new(counter: T) -> Self {
        Self { counter }
    }

    pub fn push(&mut self) {
        self.counter.tick();
    }

    pub fn counter(&self) -> &T {
        &self.counter
    }

    pub fn into_counter(self) -> T {
        self.counter
    }

    /// The unit's type-level self-description, exactly as the eager
    /// consumer exposes it.
    pub fn describe_unit() -> &'static str {
        T::describe()
    }
}

impl<T: Tick + sealed::Enumerated + Default> Default for Turnstile<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

/// Names of every unit enumerated for completion, recorded before `main`.
static COMPLETIONS: Mutex<Vec<&'static str>> = Mutex::new(Vec::new());

fn record_completion(name: &'static str) {
    COMPLETIONS.lock().unwrap().push(name);
}

/// The enumerated completion list.
///
/// Sorted before returning, because pre-`main` registration order is
/// unspecified and nothing should come to depend on it.
pub fn enumerated_completions() -> Vec<&'static str> {
    let mut names = COMPLETIONS.lock().unwrap().clone();
    names.sort_unstable();
    names
}

/// Completes [`Turnstile`] for one concrete unit: admits the unit to the
/// sealed list, exports the completed pairing under a concrete alias, and
/// records the enumeration before `main`.
macro_rules! complete_turnstile_for {
    ($unit:ident) => {
        impl sealed::Enumerated for $unit {}

        $crate::paste::paste! {
            /// A completed consumer, the name callers are expected to
            /// reach for.
            pub type [<$unit Turnstile>] = Turnstile<$unit>;

            $crate::ctor::declarative::ctor! {
                #[ctor]
                fn [<_record_completion_ $unit:snake>]() {
                    record_completion(stringify!($unit));
                }
            }
        }
    };
}

complete_turnstile_for!(Counter);
complete_turnstile_for!(CallLog);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_pushes_advance_the_counter_to_three() {
        let mut turnstile = CounterTurnstile::new(Counter::new());
        turnstile.push();
        turnstile.push();
        turnstile.push();
        assert_eq!(turnstile.counter().count(), 3);
    }

    #[test]
    fn substituting_the_double_needs_no_consumer_change() {
        let counter = Counter::new();

        let mut turnstile = CallLogTurnstile::new(CallLog::new());
        turnstile.push();
        turnstile.push();
        turnstile.push();

        assert_eq!(counter.count(), 0);
        assert_eq!(turnstile.counter().calls().len(), 3);
    }

    #[test]
    fn the_enumerated_list_is_observable() {
        assert_eq!(enumerated_completions(), ["CallLog", "Counter"]);
    }

    #[test]
    fn completed_pairings_keep_the_eager_consumer_surface() {
        let mut turnstile = CounterTurnstile::default();
        turnstile.push();
        assert_eq!(turnstile.counter().count(), 1);

        assert_eq!(CounterTurnstile::describe_unit(), Counter::describe());
    }

    #[test]
    fn completed_pairings_match_the_eager_model_observably() {
        let mut deferred = CounterTurnstile::new(Counter::new());
        let mut eager = crate::static_abstraction::eager::Turnstile::new(Counter::new());

        deferred.push();
        deferred.push();
        eager.push();
        eager.push();

        assert_eq!(deferred.into_counter(), eager.into_counter());
    }
}
