/*!

# Eager Completion (the inclusion model)

The generic consumer's declaration and bodies travel together, so every use
site completes the generic for whichever unit it picks. This is the model
Rust's compilation gives you whether you ask or not, and for most code it is
simply the right one: any unit satisfying [`Tick`] works, including units
defined downstream that this crate has never heard of.

The consumer owns its unit by value, mirroring the ownership of the
[`direct`](crate::direct) control case rather than the borrowed unit of
[`dynamic_abstraction`](crate::dynamic_abstraction). Embedding by value is
also what makes the zero-overhead claim checkable as a plain fact about
layout: the specialized consumer is exactly as large as its unit, because the
joint contributes no state of its own.

*/

use crate::units::Tick;

/// A consumer generic over its unit, which it owns by value.
///
/// Only the boundary is named here; no concrete unit appears anywhere in
/// this module. A type that does not satisfy the boundary is refused before
/// it can become a runtime fault, with a diagnostic naming the unmet
/// constraint:
///
/// ```compile_fail
/// use abstraction_patterns::static_abstraction::eager::Turnstile;
///
/// struct Silent; // no `Tick` implementation
///
/// let _ = Turnstile::new(Silent);
/// ```
pub struct Turnstile<T: Tick> {
    counter: T,
}

impl<T: Tick> Turnstile<T> {
    /// Take ownership of the unit.
    pub fn new(counter: T) -> Self {
        Self { counter }
    }

    /// Forwarding, resolved per specialization at compile time.
    pub fn push(&mut self) {
        self.counter.tick();
    }

    pub fn counter(&self) -> &T {
        &self.counter
    }

    /// Hand the unit back, consuming the consumer.
    pub fn into_counter(self) -> T {
        self.counter
    }

    /// The unit's type-level self-description.
    ///
    /// Receiverless capabilities flow through generics untouched; compare
    /// the dynamic exhibit, where `dyn Tick` cannot reach this at all.
    pub fn describe_unit() -> &'static str {
        T::describe()
    }
}

impl<T: Tick + Default> Default for Turnstile<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
