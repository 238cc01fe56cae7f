/*!

# Direct Member Inclusion (the control case)

The consumer embeds the concrete unit by value and calls it by name. No trait,
no generic parameter, no indirection of any kind. This is how you would write
the pairing if nobody had ever told you about abstraction, and it is kept here
as the control: every other exhibit is measured against it, both for behavior
and for cost.

What it buys: the smallest possible amount of machinery, and the compiler's
full view across the call, so the forwarding method optimizes down to the
unit's own operation.

What it costs: the consumer's definition names the concrete unit, so swapping
the unit (for a faster one, or for a test double) means editing and
recompiling the consumer. There is no seam to substitute through. This module
intentionally violates the decoupling invariant the rest of the crate exists
to preserve; that is what makes it the control.

Note that the toys here are private to this exhibit rather than drawn from
[`units`](crate::units). Depending on a module of shared toys through a trait
is precisely the thing the control case must not do.

*/

/// A counter with no trait in sight.
#[derive(Debug, Default)]
pub struct Counter {
    count: u64,
}

impl Counter {
    pub fn new() -> Self {
        Self { count: 0 }
    }

    pub fn tick(&mut self) {
        self.count += 1;
    }

    pub fn count(&self) -> u64 {
        self.count
    }
}

/// A consumer hard-wired to [`Counter`].
#[derive(Debug, Default)]
pub struct Turnstile {
    counter: Counter,
}

impl Turnstile {
    pub fn new() -> Self {
        Self {
            counter: Counter::new(),
        }
    }

    /// Forwarding, and nothing else.
    pub fn push(&mut self) {
        self.counter.tick();
    }

    pub fn counter(&self) -> &Counter {
        &self.counter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_pushes_advance_the_counter_to_three() {
        let mut turnstile = Turnstile::new();
        turnstile.push();
        turnstile.push();
        turnstile.push();
        assert_eq!(turnstile.counter().count(), 3);
    }

    #[test]
    fn the_consumer_adds_no_state_of_its_own() {
        println!(
            "size of Counter: {}, size of Turnstile: {}",
            core::mem::size_of::<Counter>(),
            core::mem::size_of::<Turnstile>()
        );
        assert_eq!(
            core::mem::size_of::<Turnstile>(),
            core::mem::size_of::<Counter>()
        );
    }
}
