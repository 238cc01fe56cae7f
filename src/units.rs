/*!

# The Toys

Every exhibit in this crate wires up the same two things: a *unit* that knows
how to advance itself, and a consumer whose entire job is to ask it to. The
toys live here so the exhibits can be compared fairly; the exhibits differ
only in the joint, never in the toys.

One trait serves as the interface boundary for both dispatch worlds. This is
worth pausing on if you are arriving from a language where the
runtime-polymorphic interface (an abstract base class) and the compile-time
constraint (a concept, or a duck-typed template parameter) are two different
declarations. In Rust they are the same declaration: [`Tick`] is what you
write after `dyn` *and* what you write after `T:`. The split shows up again
downstream, in how each exhibit consumes the trait, not in how the trait is
declared.

The one wrinkle is [`Tick::describe`]. It takes no receiver: it is a
capability of the implementing *type*, not of any instance. A receiverless
method would normally make the trait unusable behind `dyn`, so it carries a
`where Self: Sized` bound, which excludes it from the trait object's method
set and keeps the rest of the trait dyn-compatible. The price is that
`dyn Tick` cannot reach it at all; the [`tags`](crate::static_interface::tags)
exhibit shows how to get it back without an instance.

*/

/// The interface boundary: the operation set a unit must expose, independent
/// of which concrete unit satisfies it.
pub trait Tick {
    /// Advance the unit by one step.
    fn tick(&mut self);

    /// A capability of the implementing type, not of any instance.
    ///
    /// The `where Self: Sized` bound keeps [`Tick`] dyn-compatible by leaving
    /// this method out of the trait object's method set.
    fn describe() -> &'static str
    where
        Self: Sized;
}

/// The real unit: counts how many times it has been ticked, starting at zero.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Counter {
    count: u64,
}

impl Counter {
    pub fn new() -> Self {
        Self { count: 0 }
    }

    /// How many ticks have landed so far.
    pub fn count(&self) -> u64 {
        self.count
    }
}

impl Tick for Counter {
    fn tick(&mut self) {
        self.count += 1;
    }

    fn describe() -> &'static str {
        "a counter that advances by one per tick"
    }
}

/// The test double: records that it was asked to advance instead of counting.
///
/// Substituting this for [`Counter`] in any exhibit must require no change to
/// the consumer's source, only a different choice at the construction or
/// instantiation site. The tests in each exhibit hold the crate to that.
#[derive(Debug, Default)]
pub struct CallLog {
    calls: Vec<&'static str>,
}

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// One entry per tick received.
    pub fn calls(&self) -> &[&'static str] {
        &self.calls
    }
}

impl Tick for CallLog {
    fn tick(&mut self) {
        self.calls.push("called");
    }

    fn describe() -> &'static str {
        "a log that records one entry per tick"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_starts_at_zero_and_counts_ticks() {
        let mut counter = Counter::new();
        assert_eq!(counter.count(), 0);

        counter.tick();
        counter.tick();
        counter.tick();
        assert_eq!(counter.count(), 3);
    }

    #[test]
    fn call_log_records_one_entry_per_tick() {
        let mut log = CallLog::new();
        log.tick();
        log.tick();
        log.tick();
        assert_eq!(log.calls(), ["called", "called", "called"]);
    }

    #[test]
    fn describe_is_reachable_without_an_instance() {
        // No Counter or CallLog value exists anywhere in this test.
        assert_ne!(Counter::describe(), CallLog::describe());
    }
}
