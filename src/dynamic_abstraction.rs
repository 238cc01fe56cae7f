/*!

# Dynamic Abstraction

The runtime-polymorphic exhibit. The consumer stores a reference to the
boundary itself, `&mut dyn Tick`, and forwards through it. Which concrete
unit sits behind the reference is decided by whoever constructs the consumer,
one instance at a time, as late as runtime.

## What the reference really is

`&mut dyn Tick` is a fat pointer: one word pointing at the unit, one word
pointing at a per-type table of function pointers built by the compiler. The
forwarding call loads the right slot out of that table and jumps through it.
That is the whole cost of this exhibit, and also its whole power: because the
table travels with the object rather than with the type, two consumers of
identical type can drive two entirely different units, and a `Vec` can hold a
mixed bag of them. Neither of the compile-time exhibits can say that.

See [trait objects in the book](https://doc.rust-lang.org/book/ch17-02-trait-objects.html)
and the reference's notes on
[dyn compatibility](https://doc.rust-lang.org/reference/items/traits.html#dyn-compatibility)
for what a trait may and may not contain to be usable this way. [`Tick`] stays
on the right side of the rules by confining its receiverless method behind
`where Self: Sized`; the price, paid here and nowhere else, is that a
`dyn Tick` cannot describe itself.

## Ownership

The consumer borrows. The unit is constructed, owned, and eventually dropped
by the caller; the consumer never allocates and never frees. This is the only
exhibit in the crate where the unit outlives its consumer as a matter of
course, and the borrow checker holds everyone to it.

When the owner wants to erase the concrete type too, the conventional spelling
is [`BxTick`]. Dropping the box runs the concrete unit's destructor through
the same per-type table that arranges the calls; handing a unit to a box is
never a way to leak its cleanup. The destructor test below pins that down,
since it is exactly the guarantee that a hand-rolled function-pointer scheme
tends to forget.

Push this shape one step further out, a concrete newtype over a [`BxTick`] so
that even the trait vanishes from the public surface, and you have Rust's
nearest relative of the pointer-to-implementation idiom: callers' builds
depend on one stable wrapper, and every implementation detail hides behind
the pointer. That variant is out of scope here, but it is this exhibit's
ownership story with the box moved inside.

*/

use crate::units::Tick;

/// A boxed unit, for when the owner wants to erase the concrete type as well.
pub type BxTick = Box<dyn Tick>;

/// A consumer holding a non-owning, exclusive borrow of the boundary.
pub struct Turnstile<'a> {
    counter: &'a mut dyn Tick,
}

impl<'a> Turnstile<'a> {
    /// The caller keeps ownership of the unit; the consumer only borrows it.
    pub fn new(counter: &'a mut dyn Tick) -> Self {
        Self { counter }
    }

    /// Forward one push through the per-object table.
    pub fn push(&mut self) {
        self.counter.tick();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::units::{CallLog, Counter};

    #[test]
    fn three_pushes_advance_the_counter_to_three() {
        let mut counter = Counter::new();
        {
            let mut turnstile = Turnstile::new(&mut counter);
            turnstile.push();
            turnstile.push();
            turnstile.push();
        }
        assert_eq!(counter.count(), 3);
    }

    #[test]
    fn substituting_the_double_needs_no_consumer_change() {
        let counter = Counter::new();
        let mut log = CallLog::new();

        // Same consumer type, same call sites; only the construction
        // argument differs.
        {
            let mut turnstile = Turnstile::new(&mut log);
            turnstile.push();
            turnstile.push();
            turnstile.push();
        }

        assert_eq!(counter.count(), 0);
        assert_eq!(log.calls().len(), 3);
    }

    #[test]
    fn substitution_is_per_instance() {
        fn push_twice(mut turnstile: Turnstile<'_>) {
            turnstile.push();
            turnstile.push();
        }

        let mut counter = Counter::new();
        let mut log = CallLog::new();

        // One function body, two different units behind it at runtime.
        push_twice(Turnstile::new(&mut counter));
        push_twice(Turnstile::new(&mut log));

        assert_eq!(counter.count(), 2);
        assert_eq!(log.calls().len(), 2);
    }

    #[test]
    fn the_reference_is_two_words() {
        println!(
            "size of &mut Counter: {}, size of &mut dyn Tick: {}",
            core::mem::size_of::<&mut Counter>(),
            core::mem::size_of::<&mut dyn Tick>()
        );
        // Thin pointer to the unit, plus the pointer to its table.
        assert_eq!(
            core::mem::size_of::<&mut dyn Tick>(),
            2 * core::mem::size_of::<&mut Counter>()
        );
    }

    #[test]
    fn dropping_a_boxed_unit_runs_the_concrete_destructor() {
        struct DropProbe {
            drops: Rc<Cell<usize>>,
        }

        impl Tick for DropProbe {
            fn tick(&mut self) {}

            fn describe() -> &'static str {
                "a probe that reports its own destruction"
            }
        }

        impl Drop for DropProbe {
            fn drop(&mut self) {
                self.drops.set(self.drops.get() + 1);
            }
        }

        let drops = Rc::new(Cell::new(0));
        let boxed: BxTick = Box::new(DropProbe {
            drops: Rc::clone(&drops),
        });

        assert_eq!(drops.get(), 0);
        drop(boxed);
        assert_eq!(drops.get(), 1);
    }
}
