/*!

# Static Interfaces: the Binder and the Privileged Party

This exhibit re-expresses a template-language construction that has no
literal Rust spelling, and in losing the spelling keeps everything the
construction was actually for.

## The construction being translated

In C++, defining a compile-time interface separately from its implementation
takes three classes and two tricks. The interface is a class template whose
methods forward to "the concrete type that will complete it"; the concrete
type inherits from the template *instantiated with itself* (the
[curiously recurring template pattern](https://en.cppreference.com/w/cpp/language/crtp));
and a small binder template glues one implementation object to one interface,
holding the implementation as a private member and naming the interface a
`friend` so that it, and only it, can reach inside. No virtual table, no
indirection; the whole arrangement compiles away.

Rust needs neither trick, because the two roles the C++ interface class is
straining to play at once are two different language features here:

- "an operation set a type must provide, checked at compile time, dispatched
  with no runtime table" is just a trait used as a generic bound, which the
  [`static_abstraction`](crate::static_abstraction) exhibit covers;
- "a composite that owns an implementation and exposes *only* the declared
  operation set" is a wrapper struct with a private field, which is what
  [`binder::Bound`] is.

What does not translate is `friend`. Rust deliberately has no way to grant a
named collaborator access to an otherwise-private item; the language's unit
of trust is the module. So the binder's privileged party is expressed
positionally rather than nominally: the boundary implementation for
[`binder::Bound`] lives in the binder's own module, where the private field
is simply visible. For collaborators one module up, the same idea is spelled
`pub(super)`, and this module's test below exercises exactly that scoped
grant. Both spellings say what `friend` says, with the grant readable in the
item's visibility instead of in a list inside the class.

## What the binder still buys in Rust

If every concrete unit implements the public boundary trait directly, `Bound`
is dead weight; most Rust code should stop at the trait. The binder earns its
place when the implementation type's own surface is *wider* than the boundary
and you want the extra surface to be unreachable through the bound value, not
merely unadvertised. [`binder::ClickCounter`] has such a surface (a `reset`
operation the boundary never mentions), and the `compile_fail` test on
[`binder::Bound`] pins down that the binder really does narrow it away.

The second thing the interface/implementation split leaves behind is the
receiverless slice of the boundary. [`tags`] shows how to reach a type-level
capability with no instance in hand, through a one-word handle built entirely
out of function pointers resolved at compile time.

*/

pub mod binder;
pub mod tags;

use core::fmt;

use self::binder::{Bound, TickOps};

/// The parent module sits inside the binder's `pub(super)` grant, so it can
/// render a binding's implementation without widening the binder's public
/// surface. Everything further out still sees only the boundary.
impl<D: TickOps + fmt::Debug> fmt::Debug for Bound<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Bound").field(self.details()).finish()
    }
}

#[cfg(test)]
mod test {
    use super::binder::{Bound, ClickCounter};
    use crate::units::Tick;

    #[test]
    fn the_scoped_grant_reaches_one_module_up() {
        let mut bound = Bound::new(ClickCounter::new());
        bound.tick();
        bound.tick();

        // `details` is `pub(super)`: visible here, in the binder's parent
        // module, and nowhere further out.
        assert_eq!(bound.details().count(), 2);
    }

    #[test]
    fn debug_renders_through_the_same_grant() {
        let bound = Bound::new(ClickCounter::new());
        assert_eq!(format!("{bound:?}"), "Bound(ClickCounter { count: 0 })");
    }
}
