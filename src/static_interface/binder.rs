/*!

# Binding an Implementation to Its Boundary

Two traits and one struct. [`TickOps`] is the implementation-side operation
set: the same shape as the public boundary, implemented by types that are not
themselves meant to be handed around as boundary values. [`Bound`] couples
exactly one implementation instance to the boundary: it owns the instance as
a private field and implements [`Tick`] by forwarding into it. The only party
that can see the field is this module, which is where the boundary impl
lives; that colocation is the entire access-control story.

The binder's contract, all of it checkable here:

- constructing a `Bound` means exactly one implementation instance exists
  inside it, arriving by value or by `Default`;
- dropping the `Bound` drops that instance, and nothing is heap-allocated
  along the way;
- the coupling adds no state, so `Bound<D>` has exactly the size of `D`;
- operations of `D` beyond the boundary are unreachable through the binding;
- the owner may dissolve the binding with [`Bound::into_inner`] and get the
  implementation back. Narrowing is a property of the live binding, not a
  confiscation of the value.

*/

use crate::units::Tick;

/// The implementation-side operation set: what a type must supply to be
/// bound behind [`Tick`].
///
/// The signatures deliberately mirror the boundary one-for-one; the point of
/// keeping a second trait is that implementing `TickOps` does *not* put a
/// type into circulation as a boundary value. Only [`Bound`] does that.
pub trait TickOps {
    fn tick(&mut self);

    fn describe() -> &'static str
    where
        Self: Sized;
}

/// Couples one implementation instance to the boundary, with no added state.
///
/// Code holding a `Bound<D>` can reach `D` only through the boundary. The
/// field is private, and privacy here is load-bearing:
///
/// ```compile_fail,E0616
/// use abstraction_patterns::static_interface::binder::{Bound, ClickCounter};
///
/// let mut bound = Bound::new(ClickCounter::new());
/// bound.details.reset(); // private field: refused
/// ```
pub struct Bound<D: TickOps> {
    details: D,
}

impl<D: TickOps> Bound<D> {
    /// Bind an already-constructed implementation instance.
    pub fn new(details: D) -> Self {
        Self { details }
    }

    /// Dissolve the binding and reclaim the implementation.
    pub fn into_inner(self) -> D {
        self.details
    }

    /// Scoped privileged access, the `pub(super)` spelling of a friend
    /// declaration: the parent module may look inside, nothing further out
    /// may.
    pub(super) fn details(&self) -> &D {
        &self.details
    }
}

impl<D: TickOps + Default> Default for Bound<D> {
    fn default() -> Self {
        Self::new(D::default())
    }
}

/// The boundary implementation is the binder's one trusted party. It lives
/// in this module so the private field is visible to it, and it exposes
/// nothing the boundary does not declare.
impl<D: TickOps> Tick for Bound<D> {
    fn tick(&mut self) {
        self.details.tick();
    }

    fn describe() -> &'static str {
        D::describe()
    }
}

/// A concrete implementation whose own surface is wider than the boundary.
///
/// `reset` is the extra width: perfectly public on the type itself, and
/// unreachable through [`Bound`], which is the narrowing the binder exists
/// to perform.
#[derive(Debug, Default)]
pub struct ClickCounter {
    count: u64,
}

impl ClickCounter {
    pub fn new() -> Self {
        Self { count: 0 }
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    /// Not part of the boundary.
    pub fn reset(&mut self) {
        self.count = 0;
    }
}

impl TickOps for ClickCounter {
    fn tick(&mut self) {
        self.count += 1;
    }

    fn describe() -> &'static str {
        "a click counter bound behind the tick boundary"
    }
}
