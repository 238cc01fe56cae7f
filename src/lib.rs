#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

/*!

# One Joint, Several Spellings

Every exhibit here preserves, or deliberately breaks, a single invariant:

> The consumer's definition must never need the unit's implementation
> details, only the operation set it promises.

That sentence is cheap to say and surprisingly expensive to mean. Meaning it
at the *type* level is the easy part; Rust hands you a trait and you are
done. Meaning it at the level of what the compiler must see, what the built
artifact contains, and what a wrong pairing costs you is where the exhibits
diverge, and the interesting differences are all in the fine print:

- [`direct`] breaks the invariant on purpose and stands as the control.
- [`dynamic_abstraction`] keeps it with a per-object table and buys the one
  power nothing else here has: substitution per instance, at runtime, over
  an open set.
- [`static_abstraction`] keeps it with monomorphization at zero runtime
  cost, and then splits over *where* the generic gets completed: everywhere
  ([`eager`](static_abstraction::eager)) or against a closed enumerated list
  ([`deferred`](static_abstraction::deferred)).
- [`static_interface`] keeps it while also *narrowing*: the binder owns an
  implementation richer than the boundary and makes the excess unreachable,
  with Rust's module system standing in for a friend declaration.
- [`closed_set`] is the escape hatch for the static exhibits' one blind
  spot, a runtime choice, paid for with a fixed variant list instead of a
  vtable.

Wrong pairings never fail at runtime anywhere in this crate. Each way to get
it wrong is pinned by a `compile_fail` doctest next to the code that refuses
it.

*/

pub mod closed_set;
pub mod direct;
pub mod dynamic_abstraction;
pub mod static_abstraction;
pub mod static_interface;
pub mod units;

// Re-exported for `$crate::` paths in macro expansions
pub use ctor;
pub use paste;
