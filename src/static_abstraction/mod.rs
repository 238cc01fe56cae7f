/*!

# Static Abstraction

The compile-time-polymorphic exhibit. The consumer is generic over its unit,
constrained by the boundary trait, and embeds the unit by value:

```rust
use abstraction_patterns::static_abstraction::eager::Turnstile;
use abstraction_patterns::units::Counter;

let mut turnstile = Turnstile::new(Counter::new());
turnstile.push();
assert_eq!(turnstile.counter().count(), 1);
```

No table, no indirection: the compiler resolves the forwarding call for each
concrete pairing separately and is free to inline straight through it. The
result is machine code with the same shape as the hard-wired
[`direct`](crate::direct) control case, from a consumer that never names a
concrete unit. See [Abstraction without overhead](https://blog.rust-lang.org/2015/05/11/traits.html)
for the canonical statement of this bargain, and the book's note on
[the performance of generics](https://doc.rust-lang.org/book/ch10-01-syntax.html#performance-of-code-using-generics)
for the mechanism, monomorphization, that pays for it.

What this exhibit gives up is the previous one's late choice: the pairing is
fixed per *specialized type* at compile time. Two `Turnstile<Counter>`s can
never drive different kinds of unit, and no runtime value can pick the type
parameter. When that flexibility is the requirement, fall back to
[`dynamic_abstraction`](crate::dynamic_abstraction) for an open set of units
or to [`closed_set`](crate::closed_set) for a fixed one.

## Two completion models

A generic consumer is only half a definition; something must *complete* it
for each concrete unit. Languages with textual template compilation split
here into two build models, and the split is worth understanding even though
Rust hard-codes one side of it:

| Model | Who completes the generic | Concrete types usable | Wrong type refused at |
| ----- | ------------------------- | --------------------- | --------------------- |
| Inclusion ("eager") | every use site, independently | any satisfying the constraint | compile time |
| Explicit instantiation ("deferred") | one translation unit, against an enumerated list | only the listed ones | link time |

In C++ the deferred model is spelled `template class B<A>;` in exactly one
`.cpp` file; callers see only the declaration, the bodies are compiled once
per listed type, and a type missing from the list surfaces as an undefined
symbol out of the linker. The reward for that ceremony is a hard guarantee
that compiling a caller never requires the concrete unit's definition. See
[explicit instantiation](https://en.cppreference.com/w/cpp/language/class_template#Explicit_instantiation)
if the ceremony is unfamiliar.

Rust has no deferred half to offer: a generic's body is always available
wherever its declaration is, and every consuming crate monomorphizes for
itself. [`eager`] is therefore the native model, not a choice. What survives
the translation is the *coupling* half of explicit instantiation, the closed
enumerated list, and [`deferred`] rebuilds exactly that: the generic is
sealed behind a list this crate controls, the listed pairings are exported as
concrete aliases, and a type off the list is refused at compile time, one
stage earlier than the linker would have managed.

Neither model changes observable behavior, and neither introduces any runtime
dispatch. If you want to see the no-overhead claim with your own eyes rather
than take an essay's word for it, [`cargo-show-asm`](https://crates.io/crates/cargo-show-asm)
will print the monomorphized forwarding method next to the hard-wired one.

*/

pub mod deferred;
pub mod eager;
