/*!

# Reaching a Type's Capability Without an Instance

[`Tick::describe`] belongs to the implementing type, not to any instance, and
its `where Self: Sized` bound keeps it out of every trait object's method
set. So how do you hold "the ability to describe unit type `U`" in a
variable, pass it around, and use it later, without constructing a `U` and
without a `Box<dyn ...>` that could not carry the method anyway?

By building the table yourself. [`UnitTag`] is a one-field table of plain
function pointers over the receiverless slice of the boundary, filled in
per-type by a `const` constructor; [`TagHolder`] parks one table per unit
type in read-only memory so that taking a reference yields a `'static`; and
[`Tag`] is the erased handle, a single machine word. Everything is resolved
at compile time, nothing allocates, and the concrete type appears nowhere in
the handle's own type.

The same erasure can be had by parking a zero-sized `PhantomData`-carrying
stand-in per type and handing out `&'static dyn` references to it, which
trades the hand-built table for a compiler-built one and one word for two.
The function-pointer spelling is shown here because the table it builds is
small enough to read in one glance, which for an exhibit is the virtue that
matters.

*/

use std::marker::PhantomData;

use crate::units::Tick;

/// A hand-built table over the receiverless slice of [`Tick`].
#[derive(Copy, Clone)]
pub struct UnitTag {
    describe: fn() -> &'static str,
}

impl UnitTag {
    /// Fill in the table for any `U: Tick`, in `const` context.
    pub const fn of<U: Tick>() -> Self {
        Self {
            describe: U::describe,
        }
    }

    /// Calling through the table, without the extra parentheses a direct
    /// field call would need.
    pub fn describe(&self) -> &'static str {
        (self.describe)()
    }
}

/// Per-`U` holder exposing the table as an associated `const`. The constant
/// is promoted to read-only memory, so taking `&` yields a `'static`
/// reference with no allocation anywhere.
pub struct TagHolder<U: Tick>(PhantomData<U>);

impl<U: Tick> TagHolder<U> {
    pub const TAG: UnitTag = UnitTag::of::<U>();
}

/// The erased handle: one machine word.
pub type Tag = &'static UnitTag;

/// The `'static` tag for a given unit type.
pub fn tag_for<U: Tick>() -> Tag {
    &TagHolder::<U>::TAG
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::static_interface::binder::{Bound, ClickCounter};
    use crate::units::{CallLog, Counter};

    #[test]
    fn a_tag_describes_its_type_with_no_instance_anywhere() {
        println!(
            "size of UnitTag: {}, size of Tag: {}",
            core::mem::size_of::<UnitTag>(),
            core::mem::size_of::<Tag>()
        );

        let tag = tag_for::<Counter>();
        assert_eq!(tag.describe(), Counter::describe());
    }

    #[test]
    fn tags_for_distinct_types_are_distinct() {
        let counter_tag = tag_for::<Counter>();
        let log_tag = tag_for::<CallLog>();

        // Different tables hold different function pointers, so the
        // promoted constants cannot have been merged.
        assert_ne!(counter_tag as *const _, log_tag as *const _);
        assert_ne!(counter_tag.describe(), log_tag.describe());
    }

    #[test]
    fn tags_can_outlive_the_scope_that_made_them() {
        fn pick(use_counter: bool) -> Tag {
            if use_counter {
                tag_for::<Counter>()
            } else {
                tag_for::<CallLog>()
            }
        }

        // A runtime choice of type-level capability, retained past the
        // choosing scope. No unit value ever existed.
        let tag = pick(false);
        assert_eq!(tag.describe(), CallLog::describe());
    }

    #[test]
    fn a_binding_carries_its_implementation_description() {
        let tag = tag_for::<Bound<ClickCounter>>();
        assert_eq!(
            tag.describe(),
            "a click counter bound behind the tick boundary"
        );
    }
}
