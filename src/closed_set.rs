/*!

# Runtime Substitution over a Closed Set

The static exhibits fix the pairing per specialized type: no value computed
at runtime can choose the type parameter of
[`eager::Turnstile`](crate::static_abstraction::eager::Turnstile). When a
runtime choice is genuinely required, there are two ways back:

1. [`dynamic_abstraction`](crate::dynamic_abstraction), which reopens the
   set of units completely, one vtable hop per call; or
2. this module, which keeps the set *closed*: every unit the program will
   ever swap between becomes one variant of one enum, and dispatch is a
   branch the compiler can see through, not a table it cannot.

The enum costs the size of its largest variant plus a discriminant, and it
costs an edit here every time the set grows. In exchange the compiler checks
exhaustiveness on every match, and the whole arrangement stays a plain value
type: it travels by value, derives what its variants derive, and feeds the
*static* consumer, which neither knows nor cares that a runtime choice is
hiding inside its type parameter. Production code that wants this shape
without the forwarding boilerplate usually generates it with
[`enum_dispatch`](https://crates.io/crates/enum_dispatch); written out by
hand it is short enough to be its own documentation.

*/

use crate::units::{CallLog, Counter, Tick};

/// Every unit this program will ever swap between, as one value type.
#[derive(Debug)]
pub enum AnyUnit {
    Counter(Counter),
    CallLog(CallLog),
}

impl From<Counter> for AnyUnit {
    fn from(counter: Counter) -> Self {
        Self::Counter(counter)
    }
}

impl From<CallLog> for AnyUnit {
    fn from(log: CallLog) -> Self {
        Self::CallLog(log)
    }
}

impl AnyUnit {
    /// The counter inside, if that is what this is.
    pub fn as_counter(&self) -> Option<&Counter> {
        match self {
            Self::Counter(counter) => Some(counter),
            Self::CallLog(_) => None,
        }
    }

    /// The log inside, if that is what this is.
    pub fn as_call_log(&self) -> Option<&CallLog> {
        match self {
            Self::CallLog(log) => Some(log),
            Self::Counter(_) => None,
        }
    }
}

impl Tick for AnyUnit {
    /// One branch instead of one vtable hop.
    fn tick(&mut self) {
        match self {
            Self::Counter(counter) => counter.tick(),
            Self::CallLog(log) => log.tick(),
        }
    }

    fn describe() -> &'static str {
        "one unit out of a closed, enumerated set"
    }
}
