//! Presence predicates over optional option fields.
//!
//! These are the primitive checks the validation engine runs against an
//! options value: is a slot set, is exactly one of a group set, is at least
//! one set, are all of them set. All of them are total, side-effect-free, and
//! order-independent over their arguments.
//!
//! A field counts as set once its `Option` wrapper carries a value, no matter
//! how empty the wrapped value itself is: `Some(String::new())` and
//! `Some(false)` are both set. Callers that explicitly zero a payload field
//! therefore still satisfy an at-least-one-of rule. This mirrors how the
//! remote platform's own tooling treats presence and is preserved
//! deliberately.

/// Presence of an optional option field.
pub trait FieldPresence {
    /// True iff the slot holds a value.
    fn is_set(&self) -> bool;
}

impl<T> FieldPresence for Option<T> {
    fn is_set(&self) -> bool {
        self.is_some()
    }
}

impl<T> FieldPresence for &T
where
    T: FieldPresence + ?Sized,
{
    fn is_set(&self) -> bool {
        (**self).is_set()
    }
}

/// True iff precisely one of the flags is set.
pub fn exactly_one_set(flags: &[bool]) -> bool {
    flags.iter().filter(|set| **set).count() == 1
}

/// True iff at least one of the flags is set.
pub fn any_set(flags: &[bool]) -> bool {
    flags.iter().any(|set| *set)
}

/// True iff every one of the flags is set.
pub fn every_set(flags: &[bool]) -> bool {
    flags.iter().all(|set| *set)
}
