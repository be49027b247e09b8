//! # Field Resolution
//!
//! Two-tier resolution of a call-site override against a configured default.
//! Every request builder goes through these four rules:
//!
//! | rule            | value                     | sent when                          |
//! |-----------------|---------------------------|------------------------------------|
//! | [`coalesce`]    | override, else default    | always                             |
//! | [`truthy_or`]   | truthy override, else default | resolved value is truthy       |
//! | [`non_empty_list`] | override, else default | override or default is non-empty   |
//! | [`non_zero`]    | override, else default    | resolved value is non-zero         |
//!
//! [`truthy_or`] differs from [`coalesce`]: an explicit `0` or `""` override
//! does not shadow the default, it falls through to it.

/// Values with a JavaScript-style notion of "falsy" (empty or zero).
pub trait Truthy {
    fn is_truthy(&self) -> bool;
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for &str {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

macro_rules! impl_truthy_for_int {
    ($($ty:ty),*) => {
        $(impl Truthy for $ty {
            fn is_truthy(&self) -> bool {
                *self != 0
            }
        })*
    };
}

impl_truthy_for_int!(u8, u16, u32, u64);

/// `override ?? default`
pub fn coalesce<T>(value: Option<T>, default: T) -> T {
    value.unwrap_or(default)
}

/// `override || default`, kept only if the result is truthy.
pub fn truthy_or<T: Truthy + Clone>(value: Option<&T>, default: &T) -> Option<T> {
    let resolved = match value {
        Some(v) if v.is_truthy() => v,
        _ => default,
    };
    resolved.is_truthy().then(|| resolved.clone())
}

/// List field, sent only if either side is non-empty. A given override
/// replaces the default entirely, even when the override itself is empty.
pub fn non_empty_list(value: Option<&[String]>, default: &[String]) -> Option<Vec<String>> {
    let any = value.is_some_and(|v| !v.is_empty()) || !default.is_empty();
    any.then(|| value.unwrap_or(default).to_vec())
}

/// `override ?? default`, kept only if non-zero.
pub fn non_zero<T: Truthy>(value: Option<T>, default: T) -> Option<T> {
    Some(coalesce(value, default)).filter(Truthy::is_truthy)
}
