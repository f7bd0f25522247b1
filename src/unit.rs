//! The `Unit` marker type.
//!
//! `Unit` stands in for "no meaningful value": a `Result` that succeeds
//! without a payload carries `Unit` as its success value.
//!
//! # Examples
//!
//! ```rust
//! use outcomes::Unit;
//!
//! assert_eq!(Unit, Unit::default());
//! assert_eq!(format!("{Unit}"), "Unit");
//! ```

use std::fmt;

/// The canonical "no value" marker.
///
/// `Unit` is zero-sized and compared by type identity: every `Unit` equals
/// every other `Unit`, and no global instance is involved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Unit;

static_assertions::assert_eq_size!(Unit, ());

impl fmt::Display for Unit {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Unit")
    }
}

impl From<()> for Unit {
    #[inline]
    fn from((): ()) -> Self {
        Self
    }
}

impl From<Unit> for () {
    #[inline]
    fn from(_: Unit) -> Self {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn unit_is_zero_sized() {
        assert_eq!(std::mem::size_of::<Unit>(), 0);
    }

    #[rstest]
    fn unit_from_unit_tuple() {
        assert_eq!(Unit::from(()), Unit);
    }
}
