//! Identifier wrappers.
//!
//! Integer IDs are generated by the `typed_id!` macro and are `Copy + Ord +
//! Hash` so they can be compared and used as map keys without ceremony.
//! Train identifiers come from fixtures ("T1", "EXP-204", …) and are kept as
//! opaque strings.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// The identifier following `self`.
            #[inline]
            pub fn next(self) -> Self {
                $name(self.0.wrapping_add(1))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

typed_id! {
    /// Sequence number of a scenario run within one session.  Each call to
    /// `Session::run` takes the next one; a completion carrying a stale
    /// `RunId` belongs to a superseded run.
    pub struct RunId(u32);
}

/// Opaque train identifier, unique within a fleet snapshot.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TrainId(pub String);

impl TrainId {
    pub fn new(id: impl Into<String>) -> Self {
        TrainId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TrainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for TrainId {
    fn from(s: &str) -> Self {
        TrainId(s.to_owned())
    }
}
