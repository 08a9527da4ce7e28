//! Edge costs and tentative distances.

use core::fmt;
use core::ops::Add;
use num_traits::{Num, Signed};
use serde::{Deserialize, Serialize};

/// A signed numeric edge cost.
///
/// Signedness is required: Bellman-Ford and Johnson accept negative costs, and
/// Johnson's reweighting subtracts potentials.
pub trait Cost: Num + Signed + Copy + PartialOrd + fmt::Debug + fmt::Display {
    /// Returns `false` for NaN and infinities.
    fn is_finite(self) -> bool;
}

macro_rules! impl_integer_cost {
    ($($t:ty),* $(,)?) => {
        $(
            impl Cost for $t {
                #[inline]
                fn is_finite(self) -> bool {
                    true
                }
            }
        )*
    };
}

macro_rules! impl_float_cost {
    ($($t:ty),* $(,)?) => {
        $(
            impl Cost for $t {
                #[inline]
                fn is_finite(self) -> bool {
                    <$t>::is_finite(self)
                }
            }
        )*
    };
}

impl_integer_cost!(i8, i16, i32, i64, i128, isize);
impl_float_cost!(f32, f64);

/// A tentative or settled distance: a finite value or "unreachable".
///
/// The derived ordering places every `Finite` value below `Unreachable`, which
/// is exactly the positive-infinity sentinel the relaxation rules need.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Distance<C> {
    /// A finite distance.
    Finite(C),
    /// No path exists.
    Unreachable,
}

impl<C> Distance<C> {
    /// Returns `true` for finite distances.
    #[inline]
    pub fn is_reachable(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    /// Returns the finite value, if any.
    #[inline]
    pub fn finite(self) -> Option<C> {
        match self {
            Distance::Finite(c) => Some(c),
            Distance::Unreachable => None,
        }
    }

    /// Applies `f` to a finite value.
    #[inline]
    pub fn map<D, F: FnOnce(C) -> D>(self, f: F) -> Distance<D> {
        match self {
            Distance::Finite(c) => Distance::Finite(f(c)),
            Distance::Unreachable => Distance::Unreachable,
        }
    }
}

impl<C: Add<Output = C>> Add<C> for Distance<C> {
    type Output = Distance<C>;

    /// Extends a path by one edge; unreachable stays unreachable.
    #[inline]
    fn add(self, cost: C) -> Distance<C> {
        self.map(|d| d + cost)
    }
}

impl<C> From<Option<C>> for Distance<C> {
    fn from(value: Option<C>) -> Self {
        value.map_or(Distance::Unreachable, Distance::Finite)
    }
}

impl<C: fmt::Display> fmt::Display for Distance<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(c) => c.fmt(f),
            Distance::Unreachable => f.write_str("inf"),
        }
    }
}
