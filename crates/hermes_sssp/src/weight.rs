use std::fmt::Debug;

/// Numeric type usable as an edge weight in an [`AdjacencyMatrix`](crate::adjacency_matrix::AdjacencyMatrix).
///
/// `ZERO` doubles as the "no edge" marker inside the matrix. `INFINITY` is the
/// unreachable sentinel written into distance vectors: `f32::INFINITY` /
/// `f64::INFINITY` for floats and `MAX` for integers.
pub trait Weight: Copy + PartialOrd + Debug + Send + Sync + 'static {
    const ZERO: Self;
    const INFINITY: Self;

    /// NaN counts as negative so it gets rejected alongside negative weights.
    fn is_negative_or_nan(self) -> bool;

    /// Adds two weights, saturating at `INFINITY`.
    fn add_weight(self, other: Self) -> Self;

    #[inline(always)]
    fn is_edge(self) -> bool {
        self != Self::ZERO
    }

    #[inline(always)]
    fn is_infinite(self) -> bool {
        self == Self::INFINITY
    }
}

macro_rules! impl_unsigned_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                const ZERO: Self = 0;
                const INFINITY: Self = <$t>::MAX;

                #[inline(always)]
                fn is_negative_or_nan(self) -> bool {
                    false
                }

                #[inline(always)]
                fn add_weight(self, other: Self) -> Self {
                    self.saturating_add(other)
                }
            }
        )*
    };
}

macro_rules! impl_signed_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                const ZERO: Self = 0;
                const INFINITY: Self = <$t>::MAX;

                #[inline(always)]
                fn is_negative_or_nan(self) -> bool {
                    self < 0
                }

                #[inline(always)]
                fn add_weight(self, other: Self) -> Self {
                    self.saturating_add(other)
                }
            }
        )*
    };
}

macro_rules! impl_float_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                const ZERO: Self = 0.0;
                const INFINITY: Self = <$t>::INFINITY;

                #[inline(always)]
                fn is_negative_or_nan(self) -> bool {
                    self.is_nan() || self < 0.0
                }

                #[inline(always)]
                fn add_weight(self, other: Self) -> Self {
                    self + other
                }
            }
        )*
    };
}

impl_unsigned_weight!(u32, u64, usize);
impl_signed_weight!(i32, i64);
impl_float_weight!(f32, f64);
