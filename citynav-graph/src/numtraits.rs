//! Numeric helper traits for edge weights.

/// Helper trait providing zero value for numeric types.
pub trait Zero {
    const ZERO: Self;
}

macro_rules! impl_zero {
    ($($t:ty),*) => {
        $(
            impl Zero for $t {
                const ZERO: $t = 0;
            }
        )*
    };
}

impl_zero!(u8, u16, u32, u64, usize, i32, i64);

/// Helper trait for addition that reports overflow instead of panicking or wrapping.
pub trait CheckedAdd: Sized {
    /// `None` if the sum does not fit into `Self`.
    fn checked_add(self, other: Self) -> Option<Self>;
}

macro_rules! impl_checked_add {
    ($($t:ty),*) => {
        $(
            impl CheckedAdd for $t {
                fn checked_add(self, other: $t) -> Option<$t> {
                    <$t>::checked_add(self, other)
                }
            }
        )*
    };
}

impl_checked_add!(u8, u16, u32, u64, usize, i32, i64);

#[test]
fn test_zero() {
    assert_eq!(u32::ZERO, 0);
    assert_eq!(u64::ZERO, 0);
    assert_eq!(i64::ZERO, 0);
    assert!(i64::ZERO > -1);
}

#[test]
fn test_checked_add() {
    assert_eq!(CheckedAdd::checked_add(2_u64, 3), Some(5));
    assert_eq!(CheckedAdd::checked_add(u64::MAX, 0), Some(u64::MAX));
    assert_eq!(CheckedAdd::checked_add(u64::MAX, 1), None);
    assert_eq!(CheckedAdd::checked_add(u32::MAX - 1, 1), Some(u32::MAX));
    assert_eq!(CheckedAdd::checked_add(i64::MAX, 1), None);
}
