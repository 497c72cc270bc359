//! Portable reference algorithms.
//!
//! Everything in here only shifts, masks, compares and subtracts, so each
//! function is a `const fn` and can be evaluated at compile time. The loops
//! are bounded: the leading-zero search runs `log2(BITS)` rounds and the
//! population count at most `BITS` rounds.
//!
//! The host and device tiers must agree with these functions on every input.
//!
//! # Examples
//! ```
//! use light_bitops::fallback::{w16, w8};
//!
//! const LANES: u16 = w16::bit_ceil(60);
//! const TOP: u8 = w8::bit_floor(9);
//!
//! assert_eq!(LANES, 64);
//! assert_eq!(TOP, 8);
//! ```

use crate::Word;
use imp::FallbackBits;

macro_rules! fallback_word {
    ($($module:ident: $ty:ty),+ $(,)?) => {
        $(
            #[doc = concat!("Constant-evaluable operations on `", stringify!($ty), "`.")]
            pub mod $module {
                const BITS: u32 = <$ty>::BITS;

                /// Number of zero bits above the highest set bit, `BITS` for zero.
                ///
                /// # Examples
                /// ```
                #[doc = concat!("use light_bitops::fallback::", stringify!($module), "::countl_zero;")]
                ///
                #[doc = concat!("assert_eq!(countl_zero(0), ", stringify!($ty), "::BITS);")]
                #[doc = concat!("assert_eq!(countl_zero(1), ", stringify!($ty), "::BITS - 1);")]
                #[doc = concat!("assert_eq!(countl_zero(", stringify!($ty), "::MAX), 0);")]
                /// ```
                #[inline]
                pub const fn countl_zero(x: $ty) -> u32 {
                    if x == 0 {
                        return BITS;
                    }
                    countl_zero_search(x)
                }

                // Hacker's Delight (2nd edition), section 5-3. Binary search
                // over halving shift distances; at loop exit `x` is 0 or 1.
                const fn countl_zero_search(mut x: $ty) -> u32 {
                    let mut n = BITS;
                    let mut c = BITS / 2;
                    while c != 0 {
                        let y = x >> c;
                        if y != 0 {
                            n -= c;
                            x = y;
                        }
                        c >>= 1;
                    }
                    n - x as u32
                }

                /// Number of one bits above the highest zero bit.
                #[inline]
                pub const fn countl_one(x: $ty) -> u32 {
                    if x == <$ty>::MAX {
                        return BITS;
                    }
                    countl_zero(!x)
                }

                /// Number of zero bits below the lowest set bit, `BITS` for zero.
                #[inline]
                pub const fn countr_zero(x: $ty) -> u32 {
                    // `!x & (x - 1)` keeps exactly the trailing zeros as ones;
                    // for zero that is the full word.
                    BITS - countl_zero_search(!x & x.wrapping_sub(1))
                }

                /// Number of one bits below the lowest zero bit.
                #[inline]
                pub const fn countr_one(x: $ty) -> u32 {
                    if x == <$ty>::MAX {
                        return BITS;
                    }
                    countr_zero(!x)
                }

                /// Number of set bits.
                #[inline]
                pub const fn popcount(mut x: $ty) -> u32 {
                    let mut count = 0;
                    while x != 0 {
                        x &= x - 1;
                        count += 1;
                    }
                    count
                }

                /// Returns `true` if exactly one bit is set.
                #[inline]
                pub const fn has_single_bit(x: $ty) -> bool {
                    x != 0 && (x & (x - 1)) == 0
                }

                /// Position of the highest set bit plus one, `0` for zero.
                #[inline]
                pub const fn bit_width(x: $ty) -> u32 {
                    BITS - countl_zero(x)
                }

                /// Largest power of two not greater than `x`, `0` for zero.
                #[inline]
                pub const fn bit_floor(x: $ty) -> $ty {
                    if x == 0 {
                        return 0;
                    }
                    1 << (BITS - 1 - countl_zero(x))
                }

                /// Smallest power of two not less than `x`.
                ///
                /// Returns `1` for `0` and `1`. If the result doesn't fit in
                #[doc = concat!("`", stringify!($ty), "` it wraps to `0`; see [`crate::bit_ceil`].")]
                ///
                /// # Examples
                /// ```
                #[doc = concat!("use light_bitops::fallback::", stringify!($module), "::bit_ceil;")]
                ///
                /// assert_eq!(bit_ceil(5), 8);
                #[doc = concat!("assert_eq!(bit_ceil(", stringify!($ty), "::MAX), 0);")]
                /// ```
                #[inline]
                pub const fn bit_ceil(x: $ty) -> $ty {
                    match checked_bit_ceil(x) {
                        Some(pow) => pow,
                        None => 0,
                    }
                }

                /// Smallest power of two not less than `x`, or `None` if it
                #[doc = concat!("doesn't fit in `", stringify!($ty), "`.")]
                #[inline]
                pub const fn checked_bit_ceil(x: $ty) -> Option<$ty> {
                    if x <= 1 {
                        return Some(1);
                    }
                    (1 as $ty).checked_shl(BITS - countl_zero(x - 1))
                }
            }
        )+
    };
}

fallback_word!(w8: u8, w16: u16, w32: u32, w64: u64);

pub(crate) mod imp {
    pub trait FallbackBits: Sized {
        fn countl_zero_fallback(self) -> u32;
        fn countr_zero_fallback(self) -> u32;
        fn popcount_fallback(self) -> u32;
    }

    macro_rules! impl_fallback_bits {
        ($($ty:ty => $module:ident),+ $(,)?) => {
            $(
                impl FallbackBits for $ty {
                    #[inline]
                    fn countl_zero_fallback(self) -> u32 {
                        super::$module::countl_zero(self)
                    }

                    #[inline]
                    fn countr_zero_fallback(self) -> u32 {
                        super::$module::countr_zero(self)
                    }

                    #[inline]
                    fn popcount_fallback(self) -> u32 {
                        super::$module::popcount(self)
                    }
                }
            )+
        };
    }

    impl_fallback_bits!(u8 => w8, u16 => w16, u32 => w32, u64 => w64);
}

/// Leading zero count computed without any built-in instruction.
#[inline]
pub fn countl_zero<T: Word>(x: T) -> u32 {
    x.countl_zero_fallback()
}

/// Trailing zero count computed without any built-in instruction.
#[inline]
pub fn countr_zero<T: Word>(x: T) -> u32 {
    x.countr_zero_fallback()
}

/// Population count computed without any built-in instruction.
#[inline]
pub fn popcount<T: Word>(x: T) -> u32 {
    x.popcount_fallback()
}
