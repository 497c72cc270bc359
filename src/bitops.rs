#[cfg(any(
    target_arch = "nvptx64",
    target_arch = "amdgpu",
    target_arch = "spirv"
))]
use crate::device as context;
#[cfg(not(any(
    target_arch = "nvptx64",
    target_arch = "amdgpu",
    target_arch = "spirv"
)))]
use crate::host as context;

use crate::Word;

/// `true` if this build targets an accelerator, in which case every entry
/// point resolves to the [`device`](crate::device) tier instead of the
/// [`host`](crate::host) tier.
pub const ON_DEVICE: bool = cfg!(any(
    target_arch = "nvptx64",
    target_arch = "amdgpu",
    target_arch = "spirv"
));

/// Counts the zero bits above the highest set bit.
///
/// Returns `T::BITS` for zero.
///
/// # Examples
/// ```
/// use light_bitops::countl_zero;
///
/// assert_eq!(countl_zero(0u8), 8);
/// assert_eq!(countl_zero(1u8), 7);
/// assert_eq!(countl_zero(255u8), 0);
/// assert_eq!(countl_zero(0x0000_FFFFu32), 16);
/// ```
#[inline]
pub fn countl_zero<T: Word>(x: T) -> u32 {
    context::countl_zero(x)
}

/// Counts the one bits above the highest zero bit.
///
/// Returns `T::BITS` for the all-ones word.
///
/// # Examples
/// ```
/// use light_bitops::countl_one;
///
/// assert_eq!(countl_one(0b1110_0000u8), 3);
/// assert_eq!(countl_one(u16::MAX), 16);
/// assert_eq!(countl_one(0u64), 0);
/// ```
#[inline]
pub fn countl_one<T: Word>(x: T) -> u32 {
    if x == T::MAX {
        return T::BITS;
    }
    countl_zero(!x)
}

/// Counts the zero bits below the lowest set bit.
///
/// Returns `T::BITS` for zero.
///
/// # Examples
/// ```
/// use light_bitops::countr_zero;
///
/// assert_eq!(countr_zero(0u16), 16);
/// assert_eq!(countr_zero(8u16), 3);
/// assert_eq!(countr_zero(7u16), 0);
/// ```
#[inline]
pub fn countr_zero<T: Word>(x: T) -> u32 {
    context::countr_zero(x)
}

/// Counts the one bits below the lowest zero bit.
///
/// Returns `T::BITS` for the all-ones word.
///
/// # Examples
/// ```
/// use light_bitops::countr_one;
///
/// assert_eq!(countr_one(0b0111u8), 3);
/// assert_eq!(countr_one(u32::MAX), 32);
/// ```
#[inline]
pub fn countr_one<T: Word>(x: T) -> u32 {
    if x == T::MAX {
        return T::BITS;
    }
    countr_zero(!x)
}

/// Counts the set bits.
///
/// # Examples
/// ```
/// use light_bitops::popcount;
///
/// assert_eq!(popcount(0u8), 0);
/// assert_eq!(popcount(0xFFFF_FFFFu32), 32);
/// assert_eq!(popcount(0b1011u64), 3);
/// ```
#[inline]
pub fn popcount<T: Word>(x: T) -> u32 {
    context::popcount(x)
}

/// Returns `true` if `x` is a power of two, i.e. exactly one bit is set.
///
/// # Examples
/// ```
/// use light_bitops::has_single_bit;
///
/// assert!(has_single_bit(64u16));
/// assert!(!has_single_bit(0u16));
/// assert!(!has_single_bit(65u16));
/// ```
#[inline]
pub fn has_single_bit<T: Word>(x: T) -> bool {
    x != T::ZERO && (x & x.wrapping_dec()) == T::ZERO
}

/// Number of bits needed to represent `x`: the position of the highest set
/// bit plus one, `0` for zero.
///
/// # Examples
/// ```
/// use light_bitops::bit_width;
///
/// assert_eq!(bit_width(0u8), 0);
/// assert_eq!(bit_width(9u8), 4);
/// assert_eq!(bit_width(u64::MAX), 64);
/// ```
#[inline]
pub fn bit_width<T: Word>(x: T) -> u32 {
    T::BITS - countl_zero(x)
}

/// Largest power of two not greater than `x`, `0` for zero.
///
/// # Examples
/// ```
/// use light_bitops::bit_floor;
///
/// assert_eq!(bit_floor(0u8), 0);
/// assert_eq!(bit_floor(9u8), 8);
/// assert_eq!(bit_floor(u8::MAX), 128);
/// ```
#[inline]
pub fn bit_floor<T: Word>(x: T) -> T {
    if x == T::ZERO {
        return T::ZERO;
    }
    T::shl_or_zero(T::BITS - 1 - countl_zero(x))
}

/// Smallest power of two not less than `x`. Returns `1` for `0` and `1`.
///
/// # Overflow
/// If `x` is greater than the largest power of two a `T` can hold, the
/// ceiling would be `2^T::BITS`. The result then wraps to `0`, the same in
/// every tier and in const contexts; this never panics. Use
/// [`checked_bit_ceil`] to detect that case instead.
///
/// # Examples
/// ```
/// use light_bitops::bit_ceil;
///
/// assert_eq!(bit_ceil(60u16), 64);
/// assert_eq!(bit_ceil(64u16), 64);
/// assert_eq!(bit_ceil(65u16), 128);
/// assert_eq!(bit_ceil(0x8001u16), 0);
/// ```
#[inline]
pub fn bit_ceil<T: Word>(x: T) -> T {
    if x <= T::ONE {
        return T::ONE;
    }
    T::shl_or_zero(T::BITS - countl_zero(x.wrapping_dec()))
}

/// Smallest power of two not less than `x`, or `None` if it doesn't fit in
/// `T`.
///
/// # Examples
/// ```
/// use light_bitops::checked_bit_ceil;
///
/// assert_eq!(checked_bit_ceil(5u32), Some(8));
/// assert_eq!(checked_bit_ceil(0x80u8), Some(0x80));
/// assert_eq!(checked_bit_ceil(0x81u8), None);
/// ```
#[inline]
pub fn checked_bit_ceil<T: Word>(x: T) -> Option<T> {
    if x <= T::ONE {
        return Some(T::ONE);
    }
    let shift = T::BITS - countl_zero(x.wrapping_dec());
    (shift < T::BITS).then(|| T::shl_or_zero(shift))
}

/// Same contract as [`countl_zero`], resolved intrinsic-first.
#[inline]
pub fn countl_zero_builtin<T: Word>(x: T) -> u32 {
    context::countl_zero(x)
}

/// Same contract as [`countl_one`], built on [`countl_zero_builtin`].
#[inline]
pub fn countl_one_builtin<T: Word>(x: T) -> u32 {
    if x == T::MAX {
        return T::BITS;
    }
    countl_zero_builtin(!x)
}

/// Same contract as [`countr_zero`], resolved intrinsic-first.
#[inline]
pub fn countr_zero_builtin<T: Word>(x: T) -> u32 {
    context::countr_zero(x)
}

/// Same contract as [`countr_one`], built on [`countr_zero_builtin`].
#[inline]
pub fn countr_one_builtin<T: Word>(x: T) -> u32 {
    if x == T::MAX {
        return T::BITS;
    }
    countr_zero_builtin(!x)
}

/// Same contract as [`popcount`], resolved intrinsic-first.
#[inline]
pub fn popcount_builtin<T: Word>(x: T) -> u32 {
    context::popcount(x)
}

/// Same as [`has_single_bit`]; there is no instruction that does better.
#[inline]
pub fn has_single_bit_builtin<T: Word>(x: T) -> bool {
    has_single_bit(x)
}

/// Same contract as [`bit_width`], built on [`countl_zero_builtin`].
#[inline]
pub fn bit_width_builtin<T: Word>(x: T) -> u32 {
    T::BITS - countl_zero_builtin(x)
}

/// Same contract as [`bit_floor`], built on [`countl_zero_builtin`].
#[inline]
pub fn bit_floor_builtin<T: Word>(x: T) -> T {
    if x == T::ZERO {
        return T::ZERO;
    }
    T::shl_or_zero(T::BITS - 1 - countl_zero_builtin(x))
}

/// Same contract as [`bit_ceil`], including the wrap to `0` on overflow,
/// built on [`countl_zero_builtin`].
#[inline]
pub fn bit_ceil_builtin<T: Word>(x: T) -> T {
    if x <= T::ONE {
        return T::ONE;
    }
    T::shl_or_zero(T::BITS - countl_zero_builtin(x.wrapping_dec()))
}
