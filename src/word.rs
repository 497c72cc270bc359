use core::fmt::{Binary, Debug};
use core::hash::Hash;
use core::ops::{BitAnd, Not};

mod private {
    /// Seals [`Word`](super::Word) and pulls in every dispatch tier, so each
    /// implementing width is guaranteed to have a fallback, a host and a
    /// device implementation.
    pub trait Sealed:
        crate::fallback::imp::FallbackBits
        + crate::host::imp::HostBits
        + crate::device::imp::DeviceBits
    {
    }
}

/// Returns `true` if `bits` is one of the word widths this crate supports
/// (8, 16, 32 or 64).
///
/// # Examples
/// ```
/// use light_bitops::is_supported_width;
///
/// assert!(is_supported_width(16));
/// assert!(!is_supported_width(128));
/// ```
pub const fn is_supported_width(bits: u32) -> bool {
    matches!(bits, 8 | 16 | 32 | 64)
}

#[allow(clippy::no_effect)]
#[allow(clippy::unnecessary_operation)]
pub(crate) const fn compile_assert_word_bits(bits: u32) {
    // This will cause a compile-time error if `bits` is not a supported width
    ["Word width must be 8, 16, 32 or 64 bits."][!is_supported_width(bits) as usize];
}

/// An unsigned machine word accepted by every operation in this crate.
///
/// Implemented for `u8`, `u16`, `u32` and `u64` only. The trait is sealed, so
/// the set of widths is closed and anything else is rejected while compiling,
/// never at runtime.
///
/// # Compiler Errors
/// Signed integers, `bool`, floats, `u128`, `usize` and pointers don't
/// implement `Word`:
///
/// ```compile_fail
/// let _ = light_bitops::countl_zero(-1i32);
/// ```
/// ```compile_fail
/// let _ = light_bitops::popcount(true);
/// ```
/// ```compile_fail
/// let _ = light_bitops::bit_width(1.0f32);
/// ```
/// ```compile_fail
/// let _ = light_bitops::countr_zero(1u128);
/// ```
/// ```compile_fail
/// let _ = light_bitops::bit_ceil(7usize);
/// ```
/// ```compile_fail
/// let _ = light_bitops::has_single_bit(core::ptr::null::<u8>());
/// ```
///
/// # Examples
/// ```
/// use light_bitops::{Word, bit_width};
///
/// fn fits_in_half<T: Word>(x: T) -> bool {
///     bit_width(x) <= T::BITS / 2
/// }
///
/// assert!(fits_in_half(0x0Fu8));
/// assert!(!fits_in_half(0x1_0000u64 << 20));
/// ```
pub trait Word:
    Copy
    + Eq
    + Ord
    + Hash
    + Default
    + Debug
    + Binary
    + Send
    + Sync
    + 'static
    + Not<Output = Self>
    + BitAnd<Output = Self>
    + private::Sealed
{
    /// Width of the word in bits.
    const BITS: u32;
    /// The all-zero word.
    const ZERO: Self;
    /// The word with only the least significant bit set.
    const ONE: Self;
    /// The all-ones word.
    const MAX: Self;

    /// `self - 1`, wrapping at zero.
    #[doc(hidden)]
    fn wrapping_dec(self) -> Self;

    /// `1 << shift`, or zero once `shift` reaches `BITS`.
    #[doc(hidden)]
    fn shl_or_zero(shift: u32) -> Self;
}

macro_rules! impl_word {
    ($($ty:ty),+ $(,)?) => {
        $(
            const _: () = compile_assert_word_bits(<$ty>::BITS);

            impl private::Sealed for $ty {}

            impl Word for $ty {
                const BITS: u32 = <$ty>::BITS;
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const MAX: Self = <$ty>::MAX;

                #[inline]
                fn wrapping_dec(self) -> Self {
                    self.wrapping_sub(1)
                }

                #[inline]
                fn shl_or_zero(shift: u32) -> Self {
                    match (1 as $ty).checked_shl(shift) {
                        Some(pow) => pow,
                        None => 0,
                    }
                }
            }
        )+
    };
}

impl_word!(u8, u16, u32, u64);
