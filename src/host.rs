//! Host dispatch.
//!
//! Uses the compiler's bit-counting built-ins through core's integer methods.
//! The built-ins are picked per width at compile time: 32- and 64-bit words
//! map onto a lane of their own width, 8- and 16-bit words are widened to a
//! 32-bit lane. With the `portable` feature the built-ins are treated as
//! unavailable and every call goes to [`fallback`](crate::fallback).

use crate::Word;
use imp::HostBits;

/// `true` if this build routes host calls to compiler built-ins, `false` if
/// it uses the portable fallback.
pub const USES_BUILTINS: bool = cfg!(not(feature = "portable"));

pub(crate) mod imp {
    pub trait HostBits: Sized {
        fn countl_zero_host(self) -> u32;
        fn countr_zero_host(self) -> u32;
        fn popcount_host(self) -> u32;
    }

    #[cfg(not(feature = "portable"))]
    macro_rules! impl_host_bits {
        ($($ty:ty => $lane:ty),+ $(,)?) => {
            $(
                #[allow(clippy::unnecessary_cast)]
                impl HostBits for $ty {
                    #[inline]
                    fn countl_zero_host(self) -> u32 {
                        // Zero bits the widening adds on top of the word.
                        const SHIFT: u32 = <$lane>::BITS - <$ty>::BITS;
                        (self as $lane).leading_zeros() - SHIFT
                    }

                    #[inline]
                    fn countr_zero_host(self) -> u32 {
                        if self == 0 {
                            return <$ty>::BITS;
                        }
                        (self as $lane).trailing_zeros()
                    }

                    #[inline]
                    fn popcount_host(self) -> u32 {
                        (self as $lane).count_ones()
                    }
                }
            )+
        };
    }

    #[cfg(feature = "portable")]
    macro_rules! impl_host_bits {
        ($($ty:ty => $lane:ty),+ $(,)?) => {
            $(
                impl HostBits for $ty {
                    #[inline]
                    fn countl_zero_host(self) -> u32 {
                        crate::fallback::imp::FallbackBits::countl_zero_fallback(self)
                    }

                    #[inline]
                    fn countr_zero_host(self) -> u32 {
                        crate::fallback::imp::FallbackBits::countr_zero_fallback(self)
                    }

                    #[inline]
                    fn popcount_host(self) -> u32 {
                        crate::fallback::imp::FallbackBits::popcount_fallback(self)
                    }
                }
            )+
        };
    }

    impl_host_bits!(u8 => u32, u16 => u32, u32 => u32, u64 => u64);
}

/// Leading zero count through the host tier.
#[inline]
pub fn countl_zero<T: Word>(x: T) -> u32 {
    x.countl_zero_host()
}

/// Trailing zero count through the host tier.
#[inline]
pub fn countr_zero<T: Word>(x: T) -> u32 {
    x.countr_zero_host()
}

/// Population count through the host tier.
#[inline]
pub fn popcount<T: Word>(x: T) -> u32 {
    x.popcount_host()
}
