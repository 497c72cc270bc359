//! Device dispatch.
//!
//! Exactly one backend is compiled into a build, chosen by the target:
//!
//! - `nvptx64` and `amdgpu`: lane instructions in the style of `__clz`,
//!   `__ffs` and `__popc` on 32-bit lanes, and their 64-bit variants for
//!   `u64`.
//! - `spirv`: native-width `clz`, `ctz` and `popcount`.
//! - any other target: [`fallback`](crate::fallback).
//!
//! Nothing in here refers to the [`host`](crate::host) tier.

use crate::Word;
use imp::DeviceBits;

/// The device backends this crate knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    /// 32/64-bit lane instructions (`nvptx64`, `amdgpu`).
    Lane,
    /// Native-width SPIR-V bit instructions.
    Spirv,
    /// No recognised device backend, the portable algorithms are used.
    Fallback,
}

/// The backend compiled into this build.
#[cfg(any(target_arch = "nvptx64", target_arch = "amdgpu"))]
pub const BACKEND: Backend = Backend::Lane;
/// The backend compiled into this build.
#[cfg(target_arch = "spirv")]
pub const BACKEND: Backend = Backend::Spirv;
/// The backend compiled into this build.
#[cfg(not(any(
    target_arch = "nvptx64",
    target_arch = "amdgpu",
    target_arch = "spirv"
)))]
pub const BACKEND: Backend = Backend::Fallback;

pub(crate) mod imp {
    pub trait DeviceBits: Sized {
        fn countl_zero_device(self) -> u32;
        fn countr_zero_device(self) -> u32;
        fn popcount_device(self) -> u32;
    }

    #[cfg(any(test, target_arch = "nvptx64", target_arch = "amdgpu"))]
    pub(crate) mod lane {
        pub trait LaneBits: Sized {
            fn clz_lane(self) -> u32;
            fn ctz_lane(self) -> u32;
            fn popc_lane(self) -> u32;
        }

        /// One-based index of the lowest set bit, zero for zero (`__ffs`).
        #[inline]
        pub const fn ffs(x: u32) -> u32 {
            if x == 0 { 0 } else { x.trailing_zeros() + 1 }
        }

        /// 64-bit lane variant of [`ffs`] (`__ffsll`).
        #[inline]
        pub const fn ffsll(x: u64) -> u32 {
            if x == 0 { 0 } else { x.trailing_zeros() + 1 }
        }

        macro_rules! impl_lane_bits {
            ($($ty:ty => ($lane:ty, $ffs:ident)),+ $(,)?) => {
                $(
                    #[allow(clippy::unnecessary_cast)]
                    impl LaneBits for $ty {
                        #[inline]
                        fn clz_lane(self) -> u32 {
                            const SHIFT: u32 = <$lane>::BITS - <$ty>::BITS;
                            (self as $lane).leading_zeros() - SHIFT
                        }

                        #[inline]
                        fn ctz_lane(self) -> u32 {
                            if self == 0 {
                                return <$ty>::BITS;
                            }
                            $ffs(self as $lane) - 1
                        }

                        #[inline]
                        fn popc_lane(self) -> u32 {
                            (self as $lane).count_ones()
                        }
                    }
                )+
            };
        }

        impl_lane_bits!(
            u8 => (u32, ffs),
            u16 => (u32, ffs),
            u32 => (u32, ffs),
            u64 => (u64, ffsll),
        );
    }

    #[cfg(any(target_arch = "nvptx64", target_arch = "amdgpu"))]
    macro_rules! impl_device_bits {
        ($($ty:ty),+ $(,)?) => {
            $(
                impl DeviceBits for $ty {
                    #[inline]
                    fn countl_zero_device(self) -> u32 {
                        lane::LaneBits::clz_lane(self)
                    }

                    #[inline]
                    fn countr_zero_device(self) -> u32 {
                        lane::LaneBits::ctz_lane(self)
                    }

                    #[inline]
                    fn popcount_device(self) -> u32 {
                        lane::LaneBits::popc_lane(self)
                    }
                }
            )+
        };
    }

    #[cfg(target_arch = "spirv")]
    macro_rules! impl_device_bits {
        ($($ty:ty),+ $(,)?) => {
            $(
                impl DeviceBits for $ty {
                    #[inline]
                    fn countl_zero_device(self) -> u32 {
                        self.leading_zeros()
                    }

                    #[inline]
                    fn countr_zero_device(self) -> u32 {
                        self.trailing_zeros()
                    }

                    #[inline]
                    fn popcount_device(self) -> u32 {
                        self.count_ones()
                    }
                }
            )+
        };
    }

    #[cfg(not(any(
        target_arch = "nvptx64",
        target_arch = "amdgpu",
        target_arch = "spirv"
    )))]
    macro_rules! impl_device_bits {
        ($($ty:ty),+ $(,)?) => {
            $(
                impl DeviceBits for $ty {
                    #[inline]
                    fn countl_zero_device(self) -> u32 {
                        crate::fallback::imp::FallbackBits::countl_zero_fallback(self)
                    }

                    #[inline]
                    fn countr_zero_device(self) -> u32 {
                        crate::fallback::imp::FallbackBits::countr_zero_fallback(self)
                    }

                    #[inline]
                    fn popcount_device(self) -> u32 {
                        crate::fallback::imp::FallbackBits::popcount_fallback(self)
                    }
                }
            )+
        };
    }

    impl_device_bits!(u8, u16, u32, u64);
}

/// Leading zero count through the device tier.
#[inline]
pub fn countl_zero<T: Word>(x: T) -> u32 {
    x.countl_zero_device()
}

/// Trailing zero count through the device tier.
#[inline]
pub fn countr_zero<T: Word>(x: T) -> u32 {
    x.countr_zero_device()
}

/// Population count through the device tier.
#[inline]
pub fn popcount<T: Word>(x: T) -> u32 {
    x.popcount_device()
}
