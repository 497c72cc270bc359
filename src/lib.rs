//! Portable bit manipulation primitives for unsigned words, written in pure
//! Rust. `no_std`, no heap / `alloc`, no `unsafe` — just `core`.
//!
//! Every operation is total and pure: it is defined for every bit pattern of
//! `u8`, `u16`, `u32` and `u64` (zero and all-ones included), has no side
//! effects and can be called from any number of threads or device lanes at
//! once.
//!
//! # Examples
//! ```
//! use light_bitops::{bit_ceil, countl_zero, has_single_bit, popcount};
//!
//! assert_eq!(countl_zero(1u8), 7);
//! assert_eq!(popcount(0xF0F0u16), 8);
//! assert!(has_single_bit(1024u32));
//! assert_eq!(bit_ceil(1000u64), 1024);
//! ```
//!
//! The [`fallback`] algorithms are `const fn`, so they also work in const
//! contexts:
//! ```
//! use light_bitops::fallback::w32;
//!
//! const TABLE_LEN: u32 = w32::bit_ceil(300);
//! static TABLE: [u8; TABLE_LEN as usize] = [0; TABLE_LEN as usize];
//! assert_eq!(TABLE.len(), 512);
//! ```
//!
//! # Use Cases
//!
//! - Sizing power-of-two tables (lock arrays, hash buckets, ring buffers)
//! - Index arithmetic and hashing that needs `log2`-style helpers
//! - Code shared between host and accelerator builds that must give the same
//!   answers on both
//!
//! # Features
//!
//! - `#![no_std]` compatible
//! - Counting: `countl_zero`, `countl_one`, `countr_zero`, `countr_one`,
//!   `popcount`
//! - Powers of two: `has_single_bit`, `bit_width`, `bit_floor`, `bit_ceil`,
//!   `checked_bit_ceil`
//! - `*_builtin` variants for call sites that want the intrinsic-first path
//! - Three tiers with identical results:
//!   - [`fallback`]: portable, constant-evaluable reference algorithms
//!   - [`host`]: compiler built-ins, picked per word width
//!   - [`device`]: lane instructions on `nvptx64`, `amdgpu` and `spirv`
//! - Only `u8`, `u16`, `u32` and `u64` are accepted, checked while compiling
//!   (see [`Word`])
//!
//! # Cargo Features
//!
//! - `portable`: the host tier uses the fallback algorithms instead of
//!   compiler built-ins.

#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![no_std]

mod bitops;
pub mod device;
pub mod fallback;
pub mod host;
mod word;

pub use bitops::{
    ON_DEVICE, bit_ceil, bit_ceil_builtin, bit_floor, bit_floor_builtin, bit_width,
    bit_width_builtin, checked_bit_ceil, countl_one, countl_one_builtin, countl_zero,
    countl_zero_builtin, countr_one, countr_one_builtin, countr_zero, countr_zero_builtin,
    has_single_bit, has_single_bit_builtin, popcount, popcount_builtin,
};
pub use word::{Word, is_supported_width};
