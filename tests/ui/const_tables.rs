use light_bitops::fallback::{w8, w16, w32, w64};

const LOCK_COUNT: u32 = w32::bit_ceil(1000);
const LOCK_MASK: u32 = LOCK_COUNT - 1;
const PAGE_SHIFT: u32 = w64::countr_zero(4096);
const HALF: u8 = w8::bit_floor(200);

static LOCKS: [u8; LOCK_COUNT as usize] = [0; LOCK_COUNT as usize];

const _: () = assert!(w16::popcount(0xF0F0) == 8);
const _: () = assert!(w16::has_single_bit(1 << 15));
const _: () = assert!(w8::checked_bit_ceil(200).is_none());

fn main() {
    assert_eq!(LOCKS.len(), 1024);
    assert_eq!(LOCK_MASK, 1023);
    assert_eq!(PAGE_SHIFT, 12);
    assert_eq!(HALF, 128);
}
