use light_bitops::{Word, bit_ceil, countr_zero, popcount};

fn first_free_slot<T: Word>(occupied: T) -> Option<u32> {
    let free = !occupied;
    (free != T::ZERO).then(|| countr_zero(free))
}

fn main() {
    assert_eq!(first_free_slot(0b0111u8), Some(3));
    assert_eq!(first_free_slot(u64::MAX), None);
    assert_eq!(popcount(0x0F0Fu16), 8);
    assert_eq!(bit_ceil(17u32), 32);
}
