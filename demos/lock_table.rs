use light_bitops::{ON_DEVICE, Word, bit_ceil, bit_width, countr_zero, device, host};

/// Fixed-size table of lock words whose length is always a power of two, so
/// an address maps onto a slot with a mask instead of a division.
struct LockTable {
    locks: Vec<u32>,
    mask: u64,
    shift: u32,
}

impl LockTable {
    fn new(requested: u32) -> Self {
        let len = bit_ceil(requested.max(1));
        assert_ne!(len, 0, "{requested} locks don't fit in a power-of-two table");
        Self {
            locks: vec![0; len as usize],
            mask: u64::from(len - 1),
            // Drops the alignment bits of 8-byte aligned addresses.
            shift: countr_zero(8u64),
        }
    }

    fn slot(&self, addr: u64) -> usize {
        ((addr >> self.shift) & self.mask) as usize
    }

    fn index_bits(&self) -> u32 {
        bit_width(self.mask)
    }
}

fn describe<T: Word>(x: T) {
    println!(
        "{x:>#20b}: width {:>2}, ceil {:#b}",
        bit_width(x),
        bit_ceil(x)
    );
}

fn main() {
    println!(
        "context: {}, host built-ins: {}, device backend: {:?}",
        if ON_DEVICE { "device" } else { "host" },
        host::USES_BUILTINS,
        device::BACKEND
    );

    let mut table = LockTable::new(1000);
    println!(
        "{} locks, {} index bits",
        table.locks.len(),
        table.index_bits()
    );

    for addr in [0x1000u64, 0x1008, 0x2000, 0xDEAD_BEE8] {
        let slot = table.slot(addr);
        table.locks[slot] += 1;
        println!("{addr:#010x} -> slot {slot}");
    }

    describe(9u8);
    describe(60u16);
    describe(65u32);
}
