use light_bitops::{BitOps, ByteSwap, Word, ones};

fn low_field<T: Word>(value: T, size: u32) -> T {
    value & ones::<T>(size)
}

fn highest_set_bit<T: Word>(value: T) -> Option<u32> {
    if value == T::ZERO {
        None
    } else {
        Some(T::BITS - 1 - value.clz())
    }
}

fn to_big_endian<T: ByteSwap>(value: T) -> T {
    if cfg!(target_endian = "little") {
        value.bswap()
    } else {
        value
    }
}

fn main() {
    assert_eq!(low_field(0xABCDu16, 8), 0xCD);
    assert_eq!(low_field(-1i64, 64), -1);
    assert_eq!(highest_set_bit(0u32), None);
    assert_eq!(highest_set_bit(0x0100u16), Some(8));
    assert_eq!(to_big_endian(0x1234u16).to_ne_bytes(), [0x12, 0x34]);

    let mut total = 0;
    for idx in 0b1011_0100u8.set_bits() {
        total += idx;
    }
    assert_eq!(total, 2 + 4 + 5 + 7);
}
