use light_bitops::{BitOps, SignedOf, UnsignedOf, Word};

fn widest<const BYTES: usize>() -> u32
where
    light_bitops::Storage<BYTES>: light_bitops::StorageType,
{
    <UnsignedOf<BYTES> as Word>::BITS
}

fn main() {
    let raw: UnsignedOf<2> = 0xBEEF;
    let signed: SignedOf<1> = -1;
    assert_eq!(raw.byte(1), 0xBE);
    assert_eq!(signed.popcnt(), 8);
    assert_eq!(widest::<4>(), 32);
    assert_eq!(widest::<8>(), 64);
}
