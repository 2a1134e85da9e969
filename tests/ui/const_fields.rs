use light_bitops::{BitOps, const_mask, const_ones};

const OPCODE_BITS: u32 = 4;

fn main() {
    let insn = 0xE3A0_1005u32;
    assert_eq!(insn.const_field::<28, OPCODE_BITS>(), 0xE);
    assert_eq!(insn.const_byte::<0>(), 0x05);
    assert_eq!(insn.const_nibble::<5>(), 0xA);
    assert_eq!(0x0FFFi16.const_sign_extend::<12>(), -1);
    assert_eq!(const_ones::<u8, 8>(), u8::MAX);
    assert_eq!(const_mask::<u64, 32, 32>(), 0xFFFF_FFFF_0000_0000);
}
