use light_bitops::{BitOps, ByteSwap};

/// Decodes the operand of an ARM data-processing instruction with an
/// immediate operand: an 8-bit value rotated right by twice a 4-bit amount.
fn immediate_operand(insn: u32) -> u32 {
    let rotate = insn.const_field::<8, 4>() * 2;
    insn.const_field::<0, 8>().ror(rotate)
}

/// Decodes the byte offset of an ARM branch: a signed 24-bit word offset.
fn branch_offset(insn: u32) -> i32 {
    let words = (insn as i32).const_sign_extend::<24>();
    words << 2
}

fn describe(insn: u32) {
    let condition = insn.const_nibble::<7>();
    let registers: Vec<u32> = insn.const_field::<0, 16>().set_bits().collect();
    println!("{insn:#010x} (stored as {:#010x})", insn.bswap());
    println!("  condition  {condition:#x}");
    println!("  immediate  {:#x}", immediate_operand(insn));
    println!("  branch     {:+}", branch_offset(insn));
    println!("  reg list   {registers:?}");
}

fn main() {
    // mov r1, #5
    describe(0xE3A0_1005);
    // mov r0, #0xFF000000
    describe(0xE3A0_04FF);
    // b -8
    describe(0xEAFF_FFFE);
    // push {r4-r7, lr}
    describe(0xE92D_40F0);
}
