use num_enum::{IntoPrimitive, TryFromPrimitive};
use strum::{Display, EnumIter};

/// One-byte opcodes of the stack machine.
///
/// The numbering is part of the image format and must not change.
///
/// `cmp` pops `b` (top) then `a` (second from top) and latches the sign of
/// `a - b`. Each conditional jump pops its target address and branches when
/// the latched comparison satisfies `a <op> b`:
///
/// | op    | branch when |
/// |-------|-------------|
/// | `jl`  | `a <  b`    |
/// | `jle` | `a <= b`    |
/// | `jeq` | `a == b`    |
/// | `jge` | `a >= b`    |
/// | `jg`  | `a >  b`    |
/// | `jne` | `a != b`    |
/// | `jmp` | always      |
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    TryFromPrimitive,
    IntoPrimitive,
    Display,
    EnumIter,
)]
#[repr(u8)]
#[strum(serialize_all = "snake_case")]
pub enum OpCode {
    Nop = 0,
    Push = 1,
    Pop = 2,
    Add = 3,
    Cmp = 4,
    Jl = 5,
    Jle = 6,
    Jeq = 7,
    Jge = 8,
    Jg = 9,
    Jne = 10,
    Jmp = 11,
    Dup = 12,
    Out = 13,
    PushNothing = 14,
    Ddup = 15,
    Store = 16,
    Load = 17,
}

impl OpCode {
    pub fn parse(byte: u8) -> Result<Self, String> {
        match OpCode::try_from(byte) {
            Ok(op) => Ok(op),
            Err(_) => Err(format!("Undefined opcode: 0x{byte:02X}")),
        }
    }

    pub fn is_jump(&self) -> bool {
        use OpCode::*;
        matches!(self, Jl | Jle | Jeq | Jge | Jg | Jne | Jmp)
    }

    /// Number of operand bytes following the opcode.
    pub fn operands(&self) -> usize {
        match self {
            OpCode::Push => 1,
            _ => 0,
        }
    }
}
