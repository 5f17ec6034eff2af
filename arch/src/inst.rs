use crate::op::OpCode;

use color_print::cformat;

/// A machine instruction with every operand resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inst {
    Nop,
    Push(u8),
    PushNothing,
    Pop,
    Add,
    Cmp,
    Jl,
    Jle,
    Jeq,
    Jge,
    Jg,
    Jne,
    Jmp,
    Dup,
    Out,
    Ddup,
    Store,
    Load,
}

impl Inst {
    pub fn opcode(&self) -> OpCode {
        match self {
            Inst::Nop => OpCode::Nop,
            Inst::Push(_) => OpCode::Push,
            Inst::PushNothing => OpCode::PushNothing,
            Inst::Pop => OpCode::Pop,
            Inst::Add => OpCode::Add,
            Inst::Cmp => OpCode::Cmp,
            Inst::Jl => OpCode::Jl,
            Inst::Jle => OpCode::Jle,
            Inst::Jeq => OpCode::Jeq,
            Inst::Jge => OpCode::Jge,
            Inst::Jg => OpCode::Jg,
            Inst::Jne => OpCode::Jne,
            Inst::Jmp => OpCode::Jmp,
            Inst::Dup => OpCode::Dup,
            Inst::Out => OpCode::Out,
            Inst::Ddup => OpCode::Ddup,
            Inst::Store => OpCode::Store,
            Inst::Load => OpCode::Load,
        }
    }

    /// Encoded length in bytes.
    pub fn size(&self) -> usize {
        1 + self.opcode().operands()
    }

    pub fn encode(&self, out: &mut Vec<u8>) {
        out.push(self.opcode().into());
        if let Inst::Push(imm) = self {
            out.push(*imm);
        }
    }

    /// Decode the instruction at the head of `bytes`.
    /// Returns the instruction and the number of bytes it occupies.
    pub fn decode(bytes: &[u8]) -> Option<(Inst, usize)> {
        let (&head, rest) = bytes.split_first()?;
        let inst = match OpCode::parse(head).ok()? {
            OpCode::Nop => Inst::Nop,
            OpCode::Push => Inst::Push(*rest.first()?),
            OpCode::PushNothing => Inst::PushNothing,
            OpCode::Pop => Inst::Pop,
            OpCode::Add => Inst::Add,
            OpCode::Cmp => Inst::Cmp,
            OpCode::Jl => Inst::Jl,
            OpCode::Jle => Inst::Jle,
            OpCode::Jeq => Inst::Jeq,
            OpCode::Jge => Inst::Jge,
            OpCode::Jg => Inst::Jg,
            OpCode::Jne => Inst::Jne,
            OpCode::Jmp => Inst::Jmp,
            OpCode::Dup => Inst::Dup,
            OpCode::Out => Inst::Out,
            OpCode::Ddup => Inst::Ddup,
            OpCode::Store => Inst::Store,
            OpCode::Load => Inst::Load,
        };
        Some((inst, inst.size()))
    }
}

impl Inst {
    pub fn cformat(&self) -> String {
        let name = self.opcode().to_string();
        match self {
            Inst::Push(imm) => cformat!("<r>{:<6}</><y>0x{:02X}</>", name, imm),
            op if op.opcode().is_jump() => cformat!("<m>{:<6}</>", name),
            _ => cformat!("<r>{:<6}</>", name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_inst {
        ($($name:ident: $inst:expr => $bin:expr,)*) => {
            $(
                #[test]
                fn $name() {
                    let inst = $inst;
                    let mut bin = vec![];
                    inst.encode(&mut bin);
                    assert_eq!(bin, $bin);
                    assert_eq!(inst.size(), bin.len());
                    assert_eq!(Inst::decode(&bin), Some((inst, bin.len())));
                }
            )*
        }
    }

    test_inst! {
        test_nop: Inst::Nop => vec![0],
        test_push: Inst::Push(0x2A) => vec![1, 0x2A],
        test_push_max: Inst::Push(0xFF) => vec![1, 0xFF],
        test_pop: Inst::Pop => vec![2],
        test_add: Inst::Add => vec![3],
        test_cmp: Inst::Cmp => vec![4],
        test_jl: Inst::Jl => vec![5],
        test_jle: Inst::Jle => vec![6],
        test_jeq: Inst::Jeq => vec![7],
        test_jge: Inst::Jge => vec![8],
        test_jg: Inst::Jg => vec![9],
        test_jne: Inst::Jne => vec![10],
        test_jmp: Inst::Jmp => vec![11],
        test_dup: Inst::Dup => vec![12],
        test_out: Inst::Out => vec![13],
        test_push_nothing: Inst::PushNothing => vec![14],
        test_ddup: Inst::Ddup => vec![15],
        test_store: Inst::Store => vec![16],
        test_load: Inst::Load => vec![17],
    }

    #[test]
    fn test_decode_truncated_push() {
        assert_eq!(Inst::decode(&[1]), None);
    }

    #[test]
    fn test_decode_unknown() {
        assert_eq!(Inst::decode(&[0x80, 0x00]), None);
        assert_eq!(Inst::decode(&[]), None);
    }

    #[test]
    fn test_decode_stream() {
        let bin = [1, 5, 1, 3, 3, 13];
        let mut rest = &bin[..];
        let mut insts = vec![];
        while let Some((inst, len)) = Inst::decode(rest) {
            insts.push(inst);
            rest = &rest[len..];
        }
        assert_eq!(
            insts,
            vec![Inst::Push(5), Inst::Push(3), Inst::Add, Inst::Out]
        );
    }
}
