use crate::ast::{Code, Line, Operand, Stmt};
use crate::error::Fault;
use crate::label::{Backpatches, Labels};
use arch::inst::Inst;

/// Size of the `call` expansion: push(2) + store(1) + jmp(1).
const CALL_SIZE: usize = 4;

#[derive(Debug, Clone, PartialEq)]
pub struct Byte {
    pub value: u8,
    pub comment: Option<String>,
}

/// Assembled program: the bytes in load order and the resolved labels.
#[derive(Debug, Clone)]
pub struct Image {
    pub bytes: Vec<Byte>,
    pub labels: Labels,
}

impl Image {
    pub fn values(&self) -> Vec<u8> {
        self.bytes.iter().map(|byte| byte.value).collect()
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

pub fn generate(lines: &[Line]) -> Result<Image, Fault> {
    let mut generator = Generator::new();
    for line in lines {
        generator.line(line);
    }
    generator.finish()
}

struct Generator {
    bytes: Vec<Byte>,
    labels: Labels,
    patches: Backpatches,
}

impl Generator {
    fn new() -> Self {
        Generator {
            bytes: Vec::new(),
            labels: Labels::new(),
            patches: Backpatches::new(),
        }
    }

    // Addresses are one byte wide; larger images wrap.
    fn here(&self) -> u8 {
        self.bytes.len() as u8
    }

    fn line(&mut self, line: &Line) {
        match &line.stmt {
            Stmt::Label(name) => {
                self.labels.insert(name.clone(), self.here());
            }
            Stmt::Code(code) => {
                let insts = self.lower(code);
                let comment = format!("{} (line {})", code, line.line);
                self.emit(&insts, comment);
            }
        }
    }

    fn lower(&mut self, code: &Code) -> Vec<Inst> {
        match code {
            Code::Nop => vec![Inst::Nop],
            Code::Push(Operand::Imm(value)) => vec![Inst::Push(*value)],
            Code::Push(Operand::Label(name)) => match self.labels.get(name) {
                Some(addr) => vec![Inst::Push(addr)],
                None => {
                    // operand byte follows the opcode
                    self.patches.push(self.bytes.len() + 1, name.clone());
                    vec![Inst::Push(0)]
                }
            },
            Code::PushNothing => vec![Inst::PushNothing],
            Code::Pop => vec![Inst::Pop],
            Code::Add => vec![Inst::Add],
            Code::Cmp => vec![Inst::Cmp],
            Code::Dup => vec![Inst::Dup],
            Code::Ddup => vec![Inst::Ddup],
            Code::Out => vec![Inst::Out],
            Code::Store => vec![Inst::Store],
            Code::Load => vec![Inst::Load],
            Code::Call => {
                let ret = (self.bytes.len() + CALL_SIZE) as u8;
                vec![Inst::Push(ret), Inst::Store, Inst::Jmp]
            }
            Code::Ret => vec![Inst::Load, Inst::Jmp],
            Code::Jl => vec![Inst::Jl],
            Code::Jle => vec![Inst::Jle],
            Code::Jeq => vec![Inst::Jeq],
            Code::Jge => vec![Inst::Jge],
            Code::Jg => vec![Inst::Jg],
            Code::Jne => vec![Inst::Jne],
            Code::Jmp => vec![Inst::Jmp],
        }
    }

    fn emit(&mut self, insts: &[Inst], comment: String) {
        let mut bin = Vec::new();
        for inst in insts {
            inst.encode(&mut bin);
        }
        let mut comment = Some(comment);
        for value in bin {
            self.bytes.push(Byte {
                value,
                comment: comment.take(),
            });
        }
    }

    fn finish(mut self) -> Result<Image, Fault> {
        for (offset, name) in self.patches.iter() {
            let addr = self
                .labels
                .get(name)
                .ok_or_else(|| Fault::UnresolvedLabel(name.clone()))?;
            self.bytes[*offset].value = addr;
        }
        Ok(Image {
            bytes: self.bytes,
            labels: self.labels,
        })
    }
}
