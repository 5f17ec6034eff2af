use std::fmt;

// ----------------------------------------------------------------------------
// Line

/// A parsed source line that produces something: a label or an instruction.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub stmt: Stmt,
    pub line: usize,
}

impl Line {
    pub fn new(stmt: Stmt, line: usize) -> Self {
        Line { stmt, line }
    }
}

// ----------------------------------------------------------------------------
// Statement

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Label(String),
    Code(Code),
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::Label(name) => write!(f, "{name}:"),
            Stmt::Code(code) => write!(f, "{code}"),
        }
    }
}

// ----------------------------------------------------------------------------
// Instruction

#[derive(Debug, Clone, PartialEq)]
pub enum Code {
    Nop,
    Push(Operand),
    PushNothing,
    Pop,
    Add,
    Cmp,
    Dup,
    Ddup,
    Out,
    Store,
    Load,
    Call,
    Ret,
    Jl,
    Jle,
    Jeq,
    Jge,
    Jg,
    Jne,
    Jmp,
}

impl Code {
    pub fn mnemonic(&self) -> &'static str {
        match self {
            Code::Nop => "nop",
            Code::Push(_) | Code::PushNothing => "push",
            Code::Pop => "pop",
            Code::Add => "add",
            Code::Cmp => "cmp",
            Code::Dup => "dup",
            Code::Ddup => "ddup",
            Code::Out => "out",
            Code::Store => "store",
            Code::Load => "load",
            Code::Call => "call",
            Code::Ret => "ret",
            Code::Jl => "jl",
            Code::Jle => "jle",
            Code::Jeq => "jeq",
            Code::Jge => "jge",
            Code::Jg => "jg",
            Code::Jne => "jne",
            Code::Jmp => "jmp",
        }
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Code::Push(operand) => write!(f, "push {operand}"),
            code => write!(f, "{}", code.mnemonic()),
        }
    }
}

// ----------------------------------------------------------------------------
// Operand

#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Imm(u8),
    Label(String),
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Imm(value) => write!(f, "{value}"),
            Operand::Label(name) => write!(f, "{name}"),
        }
    }
}
