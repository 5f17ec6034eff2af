use crate::error::{Error, ParseError};
use color_print::cprintln;

#[derive(Debug)]
pub enum Msg {
    Error(String),
    Warn(String),
    Note(String),
}

impl Msg {
    fn head(&self) {
        match self {
            Msg::Error(msg) => cprintln!("<red,bold>error</>: {}", msg),
            Msg::Warn(msg) => cprintln!("<yellow,bold>warn</>: {}", msg),
            Msg::Note(msg) => cprintln!("<green,bold>note</>: {}", msg),
        }
    }

    pub fn print(&self) {
        self.head();
    }

    /// Print with the offending source line. `line` is 1-based.
    pub fn diag(&self, file: &str, source: &str, line: usize) {
        self.head();
        let raw = source.lines().nth(line.saturating_sub(1)).unwrap_or("");
        cprintln!("     <blue>--></> <underline>{}:{}</>", file, line);
        cprintln!("      <blue>|</>");
        cprintln!(" <blue>{:>4} |</> {}", line, raw);
        cprintln!("      <blue>|</>");
    }
}

impl Error {
    /// Report the error, pointing into `source` when the line is known.
    pub fn print_diag(&self, file: &str, source: &str) {
        let msg = Msg::Error(self.to_string());
        match self.line() {
            Some(line) => msg.diag(file, source, line),
            None => msg.print(),
        }
        if let Error::Parse(ParseError::MissingLabel(name)) = self {
            Msg::Note(format!("Declare it on its own line as `{name}:`")).print();
        }
        if self.is_internal() {
            Msg::Note(format!("This is a bug in the assembler, not in `{file}`")).print();
        }
    }
}
