use crate::codegen::Image;
use arch::inst::Inst;
use color_print::cformat;

const VHDL_HEADER: &str = "\
library IEEE;
use IEEE.std_logic_1164.all;
package program is
    constant code : work.types.T_MEMORY := (
";

const VHDL_FOOTER: &str = "\
    );
end program;
";

/// Raw image: opcodes and operands back to back, no header.
pub fn binary(image: &Image) -> Vec<u8> {
    image.values()
}

/// Memory initialization package, one `b"bbbbbbbb"` literal per byte.
pub fn vhdl(image: &Image) -> String {
    let mut out = String::from(VHDL_HEADER);
    let last = image.len().saturating_sub(1);
    for (idx, byte) in image.bytes.iter().enumerate() {
        out.push_str(&format!("        b\"{:08b}\"", byte.value));
        if idx != last {
            out.push(',');
        }
        if let Some(comment) = &byte.comment {
            out.push_str(&format!(" -- {comment}"));
        }
        out.push('\n');
    }
    out.push_str(VHDL_FOOTER);
    out
}

/// Label map as YAML (`name: address`).
pub fn symbols(image: &Image) -> Result<String, serde_yaml::Error> {
    serde_yaml::to_string(&image.labels)
}

/// Colored disassembly of the image, one row per instruction.
pub fn listing(image: &Image) -> Vec<String> {
    let values = image.values();
    let mut rows = vec![];
    let mut addr = 0;
    while addr < values.len() {
        rows.extend(label_rows(image, addr));
        match Inst::decode(&values[addr..]) {
            Some((inst, size)) => {
                let raw = values[addr..addr + size]
                    .iter()
                    .map(|v| format!("{v:02X}"))
                    .collect::<Vec<_>>()
                    .join(" ");
                let target = match inst {
                    Inst::Push(v) => image.labels.at(v).collect::<Vec<_>>().join(", "),
                    _ => String::new(),
                };
                let comment = image.bytes[addr].comment.as_deref().unwrap_or("");
                rows.push(cformat!(
                    "[{:02X}] {:<5} | {} <g>{:<8}</> <dim>; {}</>",
                    addr,
                    raw,
                    inst.cformat(),
                    target,
                    comment
                ));
                addr += size;
            }
            None => {
                rows.push(cformat!("[{:02X}] {:02X}    | <r,s>??</>", addr, values[addr]));
                addr += 1;
            }
        }
    }
    rows.extend(label_rows(image, values.len()));
    rows
}

fn label_rows(image: &Image, addr: usize) -> Vec<String> {
    match u8::try_from(addr) {
        Ok(addr) => image
            .labels
            .at(addr)
            .map(|name| cformat!("{:10}| <g>{}:</>", "", name))
            .collect(),
        Err(_) => vec![],
    }
}
