use s8asm::{compile, emit};

#[test]
fn binary_is_raw_bytes() {
    let image = compile("push 5\npush 3\nadd\nout").unwrap();
    assert_eq!(emit::binary(&image), vec![1, 5, 1, 3, 3, 13]);
}

#[test]
fn vhdl_program() {
    let image = compile("loop:\npush loop\njmp\n").unwrap();
    let expect = "\
library IEEE;
use IEEE.std_logic_1164.all;
package program is
    constant code : work.types.T_MEMORY := (
        b\"00000001\", -- push loop (line 2)
        b\"00000000\",
        b\"00001011\" -- jmp (line 3)
    );
end program;
";
    assert_eq!(emit::vhdl(&image), expect);
}

#[test]
fn vhdl_call_comment_on_first_byte() {
    let image = compile("\n\ncall").unwrap();
    let text = emit::vhdl(&image);
    let rows: Vec<_> = text.lines().filter(|l| l.contains("b\"")).collect();
    assert_eq!(
        rows,
        vec![
            "        b\"00000001\", -- call (line 3)",
            "        b\"00000100\",",
            "        b\"00010000\",",
            "        b\"00001011\"",
        ]
    );
}

#[test]
fn vhdl_msb_first() {
    let image = compile("push 128\npush 1").unwrap();
    let text = emit::vhdl(&image);
    assert!(text.contains("b\"10000000\","));
    assert!(text.contains("b\"00000001\"\n"));
}

#[test]
fn vhdl_empty_program() {
    let image = compile("").unwrap();
    let expect = "\
library IEEE;
use IEEE.std_logic_1164.all;
package program is
    constant code : work.types.T_MEMORY := (
    );
end program;
";
    assert_eq!(emit::vhdl(&image), expect);
}

#[test]
fn symbols_yaml() {
    let image = compile("start:\npush 1\nend:\n").unwrap();
    assert_eq!(emit::symbols(&image).unwrap(), "start: 0\nend: 2\n");
}

#[test]
fn listing_shows_labels_and_code() {
    let image = compile("start:\npush start\njmp\nend:").unwrap();
    let rows = emit::listing(&image);
    for row in &rows {
        println!("{row}");
    }
    assert_eq!(rows.len(), 4);
    assert!(rows[0].contains("start:"));
    assert!(rows[1].contains("[00] 01 00"));
    assert!(rows[1].contains("push start (line 2)"));
    assert!(rows[2].contains("[02] 0B"));
    assert!(rows[3].contains("end:"));
}
