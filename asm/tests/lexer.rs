use s8asm::token::{TokenKind, TokenKind::*};

fn assert(code: &str, expects: Vec<TokenKind>) {
    let tokens = s8asm::tokenize(code).unwrap();

    println!(" {code:?}");
    for (idx, token) in tokens.iter().enumerate() {
        println!("{:>2}: {:?} @ {}", idx, token.kind, token.pos);
    }

    assert_eq!(tokens.len(), expects.len());
    for (idx, expect) in expects.iter().enumerate() {
        assert_eq!(tokens[idx].kind, *expect);
    }
}

macro_rules! case {
    ($name:ident, $code:expr, $expects:expr) => {
        #[test]
        fn $name() {
            assert($code, $expects);
        }
    };
}

// ---- Names ----
case!(name_simple, "push", vec![Name(format!("push"))]);
case!(name_underscore, "_loop_1", vec![Name(format!("_loop_1"))]);
case!(name_mixed_case, "Loop", vec![Name(format!("Loop"))]);

// ---- Integers ----
case!(int_zero, "0", vec![Integer(0)]);
case!(int_max, "255", vec![Integer(255)]);
case!(int_wrap, "256", vec![Integer(0)]);
case!(int_wrap_300, "300", vec![Integer(44)]);
case!(int_minus_one, "-1", vec![Integer(255)]);
case!(int_minus_128, "-128", vec![Integer(128)]);
case!(int_leading_zero, "007", vec![Integer(7)]);
case!(int_then_name, "5abc", vec![Integer(5), Name(format!("abc"))]);

// ---- Punctuation ----
case!(colon, ":", vec![Colon]);
case!(newline_lf, "\n", vec![NewLine]);
case!(newline_crlf, "\r\n", vec![NewLine]);

// ---- Whitespace ----
case!(empty, "", vec![]);
case!(only_blanks, " \t  ", vec![]);

// ---- Lines ----
case!(
    label_line,
    "loop:\n",
    vec![Name(format!("loop")), Colon, NewLine]
);
case!(
    push_line,
    "\tpush   -3 \r\n",
    vec![Name(format!("push")), Integer(253), NewLine]
);
case!(
    program,
    "push 5\npush 3\nadd\nout",
    vec![
        Name(format!("push")),
        Integer(5),
        NewLine,
        Name(format!("push")),
        Integer(3),
        NewLine,
        Name(format!("add")),
        NewLine,
        Name(format!("out")),
    ]
);

// ---- Errors ----
fn fails_at(code: &str, ch: char, line: usize, offset: usize) {
    let err = s8asm::tokenize(code).unwrap_err();
    assert_eq!(err.ch, ch);
    assert_eq!(err.pos.line, line);
    assert_eq!(err.pos.offset, offset);
}

#[test]
fn error_unknown_char() {
    fails_at("push $5", '$', 1, 5);
}

#[test]
fn error_comment_not_supported() {
    fails_at("nop\nnop ; hi", ';', 2, 8);
}

#[test]
fn error_bare_minus() {
    fails_at("push -", '-', 1, 5);
}

#[test]
fn error_minus_before_name() {
    fails_at("push -x", '-', 1, 5);
}

#[test]
fn error_non_ascii() {
    fails_at("pushé", 'é', 1, 4);
}
