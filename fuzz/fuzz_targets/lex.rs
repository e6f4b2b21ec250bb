#![no_main]

use libfuzzer_sys::fuzz_target;

use monkey_lang::toolchain::diagnostics::NullDiagnosticConsumer;
use monkey_lang::toolchain::lexer::tokenize;

fuzz_target!(|data: &[u8]| {
    let line = String::from_utf8_lossy(data);
    let mut diags = NullDiagnosticConsumer {};
    let mut cursor = tokenize(&line, &mut diags);
    let mut count = 0;
    while !cursor.next_token().is_end() {
        count += 1;
        assert!(count <= line.chars().count());
    }
    assert!(cursor.next_token().is_end());
});
