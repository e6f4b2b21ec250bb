#![no_main]

use libfuzzer_sys::fuzz_target;

use monkey_lang::repl;

// Arbitrary bytes through the whole loop, which must finish without error.
fuzz_target!(|data: &[u8]| {
    let mut output = Vec::new();
    repl::start(data, &mut output).unwrap();
    let prompt = repl::PROMPT.as_bytes();
    let prompts = output.windows(prompt.len()).filter(|w| *w == prompt).count();
    assert!(prompts >= 1);
});
