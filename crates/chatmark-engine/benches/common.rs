// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_message(size: usize) -> String {
    let base = "## Title\n\nParagraph with **bold**, *italic*, `code` and a [link](https://example.com/a_b).\n\n- Bullet point\n- Another item\n1. First\n2. Second\n\n> A quoted line\n---\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_inline_heavy_line(spans: usize) -> String {
    let mut line = String::new();
    for i in 0..spans {
        line.push_str(&format!("word{i} **b{i}** _i{i}_ `c{i}` [l{i}](u{i}) "));
    }
    line
}
