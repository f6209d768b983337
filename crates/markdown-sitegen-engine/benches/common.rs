// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **bold** and _italic_ content.\n\n- Bullet point\n- Another [link](/about)\n\n1. First\n2. Second\n\n> Quoted `code`\n\n```\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_inline_line(segments: usize) -> String {
    let base = "plain text **bold** more _italic_ then `code` and [a link](https://example.com) plus ![img](/i.png) ";
    base.repeat(segments)
}
