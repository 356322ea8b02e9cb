// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **bold**, *italic* and a [link](https://example.com).\n\n- Bullet point\n  - Nested item\n    1. Deep item\n- Another item\n\n> A quote with `code`\n---\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_nested_list(items: usize, depth: usize) -> String {
    let mut content = String::new();
    for i in 0..items {
        for level in 0..depth {
            let indent = "  ".repeat(level);
            let marker = if level % 2 == 0 { "-".to_string() } else { format!("{}.", i + 1) };
            content.push_str(&format!("{indent}{marker} Item {i} at level {level}\n"));
        }
    }
    content
}

#[allow(dead_code)]
pub fn generate_inline_heavy(lines: usize) -> String {
    let line = "Text with **bold**, __strong__, *em*, ~~gone~~, `code`, [link](url \"t\") and ![img](a.png).\n";
    line.repeat(lines)
}
