// Benchmark helpers. Dead code analysis doesn't see uses from sibling bench
// files, hence the allows: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_block_document(sections: usize) -> String {
    let mut blocks = Vec::new();
    for n in 0..sections {
        blocks.push(format!("<H2>\nSection {n}\n</H2>"));
        blocks.push(format!(
            "<Text>Paragraph {n} with enough prose to look like a real note body, \
             written across a couple of clauses so the scanner has text to walk.</Text>"
        ));
        blocks.push(format!(
            "<Code code={{`fn item_{n}() {{ {n} }}`}} language=\"rust\" />"
        ));
        if n % 3 == 0 {
            blocks.push(format!(
                "<Link href=\"https://example.com/{n}\">\nRef {n}\n</Link>"
            ));
        }
        if n % 4 == 0 {
            blocks.push("<D />".to_string());
        } else {
            blocks.push("<SpacerS />".to_string());
        }
    }
    blocks.join("\n\n")
}

/// Bare prose sprinkled with tag-like noise, the worst case for the scanner:
/// every `<` candidate has to be probed and rejected.
#[allow(dead_code)]
pub fn generate_mixed_prose(paragraphs: usize) -> String {
    (0..paragraphs)
        .map(|n| format!("Bare paragraph {n} with <angle noise and a stray </End> marker."))
        .collect::<Vec<_>>()
        .join("\n\n")
}
