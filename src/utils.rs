use crate::types::Section;

pub fn clip(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max).collect();
    out.push_str("… [truncated]");
    out
}

/// Prints the lines a run inserts, one per section, tabs made visible.
pub fn display_inserted_lines(lines: &[String]) {
    let label_width = Section::ALL
        .iter()
        .map(|s| s.to_string().len())
        .max()
        .unwrap_or(0);

    println!("\u{001b}[36m╭─ Changes\u{001b}[0m");
    for (section, line) in Section::ALL.iter().zip(lines) {
        let shown = clip(&line.replace('\t', "  "), 120);
        println!(
            "\u{001b}[90m│ {:width$} │\u{001b}[0m \u{001b}[32m+{}\u{001b}[0m",
            section.to_string(),
            shown,
            width = label_width
        );
    }
    println!("\u{001b}[36m╰─\u{001b}[0m");
}
