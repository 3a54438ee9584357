use std::fmt::{self, Write};

use crate::core::{Block, Column, Document, Figure};

pub(super) fn render(doc: &Document) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_document(&mut out, doc);
    out
}

fn write_document(out: &mut String, doc: &Document) -> fmt::Result {
    writeln!(out, "# {}", escape(&doc.title))?;
    for block in &doc.blocks {
        out.push('\n');
        match block {
            Block::Heading(text) => writeln!(out, "## {}", escape(text))?,
            Block::Columns(columns) => write_table(out, columns)?,
            Block::Enumerated(entries) => {
                for (i, entry) in entries.iter().enumerate() {
                    writeln!(
                        out,
                        "{}. **{}**: {}",
                        i + 1,
                        escape(&entry.label),
                        escape(&entry.body)
                    )?;
                }
            }
            Block::Described(entries) => {
                for entry in entries {
                    writeln!(out, "- **{}**: {}", escape(&entry.label), escape(&entry.body))?;
                }
            }
            Block::Figure(figure) => write_figure(out, figure)?,
        }
    }
    Ok(())
}

fn write_table(out: &mut String, columns: &[Column]) -> fmt::Result {
    let headings: Vec<String> = columns.iter().map(|c| escape(&c.heading)).collect();
    writeln!(out, "| {} |", headings.join(" | "))?;
    writeln!(out, "|{}", " --- |".repeat(columns.len()))?;

    let rows = columns.iter().map(|c| c.entries.len()).max().unwrap_or(0);
    for row in 0..rows {
        let cells: Vec<String> = columns
            .iter()
            .map(|c| c.entries.get(row).map(|e| escape(&e.line())).unwrap_or_default())
            .collect();
        writeln!(out, "| {} |", cells.join(" | "))?;
    }
    Ok(())
}

fn write_figure(out: &mut String, figure: &Figure) -> fmt::Result {
    let path = figure.path.to_string_lossy();
    let target = if path.contains(|c: char| c.is_whitespace() || c == '(' || c == ')') {
        format!("<{path}>")
    } else {
        path.into_owned()
    };
    writeln!(out, "![{}]({target})", escape(&figure.title))?;
    if figure.show_caption {
        writeln!(out, "*{}*", escape(&figure.title))?;
    }
    Ok(())
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '*' | '_' | '`' | '[' | ']' | '<' | '>' | '|') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
