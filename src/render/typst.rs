//! Typst source output, compiled to PDF by the external `typst` tool.

use std::fmt::{self, Write};

use crate::core::{Block, Column, Document, Entry, Figure};

const PREAMBLE: &str = "#set page(paper: \"us-letter\", margin: 0.75in)\n#set text(size: 10pt)\n";

pub(super) fn render(doc: &Document) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_document(&mut out, doc);
    out
}

fn write_document(out: &mut String, doc: &Document) -> fmt::Result {
    out.push_str(PREAMBLE);
    write!(out, "\n= {}\n", escape_markup(&doc.title))?;
    for block in &doc.blocks {
        out.push('\n');
        match block {
            Block::Heading(text) => writeln!(out, "== {}", escape_markup(text))?,
            Block::Columns(columns) => write_grid(out, columns)?,
            Block::Enumerated(entries) => {
                for entry in entries {
                    writeln!(out, "+ {}", strong_entry(entry))?;
                }
            }
            Block::Described(entries) => {
                for entry in entries {
                    writeln!(
                        out,
                        "/ {}: {}",
                        escape_markup(&entry.label),
                        escape_markup(&entry.body)
                    )?;
                }
            }
            Block::Figure(figure) => write_figure(out, figure)?,
        }
    }
    Ok(())
}

fn write_grid(out: &mut String, columns: &[Column]) -> fmt::Result {
    let tracks = vec!["1fr"; columns.len()].join(", ");
    writeln!(out, "#grid(")?;
    // A one-element array needs the trailing comma.
    if columns.len() == 1 {
        writeln!(out, "  columns: ({tracks},),")?;
    } else {
        writeln!(out, "  columns: ({tracks}),")?;
    }
    writeln!(out, "  gutter: 1em,")?;
    for column in columns {
        writeln!(out, "  [")?;
        writeln!(out, "    *{}*", escape_markup(&column.heading))?;
        for entry in &column.entries {
            writeln!(out, "    - {}", escape_markup(&entry.line()))?;
        }
        writeln!(out, "  ],")?;
    }
    writeln!(out, ")")
}

fn write_figure(out: &mut String, figure: &Figure) -> fmt::Result {
    writeln!(out, "#figure(")?;
    writeln!(
        out,
        "  image(\"{}\", width: 100%),",
        escape_string(&figure.path.to_string_lossy())
    )?;
    if figure.show_caption {
        writeln!(out, "  caption: [{}],", escape_markup(&figure.title))?;
    }
    writeln!(out, ")")
}

fn strong_entry(entry: &Entry) -> String {
    format!(
        "*{}*: {}",
        escape_markup(&entry.label),
        escape_markup(&entry.body)
    )
}

fn escape_markup(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        let next = chars.peek().copied();
        let special = match c {
            '\\' | '$' | '#' | '*' | '_' | '`' | '@' | '<' | '>' | '[' | ']' | '~' => true,
            // `//` and `/*` open comments, `--` turns into a dash.
            '/' => matches!(next, Some('/') | Some('*')),
            '-' => next == Some('-'),
            _ => false,
        };
        if special {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn escape_string(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ReportConfig;
    use crate::render::test_support::example_document;

    const EXAMPLE_TYPST: &str = r#"#set page(paper: "us-letter", margin: 0.75in)
#set text(size: 10pt)

= Retirement Analysis

== Assumptions

#grid(
  columns: (1fr, 1fr),
  gutter: 1em,
  [
    *Inputs*
    - Investment Period: 30 years
    - Retirement Period: 25 years
    - Expected Return: 7%
    - Inflation Rate: 3%
  ],
  [
    *Income*
    - Pre-Tax Income: \$90000/yr (2024 dollars)
    - Post-Tax Income: \$70000/yr (2024 dollars)
    - Retirement Income: \$60000/yr (2024 dollars)
  ],
)

== Financial Goals

+ *Supplemented (50%)*: The account supplies 50% of retirement income; the rest comes from other sources such as Social Security or a pension.
+ *Sustainable Retirement*: The account funds the full retirement income and is drawn down to zero by the end of the retirement period.
+ *Generational Wealth*: Withdrawals never reduce the inflation-adjusted principal, so the account can fund retirement indefinitely and be passed on.
+ *Nobility*: Beyond funding retirement indefinitely, the principal keeps growing in real terms at +2%/yr

== Account Types

/ Brokerage: Contributions are made after tax, growth is taxed every year, and withdrawals may be taxed at capital gains rates. No contribution limits.
/ Traditional IRA: Contributions are made before tax, growth is tax-deferred, and withdrawals are taxed as ordinary income. Annual contribution limits are low.
/ Roth IRA: Contributions are made after tax; growth and qualified withdrawals are tax-free. Works best when you expect a higher tax bracket in retirement.
/ Traditional 401k: Employer-sponsored. Contributions are made before tax with higher limits than an IRA, and withdrawals are taxed as ordinary income. Employer match lands here.
/ Roth 401k: Employer-sponsored. Contributions are made after tax and qualified withdrawals are tax-free. Employer match contributions still go into a Traditional 401k.

#figure(
  image("figs/required_principal.png", width: 100%),
)

#figure(
  image("figs/yearly_contribution.png", width: 100%),
)
"#;

    #[test]
    fn render_matches_example_report() {
        let doc = example_document(&ReportConfig::default());
        assert_eq!(crate::render::render(&doc, crate::render::OutputFormat::Typst), EXAMPLE_TYPST);
    }

    #[test]
    fn render_adds_captions_when_enabled() {
        let config = ReportConfig {
            show_captions: true,
            ..ReportConfig::default()
        };
        let out = render(&example_document(&config));
        let principal = out
            .find("caption: [Required Principal by Financial Goal]")
            .expect("principal caption");
        let contribution = out
            .find("caption: [Yearly Contribution by Financial Goal]")
            .expect("contribution caption");
        assert!(principal < contribution);
        assert!(!render(&example_document(&ReportConfig::default())).contains("caption:"));
    }

    #[test]
    fn render_places_nobility_rate_at_end_of_its_line() {
        let out = render(&example_document(&ReportConfig::default()));
        let line = out
            .lines()
            .find(|line| line.starts_with("+ *Nobility*"))
            .expect("nobility line");
        assert!(line.ends_with("+2%/yr"));
    }

    #[test]
    fn escape_markup_neutralises_markup_characters() {
        assert_eq!(escape_markup("$5 #1 *a* _b_"), "\\$5 \\#1 \\*a\\* \\_b\\_");
        assert_eq!(escape_markup("a // b /* c"), "a \\// b \\/\\* c");
        assert_eq!(escape_markup("a -- b - c"), "a \\-- b - c");
        assert_eq!(escape_markup("+2%/yr"), "+2%/yr");
    }

    #[test]
    fn escape_string_handles_quotes_and_backslashes() {
        assert_eq!(escape_string(r#"figs\a "b".png"#), r#"figs\\a \"b\".png"#);
    }
}
