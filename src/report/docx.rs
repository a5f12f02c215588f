use anyhow::{Context, Result};
use docx_rs::{BreakType, Docx, Paragraph, Run, Style, StyleType, Table, TableCell, TableRow};
use std::fs::File;
use std::path::Path;

use super::{Block, Report};

/// Heading style ids and their point sizes (half-points in docx)
const HEADING_STYLES: &[(&str, &str, usize)] = &[
    ("Heading1", "Heading 1", 32),
    ("Heading2", "Heading 2", 26),
];

/// Serialize a report as .docx, replacing any existing file at `path`
pub fn write_docx(report: &Report, path: &Path) -> Result<()> {
    let docx = to_docx(report);

    let file = File::create(path)
        .with_context(|| format!("Failed to create report file: {:?}", path))?;

    docx.build()
        .pack(file)
        .with_context(|| format!("Failed to write report: {:?}", path))?;

    Ok(())
}

fn to_docx(report: &Report) -> Docx {
    let mut docx = Docx::new();

    for (id, name, size) in HEADING_STYLES {
        docx = docx.add_style(
            Style::new(*id, StyleType::Paragraph)
                .name(*name)
                .size(*size)
                .bold(),
        );
    }

    for block in &report.blocks {
        docx = match block {
            Block::Heading { level, text } => docx.add_paragraph(
                Paragraph::new()
                    .add_run(Run::new().add_text(text))
                    .style(&heading_style(*level)),
            ),
            Block::Paragraph(text) => docx.add_paragraph(text_paragraph(text)),
            Block::Table { header, rows } => docx.add_table(table(header, rows)),
            Block::PageBreak => {
                docx.add_paragraph(Paragraph::new().add_run(Run::new().add_break(BreakType::Page)))
            }
        };
    }

    docx
}

fn heading_style(level: usize) -> String {
    format!("Heading{}", level.clamp(1, HEADING_STYLES.len()))
}

fn text_paragraph(text: &str) -> Paragraph {
    Paragraph::new().add_run(Run::new().add_text(text))
}

fn table(header: &[String], rows: &[Vec<String>]) -> Table {
    let header_row = TableRow::new(
        header
            .iter()
            .map(|h| {
                TableCell::new().add_paragraph(Paragraph::new().add_run(Run::new().add_text(h).bold()))
            })
            .collect(),
    );

    let body = rows.iter().map(|row| {
        TableRow::new(
            row.iter()
                .map(|cell| TableCell::new().add_paragraph(text_paragraph(cell)))
                .collect(),
        )
    });

    Table::new(std::iter::once(header_row).chain(body).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tempfile::TempDir;

    #[test]
    fn test_heading_style() {
        assert_eq!(heading_style(1), "Heading1");
        assert_eq!(heading_style(2), "Heading2");
        assert_eq!(heading_style(5), "Heading2");
    }

    #[test]
    fn test_write_overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.docx");
        std::fs::write(&path, b"stale").unwrap();

        let report = crate::report::build_report("Tester", &Utc::now(), &[], &[]);
        write_docx(&report, &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        // .docx is a zip container
        assert_eq!(&bytes[..2], b"PK");
    }
}
