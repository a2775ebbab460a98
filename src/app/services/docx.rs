//! Word document containers, mapped one paragraph per line.
//!
//! Compiled in with the `docx` feature. Without it every call fails with
//! [`AppError::DependencyUnavailable`] so the other formats keep working.

use std::path::Path;

use crate::app::infrastructure::error::{AppError, Result};

/// Lines to write as paragraphs: a trailing newline keeps an empty last
/// paragraph and empty text still produces one paragraph.
pub fn paragraphs_for(text: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = text.lines().collect();
    if text.ends_with('\n') {
        lines.push("");
    }
    if lines.is_empty() {
        lines.push("");
    }
    lines
}

#[cfg(feature = "docx")]
pub fn read(path: &Path) -> Result<String> {
    use docx_rs::{DocumentChild, read_docx};

    let bytes = std::fs::read(path)?;
    let docx = read_docx(&bytes).map_err(|e| AppError::Docx(e.to_string()))?;

    let paragraphs: Vec<String> = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(p) => Some(container::paragraph_text(p)),
            _ => None,
        })
        .collect();

    Ok(paragraphs.join("\n"))
}

#[cfg(feature = "docx")]
pub fn write(path: &Path, text: &str) -> Result<()> {
    use docx_rs::{Docx, Paragraph, Run};

    let mut docx = Docx::new();
    for line in paragraphs_for(text) {
        let paragraph = if line.is_empty() {
            Paragraph::new()
        } else {
            Paragraph::new().add_run(Run::new().add_text(line))
        };
        docx = docx.add_paragraph(paragraph);
    }

    let file = std::fs::File::create(path)?;
    docx.build()
        .pack(file)
        .map_err(|e| AppError::Docx(e.to_string()))?;
    Ok(())
}

#[cfg(feature = "docx")]
mod container {
    use docx_rs::{Paragraph, ParagraphChild, Run, RunChild};

    pub(super) fn paragraph_text(paragraph: &Paragraph) -> String {
        let mut out = String::new();
        for child in &paragraph.children {
            append_child_text(&mut out, child);
        }
        out
    }

    fn append_child_text(out: &mut String, child: &ParagraphChild) {
        match child {
            ParagraphChild::Run(run) => append_run_text(out, run),
            ParagraphChild::Hyperlink(link) => {
                for child in &link.children {
                    append_child_text(out, child);
                }
            }
            _ => {}
        }
    }

    fn append_run_text(out: &mut String, run: &Run) {
        for child in &run.children {
            match child {
                RunChild::Text(t) => out.push_str(&t.text),
                RunChild::Tab(_) => out.push('\t'),
                RunChild::Break(_) => out.push('\n'),
                _ => {}
            }
        }
    }
}

#[cfg(not(feature = "docx"))]
pub fn read(_path: &Path) -> Result<String> {
    Err(AppError::DependencyUnavailable("DOCX"))
}

#[cfg(not(feature = "docx"))]
pub fn write(_path: &Path, _text: &str) -> Result<()> {
    Err(AppError::DependencyUnavailable("DOCX"))
}
