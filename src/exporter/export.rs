use std::{fs::File, path::Path};

use anyhow::Context;
use docx_rs::{Docx, LineSpacing, Paragraph, Run, RunFonts};

use super::segment::{segments, Segment};

const TIMES_NEW_ROMAN: &str = "Times New Roman";
const HIGHLIGHT_COLOR: &str = "yellow";

/// Builds a Word document, one paragraph per line of text.
pub struct Exporter {
    paragraphs: Vec<Paragraph>,
}

impl Exporter {
    pub fn new() -> Exporter {
        Exporter { paragraphs: vec![] }
    }

    /// Add every line of `text` as its own paragraph; blank lines stay as empty paragraphs.
    pub fn add_text(&mut self, text: &str) {
        text.lines().for_each(|line| self.add_line(line));
    }

    pub fn add_line(&mut self, line: &str) {
        let paragraph = segments(line).into_iter().fold(
            Paragraph::new().line_spacing(LineSpacing::new().before(0).after(0)),
            |paragraph, segment| {
                let run = match segment {
                    Segment::Plain(text) => text_run(text),
                    Segment::Highlight(text) => text_run(text).highlight(HIGHLIGHT_COLOR),
                };
                paragraph.add_run(run)
            },
        );
        self.paragraphs.push(paragraph);
    }

    pub fn save(&self, dest: &Path) -> anyhow::Result<()> {
        let docx = self
            .paragraphs
            .iter()
            .cloned()
            .fold(Docx::new(), |docx, paragraph| docx.add_paragraph(paragraph));
        let file = File::create(dest).with_context(|| format!("creating {}", dest.display()))?;
        docx.build()
            .pack(file)
            .with_context(|| format!("writing {}", dest.display()))?;
        Ok(())
    }
}

impl Default for Exporter {
    fn default() -> Self {
        Self::new()
    }
}

fn text_run(text: &str) -> Run {
    Run::new().add_text(text).fonts(
        RunFonts::new()
            .ascii(TIMES_NEW_ROMAN)
            .hi_ansi(TIMES_NEW_ROMAN)
            .cs(TIMES_NEW_ROMAN),
    )
}
