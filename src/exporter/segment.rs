use std::sync::LazyLock;

use regex::Regex;

static CRVAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<crvar>.*?</crvar>").expect("crvar pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Plain(&'a str),
    /// A `<crvar>` mention, markers included.
    Highlight(&'a str),
}

/// Split a line into alternating plain and highlighted pieces. Empty pieces are dropped.
pub fn segments(line: &str) -> Vec<Segment<'_>> {
    let mut result = vec![];
    let mut cursor = 0;
    for found in CRVAR.find_iter(line) {
        if found.start() > cursor {
            result.push(Segment::Plain(&line[cursor..found.start()]));
        }
        result.push(Segment::Highlight(found.as_str()));
        cursor = found.end();
    }
    if cursor < line.len() {
        result.push(Segment::Plain(&line[cursor..]));
    }
    result
}
