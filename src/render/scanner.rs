//! Two-state scanner for `{{ name }}` placeholders.
//!
//! The scanner is either outside a token, looking for `{{`, or inside one, looking for
//! `}}`. Seeing another `{{` while inside abandons the pending token: its opening braces
//! become literal text and the search restarts at the inner delimiter. A `{{` that is never
//! closed stays literal. Tokens never nest.

use std::ops::Range;

const OPEN: &[u8] = b"{{";
const CLOSE: &[u8] = b"}}";

/// One `{{ name }}` occurrence inside a piece of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderToken<'a> {
    /// Interior of the delimiters with surrounding whitespace trimmed.
    pub name: &'a str,
    /// Byte range of the whole token, delimiters included.
    pub span: Range<usize>,
    /// The token exactly as written.
    pub raw: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    Literal(&'a str),
    Placeholder(PlaceholderToken<'a>),
}

#[derive(Debug, Clone, Copy)]
enum State {
    Outside,
    Inside { open: usize },
}

/// Split `input` into literal runs and placeholder tokens, left to right.
///
/// Concatenating the literal text and each token's `raw` text reproduces `input` exactly.
pub fn scan(input: &str) -> Vec<Segment<'_>> {
    let bytes = input.as_bytes();
    let mut segments = Vec::new();
    let mut state = State::Outside;
    let mut literal_start = 0;
    let mut i = 0;

    while i + 1 < bytes.len() {
        let pair = &bytes[i..i + 2];
        match state {
            State::Inside { open } if pair == CLOSE => {
                let end = i + 2;
                if literal_start < open {
                    segments.push(Segment::Literal(&input[literal_start..open]));
                }
                segments.push(Segment::Placeholder(PlaceholderToken {
                    name: input[open + 2..i].trim(),
                    span: open..end,
                    raw: &input[open..end],
                }));
                literal_start = end;
                state = State::Outside;
                i = end;
            }
            _ if pair == OPEN => {
                state = State::Inside { open: i };
                i += 2;
            }
            _ => i += 1,
        }
    }

    if literal_start < input.len() {
        segments.push(Segment::Literal(&input[literal_start..]));
    }

    segments
}

/// Just the placeholder tokens of `input`, in order.
pub fn placeholders(input: &str) -> Vec<PlaceholderToken<'_>> {
    scan(input)
        .into_iter()
        .filter_map(|segment| match segment {
            Segment::Placeholder(token) => Some(token),
            Segment::Literal(_) => None,
        })
        .collect()
}
