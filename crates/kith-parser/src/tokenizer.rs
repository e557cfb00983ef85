//! Splits command arguments into `/`-delimited segments

use std::str::Split;

use crate::error::ParseError;
use crate::grammar::Shape;

/// Trimmed segments of one command, consumed once
#[derive(Debug)]
pub struct Segments<'a> {
    pieces: Split<'a, char>,
    remaining: usize,
}

impl<'a> Iterator for Segments<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let piece = self.pieces.next()?;
        self.remaining = self.remaining.saturating_sub(1);
        Some(piece.trim())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Segments<'_> {}

/// Tokenize `raw` for `shape`
///
/// Empty pieces are kept so the count check is exact. The piece before the
/// first `/` must be blank and is dropped.
pub fn tokenize(raw: &str, shape: Shape) -> Result<Segments<'_>, ParseError> {
    let malformed = || ParseError::MalformedCommand { usage: shape.usage() };

    if raw.split('/').count() != shape.segment_count() + 1 {
        return Err(malformed());
    }

    let mut pieces = raw.split('/');
    match pieces.next() {
        Some(leading) if leading.trim().is_empty() => Ok(Segments {
            pieces,
            remaining: shape.segment_count(),
        }),
        _ => Err(malformed()),
    }
}
