use serde::Serialize;

use crate::error::UnbalancedBrackets;

/// ICU quoting character. Any character immediately following it loses its structural meaning,
/// so `'{` is a literal brace rather than the start of a placeholder.
pub const ARB_ESCAPE_CHARACTER: char = '\'';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum BracketMatchKind {
    /// Text outside of any top-level pair of braces.
    Outside,
    /// A top-level `{`.
    Open,
    /// Everything strictly between a top-level `{` and its matching `}`, including any nested
    /// braces.
    Content,
    /// A top-level `}`.
    Close,
}

/// One segment of a matched string. `start` and `end` are byte offsets within the string that was
/// given to [`match_brackets`], not within the whole document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BracketMatch {
    pub kind: BracketMatchKind,
    pub start: usize,
    pub end: usize,
}

impl BracketMatch {
    fn new(kind: BracketMatchKind, start: usize, end: usize) -> Self {
        Self { kind, start, end }
    }

    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end]
    }
}

/// Split `text` into outside text and top-level brace pairs. Returns an empty list if the text
/// contains no unescaped braces at all. Empty runs of outside text are never reported, but empty
/// content (`{}`) is.
pub fn match_brackets(text: &str, escape: char) -> Result<Vec<BracketMatch>, UnbalancedBrackets> {
    let mut matches = Vec::new();
    let mut depth = 0usize;
    let mut outside_start = 0;
    let mut open_start = 0;

    let mut chars = text.char_indices();
    while let Some((index, ch)) = chars.next() {
        if ch == escape {
            chars.next();
            continue;
        }
        match ch {
            '{' => {
                if depth == 0 {
                    if outside_start < index {
                        matches.push(BracketMatch::new(
                            BracketMatchKind::Outside,
                            outside_start,
                            index,
                        ));
                    }
                    open_start = index;
                }
                depth += 1;
            }
            '}' => {
                if depth == 0 {
                    return Err(UnbalancedBrackets {
                        start: index,
                        end: index + 1,
                    });
                }
                depth -= 1;
                if depth == 0 {
                    matches.push(BracketMatch::new(
                        BracketMatchKind::Open,
                        open_start,
                        open_start + 1,
                    ));
                    matches.push(BracketMatch::new(
                        BracketMatchKind::Content,
                        open_start + 1,
                        index,
                    ));
                    matches.push(BracketMatch::new(BracketMatchKind::Close, index, index + 1));
                    outside_start = index + 1;
                }
            }
            _ => {}
        }
    }

    if depth > 0 {
        return Err(UnbalancedBrackets {
            start: open_start,
            end: text.len(),
        });
    }
    if !matches.is_empty() && outside_start < text.len() {
        matches.push(BracketMatch::new(
            BracketMatchKind::Outside,
            outside_start,
            text.len(),
        ));
    }
    Ok(matches)
}

/// Returns the byte offsets of every `needle` in `text` that is not nested inside any braces and
/// not escaped.
pub fn find_top_level(text: &str, needle: char, escape: char) -> Vec<usize> {
    let mut found = vec![];
    let mut depth = 0usize;
    let mut chars = text.char_indices();
    while let Some((index, ch)) = chars.next() {
        if ch == escape {
            chars.next();
            continue;
        }
        match ch {
            '{' => depth += 1,
            '}' => depth = depth.saturating_sub(1),
            ch if ch == needle && depth == 0 => found.push(index),
            _ => {}
        }
    }
    found
}
