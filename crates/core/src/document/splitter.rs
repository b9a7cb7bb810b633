//! Front matter splitting for `+++`-delimited markdown.

/// Line that opens and closes a TOML front matter block.
pub const FRONT_MATTER_DELIMITER: &str = "+++";

/// Raw front matter and body of a document.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Split {
    /// Text between the delimiter lines, delimiters excluded.
    pub front_matter: String,
    /// Every line outside the front matter block, in original order.
    pub body: String,
    /// An opening delimiter was seen but never closed.
    pub unclosed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Before,
    Inside,
    After,
}

/// Split raw file text into front matter and body.
///
/// Only the first pair of delimiter lines is recognised; a `+++` line after
/// the block is closed belongs to the body. Lines preceding the opening
/// delimiter are body lines. Without a closing delimiter everything after the
/// opening one is front matter. Line breaks are kept byte for byte.
pub fn split(raw: &str) -> Split {
    let mut out = Split::default();
    let mut state = State::Before;

    for line in raw.split_inclusive('\n') {
        let is_delimiter = line.trim() == FRONT_MATTER_DELIMITER;

        match state {
            State::Before if is_delimiter => state = State::Inside,
            State::Inside if is_delimiter => state = State::After,
            State::Inside => out.front_matter.push_str(line),
            State::Before | State::After => out.body.push_str(line),
        }
    }

    if state == State::Inside {
        tracing::warn!("front matter opened with `+++` but never closed");
        out.unclosed = true;
    }

    out
}
