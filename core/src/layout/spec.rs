//! Split grammar parser.
//!
//! A split spec is a compact string of the form `AXIS:SIZE_0:...:SIZE_{n-1}`
//! where `AXIS` is `v` (stacked top-to-bottom) or `h` (side-by-side) and
//! exactly one size entry is the pivot sentinel `~`. The pivot position keeps
//! the pane being split; every other entry becomes a new pane of the given
//! size in cells.
//!
//! Pure string-to-struct parsing, no I/O.

use crate::error::{Error, Result};

pub const PIVOT_SENTINEL: &str = "~";

/// Split direction, mapped onto tmux's `-v` / `-h` flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Vertical,
    Horizontal,
}

impl Axis {
    pub fn tmux_flag(&self) -> &'static str {
        match self {
            Axis::Vertical => "-v",
            Axis::Horizontal => "-h",
        }
    }
}

/// One entry of a split spec's size list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeEntry {
    /// The `~` sentinel: this position reuses the existing pane.
    Pivot,
    /// A new pane of this many cells.
    Cells(u32),
}

/// A parsed split spec: axis, ordered sizes, and the pivot's index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitSpec {
    pub axis: Axis,
    pub entries: Vec<SizeEntry>,
    pub pivot: usize,
}

impl SplitSpec {
    /// Parse `"v:10:~:20"` style strings.
    ///
    /// Fails with a configuration error on an unknown axis, a non-numeric
    /// size, an empty size list, or anything but exactly one `~`.
    pub fn parse(raw: &str) -> Result<SplitSpec> {
        let mut parts = raw.split(':');
        let axis = match parts.next() {
            Some("v") => Axis::Vertical,
            Some("h") => Axis::Horizontal,
            other => {
                return Err(Error::Config(format!(
                    "split spec '{}': unknown axis '{}'",
                    raw,
                    other.unwrap_or("")
                )))
            }
        };

        let mut entries = Vec::new();
        let mut pivot: Option<usize> = None;
        for (i, part) in parts.enumerate() {
            if part == PIVOT_SENTINEL {
                if pivot.is_some() {
                    return Err(Error::Config(format!(
                        "split spec '{}': more than one pivot '~'",
                        raw
                    )));
                }
                pivot = Some(i);
                entries.push(SizeEntry::Pivot);
            } else {
                let cells = part.parse::<u32>().map_err(|_| {
                    Error::Config(format!("split spec '{}': invalid size '{}'", raw, part))
                })?;
                entries.push(SizeEntry::Cells(cells));
            }
        }

        if entries.is_empty() {
            return Err(Error::Config(format!("split spec '{}': no sizes", raw)));
        }
        let pivot = pivot.ok_or_else(|| {
            Error::Config(format!("split spec '{}': missing pivot '~'", raw))
        })?;

        Ok(SplitSpec {
            axis,
            entries,
            pivot,
        })
    }

    /// Number of panes this spec describes (pivot included).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
