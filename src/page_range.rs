use std::fmt;

/// Resolved 0-indexed half-open span within a document of known length.
///
/// Invariant: `start <= end <= total` for the document it was resolved
/// against, so the span can index the page list without further checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSpan {
    pub start: usize,
    pub end: usize,
}

impl PageSpan {
    /// The span covering every page of a `total`-page document.
    pub fn full(total: usize) -> Self {
        PageSpan {
            start: 0,
            end: total,
        }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Outcome of resolving user-supplied range text against a page count.
///
/// Malformed text is expected input, not an error: it degrades to the full
/// span and carries a warning for the caller to surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub span: PageSpan,
    pub warning: Option<RangeWarning>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeWarning {
    pub input: String,
}

impl fmt::Display for RangeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid page range {:?}; processing all pages",
            self.input
        )
    }
}

/// Resolve an optional "START-END" specification (1-indexed, inclusive,
/// either side may be empty) against a document of `total` pages.
///
/// Out-of-bounds values are clamped and inverted bounds are swapped rather
/// than rejected, so resolution cannot fail once the text parses.
pub fn resolve(spec: Option<&str>, total: usize) -> Resolution {
    let Some(spec) = spec else {
        return Resolution {
            span: PageSpan::full(total),
            warning: None,
        };
    };

    match parse_bounds(spec, total) {
        Some((start_raw, end_raw)) => Resolution {
            span: normalize(start_raw, end_raw, total),
            warning: None,
        },
        None => Resolution {
            span: PageSpan::full(total),
            warning: Some(RangeWarning {
                input: spec.to_string(),
            }),
        },
    }
}

/// Raw 1-indexed inclusive bounds; empty sides take their defaults.
fn parse_bounds(spec: &str, total: usize) -> Option<(i64, i64)> {
    let (start_text, end_text) = spec.trim().split_once('-')?;
    let start = parse_bound(start_text, 1)?;
    let end = parse_bound(end_text, total as i64)?;
    Some((start, end))
}

fn parse_bound(text: &str, default: i64) -> Option<i64> {
    let text = text.trim();
    if text.is_empty() {
        Some(default)
    } else {
        text.parse().ok()
    }
}

/// Clamp both bounds into the document, swap if inverted, convert the
/// 1-indexed inclusive pair to 0-indexed half-open form.
fn normalize(start_raw: i64, end_raw: i64, total: usize) -> PageSpan {
    if total == 0 {
        return PageSpan::full(0);
    }

    let mut start = start_raw.clamp(1, total as i64);
    let mut end = end_raw.clamp(1, total as i64);
    if start > end {
        std::mem::swap(&mut start, &mut end);
    }

    PageSpan {
        start: (start - 1) as usize,
        end: end as usize,
    }
}
