use crate::page_range::PageSpan;

/// Observer for reversal progress, fed percentages in [0, 100].
///
/// Values are monotonically non-decreasing within one operation and reach
/// exactly 100 once the reversed segment is complete. One callback fires per
/// reversed page, so a UI driving the same thread gets a bounded number of
/// chances to repaint.
pub trait Progress {
    fn report(&mut self, percent: u8);
}

/// Discards all progress updates.
pub struct NoProgress;

impl Progress for NoProgress {
    fn report(&mut self, _percent: u8) {}
}

/// Build the output page order: pages before `span` keep their positions,
/// pages inside `span` are appended in reverse, pages after `span` keep
/// their positions.
///
/// Pages are opaque to the engine; callers hand in whatever identifies a
/// page and get the same values back, permuted. The span must have been
/// resolved against a document of `pages.len()` pages.
pub fn reorder<T: Copy>(pages: &[T], span: PageSpan, progress: &mut dyn Progress) -> Vec<T> {
    debug_assert!(span.end <= pages.len());

    let mut output = Vec::with_capacity(pages.len());
    output.extend_from_slice(&pages[..span.start]);

    let reversed = span.len();
    for (done, index) in (span.start..span.end).rev().enumerate() {
        output.push(pages[index]);
        progress.report(((done + 1) * 100 / reversed) as u8);
    }
    if span.is_empty() {
        progress.report(100);
    }

    output.extend_from_slice(&pages[span.end..]);

    // No pages dropped or duplicated, ever.
    assert_eq!(output.len(), pages.len());
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page_range::{self, PageSpan};

    struct Recorder(Vec<u8>);

    impl Progress for Recorder {
        fn report(&mut self, percent: u8) {
            self.0.push(percent);
        }
    }

    #[test]
    fn full_span_reverses_the_whole_document() {
        let output = reorder(&[1, 2, 3, 4, 5], PageSpan::full(5), &mut NoProgress);
        assert_eq!(output, [5, 4, 3, 2, 1]);
    }

    #[test]
    fn empty_document_yields_empty_output() {
        let output = reorder::<u32>(&[], PageSpan::full(0), &mut NoProgress);
        assert!(output.is_empty());
    }

    #[test]
    fn single_page_is_unchanged() {
        let output = reorder(&[7], PageSpan::full(1), &mut NoProgress);
        assert_eq!(output, [7]);
    }

    #[test]
    fn middle_span_reverses_only_its_segment() {
        // pages labeled A..E, user range "2-4" (1-indexed inclusive)
        let resolution = page_range::resolve(Some("2-4"), 5);
        let output = reorder(&['A', 'B', 'C', 'D', 'E'], resolution.span, &mut NoProgress);
        assert_eq!(output, ['A', 'D', 'C', 'B', 'E']);
    }

    #[test]
    fn prefix_and_suffix_keep_their_positions() {
        let pages: Vec<u32> = (1..=10).collect();
        let output = reorder(&pages, PageSpan { start: 3, end: 7 }, &mut NoProgress);
        assert_eq!(&output[..3], &pages[..3]);
        assert_eq!(&output[7..], &pages[7..]);
        let mut middle = pages[3..7].to_vec();
        middle.reverse();
        assert_eq!(&output[3..7], &middle[..]);
    }

    #[test]
    fn double_reversal_restores_original_order() {
        let pages: Vec<u32> = (1..=9).collect();
        let span = PageSpan { start: 2, end: 8 };
        let once = reorder(&pages, span, &mut NoProgress);
        let twice = reorder(&once, span, &mut NoProgress);
        assert_eq!(twice, pages);
    }

    #[test]
    fn output_length_always_matches_input() {
        for total in 0..8 {
            let pages: Vec<usize> = (0..total).collect();
            for start in 0..=total {
                for end in start..=total {
                    let output = reorder(&pages, PageSpan { start, end }, &mut NoProgress);
                    assert_eq!(output.len(), total);
                }
            }
        }
    }

    #[test]
    fn progress_covers_the_reversed_segment() {
        let mut recorder = Recorder(Vec::new());
        reorder(&[1, 2, 3, 4], PageSpan::full(4), &mut recorder);
        assert_eq!(recorder.0, [25, 50, 75, 100]);
    }

    #[test]
    fn empty_span_still_reports_completion() {
        let mut recorder = Recorder(Vec::new());
        reorder(&[1, 2, 3], PageSpan { start: 2, end: 2 }, &mut recorder);
        assert_eq!(recorder.0, [100]);
    }

    #[test]
    fn progress_is_monotone_and_bounded() {
        let pages: Vec<u32> = (0..7).collect();
        let mut recorder = Recorder(Vec::new());
        reorder(&pages, PageSpan { start: 1, end: 7 }, &mut recorder);
        assert!(recorder.0.windows(2).all(|pair| pair[0] <= pair[1]));
        assert!(recorder.0.iter().all(|&percent| percent <= 100));
        assert_eq!(recorder.0.last(), Some(&100));
    }
}
