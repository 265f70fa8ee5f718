use crate::page_range;
use crate::pdf::PdfDocument;
use crate::reorder::{self, Progress};
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, warn};
use std::path::Path;

/// Terminal progress bar speaking the engine's observer contract.
struct Bar(ProgressBar);

impl Bar {
    fn new() -> Self {
        let bar = ProgressBar::new(100);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("[{bar:40.cyan/blue}] {pos}%")
                .unwrap()
                .progress_chars("#>-"),
        );
        Bar(bar)
    }

    fn finish(self) {
        self.0.finish_and_clear();
    }
}

impl Progress for Bar {
    fn report(&mut self, percent: u8) {
        self.0.set_position(u64::from(percent));
    }
}

pub fn run<P: AsRef<Path>, Q: AsRef<Path>>(input: P, pages: Option<&str>, output: Q) -> Result<()> {
    let mut doc = PdfDocument::open(&input)?;
    let total = doc.page_count();

    let resolution = page_range::resolve(pages, total);
    if let Some(warning) = &resolution.warning {
        warn!("{warning}");
        eprintln!("warning: {warning}");
    }
    debug!(
        "reversing pages [{}, {}) of {}",
        resolution.span.start, resolution.span.end, total
    );

    let mut bar = Bar::new();
    let order = reorder::reorder(&doc.page_ids(), resolution.span, &mut bar);
    doc.apply_order(&order)
        .with_context(|| format!("failed to reorder {}", input.as_ref().display()))?;
    doc.save(&output)?;
    bar.finish();

    println!(
        "Reversed {} of {} page(s) into {}",
        resolution.span.len(),
        total,
        output.as_ref().display()
    );

    Ok(())
}
