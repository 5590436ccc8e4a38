//! Segment command implementation
//!
//! Prints one row per run: the font it resolved to and the run's text,
//! escaped so newlines and joiners stay visible.

use anyhow::Result;
use flowtext::prelude::*;

use super::{load_fonts, read_text};
use crate::cli::SegmentArgs;

pub fn run(args: &SegmentArgs) -> Result<()> {
    let text = read_text(&args.input)?;
    let fonts = load_fonts(&args.input)?;
    let runs = Segmenter::new().segment(&text, &fonts)?;

    for (index, run) in runs.iter().enumerate() {
        println!(
            "{:>3}  {:<24} {}{:?}",
            index,
            fonts.name_of(run.font),
            if run.cluster { "[emoji] " } else { "" },
            run.text
        );
    }

    Ok(())
}
