//! Layout command implementation

use std::fs::File;
use std::io::{self, Write};

use anyhow::{Context, Result};
use flowtext::{
    export::{JsonExporter, SvgExporter, TextExporter},
    prelude::*,
};

use super::{load_fonts, read_text};
use crate::cli::{LayoutArgs, OutputFormat};

/// Outcome the caller turns into an exit status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fit {
    Fits,
    Overflows,
}

pub fn run(args: &LayoutArgs) -> Result<Fit> {
    let text = read_text(&args.input)?;
    let fonts = load_fonts(&args.input)?;
    let params = build_params(args)?;

    let layout = LayoutEngine::new(params)
        .layout(&text, &fonts)
        .context("laying out text")?;

    let exporter = create_exporter(args);
    let bytes = exporter.export(&layout, &fonts)?;
    write_output(args, &bytes)?;

    let overflowing = layout.overflowing_lines();
    let fit = if layout.overflows_height() || !overflowing.is_empty() {
        Fit::Overflows
    } else {
        Fit::Fits
    };

    if !args.quiet {
        eprintln!(
            "Laid out {} lines ({} segments), {:.1} of {:.1} high",
            layout.lines.len(),
            layout.segment_count(),
            layout.total_height,
            layout.box_height
        );
        if layout.overflows_height() {
            eprintln!(
                "  Overflow: content exceeds the box height by {:.1}",
                layout.total_height - layout.box_height
            );
        }
        for index in &overflowing {
            eprintln!(
                "  Overflow: line {} is {:.1} wide, limit {:.1}",
                index + 1,
                layout.lines[*index].width,
                layout.max_width
            );
        }
    }

    Ok(fit)
}

pub fn build_params(args: &LayoutArgs) -> Result<LayoutParams> {
    let margins: Margins = args.margin.parse()?;
    let align: Align = args.align.parse()?;

    Ok(LayoutParams::default()
        .with_box(args.width, args.height)
        .with_margins(margins)
        .with_align(align))
}

fn create_exporter(args: &LayoutArgs) -> Box<dyn Exporter> {
    match args.format {
        OutputFormat::Json => Box::new(JsonExporter::with_pretty_print()),
        OutputFormat::Svg => Box::new(
            SvgExporter::new(args.width, args.input.font_size).with_guides(args.guides),
        ),
        OutputFormat::Txt => Box::new(TextExporter::new()),
    }
}

fn write_output(args: &LayoutArgs, bytes: &[u8]) -> Result<()> {
    match &args.output_file {
        Some(path) => {
            let mut file = File::create(path)
                .with_context(|| format!("creating output file {}", path.display()))?;
            file.write_all(bytes)?;
            if !args.quiet {
                eprintln!(
                    "✓ Wrote {} ({} bytes) to {}",
                    args.format.as_str().to_uppercase(),
                    bytes.len(),
                    path.display()
                );
            }
        },
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(bytes)?;
            stdout.flush()?;
        },
    }
    Ok(())
}
