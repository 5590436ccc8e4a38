//! Subcommand implementations and the input handling they share

pub mod layout;
pub mod segment;

use std::fs;
use std::io::{self, Read};

use anyhow::{Context, Result};
use flowtext::{fontdb::FontLibrary, FontSet};

use crate::cli::InputArgs;

/// Text from the argument, the text file, or stdin, in that order
pub fn read_text(input: &InputArgs) -> Result<String> {
    if let Some(text) = &input.text {
        return Ok(text.clone());
    }

    if let Some(path) = &input.text_file {
        return fs::read_to_string(path)
            .with_context(|| format!("reading text file {}", path.display()));
    }

    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("reading text from stdin")?;
    Ok(buffer)
}

/// Fonts loaded in the order given on the command line
pub fn load_fonts(input: &InputArgs) -> Result<FontSet> {
    let library = FontLibrary::from_paths(input.fonts.as_slice(), input.font_size)
        .context("loading fonts")?;
    log::info!(
        "Loaded {} fonts at {}px",
        library.font_count(),
        library.size()
    );
    Ok(library.into_font_set())
}
