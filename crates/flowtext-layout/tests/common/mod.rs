//! Mock fonts shared by the layout integration tests

#![allow(dead_code)]

use std::sync::Arc;

use flowtext_core::{Font, FontSet, MeasureError, Result, REFERENCE_EMOJI};

/// Each covered char is `advance` wide; measurement can be made to fail
pub struct MockFont {
    pub name: &'static str,
    pub advance: f32,
    pub spacing: f32,
    pub covers: fn(char) -> bool,
    pub broken: bool,
}

impl Font for MockFont {
    fn name(&self) -> &str {
        self.name
    }

    fn has_glyph(&self, ch: char) -> bool {
        (self.covers)(ch)
    }

    fn measure(&self, text: &str) -> Result<f32> {
        if self.broken {
            return Err(MeasureError::new(self.name, text, "metrics table missing").into());
        }
        Ok(text.chars().count() as f32 * self.advance)
    }

    fn line_spacing(&self) -> f32 {
        self.spacing
    }

    fn descent(&self) -> f32 {
        self.spacing / 5.0
    }
}

pub fn text_font() -> MockFont {
    MockFont {
        name: "Text",
        advance: 10.0,
        spacing: 20.0,
        covers: |ch| !is_emoji(ch),
        broken: false,
    }
}

pub fn emoji_font() -> MockFont {
    MockFont {
        name: "Emoji",
        advance: 24.0,
        spacing: 30.0,
        covers: is_emoji,
        broken: false,
    }
}

fn is_emoji(ch: char) -> bool {
    ch == REFERENCE_EMOJI || ('\u{1F300}'..='\u{1FAFF}').contains(&ch)
}

/// Text font first, emoji font second
pub fn fonts() -> FontSet {
    let mut set = FontSet::new();
    set.push(Arc::new(text_font()));
    set.push(Arc::new(emoji_font()));
    set
}
