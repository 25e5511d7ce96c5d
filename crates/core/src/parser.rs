//! Outline parser: turns `+ title` / `- point` text into a [`Deck`].
//!
//! The format is read in a single forward pass. Each line is classified on
//! its own, after trailing whitespace is removed:
//!
//! - blank lines are skipped without closing the pending point,
//! - a title-marker line closes the open slide and starts a new one,
//! - a point-marker line closes the pending point and starts a new one,
//! - anything else continues the pending point on a new line.
//!
//! Parsing never fails. Text that has nowhere to go (points before the first
//! title, continuations with no point to extend) is dropped.

use crate::config::Markers;
use crate::error::{Error, Result};
use crate::types::{Deck, Slide};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Parser for plain-text slide outlines.
#[derive(Debug, Clone, Default)]
pub struct OutlineParser {
    markers: Markers,
}

impl OutlineParser {
    /// Create a parser using the default `+` / `-` markers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser for custom markers.
    pub fn with_markers(markers: Markers) -> Self {
        Self { markers }
    }

    /// Parse a sequence of lines (without their line terminators).
    pub fn parse<I, S>(&self, lines: I) -> Deck
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = DeckBuilder::new(self.markers);
        for line in lines {
            builder.feed(line.as_ref());
        }
        builder.finish()
    }

    /// Parse a whole outline held in memory.
    pub fn parse_str(&self, text: &str) -> Deck {
        self.parse(text.lines())
    }

    /// Parse an outline streamed from a reader.
    ///
    /// Only reading can fail; invalid UTF-8 is reported as an I/O error.
    pub fn parse_reader<R: BufRead>(&self, reader: R) -> Result<Deck> {
        let mut builder = DeckBuilder::new(self.markers);
        for line in reader.lines() {
            builder.feed(&line?);
        }
        Ok(builder.finish())
    }
}

/// Open and parse an outline file.
pub fn load_deck(path: &Path, parser: &OutlineParser) -> Result<Deck> {
    let file = File::open(path).map_err(|source| Error::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;

    let deck = parser.parse_reader(BufReader::new(file))?;
    log::debug!("Loaded {} slides from {}", deck.len(), path.display());
    Ok(deck)
}

/// A slide that has seen its title line but not yet its end.
struct OpenSlide {
    title: String,
    body: Vec<String>,
    point: Option<String>,
}

impl OpenSlide {
    fn new(title: String) -> Self {
        Self {
            title,
            body: Vec::new(),
            point: None,
        }
    }

    fn flush_point(&mut self) {
        if let Some(point) = self.point.take() {
            self.body.push(point);
        }
    }

    fn close(mut self) -> Slide {
        self.flush_point();
        Slide::new(self.title, self.body)
    }
}

/// Incremental parse state. Holds at most one open slide and one pending point.
struct DeckBuilder {
    markers: Markers,
    slides: Vec<Slide>,
    open: Option<OpenSlide>,
}

impl DeckBuilder {
    fn new(markers: Markers) -> Self {
        Self {
            markers,
            slides: Vec::new(),
            open: None,
        }
    }

    fn feed(&mut self, raw: &str) {
        let line = raw.trim_end();
        if line.is_empty() {
            return;
        }

        if line.starts_with(self.markers.title) {
            let title_marker = self.markers.title;
            let title = line.trim_start_matches(|c: char| c == title_marker || c.is_whitespace());
            self.close_slide();
            self.open = Some(OpenSlide::new(title.to_string()));
        } else if line.starts_with(self.markers.point) {
            let point = line.trim_start_matches(self.markers.point).trim_start();
            match self.open.as_mut() {
                Some(slide) => {
                    slide.flush_point();
                    slide.point = Some(point.to_string());
                }
                None => log::trace!("Dropping point before first title: {:?}", point),
            }
        } else {
            match self.open.as_mut().and_then(|slide| slide.point.as_mut()) {
                Some(point) => {
                    point.push('\n');
                    point.push_str(line);
                }
                None => log::trace!("Dropping continuation with no open point: {:?}", line),
            }
        }
    }

    fn close_slide(&mut self) {
        if let Some(slide) = self.open.take() {
            self.slides.push(slide.close());
        }
    }

    fn finish(mut self) -> Deck {
        self.close_slide();
        log::debug!("Parsed {} slides", self.slides.len());
        Deck::from(self.slides)
    }
}
