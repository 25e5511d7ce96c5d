//! Domain types for a parsed slide deck.

/// A single slide: a title and its bullet points in source order.
///
/// A point may span several source lines; those are kept joined by `\n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    title: String,
    body: Vec<String>,
}

impl Slide {
    /// Create a slide from an already stripped title and its points.
    pub fn new(title: impl Into<String>, body: Vec<String>) -> Self {
        Self {
            title: title.into(),
            body,
        }
    }

    /// Title text without its marker.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Bullet points in source order.
    pub fn body(&self) -> &[String] {
        &self.body
    }
}

/// An ordered, immutable sequence of slides.
///
/// Positions handed out to callers are 1-based: position `1` is the first
/// slide, and `len() + 1` is the end sentinel used by navigation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    slides: Vec<Slide>,
}

impl Deck {
    /// Number of real slides.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Whether the outline contained no title lines at all.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Slide at a 1-based position. Sentinel positions yield `None`.
    pub fn get(&self, position: usize) -> Option<&Slide> {
        position.checked_sub(1).and_then(|idx| self.slides.get(idx))
    }

    /// Position of the end sentinel.
    pub fn end_position(&self) -> usize {
        self.slides.len() + 1
    }

    /// Iterate over slides in presentation order.
    pub fn iter(&self) -> std::slice::Iter<'_, Slide> {
        self.slides.iter()
    }

    /// Get all titles, in order.
    pub fn titles(&self) -> Vec<&str> {
        self.slides.iter().map(Slide::title).collect()
    }
}

impl From<Vec<Slide>> for Deck {
    fn from(slides: Vec<Slide>) -> Self {
        Self { slides }
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Slide;
    type IntoIter = std::slice::Iter<'a, Slide>;

    fn into_iter(self) -> Self::IntoIter {
        self.slides.iter()
    }
}
