use std::io::Write;

/// The outputs for a benchmark listing.
///
/// The text sink receives the human-readable listing and the JSON sink receives the listing as a
/// JSON array. Set either, both or neither. Both are written from the same input, so setting both
/// gives two views of one listing.
///
/// ```rust,no_run
/// use story_bench_listing::ListingSinks;
///
/// let mut text = std::io::stdout();
/// let mut json = Vec::new();
/// let sinks = ListingSinks::new().text(&mut text).json(&mut json);
/// ```
#[derive(Default)]
pub struct ListingSinks<'a> {
    pub(crate) text: Option<&'a mut dyn Write>,
    pub(crate) json: Option<&'a mut dyn Write>,
}

impl<'a> ListingSinks<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sink for the text listing.
    pub fn text(mut self, sink: &'a mut dyn Write) -> Self {
        self.text = Some(sink);
        self
    }

    /// Set the sink for the JSON listing.
    pub fn json(mut self, sink: &'a mut dyn Write) -> Self {
        self.json = Some(sink);
        self
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.text.is_none() && self.json.is_none()
    }
}
