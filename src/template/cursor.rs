use memchr::{memchr2, memchr3};

/// Forward scan position over one template, with a single optional mark for
/// slicing substrings out of the input without copying.
///
/// A cursor lives for exactly one `parse_template` call and is threaded by
/// exclusive reference through the scan functions; there is no shared state
/// between parses.
pub(super) struct Cursor<'a> {
    template: &'a str,
    bytes: &'a [u8],
    index: usize,
    mark: Option<usize>,
}

impl<'a> Cursor<'a> {
    pub(super) fn new(template: &'a str) -> Self {
        Self {
            template,
            bytes: template.as_bytes(),
            index: 0,
            mark: None,
        }
    }

    pub(super) fn index(&self) -> usize {
        self.index
    }

    pub(super) fn current(&self) -> Option<u8> {
        self.bytes.get(self.index).copied()
    }

    pub(super) fn at_end(&self) -> bool {
        self.index >= self.bytes.len()
    }

    /// Advances one byte. Returns `false` once the cursor has run off the end.
    pub(super) fn move_next(&mut self) -> bool {
        self.index += 1;
        self.index < self.bytes.len()
    }

    /// Steps back one byte, used after a lookahead recognized a parameter
    /// start or an escaped brace.
    pub(super) fn back(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    pub(super) fn mark(&mut self) {
        self.mark = Some(self.index);
    }

    /// Returns the slice from the mark up to (not including) the current
    /// position, consuming the mark.
    pub(super) fn capture(&mut self) -> Option<&'a str> {
        let start = self.mark.take()?;
        let end = self.index.min(self.bytes.len());
        // The delimiters this scanner stops on are all ASCII, so start and
        // end always sit on UTF-8 character boundaries.
        Some(&self.template[start..end])
    }

    /// Jumps to the next `/`, `{` or `}`, or to the end of the input.
    pub(super) fn seek_delimiter(&mut self) {
        if let Some(rest) = self.bytes.get(self.index..) {
            self.index = match memchr3(b'/', b'{', b'}', rest) {
                Some(offset) => self.index + offset,
                None => self.bytes.len(),
            };
        }
    }

    /// Jumps to the next `{` or `}`, or to the end of the input.
    pub(super) fn seek_brace(&mut self) {
        if let Some(rest) = self.bytes.get(self.index..) {
            self.index = match memchr2(b'{', b'}', rest) {
                Some(offset) => self.index + offset,
                None => self.bytes.len(),
            };
        }
    }
}
