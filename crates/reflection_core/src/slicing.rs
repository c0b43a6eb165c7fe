//! Slice identifiers out of rendered signatures using calibrated anchors.
//!
//! A renderer turns a type into text that embeds the type's own spelling somewhere in the middle
//! (`my_crate::Probe<demo::Person>`). Rendering a known fixture through the same renderer and locating the fixture's
//! spelling inside the result yields the boilerplate before it (the begin anchor) and after it (the end anchor).
//! Those two anchors then slice the spelling of any other type out of its rendering.

/// Begin/end anchors discovered by rendering a calibration fixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchors<'a> {
    begin: &'a str,
    end: &'a str,
}

impl<'a> Anchors<'a> {
    /// Build anchors from known begin/end text.
    pub const fn new(begin: &'a str, end: &'a str) -> Self {
        Self { begin, end }
    }

    /// Discover anchors by locating `needle` inside `rendered`.
    ///
    /// ## Parameters
    /// - `rendered`: The renderer's output for the calibration fixture.
    /// - `needle`: The fixture's own spelling, as it appears inside `rendered`.
    ///
    /// ## Returns
    /// - `Option<Anchors>`: the text before and after the needle, or `None` if the needle is empty, missing, or occurs
    ///   more than once (the split would be ambiguous).
    pub fn discover(rendered: &'a str, needle: &str) -> Option<Self> {
        if needle.is_empty() {
            return None;
        }
        let start = rendered.find(needle)?;
        if rendered.rfind(needle) != Some(start) {
            return None;
        }
        Some(Self {
            begin: &rendered[..start],
            end: &rendered[start + needle.len()..],
        })
    }

    /// Text that precedes the embedded spelling.
    pub fn begin(&self) -> &'a str {
        self.begin
    }

    /// Text that follows the embedded spelling.
    pub fn end(&self) -> &'a str {
        self.end
    }

    /// Slice the embedded spelling out of another rendering produced by the same renderer.
    ///
    /// ## Returns
    /// - `Option<&str>`: the text between the anchors, or `None` when `rendered` does not carry both anchors.
    pub fn slice<'s>(&self, rendered: &'s str) -> Option<&'s str> {
        rendered.strip_prefix(self.begin)?.strip_suffix(self.end)
    }
}
