//! Typewriter reveal
//!
//! Reveals a fixed string one character at a time. The [`Typewriter`]
//! cursor only moves forward, so every sampled prefix extends the previous
//! one. Driven by [`crate::scheduler::every`] once a [`VisibilityTrigger`]
//! has fired.

use crate::scheduler::Flow;

/// Forward-only reveal cursor over a fixed string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    full: String,
    /// Byte offset of the end of the revealed prefix; always a char boundary
    end: usize,
}

impl Typewriter {
    pub fn new(full: impl Into<String>) -> Self {
        Self {
            full: full.into(),
            end: 0,
        }
    }

    pub fn full_text(&self) -> &str {
        &self.full
    }

    /// Currently revealed prefix
    pub fn revealed(&self) -> &str {
        &self.full[..self.end]
    }

    /// Reveal one more character.
    ///
    /// Returns the new prefix, or `None` when the text was already complete.
    pub fn advance(&mut self) -> Option<&str> {
        let next = self.full[self.end..].chars().next()?;
        self.end += next.len_utf8();
        Some(self.revealed())
    }

    /// Timer callback: reveal a character and stop once complete
    pub fn tick(&mut self) -> Flow {
        self.advance();
        if self.is_complete() {
            Flow::Break
        } else {
            Flow::Continue
        }
    }

    pub fn is_complete(&self) -> bool {
        self.end == self.full.len()
    }

    /// Revealed and total length, in characters
    pub fn progress(&self) -> (usize, usize) {
        (self.revealed().chars().count(), self.full.chars().count())
    }

    /// Hide everything again
    pub fn reset(&mut self) {
        self.end = 0;
    }

    /// Every prefix the cursor will pass through, shortest first.
    ///
    /// Independent of the cursor, so it can be replayed at will.
    pub fn prefixes(&self) -> Prefixes<'_> {
        Prefixes {
            full: &self.full,
            end: 0,
        }
    }
}

/// Iterator over the non-empty prefixes of a string, one char longer each step
#[derive(Debug, Clone)]
pub struct Prefixes<'a> {
    full: &'a str,
    end: usize,
}

impl<'a> Iterator for Prefixes<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let c = self.full[self.end..].chars().next()?;
        self.end += c.len_utf8();
        Some(&self.full[..self.end])
    }
}

/// One-shot "became visible" latch
///
/// Mirrors an intersection observer configured to trigger once per mount.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VisibilityTrigger {
    fired: bool,
}

impl VisibilityTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` on the first call only
    pub fn fire(&mut self) -> bool {
        !std::mem::replace(&mut self.fired, true)
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_one_char_per_advance() {
        let mut tw = Typewriter::new("Get in Touch");
        assert_eq!(tw.revealed(), "");
        assert_eq!(tw.advance(), Some("G"));
        assert_eq!(tw.advance(), Some("Ge"));
        assert_eq!(tw.progress(), (2, 12));
    }

    #[test]
    fn advance_stops_at_full_text() {
        let mut tw = Typewriter::new("ab");
        tw.advance();
        tw.advance();
        assert!(tw.is_complete());
        assert_eq!(tw.advance(), None);
        assert_eq!(tw.revealed(), "ab");
    }

    #[test]
    fn multibyte_chars_reveal_whole() {
        let mut tw = Typewriter::new("I’m");
        assert_eq!(tw.advance(), Some("I"));
        assert_eq!(tw.advance(), Some("I’"));
        assert_eq!(tw.advance(), Some("I’m"));
        assert!(tw.is_complete());
    }

    #[test]
    fn tick_breaks_on_last_char() {
        let mut tw = Typewriter::new("abc");
        assert_eq!(tw.tick(), Flow::Continue);
        assert_eq!(tw.tick(), Flow::Continue);
        assert_eq!(tw.tick(), Flow::Break);
    }

    #[test]
    fn empty_text_is_complete_immediately() {
        let mut tw = Typewriter::new("");
        assert!(tw.is_complete());
        assert_eq!(tw.tick(), Flow::Break);
        assert_eq!(tw.prefixes().count(), 0);
    }

    #[test]
    fn reset_restarts_reveal() {
        let mut tw = Typewriter::new("xy");
        tw.advance();
        tw.reset();
        assert_eq!(tw.revealed(), "");
        assert_eq!(tw.advance(), Some("x"));
    }

    #[test]
    fn prefixes_are_replayable() {
        let tw = Typewriter::new("abc");
        let first: Vec<_> = tw.prefixes().collect();
        let second: Vec<_> = tw.prefixes().collect();
        assert_eq!(first, vec!["a", "ab", "abc"]);
        assert_eq!(first, second);
    }

    #[test]
    fn visibility_trigger_fires_once() {
        let mut trigger = VisibilityTrigger::new();
        assert!(!trigger.has_fired());
        assert!(trigger.fire());
        assert!(!trigger.fire());
        assert!(trigger.has_fired());
    }
}
