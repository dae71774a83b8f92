use std::time::Duration;

use endzeit_common::TextSpeed;

/// Reveals a text one character per tick, yielding the growing prefix.
/// Pacing is up to the caller; see [`tick`].
#[derive(Debug, Clone)]
pub struct Typewriter<'a> {
    text: &'a str,
    revealed: usize,
}

impl<'a> Typewriter<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, revealed: 0 }
    }

    /// Shows the rest of the text at once.
    pub fn finish(&mut self) -> &'a str {
        self.revealed = self.text.len();
        self.text
    }
}

impl<'a> Iterator for Typewriter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.text[self.revealed..].chars().next()?;
        self.revealed += next.len_utf8();
        Some(&self.text[..self.revealed])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.text[self.revealed..].chars().count();
        (remaining, Some(remaining))
    }
}

pub fn tick(speed: TextSpeed) -> Duration {
    Duration::from_millis(speed.interval_ms())
}
