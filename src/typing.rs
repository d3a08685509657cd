use std::time::Duration;

use leptos_use::UseIntervalFnOptions;

pub const NAME: &str = "Alejandro Montoya";
pub const START_DELAY: Duration = Duration::from_millis(500);
pub const CHAR_INTERVAL_MS: u64 = 100;

/// Interval options for the typing ticks. The interval is started by hand after
/// `START_DELAY`, and the first character lands right then instead of one interval later.
pub fn interval_options() -> UseIntervalFnOptions {
    UseIntervalFnOptions::default()
        .immediate(false)
        .immediate_callback(true)
}

/// Reveals a fixed string one character per tick.
#[derive(Debug, Clone)]
pub struct Typewriter {
    target: &'static str,
    typed: usize,
}

impl Typewriter {
    pub fn new(target: &'static str) -> Self {
        Self { target, typed: 0 }
    }

    /// Next character to append, or `None` once the whole string is out.
    pub fn tick(&mut self) -> Option<char> {
        let c = self.target[self.typed..].chars().next()?;
        self.typed += c.len_utf8();
        Some(c)
    }

    pub fn typed(&self) -> &'static str {
        &self.target[..self.typed]
    }

    pub fn is_done(&self) -> bool {
        self.typed == self.target.len()
    }
}

impl Default for Typewriter {
    fn default() -> Self {
        Self::new(NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_types_full_name() {
        let mut writer = Typewriter::default();
        let mut text = String::new();
        let mut ticks = 0;
        loop {
            ticks += 1;
            match writer.tick() {
                Some(c) => text.push(c),
                None => break,
            }
            assert_eq!(text, writer.typed());
        }
        assert_eq!(text, "Alejandro Montoya");
        assert_eq!(ticks, 18);
        assert!(writer.is_done());
    }

    #[test]
    fn test_no_overflow_after_done() {
        let mut writer = Typewriter::new("ab");
        assert_eq!(writer.tick(), Some('a'));
        assert!(!writer.is_done());
        assert_eq!(writer.tick(), Some('b'));
        for _ in 0..5 {
            assert_eq!(writer.tick(), None);
        }
        assert_eq!(writer.typed(), "ab");
    }

    #[test]
    fn test_multibyte_characters() {
        let mut writer = Typewriter::new("Zoë 中文");
        let chars = std::iter::from_fn(|| writer.tick()).collect::<String>();
        assert_eq!(chars, "Zoë 中文");
        assert_eq!(writer.typed(), "Zoë 中文");
    }

    #[test]
    fn test_first_character_lands_at_start_delay() {
        let options = interval_options();
        assert!(!options.immediate);
        assert!(options.immediate_callback);

        // first tick on resume, then one per interval: the last character is out at
        // 500 + 16 * 100 ms and the exhausted tick follows one interval later
        let mut writer = Typewriter::default();
        let mut elapsed = START_DELAY;
        let mut first_char_at = None;
        while writer.tick().is_some() {
            first_char_at.get_or_insert(elapsed);
            elapsed += Duration::from_millis(CHAR_INTERVAL_MS);
        }
        assert_eq!(first_char_at, Some(Duration::from_millis(500)));
        assert_eq!(elapsed, Duration::from_millis(2200));
    }

    #[test]
    fn test_empty_target() {
        let mut writer = Typewriter::new("");
        assert!(writer.is_done());
        assert_eq!(writer.tick(), None);
    }
}
