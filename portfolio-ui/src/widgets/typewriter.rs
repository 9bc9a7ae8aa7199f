//! Typewriter text reveal, one character per tick.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypewriterState {
    chars: Vec<char>,
    shown: usize,
}

impl TypewriterState {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            shown: 0,
        }
    }

    /// Reveal the next character. Returns `false` once the text is complete.
    pub fn tick(&mut self) -> bool {
        if self.is_done() {
            return false;
        }
        self.shown += 1;
        true
    }

    pub fn is_done(&self) -> bool {
        self.shown >= self.chars.len()
    }

    /// Text revealed so far
    pub fn visible(&self) -> String {
        self.chars[..self.shown].iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveals_one_char_per_tick() {
        let mut writer = TypewriterState::new("Hi!");
        assert_eq!(writer.visible(), "");

        assert!(writer.tick());
        assert_eq!(writer.visible(), "H");
        assert!(writer.tick());
        assert!(writer.tick());
        assert_eq!(writer.visible(), "Hi!");
        assert!(writer.is_done());

        assert!(!writer.tick());
        assert_eq!(writer.visible(), "Hi!");
    }

    #[test]
    fn test_multibyte_text() {
        let mut writer = TypewriterState::new("Café – ok");
        for _ in 0..4 {
            writer.tick();
        }
        assert_eq!(writer.visible(), "Café");
    }

    #[test]
    fn test_empty_text_is_done() {
        let mut writer = TypewriterState::new("");
        assert!(writer.is_done());
        assert!(!writer.tick());
    }
}
