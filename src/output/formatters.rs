//! Formatting utilities for terminal output

/// Join characters with a single space, one slot per character
///
/// Used for both the masked word and the guessed-letter list.
#[must_use]
pub fn spaced(letters: &[char]) -> String {
    let mut result = String::with_capacity(letters.len() * 2);

    for (i, letter) in letters.iter().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        result.push(*letter);
    }

    result
}

/// Create a lives bar string
#[must_use]
pub fn lives_bar(remaining: u8, max: u8) -> String {
    let filled = usize::from(remaining.min(max));
    let empty = usize::from(max) - filled;

    format!("{}{}", "♥".repeat(filled), "·".repeat(empty))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaced_masked_word() {
        assert_eq!(spaced(&['b', '_', 'l', 'l']), "b _ l l");
    }

    #[test]
    fn spaced_single_and_empty() {
        assert_eq!(spaced(&['a']), "a");
        assert_eq!(spaced(&[]), "");
    }

    #[test]
    fn lives_bar_full() {
        assert_eq!(lives_bar(3, 3), "♥♥♥");
    }

    #[test]
    fn lives_bar_empty() {
        assert_eq!(lives_bar(0, 4), "····");
    }

    #[test]
    fn lives_bar_partial() {
        assert_eq!(lives_bar(2, 5), "♥♥···");
    }
}
