//! Player input parsing and prompting
//!
//! The parsing functions are pure so the game's input rules can be tested
//! without a terminal. `Prompter` wraps any reader/writer pair and keeps
//! asking until it gets a usable answer.

use crate::core::{Alphabet, Code, Symbol};
use std::io::{self, BufRead, Write};

/// Keep only the characters of `line` that are code letters in `alphabet`
///
/// Letters are uppercased first; anything else is dropped silently.
#[must_use]
pub fn sanitize_guess(line: &str, alphabet: Alphabet) -> Vec<Symbol> {
    line.chars()
        .filter_map(|c| alphabet.symbol_for(c))
        .collect()
}

/// Turn a line of player input into a guess
///
/// Returns `None` if the line holds fewer than `width` valid letters.
/// Extra letters beyond `width` are discarded.
///
/// # Examples
/// ```
/// use mastermind::core::Alphabet;
/// use mastermind::prompts::parse_guess;
///
/// let alphabet = Alphabet::new(6);
/// let guess = parse_guess("a b-c x d e", alphabet, 4).unwrap();
/// assert_eq!(guess.to_string(), "ABCD");
/// assert!(parse_guess("abz", alphabet, 4).is_none());
/// ```
#[must_use]
pub fn parse_guess(line: &str, alphabet: Alphabet, width: usize) -> Option<Code> {
    let mut symbols = sanitize_guess(line, alphabet);
    if symbols.len() < width {
        return None;
    }
    symbols.truncate(width);
    Some(Code::new(symbols))
}

/// Interpret a yes/no answer
///
/// Only the first non-blank character matters: 'y' or 'n' in either case.
/// Anything else, including an empty line, gives `default`.
#[must_use]
pub fn parse_yes_no(line: &str, default: bool) -> bool {
    match line.trim_start().chars().next().map(|c| c.to_ascii_lowercase()) {
        Some('y') => true,
        Some('n') => false,
        _ => default,
    }
}

/// Interpret a numeric answer, clamped to `lo..=hi`
///
/// Reads an optionally signed decimal prefix after leading blanks, so
/// "12 please" is 12. Input without digits gives `default`.
#[must_use]
pub fn parse_number(line: &str, default: usize, lo: usize, hi: usize) -> usize {
    let text = line.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return default;
    }

    if negative {
        return lo;
    }
    // Overlong digit runs saturate to the upper bound
    digits[..end].parse::<usize>().map_or(hi, |n| n.clamp(lo, hi))
}

/// Line-oriented question asker
///
/// Every method returns `Ok(None)` once the input is exhausted.
pub struct Prompter<R, W> {
    input: R,
    output: W,
    raw: Vec<u8>,
    line: String,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            raw: Vec::new(),
            line: String::new(),
        }
    }

    /// Mutable access to the output, for printing between questions
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Read one line; bytes that are not valid UTF-8 become U+FFFD
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<&str>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        self.raw.clear();
        if self.input.read_until(b'\n', &mut self.raw)? == 0 {
            return Ok(None);
        }
        self.line = String::from_utf8_lossy(&self.raw).into_owned();
        Ok(Some(&self.line))
    }

    /// Ask a yes/no question
    ///
    /// # Errors
    /// Returns an I/O error if reading or writing fails.
    pub fn ask_yes_no(&mut self, question: &str, default: bool) -> io::Result<Option<bool>> {
        let prompt = format!(
            "{question}: yes or no (defaults to {}) : ",
            if default { "yes" } else { "no" }
        );
        Ok(self
            .read_line(&prompt)?
            .map(|line| parse_yes_no(line, default)))
    }

    /// Ask for a number within `lo..=hi`
    ///
    /// # Errors
    /// Returns an I/O error if reading or writing fails.
    pub fn ask_number(
        &mut self,
        question: &str,
        default: usize,
        lo: usize,
        hi: usize,
    ) -> io::Result<Option<usize>> {
        let prompt =
            format!("{question} within range from {lo} to {hi} (defaults to {default})? : ");
        Ok(self
            .read_line(&prompt)?
            .map(|line| parse_number(line, default, lo, hi)))
    }

    /// Ask for a guess, repeating the prompt until enough valid letters arrive
    ///
    /// # Errors
    /// Returns an I/O error if reading or writing fails.
    pub fn ask_guess(
        &mut self,
        round: usize,
        alphabet: Alphabet,
        width: usize,
    ) -> io::Result<Option<Code>> {
        let prompt = format!(
            "Round number {round}: Please enter {width} letters from the set \"{alphabet}\": "
        );
        loop {
            let Some(line) = self.read_line(&prompt)? else {
                return Ok(None);
            };
            if let Some(guess) = parse_guess(line, alphabet, width) {
                return Ok(Some(guess));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompter(input: &str) -> Prompter<&[u8], Vec<u8>> {
        Prompter::new(input.as_bytes(), Vec::new())
    }

    #[test]
    fn sanitize_drops_foreign_characters() {
        let symbols = sanitize_guess("  a1b!Z c\n", Alphabet::new(4));
        let letters: String = symbols.iter().map(|s| s.letter()).collect();
        assert_eq!(letters, "ABC");
    }

    #[test]
    fn parse_guess_truncates_long_input() {
        let guess = parse_guess("ABCDEF", Alphabet::new(6), 4).unwrap();
        assert_eq!(guess.to_string(), "ABCD");
    }

    #[test]
    fn parse_guess_rejects_short_input() {
        assert!(parse_guess("", Alphabet::new(6), 4).is_none());
        assert!(parse_guess("ABC", Alphabet::new(6), 4).is_none());
        // G is outside a six-letter alphabet
        assert!(parse_guess("ABCG", Alphabet::new(6), 4).is_none());
    }

    #[test]
    fn yes_no_answers() {
        assert!(parse_yes_no("yes\n", false));
        assert!(parse_yes_no("  Y", false));
        assert!(!parse_yes_no("no", true));
        assert!(!parse_yes_no("\tNope", true));
        assert!(parse_yes_no("\n", true));
        assert!(!parse_yes_no("maybe", false));
        assert!(parse_yes_no("", true));
    }

    #[test]
    fn number_answers() {
        assert_eq!(parse_number("12\n", 7, 2, 20), 12);
        assert_eq!(parse_number("  9 letters", 7, 2, 20), 9);
        assert_eq!(parse_number("+5", 7, 2, 20), 5);
        assert_eq!(parse_number("\n", 7, 2, 20), 7);
        assert_eq!(parse_number("lots", 7, 2, 20), 7);
    }

    #[test]
    fn number_answers_clamped() {
        assert_eq!(parse_number("1", 7, 2, 20), 2);
        assert_eq!(parse_number("99", 7, 2, 20), 20);
        assert_eq!(parse_number("-3", 7, 2, 20), 2);
        assert_eq!(parse_number("99999999999999999999999", 7, 2, 20), 20);
        assert_eq!(parse_number("-", 7, 2, 20), 7);
    }

    #[test]
    fn ask_guess_reprompts_until_valid() {
        let mut p = prompter("xyz\nab\nabcd\n");
        let guess = p.ask_guess(3, Alphabet::new(6), 4).unwrap();
        assert_eq!(guess.map(|g| g.to_string()), Some("ABCD".to_string()));

        let shown = String::from_utf8(p.output().clone()).unwrap();
        assert_eq!(shown.matches("Round number 3").count(), 3);
        assert!(shown.contains("\"ABCDEF\""));
    }

    #[test]
    fn ask_guess_skips_invalid_utf8() {
        let mut p = Prompter::new(&b"AB\xe9CD\n"[..], Vec::new());
        let guess = p.ask_guess(1, Alphabet::new(6), 4).unwrap();
        assert_eq!(guess.map(|g| g.to_string()), Some("ABCD".to_string()));
    }

    #[test]
    fn invalid_utf8_answers_fall_back_to_default() {
        let mut p = Prompter::new(&b"\xff\xfe\n\xc0\n"[..], Vec::new());
        assert_eq!(p.ask_yes_no("Play again?", true).unwrap(), Some(true));
        assert_eq!(p.ask_number("How many guesses", 7, 7, 20).unwrap(), Some(7));
    }

    #[test]
    fn ask_guess_end_of_input() {
        let mut p = prompter("ab\n");
        assert_eq!(p.ask_guess(1, Alphabet::new(6), 4).unwrap(), None);
    }

    #[test]
    fn ask_yes_no_uses_default_on_blank() {
        let mut p = prompter("\nn\n");
        assert_eq!(p.ask_yes_no("Play again?", true).unwrap(), Some(true));
        assert_eq!(p.ask_yes_no("Play again?", true).unwrap(), Some(false));
        assert_eq!(p.ask_yes_no("Play again?", true).unwrap(), None);
    }

    #[test]
    fn ask_number_shows_range() {
        let mut p = prompter("5\n");
        assert_eq!(p.ask_number("How many guesses", 7, 7, 20).unwrap(), Some(7));
        let shown = String::from_utf8(p.output().clone()).unwrap();
        assert!(shown.contains("within range from 7 to 20 (defaults to 7)"));
    }
}
