use crate::units::Pt;

/// Splits text into lines that fit within `max_width`, measuring candidate lines with
/// `width_of`.
///
/// # Wrapping Behavior
///
/// Lines break at whitespace, and runs of whitespace collapse into a single space.
/// Explicit newlines always start a new line. When a single word is wider than
/// `max_width` on its own, it falls back to character-level breaking so that no line
/// ever overflows; only a lone character wider than `max_width` can still exceed it.
///
/// Empty input produces exactly one empty line, so that every block of text occupies
/// at least one line of height.
///
/// ```
/// use address_labels::layout::wrap_text;
/// use address_labels::Pt;
///
/// // every character is 1pt wide
/// let lines = wrap_text("Rue de la Loi 16", Pt(10.0), |s| Pt(s.chars().count() as f32));
/// assert_eq!(lines, vec!["Rue de la", "Loi 16"]);
/// ```
pub fn wrap_text<W>(text: &str, max_width: Pt, width_of: W) -> Vec<String>
where
    W: Fn(&str) -> Pt,
{
    let text = text.replace("\r\n", "\n").replace('\r', "\n");
    let mut lines: Vec<String> = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();

        for word in paragraph.split_whitespace() {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{current} {word}")
            };

            if width_of(&candidate) <= max_width {
                current = candidate;
                continue;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }

            if width_of(word) <= max_width {
                current = word.to_string();
            } else {
                // no break point inside the word, break it between characters
                for ch in word.chars() {
                    current.push(ch);
                    if width_of(&current) > max_width && current.chars().count() > 1 {
                        current.pop();
                        lines.push(std::mem::take(&mut current));
                        current.push(ch);
                    }
                }
            }
        }

        lines.push(current);
    }

    lines
}

#[cfg(test)]
mod test {
    use super::*;

    fn monospace(s: &str) -> Pt {
        Pt(s.chars().count() as f32)
    }

    #[test]
    fn empty_text_is_one_empty_line() {
        assert_eq!(wrap_text("", Pt(10.0), monospace), vec![String::new()]);
    }

    #[test]
    fn short_text_is_left_alone() {
        assert_eq!(wrap_text("Jane Doe", Pt(10.0), monospace), vec!["Jane Doe"]);
    }

    #[test]
    fn wraps_at_word_boundaries() {
        let lines = wrap_text("the quick brown fox jumps", Pt(10.0), monospace);
        assert_eq!(lines, vec!["the quick", "brown fox", "jumps"]);
    }

    #[test]
    fn collapses_whitespace() {
        let lines = wrap_text("  a \t  b  ", Pt(10.0), monospace);
        assert_eq!(lines, vec!["a b"]);
    }

    #[test]
    fn newlines_force_breaks() {
        let lines = wrap_text("c/o Someone\r\nFlat 3", Pt(20.0), monospace);
        assert_eq!(lines, vec!["c/o Someone", "Flat 3"]);
    }

    #[test]
    fn long_words_break_between_characters() {
        let lines = wrap_text("Llanfairpwllgwyngyll x", Pt(8.0), monospace);
        assert_eq!(lines, vec!["Llanfair", "pwllgwyn", "gyll x"]);
    }

    #[test]
    fn no_line_exceeds_the_maximum_width() {
        let text = "Boulevard du Souverain 280, bâtiment B, troisième étage, porte gauche";
        for width in [4.0, 7.0, 12.0, 25.0] {
            for line in wrap_text(text, Pt(width), monospace) {
                assert!(monospace(&line) <= Pt(width), "{line:?} wider than {width}");
            }
        }
    }

    #[test]
    fn a_character_wider_than_the_line_gets_its_own_line() {
        let lines = wrap_text("ab", Pt(0.5), monospace);
        assert_eq!(lines, vec!["a", "b"]);
    }
}
