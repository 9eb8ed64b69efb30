use crate::font::FontMetrics;
use crate::page::SpanFont;
use crate::units::Pt;
use crate::Result;

/// Calculate the width of a given string of text given the font and font size
pub fn width_of_text<M: FontMetrics + ?Sized>(metrics: &M, text: &str, font: SpanFont) -> Result<Pt> {
    metrics.width_of_text(text, font.font, font.size)
}

/// Breaks text into lines no wider than `max_width` using greedy word wrap.
///
/// Words are whatever sits between single spaces; nothing else is treated as
/// whitespace, so embedded newlines are not hard breaks. A line is only ever
/// broken between words: a single word wider than `max_width` is emitted on
/// a line of its own, overflowing, rather than being split. Joining the
/// returned lines with single spaces gives back the input (ignoring leading,
/// trailing and doubled spaces).
///
/// Empty input produces no lines. The only failure is the metrics provider
/// failing to measure a candidate line.
pub fn wrap_text<M: FontMetrics + ?Sized>(
    metrics: &M,
    text: &str,
    max_width: Pt,
    font: SpanFont,
) -> Result<Vec<String>> {
    let mut lines: Vec<String> = Vec::new();
    let mut current_line = String::new();

    for word in text.split(' ') {
        let test_line = if current_line.is_empty() {
            word.to_string()
        } else {
            format!("{current_line} {word}")
        };

        let width = width_of_text(metrics, &test_line, font)?;
        if width > max_width && !current_line.is_empty() {
            lines.push(std::mem::replace(&mut current_line, word.to_string()));
        } else {
            current_line = test_line;
        }
    }

    if !current_line.is_empty() {
        lines.push(current_line);
    }

    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::{StandardFont, StandardMetrics};
    use crate::PDFError;

    /// every character is `advance` points wide, regardless of font or size
    struct Fixed(f32);

    impl FontMetrics for Fixed {
        fn width_of_text(&self, text: &str, _font: StandardFont, _size: Pt) -> Result<Pt> {
            Ok(Pt(text.chars().count() as f32 * self.0))
        }
    }

    fn body() -> SpanFont {
        SpanFont {
            font: StandardFont::Helvetica,
            size: Pt(12.0),
        }
    }

    #[test]
    fn empty_text_has_no_lines() {
        assert!(wrap_text(&Fixed(1.0), "", Pt(10.0), body()).unwrap().is_empty());
    }

    #[test]
    fn breaks_between_words() {
        let lines = wrap_text(&Fixed(1.0), "aaa bbb ccc dd", Pt(7.0), body()).unwrap();
        assert_eq!(lines, vec!["aaa bbb", "ccc dd"]);
    }

    #[test]
    fn exact_fit_stays_on_the_line() {
        let lines = wrap_text(&Fixed(1.0), "abc def", Pt(7.0), body()).unwrap();
        assert_eq!(lines, vec!["abc def"]);
    }

    #[test]
    fn long_words_overflow_on_their_own_line() {
        let lines = wrap_text(&Fixed(1.0), "a supercalifragilistic b", Pt(5.0), body()).unwrap();
        assert_eq!(lines, vec!["a", "supercalifragilistic", "b"]);

        let lines = wrap_text(&Fixed(1.0), "supercalifragilistic", Pt(5.0), body()).unwrap();
        assert_eq!(lines, vec!["supercalifragilistic"]);
    }

    #[test]
    fn newlines_are_not_breaks() {
        let lines = wrap_text(&Fixed(1.0), "one\ntwo three", Pt(100.0), body()).unwrap();
        assert_eq!(lines, vec!["one\ntwo three"]);
    }

    #[test]
    fn lines_fit_and_reconstruct_the_input() {
        let text = lipsum::lipsum(300);
        for max in [40.0, 120.0, 333.0, 495.28] {
            let lines = wrap_text(&StandardMetrics, &text, Pt(max), body()).unwrap();
            for line in lines.iter() {
                let width = StandardMetrics
                    .width_of_text(line, StandardFont::Helvetica, Pt(12.0))
                    .unwrap();
                assert!(width <= Pt(max) || !line.contains(' '), "{line:?} overflows");
            }
            assert_eq!(lines.join(" "), text);
        }
    }

    #[test]
    fn metrics_errors_propagate() {
        let err = wrap_text(&StandardMetrics, "hello 世界", Pt(100.0), body()).unwrap_err();
        assert!(matches!(err, PDFError::Unencodable { ch: '世', .. }));
    }
}
