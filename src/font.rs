use crate::{
    refs::{ObjectReferences, RefType},
    PDFError, Pt, Result,
};
use pdf_writer::{Name, Pdf};

/// One of the PDF "standard 14" fonts. These are built into every conforming
/// PDF reader, so nothing is embedded in the generated document; the only
/// thing this crate needs to know about them is their glyph widths, which are
/// compiled in from the Adobe font metrics.
///
/// Typically, fonts are referred to in content streams by their _index_ in
/// [StandardFont::ALL] (`/F0`, `/F1`, ...).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum StandardFont {
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
}

impl StandardFont {
    /// Every font a document can reference, in resource order
    pub const ALL: [StandardFont; 3] = [
        StandardFont::Helvetica,
        StandardFont::HelveticaBold,
        StandardFont::HelveticaOblique,
    ];

    /// The PostScript name of the font, as written to the `BaseFont` entry
    pub fn base_name(self) -> &'static str {
        match self {
            StandardFont::Helvetica => "Helvetica",
            StandardFont::HelveticaBold => "Helvetica-Bold",
            StandardFont::HelveticaOblique => "Helvetica-Oblique",
        }
    }

    /// The index of the font within the document's font resources
    pub fn index(self) -> usize {
        match self {
            StandardFont::Helvetica => 0,
            StandardFont::HelveticaBold => 1,
            StandardFont::HelveticaOblique => 2,
        }
    }

    fn is_bold(self) -> bool {
        matches!(self, StandardFont::HelveticaBold)
    }

    /// Encode text into WinAnsi bytes. ASCII control characters (tabs,
    /// newlines, ...) are treated as spaces; anything else WinAnsi can't
    /// represent is an error.
    pub fn encode(self, text: &str) -> Result<Vec<u8>> {
        text.chars()
            .map(|ch| {
                win_ansi_byte(ch).ok_or(PDFError::Unencodable {
                    ch,
                    font: self.base_name(),
                })
            })
            .collect()
    }

    /// Advance width of a WinAnsi byte in thousandths of an em
    fn glyph_width(self, byte: u8) -> u16 {
        let bold = self.is_bold();
        match byte {
            0x20..=0x7e => ascii_width(byte as char, bold),
            0x80..=0x9f => special_width(byte, bold),
            _ => latin1_width(byte, bold),
        }
    }

    pub(crate) fn write(self, refs: &mut ObjectReferences, writer: &mut Pdf) {
        let id = refs.gen(RefType::Font(self.index()));
        let mut font = writer.type1_font(id);
        font.base_font(Name(self.base_name().as_bytes()));
        font.encoding_predefined(Name(b"WinAnsiEncoding"));
    }
}

/// Measures rendered text. Layout never looks at glyphs directly; every line
/// break and every centred button goes through an implementation of this
/// trait, which is what lets tests swap in a deterministic fake.
pub trait FontMetrics {
    /// The advance width of `text` set in `font` at `size`
    fn width_of_text(&self, text: &str, font: StandardFont, size: Pt) -> Result<Pt>;
}

impl<M: FontMetrics + ?Sized> FontMetrics for &M {
    fn width_of_text(&self, text: &str, font: StandardFont, size: Pt) -> Result<Pt> {
        (**self).width_of_text(text, font, size)
    }
}

/// Metrics for the standard fonts, matching what PDF readers will draw
#[derive(Debug, Default, Copy, Clone)]
pub struct StandardMetrics;

impl FontMetrics for StandardMetrics {
    fn width_of_text(&self, text: &str, font: StandardFont, size: Pt) -> Result<Pt> {
        let units: u32 = font
            .encode(text)?
            .into_iter()
            .map(|byte| font.glyph_width(byte) as u32)
            .sum();
        Ok(size * (units as f32 / 1000.0))
    }
}

fn win_ansi_byte(ch: char) -> Option<u8> {
    let byte = match ch {
        c if c.is_ascii_control() => 0x20,
        ' '..='~' => ch as u8,
        '\u{a0}'..='\u{ff}' => ch as u32 as u8,
        '€' => 0x80,
        '‚' => 0x82,
        'ƒ' => 0x83,
        '„' => 0x84,
        '…' => 0x85,
        '†' => 0x86,
        '‡' => 0x87,
        'ˆ' => 0x88,
        '‰' => 0x89,
        'Š' => 0x8a,
        '‹' => 0x8b,
        'Œ' => 0x8c,
        'Ž' => 0x8e,
        '‘' => 0x91,
        '’' => 0x92,
        '“' => 0x93,
        '”' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        '˜' => 0x98,
        '™' => 0x99,
        'š' => 0x9a,
        '›' => 0x9b,
        'œ' => 0x9c,
        'ž' => 0x9e,
        'Ÿ' => 0x9f,
        _ => return None,
    };
    Some(byte)
}

// widths for 0x20 through 0x7e, from the Adobe core14 AFM files
#[rustfmt::skip]
const HELVETICA_ASCII: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD_ASCII: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

fn ascii_width(ch: char, bold: bool) -> u16 {
    let table = if bold { &HELVETICA_BOLD_ASCII } else { &HELVETICA_ASCII };
    table[(ch as u8 - 0x20) as usize]
}

fn special_width(byte: u8, bold: bool) -> u16 {
    match byte {
        0x80 | 0x83 | 0x86 | 0x87 | 0x96 => 556,
        0x82 | 0x91 | 0x92 => if bold { 278 } else { 222 },
        0x84 | 0x93 | 0x94 => if bold { 500 } else { 333 },
        0x85 | 0x89 | 0x8c | 0x97 | 0x99 => 1000,
        0x88 | 0x8b | 0x98 | 0x9b => 333,
        0x8a | 0x9f => 667,
        0x8e => 611,
        0x95 => 350,
        0x9a => if bold { 556 } else { 500 },
        0x9c => 944,
        0x9e => 500,
        // 0x81, 0x8d, 0x8f, 0x90 and 0x9d are unassigned in WinAnsi
        _ => 0,
    }
}

fn latin1_width(byte: u8, bold: bool) -> u16 {
    // accented letters take the width of their base letter
    let base = match byte {
        0xc0..=0xc5 => Some('A'),
        0xc7 => Some('C'),
        0xc8..=0xcb => Some('E'),
        0xcc..=0xcf => Some('I'),
        0xd1 => Some('N'),
        0xd2..=0xd6 | 0xd8 => Some('O'),
        0xd9..=0xdc => Some('U'),
        0xdd => Some('Y'),
        0xe0..=0xe5 => Some('a'),
        0xe7 => Some('c'),
        0xe8..=0xeb => Some('e'),
        0xec..=0xef => Some('i'),
        0xf1 => Some('n'),
        0xf2..=0xf6 => Some('o'),
        0xf9..=0xfc => Some('u'),
        0xfd | 0xff => Some('y'),
        _ => None,
    };
    if let Some(base) = base {
        return ascii_width(base, bold);
    }

    match byte {
        0xa0 | 0xb7 => 278,
        0xa1 | 0xa8 | 0xad | 0xaf | 0xb2 | 0xb3 | 0xb4 | 0xb8 | 0xb9 => 333,
        0xa2..=0xa5 | 0xa7 | 0xab | 0xbb => 556,
        0xa6 => if bold { 280 } else { 260 },
        0xa9 | 0xae => 737,
        0xaa => 370,
        0xac | 0xb1 | 0xd7 | 0xf7 => 584,
        0xb0 => 400,
        0xb5 => if bold { 611 } else { 556 },
        0xb6 => if bold { 556 } else { 537 },
        0xba => 365,
        0xbc..=0xbe => 834,
        0xbf | 0xdf | 0xf8 => 611,
        0xc6 => 1000,
        0xd0 => 722,
        0xde => 667,
        0xe6 => 889,
        0xf0 | 0xfe => if bold { 611 } else { 556 },
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measures_ascii_with_afm_widths() {
        // H=722 e=556 l=222 l=222 o=556 => 2278 units
        let width = StandardMetrics
            .width_of_text("Hello", StandardFont::Helvetica, Pt(10.0))
            .unwrap();
        assert!((width.0 - 22.78).abs() < 0.001);
    }

    #[test]
    fn bold_is_wider_than_regular() {
        let text = "The quick brown fox";
        let regular = StandardMetrics
            .width_of_text(text, StandardFont::Helvetica, Pt(12.0))
            .unwrap();
        let bold = StandardMetrics
            .width_of_text(text, StandardFont::HelveticaBold, Pt(12.0))
            .unwrap();
        assert!(bold > regular);
    }

    #[test]
    fn oblique_shares_regular_widths() {
        let regular = StandardMetrics
            .width_of_text("quote", StandardFont::Helvetica, Pt(14.0))
            .unwrap();
        let oblique = StandardMetrics
            .width_of_text("quote", StandardFont::HelveticaOblique, Pt(14.0))
            .unwrap();
        assert_eq!(regular, oblique);
    }

    #[test]
    fn encodes_typographic_punctuation() {
        let bytes = StandardFont::Helvetica.encode("“Café” – •").unwrap();
        assert_eq!(bytes, vec![0x93, b'C', b'a', b'f', 0xe9, 0x94, b' ', 0x96, b' ', 0x95]);
    }

    #[test]
    fn control_whitespace_becomes_space() {
        let bytes = StandardFont::Helvetica.encode("a\tb\nc").unwrap();
        assert_eq!(bytes, b"a b c".to_vec());
    }

    #[test]
    fn unencodable_characters_are_an_error() {
        let err = StandardMetrics
            .width_of_text("日本", StandardFont::HelveticaBold, Pt(12.0))
            .unwrap_err();
        assert!(matches!(
            err,
            PDFError::Unencodable {
                ch: '日',
                font: "Helvetica-Bold"
            }
        ));
    }

    #[test]
    fn accented_letters_use_base_widths() {
        let plain = StandardMetrics
            .width_of_text("resume", StandardFont::Helvetica, Pt(12.0))
            .unwrap();
        let accented = StandardMetrics
            .width_of_text("résumé", StandardFont::Helvetica, Pt(12.0))
            .unwrap();
        assert_eq!(plain, accented);
    }
}
