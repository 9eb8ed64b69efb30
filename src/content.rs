//! Turns laid-out page contents into PDF content stream operators.

use crate::colour::Colour;
use crate::page::{PageContents, Paint, ShapeLayout, SpanFont, SpanLayout};
use crate::units::Pt;
use crate::PDFError;
use std::io::Write;

/// Bezier control point distance for approximating a quarter circle
const KAPPA: f32 = 0.552_284_8;

/// Renders page contents to a PDF content stream.
///
/// Text is written as hex strings of WinAnsi bytes, so no escaping of
/// parentheses or backslashes is ever needed. Fails only if a span contains a
/// character its font can't encode.
#[allow(clippy::write_with_newline)]
pub(crate) fn render_contents(contents: &[PageContents]) -> Result<Vec<u8>, PDFError> {
    let mut content: Vec<u8> = Vec::default();

    for page_content in contents.iter() {
        match page_content {
            PageContents::Text(spans) => render_text_spans(&mut content, spans)?,
            PageContents::Shape(shape) => render_shape(&mut content, shape)?,
        }
    }

    Ok(content)
}

#[allow(clippy::write_with_newline)]
fn render_text_spans(content: &mut Vec<u8>, spans: &[SpanLayout]) -> Result<(), PDFError> {
    let Some(first) = spans.first() else {
        return Ok(());
    };

    write!(content, "q\n")?;

    let mut current_font: SpanFont = first.font;
    let mut current_colour: Colour = first.colour;

    write!(
        content,
        "/F{} {} Tf\n",
        current_font.font.index(),
        current_font.size
    )?;
    write_fill_colour(content, current_colour)?;

    for span in spans.iter() {
        if span.font != current_font {
            current_font = span.font;
            write!(
                content,
                "/F{} {} Tf\n",
                current_font.font.index(),
                current_font.size
            )?;
        }
        if span.colour != current_colour {
            current_colour = span.colour;
            write_fill_colour(content, current_colour)?;
        }

        write!(content, "BT\n")?;
        write!(content, "{} {} Td\n", span.coords.0, span.coords.1)?;
        write!(content, "<")?;
        for byte in current_font.font.encode(&span.text)? {
            write!(content, "{byte:02x}")?;
        }
        write!(content, "> Tj\n")?;
        write!(content, "ET\n")?;
    }

    write!(content, "Q\n")?;
    Ok(())
}

#[allow(clippy::write_with_newline)]
fn render_shape(content: &mut Vec<u8>, shape: &ShapeLayout) -> Result<(), PDFError> {
    write!(content, "q\n")?;
    match shape.paint {
        Paint::Fill(colour) => write_fill_colour(content, colour)?,
        Paint::Stroke { colour, width } => {
            write_stroke_colour(content, colour)?;
            write!(content, "{width} w\n")?;
        }
    }

    let r = &shape.rect;
    // never let the corners overlap on small boxes
    let radius = shape
        .corner_radius
        .min(r.width() / 2.0)
        .min(r.height() / 2.0)
        .max(Pt(0.0));

    if radius.0 > 0.0 {
        let k = radius * KAPPA;
        write!(content, "{} {} m\n", r.x1 + radius, r.y1)?;
        write!(content, "{} {} l\n", r.x2 - radius, r.y1)?;
        write!(
            content,
            "{} {} {} {} {} {} c\n",
            r.x2 - radius + k,
            r.y1,
            r.x2,
            r.y1 + radius - k,
            r.x2,
            r.y1 + radius
        )?;
        write!(content, "{} {} l\n", r.x2, r.y2 - radius)?;
        write!(
            content,
            "{} {} {} {} {} {} c\n",
            r.x2,
            r.y2 - radius + k,
            r.x2 - radius + k,
            r.y2,
            r.x2 - radius,
            r.y2
        )?;
        write!(content, "{} {} l\n", r.x1 + radius, r.y2)?;
        write!(
            content,
            "{} {} {} {} {} {} c\n",
            r.x1 + radius - k,
            r.y2,
            r.x1,
            r.y2 - radius + k,
            r.x1,
            r.y2 - radius
        )?;
        write!(content, "{} {} l\n", r.x1, r.y1 + radius)?;
        write!(
            content,
            "{} {} {} {} {} {} c\n",
            r.x1,
            r.y1 + radius - k,
            r.x1 + radius - k,
            r.y1,
            r.x1 + radius,
            r.y1
        )?;
        write!(content, "h\n")?;
    } else {
        write!(
            content,
            "{} {} {} {} re\n",
            r.x1,
            r.y1,
            r.width(),
            r.height()
        )?;
    }

    match shape.paint {
        Paint::Fill(_) => write!(content, "f\n")?,
        Paint::Stroke { .. } => write!(content, "S\n")?,
    }
    write!(content, "Q\n")?;
    Ok(())
}

#[allow(clippy::write_with_newline)]
fn write_fill_colour(content: &mut Vec<u8>, colour: Colour) -> std::io::Result<()> {
    match colour {
        Colour::RGB { r, g, b } => write!(content, "{r} {g} {b} rg\n"),
        Colour::Grey { g } => write!(content, "{g} g\n"),
    }
}

#[allow(clippy::write_with_newline)]
fn write_stroke_colour(content: &mut Vec<u8>, colour: Colour) -> std::io::Result<()> {
    match colour {
        Colour::RGB { r, g, b } => write!(content, "{r} {g} {b} RG\n"),
        Colour::Grey { g } => write!(content, "{g} G\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colours;
    use crate::font::StandardFont;
    use crate::rect::Rect;

    fn span(text: &str, font: StandardFont) -> SpanLayout {
        SpanLayout {
            text: text.into(),
            font: SpanFont {
                font,
                size: Pt(12.0),
            },
            colour: colours::BLACK,
            coords: (Pt(50.0), Pt(700.0)),
        }
    }

    #[test]
    fn text_is_hex_encoded() {
        let contents = vec![PageContents::Text(vec![span("A(b)", StandardFont::Helvetica)])];
        let rendered = String::from_utf8(render_contents(&contents).unwrap()).unwrap();
        assert!(rendered.contains("/F0 12 Tf\n"));
        assert!(rendered.contains("0 g\n"));
        assert!(rendered.contains("50 700 Td\n<41286229> Tj\n"));
    }

    #[test]
    fn switches_fonts_between_spans() {
        let contents = vec![PageContents::Text(vec![
            span("a", StandardFont::Helvetica),
            span("b", StandardFont::HelveticaBold),
        ])];
        let rendered = String::from_utf8(render_contents(&contents).unwrap()).unwrap();
        assert!(rendered.contains("/F1 12 Tf\n"));
    }

    #[test]
    fn square_shapes_use_re() {
        let contents = vec![PageContents::Shape(ShapeLayout {
            rect: Rect::from_top_left(Pt(50.0), Pt(100.0), Pt(3.0), Pt(40.0)),
            corner_radius: Pt(0.0),
            paint: Paint::Fill(colours::WHITE),
        })];
        let rendered = String::from_utf8(render_contents(&contents).unwrap()).unwrap();
        assert_eq!(rendered, "q\n1 g\n50 60 3 40 re\nf\nQ\n");
    }

    #[test]
    fn rounded_shapes_use_curves() {
        let contents = vec![PageContents::Shape(ShapeLayout {
            rect: Rect::from_top_left(Pt(0.0), Pt(100.0), Pt(80.0), Pt(30.0)),
            corner_radius: Pt(6.0),
            paint: Paint::Stroke {
                colour: colours::BORDER,
                width: Pt(1.0),
            },
        })];
        let rendered = String::from_utf8(render_contents(&contents).unwrap()).unwrap();
        assert_eq!(rendered.matches(" c\n").count(), 4);
        assert!(rendered.contains("0.75 G\n1 w\n"));
        assert!(rendered.ends_with("h\nS\nQ\n"));
    }

    #[test]
    fn unencodable_text_fails() {
        let contents = vec![PageContents::Text(vec![span("→", StandardFont::Helvetica)])];
        assert!(matches!(
            render_contents(&contents),
            Err(PDFError::Unencodable { ch: '→', .. })
        ));
    }
}
