use crate::colour::{colours, Colour};
use crate::config::{LayoutConfig, Theme};
use crate::font::{FontMetrics, StandardFont};
use crate::layout::{width_of_text, wrap_text, PageCursor};
use crate::model::{Block, BlockContent, ListType};
use crate::page::{Paint, SpanFont};
use crate::units::Pt;
use crate::Result;

/// Where a label's baseline sits below the vertical centre of a box, as a
/// fraction of the font size
const CENTRE_DROP: f32 = 0.35;

/// Draws blocks onto a [PageCursor], one case per block type.
///
/// Every case reserves the room it needs with [PageCursor::ensure_space]
/// before drawing, draws relative to the cursor, then moves it past what was
/// drawn. Headings, titles and list markers take the theme's primary colour,
/// quote bars the secondary one.
pub struct BlockRenderer<'a, M: FontMetrics + ?Sized> {
    metrics: &'a M,
    config: &'a LayoutConfig,
    theme: Theme,
}

impl<'a, M: FontMetrics + ?Sized> BlockRenderer<'a, M> {
    pub fn new(metrics: &'a M, config: &'a LayoutConfig, theme: Theme) -> BlockRenderer<'a, M> {
        BlockRenderer {
            metrics,
            config,
            theme,
        }
    }

    /// Draw one block and move the cursor past it. Blocks of a type this
    /// renderer doesn't know are skipped
    pub fn render(&self, block: &Block, cursor: &mut PageCursor) -> Result<()> {
        match &block.content {
            BlockContent::Heading { text, level } => self.heading(text, *level, cursor),
            BlockContent::Paragraph { text } => self.paragraph(text, cursor),
            BlockContent::Quote { text } => self.quote(text, cursor),
            BlockContent::List { items, list_type } => self.list(items, *list_type, cursor),
            BlockContent::Cta { button_text, url } => self.cta(button_text, url.as_deref(), cursor),
            BlockContent::Image { url, alt } => self.image(url, alt, cursor),
            BlockContent::Table { headers, rows } => self.table(headers, rows, cursor),
            BlockContent::Unsupported(kind) => {
                log::debug!("skipping block {} of unsupported type {kind:?}", block.id);
                Ok(())
            }
        }
    }

    /// Draw bold primary-coloured text wrapped to the content width, one
    /// reservation per line. Used for the project and section titles
    pub fn title(&self, text: &str, size: Pt, cursor: &mut PageCursor) -> Result<()> {
        let font = SpanFont {
            font: StandardFont::HelveticaBold,
            size,
        };
        let line_height = self.config.line_advance(size);
        for line in wrap_text(self.metrics, text, cursor.content_width(), font)? {
            cursor.ensure_space(line_height);
            let x = cursor.left();
            cursor.draw_line(line, x, font, self.theme.primary);
            cursor.advance(line_height);
        }
        Ok(())
    }

    fn heading(&self, text: &str, level: u8, cursor: &mut PageCursor) -> Result<()> {
        let fonts = &self.config.fonts;
        let size = match level {
            1 => fonts.heading1,
            2 => fonts.heading2,
            _ => fonts.heading3,
        };
        let font = SpanFont {
            font: StandardFont::HelveticaBold,
            size,
        };
        let line_height = self.config.line_advance(size);
        let gap = self.config.spacing.after_heading;

        for line in wrap_text(self.metrics, text, cursor.content_width(), font)? {
            cursor.ensure_space(line_height + gap);
            let x = cursor.left();
            cursor.draw_line(line, x, font, self.theme.primary);
            cursor.advance(line_height);
        }
        cursor.gap(gap);
        Ok(())
    }

    fn paragraph(&self, text: &str, cursor: &mut PageCursor) -> Result<()> {
        let font = self.body_font(StandardFont::Helvetica);
        let lines = wrap_text(self.metrics, text, cursor.content_width(), font)?;
        self.draw_lines(&lines, cursor.left(), font, colours::BLACK, cursor);
        cursor.gap(self.config.spacing.after_paragraph);
        Ok(())
    }

    fn quote(&self, text: &str, cursor: &mut PageCursor) -> Result<()> {
        let spacing = &self.config.spacing;
        let size = self.config.fonts.quote;
        let font = SpanFont {
            font: StandardFont::HelveticaOblique,
            size,
        };
        let line_height = self.config.line_advance(size);
        let lines = wrap_text(
            self.metrics,
            text,
            cursor.content_width() - spacing.quote_indent,
            font,
        )?;

        if !lines.is_empty() {
            let whole = line_height * lines.len() as f32 + spacing.after_quote;
            cursor.ensure_space(whole.min(cursor.usable_height()));
        }

        // one bar segment per output page, each drawn with the lines it
        // accompanies under a single reservation
        let mut remaining = &lines[..];
        while !remaining.is_empty() {
            cursor.ensure_space(line_height);
            let mut count = 1;
            while count < remaining.len() && cursor.fits(line_height * (count + 1) as f32) {
                count += 1;
            }
            let (segment, rest) = remaining.split_at(count);

            // from cap height of the first line to below the descenders of the last
            let bar_height = line_height * (count - 1) as f32 + size * 1.1;
            let x = cursor.left();
            cursor.draw_box(
                x,
                size * 0.8,
                spacing.quote_bar_width,
                bar_height,
                Paint::Fill(self.theme.secondary),
                Pt(0.0),
            );
            for line in segment {
                cursor.draw_line(line, x + spacing.quote_indent, font, colours::MUTED);
                cursor.advance(line_height);
            }
            remaining = rest;
        }

        cursor.gap(spacing.after_quote);
        Ok(())
    }

    fn list(&self, items: &[String], list_type: ListType, cursor: &mut PageCursor) -> Result<()> {
        let font = self.body_font(StandardFont::Helvetica);
        let line_height = self.config.line_advance(font.size);
        let marker_gap = self.config.spacing.list_marker_gap;

        for (i, item) in items.iter().enumerate() {
            let marker = match list_type {
                ListType::Bullet => "•".to_string(),
                ListType::Ordered => format!("{}.", i + 1),
            };
            let marker_width = width_of_text(self.metrics, &marker, font)?;
            let text_x = cursor.left() + marker_width + marker_gap;
            let lines = wrap_text(
                self.metrics,
                item,
                cursor.content_width() - marker_width - marker_gap,
                font,
            )?;

            // an empty item still gets its marker
            cursor.ensure_space(line_height);
            let x = cursor.left();
            cursor.draw_line(&marker, x, font, self.theme.primary);
            match lines.split_first() {
                None => cursor.advance(line_height),
                Some((first, rest)) => {
                    cursor.draw_line(first, text_x, font, colours::BLACK);
                    cursor.advance(line_height);
                    self.draw_lines(rest, text_x, font, colours::BLACK, cursor);
                }
            }
        }

        cursor.gap(self.config.spacing.after_list);
        Ok(())
    }

    fn cta(&self, label: &str, url: Option<&str>, cursor: &mut PageCursor) -> Result<()> {
        let spacing = &self.config.spacing;
        let size = self.config.fonts.cta;
        let font = SpanFont {
            font: StandardFont::HelveticaBold,
            size,
        };

        let button_width = width_of_text(self.metrics, label, font)? + spacing.cta_padding_x;
        let button_height = size + spacing.cta_padding_y;
        cursor.ensure_space(button_height + spacing.after_cta);

        let x = cursor.left() + (cursor.content_width() - button_width) / 2.0;
        cursor.draw_box(
            x,
            Pt(0.0),
            button_width,
            button_height,
            Paint::Fill(self.theme.primary),
            spacing.cta_corner_radius,
        );
        if let Some(url) = url {
            cursor.link(x, Pt(0.0), button_width, button_height, url);
        }

        let drop = button_height / 2.0 + size * CENTRE_DROP;
        cursor.advance(drop);
        cursor.draw_line(label, x + spacing.cta_padding_x / 2.0, font, colours::WHITE);
        cursor.advance(button_height - drop + spacing.after_cta);
        Ok(())
    }

    fn image(&self, url: &str, alt: &str, cursor: &mut PageCursor) -> Result<()> {
        let spacing = &self.config.spacing;
        let font = self.body_font(StandardFont::HelveticaOblique);
        let slot = spacing.image_slot;
        cursor.ensure_space(slot);

        let x = cursor.left();
        let width = cursor.content_width();
        cursor.draw_box(
            x,
            Pt(0.0),
            width,
            slot,
            Paint::Stroke {
                colour: colours::BORDER,
                width: Pt(1.0),
            },
            Pt(0.0),
        );

        let description = [alt, url]
            .into_iter()
            .find(|s| !s.trim().is_empty())
            .unwrap_or("untitled");
        let drop = slot / 2.0 + font.size * CENTRE_DROP;
        cursor.advance(drop);
        cursor.draw_line(
            format!("[Image: {description}]"),
            x + Pt(10.0),
            font,
            colours::MUTED,
        );
        cursor.advance(slot - drop);
        cursor.gap(spacing.after_image);
        Ok(())
    }

    fn table(&self, headers: &[String], rows: &[Vec<String>], cursor: &mut PageCursor) -> Result<()> {
        let font = self.body_font(StandardFont::Helvetica);
        let bold = self.body_font(StandardFont::HelveticaBold);
        let line_height = self.config.line_advance(font.size);
        let after = self.config.spacing.after_table;

        let header = (!headers.is_empty()).then(|| headers.join(" | "));
        let line_count = rows.len() + usize::from(header.is_some());
        let whole = line_height * line_count as f32 + after;
        cursor.ensure_space(whole.min(cursor.usable_height()));

        let x = cursor.left();
        if let Some(header) = header {
            cursor.ensure_space(line_height);
            cursor.draw_line(header, x, bold, colours::BLACK);
            cursor.advance(line_height);
        }
        for row in rows {
            cursor.ensure_space(line_height);
            cursor.draw_line(row.join(" | "), x, font, colours::BLACK);
            cursor.advance(line_height);
        }

        cursor.gap(after);
        Ok(())
    }

    fn body_font(&self, font: StandardFont) -> SpanFont {
        SpanFont {
            font,
            size: self.config.fonts.body,
        }
    }

    fn draw_lines(
        &self,
        lines: &[String],
        x: Pt,
        font: SpanFont,
        colour: Colour,
        cursor: &mut PageCursor,
    ) {
        let line_height = self.config.line_advance(font.size);
        for line in lines {
            cursor.ensure_space(line_height);
            cursor.draw_line(line, x, font, colour);
            cursor.advance(line_height);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;
    use crate::page::{Page, SpanLayout};

    /// every character is 6pt wide
    struct Fixed;

    impl FontMetrics for Fixed {
        fn width_of_text(&self, text: &str, _font: StandardFont, _size: Pt) -> Result<Pt> {
            Ok(Pt(text.chars().count() as f32 * 6.0))
        }
    }

    fn render_all(contents: Vec<BlockContent>) -> Document {
        let config = LayoutConfig::default();
        let renderer = BlockRenderer::new(&Fixed, &config, Theme::default());
        let mut doc = Document::default();
        let mut cursor = PageCursor::new(&mut doc, &config);
        for (i, content) in contents.into_iter().enumerate() {
            let block = Block::new(format!("b{i}"), i as i64, content);
            renderer.render(&block, &mut cursor).unwrap();
        }
        cursor.finish();
        doc
    }

    fn spans(page: &Page) -> Vec<&SpanLayout> {
        page.spans().collect()
    }

    #[test]
    fn headings_are_bold_and_primary() {
        let doc = render_all(vec![BlockContent::Heading {
            text: "Overview".into(),
            level: 2,
        }]);
        let page = doc.page(0).unwrap();
        let span = spans(page)[0];
        assert_eq!(span.font.font, StandardFont::HelveticaBold);
        assert_eq!(span.font.size, Pt(20.0));
        assert_eq!(span.colour, colours::BRAND_PURPLE);
    }

    #[test]
    fn unknown_heading_levels_use_the_smallest_size() {
        let doc = render_all(vec![BlockContent::Heading {
            text: "Deep".into(),
            level: 7,
        }]);
        assert_eq!(spans(doc.page(0).unwrap())[0].font.size, Pt(18.0));
    }

    #[test]
    fn list_markers_precede_indented_text() {
        let long_item = "word ".repeat(30).trim_end().to_string();
        let doc = render_all(vec![BlockContent::List {
            items: vec!["first".into(), long_item],
            list_type: ListType::Ordered,
        }]);
        let page = doc.page(0).unwrap();
        let spans = spans(page);

        assert_eq!(spans[0].text, "1.");
        assert_eq!(spans[0].coords.0, Pt(50.0));
        // "1." is 12pt wide, then a 5pt gap
        assert_eq!(spans[1].text, "first");
        assert_eq!(spans[1].coords.0, Pt(67.0));

        assert_eq!(spans[2].text, "2.");
        let continuation: Vec<_> = spans[3..].iter().map(|s| s.coords.0).collect();
        assert!(continuation.len() > 1);
        assert!(continuation.iter().all(|x| *x == Pt(67.0)));
    }

    #[test]
    fn quote_bar_spans_its_lines() {
        let doc = render_all(vec![BlockContent::Quote {
            text: "a ".repeat(100).trim_end().to_string(),
        }]);
        let page = doc.page(0).unwrap();
        let spans = spans(page);
        let bar = page.shapes().next().unwrap();

        assert!(spans.iter().all(|s| s.colour == colours::MUTED));
        assert!(spans.iter().all(|s| s.coords.0 == Pt(65.0)));
        assert_eq!(bar.paint, Paint::Fill(colours::BRAND_INDIGO));
        let first = spans.first().unwrap().coords.1;
        let last = spans.last().unwrap().coords.1;
        assert!(bar.rect.y2 > first);
        assert!(bar.rect.y1 < last);
    }

    #[test]
    fn quotes_taller_than_a_page_keep_bars_on_each_page() {
        let doc = render_all(vec![BlockContent::Quote {
            text: "lorem ".repeat(2000).trim_end().to_string(),
        }]);
        assert!(doc.page_count() > 1);
        for page in doc.pages_in_order() {
            let bars: Vec<_> = page.shapes().collect();
            assert_eq!(bars.len(), 1);
            let lowest = page.spans().map(|s| s.coords.1).fold(Pt(f32::MAX), Pt::min);
            assert!(bars[0].rect.y1 < lowest);
            assert!(bars[0].rect.y1 >= Pt(50.0));
        }
    }

    #[test]
    fn cta_is_centred_with_a_white_label() {
        let doc = render_all(vec![BlockContent::Cta {
            button_text: "Sign up".into(),
            url: Some("https://example.com".into()),
        }]);
        let page = doc.page(0).unwrap();
        let button = page.shapes().next().unwrap();
        // 7 chars * 6pt + 40pt padding
        assert!((button.rect.width().0 - 82.0).abs() < 0.001);
        assert!((button.rect.height().0 - 34.0).abs() < 0.001);
        let centre = (button.rect.x1 + button.rect.x2) / 2.0;
        assert!((centre.0 - 297.64).abs() < 0.001);
        assert_eq!(button.corner_radius, Pt(6.0));

        let label = spans(page)[0];
        assert_eq!(label.colour, colours::WHITE);
        assert!(label.coords.1 > button.rect.y1 && label.coords.1 < button.rect.y2);
        assert_eq!(page.links.len(), 1);
    }

    #[test]
    fn oversized_cta_does_not_fail() {
        let doc = render_all(vec![BlockContent::Cta {
            button_text: "x".repeat(200),
            url: None,
        }]);
        let button = doc.page(0).unwrap().shapes().next().unwrap();
        assert!(button.rect.x1 < Pt(0.0));
        assert!(doc.page(0).unwrap().links.is_empty());
    }

    #[test]
    fn image_placeholder_labels() {
        let doc = render_all(vec![
            BlockContent::Image {
                url: "https://cdn/x.png".into(),
                alt: "A cat".into(),
            },
            BlockContent::Image {
                url: "https://cdn/y.png".into(),
                alt: "".into(),
            },
            BlockContent::Image {
                url: "".into(),
                alt: "".into(),
            },
        ]);
        let page = doc.page(0).unwrap();
        let labels: Vec<_> = page.spans().map(|s| s.text.as_str()).collect();
        assert_eq!(
            labels,
            vec!["[Image: A cat]", "[Image: https://cdn/y.png]", "[Image: untitled]"]
        );
        assert_eq!(page.shapes().count(), 3);
    }

    #[test]
    fn tables_join_cells() {
        let doc = render_all(vec![BlockContent::Table {
            headers: vec!["Plan".into(), "Price".into()],
            rows: vec![
                vec!["Basic".into(), "$5".into()],
                vec!["Pro".into(), "$15".into()],
            ],
        }]);
        let spans = spans(doc.page(0).unwrap());
        let lines: Vec<_> = spans.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(lines, vec!["Plan | Price", "Basic | $5", "Pro | $15"]);
        assert_eq!(spans[0].font.font, StandardFont::HelveticaBold);
        assert_eq!(spans[1].font.font, StandardFont::Helvetica);
    }

    #[test]
    fn headerless_tables_draw_rows_only() {
        let doc = render_all(vec![BlockContent::Table {
            headers: vec![],
            rows: vec![vec!["a".into(), "b".into()]],
        }]);
        let lines: Vec<_> = doc.page(0).unwrap().spans().map(|s| s.text.clone()).collect();
        assert_eq!(lines, vec!["a | b"]);
    }

    #[test]
    fn tables_reserve_their_whole_height() {
        let config = LayoutConfig::default();
        let renderer = BlockRenderer::new(&Fixed, &config, Theme::default());
        let mut doc = Document::default();
        let mut cursor = PageCursor::new(&mut doc, &config);
        // leave room for 3 lines but not 4 plus the trailing gap
        cursor.advance(Pt(791.89 - 50.0 - 3.5 * 18.0));

        let table = Block::new(
            "t",
            0,
            BlockContent::Table {
                headers: vec!["h".into()],
                rows: vec![vec!["1".into()], vec!["2".into()], vec!["3".into()]],
            },
        );
        renderer.render(&table, &mut cursor).unwrap();
        cursor.finish();

        assert!(doc.page(0).unwrap().is_empty());
        assert_eq!(doc.page(1).unwrap().spans().count(), 4);
    }

    /// Render a single block with the cursor `room` points above the bottom
    /// margin of the first page
    fn render_with_room(content: BlockContent, room: f32) -> Document {
        let config = LayoutConfig::default();
        let renderer = BlockRenderer::new(&Fixed, &config, Theme::default());
        let mut doc = Document::default();
        let mut cursor = PageCursor::new(&mut doc, &config);
        cursor.advance(Pt(791.89 - 50.0 - room));
        renderer
            .render(&Block::new("b", 0, content), &mut cursor)
            .unwrap();
        cursor.finish();
        doc
    }

    #[test]
    fn headings_reserve_their_trailing_gap() {
        let heading = || BlockContent::Heading {
            text: "Pricing".into(),
            level: 1,
        };

        // a 24pt line needs 36pt plus the 10pt gap
        let doc = render_with_room(heading(), 36.0 + 5.0);
        assert_eq!(doc.page_count(), 2);
        assert!(doc.page(0).unwrap().is_empty());
        assert_eq!(doc.page(1).unwrap().spans().next().unwrap().text, "Pricing");

        let doc = render_with_room(heading(), 36.0 + 11.0);
        assert_eq!(doc.page_count(), 1);
        assert_eq!(doc.page(0).unwrap().spans().count(), 1);
    }

    #[test]
    fn buttons_reserve_before_drawing() {
        let cta = || BlockContent::Cta {
            button_text: "Join".into(),
            url: Some("https://example.com/join".into()),
        };

        // 14pt label + 20pt padding, then the 35pt gap
        let doc = render_with_room(cta(), 34.0 + 35.0 - 1.0);
        assert_eq!(doc.page_count(), 2);
        let first = doc.page(0).unwrap();
        assert!(first.is_empty());
        assert!(first.links.is_empty());
        let second = doc.page(1).unwrap();
        assert_eq!(second.shapes().count(), 1);
        assert_eq!(second.spans().next().unwrap().text, "Join");
        assert_eq!(second.links.len(), 1);

        let doc = render_with_room(cta(), 34.0 + 35.0 + 1.0);
        assert_eq!(doc.page_count(), 1);
        assert_eq!(doc.page(0).unwrap().shapes().count(), 1);
    }

    #[test]
    fn unsupported_blocks_draw_nothing() {
        let doc = render_all(vec![BlockContent::Unsupported("video".into())]);
        assert_eq!(doc.page_count(), 1);
        assert!(doc.page(0).unwrap().is_empty());
    }
}
