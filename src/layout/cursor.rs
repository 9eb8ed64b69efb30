use crate::colour::Colour;
use crate::config::LayoutConfig;
use crate::document::Document;
use crate::page::{LinkLayout, Page, Paint, ShapeLayout, SpanFont, SpanLayout};
use crate::rect::Rect;
use crate::units::Pt;

/// The write position of a composition.
///
/// The cursor owns the output page currently being drawn on and the vertical
/// position of the next baseline on it. Positions are PDF coordinates, so the
/// cursor starts near the top of the page and counts down as content is added.
/// Nothing else reads or moves the position: block renderers reserve room with
/// [PageCursor::ensure_space], draw relative to the cursor, then move it with
/// [PageCursor::advance] or [PageCursor::gap]. Keeping every page-break
/// decision behind `ensure_space` is what keeps pagination consistent across
/// block types.
///
/// Finished pages are sealed into the [Document] the cursor was created with;
/// call [PageCursor::finish] to seal the last one.
pub struct PageCursor<'d> {
    document: &'d mut Document,
    config: &'d LayoutConfig,
    current: Page,
    cursor_y: Pt,
}

impl<'d> PageCursor<'d> {
    /// Start laying out on a fresh first page
    pub fn new(document: &'d mut Document, config: &'d LayoutConfig) -> PageCursor<'d> {
        PageCursor {
            document,
            config,
            current: Page::new(config.page_size, Some(config.margins)),
            cursor_y: Self::top(config),
        }
    }

    fn top(config: &LayoutConfig) -> Pt {
        config.page_size.1 - config.margins.top
    }

    fn bottom(&self) -> Pt {
        self.config.margins.bottom
    }

    /// Make sure `required` points are available below the cursor, starting a
    /// new page if they aren't. Returns `true` if a page break happened.
    ///
    /// Content taller than a whole page still gets a fresh page but can't be
    /// made to fit; callers split such content and reserve per piece.
    pub fn ensure_space(&mut self, required: Pt) -> bool {
        if self.cursor_y >= self.bottom() + required {
            return false;
        }

        let next = Page::new(self.config.page_size, Some(self.config.margins));
        let sealed = std::mem::replace(&mut self.current, next);
        self.document.add_page(sealed);
        self.cursor_y = Self::top(self.config);
        log::debug!(
            "page break before {}pt of content, now on output page {}",
            required,
            self.page_index() + 1
        );
        true
    }

    /// Whether `height` points fit below the cursor without a page break
    pub fn fits(&self, height: Pt) -> bool {
        self.cursor_y >= self.bottom() + height
    }

    /// Move the cursor down by `amount`
    pub fn advance(&mut self, amount: Pt) {
        self.cursor_y -= amount;
    }

    /// Move the cursor down by `amount` of whitespace, stopping at the bottom
    /// margin. Gaps never cause a page break; if the gap runs out of page the
    /// next `ensure_space` breaks instead.
    pub fn gap(&mut self, amount: Pt) {
        self.cursor_y = (self.cursor_y - amount).max(self.bottom());
    }

    /// Draw a line of text with its baseline on the cursor. Does not move the
    /// cursor
    pub fn draw_line<S: ToString>(&mut self, text: S, x: Pt, font: SpanFont, colour: Colour) {
        self.current.add_span(SpanLayout {
            text: text.to_string(),
            font,
            colour,
            coords: (x, self.cursor_y),
        });
    }

    /// Draw a box whose top edge sits `top_offset` above the cursor (negative
    /// values place it below) and which extends `height` downwards. Does not
    /// move the cursor
    pub fn draw_box(
        &mut self,
        x: Pt,
        top_offset: Pt,
        width: Pt,
        height: Pt,
        paint: Paint,
        corner_radius: Pt,
    ) {
        self.current.add_shape(ShapeLayout {
            rect: Rect::from_top_left(x, self.cursor_y + top_offset, width, height),
            corner_radius,
            paint,
        });
    }

    /// Make an area laid out like [PageCursor::draw_box] open `uri` when clicked
    pub fn link<S: ToString>(&mut self, x: Pt, top_offset: Pt, width: Pt, height: Pt, uri: S) {
        self.current.add_link(LinkLayout {
            rect: Rect::from_top_left(x, self.cursor_y + top_offset, width, height),
            uri: uri.to_string(),
        });
    }

    /// X coordinate of the left margin
    pub fn left(&self) -> Pt {
        self.config.margins.left
    }

    /// Width between the left and right margins
    pub fn content_width(&self) -> Pt {
        self.config.content_width()
    }

    /// Height between the top and bottom margins, the most a single
    /// reservation can ever get
    pub fn usable_height(&self) -> Pt {
        Self::top(self.config) - self.bottom()
    }

    /// 0-based index of the page currently being drawn on
    pub fn page_index(&self) -> usize {
        self.document.page_count()
    }

    /// Point the document outline at `above` points over the current position
    pub fn bookmark<S: ToString>(&mut self, title: S, above: Pt) {
        let page_index = self.page_index();
        self.document
            .add_bookmark(page_index, self.cursor_y + above, title.to_string());
    }

    #[cfg(test)]
    pub(crate) fn position(&self) -> Pt {
        self.cursor_y
    }

    /// Seal the page in progress, returning the number of output pages
    pub fn finish(self) -> usize {
        self.document.add_page(self.current);
        self.document.page_count()
    }
}
