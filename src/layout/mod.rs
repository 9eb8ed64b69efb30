//! Text measurement, line breaking and page flow.
//!
//! Layout is split into two pieces that the block renderer combines:
//!
//! - [`wrap_text`](crate::layout::wrap_text) - greedy word wrap against a width, using
//!   an injected [`FontMetrics`](crate::FontMetrics) provider
//! - [`PageCursor`](crate::layout::PageCursor) - owns the output page being drawn on and
//!   the vertical write position, and decides when content flows onto a new page
//!
//! # Example
//!
//! ```
//! use pdf_blocks::{colours, Document, LayoutConfig, Pt, SpanFont, StandardFont, StandardMetrics};
//! use pdf_blocks::layout::{wrap_text, PageCursor};
//!
//! let config = LayoutConfig::default();
//! let mut doc = Document::default();
//! let mut cursor = PageCursor::new(&mut doc, &config);
//!
//! let font = SpanFont { font: StandardFont::Helvetica, size: Pt(12.0) };
//! let line_height = config.line_advance(font.size);
//! let lines = wrap_text(&StandardMetrics, "Hello, world!", cursor.content_width(), font)
//!     .expect("can measure text");
//! for line in lines {
//!     cursor.ensure_space(line_height);
//!     let x = cursor.left();
//!     cursor.draw_line(line, x, font, colours::BLACK);
//!     cursor.advance(line_height);
//! }
//! assert_eq!(cursor.finish(), 1);
//! ```

mod cursor;
mod margins;
mod text;

pub use cursor::*;
pub use margins::*;
pub use text::*;
