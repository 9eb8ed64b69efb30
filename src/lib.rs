//! Typesets ordered content blocks into paginated PDF documents.
//!
//! An [ExportData] (a project title plus authored pages of headings,
//! paragraphs, quotes, lists, call-to-action buttons, image placeholders and
//! tables) is laid out onto A4 sheets by a [Composer], producing a
//! [Document] that can be written out as PDF bytes.
//!
//! ```
//! use pdf_blocks::model::{Block, BlockContent, ExportData, Page};
//!
//! let data = ExportData::new("Spring Launch").with_page(
//!     Page::new("intro", "Introduction").with_block(Block::new(
//!         "b1",
//!         0,
//!         BlockContent::Paragraph { text: "Hello, world!".into() },
//!     )),
//! );
//! let bytes = pdf_blocks::render_pdf(&data).expect("can render");
//! assert!(bytes.starts_with(b"%PDF-"));
//! ```

mod colour;
pub use colour::*;

mod compose;
pub use compose::*;

/// Layout constants and brand theming
pub mod config;
pub use config::{LayoutConfig, Theme};

mod content;

mod document;
pub use document::*;

mod error;
pub use error::*;

mod font;
pub use font::*;

mod info;
pub use info::*;

/// Utility functions and structures to layout objects (most text) on pages
pub mod layout;

/// The authored content model
pub mod model;
pub use model::ExportData;

mod naming;
pub use naming::*;

mod outline;
pub use outline::*;

mod page;
pub use page::*;

/// Common page sizes
pub mod pagesize;

mod rect;
pub use rect::*;

pub(crate) mod refs;

mod render;
pub use render::*;

mod units;
pub use units::*;

/// Re-export PDF-writer functionality, mostly for custom [pdf_writer::Content] generation
pub use pdf_writer;
