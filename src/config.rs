//! Layout configuration.
//!
//! Every constant the typesetter uses lives here so that callers can tweak a
//! house style without touching layout code. The defaults reproduce the
//! standard export look: A4 paper, 50pt margins, Helvetica at a fixed scale.
//! All structs deserialize with `#[serde(default)]`, so a partial JSON object
//! only overrides what it names.

use crate::colour::{colours, Colour};
use crate::layout::Margins;
use crate::model::BrandKit;
use crate::pagesize::{PageSize, A4};
use crate::units::Pt;
use serde::{Deserialize, Serialize};

/// Font sizes, in points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontScale {
    pub title: Pt,
    pub heading1: Pt,
    pub heading2: Pt,
    pub heading3: Pt,
    pub body: Pt,
    pub quote: Pt,
    pub cta: Pt,
}

impl Default for FontScale {
    fn default() -> Self {
        FontScale {
            title: Pt(28.0),
            heading1: Pt(24.0),
            heading2: Pt(20.0),
            heading3: Pt(18.0),
            body: Pt(12.0),
            quote: Pt(14.0),
            cta: Pt(14.0),
        }
    }
}

/// Gaps and fixed block geometry, in points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Spacing {
    /// Below the project title
    pub after_title: Pt,
    /// Below each section (document page) title
    pub after_section_title: Pt,
    /// Below the last block of a section
    pub after_section: Pt,
    pub after_heading: Pt,
    pub after_paragraph: Pt,
    pub after_quote: Pt,
    pub after_list: Pt,
    pub after_cta: Pt,
    pub after_image: Pt,
    pub after_table: Pt,
    /// Between a list marker and its text
    pub list_marker_gap: Pt,
    pub quote_bar_width: Pt,
    /// Distance from the left margin to quote text
    pub quote_indent: Pt,
    /// Horizontal padding added to a button's label width
    pub cta_padding_x: Pt,
    /// Vertical padding added to a button's label height
    pub cta_padding_y: Pt,
    pub cta_corner_radius: Pt,
    /// Height of the placeholder drawn for an image
    pub image_slot: Pt,
}

impl Default for Spacing {
    fn default() -> Self {
        Spacing {
            after_title: Pt(20.0),
            after_section_title: Pt(15.0),
            after_section: Pt(30.0),
            after_heading: Pt(10.0),
            after_paragraph: Pt(5.0),
            after_quote: Pt(10.0),
            after_list: Pt(5.0),
            after_cta: Pt(35.0),
            after_image: Pt(40.0),
            after_table: Pt(20.0),
            list_marker_gap: Pt(5.0),
            quote_bar_width: Pt(3.0),
            quote_indent: Pt(15.0),
            cta_padding_x: Pt(40.0),
            cta_padding_y: Pt(20.0),
            cta_corner_radius: Pt(6.0),
            image_slot: Pt(60.0),
        }
    }
}

/// Page geometry and typography used for a whole composition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub page_size: PageSize,
    pub margins: Margins,
    /// Line advance as a multiple of the font size
    pub line_height: f32,
    pub fonts: FontScale,
    pub spacing: Spacing,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            page_size: A4,
            margins: Margins::all(Pt(50.0)),
            line_height: 1.5,
            fonts: FontScale::default(),
            spacing: Spacing::default(),
        }
    }
}

impl LayoutConfig {
    /// Width available to text between the left and right margins
    pub fn content_width(&self) -> Pt {
        self.page_size.0 - self.margins.left - self.margins.right
    }

    /// Vertical advance for one line of text at `size`
    pub fn line_advance(&self, size: Pt) -> Pt {
        size * self.line_height
    }
}

/// The two brand colours every block is styled with
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub primary: Colour,
    pub secondary: Colour,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            primary: colours::BRAND_PURPLE,
            secondary: colours::BRAND_INDIGO,
        }
    }
}

impl Theme {
    /// Resolve brand colours, falling back to the defaults for anything that
    /// is missing or isn't a hex colour
    pub fn from_brand_kit(kit: Option<&BrandKit>) -> Theme {
        let defaults = Theme::default();
        let Some(kit) = kit else {
            return defaults;
        };

        let resolve = |value: Option<&String>, fallback: Colour, which: &str| match value {
            None => fallback,
            Some(hex) => Colour::from_hex(hex).unwrap_or_else(|| {
                log::debug!("ignoring unparseable {which} colour {hex:?}");
                fallback
            }),
        };

        Theme {
            primary: resolve(kit.primary_color.as_ref(), defaults.primary, "primary"),
            secondary: resolve(kit.secondary_color.as_ref(), defaults.secondary, "secondary"),
        }
    }
}
