/// A colour, expressed in the RGB or Grey colour spaces
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Colour {
    /// DeviceRGB colour; r, g, b, range from 0.0 to 1.0
    RGB { r: f32, g: f32, b: f32 },
    /// DeviceGray colour; g ranges from 0.0 to 1.0
    Grey { g: f32 },
}

impl Colour {
    /// Create a new colour in the RGB space. r, g, and b range from 0.0 to 1.0
    pub fn new_rgb(r: f32, g: f32, b: f32) -> Colour {
        Colour::RGB { r, g, b }
    }

    /// Create a new colour in the RGB space. r, g, and b range from 0 to 255
    pub const fn new_rgb_bytes(r: u8, g: u8, b: u8) -> Colour {
        Colour::RGB {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Parse a CSS-style hex colour such as `#8B5CF6`, `8b5cf6` or `#fff`.
    /// Returns [None] for anything else; callers are expected to fall back
    /// to a default colour rather than fail.
    pub fn from_hex(hex: &str) -> Option<Colour> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.is_ascii() {
            return None;
        }

        let channel = |s: &str| u8::from_str_radix(s, 16).ok();
        match hex.len() {
            6 => Some(Colour::new_rgb_bytes(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            3 => {
                // #abc is shorthand for #aabbcc
                let r = channel(&hex[0..1])?;
                let g = channel(&hex[1..2])?;
                let b = channel(&hex[2..3])?;
                Some(Colour::new_rgb_bytes(r * 17, g * 17, b * 17))
            }
            _ => None,
        }
    }
}

/// A list of pre-defined colour constants
pub mod colours {
    use super::*;

    pub const BLACK: Colour = Colour::Grey { g: 0.0 };
    pub const WHITE: Colour = Colour::Grey { g: 1.0 };
    /// Muted grey used for quotations
    pub const MUTED: Colour = Colour::Grey { g: 0.4 };
    /// Light grey used for placeholder borders
    pub const BORDER: Colour = Colour::Grey { g: 0.75 };
    /// Brand purple, the default primary colour
    pub const BRAND_PURPLE: Colour = Colour::new_rgb_bytes(0x8b, 0x5c, 0xf6);
    /// Brand indigo, the default secondary colour
    pub const BRAND_INDIGO: Colour = Colour::new_rgb_bytes(0x63, 0x66, 0xf1);
}
