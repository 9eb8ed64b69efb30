use pdf_blocks::{FontMetrics, Pt, Result, StandardFont};

/// Metrics where every character has the same advance, whatever the font or
/// size. Makes line breaks easy to predict
pub struct FixedMetrics(pub f32);

impl FontMetrics for FixedMetrics {
    fn width_of_text(&self, text: &str, _font: StandardFont, _size: Pt) -> Result<Pt> {
        Ok(Pt(text.chars().count() as f32 * self.0))
    }
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
