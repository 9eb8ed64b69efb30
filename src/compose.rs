use crate::config::{LayoutConfig, Theme};
use crate::document::Document;
use crate::font::{FontMetrics, StandardMetrics};
use crate::info::Info;
use crate::layout::PageCursor;
use crate::model::ExportData;
use crate::render::BlockRenderer;
use crate::Result;

/// Turns [ExportData] into a paginated [Document].
///
/// A composer holds no state between calls, so one instance can render any
/// number of exports, from several threads if its metrics provider allows.
pub struct Composer<M: FontMetrics> {
    metrics: M,
    config: LayoutConfig,
}

impl Default for Composer<StandardMetrics> {
    fn default() -> Self {
        Composer::new(StandardMetrics)
    }
}

impl<M: FontMetrics> Composer<M> {
    /// Create a composer measuring text with `metrics`, using the default layout
    pub fn new(metrics: M) -> Composer<M> {
        Composer {
            metrics,
            config: LayoutConfig::default(),
        }
    }

    /// Replace the layout configuration
    pub fn with_config(mut self, config: LayoutConfig) -> Composer<M> {
        self.config = config;
        self
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Lay out the whole export: the project title, then every authored page
    /// in input order as a titled section of blocks sorted by `order`.
    /// Sections follow each other without forced page breaks.
    ///
    /// The only error is the metrics provider failing to measure some text.
    pub fn compose(&self, data: &ExportData) -> Result<Document> {
        let config = &self.config;
        let theme = Theme::from_brand_kit(data.brand_kit.as_ref());
        let renderer = BlockRenderer::new(&self.metrics, config, theme);

        let mut document = Document::default();
        document.set_info(Info::new().title(&data.project_title).clone());

        let mut cursor = PageCursor::new(&mut document, config);
        renderer.title(&data.project_title, config.fonts.title, &mut cursor)?;
        cursor.gap(config.spacing.after_title);

        for page in data.pages.iter() {
            let size = config.fonts.heading1;
            cursor.ensure_space(config.line_advance(size));
            cursor.bookmark(&page.title, size);
            renderer.title(&page.title, size, &mut cursor)?;
            cursor.gap(config.spacing.after_section_title);

            for block in page.sorted_blocks() {
                renderer.render(block, &mut cursor)?;
            }
            cursor.gap(config.spacing.after_section);
        }

        let page_count = cursor.finish();
        log::info!(
            "composed {:?}: {} section(s) on {} page(s)",
            data.project_title,
            data.pages.len(),
            page_count
        );
        Ok(document)
    }

    /// Compose and serialize to PDF bytes
    pub fn render(&self, data: &ExportData) -> Result<Vec<u8>> {
        self.compose(data)?.to_bytes()
    }
}

/// Render an export to PDF bytes with the standard fonts and default layout
pub fn render_pdf(data: &ExportData) -> Result<Vec<u8>> {
    Composer::default().render(data)
}
