use crate::colour::Colour;
use crate::content::render_contents;
use crate::font::StandardFont;
use crate::layout::Margins;
use crate::pagesize::PageSize;
use crate::rect::Rect;
use crate::refs::{ObjectReferences, RefType};
use crate::units::*;
use crate::PDFError;
use miniz_oxide::deflate::{compress_to_vec_zlib, CompressionLevel};
use pdf_writer::types::{ActionType, AnnotationType};
use pdf_writer::{Filter, Finish, Name, Pdf, Ref, Str};

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SpanFont {
    pub font: StandardFont,
    pub size: Pt,
}

/// A run of text drawn on a single baseline
#[derive(Clone, PartialEq, Debug)]
pub struct SpanLayout {
    pub text: String,
    pub font: SpanFont,
    pub colour: Colour,
    /// Start of the baseline, in page coordinates
    pub coords: (Pt, Pt),
}

/// How a shape is painted
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Paint {
    Fill(Colour),
    Stroke { colour: Colour, width: Pt },
}

/// A (possibly rounded) rectangle drawn as page chrome: quote bars, button
/// backgrounds, placeholder borders
#[derive(Clone, PartialEq, Debug)]
pub struct ShapeLayout {
    pub rect: Rect,
    pub corner_radius: Pt,
    pub paint: Paint,
}

/// A clickable area that opens a URI
#[derive(Clone, PartialEq, Debug)]
pub struct LinkLayout {
    pub rect: Rect,
    pub uri: String,
}

#[derive(Clone, PartialEq, Debug)]
pub enum PageContents {
    Text(Vec<SpanLayout>),
    Shape(ShapeLayout),
}

/// One physical sheet of the output document
pub struct Page {
    /// The size of the page
    pub media_box: Rect,
    /// Where content can live, i.e. within the margins
    pub content_box: Rect,
    /// The laid out text and shapes, in drawing order
    pub contents: Vec<PageContents>,
    /// Link annotations placed over the contents
    pub links: Vec<LinkLayout>,
}

impl Page {
    /// Create a new page with the given size and optional margins. If margins
    /// aren't provided, the content box covers the whole page
    pub fn new(size: PageSize, margins: Option<Margins>) -> Page {
        let (width, height) = size;
        let margins = margins.unwrap_or_default();
        Page {
            media_box: Rect {
                x1: Pt(0.0),
                y1: Pt(0.0),
                x2: width,
                y2: height,
            },
            content_box: Rect {
                x1: margins.left,
                y1: margins.bottom,
                x2: width - margins.right,
                y2: height - margins.top,
            },
            contents: Vec::default(),
            links: Vec::default(),
        }
    }

    /// Add a span to the page. Consecutive spans share one text run, so the
    /// content stream only switches font or colour when they change
    pub fn add_span(&mut self, span: SpanLayout) {
        match self.contents.last_mut() {
            Some(PageContents::Text(spans)) => spans.push(span),
            _ => self.contents.push(PageContents::Text(vec![span])),
        }
    }

    pub fn add_shape(&mut self, shape: ShapeLayout) {
        self.contents.push(PageContents::Shape(shape));
    }

    pub fn add_link(&mut self, link: LinkLayout) {
        self.links.push(link);
    }

    /// All text spans on the page, in drawing order
    pub fn spans(&self) -> impl Iterator<Item = &SpanLayout> {
        self.contents.iter().flat_map(|c| match c {
            PageContents::Text(spans) => spans.as_slice(),
            PageContents::Shape(_) => &[][..],
        })
    }

    /// All shapes on the page, in drawing order
    pub fn shapes(&self) -> impl Iterator<Item = &ShapeLayout> {
        self.contents.iter().filter_map(|c| match c {
            PageContents::Shape(shape) => Some(shape),
            PageContents::Text(_) => None,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    pub(crate) fn write(
        &self,
        refs: &mut ObjectReferences,
        page_index: usize,
        writer: &mut Pdf,
    ) -> Result<(), PDFError> {
        let id = refs
            .get(RefType::Page(page_index))
            .ok_or(PDFError::PageMissing)?;
        let page_tree_id = refs.get(RefType::PageTree).ok_or(PDFError::PageMissing)?;
        let content_id = refs.gen(RefType::ContentForPage(page_index));

        // encode before opening the page dict so a bad glyph doesn't leave a
        // half-written object behind
        let rendered = render_contents(&self.contents)?;
        let compressed = compress_to_vec_zlib(
            rendered.as_slice(),
            CompressionLevel::DefaultCompression as u8,
        );

        let annotation_ids: Vec<Ref> = (0..self.links.len())
            .map(|i| refs.gen(RefType::Annotation(page_index, i)))
            .collect();

        let mut page = writer.page(id);
        page.media_box(self.media_box.into());
        page.art_box(self.content_box.into());
        page.parent(page_tree_id);

        let mut resources = page.resources();
        let mut resource_fonts = resources.fonts();
        for font in StandardFont::ALL {
            if let Some(font_id) = refs.get(RefType::Font(font.index())) {
                resource_fonts.pair(Name(format!("F{}", font.index()).as_bytes()), font_id);
            }
        }
        resource_fonts.finish();
        resources.finish();

        page.contents(content_id);
        if !annotation_ids.is_empty() {
            page.annotations(annotation_ids.iter().copied());
        }
        page.finish();

        for (link, annotation_id) in self.links.iter().zip(annotation_ids) {
            let mut annotation = writer.annotation(annotation_id);
            annotation
                .subtype(AnnotationType::Link)
                .rect(link.rect.into())
                .border(0.0, 0.0, 0.0, None);
            annotation
                .action()
                .action_type(ActionType::Uri)
                .uri(Str(link.uri.as_bytes()));
        }

        writer
            .stream(content_id, compressed.as_slice())
            .filter(Filter::FlateDecode);

        Ok(())
    }
}
