use crate::{
    font::StandardFont,
    info::Info,
    outline::Outline,
    page::Page,
    refs::{ObjectReferences, RefType},
    units::Pt,
    PDFError,
};
use id_arena::{Arena, Id};
use pdf_writer::{Finish, Pdf, Ref};
use std::io::Write;

#[derive(Default)]
/// A document is the main object that stores all the contents of the PDF
/// then renders it out with a call to [Document::write]
pub struct Document {
    pub info: Option<Info>,
    pub pages: Arena<Page>,
    pub page_order: Vec<Id<Page>>,
    pub outline: Outline,
}

impl Document {
    /// Sets information about the document. If not provided, no information block will be
    /// written to the PDF
    pub fn set_info(&mut self, info: Info) {
        self.info = Some(info);
    }

    /// Add a page to the end of the document, returning the id of that page
    pub fn add_page(&mut self, page: Page) -> Id<Page> {
        let id = self.pages.alloc(page);
        self.page_order.push(id);
        id
    }

    /// The number of pages in the document
    pub fn page_count(&self) -> usize {
        self.page_order.len()
    }

    /// Iterate over the pages in the order they will be written
    pub fn pages_in_order(&self) -> impl Iterator<Item = &Page> {
        self.page_order.iter().filter_map(|id| self.pages.get(*id))
    }

    /// Get the page at a 0-based position in the document
    pub fn page(&self, page_index: usize) -> Option<&Page> {
        self.page_order
            .get(page_index)
            .and_then(|id| self.pages.get(*id))
    }

    /// Add a bookmark in the document outline pointing to a position on the page with a
    /// given index
    pub fn add_bookmark<S: ToString>(&mut self, page_index: usize, top: Pt, title: S) {
        self.outline
            .add_bookmark(page_index, top, title.to_string());
    }

    /// Write the entire document to the writer. Note: although this can write to arbitrary
    /// streams, the entire document is "rendered" in memory first. This limitation is due
    /// to the underlying pdf-writer implementation.
    ///
    /// Object numbers are allocated in a fixed order and nothing time-dependent is written
    /// unless [Info::creation_date] is set, so writing equal documents yields equal bytes.
    pub fn write<W: Write>(&self, mut w: W) -> Result<(), PDFError> {
        let mut refs = ObjectReferences::new();

        let catalog_id = refs.gen(RefType::Catalog);
        let page_tree_id = refs.gen(RefType::PageTree);

        let mut writer = Pdf::new();
        if let Some(info) = &self.info {
            info.write(&mut refs, &mut writer);
        }

        let page_refs: Vec<Ref> = (0..self.page_order.len())
            .map(|i| refs.gen(RefType::Page(i)))
            .collect();

        writer
            .pages(page_tree_id)
            .count(page_refs.len() as i32)
            .kids(page_refs);

        for font in StandardFont::ALL {
            font.write(&mut refs, &mut writer);
        }

        for (page_index, id) in self.page_order.iter().enumerate() {
            let page = self.pages.get(*id).ok_or(PDFError::PageMissing)?;
            page.write(&mut refs, page_index, &mut writer)?;
        }

        let outlines_id = if self.outline.is_empty() {
            None
        } else {
            self.outline.write(&mut refs, &mut writer);
            refs.get(RefType::Outlines)
        };

        let mut catalog = writer.catalog(catalog_id);
        catalog.pages(page_tree_id);
        if let Some(outlines_id) = outlines_id {
            catalog.outlines(outlines_id);
        }
        catalog.finish();

        w.write_all(writer.finish().as_slice()).map_err(Into::into)
    }

    /// Render the document to an in-memory buffer
    pub fn to_bytes(&self) -> Result<Vec<u8>, PDFError> {
        let mut out = Vec::new();
        self.write(&mut out)?;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Margins;
    use crate::pagesize::A4;

    #[test]
    fn writes_a_pdf_with_every_page() {
        let mut doc = Document::default();
        doc.add_page(Page::new(A4, Some(Margins::all(Pt(50.0)))));
        doc.add_page(Page::new(A4, None));
        doc.add_bookmark(1, Pt(700.0), "Second");

        let bytes = doc.to_bytes().unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
        let text = String::from_utf8_lossy(&bytes);
        assert_eq!(text.matches("/MediaBox").count(), 2);
        assert!(text.contains("/BaseFont /Helvetica-Bold"));
        assert!(text.contains("/Outlines"));
        assert!(!text.contains("/CreationDate"));
    }

    #[test]
    fn writing_is_deterministic() {
        let build = || {
            let mut doc = Document::default();
            doc.set_info(Info::new().title("Same").clone());
            doc.add_page(Page::new(A4, None));
            doc.to_bytes().unwrap()
        };
        assert_eq!(build(), build());
    }

    #[test]
    fn creation_date_is_written_only_when_set() {
        let created = chrono::DateTime::parse_from_rfc3339("2024-03-01T09:30:00+02:00").unwrap();
        let mut doc = Document::default();
        doc.set_info(Info::new().title("Dated").creation_date(created).clone());
        doc.add_page(Page::new(A4, None));

        let bytes = doc.to_bytes().unwrap();
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("/CreationDate (D:20240301093000"));
    }

    #[test]
    fn page_lookup_follows_page_order() {
        let mut doc = Document::default();
        doc.add_page(Page::new(A4, None));
        assert!(doc.page(0).is_some());
        assert!(doc.page(1).is_none());
        assert_eq!(doc.pages_in_order().count(), 1);
    }
}
