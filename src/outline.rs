use pdf_writer::{Finish, Pdf, TextStr};

use crate::refs::{ObjectReferences, RefType};
use crate::units::Pt;

/// The document outline (a.k.a. bookmarks): one flat entry per section
#[derive(Default, Debug)]
pub struct Outline {
    pub entries: Vec<OutlineEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OutlineEntry {
    /// 0-based index of the output page the entry jumps to
    pub page_index: usize,
    /// Vertical position on that page the reader scrolls to
    pub top: Pt,
    pub title: String,
}

impl Outline {
    pub fn add_bookmark(&mut self, page_index: usize, top: Pt, title: String) {
        self.entries.push(OutlineEntry {
            page_index,
            top,
            title,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, writer: &mut Pdf) {
        // generate IDs for everything
        let outlines_id = refs.gen(RefType::Outlines);
        let ids: Vec<_> = (0..self.entries.len())
            .map(|i| refs.gen(RefType::OutlineEntry(i)))
            .collect();

        // write the root outline
        let mut outline = writer.outline(outlines_id);
        if let (Some(first), Some(last)) = (ids.first(), ids.last()) {
            outline.first(*first);
            outline.last(*last);
            outline.count(ids.len() as i32);
        }
        outline.finish();

        // write all our items
        for (i, entry) in self.entries.iter().enumerate() {
            let Some(page_id) = refs.get(RefType::Page(entry.page_index)) else {
                log::warn!(
                    "bookmark {:?} points at missing page {}",
                    entry.title,
                    entry.page_index
                );
                continue;
            };

            let mut item = writer.outline_item(ids[i]);
            item.parent(outlines_id);
            item.title(TextStr(entry.title.as_str()));
            if i > 0 {
                item.prev(ids[i - 1]);
            }
            if i + 1 < ids.len() {
                item.next(ids[i + 1]);
            }
            item.dest().page(page_id).xyz(0.0, entry.top.0, None);
        }
    }
}
