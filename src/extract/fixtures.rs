// src/extract/fixtures.rs
// Test-only helpers that build small PDFs with link annotations in memory.

use lopdf::{dictionary, Dictionary, Document, Object, ObjectId};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// One entry of a page's /Annots array
pub(crate) struct Annot {
    dict: Dictionary,
    action: Option<Dictionary>,
    action_by_reference: bool,
    inline: bool,
}

impl Annot {
    /// Store the annotation dictionary directly in /Annots instead of by reference
    pub(crate) fn inline(mut self) -> Self {
        self.inline = true;
        self
    }

    /// Store the /A action as its own indirect object
    pub(crate) fn action_by_reference(mut self) -> Self {
        self.action_by_reference = true;
        self
    }
}

fn link_annot(action: Option<Dictionary>) -> Annot {
    Annot {
        dict: dictionary! {
            "Type" => "Annot",
            "Subtype" => "Link",
            "Rect" => vec![72.into(), 700.into(), 200.into(), 715.into()],
        },
        action,
        action_by_reference: false,
        inline: false,
    }
}

/// A Link annotation with a /URI action
pub(crate) fn uri_annotation(uri: &str) -> Annot {
    link_annot(Some(dictionary! {
        "S" => "URI",
        "URI" => Object::string_literal(uri),
    }))
}

/// A Link annotation whose /URI is raw bytes (e.g. UTF-16BE with BOM)
pub(crate) fn uri_annotation_bytes(bytes: Vec<u8>) -> Annot {
    link_annot(Some(dictionary! {
        "S" => "URI",
        "URI" => Object::String(bytes, lopdf::StringFormat::Hexadecimal),
    }))
}

/// An internal jump to another page, no /URI
pub(crate) fn goto_annotation() -> Annot {
    link_annot(Some(dictionary! {
        "S" => "GoTo",
        "D" => vec![Object::Name(b"Top".to_vec())],
    }))
}

/// A form field widget, which carries no action at all
pub(crate) fn widget_annotation() -> Annot {
    Annot {
        dict: dictionary! {
            "Type" => "Annot",
            "Subtype" => "Widget",
            "FT" => "Tx",
            "Rect" => vec![72.into(), 600.into(), 300.into(), 620.into()],
        },
        action: None,
        action_by_reference: false,
        inline: false,
    }
}

#[derive(Default)]
pub(crate) struct PdfBuilder {
    pages: Vec<Vec<Annot>>,
    annots_by_reference: bool,
}

impl PdfBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn page(mut self, annots: Vec<Annot>) -> Self {
        self.pages.push(annots);
        self
    }

    /// Store each page's /Annots array as an indirect object
    pub(crate) fn annots_by_reference(mut self) -> Self {
        self.annots_by_reference = true;
        self
    }

    pub(crate) fn build(self) -> Document {
        let mut doc = Document::with_version("1.5");
        let pages_id: ObjectId = doc.new_object_id();

        let mut page_ids: Vec<Object> = Vec::new();
        for annots in self.pages {
            let mut entries: Vec<Object> = Vec::new();
            for annot in annots {
                let mut dict = annot.dict;
                if let Some(action) = annot.action {
                    if annot.action_by_reference {
                        let action_id = doc.add_object(action);
                        dict.set("A", action_id);
                    } else {
                        dict.set("A", Object::Dictionary(action));
                    }
                }
                if annot.inline {
                    entries.push(Object::Dictionary(dict));
                } else {
                    entries.push(doc.add_object(dict).into());
                }
            }

            let mut page = dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            };
            if !entries.is_empty() {
                if self.annots_by_reference {
                    let annots_id = doc.add_object(Object::Array(entries));
                    page.set("Annots", annots_id);
                } else {
                    page.set("Annots", Object::Array(entries));
                }
            }
            page_ids.push(doc.add_object(page).into());
        }

        let count = page_ids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => page_ids,
                "Count" => count,
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        doc
    }

    pub(crate) fn to_bytes(self) -> Vec<u8> {
        let mut doc = self.build();
        let mut buf = Vec::new();
        doc.save_to(&mut buf).expect("failed to save test PDF");
        buf
    }

    pub(crate) fn write_temp(self) -> NamedTempFile {
        let file = tempfile::Builder::new()
            .suffix(".pdf")
            .tempfile()
            .expect("failed to create temp file");
        std::fs::write(file.path(), self.to_bytes()).expect("failed to write test PDF");
        file
    }

    pub(crate) fn write_to(self, dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, self.to_bytes()).expect("failed to write test PDF");
        path
    }
}
