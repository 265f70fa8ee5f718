use crate::error::{Error, Result};
use lopdf::{Document, Object, ObjectId};
use std::io;
use std::path::Path;

/// Wrapper around a loaded `lopdf::Document`.
#[derive(Debug)]
pub struct PdfDocument {
    pub doc: Document,
}

impl PdfDocument {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let doc = Document::load(&path).map_err(|source| Error::Load {
            path: path.as_ref().to_path_buf(),
            source,
        })?;
        Ok(PdfDocument { doc })
    }

    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Leaf page object ids in document order.
    pub fn page_ids(&self) -> Vec<ObjectId> {
        self.doc.get_pages().into_values().collect()
    }

    /// Rebuild the page tree so its leaf pages appear in `order`.
    ///
    /// The tree comes out flat: every page becomes a direct child of the
    /// root `Pages` node, and orphaned interior nodes are pruned.
    pub fn apply_order(&mut self, order: &[ObjectId]) -> Result<()> {
        let root_id = self.pages_root()?;

        let kids: Vec<Object> = order.iter().map(|&id| Object::Reference(id)).collect();
        let pages = self
            .doc
            .get_dictionary_mut(root_id)
            .map_err(|source| processing("page tree root is not a dictionary", source))?;
        pages.set("Kids", Object::Array(kids));
        pages.set("Count", Object::Integer(order.len() as i64));

        for &page_id in order {
            let page = self.doc.get_dictionary_mut(page_id).map_err(|source| {
                processing(format!("page object {page_id:?} is not a dictionary"), source)
            })?;
            page.set("Parent", Object::Reference(root_id));
        }

        self.doc.renumber_objects();
        let _ = self.doc.prune_objects();
        Ok(())
    }

    /// Write the document to a temporary file beside `path`, then rename it
    /// into place, so a failed save never leaves a truncated destination.
    pub fn save<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let write_error = |source: io::Error| Error::Write {
            path: path.to_path_buf(),
            source,
        };

        let mut staged = tempfile::NamedTempFile::new_in(dir).map_err(write_error)?;
        self.doc
            .save_to(&mut staged)
            .map_err(|e| write_error(io::Error::new(io::ErrorKind::Other, e)))?;
        staged.persist(path).map_err(|e| write_error(e.error))?;
        Ok(())
    }

    /// Metadata from the document information dictionary.
    pub fn info(&self) -> PdfInfo {
        let mut info = PdfInfo {
            page_count: self.page_count(),
            ..PdfInfo::default()
        };

        if let Ok(Object::Reference(id)) = self.doc.trailer.get(b"Info") {
            if let Ok(Object::Dictionary(dict)) = self.doc.get_object(*id) {
                info.title = text_entry(dict, b"Title");
                info.author = text_entry(dict, b"Author");
                info.producer = text_entry(dict, b"Producer");
                info.creation_date = text_entry(dict, b"CreationDate");
                info.mod_date = text_entry(dict, b"ModDate");
            }
        }

        info
    }

    fn pages_root(&self) -> Result<ObjectId> {
        let catalog = self
            .doc
            .catalog()
            .map_err(|source| processing("document has no catalog", source))?;
        match catalog.get(b"Pages") {
            Ok(Object::Reference(id)) => Ok(*id),
            _ => Err(Error::Processing {
                reason: "catalog has no /Pages reference".into(),
                source: None,
            }),
        }
    }
}

fn processing(reason: impl Into<String>, source: lopdf::Error) -> Error {
    Error::Processing {
        reason: reason.into(),
        source: Some(source),
    }
}

#[derive(Debug, Default, Clone)]
pub struct PdfInfo {
    pub page_count: usize,
    pub title: Option<String>,
    pub author: Option<String>,
    pub producer: Option<String>,
    pub creation_date: Option<String>,
    pub mod_date: Option<String>,
}

fn text_entry(dict: &lopdf::Dictionary, key: &[u8]) -> Option<String> {
    match dict.get(key) {
        Ok(Object::String(bytes, _)) => Some(decode_text(bytes)),
        _ => None,
    }
}

fn decode_text(bytes: &[u8]) -> String {
    // UTF-16BE with BOM, otherwise PDFDocEncoding read as Latin-1
    if let [0xFE, 0xFF, rest @ ..] = bytes {
        let units: Vec<u16> = rest
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect();
        String::from_utf16_lossy(&units)
    } else {
        bytes.iter().map(|&b| b as char).collect()
    }
}
