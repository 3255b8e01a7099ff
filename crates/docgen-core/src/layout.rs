//! Line-list PDF layout engine.
//!
//! A document is an ordered list of [`Line`] records consumed by a single
//! rendering loop that owns the vertical cursor and page-break logic. Each
//! line is drawn at the current cursor position with a font chosen by its
//! style, then the cursor advances by a fixed line height. When the cursor
//! crosses the near-bottom threshold the current content stream is sealed
//! into a page and writing continues at the top margin of a fresh page, so
//! overflow lines are never dropped.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, Stream, StringFormat};

use crate::error::DocGenError;

/// A4 page geometry in PDF points.
pub const PAGE_WIDTH: f32 = 595.28;
pub const PAGE_HEIGHT: f32 = 841.89;

/// Uniform page margin.
pub const MARGIN: f32 = 50.0;

/// Vertical advance per line.
pub const LINE_HEIGHT: f32 = 20.0;

/// A new page is started once the cursor drops below this y-coordinate.
pub const BREAK_THRESHOLD: f32 = 100.0;

const FONT_REGULAR: &str = "F1";
const FONT_BOLD: &str = "F2";

/// Visual treatment of a single line of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    /// Document title, bold 16pt.
    Title,
    /// Section heading, bold 12pt.
    Heading,
    /// Numbered clause opener, bold 12pt.
    Clause,
    /// Regular text, 12pt.
    Body,
    /// Vertical spacing only, nothing drawn.
    Blank,
}

/// One line of document content.
#[derive(Debug, Clone)]
pub struct Line {
    pub text: String,
    pub style: LineStyle,
}

impl Line {
    pub fn title(text: impl Into<String>) -> Self {
        Self { text: text.into(), style: LineStyle::Title }
    }

    pub fn heading(text: impl Into<String>) -> Self {
        Self { text: text.into(), style: LineStyle::Heading }
    }

    pub fn clause(text: impl Into<String>) -> Self {
        Self { text: text.into(), style: LineStyle::Clause }
    }

    pub fn body(text: impl Into<String>) -> Self {
        Self { text: text.into(), style: LineStyle::Body }
    }

    pub fn blank() -> Self {
        Self { text: String::new(), style: LineStyle::Blank }
    }

    fn font(&self) -> (&'static str, f32) {
        match self.style {
            LineStyle::Title => (FONT_BOLD, 16.0),
            LineStyle::Heading | LineStyle::Clause => (FONT_BOLD, 12.0),
            LineStyle::Body | LineStyle::Blank => (FONT_REGULAR, 12.0),
        }
    }
}

/// Render a line list into PDF bytes.
///
/// Pure function of its input: the same lines always produce the same page
/// content. Fails only if the PDF backend fails to encode or serialize.
pub fn render(lines: &[Line]) -> Result<Vec<u8>, DocGenError> {
    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();

    let regular_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let bold_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica-Bold",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            FONT_REGULAR => Object::Reference(regular_id),
            FONT_BOLD => Object::Reference(bold_id),
        },
    });

    let mut page_ids = Vec::new();
    let mut operations: Vec<Operation> = Vec::new();
    let mut cursor = PAGE_HEIGHT - MARGIN;

    for line in lines {
        if cursor < BREAK_THRESHOLD {
            seal_page(&mut doc, pages_id, resources_id, &mut operations, &mut page_ids)?;
            cursor = PAGE_HEIGHT - MARGIN;
        }

        if line.style != LineStyle::Blank && !line.text.is_empty() {
            let (font, size) = line.font();
            operations.extend([
                Operation::new("BT", vec![]),
                Operation::new(
                    "Tf",
                    vec![Object::Name(font.into()), Object::Real(size)],
                ),
                Operation::new(
                    "Td",
                    vec![Object::Real(MARGIN), Object::Real(cursor)],
                ),
                Operation::new(
                    "Tj",
                    vec![Object::String(
                        encode_win_ansi(&line.text),
                        StringFormat::Literal,
                    )],
                ),
                Operation::new("ET", vec![]),
            ]);
        }

        cursor -= LINE_HEIGHT;
    }

    // Seal the final page; an empty line list still yields one blank page
    if !operations.is_empty() || page_ids.is_empty() {
        seal_page(&mut doc, pages_id, resources_id, &mut operations, &mut page_ids)?;
    }

    let pages = dictionary! {
        "Type" => "Pages",
        "Count" => page_ids.len() as i64,
        "Kids" => page_ids.iter().map(|id| Object::Reference(*id)).collect::<Vec<_>>(),
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => Object::Reference(pages_id),
    });
    doc.trailer.set("Root", catalog_id);
    doc.compress();

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer)
        .map_err(|e| DocGenError::Render(format!("Save failed: {}", e)))?;

    Ok(buffer)
}

fn seal_page(
    doc: &mut Document,
    pages_id: lopdf::ObjectId,
    resources_id: lopdf::ObjectId,
    operations: &mut Vec<Operation>,
    page_ids: &mut Vec<lopdf::ObjectId>,
) -> Result<(), DocGenError> {
    let content = Content { operations: std::mem::take(operations) };
    let content_id = doc.add_object(Stream::new(Dictionary::new(), content.encode()?));

    let page = dictionary! {
        "Type" => "Page",
        "Parent" => Object::Reference(pages_id),
        "MediaBox" => vec![
            Object::Real(0.0),
            Object::Real(0.0),
            Object::Real(PAGE_WIDTH),
            Object::Real(PAGE_HEIGHT),
        ],
        "Resources" => Object::Reference(resources_id),
        "Contents" => Object::Reference(content_id),
    };
    page_ids.push(doc.add_object(page));
    Ok(())
}

/// Encode text for a WinAnsi-encoded standard font. Characters outside
/// Latin-1 have no WinAnsi code point and are replaced with `?`.
fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| if (c as u32) <= 0xFF { c as u32 as u8 } else { b'?' })
        .collect()
}
