//! Legal document generation for the Incubazar platform.
//!
//! This crate renders startup-investment documents as paginated PDF byte
//! streams: SAFE agreements and PAS-4 private placement offer letters.
//!
//! Generation is a pure synchronous function of the input record — no I/O,
//! no shared state, safe to call concurrently. Each document is described
//! as an ordered list of styled lines ([`layout::Line`]) consumed by a
//! single rendering loop that owns the cursor and page-break logic.
//!
//! Input records are trusted as-is: numeric ranges, date formats, and
//! cross-field arithmetic (e.g. the PAS-4 total consideration) are the
//! caller's responsibility and render verbatim.

pub mod currency;
pub mod error;
pub mod layout;
pub mod templates;

pub use error::DocGenError;
pub use templates::{AgreementTerms, PrivatePlacementOffer};

use layout::{Line, LineStyle};

/// Generate a SAFE agreement PDF.
pub fn generate_safe(terms: &AgreementTerms) -> Result<Vec<u8>, DocGenError> {
    layout::render(&templates::safe::lines(terms))
}

/// Generate a PAS-4 private placement offer letter PDF.
pub fn generate_placement_offer(
    offer: &PrivatePlacementOffer,
) -> Result<Vec<u8>, DocGenError> {
    layout::render(&templates::pas4::lines(offer))
}

/// Render a SAFE agreement as plain text, for previews.
pub fn render_safe_text(terms: &AgreementTerms) -> String {
    lines_to_text(&templates::safe::lines(terms))
}

/// Render a PAS-4 offer letter as plain text, for previews.
pub fn render_placement_offer_text(offer: &PrivatePlacementOffer) -> String {
    lines_to_text(&templates::pas4::lines(offer))
}

fn lines_to_text(lines: &[Line]) -> String {
    let mut out = String::new();
    for line in lines {
        if line.style != LineStyle::Blank {
            out.push_str(&line.text);
        }
        out.push('\n');
    }
    out
}
