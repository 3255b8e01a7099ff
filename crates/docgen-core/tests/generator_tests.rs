//! End-to-end tests for document generation.
//!
//! Generated PDFs are parsed back with `lopdf` (page structure) and
//! `pdf-extract` (text content). Extracted text is compared with all
//! whitespace removed, since extraction re-derives word breaks from glyph
//! positions.
//!
//! Note on pagination: unlike the web prototype this generator replaced,
//! overflow lines flow onto the next page instead of being written to a
//! stale page reference and lost; the overflow assertions below document
//! that fix.

use docgen_core::{
    generate_placement_offer, generate_safe, render_placement_offer_text, AgreementTerms,
    PrivatePlacementOffer,
};

fn sample_terms() -> AgreementTerms {
    AgreementTerms {
        company_name: "Acme Pvt Ltd".into(),
        founder_name: "A. Singh".into(),
        founder_email: "a.singh@acme.in".into(),
        investor_name: "B. Rao".into(),
        investor_email: "b.rao@example.in".into(),
        investment_amount: 1_000_000.0,
        valuation_cap: 10_000_000.0,
        discount_rate: 20.0,
        date: "2025-01-01".into(),
        company_address: "14 MG Road, Bengaluru".into(),
        investor_address: "7 Marine Drive, Mumbai".into(),
    }
}

fn sample_offer() -> PrivatePlacementOffer {
    PrivatePlacementOffer {
        company_name: "Acme Pvt Ltd".into(),
        company_address: "14 MG Road, Bengaluru".into(),
        incorporation_number: "U72900KA2023PTC123456".into(),
        date_of_incorporation: "2023-01-01".into(),
        authorized_capital: 10_000_000.0,
        paid_up_capital: 1_000_000.0,
        investor_name: "B. Rao".into(),
        investor_address: "7 Marine Drive, Mumbai".into(),
        investor_pan: "ABCDE1234F".into(),
        investment_amount: 500_000.0,
        number_of_shares: 50_000,
        face_value: 10.0,
        premium: 90.0,
        total_consideration: 5_000_000.0,
        date: "2025-01-01".into(),
        place: "Mumbai".into(),
    }
}

fn extracted(bytes: &[u8]) -> String {
    pdf_extract::extract_text_from_mem(bytes).unwrap()
}

/// Extracted text with all whitespace removed.
fn squashed(bytes: &[u8]) -> String {
    extracted(bytes).chars().filter(|c| !c.is_whitespace()).collect()
}

fn page_count(bytes: &[u8]) -> usize {
    lopdf::Document::load_mem(bytes).unwrap().get_pages().len()
}

#[test]
fn test_safe_renders_every_input_field() {
    let bytes = generate_safe(&sample_terms()).unwrap();
    let text = squashed(&bytes);

    assert!(text.contains("AcmePvtLtd"));
    assert!(text.contains("A.Singh"));
    assert!(text.contains("a.singh@acme.in"));
    assert!(text.contains("B.Rao"));
    assert!(text.contains("b.rao@example.in"));
    assert!(text.contains("Rs.10,00,000"));
    assert!(text.contains("Rs.1,00,00,000"));
    assert!(text.contains("20%"));
    assert!(text.contains("2025-01-01"));
    assert!(text.contains("14MGRoad,Bengaluru"));
    assert!(text.contains("7MarineDrive,Mumbai"));
}

#[test]
fn test_safe_signature_blocks_appear_once_per_party() {
    let bytes = generate_safe(&sample_terms()).unwrap();
    let text = squashed(&bytes);

    assert_eq!(text.matches("COMPANY:").count(), 1);
    assert_eq!(text.matches("INVESTOR:").count(), 1);
}

#[test]
fn test_safe_spans_multiple_pages_and_keeps_overflow_content() {
    let bytes = generate_safe(&sample_terms()).unwrap();
    assert!(page_count(&bytes) > 1);

    // The signature block sits past the first page break
    let text = squashed(&bytes);
    assert!(text.contains("INWITNESSWHEREOF"));
    assert!(text.contains("INVESTOR:"));
}

#[test]
fn test_placement_offer_renders_every_input_field() {
    let bytes = generate_placement_offer(&sample_offer()).unwrap();
    let text = squashed(&bytes);

    assert!(text.contains("FORMPAS-4"));
    assert!(text.contains("AcmePvtLtd"));
    assert!(text.contains("U72900KA2023PTC123456"));
    assert!(text.contains("2023-01-01"));
    assert!(text.contains("Rs.1,00,00,000"));
    assert!(text.contains("Rs.10,00,000"));
    assert!(text.contains("B.Rao"));
    assert!(text.contains("ABCDE1234F"));
    assert!(text.contains("Rs.5,00,000"));
    assert!(text.contains("50,000"));
    assert!(text.contains("Rs.10"));
    assert!(text.contains("Rs.90"));
    assert!(text.contains("Mumbai"));
}

#[test]
fn test_placement_offer_statutory_terms_and_citations() {
    let bytes = generate_placement_offer(&sample_offer()).unwrap();
    let text = squashed(&bytes);

    assert!(text.contains("maximumof200persons"));
    assert!(text.contains("residentofIndia"));
    assert!(text.contains("PANandotherKYCdocuments"));
    assert!(text.contains("Section42oftheCompaniesAct,2013"));
    assert!(text.contains("Rule14"));
    assert!(text.contains("SEBI"));
}

#[test]
fn test_placement_offer_total_is_rendered_verbatim() {
    // 50,000 shares x (10 + 90) = 5,000,000, but the caller supplies a
    // different total. The generator must not reject or correct it.
    let mut offer = sample_offer();
    offer.total_consideration = 4_200_000.0;

    let bytes = generate_placement_offer(&offer).unwrap();
    let text = squashed(&bytes);
    assert!(text.contains("TotalConsideration:Rs.42,00,000"));

    let preview = render_placement_offer_text(&offer);
    assert!(preview.contains("Total Consideration: Rs. 42,00,000"));
}

#[test]
fn test_generation_is_deterministic() {
    let terms = sample_terms();
    let a = generate_safe(&terms).unwrap();
    let b = generate_safe(&terms).unwrap();
    assert_eq!(extracted(&a), extracted(&b));

    let offer = sample_offer();
    let a = generate_placement_offer(&offer).unwrap();
    let b = generate_placement_offer(&offer).unwrap();
    assert_eq!(extracted(&a), extracted(&b));
}

#[test]
fn test_empty_optional_fields_do_not_fail_generation() {
    let mut terms = sample_terms();
    terms.company_address = String::new();
    terms.investor_address = String::new();

    let bytes = generate_safe(&terms).unwrap();
    let text = squashed(&bytes);
    assert!(text.contains("RegisteredOffice:"));
    assert!(text.contains("AcmePvtLtd"));
}
