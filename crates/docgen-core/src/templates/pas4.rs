//! PAS-4 private placement offer letter template.
//!
//! Form PAS-4 is the statutory offer letter for private placements under
//! Section 42 of the Companies Act, 2013. The supplied record is rendered
//! verbatim; in particular `total_consideration` is NOT recomputed from
//! `number_of_shares x (face_value + premium)` — that invariant belongs to
//! the caller.

use serde::{Deserialize, Serialize};

use crate::currency::{format_count, format_inr};
use crate::layout::Line;

/// Input record for a PAS-4 offer letter.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivatePlacementOffer {
    pub company_name: String,
    pub company_address: String,
    pub incorporation_number: String,
    pub date_of_incorporation: String,
    pub authorized_capital: f64,
    pub paid_up_capital: f64,
    pub investor_name: String,
    pub investor_address: String,
    pub investor_pan: String,
    pub investment_amount: f64,
    pub number_of_shares: u64,
    pub face_value: f64,
    pub premium: f64,
    pub total_consideration: f64,
    pub date: String,
    pub place: String,
}

/// Build the ordered line list for a PAS-4 offer letter.
pub fn lines(offer: &PrivatePlacementOffer) -> Vec<Line> {
    let mut out = vec![
        Line::title("FORM PAS-4"),
        Line::heading("PRIVATE PLACEMENT OFFER LETTER"),
        Line::blank(),
        Line::body("To,"),
        Line::body(offer.investor_name.clone()),
        Line::body(offer.investor_address.clone()),
        Line::blank(),
        Line::body("Subject: Private Placement of Equity Shares"),
        Line::blank(),
        Line::body("We are pleased to offer you the opportunity to subscribe to equity shares of"),
        Line::body(format!(
            "{} through a private placement in accordance with",
            offer.company_name
        )),
        Line::body("Section 42 of the Companies Act, 2013."),
        Line::blank(),
        Line::heading("COMPANY DETAILS:"),
        Line::body(format!("Company Name: {}", offer.company_name)),
        Line::body(format!("CIN: {}", offer.incorporation_number)),
        Line::body(format!("Registered Office: {}", offer.company_address)),
        Line::body(format!(
            "Date of Incorporation: {}",
            offer.date_of_incorporation
        )),
        Line::body(format!(
            "Authorized Capital: {}",
            format_inr(offer.authorized_capital)
        )),
        Line::body(format!(
            "Paid-up Capital: {}",
            format_inr(offer.paid_up_capital)
        )),
        Line::blank(),
        Line::heading("INVESTMENT DETAILS:"),
        Line::body(format!(
            "Investment Amount: {}",
            format_inr(offer.investment_amount)
        )),
        Line::body(format!(
            "Number of Shares: {}",
            format_count(offer.number_of_shares)
        )),
        Line::body(format!(
            "Face Value per Share: {}",
            format_inr(offer.face_value)
        )),
        Line::body(format!("Premium per Share: {}", format_inr(offer.premium))),
        Line::body(format!(
            "Total Consideration: {}",
            format_inr(offer.total_consideration)
        )),
        Line::blank(),
        Line::heading("TERMS AND CONDITIONS:"),
        Line::body("1. This offer is made to a maximum of 200 persons in aggregate in a"),
        Line::body("   financial year."),
    ];
    out.push(Line::body(format!(
        "2. The minimum investment amount is {}.",
        format_inr(offer.investment_amount)
    )));
    out.push(Line::body(format!(
        "3. The shares will be issued at a premium of {} per share.",
        format_inr(offer.premium)
    )));
    out.extend([
        Line::body("4. The investor must be a resident of India."),
        Line::body("5. The investor must provide PAN and other KYC documents."),
        Line::blank(),
        Line::heading("COMPLIANCE:"),
        Line::body("This private placement is being made in compliance with:"),
        Line::body("- Section 42 of the Companies Act, 2013"),
        Line::body("- Rule 14 of the Companies (Prospectus and Allotment of Securities)"),
        Line::body("  Rules, 2014"),
        Line::body("- SEBI (Issue of Capital and Disclosure Requirements) Regulations, 2018"),
        Line::blank(),
        Line::heading("RISK FACTORS:"),
        Line::body("Investment in equity shares involves risk. The investor should carefully"),
        Line::body("consider the risk factors before making an investment decision."),
        Line::blank(),
        Line::body("If you wish to accept this offer, please sign and return this letter along"),
        Line::body("with the subscription amount and required documents within 15 days from"),
        Line::body("the date of this letter. This offer is valid for 15 days."),
        Line::blank(),
        Line::body("Yours faithfully,"),
        Line::body(format!("For {}", offer.company_name)),
        Line::body("Authorized Signatory"),
        Line::body(format!("Date: {}", offer.date)),
        Line::body(format!("Place: {}", offer.place)),
        Line::blank(),
        Line::heading("INVESTOR ACCEPTANCE:"),
        Line::body("I/We hereby accept the above offer and agree to subscribe to the equity"),
        Line::body("shares on the terms and conditions mentioned above."),
        Line::blank(),
        Line::body(format!("Name: {}", offer.investor_name)),
        Line::body(format!("Address: {}", offer.investor_address)),
        Line::body(format!("PAN: {}", offer.investor_pan)),
    ]);
    out.push(Line::body(format!(
        "Investment Amount: {}",
        format_inr(offer.investment_amount)
    )));
    out.extend([
        Line::blank(),
        Line::body("Signature: _________________"),
        Line::body(format!("Date: {}", offer.date)),
    ]);
    out
}
