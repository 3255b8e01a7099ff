//! SAFE agreement template.
//!
//! Maps an [`AgreementTerms`] record onto the fixed line list for a Simple
//! Agreement for Future Equity under Indian law. The generator performs no
//! validation of the record; callers are responsible for supplying complete,
//! consistent terms.

use serde::{Deserialize, Serialize};

use crate::currency::{format_inr, format_percent};
use crate::layout::Line;

/// Input record for a SAFE agreement.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgreementTerms {
    pub company_name: String,
    pub founder_name: String,
    pub founder_email: String,
    pub investor_name: String,
    pub investor_email: String,
    pub investment_amount: f64,
    pub valuation_cap: f64,
    pub discount_rate: f64,
    pub date: String,
    pub company_address: String,
    pub investor_address: String,
}

/// Build the ordered line list for a SAFE agreement.
pub fn lines(terms: &AgreementTerms) -> Vec<Line> {
    let mut out = vec![
        Line::title("SIMPLE AGREEMENT FOR FUTURE EQUITY (SAFE)"),
        Line::blank(),
        Line::body(format!("Company: {}", terms.company_name)),
        Line::body(format!(
            "Founder: {} ({})",
            terms.founder_name, terms.founder_email
        )),
        Line::body(format!(
            "Investor: {} ({})",
            terms.investor_name, terms.investor_email
        )),
        Line::body(format!("Registered Office: {}", terms.company_address)),
        Line::body(format!("Investor Address: {}", terms.investor_address)),
        Line::blank(),
        Line::heading("INVESTMENT DETAILS:"),
        Line::body(format!(
            "Investment Amount: {}",
            format_inr(terms.investment_amount)
        )),
        Line::body(format!("Valuation Cap: {}", format_inr(terms.valuation_cap))),
        Line::body(format!(
            "Discount Rate: {}",
            format_percent(terms.discount_rate)
        )),
        Line::blank(),
        Line::body(format!(
            "This Agreement is entered into on {} between the Company,",
            terms.date
        )),
        Line::body("incorporated under the Companies Act, 2013, and the Investor."),
        Line::blank(),
        Line::clause("1. INVESTMENT"),
        Line::body("The Investor hereby agrees to invest the Investment Amount in the Company"),
        Line::body("in exchange for the right to receive equity securities of the Company upon"),
        Line::body("the occurrence of a Liquidity Event."),
        Line::blank(),
        Line::clause("2. VALUATION CAP AND DISCOUNT"),
        Line::body("The conversion of this SAFE shall be subject to:"),
    ];
    out.push(Line::body(format!(
        "- Valuation Cap: {}",
        format_inr(terms.valuation_cap)
    )));
    out.push(Line::body(format!(
        "- Discount Rate: {}",
        format_percent(terms.discount_rate)
    )));
    out.extend([
        Line::blank(),
        Line::clause("3. CONVERSION"),
        Line::body("This SAFE shall convert into equity securities of the Company upon the"),
        Line::body("occurrence of a Liquidity Event, which shall be the earlier of:"),
        Line::body("(a) A sale of the Company;"),
        Line::body("(b) An IPO of the Company;"),
        Line::body("(c) A merger or acquisition of the Company."),
        Line::blank(),
        Line::clause("4. GOVERNING LAW"),
        Line::body("This Agreement shall be governed by and construed in accordance with the"),
        Line::body("laws of India."),
        Line::blank(),
        Line::clause("5. ENTIRE AGREEMENT"),
        Line::body("This Agreement constitutes the entire agreement between the parties and"),
        Line::body("supersedes all prior negotiations, representations, or agreements."),
        Line::blank(),
        Line::heading("IN WITNESS WHEREOF, the parties have executed this Agreement:"),
        Line::blank(),
        Line::heading("COMPANY:"),
        Line::body(terms.founder_name.clone()),
        Line::body(format!("Founder, {}", terms.company_name)),
        Line::body(format!("Date: {}", terms.date)),
        Line::blank(),
        Line::heading("INVESTOR:"),
        Line::body(terms.investor_name.clone()),
        Line::body(format!("Date: {}", terms.date)),
    ]);
    out
}
