//! Request types for the document generation API

use docgen_core::{AgreementTerms, PrivatePlacementOffer};
use serde::Deserialize;

/// A document generation request, tagged by document type.
///
/// ```json
/// {"type": "Safe", "companyName": "...", "investmentAmount": 500000, ...}
/// {"type": "Pas4", "companyName": "...", "numberOfShares": 50000, ...}
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum GenerateRequest {
    Safe(AgreementTerms),
    Pas4(PrivatePlacementOffer),
}

impl GenerateRequest {
    /// Short document kind used in log lines and download filenames.
    pub fn kind(&self) -> &'static str {
        match self {
            GenerateRequest::Safe(_) => "safe",
            GenerateRequest::Pas4(_) => "pas4",
        }
    }
}
