pub mod pas4;
pub mod safe;

pub use pas4::PrivatePlacementOffer;
pub use safe::AgreementTerms;
