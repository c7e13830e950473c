//! Screening rules mapping an answer record to follow-up referrals.

mod referral;
mod rules;

pub use referral::{ALL_CLEAR, Domain, Referral, ScreeningReport};
pub use rules::evaluate;
