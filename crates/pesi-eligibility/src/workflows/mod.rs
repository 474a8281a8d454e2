pub mod eligibility;
pub mod vouchers;
