//! Record kinds of the portal, one module per kind.
//!
//! Index prefix gives the menu order; `common` holds what they share.

pub mod common;

pub mod a001_lead;
pub mod a002_candidate;
pub mod a003_applicant;
pub mod a004_member;
pub mod a005_employee;
pub mod a006_invoice;
pub mod a007_campaign;
pub mod a008_legal_contract;
pub mod a009_affiliate;
pub mod a010_initiative;
pub mod a011_it_ticket;
