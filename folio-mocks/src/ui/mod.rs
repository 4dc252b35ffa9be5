//! Shared UI components for folio-mocks

mod link_card;

pub use link_card::LinkCard;
