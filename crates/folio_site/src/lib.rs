//! Folio Site
//!
//! The portfolio page itself: content, per-section choreography, a
//! headless demo layout, and the [`PortfolioApp`] shell that wires the
//! orchestration stack to host events.

pub mod app;
pub mod content;
pub mod demo;
pub mod sections;

pub use app::{PortfolioApp, SiteError};
