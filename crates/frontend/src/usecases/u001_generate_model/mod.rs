//! u001: prompt-to-model chat
//!
//! Structure:
//! - api.rs: request client for the generation service
//! - message_store.rs: ordered chat history
//! - session.rs: submission protocol (single flight, typing indicator)
//! - viewer.rs: lazy loading of the 3D viewer component
//! - preview.rs: preview surface state
//! - view_model.rs: GenerateModelVm with RwSignals
//! - view.rs, message_card.rs, preview_modal.rs: components

pub mod api;
pub mod message_store;
pub mod preview;
pub mod session;
pub mod viewer;

mod message_card;
mod preview_modal;
mod view;
mod view_model;

pub use view::GenerateModelView;
pub use view_model::GenerateModelVm;
