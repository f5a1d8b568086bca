//! Networking for the contact form.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the submitted fields and the form backend's error payload;
//! `form_client` performs the single POST per attempt.

pub mod form_client;
pub mod types;
