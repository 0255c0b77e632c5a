//! Domain types for the contact flow.
//!
//! The only entity is the ephemeral [`Inquiry`], built per request from the
//! posted form fields and discarded once the response is sent.

pub mod inquiry;

pub use inquiry::{ContactForm, Inquiry, InvalidInquiry};
