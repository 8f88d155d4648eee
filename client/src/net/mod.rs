//! Networking helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` loads the catalog over REST. There is no other traffic: cart and
//! search never leave the browser.

pub mod api;
