//! Reply Assistant - AI-drafted replies to customer support emails
//!
//! Support staff paste a customer email, optionally pick a saved reply
//! template, and get back a draft written under a fixed support-policy prompt.
//! Drafts can be revised turn by turn, and a two-stage "technical" mode lets a
//! reasoning model draft before a chat model rewrites for the customer.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
