//! Work-calendar and service score engine for Turkish Ministry of Education
//! service point ("hizmet puanı") calculations.
//!
//! The core is the [`calendar`] module: exception ranges are resolved into
//! three disjoint date sets and business days are counted against them. The
//! [`calculation`] module builds score reports on top of it, and [`api`]
//! exposes both over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod calendar;
pub mod config;
pub mod error;
pub mod models;
