//! # IO Module
//!
//! Translation layer between the outside world and the domain. Currently
//! the only interface is the JSON REST API.

pub mod rest;
