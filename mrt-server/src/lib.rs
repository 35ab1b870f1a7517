//! MRT Jakarta station directory server.
//!
//! Proxies the Jakarta MRT website's station feed and reshapes it into a
//! small JSON API: the station list, upcoming departures, fare estimates
//! and facilities for a station.

pub mod config;
pub mod directory;
pub mod domain;
pub mod upstream;
pub mod web;
