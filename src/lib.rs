//! Devfolio Library
//!
//! This library provides the portfolio page: the catalog of projects,
//! technologies, and blog posts, the project filter/sort engine, viewport
//! observation with active-section tracking, and three hosts for the page
//! (a terminal UI, an HTML renderer with a web server, and a CLI).

// Module declarations
pub mod app;
pub mod branding;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod export;
pub mod logging;
pub mod models;
pub mod services;
pub mod shortcuts;
pub mod tui;
#[cfg(feature = "web")]
pub mod web;
