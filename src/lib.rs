//! Page enhancer for a Club World Cup tournament hub: fetches scorers,
//! group standings and knockout fixtures (with fixed fallbacks), renders
//! HTML fragments into named mount points of an explicit page model, and
//! drives the group/knockout phase switch.

pub mod config;
pub mod fallback;
pub mod fixtures_fetch;
pub mod fixtures_render;
pub mod html;
pub mod http_client;
pub mod init;
pub mod interactions;
pub mod page;
pub mod phase;
pub mod scorer_render;
pub mod scorers_fetch;
pub mod standings_fetch;
pub mod standings_render;
pub mod state;
