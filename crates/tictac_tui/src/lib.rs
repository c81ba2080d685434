//! Terminal client for server-hosted tic-tac-toe.
//!
//! The server owns authoritative game state; this client renders it,
//! validates moves locally before any round-trip, and reconciles whatever
//! the server sends back into the UI.
//!
//! The pieces:
//!
//! - [`model::BoardModel`] — single source of truth for the game state,
//!   with legality checking and async persistence through a
//!   [`store::GameStore`].
//! - [`view::BoardView`] — render state derived from the model (status
//!   banner, winning squares) plus the click-target registry.
//! - [`app::App`] — the one controller owning the model/view pair and
//!   routing input to named handlers.
//! - [`store::RestStore`] — reqwest client for the server's `/game`
//!   resource.
//! - [`ui`] / [`input`] — ratatui rendering and key bindings.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod input;
pub mod model;
pub mod store;
pub mod ui;
pub mod view;
