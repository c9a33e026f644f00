//! Weather Dashboard - look up current conditions and keep favorite cities
//!
//! The binary wires these modules into a tui-dispatch runtime; the library
//! exposes them for testing.

pub mod action;
pub mod api;
pub mod components;
pub mod config;
pub mod effect;
pub mod favorites;
pub mod icons;
pub mod logging;
pub mod reducer;
pub mod state;
pub mod storage;
pub mod view;
