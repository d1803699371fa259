//! Presentational components shared by pages.

pub mod button;
pub mod card;
pub mod main_header;
