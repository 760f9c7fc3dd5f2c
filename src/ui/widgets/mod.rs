// src/ui/widgets/mod.rs

pub mod disclaimer_popup;
pub mod footer;
pub mod input;
pub mod menu;
pub mod results;
