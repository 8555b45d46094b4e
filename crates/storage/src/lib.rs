#![warn(clippy::pedantic)]

pub mod json_file;
pub mod memory;
