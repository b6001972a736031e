//! Command-line front end for the study tutor core.

pub mod cli;
pub mod turn;
