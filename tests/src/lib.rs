//! Cross-crate scenarios for the status engine: CSV rows in, observer events
//! and store contents out.
#![cfg(test)]

mod status;
mod support;
