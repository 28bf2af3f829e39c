//! UI module - thin frontends over the session channels

pub mod console;
