// src/lib.rs
pub mod charclass;
