//! Core library for code-verifier-gen
pub mod digest;
pub mod generator;
pub mod verifier;
