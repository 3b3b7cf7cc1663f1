//! Core library for numclass
//!
//! This crate implements the **Functional Core** of the numclass service,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! - **`numclass_core`** (this crate): Pure classification and interpretation functions with zero I/O
//! - **`numclass`**: HTTP server, outbound fact lookups and the CLI (the Imperative Shell)
//!
//! Every function here is deterministic and can be tested with plain values, no
//! mocking required. The shell owns the network: it fetches bytes from the fact
//! provider and hands them to [`fact::interpret_fact_body`] to decide what they mean.
//!
//! # Module Organization
//!
//! - [`classify`]: Number predicates (prime, perfect, Armstrong, digit sum) and result assembly
//! - [`input`]: Parsing of the raw `number` query parameter
//! - [`fact`]: Fact provider URL building and response interpretation
//!
//! # Example Usage
//!
//! ```rust
//! use numclass_core::classify::classify;
//! use numclass_core::input::parse_number;
//!
//! let n = parse_number(Some("371")).unwrap();
//! let result = classify(n).with_fun_fact(String::new());
//!
//! assert_eq!(result.digit_sum, 11);
//! assert!(!result.is_prime);
//! ```

pub mod classify;
pub mod fact;
pub mod input;
