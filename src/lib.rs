//! # Error Handling Basics
//!
//! A console lesson on returning and matching errors instead of panicking.
//!
//! ## Operations
//!
//! 1. **MathOps** - `factorial` and `fibonacci` with domain checks
//! 2. **Calculator** - `divide` refusing a zero denominator
//! 3. **ArrayGen** - `squares` refusing a non-positive size
//! 4. **FileRoundTrip** - write a payload, read it back, release the handle
//!
//! Every operation returns [`error::Result`]; the [`shell::Shell`] matches on
//! each result at the call site and keeps going.
//!
//! ## Running
//!
//! ```bash
//! cargo run --bin error_basics
//! ```

pub mod array_gen;
pub mod calculator;
pub mod error;
pub mod file_round_trip;
pub mod logging;
pub mod math_ops;
pub mod settings;
pub mod shell;

pub use error::{ErrorKind, LessonError, Result};
