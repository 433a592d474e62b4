//! Symforge Core
//!
//! This crate turns a Ghidra-exported C header into a relocatable object
//! file whose only job is to carry debug information, so a debugger can
//! cast raw memory to the recovered struct types.
//!
//! # Pipeline Overview
//!
//! ```text
//! ┌─────────┐     ┌─────────┐     ┌─────────┐     ┌─────────┐
//! │ Header  │────▶│ Rewrite │────▶│ Dummies │────▶│ Object  │
//! │ (read)  │     │ + Scan  │     │ (synth) │     │(compile)│
//! └─────────┘     └─────────┘     └─────────┘     └─────────┘
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use symforge_core::{Compiler, CompileOptions};
//!
//! let compiler = Compiler::new(CompileOptions::default());
//! let object = compiler.compile_header("exported_types.h")?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod compiler;
pub mod error;
pub mod rewrite;
pub mod scan;
pub mod synth;

pub use compiler::{CompileOptions, CompiledObject, Compiler, DEFAULT_COMPILER, DEFAULT_OUTPUT};
pub use error::{Error, Result};
