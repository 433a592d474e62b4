//! Compiler invocation
//!
//! Drives the external C compiler: feeds it the rewritten and augmented
//! definitions on stdin and turns its exit status and captured streams
//! into a typed result.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};

use crate::error::{Error, Result};
use crate::rewrite;
use crate::scan;
use crate::synth;

/// Compiler binary used when none is configured
pub const DEFAULT_COMPILER: &str = "gcc";

/// Output object path used when none is configured
pub const DEFAULT_OUTPUT: &str = "symbols.o";

/// Options for the compiler
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Compiler binary to invoke
    pub compiler: String,

    /// Path the object file is written to
    pub output_path: PathBuf,

    /// Extra flags passed through verbatim, ahead of the stdin marker
    pub extra_args: Vec<String>,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            compiler: DEFAULT_COMPILER.to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            extra_args: Vec::new(),
        }
    }
}

/// Debug-symbol compiler
pub struct Compiler {
    options: CompileOptions,
}

impl Compiler {
    /// Create a new compiler with the given options
    pub fn new(options: CompileOptions) -> Self {
        Self { options }
    }

    /// Compile a header file into a debug-symbol object file
    pub fn compile_header(&self, header_path: impl AsRef<Path>) -> Result<CompiledObject> {
        let header_path = header_path.as_ref();
        tracing::info!("Compiling header: {}", header_path.display());

        let source = std::fs::read_to_string(header_path).map_err(|e| Error::HeaderRead {
            path: header_path.display().to_string(),
            source: e,
        })?;

        self.compile_source(&source)
    }

    /// Compile header text into a debug-symbol object file
    pub fn compile_source(&self, source: &str) -> Result<CompiledObject> {
        // Repair the header
        let rewritten = rewrite::rewrite_header(source);

        // Find every struct that needs its layout forced into the output
        let structs = scan::discover_structs(&rewritten);
        tracing::debug!("Discovered {} struct name(s)", structs.len());

        // One dummy variable per struct keeps the debug info alive
        let definitions = synth::append_dummy_declarations(rewritten, &structs);

        self.invoke(&definitions)
    }

    /// Full command line as it would be typed in a shell, for reporting
    pub fn command_line(&self) -> String {
        let mut parts = vec![self.options.compiler.clone()];
        parts.extend(self.build_args());
        parts.join(" ")
    }

    fn build_args(&self) -> Vec<String> {
        let mut args = vec![
            "-g".to_string(),
            "-c".to_string(),
            "-xc".to_string(),
            "-o".to_string(),
            self.options.output_path.display().to_string(),
        ];
        args.extend(self.options.extra_args.iter().cloned());
        // Read the translation unit from stdin
        args.push("-".to_string());
        args
    }

    fn invoke(&self, definitions: &str) -> Result<CompiledObject> {
        let command = self.command_line();
        tracing::debug!("Running compiler: {}", command);

        let mut child = Command::new(&self.options.compiler)
            .args(self.build_args())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| Error::CompilerLaunch {
                command: command.clone(),
                source: e,
            })?;

        if let Err(err) = feed_stdin(&mut child, definitions) {
            // Do not leave the child or its pipes behind on a failed write
            let _ = child.kill();
            let _ = child.wait();
            return Err(err.into());
        }

        let output = child.wait_with_output()?;

        if !output.status.success() {
            return Err(Error::CompilerFailed {
                status: output.status.code().unwrap_or(-1),
                command,
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        // Anything on stdout is a non-fatal diagnostic worth surfacing
        let warnings = if output.stdout.is_empty() {
            None
        } else {
            Some(String::from_utf8_lossy(&output.stdout).into_owned())
        };

        tracing::info!("Wrote object file: {}", self.options.output_path.display());

        Ok(CompiledObject {
            path: self.options.output_path.clone(),
            warnings,
        })
    }
}

/// Write the whole payload, then close stdin so the compiler sees EOF.
fn feed_stdin(child: &mut Child, payload: &str) -> io::Result<()> {
    if let Some(mut stdin) = child.stdin.take() {
        if let Err(err) = stdin.write_all(payload.as_bytes()) {
            // A compiler that rejects its arguments exits before reading
            // stdin; its status and stderr are still the report we want.
            if err.kind() != io::ErrorKind::BrokenPipe {
                return Err(err);
            }
        }
    }
    Ok(())
}

/// An object file produced by a successful compiler run
#[derive(Debug)]
pub struct CompiledObject {
    /// Where the compiler wrote the object file
    pub path: PathBuf,

    /// The compiler's stdout, when it printed anything
    pub warnings: Option<String>,
}
