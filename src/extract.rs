//! Driver that runs a traversal over each input source.
//!
//! Sources are processed strictly in order, one at a time; each source's
//! reader or tree is dropped before the next one opens. Output lines go to
//! a caller-supplied sink in document order.

use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::path::{Path, PathBuf};

use encoding_rs::Encoding;
use encoding_rs_io::DecodeReaderBytesBuilder;

use crate::config::STDIN_SOURCE_NAME;
use crate::criteria::MatchCriteria;
use crate::error::{ExtractError, Result};
use crate::{stream, tree};

/// Traversal strategy for a source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalMode {
    /// Single-pass pull-parser scan; captures each matched element's
    /// immediate text. Works on unbounded input.
    Stream,
    /// Retained-subtree walk; captures each matched element's full
    /// descendant text. Reads the whole source into memory.
    Tree,
}

/// What to do when one source in a batch fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Abort the batch on the first failure (default).
    FailFast,
    /// Log the failure, continue with the remaining sources, and report an
    /// overall failure at the end.
    KeepGoing,
}

/// Driver configuration.
#[derive(Debug, Clone, Copy)]
pub struct ExtractOptions {
    /// Traversal strategy applied to every source.
    pub mode: TraversalMode,
    /// Batch behavior when one source fails.
    pub policy: FailurePolicy,
    /// Input encoding, forwarded opaquely to the decoding reader. A byte
    /// order mark in the source still takes precedence.
    pub encoding: &'static Encoding,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            mode: TraversalMode::Stream,
            policy: FailurePolicy::FailFast,
            encoding: encoding_rs::UTF_8,
        }
    }
}

/// Run the extraction over all input sources.
///
/// With no input files, standard input is the single streaming source.
/// Returns `Ok(())` only if every source succeeded.
///
/// # Arguments
/// * `criteria` - Element matching criteria
/// * `infiles` - Input files in processing order; empty means stdin
/// * `options` - Traversal mode, failure policy and input encoding
/// * `out` - Output sink for matched lines
pub fn run<W: Write>(
    criteria: &MatchCriteria,
    infiles: &[PathBuf],
    options: &ExtractOptions,
    out: &mut W,
) -> Result<()> {
    if infiles.is_empty() {
        tracing::info!(encoding = options.encoding.name(), "reading standard input");
        let stdin = io::stdin();
        let emitted = extract_source(stdin.lock(), STDIN_SOURCE_NAME, criteria, options, out)?;
        tracing::info!(emitted, "extraction complete");
        return Ok(());
    }

    let mut failed = 0usize;
    for path in infiles {
        match extract_file(path, criteria, options, out) {
            Ok(emitted) => {
                tracing::info!(path = %path.display(), emitted, "extraction complete");
            }
            Err(e) => match options.policy {
                FailurePolicy::FailFast => return Err(e),
                FailurePolicy::KeepGoing => {
                    tracing::error!(path = %path.display(), error = %e, "skipping failed input");
                    failed += 1;
                }
            },
        }
    }

    if failed > 0 {
        Err(ExtractError::SourcesFailed {
            failed,
            total: infiles.len(),
        })
    } else {
        Ok(())
    }
}

/// Open and extract a single file.
fn extract_file<W: Write>(
    path: &Path,
    criteria: &MatchCriteria,
    options: &ExtractOptions,
    out: &mut W,
) -> Result<u64> {
    let source_name = path.display().to_string();
    tracing::info!(path = %source_name, "parsing");
    let file = File::open(path).map_err(|e| ExtractError::Source {
        source_name: source_name.clone(),
        source: e,
    })?;
    extract_source(file, &source_name, criteria, options, out)
}

/// Extract from an already-open byte source.
///
/// The source is decoded from the configured encoding to UTF-8 first, so
/// the XML layer never sees raw non-UTF-8 bytes. Decoding is lossy: byte
/// sequences invalid under the configured encoding become U+FFFD
/// replacement characters rather than failing the source, so a wrong
/// `-e` label shows up as mangled output, not as a parse error.
fn extract_source<R: Read, W: Write>(
    input: R,
    source_name: &str,
    criteria: &MatchCriteria,
    options: &ExtractOptions,
    out: &mut W,
) -> Result<u64> {
    let decoded = DecodeReaderBytesBuilder::new()
        .encoding(Some(options.encoding))
        .build(input);

    match options.mode {
        TraversalMode::Stream => {
            stream::extract_stream(BufReader::new(decoded), criteria, source_name, out)
        }
        TraversalMode::Tree => {
            let mut xml = String::new();
            BufReader::new(decoded)
                .read_to_string(&mut xml)
                .map_err(|e| ExtractError::Source {
                    source_name: source_name.to_string(),
                    source: e,
                })?;
            tree::extract_tree(&xml, criteria, source_name, out)
        }
    }
}
