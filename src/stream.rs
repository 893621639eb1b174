//! Single-pass streaming traversal over a pull-parser token stream.
//!
//! This mode handles input of unbounded size with constant memory per
//! element: a single cursor advances through `quick-xml` events, matching
//! each element start against the criteria and emitting normalized text
//! immediately. Captured content is the contiguous run of text immediately
//! following a matched start tag, not the text of nested markup (the tree
//! mode in [`crate::tree`] captures full descendant text instead).

use std::io::{BufRead, Write};

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::criteria::MatchCriteria;
use crate::error::{ExtractError, Result};
use crate::normalize::normalize;

/// Scan a token stream, writing one line per matched, non-empty element.
///
/// A parse or read error fails the whole source immediately; lines already
/// written stay written. Returns the number of lines emitted.
///
/// # Arguments
/// * `input` - Decoded (UTF-8) XML byte stream
/// * `criteria` - Element matching criteria
/// * `source_name` - Source identity for error messages
/// * `out` - Output sink for matched lines
pub fn extract_stream<R: BufRead, W: Write>(
    input: R,
    criteria: &MatchCriteria,
    source_name: &str,
    out: &mut W,
) -> Result<u64> {
    let mut reader = Reader::from_reader(input);
    let mut buf = Vec::new();
    // Pending capture for the most recent matched start tag, if any.
    let mut capture: Option<String> = None;
    let mut emitted = 0u64;

    loop {
        let event = reader
            .read_event_into(&mut buf)
            .map_err(|e| parse_error(source_name, &reader, e))?;

        match event {
            Event::Start(ref start) => {
                // Any element start ends the previous contiguous text run.
                emitted += flush(&mut capture, out)?;

                let qname = start.name();
                let local = String::from_utf8_lossy(qname.local_name().as_ref()).into_owned();
                let prefix = qname
                    .prefix()
                    .map(|p| String::from_utf8_lossy(p.as_ref()).into_owned());

                if criteria.matches(prefix.as_deref(), &local) {
                    capture = Some(String::new());
                }
            }
            Event::Text(ref text) => {
                if let Some(content) = capture.as_mut() {
                    let unescaped = text
                        .unescape()
                        .map_err(|e| parse_error(source_name, &reader, e))?;
                    content.push_str(&unescaped);
                }
            }
            Event::CData(ref cdata) => {
                if let Some(content) = capture.as_mut() {
                    content.push_str(&String::from_utf8_lossy(cdata));
                }
            }
            Event::Eof => {
                emitted += flush(&mut capture, out)?;
                break;
            }
            // End tags, self-closing elements, comments, PIs and the XML
            // declaration all end the contiguous text run. A matched
            // self-closing element has no content and never emits.
            _ => {
                emitted += flush(&mut capture, out)?;
            }
        }

        buf.clear();
    }

    Ok(emitted)
}

/// Normalize and emit a pending capture, if non-empty after normalization.
fn flush<W: Write>(capture: &mut Option<String>, out: &mut W) -> Result<u64> {
    let Some(raw) = capture.take() else {
        return Ok(0);
    };
    let normalized = normalize(&raw);
    if normalized.is_empty() {
        return Ok(0);
    }
    writeln!(out, "{normalized}")?;
    Ok(1)
}

fn parse_error<R>(source_name: &str, reader: &Reader<R>, source: quick_xml::Error) -> ExtractError {
    ExtractError::StreamParse {
        source_name: source_name.to_string(),
        position: reader.buffer_position() as u64,
        source,
    }
}
