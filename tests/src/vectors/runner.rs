//! Runs vectors through [`run_exchange`] and compares the transcript.

use toycurve_pke::{run_exchange, ExchangeTranscript};

use crate::vectors::error::{Result, VectorError};
use crate::vectors::model::{ExchangeVector, VectorFile};

fn compare(
    vector: &ExchangeVector,
    field: &'static str,
    expected: Option<&String>,
    actual: String,
) -> Result<()> {
    match expected {
        Some(expected) if *expected != actual => Err(VectorError::Mismatch {
            vector: vector.name.clone(),
            field,
            expected: expected.clone(),
            actual,
        }),
        _ => Ok(()),
    }
}

fn compare_transcript(vector: &ExchangeVector, transcript: &ExchangeTranscript) -> Result<()> {
    let expect = &vector.expect;
    let count = expect.point_count.map(|n| n.to_string());
    compare(vector, "point_count", count.as_ref(), transcript.curve_points.len().to_string())?;
    compare(vector, "public_a", expect.public_a.as_ref(), transcript.public_a.to_string())?;
    compare(vector, "public_b", expect.public_b.as_ref(), transcript.public_b.to_string())?;
    compare(vector, "shared", expect.shared.as_ref(), transcript.shared_a.to_string())?;
    let bound = expect.bound.map(|m| m.to_string());
    compare(vector, "bound", bound.as_ref(), transcript.encoding.bound.to_string())?;
    let slots = expect.slots.map(|h| h.to_string());
    compare(vector, "slots", slots.as_ref(), transcript.encoding.slots.to_string())?;
    compare(vector, "encoded", expect.encoded.as_ref(), transcript.encoded_message.to_string())?;
    compare(vector, "ciphertext", expect.ciphertext.as_ref(), transcript.ciphertext.to_string())
}

/// Check one vector, either against its expected transcript or against its
/// expected failure.
pub fn check_vector(vector: &ExchangeVector) -> Result<()> {
    match (run_exchange(&vector.input), &vector.expect.error) {
        (Ok(transcript), None) => compare_transcript(vector, &transcript),
        (Ok(_), Some(expected)) => Err(VectorError::UnexpectedSuccess {
            vector: vector.name.clone(),
            expected: expected.clone(),
        }),
        (Err(err), Some(expected)) if err.to_string().contains(expected.as_str()) => Ok(()),
        (Err(source), _) => Err(VectorError::Exchange {
            vector: vector.name.clone(),
            source,
        }),
    }
}

/// Check every vector of a file, returning the number checked
pub fn run_file(file: &VectorFile) -> Result<usize> {
    for vector in &file.vectors {
        check_vector(vector)?;
    }
    Ok(file.vectors.len())
}
