use crate::digest::{code_challenge_s256, sha256_hex};
use crate::generator::{combine, generate_random_string, RandomSource};
use anyhow::{Context, Result};
use std::io::Write;
use tracing::debug;

/// Segment sizing. The defaults are the fixed literals the CLI always uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorSettings {
    pub segment_length: usize,
    pub segment_count: usize,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self { segment_length: 16, segment_count: 2 }
    }
}

/// A generated random string together with the hex SHA-256 of its UTF-8 bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeVerifier {
    pub random_string: String,
    pub digest_hex: String,
}

impl CodeVerifier {
    /// Standards-form PKCE challenge for the random string. Not part of the
    /// CLI output, which reports the hex digest.
    pub fn pkce_challenge(&self) -> String {
        code_challenge_s256(&self.random_string)
    }
}

/// Draw `segment_count` independent segments, join them in order and hash the result.
pub fn generate_code_verifier<R: RandomSource + ?Sized>(rng: &mut R, settings: &GeneratorSettings) -> CodeVerifier {
    let mut random_string = String::new();
    for i in 0..settings.segment_count {
        let segment = generate_random_string(rng, settings.segment_length);
        debug!(segment = i, len = segment.len(), "generated segment");
        random_string = combine(&random_string, &segment);
    }
    let digest_hex = sha256_hex(&random_string);
    debug!(input_len = random_string.len(), "computed sha256 digest");
    CodeVerifier { random_string, digest_hex }
}

pub fn write_report<W: Write>(out: &mut W, verifier: &CodeVerifier) -> Result<()> {
    writeln!(out, "Random String: {}", verifier.random_string).context("writing report")?;
    writeln!(out, "Code Verifier: {}", verifier.digest_hex).context("writing report")?;
    out.flush().context("writing report")?;
    Ok(())
}
