//! # ISO 4217 Header Generator
//!
//! Compiles the closed set of ISO 4217 numeric currency codes into a packed
//! membership bitmap and emits it, together with a C lookup routine, as an
//! `iso4217.h` header for a barcode-encoding library to compile in.
//!
//! This library is organized into several modules:
//! - `error`: Error handling and the crate `Result` alias
//! - `codes`: The ISO 4217 numeric code data set
//! - `codeset`: Validated, immutable input domain
//! - `pack`: Bit-packing transform producing the byte table
//! - `emit`: Rendering of the table and accessor as header text
//!
//! The whole pipeline is a stateless transform evaluated once per
//! invocation; [`generate`] runs it end to end.

// Re-export commonly used types at the crate root
pub use error::{Iso4217Error, Result};

pub mod codes;
pub mod codeset;
pub mod emit;
pub mod error;
pub mod pack;

use log::{debug, info};

pub use codeset::CodeSet;
pub use emit::EmissionConfig;
pub use pack::PackedTable;

/// Runs the full pipeline: validate `codes`, pack the membership bitmap,
/// and render the header text. Fails before producing any output if the
/// code sequence violates the domain invariants.
pub fn generate(codes: &[u16], config: &EmissionConfig) -> Result<String> {
    let set = CodeSet::new(codes)?;
    debug!("code set validated: {} members", set.len());

    let table = pack::pack(&set);
    let text = emit::emit(&table, config);
    info!(
        "generated {} header bytes for a {}-byte table",
        text.len(),
        table.len()
    );
    Ok(text)
}
