//! Rendering of the packed table as an embeddable C header.
//!
//! The emitted text is a pure function of the table and the configuration:
//! the same inputs always produce byte-identical output, so the generated
//! header can be diffed and committed.

use crate::pack::PackedTable;

/// Name stamped into the provenance banner of the emitted header.
pub const GENERATOR_NAME: &str = "gen-iso4217";

const LICENSE_BLOCK: &str = r#"/*
    libzint - the open source barcode library
    Copyright (C) 2021-2024 Robin Stuart <rstuart114@gmail.com>

    Redistribution and use in source and binary forms, with or without
    modification, are permitted provided that the following conditions
    are met:

    1. Redistributions of source code must retain the above copyright
       notice, this list of conditions and the following disclaimer.
    2. Redistributions in binary form must reproduce the above copyright
       notice, this list of conditions and the following disclaimer in the
       documentation and/or other materials provided with the distribution.
    3. Neither the name of the project nor the names of its contributors
       may be used to endorse or promote products derived from this software
       without specific prior written permission.

    THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS" AND
    ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
    IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE
    ARE DISCLAIMED.  IN NO EVENT SHALL THE COPYRIGHT OWNER OR CONTRIBUTORS BE LIABLE
    FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
    DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS
    OR SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION)
    HOWEVER CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT
    LIABILITY, OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY
    OUT OF THE USE OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF
    SUCH DAMAGE.
 */
/* SPDX-License-Identifier: BSD-3-Clause */

"#;

const GUARD_OPEN: &str = "#ifndef Z_ISO4217_H\n#define Z_ISO4217_H\n";
const GUARD_CLOSE: &str = "\n#endif /* Z_ISO4217_H */\n";

/// Bytes per rendered table row.
const BYTES_PER_ROW: usize = 8;

/// Cosmetic options for the emitted header. None of these affect the table
/// bytes themselves.
#[derive(Debug, Clone)]
pub struct EmissionConfig {
    /// Emit the license block after the banner.
    pub emit_copyright: bool,
    /// Wrap the header in a `Z_ISO4217_H` include guard.
    pub emit_header_guard: bool,
    /// One indent unit for the function body.
    pub indent: String,
}

impl Default for EmissionConfig {
    fn default() -> Self {
        Self {
            emit_copyright: true,
            emit_header_guard: true,
            indent: "    ".to_string(),
        }
    }
}

/// Renders the packed table and its lookup routine as C header text.
pub fn emit(table: &PackedTable, config: &EmissionConfig) -> String {
    let tab = &config.indent;
    let count = table.len();
    let mut out = String::new();

    out.push_str(&format!(
        "/*\n * ISO 4217 currency codes generated by \"{}\"\n */\n",
        GENERATOR_NAME
    ));

    if config.emit_copyright {
        out.push_str(LICENSE_BLOCK);
    }
    if config.emit_header_guard {
        out.push_str(GUARD_OPEN);
    }

    out.push_str(&format!(
        "\n/* Whether ISO 4217-1 numeric */\n\
         static int iso4217_numeric(int cc) {{\n\
         {tab}static const unsigned char codes[{count}] = {{"
    ));

    for (i, byte) in table.as_bytes().iter().enumerate() {
        if i % BYTES_PER_ROW == 0 {
            out.push_str(&format!("\n{tab}{tab}"));
        } else {
            out.push(' ');
        }
        out.push_str(&format!("0x{:02X},", byte));
    }

    out.push_str(&format!(
        "\n{tab}}};\n\
         {tab}int b = cc >> 3;\n\
         \n\
         {tab}if (b < 0 || b >= {count}) {{\n\
         {tab}{tab}return 0;\n\
         {tab}}}\n\
         {tab}return codes[b] & (1 << (cc & 0x7)) ? 1 : 0;\n\
         }}\n"
    ));

    if config.emit_header_guard {
        out.push_str(GUARD_CLOSE);
    }

    out
}
