// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Identifier escaping for the mastery site.
//!
//! The mastery site decodes its `riotId` parameter with its own rules, so a
//! generic percent-encoder produces lookups it cannot resolve. Letters A-Z/a-z,
//! numeric characters and `%` pass through untouched, a space becomes `+`,
//! and everything else is written as `%XX` per UTF-8 byte.

use std::fmt::Write;

/// Escape an identifier for the mastery lookup URL.
pub fn encode_mastery_id(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut buf = [0u8; 4];

    for c in text.chars() {
        if passes_through(c) {
            out.push(c);
        } else if c == ' ' {
            out.push('+');
        } else {
            for byte in c.encode_utf8(&mut buf).as_bytes() {
                // Writing to a String cannot fail.
                let _ = write!(out, "%{:02X}", byte);
            }
        }
    }

    out
}

fn passes_through(c: char) -> bool {
    c.is_ascii_alphabetic() || c.is_numeric() || c == '%'
}
