// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Mastery page lookup and table scraping.
//!
//! The table is read positionally: the first body row and the rows that follow
//! it, with name, level and points in the first three cells. The page carries
//! no column labels we could key on.

use crate::error::{Result, ScoutError};
use crate::models::{MasteryEntry, PlayerIdentifier, MASTERY_SLOTS};
use crate::services::encoding::encode_mastery_id;
use scraper::{ElementRef, Html, Selector};

/// Escaped `riotId` value for the mastery site (`name%23tag`).
pub fn mastery_lookup_id(identifier: &PlayerIdentifier) -> String {
    let joined = match identifier.split_tag() {
        Some((name, tag)) => format!("{}%23{}", name, tag),
        None => identifier.as_str().to_string(),
    };
    encode_mastery_id(&joined)
}

/// Mastery page URL for a player.
pub fn mastery_url(mastery_base: &str, region: &str, identifier: &PlayerIdentifier) -> String {
    format!(
        "{}/player?riotId={}&region={}&lang=en_US",
        mastery_base,
        mastery_lookup_id(identifier),
        region.to_ascii_uppercase()
    )
}

/// Read exactly [`MASTERY_SLOTS`] rows from the mastery table.
pub fn parse_mastery_table(html: &str) -> Result<Vec<MasteryEntry>> {
    let document = Html::parse_document(html);
    let row_selector = Selector::parse("tbody tr")
        .map_err(|e| ScoutError::Internal(anyhow::anyhow!("selector: {}", e)))?;

    let first = document
        .select(&row_selector)
        .next()
        .ok_or_else(|| ScoutError::schema("mastery page has no table rows"))?;

    let rows: Vec<ElementRef> = std::iter::once(first)
        .chain(
            first
                .next_siblings()
                .filter_map(ElementRef::wrap)
                .filter(|el| el.value().name() == "tr"),
        )
        .take(MASTERY_SLOTS)
        .collect();

    if rows.len() < MASTERY_SLOTS {
        return Err(ScoutError::schema(format!(
            "expected {} mastery rows, found {}",
            MASTERY_SLOTS,
            rows.len()
        )));
    }

    rows.into_iter()
        .enumerate()
        .map(|(index, row)| parse_row(index, row))
        .collect()
}

fn parse_row(index: usize, row: ElementRef) -> Result<MasteryEntry> {
    let cells: Vec<String> = row
        .children()
        .filter_map(ElementRef::wrap)
        .take(3)
        .map(cell_text)
        .collect();

    match <[String; 3]>::try_from(cells) {
        Ok([name, level, points]) => Ok(MasteryEntry {
            name,
            level,
            points,
        }),
        Err(cells) => Err(ScoutError::schema(format!(
            "mastery row {} has {} cells, expected 3",
            index,
            cells.len()
        ))),
    }
}

/// Cell text with whitespace runs collapsed.
fn cell_text(cell: ElementRef) -> String {
    cell.text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}
