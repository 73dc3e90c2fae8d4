//! Curly-brace set notation and the Venn calculator.
//!
//! Input follows the informal `{item, item, ...}` convention. Parsing never
//! fails: anything that cannot be read as a set is an empty set. Comparison
//! is exact and case-sensitive, unlike quiz answer checking in
//! [`crate::answer`], which ignores case.

use serde::{Deserialize, Serialize};

use crate::error::NotationError;

/// Arabic comma, accepted everywhere as an alias for `,`.
pub const ARABIC_COMMA: char = '\u{060C}';

/// Parse one bracketed set into its unique, trimmed, non-empty elements.
///
/// The first and last characters are dropped as the bracket pair, the rest is
/// split on commas. Elements keep the order of their first occurrence.
pub fn parse_set(input: &str) -> Vec<String> {
    if input.is_empty() || !input.contains('{') {
        return Vec::new();
    }

    let inner = strip_outer_pair(input).replace(ARABIC_COMMA, ",");

    let mut elements: Vec<String> = Vec::new();
    for item in inner.split(',') {
        let item = item.trim();
        if item.is_empty() || elements.iter().any(|e| e == item) {
            continue;
        }
        elements.push(item.to_string());
    }
    elements
}

/// Drop the first and last character, whatever they are.
fn strip_outer_pair(input: &str) -> &str {
    let mut chars = input.chars();
    chars.next();
    chars.next_back();
    chars.as_str()
}

/// The three regions of a two-set Venn diagram.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VennRegions {
    /// Elements of A that are not in B, in A's order.
    pub only_a: Vec<String>,
    /// Elements of B that are not in A, in B's order.
    pub only_b: Vec<String>,
    /// Elements of A that are also in B, in A's order.
    pub intersection: Vec<String>,
}

impl VennRegions {
    /// Union as read left to right across the diagram.
    pub fn union(&self) -> Vec<String> {
        let mut union = Vec::with_capacity(
            self.only_a.len() + self.intersection.len() + self.only_b.len(),
        );
        union.extend(self.only_a.iter().cloned());
        union.extend(self.intersection.iter().cloned());
        union.extend(self.only_b.iter().cloned());
        union
    }

    /// Returns `true` if no region holds any element.
    pub fn is_empty(&self) -> bool {
        self.only_a.is_empty() && self.only_b.is_empty() && self.intersection.is_empty()
    }

    /// Text labels for the non-empty regions, positioned on a 500x400 canvas.
    pub fn labels(&self) -> Vec<VennLabel> {
        [
            (Region::OnlyA, &self.only_a),
            (Region::OnlyB, &self.only_b),
            (Region::Intersection, &self.intersection),
        ]
        .into_iter()
        .filter(|(_, elements)| !elements.is_empty())
        .map(|(region, elements)| {
            let (x, y) = region.anchor();
            VennLabel {
                region,
                text: elements.join(", "),
                x,
                y,
            }
        })
        .collect()
    }
}

/// A region of the diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    OnlyA,
    OnlyB,
    Intersection,
}

impl Region {
    /// Label anchor point (text is centered on it).
    pub fn anchor(self) -> (u32, u32) {
        match self {
            Region::OnlyA => (130, 200),
            Region::OnlyB => (370, 200),
            Region::Intersection => (250, 200),
        }
    }
}

/// A label to draw inside one region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VennLabel {
    pub region: Region,
    pub text: String,
    pub x: u32,
    pub y: u32,
}

/// Split two parsed sets into Venn regions using exact string equality.
pub fn compare_sets(a: &[String], b: &[String]) -> VennRegions {
    let (intersection, only_a): (Vec<String>, Vec<String>) =
        a.iter().cloned().partition(|item| b.contains(item));
    let only_b = b.iter().filter(|item| !a.contains(item)).cloned().collect();

    VennRegions {
        only_a,
        only_b,
        intersection,
    }
}

/// Parse both inputs and compute the diagram.
///
/// Fails only when neither input yields an element, so the caller can ask the
/// user to re-enter the sets.
pub fn calculate_diagram(a_input: &str, b_input: &str) -> Result<VennRegions, NotationError> {
    let regions = compare_sets(&parse_set(a_input), &parse_set(b_input));
    if regions.is_empty() {
        return Err(NotationError::EmptyInput);
    }

    tracing::debug!(
        only_a = regions.only_a.len(),
        only_b = regions.only_b.len(),
        intersection = regions.intersection.len(),
        "computed venn regions"
    );
    Ok(regions)
}
