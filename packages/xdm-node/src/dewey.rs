//! Hierarchical node addresses (DeweyIDs).
//!
//! A DeweyID is a sequence of `u32` divisions. Comparing two IDs lexicographically yields
//! document order, so callers can order nodes without walking the tree.
//!
//! Layout:
//! - the document root is `1`;
//! - children use odd divisions starting at `3`, spaced by `2` (`1.3`, `1.5`, ...);
//! - attributes hang off the reserved division `1` below their element (`1.3.1.3`), which
//!   sorts them after the element and before its first child;
//! - even divisions are "carets" that let an insert land between two siblings without
//!   renumbering them. A caret never starts a new level: `1.3.4.3` is a sibling of `1.3.3`.
//!
//! The byte form encodes every division with a prefix-free, order-preserving code, so
//! `memcmp` over two byte forms agrees with [`Ord`] on the IDs.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const ROOT_DIVISION: u32 = 1;
const ATTRIBUTE_ROOT_DIVISION: u32 = 1;
const FIRST_DIVISION: u32 = 3;
const DISTANCE_TO_SIBLING: u32 = 2;

const ONE_BYTE_MAX: u32 = 0xBF;
const TWO_BYTE_BASE: u32 = 0xC0;
const THREE_BYTE_BASE: u32 = TWO_BYTE_BASE + (1 << 13);
const FOUR_BYTE_BASE: u32 = THREE_BYTE_BASE + (1 << 20);
const WIDE_TAG: u8 = 0xF0;

fn invalid(msg: impl Into<String>) -> Error {
    Error::InvalidDeweyId(msg.into())
}

fn is_odd(division: u32) -> bool {
    division % 2 == 1
}

fn encode_division(v: u32, out: &mut Vec<u8>) {
    if v <= ONE_BYTE_MAX {
        out.push(v as u8);
    } else if v < THREE_BYTE_BASE {
        let w = v - TWO_BYTE_BASE;
        out.push(0xC0 | (w >> 8) as u8);
        out.push(w as u8);
    } else if v < FOUR_BYTE_BASE {
        let w = v - THREE_BYTE_BASE;
        out.push(0xE0 | (w >> 16) as u8);
        out.push((w >> 8) as u8);
        out.push(w as u8);
    } else {
        out.push(WIDE_TAG);
        out.extend_from_slice(&v.to_be_bytes());
    }
}

fn take(bytes: &[u8], start: usize, len: usize) -> Result<&[u8]> {
    bytes
        .get(start..start + len)
        .ok_or_else(|| invalid("truncated division"))
}

fn decode_divisions(bytes: &[u8]) -> Result<Vec<u32>> {
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        let tag = bytes[i];
        let (value, len) = match tag {
            0x00..=0xBF => (tag as u32, 1),
            0xC0..=0xDF => {
                let b = take(bytes, i, 2)?;
                let w = (((tag & 0x1F) as u32) << 8) | b[1] as u32;
                (TWO_BYTE_BASE + w, 2)
            }
            0xE0..=0xEF => {
                let b = take(bytes, i, 3)?;
                let w = (((tag & 0x0F) as u32) << 16) | ((b[1] as u32) << 8) | b[2] as u32;
                (THREE_BYTE_BASE + w, 3)
            }
            WIDE_TAG => {
                let b = take(bytes, i, 5)?;
                let v = u32::from_be_bytes([b[1], b[2], b[3], b[4]]);
                if v < FOUR_BYTE_BASE {
                    return Err(invalid(format!("non-canonical wide division {v}")));
                }
                (v, 5)
            }
            _ => return Err(invalid(format!("unknown division tag {tag:#04x}"))),
        };
        out.push(value);
        i += len;
    }
    Ok(out)
}

fn validate(divisions: &[u32]) -> Result<()> {
    let (Some(&first), Some(&last)) = (divisions.first(), divisions.last()) else {
        return Err(invalid("empty dewey id"));
    };
    if first != ROOT_DIVISION {
        return Err(invalid(format!("dewey id must start at the root, got {first}")));
    }
    if !is_odd(last) {
        return Err(invalid(format!("dewey id must end in an odd division, got {last}")));
    }
    if divisions.contains(&0) {
        return Err(invalid("division 0 is reserved"));
    }
    let mut in_attribute = false;
    for (i, &d) in divisions.iter().enumerate().skip(1) {
        if d != ATTRIBUTE_ROOT_DIVISION {
            continue;
        }
        if in_attribute {
            return Err(invalid("attribute root below an attribute"));
        }
        if !is_odd(divisions[i - 1]) {
            return Err(invalid("attribute root must follow a node division"));
        }
        if i + 1 == divisions.len() {
            return Err(invalid("attribute root without an attribute"));
        }
        in_attribute = true;
    }
    Ok(())
}

/// Index where the last level's component (its carets plus the closing odd division) starts.
fn component_start(divisions: &[u32]) -> usize {
    divisions[..divisions.len() - 1]
        .iter()
        .rposition(|&d| is_odd(d))
        .map_or(0, |i| i + 1)
}

/// Smallest component sorting after `component` and all of its descendants.
fn above(component: &[u32]) -> Result<Vec<u32>> {
    let first = *component
        .first()
        .ok_or_else(|| invalid("empty component"))?;
    let step = if is_odd(first) { DISTANCE_TO_SIBLING } else { 1 };
    let next = first
        .checked_add(step)
        .ok_or_else(|| invalid("division overflow"))?;
    Ok(vec![next])
}

/// A component sorting strictly before `component`, at the same level.
fn below(component: &[u32]) -> Result<Vec<u32>> {
    let mut out = Vec::new();
    let mut rest = component;
    loop {
        let Some(&first) = rest.first() else {
            return Err(invalid("malformed component"));
        };
        match first {
            0 | 1 => return Err(invalid("no room below reserved division")),
            2 => {
                // Caret 2 has nothing usable below it; descend into the remainder.
                out.push(first);
                rest = &rest[1..];
            }
            FIRST_DIVISION => {
                out.extend([2, FIRST_DIVISION]);
                return Ok(out);
            }
            _ => {
                out.push(if is_odd(first) { first - DISTANCE_TO_SIBLING } else { first - 1 });
                return Ok(out);
            }
        }
    }
}

/// A component strictly between `left` (and its descendants) and `right`.
fn between(left: &[u32], right: &[u32]) -> Result<Vec<u32>> {
    let mut out = Vec::new();
    let mut depth = 0;
    loop {
        let (Some(&ld), Some(&rd)) = (left.get(depth), right.get(depth)) else {
            return Err(invalid("siblings overlap"));
        };
        if ld == rd {
            out.push(ld);
            depth += 1;
            continue;
        }
        if rd < ld {
            return Err(invalid("cannot allocate dewey id: right < left"));
        }

        if rd - ld == 1 {
            if is_odd(ld) {
                out.push(rd);
                out.extend(below(&right[depth + 1..])?);
            } else {
                out.push(ld);
                out.extend(above(&left[depth + 1..])?);
            }
        } else {
            let odd = if is_odd(ld) { ld + DISTANCE_TO_SIBLING } else { ld + 1 };
            if odd < rd {
                out.push(odd);
            } else {
                // No odd division fits; open a caret level.
                out.extend([ld + 1, FIRST_DIVISION]);
            }
        }
        return Ok(out);
    }
}

/// Order-preserving hierarchical address of a node.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<u32>", into = "Vec<u32>"))]
pub struct DeweyId {
    divisions: Vec<u32>,
}

impl DeweyId {
    /// Address of the document root.
    pub fn root() -> Self {
        Self {
            divisions: vec![ROOT_DIVISION],
        }
    }

    pub fn from_divisions(divisions: impl Into<Vec<u32>>) -> Result<Self> {
        let divisions = divisions.into();
        validate(&divisions)?;
        Ok(Self { divisions })
    }

    /// Decode the byte form produced by [`DeweyId::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_divisions(decode_divisions(bytes)?)
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.divisions.len());
        for &d in &self.divisions {
            encode_division(d, &mut out);
        }
        out
    }

    pub fn divisions(&self) -> &[u32] {
        &self.divisions
    }

    pub fn is_root(&self) -> bool {
        self.divisions == [ROOT_DIVISION]
    }

    /// Depth in the tree; the root is level 1. Carets and attribute roots do not count.
    pub fn level(&self) -> usize {
        self.divisions
            .iter()
            .enumerate()
            .filter(|&(i, &d)| is_odd(d) && !(i > 0 && d == ATTRIBUTE_ROOT_DIVISION))
            .count()
    }

    pub fn is_attribute(&self) -> bool {
        let start = component_start(&self.divisions);
        start >= 2 && self.divisions[start - 1] == ATTRIBUTE_ROOT_DIVISION
    }

    fn parent_divisions(&self) -> Option<&[u32]> {
        if self.is_root() {
            return None;
        }
        let mut prefix = &self.divisions[..component_start(&self.divisions)];
        if prefix.len() > 1 && prefix[prefix.len() - 1] == ATTRIBUTE_ROOT_DIVISION {
            prefix = &prefix[..prefix.len() - 1];
        }
        (!prefix.is_empty()).then_some(prefix)
    }

    /// Address of the parent node; `None` for the root. An attribute's parent is its element.
    pub fn parent(&self) -> Option<DeweyId> {
        self.parent_divisions().map(|p| Self {
            divisions: p.to_vec(),
        })
    }

    /// Address for the first child of a node without children.
    pub fn new_child_id(&self) -> DeweyId {
        let mut divisions = self.divisions.clone();
        divisions.push(FIRST_DIVISION);
        Self { divisions }
    }

    /// Address for the first attribute of an element without attributes.
    pub fn new_attribute_id(&self) -> DeweyId {
        let mut divisions = self.divisions.clone();
        divisions.extend([ATTRIBUTE_ROOT_DIVISION, FIRST_DIVISION]);
        Self { divisions }
    }

    /// Allocate an address strictly between two siblings.
    ///
    /// `left = None` inserts before `right`, `right = None` appends after `left`. The result
    /// has the same parent as the given neighbours and sorts after every descendant of `left`.
    pub fn new_between(left: Option<&DeweyId>, right: Option<&DeweyId>) -> Result<DeweyId> {
        let (prefix, component) = match (left, right) {
            (None, None) => return Err(invalid("new_between needs at least one neighbour")),
            (Some(l), None) => {
                let (prefix, lc) = l.split_last_component()?;
                (prefix, above(lc)?)
            }
            (None, Some(r)) => {
                let (prefix, rc) = r.split_last_component()?;
                (prefix, below(rc)?)
            }
            (Some(l), Some(r)) => {
                let (lp, lc) = l.split_last_component()?;
                let (rp, rc) = r.split_last_component()?;
                if lp != rp {
                    return Err(invalid(format!("{l} and {r} are not siblings")));
                }
                (lp, between(lc, rc)?)
            }
        };
        let mut divisions = Vec::with_capacity(prefix.len() + component.len());
        divisions.extend_from_slice(prefix);
        divisions.extend(component);
        Ok(Self { divisions })
    }

    fn split_last_component(&self) -> Result<(&[u32], &[u32])> {
        if self.is_root() {
            return Err(invalid("the document root has no siblings"));
        }
        Ok(self.divisions.split_at(component_start(&self.divisions)))
    }

    pub fn is_ancestor_of(&self, other: &DeweyId) -> bool {
        other.divisions.len() > self.divisions.len() && other.divisions.starts_with(&self.divisions)
    }

    pub fn is_descendant_of(&self, other: &DeweyId) -> bool {
        other.is_ancestor_of(self)
    }

    pub fn is_parent_of(&self, other: &DeweyId) -> bool {
        other.parent_divisions() == Some(self.divisions.as_slice())
    }

    /// Distinct nodes with the same parent. Attributes are only siblings of attributes.
    pub fn is_sibling_of(&self, other: &DeweyId) -> bool {
        self != other
            && self.parent_divisions().is_some()
            && self.parent_divisions() == other.parent_divisions()
            && self.is_attribute() == other.is_attribute()
    }

    /// Deepest node that is an ancestor-or-self of both addresses.
    pub fn common_ancestor(&self, other: &DeweyId) -> Option<DeweyId> {
        let shared = self
            .divisions
            .iter()
            .zip(&other.divisions)
            .take_while(|(a, b)| a == b)
            .count();
        let end = self.divisions[..shared]
            .iter()
            .rposition(|&d| is_odd(d))
            .map(|i| i + 1)?;
        let mut prefix = &self.divisions[..end];
        if prefix.len() > 1 && prefix[prefix.len() - 1] == ATTRIBUTE_ROOT_DIVISION {
            prefix = &prefix[..prefix.len() - 1];
        }
        Some(Self {
            divisions: prefix.to_vec(),
        })
    }
}

impl TryFrom<Vec<u32>> for DeweyId {
    type Error = Error;

    fn try_from(divisions: Vec<u32>) -> Result<Self> {
        Self::from_divisions(divisions)
    }
}

impl From<DeweyId> for Vec<u32> {
    fn from(id: DeweyId) -> Self {
        id.divisions
    }
}

impl fmt::Display for DeweyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, d) in self.divisions.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{d}")?;
        }
        Ok(())
    }
}

impl FromStr for DeweyId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let divisions = s
            .split('.')
            .map(|part| {
                part.parse::<u32>()
                    .map_err(|e| invalid(format!("bad division {part:?}: {e}")))
            })
            .collect::<Result<Vec<u32>>>()?;
        Self::from_divisions(divisions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> DeweyId {
        s.parse().unwrap()
    }

    #[test]
    fn parses_and_prints() {
        let d = id("1.3.5");
        assert_eq!(d.divisions(), &[1, 3, 5]);
        assert_eq!(d.to_string(), "1.3.5");
        assert!("".parse::<DeweyId>().is_err());
        assert!("1.4".parse::<DeweyId>().is_err());
        assert!("3.5".parse::<DeweyId>().is_err());
        assert!("1.0.3".parse::<DeweyId>().is_err());
        assert!("1.x".parse::<DeweyId>().is_err());
    }

    #[test]
    fn attribute_root_needs_an_owner_and_an_attribute() {
        for bad in ["1.3.1", "1.3.2.1", "1.3.2.1.3", "1.3.1.1.3", "1.3.1.3.1.3", "1.3.1.2.1"] {
            assert!(
                matches!(bad.parse::<DeweyId>(), Err(Error::InvalidDeweyId(_))),
                "{bad} should be rejected"
            );
            let divisions: Vec<u32> = bad.split('.').map(|d| d.parse().unwrap()).collect();
            assert!(DeweyId::try_from(divisions).is_err(), "{bad}");
        }
        let attr = id("1.3.1.3");
        assert!(attr.level() > attr.parent().unwrap().level());
        assert!(id("1.3.1.2.3").is_attribute());
    }

    #[test]
    fn levels_skip_carets_and_attribute_roots() {
        assert_eq!(DeweyId::root().level(), 1);
        assert_eq!(id("1.3").level(), 2);
        assert_eq!(id("1.3.4.3").level(), 3);
        assert_eq!(id("1.3.1.3").level(), 3);
        assert_eq!(id("1.3.2.2.3").level(), 3);
    }

    #[test]
    fn parents() {
        assert_eq!(DeweyId::root().parent(), None);
        assert_eq!(id("1.3").parent(), Some(DeweyId::root()));
        assert_eq!(id("1.3.4.3").parent(), Some(id("1.3")));
        assert_eq!(id("1.3.1.5").parent(), Some(id("1.3")));
        assert!(id("1.3.1.5").is_attribute());
        assert!(!id("1.3.5").is_attribute());
        assert!(id("1.3").is_parent_of(&id("1.3.1.3")));
        assert!(id("1.3").is_parent_of(&id("1.3.4.3")));
        assert!(!id("1").is_parent_of(&id("1.3.5")));
    }

    #[test]
    fn attributes_sort_between_element_and_children() {
        let element = id("1.3");
        let attribute = element.new_attribute_id();
        let child = element.new_child_id();
        assert!(element < attribute);
        assert!(attribute < child);
        assert!(!attribute.is_sibling_of(&child));
    }

    #[test]
    fn allocates_after_before_and_between() {
        let first = id("1.3");
        let after = DeweyId::new_between(Some(&first), None).unwrap();
        assert_eq!(after, id("1.5"));

        let before = DeweyId::new_between(None, Some(&first)).unwrap();
        assert_eq!(before, id("1.2.3"));
        assert!(before < first);
        assert_eq!(before.level(), first.level());

        let mid = DeweyId::new_between(Some(&first), Some(&after)).unwrap();
        assert_eq!(mid, id("1.4.3"));
        assert!(first < mid && mid < after);
        assert!(mid.is_sibling_of(&first));

        let wide = DeweyId::new_between(Some(&id("1.3")), Some(&id("1.9"))).unwrap();
        assert_eq!(wide, id("1.5"));
    }

    #[test]
    fn between_sorts_after_left_descendants() {
        let left = id("1.3");
        let right = id("1.4.3");
        let mid = DeweyId::new_between(Some(&left), Some(&right)).unwrap();
        let left_child = left.new_child_id();
        assert!(left_child < mid && mid < right);
        assert!(!mid.is_ancestor_of(&right));
    }

    #[test]
    fn rejects_non_siblings_and_inverted_bounds() {
        assert!(DeweyId::new_between(None, None).is_err());
        assert!(DeweyId::new_between(Some(&id("1.3")), Some(&id("1.3.5"))).is_err());
        assert!(DeweyId::new_between(Some(&id("1.5")), Some(&id("1.3"))).is_err());
        assert!(DeweyId::new_between(Some(&DeweyId::root()), None).is_err());
        let attr = id("1.3.1.3");
        assert!(DeweyId::new_between(Some(&attr), Some(&id("1.3.3"))).is_err());
    }

    #[test]
    fn ancestry_and_common_ancestor() {
        let a = id("1.3.5.7");
        let b = id("1.3.4.3.3");
        assert!(id("1.3").is_ancestor_of(&a));
        assert!(a.is_descendant_of(&DeweyId::root()));
        assert!(!a.is_ancestor_of(&a));
        assert_eq!(a.common_ancestor(&b), Some(id("1.3")));
        assert_eq!(a.common_ancestor(&a), Some(a.clone()));
        assert_eq!(
            id("1.3.1.3").common_ancestor(&id("1.3.1.5")),
            Some(id("1.3"))
        );
    }

    #[test]
    fn byte_form_roundtrips_across_tiers() {
        let d = DeweyId::from_divisions(vec![
            1,
            191,
            192,
            8383,
            8384,
            1_056_959,
            1_056_961,
            u32::MAX,
        ])
        .unwrap();
        let bytes = d.to_bytes();
        assert_eq!(DeweyId::from_bytes(&bytes).unwrap(), d);
    }

    #[test]
    fn byte_form_rejects_garbage() {
        assert!(DeweyId::from_bytes(&[]).is_err());
        assert!(DeweyId::from_bytes(&[0x01, 0xC0]).is_err());
        assert!(DeweyId::from_bytes(&[0x01, 0xF8]).is_err());
        assert!(DeweyId::from_bytes(&[0x01, WIDE_TAG, 0, 0, 0, 3]).is_err());
        assert!(DeweyId::from_bytes(&[0x01, 0x03, 0x01]).is_err());
        assert!(DeweyId::from_bytes(&[0x01, 0x03, 0x02, 0x01]).is_err());
        assert!(DeweyId::from_bytes(&[0x01, 0x03, 0x01, 0x03]).is_ok());
    }

    #[test]
    fn byte_order_matches_division_order() {
        let ids = [
            id("1"),
            id("1.3"),
            id("1.3.1.3"),
            id("1.3.3"),
            id("1.3.191"),
            id("1.3.193"),
            id("1.3.9001"),
            id("1.4.3"),
            id("1.5"),
        ];
        for w in ids.windows(2) {
            assert!(w[0] < w[1], "{} < {}", w[0], w[1]);
            assert!(w[0].to_bytes() < w[1].to_bytes(), "{} bytes < {} bytes", w[0], w[1]);
        }
    }
}
