use std::cmp::Ordering;
use std::fmt;

/// A parsed generic version.
///
/// Any string is a valid version: parsing tokenizes it into numeric and
/// qualifier items and never fails. Ordering follows the generic scheme used
/// by Maven-style tooling:
/// - numeric items compare numerically (`1.10 > 1.9`),
/// - trailing zero and empty items are padding (`1.0 == 1.0.0 == 1`),
/// - well-known qualifiers sort below the plain release
///   (`alpha < beta < milestone < rc < snapshot < "" < sp`),
/// - unknown qualifiers sort after `sp`, lexically among themselves.
///
/// `Display` returns the original string unchanged.
#[derive(Debug, Clone)]
pub struct Version {
    raw: String,
    items: Vec<Item>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Item {
    Number(u64),
    Qualifier(String),
}

/// Rank assigned to qualifiers that sort after every well-known one.
const UNKNOWN_QUALIFIER: u8 = 7;

fn qualifier_rank(qualifier: &str) -> u8 {
    match qualifier {
        "alpha" | "a" => 0,
        "beta" | "b" => 1,
        "milestone" | "m" => 2,
        "rc" | "cr" => 3,
        "snapshot" => 4,
        "" | "final" | "ga" | "release" => 5,
        "sp" => 6,
        _ => UNKNOWN_QUALIFIER,
    }
}

fn cmp_qualifiers(a: &str, b: &str) -> Ordering {
    let (ra, rb) = (qualifier_rank(a), qualifier_rank(b));
    match ra.cmp(&rb) {
        Ordering::Equal if ra == UNKNOWN_QUALIFIER => a.cmp(b),
        other => other,
    }
}

/// Split a version string into numeric and qualifier items. Separators are
/// `.`, `-`, `_`, and any digit/letter transition (`1.0a1` → `1`, `0`, `a`, `1`).
fn tokenize(raw: &str) -> Vec<Item> {
    let lower = raw.trim().to_ascii_lowercase();
    let mut items = Vec::new();
    let mut segment = String::new();

    let flush = |segment: &mut String, items: &mut Vec<Item>| {
        if segment.is_empty() {
            return;
        }
        let item = match segment.parse::<u64>() {
            Ok(n) => Item::Number(n),
            Err(_) => Item::Qualifier(segment.clone()),
        };
        items.push(item);
        segment.clear();
    };

    for c in lower.chars() {
        match c {
            '.' | '-' | '_' => flush(&mut segment, &mut items),
            _ => {
                let boundary = segment
                    .chars()
                    .last()
                    .is_some_and(|prev| prev.is_ascii_digit() != c.is_ascii_digit());
                if boundary {
                    flush(&mut segment, &mut items);
                }
                segment.push(c);
            }
        }
    }
    flush(&mut segment, &mut items);
    items
}

fn cmp_items(a: &[Item], b: &[Item]) -> Ordering {
    for i in 0..a.len().max(b.len()) {
        // A missing item compares as padding: 0 against numbers, the plain
        // release against qualifiers.
        let ord = match (a.get(i), b.get(i)) {
            (Some(Item::Number(x)), Some(Item::Number(y))) => x.cmp(y),
            (Some(Item::Number(_)), Some(Item::Qualifier(_))) => Ordering::Greater,
            (Some(Item::Qualifier(_)), Some(Item::Number(_))) => Ordering::Less,
            (Some(Item::Qualifier(x)), Some(Item::Qualifier(y))) => cmp_qualifiers(x, y),
            (Some(Item::Number(x)), None) => x.cmp(&0),
            (Some(Item::Qualifier(x)), None) => cmp_qualifiers(x, ""),
            (None, Some(Item::Number(y))) => 0.cmp(y),
            (None, Some(Item::Qualifier(y))) => cmp_qualifiers("", y),
            (None, None) => Ordering::Equal,
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }
    Ordering::Equal
}

impl Version {
    /// Parse a version string. Never fails; unrecognized input is treated as
    /// a single opaque qualifier.
    pub fn parse(raw: &str) -> Self {
        Self {
            raw: raw.trim().to_string(),
            items: tokenize(raw),
        }
    }

    /// The original string form.
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl From<&str> for Version {
    fn from(raw: &str) -> Self {
        Version::parse(raw)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_items(&self.items, &other.items)
    }
}
