//! # Rank Keys
//!
//! Sibling records (boards, lists within a board, cards within a list) are
//! ordered by an [`OrderKey`]: an opaque string whose only meaning is its
//! position under plain lexicographic comparison. Inserting or moving a
//! record computes one new key from its neighbours; nothing else is ever
//! renumbered.
//!
//! ## Key shape
//!
//! Keys are non-empty strings over the 62-symbol [`alphabet`] and never end
//! with the minimum symbol `0`. The trailing-`0` rule keeps the key space
//! dense: between `A` and `A0` there is no string at all, so such keys are
//! refused as input and never produced as output.
//!
//! ## Operations
//!
//! - [`key_between`]: bisects the gap between two optional neighbours.
//! - [`key_after`] / [`key_before`]: cheap append/prepend at an open end.
//! - [`evenly_spaced_keys`]: a fresh, evenly spread key set for a whole
//!   sibling group (used when a group is rebalanced).
//!
//! Every function is pure: no I/O, no shared state, safe to call from any
//! number of threads. Two callers using the same stale neighbour pair get the
//! same key; resolving that tie is up to the persistence layer.

pub mod alphabet;

use crate::error::RankError;
use alphabet::{index, symbol, BASE, MID, MIN_SYMBOL};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A lexicographically sortable position among siblings.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderKey(String);

impl OrderKey {
    /// Parses and validates a key.
    pub fn parse(s: &str) -> Result<Self, RankError> {
        digits(s, "key")?;
        Ok(OrderKey(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the key is well formed. Keys loaded from disk may not be.
    pub fn is_valid(&self) -> bool {
        digits(&self.0, "key").is_ok()
    }
}

impl fmt::Display for OrderKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for OrderKey {
    type Err = RankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for OrderKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// The key given to the first record of an empty sibling group.
pub fn first_key() -> OrderKey {
    OrderKey(symbol(MID).to_string())
}

/// Returns a key strictly between `lower` and `upper`.
///
/// A missing bound is an open end. Fails with [`RankError::InvalidRange`]
/// when a bound is malformed or `lower >= upper`.
pub fn key_between(lower: Option<&str>, upper: Option<&str>) -> Result<OrderKey, RankError> {
    let lower_digits = lower.map(|k| digits(k, "lower bound")).transpose()?;
    let upper_digits = upper.map(|k| digits(k, "upper bound")).transpose()?;

    if let (Some(l), Some(u)) = (lower, upper) {
        if l >= u {
            return Err(RankError::InvalidRange(format!(
                "lower bound {:?} must sort before upper bound {:?}",
                l, u
            )));
        }
    }

    let lower_digits = lower_digits.unwrap_or_default();
    // Upper binds only while the key built so far equals its prefix.
    let mut upper_bound = upper_digits.as_deref();
    let mut key = String::new();
    let mut pos = 0;

    loop {
        let lo = lower_digits.get(pos).map_or(-1, |&d| d as isize);
        let hi = match upper_bound {
            Some(u) => match u.get(pos) {
                Some(&d) => d as isize,
                // lower < upper rules this out; keep the walk finite regardless.
                None => {
                    return Err(RankError::InvalidRange(format!(
                        "no key fits between {:?} and {:?}",
                        lower, upper
                    )))
                }
            },
            None => BASE as isize,
        };

        if hi - lo > 1 {
            let mid = (lo + hi + 1) / 2;
            if mid > 0 {
                key.push(symbol(mid as usize));
                return Ok(OrderKey(key));
            }
            // Only `0` fits here and a key may not end with it.
            key.push(MIN_SYMBOL);
            upper_bound = None;
        } else if hi == lo {
            key.push(symbol(lo as usize));
        } else if lo >= 0 {
            key.push(symbol(lo as usize));
            upper_bound = None;
        } else {
            key.push(MIN_SYMBOL);
        }
        pos += 1;
    }
}

/// Returns a key strictly after `prev`, or the first key when absent.
pub fn key_after(prev: Option<&str>) -> Result<OrderKey, RankError> {
    let Some(prev) = prev else {
        return Ok(first_key());
    };
    let digits = digits(prev, "previous key")?;
    let last = digits[digits.len() - 1];

    let mut key: String = prev[..prev.len() - 1].to_string();
    if last + 1 < BASE {
        key.push(symbol(last + 1));
    } else {
        key.push(symbol(last));
        key.push(symbol(MID));
    }
    Ok(OrderKey(key))
}

/// Returns a key strictly before `next`.
///
/// Usually a single symbol one below `next`'s first symbol. Leading `0`s are
/// kept, since nothing shorter sorts below them.
pub fn key_before(next: &str) -> Result<OrderKey, RankError> {
    let digits = digits(next, "next key")?;
    let zeros = digits.iter().take_while(|&&d| d == 0).count();
    let first = digits[zeros];

    let mut key = MIN_SYMBOL.to_string().repeat(zeros);
    if first >= 2 {
        key.push(symbol(first - 1));
    } else {
        key.push(MIN_SYMBOL);
        key.push(symbol(MID));
    }
    Ok(OrderKey(key))
}

/// Returns `count` strictly increasing keys with equal gaps between them.
///
/// Keys are fixed-width base-62 numbers spread evenly over the smallest
/// width that fits `count + 1` gaps, with trailing `0`s dropped.
pub fn evenly_spaced_keys(count: usize) -> Result<Vec<OrderKey>, RankError> {
    if count == 0 {
        return Err(RankError::InvalidArgument(
            "count must be greater than zero".to_string(),
        ));
    }

    let slots = count as u128 + 1;
    let mut width = 1;
    let mut capacity = BASE as u128;
    while capacity < slots {
        width += 1;
        capacity *= BASE as u128;
    }
    let step = capacity / slots;

    Ok((1..=count as u128)
        .map(|i| OrderKey(encode(i * step, width)))
        .collect())
}

fn encode(mut value: u128, width: usize) -> String {
    let mut out = vec![MIN_SYMBOL; width];
    for slot in out.iter_mut().rev() {
        *slot = symbol((value % BASE as u128) as usize);
        value /= BASE as u128;
    }
    while out.last() == Some(&MIN_SYMBOL) {
        out.pop();
    }
    out.into_iter().collect()
}

/// Validates `key` and returns its symbol indexes.
fn digits(key: &str, what: &str) -> Result<Vec<usize>, RankError> {
    if key.is_empty() {
        return Err(RankError::InvalidRange(format!("{} is empty", what)));
    }
    let digits = key
        .chars()
        .map(|c| {
            index(c).ok_or_else(|| {
                RankError::InvalidRange(format!(
                    "{} {:?} contains symbol {:?} outside the alphabet",
                    what, key, c
                ))
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    if key.ends_with(MIN_SYMBOL) {
        return Err(RankError::InvalidRange(format!(
            "{} {:?} ends with the minimum symbol",
            what, key
        )));
    }
    Ok(digits)
}
