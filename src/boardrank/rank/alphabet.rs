//! The fixed, totally ordered symbol set order keys are written in.
//!
//! Symbols are digits, then uppercase, then lowercase letters. That is also
//! their ASCII order, so comparing keys as plain strings compares them
//! symbol by symbol over this alphabet.

/// All symbols, in ascending order.
pub const SYMBOLS: &[u8; 62] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Number of symbols in the alphabet.
pub const BASE: usize = SYMBOLS.len();

/// Index of the canonical middle symbol (`V`).
pub const MID: usize = BASE / 2;

/// The smallest symbol. No key ends with it.
pub const MIN_SYMBOL: char = '0';

/// Position of `symbol` in the alphabet, or `None` for a foreign character.
pub fn index(symbol: char) -> Option<usize> {
    match symbol {
        '0'..='9' => Some(symbol as usize - '0' as usize),
        'A'..='Z' => Some(symbol as usize - 'A' as usize + 10),
        'a'..='z' => Some(symbol as usize - 'a' as usize + 36),
        _ => None,
    }
}

/// Symbol at position `i`.
///
/// # Panics
///
/// Panics if `i >= BASE`; callers only pass indexes derived from the alphabet.
pub fn symbol(i: usize) -> char {
    SYMBOLS[i] as char
}
