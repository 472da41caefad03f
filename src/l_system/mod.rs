//! The l_system module provides the Lindenmayer string-rewriting step that
//! feeds the kolam stroke interpreters. Take a look at the
//! [`crate::l_system::LSystem`] struct for more details, and examples.

use std::collections::HashMap;

/// # LSystem
///
/// A deterministic L-system: an axiom plus a symbol substitution table.
/// Symbols absent from the table rewrite to themselves, so there is no such
/// thing as an invalid symbol.
///
/// # Example
///
/// ```rust
/// use kolam_rs::l_system::LSystem;
/// use std::collections::HashMap;
///
/// let kolam = LSystem {
///     axiom: "FBFBFBFB".to_string(),
///     rules: HashMap::from([
///         ('A', "AFBFA".to_string()),
///         ('B', "AFBFBFBFA".to_string())]),
/// };
/// let expanded = kolam.expand(2);
/// assert!(expanded.starts_with("FAFBFA"));
/// ```
#[derive(Clone, Debug)]
pub struct LSystem {
    pub axiom: String,
    pub rules: HashMap<char, String>,
}

impl LSystem {
    /// # expand
    ///
    /// Expands the L-system by the requested number of substitution rounds
    /// and returns the resulting symbol string. Each round fully materializes
    /// its output before the next round runs, so contracting or cyclic rule
    /// sets terminate like any other: the loop bound is `iterations`, never a
    /// fixed-point check. Zero iterations returns the axiom unchanged.
    ///
    /// Non-contracting rules grow the string exponentially in `iterations`;
    /// callers exposing this externally must cap `iterations` themselves.
    pub fn expand(&self, iterations: u32) -> String {
        let mut state = self.axiom.clone();
        for _ in 0..iterations {
            state = state
                .chars()
                .map(|c| match self.rules.get(&c) {
                    Some(replacement) => replacement.clone(),
                    None => String::from(c),
                })
                .collect();
        }
        state
    }
}
