//! The benchmarked object.

use std::fmt::Write;

use refract_macros::Reflect;

/// Two string properties, analyzed by every phase.
#[derive(Clone, Debug, PartialEq, Eq, Reflect)]
pub struct UnknownType {
    #[reflect(name = "Prop1")]
    pub prop1: String,
    #[reflect(name = "Prop2")]
    pub prop2: String,
}

impl UnknownType {
    /// The object every run starts from.
    pub fn sample() -> Self {
        UnknownType {
            prop1: "Soy una prop".to_string(),
            prop2: "Soy otra prop".to_string(),
        }
    }

    /// Concatenation by direct field access.
    #[inline]
    pub fn direct(&self) -> String {
        let mut out = String::with_capacity(self.prop1.len() + self.prop2.len());
        out.push_str(&self.prop1);
        out.push_str(&self.prop2);
        out
    }

    /// Overwrite `Prop1` with a number derived from `iteration`, as each
    /// loop iteration does before analyzing.
    #[inline]
    pub fn churn(&mut self, iteration: u64) {
        self.prop1.clear();
        let _ = write!(self.prop1, "{}", scramble(iteration));
    }
}

/// Non-negative 31-bit value spread over the range, deterministic in `n`.
#[inline]
pub fn scramble(n: u64) -> u32 {
    let mixed = (n ^ (n >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    let mixed = (mixed ^ (mixed >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    // Top 31 bits; always fits.
    u32::try_from((mixed ^ (mixed >> 31)) >> 33).unwrap_or(u32::MAX >> 1)
}
