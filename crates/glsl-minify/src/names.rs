//! Short name generation for renamed identifiers
//!
//! This module converts a monotonically increasing index into a compact
//! identifier, so that the first renamed identifier becomes `_a`, the next
//! `_b`, and so on through `_9`, `_ba`, `_bb`, ...

/// Alphabet used for short name digits, in significance order.
///
/// The byte order is load-bearing: lowercase, then uppercase, then decimal
/// digits. Two implementations agree on generated names only if they agree
/// on this exact sequence.
const NAME_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Deterministic generator of short replacement names
///
/// Maps a strictly increasing index to a base-62 digit string and prepends
/// the configured output prefix. The mapping is a bijection, so no two
/// indices ever produce the same name.
#[derive(Debug, Clone)]
pub(crate) struct NameGenerator {
    /// Prefix prepended to every generated name
    prefix: String,
    /// Index handed out by the next call to [`NameGenerator::next_name`]
    index: u64,
}

impl NameGenerator {
    /// Creates a generator that starts counting at `start_index`
    ///
    /// # Arguments
    /// * `prefix` - Output prefix prepended to every generated name
    /// * `start_index` - First index to assign (0 or 1 depending on variant)
    pub fn new(prefix: impl Into<String>, start_index: u64) -> Self {
        Self {
            prefix: prefix.into(),
            index: start_index,
        }
    }

    /// Converts an index to its short name
    ///
    /// Pure function of `index` and the configured prefix. Digits are
    /// computed least-significant first by repeated division and reversed
    /// before emission; index 0 maps to the first alphabet character.
    pub fn assign(&self, index: u64) -> String {
        let base = NAME_ALPHABET.len() as u64;
        let mut digits = Vec::new();

        if index == 0 {
            digits.push(NAME_ALPHABET[0]);
        } else {
            let mut index = index;
            while index > 0 {
                digits.push(NAME_ALPHABET[(index % base) as usize]);
                index /= base;
            }
        }

        digits.reverse();
        let mut name = self.prefix.clone();
        name.extend(digits.into_iter().map(char::from));
        name
    }

    /// Returns the name for the current index and advances the counter
    pub fn next_name(&mut self) -> String {
        let name = self.assign(self.index);
        self.index += 1;
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_digit_names() {
        let names = NameGenerator::new("_", 0);
        assert_eq!(names.assign(0), "_a");
        assert_eq!(names.assign(1), "_b");
        assert_eq!(names.assign(25), "_z");
        assert_eq!(names.assign(26), "_A");
        assert_eq!(names.assign(51), "_Z");
        assert_eq!(names.assign(52), "_0");
        assert_eq!(names.assign(61), "_9");
    }

    #[test]
    fn test_multi_digit_names() {
        let names = NameGenerator::new("_", 0);
        // 62 = 1 * 62 + 0 -> "ba", most significant digit first
        assert_eq!(names.assign(62), "_ba");
        assert_eq!(names.assign(63), "_bb");
        assert_eq!(names.assign(62 * 62), "_baa");
    }

    #[test]
    fn test_next_name_advances() {
        let mut names = NameGenerator::new("_", 0);
        assert_eq!(names.next_name(), "_a");
        assert_eq!(names.next_name(), "_b");
        assert_eq!(names.next_name(), "_c");

        let mut from_one = NameGenerator::new("_", 1);
        assert_eq!(from_one.next_name(), "_b");
    }

    #[test]
    fn test_bijectivity() {
        let names = NameGenerator::new("_", 0);
        let mut seen = std::collections::HashSet::new();
        for index in 0..4000 {
            assert!(seen.insert(names.assign(index)), "collision at index {index}");
        }
    }

    #[test]
    fn test_custom_prefix() {
        let names = NameGenerator::new("v_", 0);
        assert_eq!(names.assign(0), "v_a");
        assert_eq!(names.assign(62), "v_ba");
    }
}
