//! Lucas sequence: L(1) = 1, L(2) = 3, L(n) = L(n-1) + L(n-2).

use crate::domain::model::SequenceEntry;
use crate::utils::error::{LucasError, Result};

/// Largest index whose Lucas number fits in an `i64`.
pub const MAX_INDEX: u32 = 90;

const FIRST: i64 = 1;
const SECOND: i64 = 3;

/// Lucas number at the 1-based index `n`.
///
/// Folds two running values forward, O(n) time and O(1) space. Additions are
/// checked, so indices past [`MAX_INDEX`] report `Overflow` instead of wrapping.
pub fn lucas(n: u32) -> Result<i64> {
    match n {
        0 => Err(LucasError::InvalidCount { value: 0 }),
        1 => Ok(FIRST),
        2 => Ok(SECOND),
        _ => {
            let (mut a, mut b) = (FIRST, SECOND);
            for index in 3..=n {
                let next = a
                    .checked_add(b)
                    .ok_or(LucasError::Overflow { index })?;
                a = b;
                b = next;
            }
            Ok(b)
        }
    }
}

/// Iterator over `SequenceEntry` values starting at index 1.
///
/// Stops after [`MAX_INDEX`], where the next addition would overflow.
#[derive(Debug, Clone)]
pub struct LucasSequence {
    next_index: u32,
    current: Option<i64>,
    following: Option<i64>,
}

impl LucasSequence {
    pub fn new() -> Self {
        Self {
            next_index: 1,
            current: Some(FIRST),
            following: Some(SECOND),
        }
    }
}

impl Default for LucasSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for LucasSequence {
    type Item = SequenceEntry;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.current?;
        let entry = SequenceEntry {
            index: self.next_index,
            value,
        };

        self.current = self.following;
        self.following = self.following.and_then(|f| value.checked_add(f));
        self.next_index += 1;

        Some(entry)
    }
}

/// The first `count` entries, in index order.
pub fn entries(count: u32) -> Result<Vec<SequenceEntry>> {
    if count == 0 {
        return Err(LucasError::InvalidCount { value: 0 });
    }
    if count > MAX_INDEX {
        return Err(LucasError::Overflow { index: MAX_INDEX + 1 });
    }

    Ok(LucasSequence::new().take(count as usize).collect())
}
