/// A bounded or wraparound snap-index counter with value semantics.
///
/// Arithmetic wraps modulo the snap count when looping, otherwise clamps to
/// `[0, len - 1]`. No operation panics; out-of-range inputs are silently
/// normalized. The type is `Copy` and every mutation returns a new value, so
/// "current", "previous" and "target" indexes are always independent copies,
/// never aliases of one mutable cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Index {
    value: usize,
    len: usize,
    looping: bool,
}

impl Index {
    /// Creates a counter over `len` snap points, normalizing `value`.
    ///
    /// An empty range behaves as a single snap at 0.
    pub fn new(value: usize, len: usize, looping: bool) -> Self {
        let len = len.max(1);
        Self {
            value: 0,
            len,
            looping,
        }
        .set(value as i64)
    }

    pub fn get(self) -> usize {
        self.value
    }

    pub fn len(self) -> usize {
        self.len
    }

    pub fn min(self) -> usize {
        0
    }

    pub fn max(self) -> usize {
        self.len - 1
    }

    /// Returns a copy positioned at `n` (wrapped or clamped).
    pub fn set(self, n: i64) -> Self {
        let len = self.len as i64;
        let value = if self.looping {
            ((n % len) + len) % len
        } else {
            n.clamp(0, len - 1)
        };
        Self {
            value: value as usize,
            ..self
        }
    }

    /// Returns a copy advanced by `n` (wrapped or clamped).
    pub fn add(self, n: i64) -> Self {
        self.set(self.value as i64 + n)
    }
}
