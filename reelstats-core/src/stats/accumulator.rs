/// Running sum and count of the values seen for one statistic.
///
/// Only present values are ever pushed, so `len()` can be lower than the
/// number of titles that went into a row.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Accumulator<T> {
    sum: T,
    count: u32,
}

impl<T: Copy> Accumulator<T> {
    pub fn sum(&self) -> T {
        self.sum
    }

    pub fn len(&self) -> usize {
        self.count as usize
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

impl Accumulator<f64> {
    pub fn push(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }

    /// Arithmetic mean, `None` when nothing was accumulated.
    pub fn mean(&self) -> Option<f64> {
        if self.count == 0 {
            return None;
        }
        Some(self.sum / f64::from(self.count))
    }
}

impl Accumulator<i64> {
    pub fn push(&mut self, value: i64) {
        self.sum += value;
        self.count += 1;
    }

    /// Integer mean truncated toward zero, `None` when nothing was accumulated.
    pub fn mean(&self) -> Option<i64> {
        if self.count == 0 {
            return None;
        }
        Some(self.sum / i64::from(self.count))
    }
}

impl<V> Extend<V> for Accumulator<f64>
where
    V: Into<f64>,
{
    fn extend<I: IntoIterator<Item = V>>(&mut self, iter: I) {
        for value in iter {
            self.push(value.into());
        }
    }
}
