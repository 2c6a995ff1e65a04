//! Worklist ordering.
//!
//! The engine keeps a queue of nodes whose neighbourhood changed. A
//! [`Schedule`] decides which of them is inspected next. On series-parallel
//! networks every schedule yields the same resistance.

/// Chooses the next position to pop from a worklist of `len > 0` entries.
pub trait Schedule {
    fn pick(&mut self, len: usize) -> usize;
}

/// Oldest entry first.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fifo;

impl Schedule for Fifo {
    fn pick(&mut self, _len: usize) -> usize {
        0
    }
}

/// Newest entry first.
#[derive(Debug, Clone, Copy, Default)]
pub struct Lifo;

impl Schedule for Lifo {
    fn pick(&mut self, len: usize) -> usize {
        len - 1
    }
}

/// Adapts a closure into a schedule. Out-of-range picks are wrapped.
pub struct PickWith<F>(pub F);

impl<F> Schedule for PickWith<F>
where
    F: FnMut(usize) -> usize,
{
    fn pick(&mut self, len: usize) -> usize {
        (self.0)(len) % len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks() {
        assert_eq!(Fifo.pick(5), 0);
        assert_eq!(Lifo.pick(5), 4);
        let mut wrap = PickWith(|_: usize| 7);
        assert_eq!(wrap.pick(5), 2);
    }
}
