//! Element types that account for their own lifecycle, for exercising the
//! rollback behavior of sequence operations.

use std::cell::Cell;
use std::rc::Rc;

/// Shared tally of clone and drop calls, with an optional fuse that makes a
/// specific clone call panic.
#[derive(Default)]
pub struct Counters {
    clones: Cell<usize>,
    drops: Cell<usize>,
    clone_fuse: Cell<Option<usize>>,
}

impl Counters {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn clones(&self) -> usize {
        self.clones.get()
    }

    pub fn drops(&self) -> usize {
        self.drops.get()
    }

    /// Arms the fuse: the `nth` clone call from now (1-based) will panic.
    pub fn panic_on_clone(&self, nth: usize) {
        self.clone_fuse.set(Some(self.clones.get() + nth));
    }
}

/// An element that reports clones and drops to a shared [`Counters`].
pub struct Tracked {
    pub value: i32,
    counters: Rc<Counters>,
}

impl Tracked {
    pub fn new(value: i32, counters: &Rc<Counters>) -> Self {
        Tracked {
            value,
            counters: Rc::clone(counters),
        }
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        let count = self.counters.clones.get() + 1;
        self.counters.clones.set(count);
        if self.counters.clone_fuse.get() == Some(count) {
            panic!("clone fuse blown");
        }
        Tracked {
            value: self.value,
            counters: Rc::clone(&self.counters),
        }
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.counters.drops.set(self.counters.drops.get() + 1);
    }
}

/// Snapshot of a sequence of [`Tracked`] as plain values.
pub fn values(seq: &rawseq::Seq<Tracked>) -> Vec<i32> {
    seq.iter().map(|t| t.value).collect()
}
