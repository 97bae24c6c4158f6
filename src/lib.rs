//! # `rawseq`
//!
//! Growable sequences on explicitly managed raw storage.
//!
//! 1. [Summary](#summary)
//! 1. [Examples](#examples)
//! 1. [Overview of types](#overview-of-types)
//! 1. [Failure behavior](#failure-behavior)
//!
//! # Summary
//!
//! `rawseq` separates the two jobs a dynamic array usually fuses together:
//! acquiring storage and managing element lifetimes. [`RawStorage<T>`] owns a
//! block of uninitialized slots and nothing else: it allocates and frees raw
//! bytes, and never runs an element constructor or destructor. [`Seq<T>`] is
//! the container built on top of it: it tracks how many slots hold live
//! elements, constructs and destroys them in place, and grows by relocating
//! the live range into a fresh, doubled block.
//!
//! The payoff of the split is precise control over partially-initialized
//! state. Every mutating operation on [`Seq`] is written as a
//! commit-or-rollback protocol: a fallible step (an element clone, a
//! caller-supplied constructor) either completes, or everything it built so
//! far is torn down and the sequence is observably unchanged.
//!
//! # Examples
//!
//! ```
//! use rawseq::{seq, Seq};
//!
//! let mut numbers: Seq<i32> = seq![1, 2, 3];
//! numbers.push(4);
//! numbers.insert(0, 0);
//! assert_eq!(numbers.as_slice(), &[0, 1, 2, 3, 4]);
//!
//! numbers.remove(2);
//! assert_eq!(numbers.as_slice(), &[0, 1, 3, 4]);
//! assert_eq!(numbers.pop(), Some(4));
//! ```
//!
//! Constructing elements directly in their slots:
//!
//! ```
//! use rawseq::{CloneOf, FillWith, Seq};
//!
//! let template = String::from("abc");
//! let mut seq = Seq::new();
//! seq.push_init(CloneOf(&template));          // clone straight into the slot
//! seq.push_init(FillWith(|| "xyz".repeat(2))); // build in place
//! assert_eq!(seq.as_slice(), &["abc", "xyzxyz"]);
//! ```
//!
//! # Overview of types
//!
//! | Standard library            | `rawseq`            | Notes                                          |
//! |-----------------------------|---------------------|------------------------------------------------|
//! | `Vec<T>`                    | [`Seq<T>`]          | No spare-capacity reuse on `clone`, no `drain` |
//! | (internal) raw buffer       | [`RawStorage<T>`]   | Public: allocation without construction        |
//! | `vec![..]`                  | [`seq![..]`](seq!)  |                                                |
//!
//! # Failure behavior
//!
//! Allocation failure aborts through [`alloc::alloc::handle_alloc_error`];
//! capacity arithmetic that overflows `usize` panics. Out-of-range positions
//! passed to the checked `Seq` surface panic: unlike an index contract left
//! undefined in release builds, a violation here is always reported. Panics
//! raised by element code (`Clone`, `Default`, a [`FillWith`] closure) unwind
//! through the container after its rollback protocol has run; the guarantees
//! per operation are documented on [`Seq`].

#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod prelude;
pub mod raw;
pub mod seq;

pub use raw::RawStorage;
pub use seq::Seq;

use core::ptr::NonNull;

/// A value that can initialize a single element slot in place.
///
/// This is the protocol behind [`Seq::push_init`] and [`Seq::insert_init`]:
/// the sequence reserves an uninitialized slot and hands its address to the
/// `Fill` implementation, which constructs the element directly there. The
/// standard implementations cover the usual construction modes:
///
/// * [`CloneOf`]: clone-construct from a borrowed element,
/// * [`FillWith`]: run a closure and write its result,
/// * [`FillWithDefault`]: value-construct via [`Default`].
///
/// # Examples
///
/// A filler that reads from a shared counter:
///
/// ```
/// use core::ptr::NonNull;
/// use core::sync::atomic::{AtomicU32, Ordering};
/// use rawseq::{Fill, Seq};
///
/// struct NextTicket<'a>(&'a AtomicU32);
///
/// unsafe impl Fill<u32> for NextTicket<'_> {
///     unsafe fn fill(self, slot: NonNull<u32>) {
///         slot.as_ptr().write(self.0.fetch_add(1, Ordering::Relaxed));
///     }
/// }
///
/// let counter = AtomicU32::new(7);
/// let mut seq = Seq::new();
/// seq.push_init(NextTicket(&counter));
/// seq.push_init(NextTicket(&counter));
/// assert_eq!(seq.as_slice(), &[7, 8]);
/// ```
///
/// # Safety
///
/// An implementor must guarantee:
/// * after `fill` returns, the slot holds a fully initialized `T`;
/// * if `fill` unwinds, the slot has not been initialized (nothing in it
///   needs to be dropped);
/// * `fill` writes to no memory other than the one slot it was given.
pub unsafe trait Fill<T> {
    /// Constructs one `T` at `slot`.
    ///
    /// # Safety
    ///
    /// The caller must pass a pointer to uninitialized memory that is valid
    /// for writes of one `T`.
    unsafe fn fill(self, slot: NonNull<T>);
}

/// Initializes a slot by cloning a borrowed element.
///
/// This is the "insert by copy" mode: the element is cloned straight into
/// the sequence's storage, with no intermediate temporary.
///
/// # Examples
///
/// ```
/// use rawseq::{CloneOf, Seq};
///
/// let word = String::from("hello");
/// let mut seq = Seq::new();
/// seq.push_init(CloneOf(&word));
/// assert_eq!(seq[0], "hello");
/// assert_eq!(word, "hello"); // original untouched
/// ```
pub struct CloneOf<'a, T>(pub &'a T);

// Safety: `clone()` either returns a complete value, which is written to the
// slot, or unwinds before anything is written.
unsafe impl<T: Clone> Fill<T> for CloneOf<'_, T> {
    #[inline]
    unsafe fn fill(self, slot: NonNull<T>) {
        slot.as_ptr().write(self.0.clone());
    }
}

/// Initializes a slot with the result of a closure.
///
/// This is the emplacement mode: constructor arguments are captured by the
/// closure and the element comes into existence at its final address.
///
/// # Examples
///
/// ```
/// use rawseq::{FillWith, Seq};
///
/// let mut seq = Seq::new();
/// seq.push_init(FillWith(|| vec![0u8; 16]));
/// assert_eq!(seq[0].len(), 16);
/// ```
pub struct FillWith<F>(pub F);

// Safety: the closure either returns a complete value, which is written to
// the slot, or unwinds before anything is written.
unsafe impl<T, F: FnOnce() -> T> Fill<T> for FillWith<F> {
    #[inline]
    unsafe fn fill(self, slot: NonNull<T>) {
        slot.as_ptr().write((self.0)());
    }
}

/// Initializes a slot with `T::default()`.
///
/// # Examples
///
/// ```
/// use rawseq::{FillWithDefault, Seq};
///
/// let mut seq: Seq<u64> = Seq::new();
/// seq.push_init(FillWithDefault);
/// assert_eq!(seq.as_slice(), &[0]);
/// ```
pub struct FillWithDefault;

// Safety: as for `FillWith`, with `T::default` as the constructor.
unsafe impl<T: Default> Fill<T> for FillWithDefault {
    #[inline]
    unsafe fn fill(self, slot: NonNull<T>) {
        slot.as_ptr().write(T::default());
    }
}
