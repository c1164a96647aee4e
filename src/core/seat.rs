//! Seat identification and per-seat data storage.
//!
//! ## SeatId
//!
//! Type-safe seat identifier. Seats are 0-based and turn order is
//! always `seat + 1` modulo the seat count.
//!
//! ## SeatMap
//!
//! Per-seat data backed by a `Vec` for O(1) access, indexable by `SeatId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Seat identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SeatId(pub u8);

impl SeatId {
    /// Create a new seat ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The seat that acts after this one.
    ///
    /// ```
    /// use skyjo_engine::core::SeatId;
    ///
    /// assert_eq!(SeatId::new(0).next(3), SeatId::new(1));
    /// assert_eq!(SeatId::new(2).next(3), SeatId::new(0));
    /// ```
    #[must_use]
    pub fn next(self, seat_count: usize) -> Self {
        Self(((self.index() + 1) % seat_count) as u8)
    }

    /// Iterate over all seats of a game with `seat_count` seats.
    pub fn all(seat_count: usize) -> impl Iterator<Item = SeatId> {
        (0..seat_count as u8).map(SeatId)
    }
}

impl std::fmt::Display for SeatId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.0)
    }
}

/// Per-seat data storage with O(1) access.
///
/// ```
/// use skyjo_engine::core::{SeatId, SeatMap};
///
/// let mut totals: SeatMap<i32> = SeatMap::with_value(3, 0);
/// totals[SeatId::new(1)] += 7;
/// assert_eq!(totals.as_slice(), &[0, 7, 0]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatMap<T> {
    data: Vec<T>,
}

impl<T> SeatMap<T> {
    /// Create a new map with values from a factory function.
    pub fn new(seat_count: usize, factory: impl FnMut(SeatId) -> T) -> Self {
        assert!(seat_count > 0, "Must have at least 1 seat");
        assert!(seat_count <= 255, "At most 255 seats supported");

        let data = SeatId::all(seat_count).map(factory).collect();

        Self { data }
    }

    /// Create a new map with all entries set to the same value.
    pub fn with_value(seat_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(seat_count, |_| value.clone())
    }

    /// Wrap an existing vector, one entry per seat in seat order.
    pub fn from_vec(data: Vec<T>) -> Self {
        assert!(!data.is_empty(), "Must have at least 1 seat");
        Self { data }
    }

    /// Number of seats.
    #[must_use]
    pub fn seat_count(&self) -> usize {
        self.data.len()
    }

    /// Iterate over (SeatId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (SeatId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (SeatId(i as u8), v))
    }

    /// Iterate over (SeatId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (SeatId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (SeatId(i as u8), v))
    }

    /// Iterate over values in seat order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Build a new map by transforming every entry.
    pub fn map<U>(&self, mut f: impl FnMut(SeatId, &T) -> U) -> SeatMap<U> {
        SeatMap {
            data: self.iter().map(|(seat, v)| f(seat, v)).collect(),
        }
    }

    /// Borrow the entries as a slice in seat order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T: Copy + Ord> SeatMap<T> {
    /// Seat holding the largest value; ties go to the lowest index.
    #[must_use]
    pub fn argmax(&self) -> SeatId {
        let mut best = 0;
        for (i, v) in self.data.iter().enumerate().skip(1) {
            if *v > self.data[best] {
                best = i;
            }
        }
        SeatId(best as u8)
    }

    /// Seat holding the smallest value; ties go to the lowest index.
    #[must_use]
    pub fn argmin(&self) -> SeatId {
        let mut best = 0;
        for (i, v) in self.data.iter().enumerate().skip(1) {
            if *v < self.data[best] {
                best = i;
            }
        }
        SeatId(best as u8)
    }
}

impl<T> Index<SeatId> for SeatMap<T> {
    type Output = T;

    fn index(&self, seat: SeatId) -> &Self::Output {
        &self.data[seat.index()]
    }
}

impl<T> IndexMut<SeatId> for SeatMap<T> {
    fn index_mut(&mut self, seat: SeatId) -> &mut Self::Output {
        &mut self.data[seat.index()]
    }
}
