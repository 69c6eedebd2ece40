//! The two sides of the table and per-side data storage.
//!
//! ## Side
//!
//! `Side::A` is "Player 1", `Side::B` is "Player 2".
//!
//! ## SideMap
//!
//! One value per side with indexing by `Side`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    A,
    B,
}

impl Side {
    /// Both sides, A first.
    pub const BOTH: [Side; 2] = [Side::A, Side::B];

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    /// 1-based seat number used in player-facing messages.
    #[must_use]
    pub const fn seat(self) -> u8 {
        match self {
            Side::A => 1,
            Side::B => 2,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.seat())
    }
}

/// A value for each side.
///
/// ## Example
///
/// ```
/// use circle_of_life::core::{Side, SideMap};
///
/// let mut wins: SideMap<u32> = SideMap::default();
/// wins[Side::B] += 1;
///
/// assert_eq!(wins[Side::A], 0);
/// assert_eq!(wins[Side::B], 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    pub a: T,
    pub b: T,
}

impl<T> SideMap<T> {
    /// Create from the two values.
    pub const fn new(a: T, b: T) -> Self {
        Self { a, b }
    }

    /// Create with values from a factory function.
    pub fn from_fn(mut factory: impl FnMut(Side) -> T) -> Self {
        let a = factory(Side::A);
        let b = factory(Side::B);
        Self { a, b }
    }

    /// Get a reference to a side's data.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        match side {
            Side::A => &self.a,
            Side::B => &self.b,
        }
    }

    /// Get a mutable reference to a side's data.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        match side {
            Side::A => &mut self.a,
            Side::B => &mut self.b,
        }
    }

    /// Iterate over (Side, &T) pairs, A first.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        [(Side::A, &self.a), (Side::B, &self.b)].into_iter()
    }

    /// Map both values.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> SideMap<U> {
        SideMap {
            a: f(self.a),
            b: f(self.b),
        }
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_basics() {
        assert_eq!(Side::A.opponent(), Side::B);
        assert_eq!(Side::B.opponent(), Side::A);
        assert_eq!(format!("{}", Side::A), "Player 1");
        assert_eq!(format!("{}", Side::B), "Player 2");
    }

    #[test]
    fn test_side_map_from_fn() {
        let map = SideMap::from_fn(|side| side.seat() * 10);

        assert_eq!(map[Side::A], 10);
        assert_eq!(map[Side::B], 20);
    }

    #[test]
    fn test_side_map_mutation() {
        let mut map: SideMap<Vec<i32>> = SideMap::default();

        map[Side::A].push(1);
        map[Side::B].push(2);
        map[Side::B].push(3);

        assert_eq!(map.a, vec![1]);
        assert_eq!(map.b, vec![2, 3]);
    }

    #[test]
    fn test_side_map_iter_and_map() {
        let map = SideMap::new(3, 4);

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(Side::A, &3), (Side::B, &4)]);

        let doubled = map.map(|v| v * 2);
        assert_eq!(doubled, SideMap::new(6, 8));
    }

    #[test]
    fn test_side_map_serialization() {
        let map = SideMap::new(1u32, 2u32);
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"a":1,"b":2}"#);

        let deserialized: SideMap<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
