//! 9x9 cell set packed into three 27-bit fields, one per band of three rows.
//! Cell (r, c) lives in field r / 3 at bit (r % 3) * 9 + c.

use std::fmt;
use std::ops::{BitAnd, BitOr, BitXor, Not};

use serde::{Deserialize, Deserializer, Serialize};

const USED_BITS: u32 = 0x7FF_FFFF;
const ROW_0: u32 = 0x1FF;
const ROW_2: u32 = ROW_0 << 18;
const LEFT_BITS: u32 = 1 | (1 << 9) | (1 << 18);
const RIGHT_BITS: u32 = LEFT_BITS << 8;
const TOP_LEFT_CUBE: u32 = 0x7 | (0x7 << 9) | (0x7 << 18);

/// Set of cells on the 9x9 grid. Used for boards, pieces and placements alike.
///
/// No bit outside the 81 valid cells is ever set; every constructor and
/// operation masks its fields with `USED_BITS`. The derived ordering compares
/// the three fields lexicographically and gives pieces a fixed total order.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub struct Bitset81([u32; 3]);

const ROWS: [Bitset81; 9] = {
    let mut table = [Bitset81::EMPTY; 9];
    let mut r = 0;
    while r < 9 {
        let mut fields = [0u32; 3];
        fields[r / 3] = ROW_0 << ((r % 3) * 9);
        table[r] = Bitset81(fields);
        r += 1;
    }
    table
};

const COLUMNS: [Bitset81; 9] = {
    let mut table = [Bitset81::EMPTY; 9];
    let mut c = 0;
    while c < 9 {
        let col = LEFT_BITS << c;
        table[c] = Bitset81([col, col, col]);
        c += 1;
    }
    table
};

const CUBES: [Bitset81; 9] = {
    let mut table = [Bitset81::EMPTY; 9];
    let mut i = 0;
    while i < 9 {
        let mut fields = [0u32; 3];
        fields[i / 3] = TOP_LEFT_CUBE << ((i % 3) * 3);
        table[i] = Bitset81(fields);
        i += 1;
    }
    table
};

/// Rows 0-8, then columns 0-8, then cubes 0-8.
const REGIONS: [Bitset81; 27] = {
    let mut table = [Bitset81::EMPTY; 27];
    let mut i = 0;
    while i < 9 {
        table[i] = ROWS[i];
        table[9 + i] = COLUMNS[i];
        table[18 + i] = CUBES[i];
        i += 1;
    }
    table
};

impl Bitset81 {
    pub const SIZE: usize = 9;
    pub const EMPTY: Self = Self([0, 0, 0]);
    pub const FULL: Self = Self([USED_BITS, USED_BITS, USED_BITS]);

    /// Build from raw fields, dropping any bit past the 27 used per field.
    pub const fn from_fields(fields: [u32; 3]) -> Self {
        Self([
            fields[0] & USED_BITS,
            fields[1] & USED_BITS,
            fields[2] & USED_BITS,
        ])
    }

    pub const fn fields(self) -> [u32; 3] {
        self.0
    }

    /// Single-cell set.
    pub const fn bit(row: usize, col: usize) -> Self {
        assert!(row < 9 && col < 9, "cell out of range");
        let mut fields = [0u32; 3];
        fields[row / 3] = 1 << ((row % 3) * 9 + col);
        Self(fields)
    }

    #[inline]
    pub const fn row(i: usize) -> Self {
        ROWS[i]
    }

    #[inline]
    pub const fn column(i: usize) -> Self {
        COLUMNS[i]
    }

    /// 3x3 box `i`, numbered row-major across the 3x3 grid of boxes.
    #[inline]
    pub const fn cube(i: usize) -> Self {
        CUBES[i]
    }

    /// Every row, column and cube: the regions a clear can remove.
    #[inline]
    pub fn regions() -> &'static [Bitset81; 27] {
        &REGIONS
    }

    #[inline(always)]
    pub const fn and(self, other: Self) -> Self {
        Self([
            self.0[0] & other.0[0],
            self.0[1] & other.0[1],
            self.0[2] & other.0[2],
        ])
    }

    #[inline(always)]
    pub const fn or(self, other: Self) -> Self {
        Self([
            self.0[0] | other.0[0],
            self.0[1] | other.0[1],
            self.0[2] | other.0[2],
        ])
    }

    /// Cells in `self` but not in `other`.
    #[inline(always)]
    pub const fn diff(self, other: Self) -> Self {
        Self([
            self.0[0] & !other.0[0],
            self.0[1] & !other.0[1],
            self.0[2] & !other.0[2],
        ])
    }

    #[inline(always)]
    pub const fn xor(self, other: Self) -> Self {
        Self([
            self.0[0] ^ other.0[0],
            self.0[1] ^ other.0[1],
            self.0[2] ^ other.0[2],
        ])
    }

    #[inline(always)]
    pub const fn complement(self) -> Self {
        Self([
            !self.0[0] & USED_BITS,
            !self.0[1] & USED_BITS,
            !self.0[2] & USED_BITS,
        ])
    }

    #[inline(always)]
    pub fn count(self) -> u32 {
        self.0[0].count_ones() + self.0[1].count_ones() + self.0[2].count_ones()
    }

    #[inline(always)]
    pub fn count_intersection(self, other: Self) -> u32 {
        self.and(other).count()
    }

    #[inline(always)]
    pub fn count_diff(self, other: Self) -> u32 {
        self.diff(other).count()
    }

    #[inline(always)]
    pub const fn is_empty(self) -> bool {
        (self.0[0] | self.0[1] | self.0[2]) == 0
    }

    #[inline(always)]
    pub fn any(self) -> bool {
        !self.is_empty()
    }

    #[inline(always)]
    pub fn is_disjoint(self, other: Self) -> bool {
        self.and(other).is_empty()
    }

    /// True if every cell of `self` is also in `other`.
    #[inline(always)]
    pub fn is_subset_of(self, other: Self) -> bool {
        self.diff(other).is_empty()
    }

    #[inline]
    pub fn at(self, row: usize, col: usize) -> bool {
        self.and(Self::bit(row, col)).any()
    }

    /// Flip a single cell. Used by manual board editing.
    #[inline]
    pub fn toggle(self, row: usize, col: usize) -> Self {
        self.xor(Self::bit(row, col))
    }

    /// Move every cell one column right; column 8 falls off.
    #[inline(always)]
    pub fn shift_right(self) -> Self {
        Self([
            (self.0[0] & !RIGHT_BITS) << 1,
            (self.0[1] & !RIGHT_BITS) << 1,
            (self.0[2] & !RIGHT_BITS) << 1,
        ])
    }

    /// Move every cell one column left; column 0 falls off.
    #[inline(always)]
    pub fn shift_left(self) -> Self {
        Self([
            (self.0[0] & !LEFT_BITS) >> 1,
            (self.0[1] & !LEFT_BITS) >> 1,
            (self.0[2] & !LEFT_BITS) >> 1,
        ])
    }

    /// Move every cell one row down, carrying the last row of each field
    /// into the first row of the next. Row 8 falls off.
    #[inline(always)]
    pub fn shift_down(self) -> Self {
        Self([
            (self.0[0] << 9) & USED_BITS,
            ((self.0[1] << 9) | ((self.0[0] & ROW_2) >> 18)) & USED_BITS,
            ((self.0[2] << 9) | ((self.0[1] & ROW_2) >> 18)) & USED_BITS,
        ])
    }

    /// Move every cell one row up. Row 0 falls off.
    #[inline(always)]
    pub fn shift_up(self) -> Self {
        Self([
            (self.0[0] >> 9) | ((self.0[1] & ROW_0) << 18),
            (self.0[1] >> 9) | ((self.0[2] & ROW_0) << 18),
            self.0[2] >> 9,
        ])
    }

    /// Occupied cells as `(row, col)`, row-major.
    pub fn cells(self) -> Cells {
        Cells {
            fields: self.0,
            field: 0,
        }
    }
}

pub struct Cells {
    fields: [u32; 3],
    field: usize,
}

impl Iterator for Cells {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        while self.field < 3 {
            let bits = self.fields[self.field];
            if bits != 0 {
                let index = bits.trailing_zeros() as usize;
                self.fields[self.field] = bits & (bits - 1);
                return Some((self.field * 3 + index / 9, index % 9));
            }
            self.field += 1;
        }
        None
    }
}

impl FromIterator<(usize, usize)> for Bitset81 {
    fn from_iter<I: IntoIterator<Item = (usize, usize)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::EMPTY, |acc, (r, c)| acc.or(Self::bit(r, c)))
    }
}

impl<'de> Deserialize<'de> for Bitset81 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let fields = <[u32; 3]>::deserialize(deserializer)?;
        if fields.iter().any(|&f| f & !USED_BITS != 0) {
            return Err(serde::de::Error::custom("bit set outside the 9x9 grid"));
        }
        Ok(Self(fields))
    }
}

impl BitAnd for Bitset81 {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        self.and(rhs)
    }
}

impl BitOr for Bitset81 {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.or(rhs)
    }
}

impl BitXor for Bitset81 {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self {
        self.xor(rhs)
    }
}

impl Not for Bitset81 {
    type Output = Self;

    fn not(self) -> Self {
        self.complement()
    }
}

impl fmt::Display for Bitset81 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..Self::SIZE {
            for c in 0..Self::SIZE {
                write!(f, "{}", if self.at(r, c) { '#' } else { '.' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Bitset81 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Bitset81({:#09x}, {:#09x}, {:#09x})",
            self.0[0], self.0[1], self.0[2]
        )
    }
}
