/// Single coordinate axis used for board height, width, and in-bounds positions.
pub type Coord = u8;

/// Count type used for lit-cell counts and total-cell counts.
pub type CellCount = u16;

/// In-bounds two-dimensional coordinates `(y, x)`, row first.
pub type Coord2 = (Coord, Coord);

/// Signed `(y, x)` flip target, may point outside the board.
pub type Target = (i32, i32);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Converts a signed target into board coordinates when it lies inside `bounds`.
pub fn to_in_bounds(target: Target, bounds: Coord2) -> Option<Coord2> {
    let (y, x) = target;
    let (max_y, max_x) = bounds;

    let y = Coord::try_from(y).ok()?;
    if y >= max_y {
        return None;
    }

    let x = Coord::try_from(x).ok()?;
    if x >= max_x {
        return None;
    }

    Some((y, x))
}

/// Center first, then left, right, up, down.
const PLUS_DISPLACEMENTS: [(i32, i32); 5] = [(0, 0), (0, -1), (0, 1), (-1, 0), (1, 0)];

/// Iterates the in-bounds members of the plus-shaped neighborhood around a target.
#[derive(Debug)]
pub struct PlusIter {
    center: Target,
    bounds: Coord2,
    index: u8,
}

impl PlusIter {
    pub fn new(center: Target, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for PlusIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (dy, dx) = *PLUS_DISPLACEMENTS.get(usize::from(self.index))?;
            self.index += 1;

            let (y, x) = self.center;
            let (Some(y), Some(x)) = (y.checked_add(dy), x.checked_add(dx)) else {
                continue;
            };

            if let Some(coords) = to_in_bounds((y, x), self.bounds) {
                return Some(coords);
            }
        }
    }
}

/// Cell address in the `"y-x"` form used to key rendered cells.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct CellKey {
    pub y: i32,
    pub x: i32,
}

impl CellKey {
    pub const fn new(y: i32, x: i32) -> Self {
        Self { y, x }
    }

    pub const fn target(self) -> Target {
        (self.y, self.x)
    }
}

impl From<Coord2> for CellKey {
    fn from((y, x): Coord2) -> Self {
        Self {
            y: y.into(),
            x: x.into(),
        }
    }
}

impl core::fmt::Display for CellKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}-{}", self.y, self.x)
    }
}

impl core::str::FromStr for CellKey {
    type Err = crate::GameError;

    fn from_str(s: &str) -> crate::Result<Self> {
        // split on the first '-' after position 0 so a negative row still parses
        let split = s
            .char_indices()
            .skip(1)
            .find(|&(_, c)| c == '-')
            .map(|(i, _)| i)
            .ok_or(crate::GameError::InvalidCellKey)?;
        let (y, x) = (&s[..split], &s[split + 1..]);
        let y = y.parse().map_err(|_| crate::GameError::InvalidCellKey)?;
        let x = x.parse().map_err(|_| crate::GameError::InvalidCellKey)?;
        Ok(Self { y, x })
    }
}
