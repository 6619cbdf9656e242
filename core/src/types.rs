use ndarray::Array2;

/// Single coordinate axis used for board width, height, and positions.
pub type Axis = u16;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u32;

/// Two-dimensional position `(x, y)`.
pub type Pos = (Axis, Axis);

/// Countdown timer values.
pub type Seconds = u32;

pub trait AsIndex {
    type Output;
    fn as_index(self) -> Self::Output;
}

impl AsIndex for Pos {
    type Output = [usize; 2];

    fn as_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Axis, b: Axis) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

const DISPLACEMENTS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Applies `delta` to `pos`, returning a value only when it remains in bounds.
fn apply_delta(pos: Pos, delta: (isize, isize), bounds: Pos) -> Option<Pos> {
    let (x, y) = pos;
    let (dx, dy) = delta;
    let (max_x, max_y) = bounds;

    let next_x = x.checked_add_signed(dx.try_into().ok()?)?;
    if next_x >= max_x {
        return None;
    }

    let next_y = y.checked_add_signed(dy.try_into().ok()?)?;
    if next_y >= max_y {
        return None;
    }

    Some((next_x, next_y))
}

/// Iterates the up-to-8 in-bounds neighbors of `center`, in a fixed order.
pub fn neighbors(center: Pos, bounds: Pos) -> impl Iterator<Item = Pos> {
    DISPLACEMENTS
        .into_iter()
        .filter_map(move |delta| apply_delta(center, delta, bounds))
}

pub trait NeighborsExt {
    fn iter_neighbors(&self, pos: Pos) -> impl Iterator<Item = Pos>;
}

impl<T> NeighborsExt for Array2<T> {
    fn iter_neighbors(&self, pos: Pos) -> impl Iterator<Item = Pos> {
        let dim = self.dim();
        let bounds = (dim.0.try_into().unwrap(), dim.1.try_into().unwrap());
        neighbors(pos, bounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(center: Pos, bounds: Pos) -> Vec<Pos> {
        neighbors(center, bounds).collect()
    }

    #[test]
    fn center_tile_has_eight_neighbors() {
        assert_eq!(collect((1, 1), (3, 3)).len(), 8);
    }

    #[test]
    fn corner_tile_has_three_neighbors() {
        let mut found = collect((0, 0), (3, 3));
        found.sort_unstable();
        assert_eq!(found, vec![(0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn edge_tile_has_five_neighbors() {
        assert_eq!(collect((1, 0), (3, 3)).len(), 5);
    }

    #[test]
    fn single_tile_board_has_no_neighbors() {
        assert!(collect((0, 0), (1, 1)).is_empty());
    }

    #[test]
    fn neighbors_never_leave_bounds() {
        for pos in collect((4, 4), (5, 5)) {
            assert!(pos.0 < 5 && pos.1 < 5);
        }
    }
}
