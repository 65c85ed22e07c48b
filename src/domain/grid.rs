use super::Cell;
use crate::error::AllocationError;
use rand::Rng;

/// Grid owns every cell of the automaton in one contiguous buffer.
/// Dimensions and cell size are fixed for the grid's lifetime.
#[derive(Clone, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cell_size: u32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid where every cell is alive with probability 0.5
    pub fn create<R: Rng + ?Sized>(
        width: usize,
        height: usize,
        cell_size: u32,
        rng: &mut R,
    ) -> Result<Self, AllocationError> {
        let mut grid = Self::dead(width, height, cell_size)?;
        grid.randomize(rng);
        Ok(grid)
    }

    /// Create a grid with all cells dead
    pub fn dead(width: usize, height: usize, cell_size: u32) -> Result<Self, AllocationError> {
        if width == 0 || height == 0 {
            return Err(AllocationError::Empty { width, height });
        }
        let len = width
            .checked_mul(height)
            .ok_or(AllocationError::Overflow { width, height })?;

        // Both pixel extents must fit in u32; every cell position is below them.
        let pixel_extent = |cells: usize| u32::try_from(cells).ok()?.checked_mul(cell_size);
        if pixel_extent(width).is_none() || pixel_extent(height).is_none() {
            return Err(AllocationError::Overflow { width, height });
        }

        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|_| AllocationError::OutOfMemory { cells: len })?;

        cells.extend(
            (0..height)
                .flat_map(|y| (0..width).map(move |x| (x, y)))
                .map(|(x, y)| Cell::new(x as u32 * cell_size, y as u32 * cell_size, false)),
        );

        Ok(Self {
            width,
            height,
            cell_size,
            cells,
        })
    }

    /// Get grid dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub const fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Size of the whole grid in pixels
    pub const fn pixel_size(&self) -> (u32, u32) {
        (
            self.width as u32 * self.cell_size,
            self.height as u32 * self.cell_size,
        )
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, x: usize, y: usize) -> Option<&Cell> {
        (x < self.width && y < self.height).then(|| &self.cells[self.get_index(x, y)])
    }

    /// Alive state at position, false when out of range
    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        self.get(x, y).is_some_and(Cell::is_alive)
    }

    /// Set the alive flag of one cell. Returns false if (x, y) is outside the grid.
    pub fn set_alive(&mut self, x: usize, y: usize, alive: bool) -> bool {
        match self.get_mut(x, y) {
            Some(cell) => {
                cell.set_alive(alive);
                true
            }
            None => false,
        }
    }

    pub(crate) fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut Cell> {
        if x < self.width && y < self.height {
            let idx = self.get_index(x, y);
            Some(&mut self.cells[idx])
        } else {
            None
        }
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Kill every cell
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| cell.set_alive(false));
    }

    /// Reseed every cell independently with p = 0.5
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cells
            .iter_mut()
            .for_each(|cell| cell.set_alive(rng.random_bool(0.5)));
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over all cells with their grid coordinates, row by row
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (i % self.width, i / self.width, cell))
    }

    /// Grid coordinates of every cell whose rectangle contains the pixel.
    /// Rectangles include their far edge, so a point on a shared border
    /// belongs to each cell touching it.
    pub fn cells_at_pixel(&self, px: f32, py: f32) -> Vec<(usize, usize)> {
        if !(px.is_finite() && py.is_finite()) || px < 0.0 || py < 0.0 {
            return Vec::new();
        }
        let size = self.cell_size as f32;
        let candidates = move |p: f32, limit: usize| {
            let col = (p / size) as usize;
            [col.checked_sub(1), Some(col)]
                .into_iter()
                .flatten()
                .filter(move |&c| c < limit)
                .filter(move |&c| {
                    let start = c as f32 * size;
                    p >= start && p <= start + size
                })
        };

        candidates(py, self.height)
            .flat_map(|y| candidates(px, self.width).map(move |x| (x, y)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_cells_get_pixel_positions() {
        let grid = Grid::dead(4, 3, 8).unwrap();
        assert_eq!(grid.get(0, 0).unwrap().position(), (0, 0));
        assert_eq!(grid.get(3, 2).unwrap().position(), (24, 16));
        assert_eq!(grid.pixel_size(), (32, 24));
    }

    #[test]
    fn test_out_of_range_access() {
        let mut grid = Grid::dead(4, 3, 8).unwrap();
        assert!(grid.get(4, 0).is_none());
        assert!(grid.get(0, 3).is_none());
        assert!(!grid.set_alive(4, 0, true));
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_set_alive() {
        let mut grid = Grid::dead(4, 3, 8).unwrap();
        assert!(grid.set_alive(2, 1, true));
        assert!(grid.is_alive(2, 1));
        assert!(!grid.is_alive(1, 2));
        assert_eq!(grid.population(), 1);
    }

    #[test]
    fn test_zero_sized_grid_is_rejected() {
        assert_eq!(
            Grid::dead(0, 5, 8).unwrap_err(),
            AllocationError::Empty { width: 0, height: 5 }
        );
    }

    #[test]
    fn test_overflowing_grid_is_rejected() {
        assert!(matches!(
            Grid::dead(usize::MAX, 2, 8),
            Err(AllocationError::Overflow { .. })
        ));
    }

    #[test]
    fn test_pixel_extent_overflow_is_rejected() {
        assert_eq!(
            Grid::dead(600_000, 1, 8_000).unwrap_err(),
            AllocationError::Overflow { width: 600_000, height: 1 }
        );
        assert!(matches!(
            Grid::dead(1, usize::from(u16::MAX) + 1, 70_000),
            Err(AllocationError::Overflow { .. })
        ));
        // Largest extent that still fits
        let grid = Grid::dead(1, 1, u32::MAX).unwrap();
        assert_eq!(grid.pixel_size(), (u32::MAX, u32::MAX));
    }

    #[test]
    fn test_same_seed_same_grid() {
        let a = Grid::create(20, 20, 4, &mut StdRng::seed_from_u64(7)).unwrap();
        let b = Grid::create(20, 20, 4, &mut StdRng::seed_from_u64(7)).unwrap();
        let states = |g: &Grid| g.iter().map(|(_, _, c)| c.is_alive()).collect::<Vec<_>>();
        assert_eq!(states(&a), states(&b));
        // p = 0.5 over 400 cells lands well inside this band
        assert!((100..300).contains(&a.population()));
    }

    #[test]
    fn test_clear_kills_everything() {
        let mut grid = Grid::create(10, 10, 4, &mut StdRng::seed_from_u64(1)).unwrap();
        grid.clear();
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_iter_is_row_major() {
        let grid = Grid::dead(3, 2, 1).unwrap();
        let coords: Vec<_> = grid.iter().map(|(x, y, _)| (x, y)).collect();
        assert_eq!(coords, vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]);
    }

    #[test]
    fn test_pixel_inside_one_cell() {
        let grid = Grid::dead(4, 4, 8).unwrap();
        assert_eq!(grid.cells_at_pixel(12.0, 3.0), vec![(1, 0)]);
    }

    #[test]
    fn test_pixel_on_shared_corner_hits_four_cells() {
        let grid = Grid::dead(4, 4, 8).unwrap();
        let mut hits = grid.cells_at_pixel(8.0, 8.0);
        hits.sort();
        assert_eq!(hits, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn test_pixel_outside_grid() {
        let grid = Grid::dead(4, 4, 8).unwrap();
        assert!(grid.cells_at_pixel(-1.0, 4.0).is_empty());
        assert!(grid.cells_at_pixel(40.0, 4.0).is_empty());
        // The far edge of the last cell still counts
        assert_eq!(grid.cells_at_pixel(32.0, 4.0), vec![(3, 0)]);
    }
}
