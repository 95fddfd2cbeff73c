//! Synthetic contribution heatmap.
//!
//! The grid is decoration: it is random noise whose density follows the
//! activity count, not real calendar data. It is regenerated on every call.

use rand::Rng;

pub const ROWS: usize = 7;
pub const COLUMNS: usize = 15;
pub const CELLS: usize = ROWS * COLUMNS;
pub const MAX_LEVEL: u8 = 4;

/// Builds a grid with the thread RNG.
pub fn generate(activity: u64) -> Vec<u8> {
    generate_with(activity, &mut rand::thread_rng())
}

/// Builds a grid of `CELLS` levels in `0..=MAX_LEVEL`.
///
/// More activity means more lit cells and a higher minimum level for them.
pub fn generate_with<R: Rng>(activity: u64, rng: &mut R) -> Vec<u8> {
    let density = (activity as f64 / 1000.0 + 0.1).min(0.8);
    let base = (activity / 300).min(3) as u8;

    (0..CELLS)
        .map(|_| {
            if rng.gen_bool(density) {
                rng.gen_range(base..=MAX_LEVEL)
            } else if rng.gen_bool(0.05) {
                1
            } else {
                0
            }
        })
        .collect()
}

/// Uniform noise, used for a card that has not been filled from a profile.
pub fn uniform<R: Rng>(rng: &mut R) -> Vec<u8> {
    (0..CELLS).map(|_| rng.gen_range(0..=MAX_LEVEL)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn lit(grid: &[u8]) -> usize {
        grid.iter().filter(|v| **v > 0).count()
    }

    #[test]
    fn shape_and_range() {
        for activity in [0, 10, 299, 300, 900, 5_000, u64::MAX] {
            let grid = generate(activity);
            assert_eq!(grid.len(), CELLS);
            assert!(grid.iter().all(|v| *v <= MAX_LEVEL));
        }
    }

    #[test]
    fn density_grows_with_activity() {
        let mut rng = StdRng::seed_from_u64(7);
        let quiet: usize = (0..20).map(|_| lit(&generate_with(0, &mut rng))).sum();
        let busy: usize = (0..20).map(|_| lit(&generate_with(2_000, &mut rng))).sum();
        assert!(busy > quiet * 2, "busy={busy} quiet={quiet}");
    }

    #[test]
    fn busy_cells_start_high() {
        let mut rng = StdRng::seed_from_u64(11);
        let grid = generate_with(1_000, &mut rng);
        // lit cells sit at 3 or 4, unlit ones at 0 or the occasional 1
        assert!(grid.iter().all(|v| matches!(v, 0 | 1 | 3 | 4)));
    }

    #[test]
    fn uniform_covers_all_levels() {
        let mut rng = StdRng::seed_from_u64(3);
        let grid = uniform(&mut rng);
        assert_eq!(grid.len(), CELLS);
        assert!(grid.iter().all(|v| *v <= MAX_LEVEL));
    }
}
