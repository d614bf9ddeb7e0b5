// Probability-based targeting over a shot grid.
// Uses no_std and avoids heap allocations.

use crate::{
    board::{Cell, ShotGrid},
    config::{BoardMask, LENGTH, WIDTH},
    ship::Orientation,
};
use rand::Rng;

/// Probability matrix indexed `[x][y]`.
pub type Pdf = [[f64; WIDTH]; LENGTH];

/// Placements covering more observed hits get this much more weight per hit,
/// so cells next to a damaged ship stand out.
const HIT_BIAS: f64 = 10.0;

/// Compute a probability density over all unknown cells given the shot grid,
/// the cells of ships already sunk, and the lengths of ships still afloat.
/// Each entry sums the relative likelihood of a ship square lying there.
pub fn calc_pdf(guesses: &ShotGrid, sunk: &BoardMask, remaining_lengths: &[usize]) -> Pdf {
    let mut matrix = [[0.0f64; WIDTH]; LENGTH];
    let blocked = guesses.misses() | *sunk;
    let live_hits = guesses.hits() & !*sunk;

    for &len in remaining_lengths.iter() {
        if len == 0 {
            continue;
        }
        for orient in [Orientation::Horizontal, Orientation::Vertical] {
            let (dr, dc) = match orient {
                Orientation::Vertical => (1, 0),
                Orientation::Horizontal => (0, 1),
            };
            let max_row = match (LENGTH + 1).checked_sub(len * dr) {
                Some(m) if dr == 1 => m,
                Some(_) => LENGTH,
                None => continue,
            };
            let max_col = match (WIDTH + 1).checked_sub(len * dc) {
                Some(m) if dc == 1 => m,
                Some(_) => WIDTH,
                None => continue,
            };
            for r in 0..max_row {
                for c in 0..max_col {
                    let mut valid = true;
                    let mut n_hits = 0i32;
                    for k in 0..len {
                        let (rr, cc) = (r + k * dr, c + k * dc);
                        if blocked.get(rr, cc).unwrap_or(true) {
                            valid = false;
                            break;
                        }
                        if live_hits.get(rr, cc).unwrap_or(false) {
                            n_hits += 1;
                        }
                    }
                    if !valid {
                        continue;
                    }
                    let weight = libm::pow(HIT_BIAS, n_hits as f64);
                    for k in 0..len {
                        let (rr, cc) = (r + k * dr, c + k * dc);
                        if guesses.cell(rr, cc) == Cell::Unknown {
                            matrix[rr][cc] += weight;
                        }
                    }
                }
            }
        }
    }

    normalize(matrix, guesses)
}

fn normalize(mut matrix: Pdf, guesses: &ShotGrid) -> Pdf {
    let total: f64 = matrix.iter().flatten().sum();
    if total == 0.0 {
        // nothing fits; spread evenly over unresolved cells
        let open = guesses.count(Cell::Unknown);
        if open == 0 {
            return matrix;
        }
        let uniform = 1.0 / open as f64;
        for (r, row) in matrix.iter_mut().enumerate() {
            for (c, v) in row.iter_mut().enumerate() {
                if guesses.cell(r, c) == Cell::Unknown {
                    *v = uniform;
                }
            }
        }
        return matrix;
    }
    for v in matrix.iter_mut().flatten() {
        *v /= total;
    }
    matrix
}

/// Sample a coordinate from a probability matrix using a temperature
/// parameter. Returns `None` when the matrix has no mass.
pub fn sample_pdf<R: Rng + ?Sized>(pdf: &Pdf, temperature: f64, rng: &mut R) -> Option<(usize, usize)> {
    let mut adjusted = [[0.0f64; WIDTH]; LENGTH];
    let mut total = 0.0;
    for r in 0..LENGTH {
        for c in 0..WIDTH {
            let v = if pdf[r][c] > 0.0 {
                libm::pow(pdf[r][c], 1.0 / temperature)
            } else {
                0.0
            };
            adjusted[r][c] = v;
            total += v;
        }
    }
    if total == 0.0 {
        return None;
    }
    let mut cumulative = 0.0;
    let mut last = None;
    let threshold: f64 = rng.random_range(0.0..total);
    for r in 0..LENGTH {
        for c in 0..WIDTH {
            if adjusted[r][c] == 0.0 {
                continue;
            }
            cumulative += adjusted[r][c];
            last = Some((r, c));
            if threshold < cumulative {
                return last;
            }
        }
    }
    last
}

/// Calculates the PDF and immediately samples a target from it.
pub fn calc_pdf_and_guess<R: Rng + ?Sized>(
    guesses: &ShotGrid,
    sunk: &BoardMask,
    lengths: &[usize],
    rng: &mut R,
) -> Option<(usize, usize)> {
    let pdf = calc_pdf(guesses, sunk, lengths);
    // lower temperature sharpens towards likely cells
    sample_pdf(&pdf, 0.5, rng)
}
