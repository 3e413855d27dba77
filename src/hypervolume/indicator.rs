//! Exact hypervolume by dimension sweep.

use std::cmp::Ordering;

use super::reference::reference_point;
use crate::dominance::dominates;
use crate::error::{ParetoError, Result};

/// Hypervolume indicator bound to a reference point (minimization).
///
/// Objective values are expected on a common scale, typically normalized
/// into `[0, 1]` with the reference point slightly beyond 1 so that
/// boundary points still contribute volume.
///
/// # Algorithm
///
/// Slicing decomposition: points are sorted along the last objective and
/// the (m−1)-dimensional hypervolume of every slice is accumulated,
/// weighted by the slice width. Two objectives use a linear sweep; one
/// objective reduces to `r[0] − min(p[0])`.
///
/// The input is canonicalized first (points outside the reference box,
/// duplicates and dominated points are dropped, the rest are sorted), so
/// the result is bit-identical for any permutation of the same front.
///
/// # Example
///
/// ```
/// use u_pareto::Hypervolume;
///
/// let hv = Hypervolume::new(vec![1.1, 1.1]).unwrap();
/// let front = vec![vec![0.0, 1.0], vec![1.0, 0.0]];
/// let value = hv.compute(&front).unwrap();
/// assert!((value - 0.21).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hypervolume {
    reference_point: Vec<f64>,
}

impl Hypervolume {
    /// Creates an indicator with the given reference point.
    ///
    /// # Errors
    ///
    /// [`ParetoError::InvalidConfiguration`] if the reference point is empty
    /// or has a non-finite coordinate.
    pub fn new(reference_point: Vec<f64>) -> Result<Self> {
        if reference_point.is_empty() {
            return Err(ParetoError::InvalidConfiguration(
                "reference point must have at least one objective".into(),
            ));
        }
        if let Some(v) = reference_point.iter().find(|v| !v.is_finite()) {
            return Err(ParetoError::InvalidConfiguration(format!(
                "reference point coordinates must be finite, got {v}"
            )));
        }
        Ok(Self { reference_point })
    }

    /// Creates an indicator whose reference point is the per-objective
    /// maximum of `reference_front` plus `margin`.
    ///
    /// # Errors
    ///
    /// See [`reference_point`](super::reference_point).
    pub fn from_reference_front<P: AsRef<[f64]>>(reference_front: &[P], margin: f64) -> Result<Self> {
        Self::new(reference_point(reference_front, margin)?)
    }

    /// The reference point.
    pub fn reference_point(&self) -> &[f64] {
        &self.reference_point
    }

    /// Number of objectives.
    pub fn dimension(&self) -> usize {
        self.reference_point.len()
    }

    /// Volume dominated by `front` and bounded by the reference point.
    ///
    /// An empty front has hypervolume `0.0`. Points that do not strictly
    /// dominate the reference point add nothing.
    ///
    /// # Errors
    ///
    /// [`ParetoError::DimensionMismatch`] if a point's length differs from
    /// the reference point's.
    pub fn compute<P: AsRef<[f64]>>(&self, front: &[P]) -> Result<f64> {
        let points = self.checked_points(front)?;
        Ok(self.volume(&points))
    }

    /// Exclusive volume dominated by each point alone.
    ///
    /// Computed exactly as `compute(front) − compute(front \ {p})`, i.e. one
    /// full hypervolume evaluation per point. Duplicated points share their
    /// volume and therefore contribute `0.0` each.
    ///
    /// # Errors
    ///
    /// [`ParetoError::DimensionMismatch`] if a point's length differs from
    /// the reference point's.
    ///
    /// # Example
    ///
    /// ```
    /// use u_pareto::Hypervolume;
    ///
    /// let hv = Hypervolume::new(vec![4.0, 4.0]).unwrap();
    /// let front = vec![vec![1.0, 3.0], vec![2.0, 2.0], vec![3.0, 1.0]];
    /// let contributions = hv.contributions(&front).unwrap();
    /// assert_eq!(contributions, vec![1.0, 1.0, 1.0]);
    /// ```
    pub fn contributions<P: AsRef<[f64]>>(&self, front: &[P]) -> Result<Vec<f64>> {
        let points = self.checked_points(front)?;
        let total = self.volume(&points);

        let mut rest: Vec<&[f64]> = Vec::with_capacity(points.len().saturating_sub(1));
        let contributions = (0..points.len())
            .map(|i| {
                rest.clear();
                rest.extend(
                    points
                        .iter()
                        .enumerate()
                        .filter(|&(j, _)| j != i)
                        .map(|(_, p)| *p),
                );
                (total - self.volume(&rest)).max(0.0)
            })
            .collect();
        Ok(contributions)
    }

    fn checked_points<'a, P: AsRef<[f64]>>(&self, front: &'a [P]) -> Result<Vec<&'a [f64]>> {
        let d = self.dimension();
        front
            .iter()
            .map(|p| {
                let p = p.as_ref();
                if p.len() == d {
                    Ok(p)
                } else {
                    Err(ParetoError::DimensionMismatch {
                        expected: d,
                        actual: p.len(),
                    })
                }
            })
            .collect()
    }

    fn volume(&self, points: &[&[f64]]) -> f64 {
        let r = &self.reference_point;
        let inside: Vec<&[f64]> = points
            .iter()
            .copied()
            .filter(|p| p.iter().zip(r).all(|(&v, &rv)| v < rv))
            .collect();

        let canonical = non_dominated_unique(inside);
        hv_recursive(&canonical, r)
    }
}

/// Lexicographic total order on points, starting at objective `first`.
fn cmp_from(a: &[f64], b: &[f64], first: usize) -> Ordering {
    let d = a.len();
    (0..d)
        .map(|k| (first + k) % d)
        .map(|k| a[k].total_cmp(&b[k]))
        .find(|o| o.is_ne())
        .unwrap_or(Ordering::Equal)
}

/// Sorted, duplicate-free, mutually non-dominated subset of `points`.
fn non_dominated_unique(mut points: Vec<&[f64]>) -> Vec<&[f64]> {
    points.sort_by(|a, b| cmp_from(a, b, 0));
    points.dedup_by(|a, b| a == b);

    let mut kept = Vec::with_capacity(points.len());
    'outer: for (i, p) in points.iter().enumerate() {
        for (j, q) in points.iter().enumerate() {
            if i != j && dominates(q, p) {
                continue 'outer;
            }
        }
        kept.push(*p);
    }
    kept
}

/// Hypervolume of points that all lie strictly inside the reference box.
fn hv_recursive(points: &[&[f64]], reference: &[f64]) -> f64 {
    let d = reference.len();

    if points.is_empty() {
        return 0.0;
    }

    // Base case: 1-D hypervolume is just the gap from the best point to ref.
    if d == 1 {
        let min_val = points.iter().map(|p| p[0]).fold(f64::INFINITY, f64::min);
        return reference[0] - min_val;
    }

    // Single point: hypervolume is the product of gaps.
    if points.len() == 1 {
        return points[0]
            .iter()
            .zip(reference)
            .map(|(&p, &r)| r - p)
            .product();
    }

    if d == 2 {
        return sweep_2d(points, reference);
    }

    // Sort by last objective ascending.
    let last = d - 1;
    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| cmp_from(a, b, last));

    let sub_ref = &reference[..last];
    let mut result = 0.0;

    for i in 0..sorted.len() {
        let height = if i + 1 < sorted.len() {
            sorted[i + 1][last] - sorted[i][last]
        } else {
            reference[last] - sorted[i][last]
        };

        if height <= 0.0 {
            continue;
        }

        // Project points[0..=i] onto the first d-1 objectives and keep only
        // the non-dominated subset.
        let projected: Vec<&[f64]> = sorted[..=i].iter().map(|&p| &p[..last]).collect();
        let slice = non_dominated_unique(projected);
        result += height * hv_recursive(&slice, sub_ref);
    }

    result
}

/// Two-objective staircase: sweep by the first objective, accumulating the
/// rectangle each point adds below the current best second objective.
fn sweep_2d(points: &[&[f64]], reference: &[f64]) -> f64 {
    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| cmp_from(a, b, 0));

    let mut best_y = reference[1];
    let mut area = 0.0;
    for p in sorted {
        if p[1] < best_y {
            area += (reference[0] - p[0]) * (best_y - p[1]);
            best_y = p[1];
        }
    }
    area
}

// ============================================================================
// Tests
// ============================================================================
