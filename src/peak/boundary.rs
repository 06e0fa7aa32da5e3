//! Outward boundary search on a single mass channel.

use log::trace;
use serde::Serialize;

use super::profile::{Direction, Intensities, Outward};
use super::PeakError;

/// Tolerance percentage used when the caller has no preference
pub const DEFAULT_TOLERANCE: f64 = 0.5;

/// Number of points averaged to form the trailing edge
pub const SMOOTHING_WIDTH: usize = 3;

/// Result of growing a peak from its apex in one direction
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HalfArea {
    /// Summed intensity from the apex (included) to the boundary
    pub area: f64,
    /// Number of points between the apex and the boundary
    pub offset: usize,
    /// True when growth stopped on a rising edge rather than the tolerance
    pub shared: bool,
}

/// Result of growing a peak from its apex in both directions
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IonArea {
    /// Channel area with the apex counted once
    pub area: f64,
    /// Points left of the apex
    pub left: usize,
    /// Points right of the apex
    pub right: usize,
    /// Left boundary ran into a neighbouring peak
    pub left_shared: bool,
    /// Right boundary ran into a neighbouring peak
    pub right_shared: bool,
}

impl IonArea {
    /// True if either boundary was cut short by a neighbouring peak
    pub fn is_shared(&self) -> bool {
        self.left_shared || self.right_shared
    }
}

fn check_tolerance(tol: f64) -> Result<(), PeakError> {
    if tol.is_finite() && tol >= 0.0 {
        Ok(())
    } else {
        Err(PeakError::InvalidTolerance(tol))
    }
}

/// Grows a peak outward from index 0 of `ia` until the smoothed trailing edge
/// becomes negligible against the accumulated area, starts rising again, or
/// `max_bound` points have been taken.
///
/// `ia[0]` is the apex. A `max_bound` of 0 means no limit. `tol` is a
/// percentage; the edge must fall below `tol / 200` of the area to stop.
///
/// The trailing edge is always the window sum divided by [`SMOOTHING_WIDTH`],
/// so windows clipped at the end of the series read lower than a true mean.
pub fn half_area<S: Intensities + ?Sized>(
    ia: &S,
    max_bound: usize,
    tol: f64,
) -> Result<HalfArea, PeakError> {
    check_tolerance(tol)?;
    if ia.is_empty() {
        return Err(PeakError::EmptyProfile);
    }

    let tol = tol / 200.0;
    let edge_at = |start: usize| ia.window_sum(start, SMOOTHING_WIDTH) / SMOOTHING_WIDTH as f64;

    let mut area = ia.intensity(0);
    let mut edge = edge_at(0);
    let mut prev_edge = 2.0 * edge;
    let mut index = 1;

    let limit = if max_bound < 1 {
        ia.len()
    } else {
        (max_bound + 1).min(ia.len())
    };

    while edge > area * tol && edge < prev_edge && index < limit {
        prev_edge = edge;
        area += ia.intensity(index);
        edge = edge_at(index);
        index += 1;
    }

    Ok(HalfArea {
        area,
        offset: index - 1,
        shared: edge >= prev_edge,
    })
}

/// Integrates one channel around `apex` by running [`half_area`] to each side.
pub fn ion_area<S: Intensities + ?Sized>(
    ia: &S,
    apex: usize,
    max_bound: usize,
    tol: f64,
) -> Result<IonArea, PeakError> {
    let left = half_area(&Outward::new(ia, apex, Direction::Left)?, max_bound, tol)?;
    let right = half_area(&Outward::new(ia, apex, Direction::Right)?, max_bound, tol)?;

    let area = left.area + (right.area - ia.intensity(apex));
    trace!(
        "apex {}: area {:.3}, bounds -{}/+{}, shared {}/{}",
        apex,
        area,
        left.offset,
        right.offset,
        left.shared,
        right.shared
    );

    Ok(IonArea {
        area,
        left: left.offset,
        right: right.offset,
        left_shared: left.shared,
        right_shared: right.shared,
    })
}
