//! Combining per-channel boundary results into one value per peak.

use log::{trace, warn};

use crate::data::IntensityMatrix;

use super::apex::ApexSource;
use super::boundary::{ion_area, IonArea, DEFAULT_TOLERANCE};
use super::PeakError;

/// Apex row of `peak`, preferring stored bounds that agree within one scan
pub(crate) fn apex_index<P: ApexSource + ?Sized>(
    im: &IntensityMatrix,
    peak: &P,
) -> Result<usize, PeakError> {
    let apex = im.nearest_time_index(peak.rt())?;
    match peak.pt_bounds() {
        Some(bounds) if bounds.apex.abs_diff(apex) <= 1 && bounds.apex < im.nrows() => {
            if bounds.apex != apex {
                trace!("using stored apex {} over nearest scan {}", bounds.apex, apex);
            }
            Ok(bounds.apex)
        }
        _ => Ok(apex),
    }
}

/// Mass columns with positive intensity in the peak spectrum
pub(crate) fn contributing_channels<P: ApexSource + ?Sized>(
    im: &IntensityMatrix,
    peak: &P,
) -> Result<Vec<usize>, PeakError> {
    let spectrum = peak.mass_spectrum();
    if spectrum.len() != im.ncols() {
        return Err(PeakError::SpectrumMismatch {
            spectrum: spectrum.len(),
            matrix: im.ncols(),
        });
    }
    let channels: Vec<usize> = spectrum.contributing_channels().collect();
    if channels.is_empty() {
        warn!("peak at {:.3}s has no positive channels", peak.rt());
    }
    Ok(channels)
}

/// Runs [`ion_area`] on every listed channel around `apex`
pub(crate) fn channel_areas(
    im: &IntensityMatrix,
    channels: &[usize],
    apex: usize,
    max_bound: usize,
    tol: f64,
) -> Result<Vec<IonArea>, PeakError> {
    channels
        .iter()
        .map(|&channel| -> Result<IonArea, PeakError> {
            let column = im.column(channel)?;
            ion_area(&column, apex, max_bound, tol)
        })
        .collect()
}

pub(crate) fn sum_area(areas: &[IonArea]) -> f64 {
    areas.iter().map(|a| a.area).sum()
}

/// Median left and right offsets, zero for an empty side
pub(crate) fn bounds(areas: &[IonArea], include_shared: bool) -> (f64, f64) {
    let mut left: Vec<f64> = areas
        .iter()
        .filter(|a| include_shared || !a.left_shared)
        .map(|a| a.left as f64)
        .collect();
    let mut right: Vec<f64> = areas
        .iter()
        .filter(|a| include_shared || !a.right_shared)
        .map(|a| a.right as f64)
        .collect();
    (
        median(&mut left).unwrap_or(0.0),
        median(&mut right).unwrap_or(0.0),
    )
}

/// Total area of `peak`: the sum of [`ion_area`] over every mass channel with
/// positive intensity in the peak spectrum.
///
/// The apex is the scan nearest the peak retention time. A peak with no
/// positive channel has an area of zero.
pub fn peak_sum_area<P: ApexSource + ?Sized>(
    im: &IntensityMatrix,
    peak: &P,
    max_bound: usize,
) -> Result<f64, PeakError> {
    let apex = im.nearest_time_index(peak.rt())?;
    let channels = contributing_channels(im, peak)?;
    let areas = channel_areas(im, &channels, apex, max_bound, DEFAULT_TOLERANCE)?;
    Ok(sum_area(&areas))
}

/// Median left and right boundary offsets of `peak` across its channels.
///
/// Stored bounds whose apex lies within one scan of the nearest scan take
/// precedence for the apex. Each channel is searched without a point limit at
/// the default tolerance. With `include_shared` false, offsets from a side
/// that stopped on a rising edge are left out. An empty side yields 0.
pub fn median_bounds<P: ApexSource + ?Sized>(
    im: &IntensityMatrix,
    peak: &P,
    include_shared: bool,
) -> Result<(f64, f64), PeakError> {
    let apex = apex_index(im, peak)?;
    let channels = contributing_channels(im, peak)?;
    let areas = channel_areas(im, &channels, apex, 0, DEFAULT_TOLERANCE)?;
    Ok(bounds(&areas, include_shared))
}

/// Median of `values`, averaging the two middle values for an even count.
///
/// Sorts `values` in place. Returns `None` when empty.
pub fn median(values: &mut [f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    values.sort_by(f64::total_cmp);
    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        Some((values[mid - 1] + values[mid]) / 2.0)
    } else {
        Some(values[mid])
    }
}
