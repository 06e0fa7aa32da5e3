//! Quantifying many peaks against one matrix.

use log::{debug, info};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::Serialize;

use crate::data::IntensityMatrix;

use super::aggregate::{apex_index, bounds, channel_areas, contributing_channels, sum_area};
use super::apex::ApexSource;
use super::config::IntegrationConfig;
use super::PeakError;

/// Area and width of one peak
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeakQuantification {
    /// Peak retention time in seconds
    pub rt: f64,
    /// Scan index used as the apex
    pub apex_index: usize,
    /// Summed area over the contributing channels
    pub area: f64,
    /// Median points left of the apex
    pub left_bound: f64,
    /// Median points right of the apex
    pub right_bound: f64,
    /// Number of contributing channels
    pub channels: usize,
}

/// Quantify a single peak.
///
/// The area uses the configured tolerance and point limit. The median width
/// uses the same channel results, so one search per channel serves both.
pub fn quantify_peak<P: ApexSource + ?Sized>(
    im: &IntensityMatrix,
    peak: &P,
    config: &IntegrationConfig,
) -> Result<PeakQuantification, PeakError> {
    let apex = apex_index(im, peak)?;
    let channels = contributing_channels(im, peak)?;
    let areas = channel_areas(im, &channels, apex, config.max_bound, config.tolerance)?;
    let (left_bound, right_bound) = bounds(&areas, config.include_shared);
    let area = sum_area(&areas);

    debug!(
        "peak {:.3}s: apex {}, {} channels, area {:.3}",
        peak.rt(),
        apex,
        channels.len(),
        area
    );

    Ok(PeakQuantification {
        rt: peak.rt(),
        apex_index: apex,
        area,
        left_bound,
        right_bound,
        channels: channels.len(),
    })
}

/// Quantify every peak in `peaks`, in order.
///
/// Fails on the first peak that cannot be integrated. With the `parallel`
/// feature the peaks are processed on the rayon thread pool.
pub fn quantify_peaks<P: ApexSource + Sync>(
    im: &IntensityMatrix,
    peaks: &[P],
    config: &IntegrationConfig,
) -> Result<Vec<PeakQuantification>, PeakError> {
    config.validate()?;
    info!("Quantifying {} peaks", peaks.len());

    #[cfg(feature = "parallel")]
    let iter = peaks.par_iter();
    #[cfg(not(feature = "parallel"))]
    let iter = peaks.iter();

    iter.map(|peak| quantify_peak(im, peak, config)).collect()
}
