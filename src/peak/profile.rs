//! Random-access intensity series and the outward views used by the boundary search.

use crate::data::{ChannelView, IonChromatogram};

use super::PeakError;

/// A series of intensities that can be read at any index.
///
/// `intensity` is only called with `index < len()`.
pub trait Intensities {
    /// Number of points
    fn len(&self) -> usize;

    /// Intensity at `index`
    fn intensity(&self, index: usize) -> f64;

    /// True when the series has no points
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sum of up to `width` points starting at `start`, clipped at the end
    fn window_sum(&self, start: usize, width: usize) -> f64 {
        let end = start.saturating_add(width).min(self.len());
        (start..end).map(|i| self.intensity(i)).sum()
    }
}

impl Intensities for [f64] {
    fn len(&self) -> usize {
        <[f64]>::len(self)
    }

    fn intensity(&self, index: usize) -> f64 {
        self[index]
    }
}

impl Intensities for Vec<f64> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn intensity(&self, index: usize) -> f64 {
        self[index]
    }
}

impl Intensities for ChannelView<'_> {
    fn len(&self) -> usize {
        ChannelView::len(self)
    }

    fn intensity(&self, index: usize) -> f64 {
        self.get(index).unwrap_or_default()
    }
}

impl Intensities for IonChromatogram {
    fn len(&self) -> usize {
        IonChromatogram::len(self)
    }

    fn intensity(&self, index: usize) -> f64 {
        self.intensities()[index]
    }
}

/// Which way to walk away from the apex
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards earlier retention times
    Left,
    /// Towards later retention times
    Right,
}

/// A series re-indexed so that index 0 is the apex and indices grow away from it.
///
/// Walking left reads the underlying series backwards without copying it.
#[derive(Debug)]
pub struct Outward<'a, S: Intensities + ?Sized> {
    series: &'a S,
    apex: usize,
    direction: Direction,
}

impl<'a, S: Intensities + ?Sized> Outward<'a, S> {
    /// View `series` from `apex` outwards in `direction`
    pub fn new(series: &'a S, apex: usize, direction: Direction) -> Result<Self, PeakError> {
        if apex >= series.len() {
            return Err(PeakError::ApexOutOfRange {
                apex,
                len: series.len(),
            });
        }
        Ok(Self {
            series,
            apex,
            direction,
        })
    }
}

impl<S: Intensities + ?Sized> Intensities for Outward<'_, S> {
    fn len(&self) -> usize {
        match self.direction {
            Direction::Left => self.apex + 1,
            Direction::Right => self.series.len() - self.apex,
        }
    }

    fn intensity(&self, index: usize) -> f64 {
        match self.direction {
            Direction::Left => self.series.intensity(self.apex - index),
            Direction::Right => self.series.intensity(self.apex + index),
        }
    }
}
