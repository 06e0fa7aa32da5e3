//! # Peak Integration
//!
//! Boundary search and area integration for peaks in an [`IntensityMatrix`].
//!
//! Each mass channel that contributes to a peak is grown outward from the apex
//! scan by [`half_area`] on each side. [`ion_area`] joins the two halves, and
//! the per-channel results are combined into a total area
//! ([`peak_sum_area`]) and a median width ([`median_bounds`]).
//!
//! ```text
//! peak rt ──► apex scan ──┐
//!                         ├──► ion_area(channel) × N ──► Σ area
//! apex spectrum ──► N channels                      └──► median(left), median(right)
//! ```
//!
//! Channels are read as strided views into the matrix; nothing is transposed.
//!
//! [`IntensityMatrix`]: crate::data::IntensityMatrix

mod aggregate;
mod apex;
mod batch;
mod boundary;
mod config;
mod error;
mod profile;


pub use aggregate::{median, median_bounds, peak_sum_area};
pub use apex::{ApexSource, Peak, PointBounds};
pub use batch::{quantify_peak, quantify_peaks, PeakQuantification};
pub use boundary::{half_area, ion_area, HalfArea, IonArea, DEFAULT_TOLERANCE, SMOOTHING_WIDTH};
pub use config::IntegrationConfig;
pub use error::PeakError;
pub use profile::{Direction, Intensities, Outward};
