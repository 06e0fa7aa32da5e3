use super::chromatogram::format_scientific;
use super::*;

fn sample_matrix() -> IntensityMatrix {
    IntensityMatrix::new(
        vec![10.0, 11.0, 12.0, 13.0],
        vec![50.0, 51.0, 52.0],
        vec![
            vec![0.0, 1.0, 2.0],
            vec![3.0, 4.0, 5.0],
            vec![6.0, 7.0, 8.0],
            vec![9.0, 10.0, 11.0],
        ],
    )
    .unwrap()
}

#[test]
fn test_scan_min_max_and_total() {
    let scan = Scan::new(vec![50.2, 51.0, 73.9], vec![10.0, 0.0, 5.5]).unwrap();
    assert_eq!(scan.len(), 3);
    assert_eq!(scan.min_mass(), 50.2);
    assert_eq!(scan.max_mass(), 73.9);
    assert_eq!(scan.total_intensity(), 15.5);
}

#[test]
fn test_scan_rejects_bad_input() {
    assert!(matches!(
        Scan::new(vec![], vec![]),
        Err(DataError::EmptyInput(_))
    ));
    assert!(matches!(
        Scan::new(vec![50.0, 51.0], vec![1.0]),
        Err(DataError::LengthMismatch { expected: 2, actual: 1, .. })
    ));
    assert!(matches!(
        Scan::new(vec![50.0, f64::NAN], vec![1.0, 2.0]),
        Err(DataError::NonFinite { index: 1, .. })
    ));
}

#[test]
fn test_run_tic_and_ranges() {
    let scans = vec![
        Scan::new(vec![50.0, 60.0], vec![1.0, 2.0]).unwrap(),
        Scan::new(vec![45.0, 70.0], vec![3.0, 4.0]).unwrap(),
    ];
    let run = GcmsRun::new(vec![1.0, 2.0], scans).unwrap();
    assert_eq!(run.len(), 2);
    assert_eq!(run.min_rt(), 1.0);
    assert_eq!(run.max_rt(), 2.0);
    assert_eq!(run.min_mass(), 45.0);
    assert_eq!(run.max_mass(), 70.0);
    assert!(run.tic().is_tic());
    assert_eq!(run.tic().intensities(), &[3.0, 7.0]);
}

#[test]
fn test_run_rejects_mismatch_and_unsorted() {
    let scan = Scan::new(vec![50.0], vec![1.0]).unwrap();
    assert!(matches!(
        GcmsRun::new(vec![1.0, 2.0], vec![scan.clone()]),
        Err(DataError::LengthMismatch { .. })
    ));
    assert!(matches!(
        GcmsRun::new(vec![2.0, 1.0], vec![scan.clone(), scan]),
        Err(DataError::Unsorted(_))
    ));
    assert!(matches!(
        GcmsRun::new(vec![], vec![]),
        Err(DataError::EmptyInput(_))
    ));
}

#[test]
fn test_matrix_size_and_rows() {
    let im = sample_matrix();
    assert_eq!(im.size(), (4, 3));
    assert_eq!(im.row(1).unwrap(), &[3.0, 4.0, 5.0]);
    assert!(matches!(
        im.row(4),
        Err(DataError::IndexOutOfRange { index: 4, len: 4, .. })
    ));
    assert_eq!(im.iter_rows().count(), 4);
    assert_eq!(&im.as_flat()[3..6], &[3.0, 4.0, 5.0]);
    assert_eq!(im.as_flat().len(), 12);
}

#[test]
fn test_matrix_rejects_ragged_rows() {
    let result = IntensityMatrix::new(
        vec![1.0, 2.0],
        vec![50.0, 51.0],
        vec![vec![1.0, 2.0], vec![3.0]],
    );
    assert!(matches!(
        result,
        Err(DataError::LengthMismatch { expected: 2, actual: 1, .. })
    ));

    let result = IntensityMatrix::new(vec![1.0, 2.0], vec![50.0], vec![vec![1.0]]);
    assert!(matches!(result, Err(DataError::LengthMismatch { .. })));
}

#[test]
fn test_column_view_is_strided_read() {
    let im = sample_matrix();
    let channel = im.column(1).unwrap();
    assert_eq!(channel.len(), 4);
    assert_eq!(channel.to_vec(), vec![1.0, 4.0, 7.0, 10.0]);
    assert_eq!(channel.get(2), Some(7.0));
    assert_eq!(channel.get(4), None);
    assert!(im.column(3).is_err());
}

#[test]
fn test_ion_chromatogram_lookup() {
    let im = sample_matrix();
    let ic = im.ion_chromatogram_at_mass(Some(52.0)).unwrap();
    assert_eq!(ic.mass(), Some(52.0));
    assert_eq!(ic.intensities(), &[2.0, 5.0, 8.0, 11.0]);
    assert_eq!(ic.times(), im.times());

    // Off-bin masses use the nearest bin
    let ic = im.ion_chromatogram_at_mass(Some(50.7)).unwrap();
    assert_eq!(ic.mass(), Some(51.0));

    let tic = im.ion_chromatogram_at_mass(None).unwrap();
    assert!(tic.is_tic());
    assert_eq!(tic.intensities(), &[3.0, 12.0, 21.0, 30.0]);

    assert!(matches!(
        im.ion_chromatogram_at_mass(Some(60.0)),
        Err(DataError::MassOutOfRange { .. })
    ));
}

#[test]
fn test_nearest_time_index_tie_goes_to_lower_index() {
    let im = sample_matrix();
    assert_eq!(im.nearest_time_index(11.5).unwrap(), 1);
    assert_eq!(im.nearest_time_index(11.51).unwrap(), 2);
    assert_eq!(im.nearest_time_index(10.0).unwrap(), 0);
    assert_eq!(im.nearest_time_index(13.0).unwrap(), 3);
    assert!(matches!(
        im.nearest_time_index(9.99),
        Err(DataError::TimeOutOfRange { .. })
    ));
    assert!(im.nearest_time_index(13.01).is_err());
}

#[test]
fn test_nearest_mass_index_tie_goes_to_lower_index() {
    let im = sample_matrix();
    assert_eq!(im.nearest_mass_index(50.5).unwrap(), 0);
    assert_eq!(im.nearest_mass_index(51.5).unwrap(), 1);
    assert_eq!(im.nearest_mass_index(52.0).unwrap(), 2);
    assert!(im.nearest_mass_index(49.0).is_err());
}

#[test]
fn test_single_scan_lookup() {
    let im = IntensityMatrix::new(vec![5.0], vec![40.0], vec![vec![1.0]]).unwrap();
    assert_eq!(im.nearest_time_index(5.0).unwrap(), 0);
    assert_eq!(im.tic().time_step(), 0.0);
}

#[test]
fn test_mass_spectrum_at_index() {
    let im = sample_matrix();
    let ms = im.mass_spectrum_at_index(0).unwrap();
    assert_eq!(ms.masses(), &[50.0, 51.0, 52.0]);
    assert_eq!(ms.intensities(), &[0.0, 1.0, 2.0]);
    assert_eq!(ms.contributing_channels().collect::<Vec<_>>(), vec![1, 2]);
    assert!(im.mass_spectrum_at_index(10).is_err());
}

#[test]
fn test_chromatogram_accessors() {
    let ic = IonChromatogram::new(vec![1.0, 2.0, 3.0], vec![0.0, 0.5, 1.5], Some(73.0)).unwrap();
    assert_eq!(ic.len(), 3);
    assert_eq!(ic.intensity_at(2).unwrap(), 3.0);
    assert_eq!(ic.time_at(1).unwrap(), 0.5);
    assert!(ic.intensity_at(3).is_err());
    assert!(ic.time_at(3).is_err());
    assert_eq!(ic.time_step(), 0.75);
    assert!(!ic.is_tic());

    assert!(matches!(
        IonChromatogram::new(vec![1.0], vec![0.0, 1.0], None),
        Err(DataError::LengthMismatch { .. })
    ));
}

#[test]
fn test_format_scientific_matches_c_printf() {
    assert_eq!(format_scientific(12345.0, 6), "1.234500e+04");
    assert_eq!(format_scientific(0.0, 6), "0.000000e+00");
    assert_eq!(format_scientific(0.5, 6), "5.000000e-01");
    assert_eq!(format_scientific(-2.5e-12, 6), "-2.500000e-12");
    assert_eq!(format_scientific(1.0e120, 6), "1.000000e+120");
}

#[test]
fn test_chromatogram_write_minutes() {
    let ic = IonChromatogram::new(vec![12345.0, 0.5], vec![60.0, 90.0], None).unwrap();

    let mut buf = Vec::new();
    ic.write_to(&mut buf, true).unwrap();
    let text = String::from_utf8(buf).unwrap();
    assert_eq!(text, "  1.0000 1.234500e+04\n  1.5000 5.000000e-01\n");

    let mut buf = Vec::new();
    ic.write_to(&mut buf, false).unwrap();
    let text = String::from_utf8(buf).unwrap();
    assert_eq!(text, " 60.0000 1.234500e+04\n 90.0000 5.000000e-01\n");
}

#[test]
fn test_bin_run_sums_into_unit_bins() {
    let scans = vec![
        Scan::new(vec![49.8, 50.1, 52.4], vec![1.0, 2.0, 3.0]).unwrap(),
        Scan::new(vec![51.2, 51.4], vec![4.0, 5.0]).unwrap(),
    ];
    let run = GcmsRun::new(vec![1.0, 2.0], scans).unwrap();
    let im = bin_run(&run).unwrap();

    assert_eq!(im.masses(), &[50.0, 51.0, 52.0]);
    assert_eq!(im.row(0).unwrap(), &[3.0, 0.0, 3.0]);
    assert_eq!(im.row(1).unwrap(), &[0.0, 9.0, 0.0]);
    assert_eq!(im.tic().intensities(), run.tic().intensities());
}

#[test]
fn test_bin_flat_arrays_splits_on_mass_decrease() {
    let times = [1.0, 2.0, 3.0];
    let masses = [50.0, 51.0, 52.0, 50.0, 52.0, 51.0];
    let intensities = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    let im = bin_flat_arrays(&times, &masses, &intensities).unwrap();

    assert_eq!(im.size(), (3, 3));
    assert_eq!(im.row(0).unwrap(), &[1.0, 2.0, 3.0]);
    assert_eq!(im.row(1).unwrap(), &[4.0, 0.0, 5.0]);
    assert_eq!(im.row(2).unwrap(), &[0.0, 6.0, 0.0]);
}

#[test]
fn test_bin_flat_arrays_truncates_to_shorter() {
    // Two scans but three times
    let im = bin_flat_arrays(&[1.0, 2.0, 3.0], &[50.0, 51.0, 50.0], &[1.0, 2.0, 3.0]).unwrap();
    assert_eq!(im.size(), (2, 2));
    assert_eq!(im.times(), &[1.0, 2.0]);

    // Three scans but two times
    let im = bin_flat_arrays(&[1.0, 2.0], &[52.0, 51.0, 50.0], &[1.0, 2.0, 3.0]).unwrap();
    assert_eq!(im.size(), (2, 3));
    assert_eq!(im.row(1).unwrap(), &[0.0, 2.0, 0.0]);
    assert_eq!(im.tic().intensities(), &[1.0, 2.0]);
}

#[test]
fn test_bin_flat_arrays_rejects_unsorted_times() {
    let result = bin_flat_arrays(&[2.0, 1.0], &[50.0, 50.0], &[1.0, 2.0]);
    assert!(matches!(result, Err(DataError::Unsorted(_))));

    let result = bin_flat_arrays(&[1.0], &[50.0, 51.0], &[1.0]);
    assert!(matches!(result, Err(DataError::LengthMismatch { .. })));
}

#[test]
fn test_bin_run_rejects_extreme_mass_range() {
    let run = GcmsRun::new(
        vec![1.0],
        vec![Scan::new(vec![-1e300, 1e300], vec![1.0, 2.0]).unwrap()],
    )
    .unwrap();
    assert!(matches!(
        bin_run(&run),
        Err(DataError::MassRangeTooWide { .. })
    ));

    // A single stray mass far above the rest
    let run = GcmsRun::new(
        vec![1.0],
        vec![Scan::new(vec![50.0, 1e10], vec![1.0, 2.0]).unwrap()],
    )
    .unwrap();
    assert!(matches!(
        bin_run(&run),
        Err(DataError::MassRangeTooWide { limit, .. }) if limit == binning::MAX_MASS_BINS
    ));
}

#[test]
fn test_bin_run_rejects_oversized_matrix() {
    let top = (binning::MAX_MASS_BINS - 1) as f64;
    let rows = binning::MAX_MATRIX_CELLS / binning::MAX_MASS_BINS + 1;
    let times: Vec<f64> = (0..rows).map(|i| i as f64).collect();
    let scans = (0..rows)
        .map(|_| Scan::new(vec![0.0, top], vec![1.0, 1.0]).unwrap())
        .collect();
    let run = GcmsRun::new(times, scans).unwrap();
    assert!(matches!(
        bin_run(&run),
        Err(DataError::MatrixTooLarge { cols, .. }) if cols == binning::MAX_MASS_BINS
    ));
}

#[test]
fn test_bin_flat_arrays_rejects_extreme_mass_range() {
    let result = bin_flat_arrays(&[1.0], &[-1e300, 1e300], &[1.0, 2.0]);
    assert!(matches!(result, Err(DataError::MassRangeTooWide { .. })));

    let result = bin_flat_arrays(&[1.0], &[50.0, 1e12], &[1.0, 2.0]);
    assert!(matches!(result, Err(DataError::MassRangeTooWide { .. })));
}
