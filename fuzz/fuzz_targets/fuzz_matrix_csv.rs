#![no_main]

use libfuzzer_sys::fuzz_target;

use gcquant::peak::{median_bounds, peak_sum_area, Peak};

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes must either parse or fail cleanly, never panic
    let Ok(im) = gcquant::io::read_matrix_csv(data) else {
        return;
    };

    // Anything that parsed must integrate at every scan
    for &rt in im.times().iter().take(32) {
        if let Ok(peak) = Peak::from_matrix(&im, rt) {
            let _ = peak_sum_area(&im, &peak, 0);
            let _ = median_bounds(&im, &peak, false);
        }
    }
});
