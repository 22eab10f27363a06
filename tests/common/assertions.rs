use e6b::WindCorrection;

/// Assert that a value carries no more than `decimals` decimal places
#[track_caller]
pub fn assert_rounded_to(value: f64, decimals: usize) {
    assert!(value.is_finite(), "Value {} is not finite", value);
    // Display prints the shortest string that reads back to the same f64
    let printed = value.to_string();
    let places = printed.split_once('.').map_or(0, |(_, frac)| frac.len());
    assert!(
        places <= decimals,
        "Value {} is not rounded to {} decimal places",
        value,
        decimals
    );
}

/// Assert that a wind solution is physically sensible
#[track_caller]
pub fn assert_wind_correction_valid(wc: &WindCorrection) {
    assert!(
        wc.wca > -90.0 && wc.wca < 90.0,
        "WCA {} outside (-90, 90)",
        wc.wca
    );
    assert!(wc.groundspeed > 0.0, "Groundspeed {} not positive", wc.groundspeed);
    assert_rounded_to(wc.wca, 1);
    assert_rounded_to(wc.groundspeed, 1);
}
