// SPDX-License-Identifier: MPL-2.0
//! Default values for user preferences.

/// Bottle size pre-filled on the feed form, in millilitres.
pub const DEFAULT_BOTTLE_SIZE_ML: f32 = 120.0;

/// Number of trailing days shown on the intake chart.
pub const DEFAULT_CHART_DAYS: u32 = 7;

/// Seconds a warning banner stays visible before auto-dismissing.
pub const DEFAULT_NOTIFICATION_TIMEOUT_SECS: u32 = 6;

const _: () = {
    assert!(DEFAULT_BOTTLE_SIZE_ML > 0.0);
    assert!(DEFAULT_CHART_DAYS > 0);
    assert!(DEFAULT_NOTIFICATION_TIMEOUT_SECS > 0);
};
