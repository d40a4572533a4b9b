// SPDX-License-Identifier: MPL-2.0
//! Active-screen discriminant.

/// Which screen the application is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Tracker,
    Settings,
}
