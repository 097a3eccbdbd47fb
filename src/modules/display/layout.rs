use serde::Serialize;

/// Responsive thresholds the kiosk presentation feeds back into the fitter
/// and its panel arrangement. Derived from viewport telemetry of the
/// deployed fleet: wall mounts are wide, rugged handhelds are short.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LayoutMode {
    /// Short viewports collapse header chrome and cap the plate font.
    pub compact: bool,
    /// Wide viewports place input and results side by side.
    pub wide: bool,
}

impl LayoutMode {
    pub fn from_viewport(width: f64, height: f64) -> Self {
        Self {
            compact: height <= 700.0,
            wide: width >= 840.0,
        }
    }
}
