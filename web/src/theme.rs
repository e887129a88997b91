/// Fixed board palette and stroke geometry.
pub(crate) struct Theme;

impl Theme {
    pub const BACKGROUND: &'static str = "#3b3738";
    pub const STROKE: &'static str = "#7E8F7C";
    pub const LINE_WIDTH: f64 = 4.0;
    pub const LINE_CAP: &'static str = "round";

    /// Radius of the nought circle, centered in the cell.
    pub const NOUGHT_RADIUS: f64 = 30.0;
    /// Distance from the cell edge to the cross stroke endpoints.
    pub const CROSS_INSET: f64 = 20.0;
}
