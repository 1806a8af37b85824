//! Tab geometry for the folded-panel layout
//!
//! A pure function of the viewport size. On desktop the panel tabs pivot
//! around the bottom-left corner and are angled so their tips reach 25%
//! (yellow) and 12.5% (white) of the viewport width at the top edge. On
//! mobile they hang from the top-right corner at fixed angles.

use serde::{Deserialize, Serialize};

const YELLOW_SPAN: f64 = 0.25;
const WHITE_SPAN: f64 = 0.125;
const HOVER_TILT_DEG: f64 = 3.0;
const WHITE_TAB_INSET_PX: f64 = 220.0;
const YELLOW_TAB_INSET_PX: f64 = 460.0;
const MOBILE_WHITE_TAB: f64 = 0.25;
const MOBILE_YELLOW_TAB: f64 = 0.55;

/// Computed geometry, angles in degrees and distances in CSS pixels
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayoutGeometry {
    pub mobile: bool,
    pub angle_yellow: f64,
    pub angle_white: f64,
    pub angle_yellow_hover: f64,
    pub angle_white_hover: f64,
    pub open_yellow: f64,
    pub open_white: f64,
    pub open_peek_tab: f64,
    pub peek_main: f64,
    pub peek_deep: f64,
    pub tab_dist_white: f64,
    pub tab_dist_yellow: f64,
}

impl LayoutGeometry {
    pub fn compute(width: f64, height: f64, mobile: bool) -> Self {
        if mobile {
            Self::mobile(width)
        } else {
            Self::desktop(width, height)
        }
    }

    fn desktop(width: f64, height: f64) -> Self {
        let angle_yellow = -height.atan2(width * YELLOW_SPAN).to_degrees();
        let angle_white = -height.atan2(width * WHITE_SPAN).to_degrees();
        let dist_yellow = height.hypot(width * YELLOW_SPAN);
        let dist_white = height.hypot(width * WHITE_SPAN);

        Self {
            mobile: false,
            angle_yellow,
            angle_white,
            angle_yellow_hover: angle_yellow + HOVER_TILT_DEG,
            angle_white_hover: angle_white + HOVER_TILT_DEG,
            open_yellow: -5.0,
            open_white: -5.0,
            open_peek_tab: -2.0,
            peek_main: -25.0,
            peek_deep: -35.0,
            tab_dist_white: dist_white - WHITE_TAB_INSET_PX,
            tab_dist_yellow: dist_yellow - YELLOW_TAB_INSET_PX,
        }
    }

    fn mobile(width: f64) -> Self {
        Self {
            mobile: true,
            angle_yellow: -20.0,
            angle_white: -10.0,
            angle_yellow_hover: -23.0,
            angle_white_hover: -13.0,
            open_yellow: -85.0,
            open_white: -85.0,
            open_peek_tab: -82.0,
            peek_main: -70.0,
            peek_deep: -60.0,
            tab_dist_white: width * MOBILE_WHITE_TAB,
            tab_dist_yellow: width * MOBILE_YELLOW_TAB,
        }
    }

    /// CSS custom properties for the document root
    pub fn css_properties(&self) -> Vec<(&'static str, String)> {
        let deg = |v: f64| format!("{}deg", v);
        let px = |v: f64| format!("{}px", v);
        vec![
            ("--tab-dist-white", px(self.tab_dist_white)),
            ("--tab-dist-yellow", px(self.tab_dist_yellow)),
            ("--ang-yellow", deg(self.angle_yellow)),
            ("--ang-white", deg(self.angle_white)),
            ("--ang-yellow-hov", deg(self.angle_yellow_hover)),
            ("--ang-white-hov", deg(self.angle_white_hover)),
            ("--ang-open-yellow", deg(self.open_yellow)),
            ("--ang-open-white", deg(self.open_white)),
            ("--ang-open-peek-tab", deg(self.open_peek_tab)),
            ("--ang-peek-main", deg(self.peek_main)),
            ("--ang-peek-deep", deg(self.peek_deep)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_desktop_square_quarter() {
        // h == w/4 puts the yellow tab at exactly 45 degrees
        let g = LayoutGeometry::compute(400.0, 100.0, false);
        assert!(close(g.angle_yellow, -45.0));
        assert!(close(g.angle_yellow_hover, -42.0));
        assert!(close(g.tab_dist_yellow, 100.0 * 2f64.sqrt() - 460.0));
    }

    #[test]
    fn test_desktop_white_is_steeper() {
        let g = LayoutGeometry::compute(1920.0, 1080.0, false);
        assert!(g.angle_white < g.angle_yellow);
        assert!(g.angle_yellow > -90.0 && g.angle_yellow < 0.0);
    }

    #[test]
    fn test_mobile_is_width_relative() {
        let g = LayoutGeometry::compute(400.0, 800.0, true);
        assert!(g.mobile);
        assert!(close(g.tab_dist_white, 100.0));
        assert!(close(g.tab_dist_yellow, 220.0));
        assert!(close(g.open_peek_tab, -82.0));
    }

    #[test]
    fn test_css_properties() {
        let props = LayoutGeometry::compute(400.0, 800.0, true).css_properties();
        assert_eq!(props.len(), 11);
        assert!(props.contains(&("--ang-yellow", "-20deg".to_string())));
        assert!(props.contains(&("--tab-dist-white", "100px".to_string())));
    }
}
