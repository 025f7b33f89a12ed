//! Viewport clamping for the move menu.
//!
//! The menu is positioned with `position: fixed` at the pointer. Its size is
//! treated as a fixed box so the position can be computed before the menu
//! renders.

#[cfg(test)]
#[path = "placement_test.rs"]
mod placement_test;

use serde::{Deserialize, Serialize};

use crate::consts::{MENU_EDGE_MARGIN_PX, MENU_HEIGHT_PX, MENU_WIDTH_PX};

/// A point in CSS pixels relative to the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Viewport dimensions in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// Assumed menu box and its edge margin.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuBox {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
}

impl Default for MenuBox {
    fn default() -> Self {
        Self {
            width: MENU_WIDTH_PX,
            height: MENU_HEIGHT_PX,
            margin: MENU_EDGE_MARGIN_PX,
        }
    }
}

/// Top-left corner for a menu opened at `pointer`.
///
/// An axis that would overflow is pulled back so the box ends `margin`
/// pixels short of the edge. The result never goes negative, so on a
/// viewport smaller than the box the menu pins to the top-left.
#[must_use]
pub fn clamp_menu_position(pointer: Point, viewport: Viewport, menu: &MenuBox) -> Point {
    Point {
        x: clamp_axis(pointer.x, viewport.width, menu.width, menu.margin),
        y: clamp_axis(pointer.y, viewport.height, menu.height, menu.margin),
    }
}

fn clamp_axis(at: f64, extent: f64, size: f64, margin: f64) -> f64 {
    if at + size > extent {
        (extent - size - margin).max(0.0)
    } else {
        at
    }
}
