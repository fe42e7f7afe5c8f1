//! Drawing-surface abstraction.
//!
//! The particle code only talks to a [`Surface`], so the same draw routine
//! runs against a browser canvas and against a recording surface in tests.
//! Paint alpha is global state on a 2D context; [`AlphaScope`] confines a
//! change to one draw and puts it back to fully opaque when dropped.

use glam::DVec2;
use std::ops::{Deref, DerefMut};

/// Size of the paintable area in surface pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }
}

/// Minimal subset of a 2D path-filling context.
pub trait Surface {
    fn clear(&mut self, bounds: Bounds);
    fn begin_path(&mut self);
    fn move_to(&mut self, p: DVec2);
    fn bezier_curve_to(&mut self, c1: DVec2, c2: DVec2, end: DVec2);
    fn set_fill_color(&mut self, color: &str);
    fn set_global_alpha(&mut self, alpha: f64);
    fn fill(&mut self);
}

/// Global alpha override that lasts as long as the guard.
pub struct AlphaScope<'a, S: Surface + ?Sized> {
    surface: &'a mut S,
}

impl<'a, S: Surface + ?Sized> AlphaScope<'a, S> {
    pub fn new(surface: &'a mut S, alpha: f64) -> Self {
        surface.set_global_alpha(alpha.clamp(0.0, 1.0));
        Self { surface }
    }
}

impl<S: Surface + ?Sized> Deref for AlphaScope<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.surface
    }
}

impl<S: Surface + ?Sized> DerefMut for AlphaScope<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.surface
    }
}

impl<S: Surface + ?Sized> Drop for AlphaScope<'_, S> {
    fn drop(&mut self) {
        self.surface.set_global_alpha(1.0);
    }
}
