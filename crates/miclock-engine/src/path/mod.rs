//! Vector outlines built from move/line/quad verbs.
//!
//! A `Path` is a value type: cheap to clone, comparable, and independent of
//! any renderer. Renderers convert it to their own representation.

use crate::coords::Vec2;

/// One outline verb. Points are absolute, in logical pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PathVerb {
    MoveTo(Vec2),
    LineTo(Vec2),
    /// Quadratic Bézier segment through control point `ctrl` to `to`.
    QuadTo { ctrl: Vec2, to: Vec2 },
    Close,
}

/// Recorded outline.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    verbs: Vec<PathVerb>,
}

impl Path {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn move_to(&mut self, p: Vec2) -> &mut Self {
        self.verbs.push(PathVerb::MoveTo(p));
        self
    }

    #[inline]
    pub fn line_to(&mut self, p: Vec2) -> &mut Self {
        self.verbs.push(PathVerb::LineTo(p));
        self
    }

    #[inline]
    pub fn quad_to(&mut self, ctrl: Vec2, to: Vec2) -> &mut Self {
        self.verbs.push(PathVerb::QuadTo { ctrl, to });
        self
    }

    #[inline]
    pub fn close(&mut self) -> &mut Self {
        self.verbs.push(PathVerb::Close);
        self
    }

    #[inline]
    pub fn verbs(&self) -> &[PathVerb] {
        &self.verbs
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.verbs.is_empty()
    }

    /// All points referenced by the path, control points included.
    pub fn points(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.verbs.iter().flat_map(|v| {
            let (a, b) = match *v {
                PathVerb::MoveTo(p) | PathVerb::LineTo(p) => (Some(p), None),
                PathVerb::QuadTo { ctrl, to } => (Some(ctrl), Some(to)),
                PathVerb::Close => (None, None),
            };
            a.into_iter().chain(b)
        })
    }
}
