//! Presentational style descriptors and easing.
//!
//! A [`VisualStyle`] is the small set of properties a reveal animates:
//! opacity, a translation offset in CSS pixels, and a uniform scale. The web
//! frontend turns it into an inline `style` attribute via [`VisualStyle::to_css`].

use crate::constants::HIDDEN_OFFSET_Y_PX;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualStyle {
    pub opacity: f32,
    pub offset: Vec2,
    pub scale: f32,
}

impl VisualStyle {
    /// Fully shown, in place.
    pub const VISIBLE: Self = Self {
        opacity: 1.0,
        offset: Vec2::ZERO,
        scale: 1.0,
    };

    /// Transparent and shifted down, ready to rise into place.
    pub const HIDDEN: Self = Self {
        opacity: 0.0,
        offset: Vec2::new(0.0, HIDDEN_OFFSET_Y_PX),
        scale: 1.0,
    };

    pub const fn new(opacity: f32, offset: Vec2, scale: f32) -> Self {
        Self {
            opacity,
            offset,
            scale,
        }
    }

    /// Component-wise interpolation; `t` is clamped to \[0, 1\].
    pub fn lerp(from: Self, to: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            opacity: from.opacity + (to.opacity - from.opacity) * t,
            offset: from.offset.lerp(to.offset, t),
            scale: from.scale + (to.scale - from.scale) * t,
        }
    }

    /// Inline CSS for this style. Opacity is clamped so overshooting eases
    /// never produce invalid values.
    pub fn to_css(&self) -> String {
        format!(
            "opacity:{:.3};transform:translate({:.2}px,{:.2}px) scale({:.3})",
            self.opacity.clamp(0.0, 1.0),
            self.offset.x,
            self.offset.y,
            self.scale
        )
    }
}

impl Default for VisualStyle {
    fn default() -> Self {
        Self::VISIBLE
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Ease {
    Linear,
    OutQuad,
    #[default]
    OutCubic,
    InOutCubic,
}

impl Ease {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
        }
    }
}
