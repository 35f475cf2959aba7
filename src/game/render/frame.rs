//! Read-only snapshot handed to a renderer every tick.

use glam::Vec2;

use crate::game::config::PlayfieldConfig;
use crate::game::slingshot::Slingshot;
use crate::game::state::GameMode;
use crate::game::targets::Target;
use crate::physics::ballistics::Projectile;
use crate::render::Color;

/// Colors and stroke widths shared by both backends.
pub mod palette {
    use crate::render::Color;

    pub const BACKGROUND: Color = Color::rgb(0x0a, 0x0a, 0x0f);
    pub const GROUND: Color = Color::rgb(0x2a, 0x2a, 0x3f);
    pub const SLINGSHOT: Color = Color::rgb(0x8a, 0x2b, 0xe2);
    pub const BAND: Color = Color::rgb(0xff, 0x00, 0xff);
    pub const TARGET_OUTLINE: Color = Color::WHITE;
    pub const GLOW: Color = Color::rgb(0x8a, 0x2b, 0xe2);

    pub const POST_WIDTH: f32 = 4.0;
    pub const BAND_WIDTH: f32 = 2.0;
    pub const OUTLINE_WIDTH: f32 = 2.0;
    pub const GLOW_BLUR: f32 = 15.0;
    /// Umbrella glyph size in canvas pixels
    pub const UMBRELLA_FONT_PX: f32 = 40.0;
    pub const UMBRELLA_GLYPH: &str = "☂️";

    /// Canopy fill for backends without emoji.
    pub const CANOPY: Color = Color::rgb(0xba, 0x55, 0xd3);
}

/// Everything a renderer may look at. Borrowing keeps it read-only.
#[derive(Debug, Clone, Copy)]
pub struct FrameView<'a> {
    pub playfield: &'a PlayfieldConfig,
    pub projectile: &'a Projectile,
    pub slingshot: &'a Slingshot,
    pub targets: &'a [Target],
    pub mode: GameMode,
}

impl FrameView<'_> {
    /// The band is only drawn while the player is pulling it.
    pub fn shows_band(&self) -> bool {
        self.mode == GameMode::Aiming
    }

    pub fn band(&self) -> [Vec2; 3] {
        self.slingshot.band(self.projectile.position)
    }

    pub fn standing_targets(&self) -> impl Iterator<Item = &Target> {
        self.targets.iter().filter(|t| !t.destroyed)
    }

    /// Ground strip as (top-left, size).
    pub fn ground(&self) -> (Vec2, Vec2) {
        let top = self.playfield.ground_top;
        (
            Vec2::new(0.0, top),
            Vec2::new(self.playfield.width, (self.playfield.height - top).max(0.0)),
        )
    }

    pub fn background(&self) -> Color {
        palette::BACKGROUND
    }
}

/// A backend that turns a [`FrameView`] into pixels. The whole frame is
/// redrawn on every call.
pub trait FrameRenderer {
    type Error;

    fn render(&mut self, frame: &FrameView<'_>) -> Result<(), Self::Error>;
}
