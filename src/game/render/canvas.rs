//! Browser backend: immediate-mode drawing on a 2D canvas context.

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::game::render::frame::{FrameRenderer, FrameView, palette};

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    fn stroke_segment(&self, points: &[glam::Vec2]) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        self.ctx.begin_path();
        self.ctx.move_to(first.x as f64, first.y as f64);
        for p in rest {
            self.ctx.line_to(p.x as f64, p.y as f64);
        }
        self.ctx.stroke();
    }
}

impl FrameRenderer for CanvasRenderer {
    type Error = JsValue;

    fn render(&mut self, frame: &FrameView<'_>) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        let field = frame.playfield;

        ctx.set_fill_style_str(&frame.background().to_css());
        ctx.fill_rect(0.0, 0.0, field.width as f64, field.height as f64);

        let (ground_min, ground_size) = frame.ground();
        ctx.set_fill_style_str(&palette::GROUND.to_css());
        ctx.fill_rect(
            ground_min.x as f64,
            ground_min.y as f64,
            ground_size.x as f64,
            ground_size.y as f64,
        );

        ctx.set_stroke_style_str(&palette::SLINGSHOT.to_css());
        ctx.set_line_width(palette::POST_WIDTH as f64);
        for (base, tip) in [frame.slingshot.left_post(), frame.slingshot.right_post()] {
            self.stroke_segment(&[base, tip]);
        }

        if frame.shows_band() {
            ctx.set_stroke_style_str(&palette::BAND.to_css());
            ctx.set_line_width(palette::BAND_WIDTH as f64);
            self.stroke_segment(&frame.band());
        }

        for target in frame.standing_targets() {
            let min = target.bounds.min;
            let size = target.bounds.size;
            ctx.set_fill_style_str(&target.color.to_css());
            ctx.fill_rect(min.x as f64, min.y as f64, size.x as f64, size.y as f64);
            ctx.set_stroke_style_str(&palette::TARGET_OUTLINE.to_css());
            ctx.set_line_width(palette::OUTLINE_WIDTH as f64);
            ctx.stroke_rect(min.x as f64, min.y as f64, size.x as f64, size.y as f64);
        }

        let pos = frame.projectile.position;
        ctx.set_font(&format!("{}px Arial", palette::UMBRELLA_FONT_PX));
        ctx.set_text_align("center");
        ctx.set_text_baseline("middle");
        ctx.fill_text(palette::UMBRELLA_GLYPH, pos.x as f64, pos.y as f64)?;

        // second pass with the glow
        ctx.set_shadow_color(&palette::GLOW.to_css());
        ctx.set_shadow_blur(palette::GLOW_BLUR as f64);
        ctx.fill_text(palette::UMBRELLA_GLYPH, pos.x as f64, pos.y as f64)?;
        ctx.set_shadow_blur(0.0);

        Ok(())
    }
}
