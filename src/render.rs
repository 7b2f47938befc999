use crate::constants::*;
use crate::{dom, layout};
use sparkfield_core::{FieldError, SparkSprite, SparkSurface, Viewport};
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Canvas2D backend for the spark field.
///
/// Works in CSS pixels: the backing store is DPR-scaled and the context
/// transform maps CSS coordinates onto it. Each sprite is the spark texture
/// when it loaded, otherwise a filled circle in the sprite tint.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    texture: Option<web::HtmlImageElement>,
    dpr: f64,
    css_size: (f64, f64),
}

impl CanvasSurface {
    pub fn new(
        canvas: &web::HtmlCanvasElement,
        texture: Option<web::HtmlImageElement>,
    ) -> Result<Self, FieldError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| FieldError::resource(format!("2d context: {:?}", e)))?
            .ok_or_else(|| FieldError::resource("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|_| FieldError::resource("unexpected context type"))?;
        if texture.is_none() {
            log::warn!("[render] spark texture missing; drawing circles");
        }
        Ok(Self {
            canvas: canvas.clone(),
            ctx,
            texture,
            dpr: 1.0,
            css_size: (0.0, 0.0),
        })
    }

    fn draw(&self, s: &SparkSprite) -> Result<(), FieldError> {
        self.ctx.set_global_alpha(s.alpha as f64);
        match layout::sprite_draw(s.position, s.radius, self.texture.is_some(), SPRITE_EXTENT) {
            layout::SpriteDraw::Image { x, y, side } => {
                if let Some(img) = &self.texture {
                    self.ctx
                        .draw_image_with_html_image_element_and_dw_and_dh(img, x, y, side, side)
                        .map_err(|e| FieldError::resource(format!("drawImage: {:?}", e)))?;
                }
            }
            layout::SpriteDraw::Circle { x, y, radius } => {
                self.ctx
                    .set_fill_style_str(&layout::tint_css(s.tint, FALLBACK_FILL));
                self.ctx.begin_path();
                self.ctx
                    .arc(x, y, radius, 0.0, TAU)
                    .map_err(|e| FieldError::resource(format!("arc: {:?}", e)))?;
                self.ctx.fill();
            }
        }
        Ok(())
    }
}

impl SparkSurface for CanvasSurface {
    fn resize(&mut self, viewport: Viewport) {
        self.dpr = dom::device_pixel_ratio();
        self.css_size = (viewport.width.max(0.0) as f64, viewport.height.max(0.0) as f64);
        let (w, h) = layout::backing_size(self.css_size.0, self.css_size.1, self.dpr);
        self.canvas.set_width(w);
        self.canvas.set_height(h);
        // resizing the backing store resets the context state
        _ = self.ctx.set_transform(self.dpr, 0.0, 0.0, self.dpr, 0.0, 0.0);
    }

    fn present(&mut self, sprites: &[SparkSprite]) -> Result<(), FieldError> {
        self.ctx.set_global_alpha(1.0);
        self.ctx.clear_rect(0.0, 0.0, self.css_size.0, self.css_size.1);
        let result = sprites.iter().try_for_each(|s| self.draw(s));
        self.ctx.set_global_alpha(1.0);
        result
    }

    fn release(&mut self) {
        self.ctx.clear_rect(0.0, 0.0, self.css_size.0, self.css_size.1);
        self.texture = None;
        dom::remove_element(&self.canvas);
        log::info!("[render] canvas released");
    }
}
