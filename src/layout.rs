// Pure sizing and timing helpers shared by the DOM glue.

/// Canvas backing-store size for a CSS box at the given device pixel ratio.
/// Never returns a zero dimension; non-finite input collapses to 1.
#[inline]
pub fn backing_size(css_width: f64, css_height: f64, dpr: f64) -> (u32, u32) {
    let dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
    let px = |v: f64| {
        if v.is_finite() && v > 0.0 {
            ((v * dpr) as u32).max(1)
        } else {
            1
        }
    };
    (px(css_width), px(css_height))
}

/// Trailing-edge debounce for window resize bursts.
///
/// `note` records the latest size and restarts the quiet period; `poll`
/// yields the size once no resize has arrived for `delay_ms`.
#[derive(Clone, Debug, Default)]
pub struct ResizeDebounce {
    delay_ms: f64,
    pending: Option<(f32, f32)>,
    last_event_ms: f64,
}

impl ResizeDebounce {
    pub fn new(delay_ms: f64) -> Self {
        Self {
            delay_ms: delay_ms.max(0.0),
            pending: None,
            last_event_ms: 0.0,
        }
    }

    pub fn note(&mut self, width: f32, height: f32, now_ms: f64) {
        self.pending = Some((width, height));
        self.last_event_ms = now_ms;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn poll(&mut self, now_ms: f64) -> Option<(f32, f32)> {
        if now_ms - self.last_event_ms >= self.delay_ms {
            self.pending.take()
        } else {
            None
        }
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

/// Clamp a raw frame delta: negative or non-finite becomes 0, stalls cap at `max_sec`.
#[inline]
pub fn frame_dt(raw_sec: f32, max_sec: f32) -> f32 {
    if raw_sec.is_finite() {
        raw_sec.clamp(0.0, max_sec)
    } else {
        0.0
    }
}

/// How one sprite lands on the 2D canvas, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SpriteDraw {
    /// Texture stretched over a square of side `side` with top-left `(x, y)`.
    Image { x: f64, y: f64, side: f64 },
    /// Filled circle centred at `(x, y)`.
    Circle { x: f64, y: f64, radius: f64 },
}

/// Texture quad when a texture is loaded, otherwise the fallback circle.
pub fn sprite_draw(position: [f32; 2], radius: f32, has_texture: bool, extent: f64) -> SpriteDraw {
    let (x, y, r) = (position[0] as f64, position[1] as f64, radius.max(0.0) as f64);
    if has_texture {
        let side = r * extent;
        SpriteDraw::Image {
            x: x - side * 0.5,
            y: y - side * 0.5,
            side,
        }
    } else {
        SpriteDraw::Circle { x, y, radius: r }
    }
}

/// CSS colour for a fallback circle; pure white maps to `white_css`.
pub fn tint_css(tint: [f32; 3], white_css: &str) -> String {
    let c = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    if tint == [1.0, 1.0, 1.0] {
        return white_css.to_string();
    }
    format!("rgb({},{},{})", c(tint[0]), c(tint[1]), c(tint[2]))
}
