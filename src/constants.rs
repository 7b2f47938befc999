// Page wiring and presentation constants for the web front-end.
// Kept free of `web_sys` so host tests can include this file directly.

// Host element for the spark canvas; `body` is used when it is missing
pub const LAYER_SELECTOR: &str = ".fire-sparks-layer";
pub const CANVAS_ID: &str = "fire-sparks-canvas";
pub const CANVAS_CSS: &str = "position:absolute;inset:0;width:100%;height:100%;pointer-events:none;opacity:0";

// Spark sprite
pub const SPARK_TEXTURE_URL: &str = "/assets/images/common/spark.png";
pub const FALLBACK_FILL: &str = "#ffffff";

// Registry names
pub const SPARKS_ANIMATION: &str = "fire-sparks";
pub const FADE_IN_ANIMATION: &str = "fire-sparks-fade-in";

// Viewport resize handling
pub const RESIZE_DEBOUNCE_MS: f64 = 200.0;

// Fade-in of the whole layer once the field is running
pub const LAYER_FADE_IN_SEC: f32 = 1.2;
pub const LAYER_FADE_IN_DELAY_SEC: f32 = 0.15;

// Frame clock guard: long stalls (tab switch, debugger) are clamped
pub const MAX_FRAME_DT_SEC: f32 = 0.1;

// Spark sprite drawn at `radius * SPRITE_EXTENT` per side
pub const SPRITE_EXTENT: f64 = 2.0;
