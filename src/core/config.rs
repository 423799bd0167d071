/// Demo-scene constants.

// --- Palette (hex) ---
pub const DEMO_BG: u32 = 0x0D1117;
pub const DEMO_CARD: u32 = 0x161B22;
pub const DEMO_BORDER: u32 = 0x30363D;
pub const DEMO_ACCENT: u32 = 0x4A90D9;
pub const DEMO_NODE: u32 = 0x2ECC71;
pub const DEMO_HIGHLIGHT: u32 = 0xE6EDF3;

// --- Output ---
pub const DEFAULT_WIDTH: i32 = 640;
pub const DEFAULT_HEIGHT: i32 = 400;
pub const DEFAULT_OUT: &str = "easel-demo.png";

// --- Shapes ---
pub const CARD_CORNER_RADIUS: f64 = 8.0;
pub const CARD_BORDER_WIDTH: f64 = 2.0;
