use ratatui::style::Color;

/// Default board width in cells.
pub const DEFAULT_GRID_WIDTH: u16 = 32;

/// Default board height in cells.
pub const DEFAULT_GRID_HEIGHT: u16 = 24;

/// Default interval between movement ticks in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 120;

/// Sleep between loop iterations, keeping input latency below one tick.
pub const FRAME_POLL_INTERVAL_MS: u64 = 16;

/// Snake head glyphs by travel direction.
pub const GLYPH_SNAKE_HEAD_UP: &str = "▲";
pub const GLYPH_SNAKE_HEAD_DOWN: &str = "▼";
pub const GLYPH_SNAKE_HEAD_LEFT: &str = "◀";
pub const GLYPH_SNAKE_HEAD_RIGHT: &str = "▶";

/// Body segment glyph.
pub const GLYPH_SNAKE_BODY: &str = "█";

/// Tail segment glyph.
pub const GLYPH_SNAKE_TAIL: &str = "▒";

/// Food glyph.
pub const GLYPH_FOOD: &str = "●";

/// Snake head color.
pub const COLOR_SNAKE_HEAD: Color = Color::White;

/// Snake body color.
pub const COLOR_SNAKE_BODY: Color = Color::Green;

/// Tail segment color.
pub const COLOR_SNAKE_TAIL: Color = Color::DarkGray;

/// Food color.
pub const COLOR_FOOD: Color = Color::Red;

/// Board border color.
pub const COLOR_BORDER: Color = Color::Cyan;
