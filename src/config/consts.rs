// src/config/consts.rs

// Document
pub const DEFAULT_TABLE_ID: &str = "default";
pub const DEFAULT_OUTPUT_ID: &str = "output";

// Row layout: [unused, name, code, R, G, B]
pub const NAME_CELL: usize = 1;
pub const CODE_CELL: usize = 2;
pub const RGB_CELLS: [usize; 3] = [3, 4, 5];
pub const CELLS_PER_ROW: usize = 6;

// Local store
pub const LOG_FILE: &str = ".colors/debug.log";
pub const GUI_CONFIG_FILE: &str = ".colors/gui.cfg";

// Export
pub const DEFAULT_OUT_FILE: &str = "colors.json";
pub const DEFAULT_SWATCH_FILE: &str = "colors.png";

// Swatch geometry
pub const SWATCH_BLOCK: u32 = 40;
pub const SWATCH_WIDTH: u32 = 1000;
pub const SWATCH_DIVIDER: u32 = 3;
