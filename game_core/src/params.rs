/// Game tuning parameters for Snake
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Board
    pub const GRID_SIZE: u32 = 20; // pixels per cell
    pub const CANVAS_SIZE: u32 = 400; // pixels, square
    pub const TILE_COUNT: i32 = (Self::CANVAS_SIZE / Self::GRID_SIZE) as i32;

    // Snake
    pub const START_X: i32 = 10;
    pub const START_Y: i32 = 10;

    // Score
    pub const FOOD_SCORE: u32 = 10;

    // Timing
    pub const TICK_INTERVAL_MS: u32 = 100;

    // Food placement: random draws before falling back to the free-cell scan
    pub const FOOD_MAX_ATTEMPTS: u32 = 64;
}
