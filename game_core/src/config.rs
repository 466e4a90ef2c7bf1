use crate::error::ConfigError;
use crate::params::Params;
use glam::IVec2;

/// An opaque RGB colour handed to the drawing surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const LIME: Rgb = Rgb(0, 255, 0);
    pub const RED: Rgb = Rgb(255, 0, 0);

    /// CSS hex notation, e.g. `#00ff00`
    pub fn css(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Colours used by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb,
    pub snake: Rgb,
    pub food: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgb::BLACK,
            snake: Rgb::LIME,
            food: Rgb::RED,
        }
    }
}

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub grid_size: u32,
    pub tile_count: i32,
    pub start_cell: IVec2,
    pub food_score: u32,
    pub tick_interval_ms: u32,
    pub food_max_attempts: u32,
    pub palette: Palette,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grid_size: Params::GRID_SIZE,
            tile_count: Params::TILE_COUNT,
            start_cell: IVec2::new(Params::START_X, Params::START_Y),
            food_score: Params::FOOD_SCORE,
            tick_interval_ms: Params::TICK_INTERVAL_MS,
            food_max_attempts: Params::FOOD_MAX_ATTEMPTS,
            palette: Palette::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive the board from a canvas size, keeping every other default
    pub fn from_canvas(width: u32, height: u32) -> Result<Self, ConfigError> {
        Self::with_grid(width, height, Params::GRID_SIZE)
    }

    pub fn with_grid(width: u32, height: u32, grid_size: u32) -> Result<Self, ConfigError> {
        if grid_size == 0 {
            return Err(ConfigError::ZeroGridSize);
        }
        if width % grid_size != 0 || height % grid_size != 0 {
            return Err(ConfigError::NotDivisible {
                width,
                height,
                grid_size,
            });
        }
        if width != height {
            return Err(ConfigError::NotSquare { width, height });
        }

        let config = Self {
            grid_size,
            tile_count: (width / grid_size) as i32,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the board can hold the starting snake and one food cell
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size == 0 {
            return Err(ConfigError::ZeroGridSize);
        }
        if !self.in_bounds(self.start_cell) {
            return Err(ConfigError::StartOutOfBounds {
                tile_count: self.tile_count,
                x: self.start_cell.x,
                y: self.start_cell.y,
            });
        }
        if self.tile_count < 2 {
            return Err(ConfigError::NoRoomForFood {
                tile_count: self.tile_count,
            });
        }
        Ok(())
    }

    /// Check a cell lies within `[0, tile_count)` on both axes
    pub fn in_bounds(&self, cell: IVec2) -> bool {
        cell.x >= 0 && cell.x < self.tile_count && cell.y >= 0 && cell.y < self.tile_count
    }

    /// Side of the painted square, leaving a 2px gutter between cells
    pub fn cell_paint_size(&self) -> u32 {
        self.grid_size.saturating_sub(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_board() {
        let config = Config::new();
        assert_eq!(config.grid_size, 20);
        assert_eq!(config.tile_count, 20);
        assert_eq!(config.start_cell, IVec2::new(10, 10));
    }

    #[test]
    fn test_from_canvas_derives_tile_count() {
        let config = Config::from_canvas(600, 600).unwrap();
        assert_eq!(config.tile_count, 30);
        assert_eq!(config.tick_interval_ms, 100);
    }

    #[test]
    fn test_from_canvas_rejects_bad_geometry() {
        assert_eq!(
            Config::from_canvas(410, 410).unwrap_err(),
            ConfigError::NotDivisible {
                width: 410,
                height: 410,
                grid_size: 20
            }
        );
        assert_eq!(
            Config::from_canvas(400, 200).unwrap_err(),
            ConfigError::NotSquare {
                width: 400,
                height: 200
            }
        );
        assert_eq!(
            Config::with_grid(400, 400, 0).unwrap_err(),
            ConfigError::ZeroGridSize
        );
        assert!(matches!(
            Config::from_canvas(200, 200),
            Err(ConfigError::StartOutOfBounds { tile_count: 10, .. })
        ));
    }

    #[test]
    fn test_validate_hand_built_config() {
        assert_eq!(Config::new().validate(), Ok(()));

        let single_tile = Config {
            tile_count: 1,
            start_cell: IVec2::ZERO,
            ..Config::default()
        };
        assert_eq!(
            single_tile.validate(),
            Err(ConfigError::NoRoomForFood { tile_count: 1 })
        );

        let zero_grid = Config {
            grid_size: 0,
            ..Config::default()
        };
        assert_eq!(zero_grid.validate(), Err(ConfigError::ZeroGridSize));
    }

    #[test]
    fn test_in_bounds() {
        let config = Config::new();
        assert!(config.in_bounds(IVec2::new(0, 0)));
        assert!(config.in_bounds(IVec2::new(19, 19)));
        assert!(!config.in_bounds(IVec2::new(20, 5)));
        assert!(!config.in_bounds(IVec2::new(5, -1)));
    }

    #[test]
    fn test_rgb_css() {
        assert_eq!(Rgb::LIME.css(), "#00ff00");
        assert_eq!(Rgb(255, 16, 1).css(), "#ff1001");
    }
}
