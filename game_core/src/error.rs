use thiserror::Error;

/// Board geometry that cannot be turned into a playable grid
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Grid size must be greater than zero")]
    ZeroGridSize,
    #[error("Canvas of {width}x{height} is not divisible into {grid_size}px cells")]
    NotDivisible {
        width: u32,
        height: u32,
        grid_size: u32,
    },
    #[error("Canvas of {width}x{height} is not square")]
    NotSquare { width: u32, height: u32 },
    #[error("A board of {tile_count} tiles cannot hold the start cell ({x}, {y})")]
    StartOutOfBounds { tile_count: i32, x: i32, y: i32 },
    #[error("A board of {tile_count} tiles leaves no room for food")]
    NoRoomForFood { tile_count: i32 },
}
