use crate::{Cell, Config, GameRng, Snake};
use rand::seq::IteratorRandom;
use rand::Rng;

/// Pick a random cell not covered by the snake.
///
/// Draws uniformly over the whole board and rejects occupied cells. After
/// `config.food_max_attempts` misses it chooses directly among the free
/// cells, so the result stays uniform. Returns `None` only when the snake
/// covers the entire board.
pub fn place_food(occupied: &Snake, config: &Config, rng: &mut GameRng) -> Option<Cell> {
    let n = config.tile_count;
    if n <= 0 {
        return None;
    }

    for _ in 0..config.food_max_attempts {
        let cell = Cell::new(rng.0.gen_range(0..n), rng.0.gen_range(0..n));
        if !occupied.contains(cell) {
            return Some(cell);
        }
    }

    (0..n)
        .flat_map(|y| (0..n).map(move |x| Cell::new(x, y)))
        .filter(|cell| !occupied.contains(*cell))
        .choose(&mut rng.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(tile_count: i32) -> Config {
        Config {
            tile_count,
            start_cell: Cell::ZERO,
            ..Config::new()
        }
    }

    #[test]
    fn test_food_never_on_snake() {
        let config = Config::new();
        let mut rng = GameRng::new(1);
        let snake = Snake::from_cells((0..20).map(|x| Cell::new(x, 10))).unwrap();

        for _ in 0..500 {
            let food = place_food(&snake, &config, &mut rng).unwrap();
            assert!(!snake.contains(food), "Food landed on the snake at {food}");
            assert!(config.in_bounds(food));
        }
    }

    #[test]
    fn test_single_free_cell_is_found() {
        let config = Config {
            food_max_attempts: 1,
            ..board(3)
        };
        let mut rng = GameRng::new(99);
        let free = Cell::new(2, 1);
        let cells = (0..3)
            .flat_map(|y| (0..3).map(move |x| Cell::new(x, y)))
            .filter(|c| *c != free);
        let snake = Snake::from_cells(cells).unwrap();

        assert_eq!(place_food(&snake, &config, &mut rng), Some(free));
    }

    #[test]
    fn test_full_board_yields_none() {
        let config = board(2);
        let mut rng = GameRng::new(5);
        let snake = Snake::from_cells([
            Cell::new(0, 0),
            Cell::new(1, 0),
            Cell::new(1, 1),
            Cell::new(0, 1),
        ])
        .unwrap();

        assert_eq!(place_food(&snake, &config, &mut rng), None);
    }
}
