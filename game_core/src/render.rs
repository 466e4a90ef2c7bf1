use crate::{Cell, Config, GameState, Rgb, Surface};

/// Paint the board: background, then snake, then food on top
pub fn render(state: &GameState, config: &Config, surface: &mut dyn Surface) {
    let palette = &config.palette;
    surface.clear(palette.background);

    for cell in state.snake.cells() {
        fill_cell(surface, config, cell, palette.snake);
    }

    fill_cell(surface, config, state.food, palette.food);
}

fn fill_cell(surface: &mut dyn Surface, config: &Config, cell: Cell, color: Rgb) {
    // Cells are validated in-bounds by the movement rule
    let x = cell.x.max(0) as u32 * config.grid_size;
    let y = cell.y.max(0) as u32 * config.grid_size;
    let side = config.cell_paint_size();
    surface.fill_rect(x, y, side, side, color);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameRng, Snake};

    #[derive(Debug, PartialEq)]
    enum Op {
        Clear(Rgb),
        Rect(u32, u32, u32, u32, Rgb),
    }

    #[derive(Default)]
    struct RecordingSurface {
        ops: Vec<Op>,
    }

    impl Surface for RecordingSurface {
        fn width(&self) -> u32 {
            400
        }
        fn height(&self) -> u32 {
            400
        }
        fn clear(&mut self, color: Rgb) {
            self.ops.push(Op::Clear(color));
        }
        fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: Rgb) {
            self.ops.push(Op::Rect(x, y, w, h, color));
        }
    }

    fn state_with(cells: &[(i32, i32)], food: (i32, i32)) -> GameState {
        let config = Config::new();
        let mut state = GameState::new(&config, &mut GameRng::default()).unwrap();
        state.snake = Snake::from_cells(cells.iter().map(|&(x, y)| Cell::new(x, y))).unwrap();
        state.food = Cell::new(food.0, food.1);
        state
    }

    #[test]
    fn test_paint_order_and_geometry() {
        let config = Config::new();
        let state = state_with(&[(10, 10), (9, 10)], (3, 4));
        let mut surface = RecordingSurface::default();

        render(&state, &config, &mut surface);

        assert_eq!(
            surface.ops,
            vec![
                Op::Clear(Rgb::BLACK),
                Op::Rect(200, 200, 18, 18, Rgb::LIME),
                Op::Rect(180, 200, 18, 18, Rgb::LIME),
                Op::Rect(60, 80, 18, 18, Rgb::RED),
            ]
        );
    }

    #[test]
    fn test_render_is_idempotent() {
        let config = Config::new();
        let state = state_with(&[(0, 0)], (19, 19));
        let mut first = RecordingSurface::default();
        let mut second = RecordingSurface::default();

        render(&state, &config, &mut first);
        render(&state, &config, &mut second);

        assert_eq!(first.ops, second.ops);
        assert_eq!(first.ops[2], Op::Rect(380, 380, 18, 18, Rgb::RED));
    }
}
