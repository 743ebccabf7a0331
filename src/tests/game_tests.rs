#[cfg(test)]
mod tests {
    use crate::game::*;

    #[test]
    fn test_board_dimensions() {
        assert_eq!(BOARD_WIDTH, 10);
        assert_eq!(BOARD_HEIGHT, 20);
    }

    #[test]
    fn test_spawn_point() {
        // Horizontal center, top row
        assert_eq!(SPAWN_COLUMN, 5);
        assert_eq!(SPAWN_ROW, 0);
    }

    #[test]
    fn test_scoring_and_timing() {
        assert_eq!(POINTS_PER_LINE, 100);
        assert_eq!(GRAVITY_INTERVAL_MS, 500);
    }

    #[test]
    fn test_wall_kick_order() {
        assert_eq!(
            WALL_KICK_OFFSETS,
            [(0, 0), (-1, 0), (-2, 0), (1, 0), (0, -1), (-1, -1), (1, -1)]
        );
    }
}
