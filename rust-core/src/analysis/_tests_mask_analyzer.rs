#[cfg(test)]
mod _tests_mask_analyzer {
    use super::super::mask_analyzer::*;
    use crate::grid::Grid;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    fn grid_from_art(art: &[&str]) -> Grid {
        Grid::from_rows(
            art.iter()
                .map(|line| line.chars().map(|c| if c == '#' { 1 } else { 2 }).collect())
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_volume_fraction() {
        let grid = grid_from_art(&["#.", ".#"]);
        assert_relative_eq!(volume_fraction(&grid, 1), 0.5);
        assert_relative_eq!(volume_fraction(&grid, 2), 0.5);
        assert_relative_eq!(volume_fraction(&grid, 9), 0.0);
    }

    #[test]
    fn test_edge_fiber_excluded_from_radius() {
        // Interior 3x3 fiber plus a fiber touching row 0
        let grid = grid_from_art(&[
            "......##",
            "......##",
            "........",
            "..###...",
            "..###...",
            "..###...",
            "........",
            "........",
        ]);
        let props = analyze(&grid, 1, 2);

        assert_relative_eq!(props.volume_fraction, 13.0 / 64.0);
        assert_relative_eq!(props.radius.unwrap(), (9.0 / PI).sqrt(), epsilon = 1e-12);
        assert_eq!(props.nb, 8);
        assert_eq!(props.ng, 8);
        assert_eq!(props.fiber, 1);
        assert_eq!(props.matrix, 2);
    }

    #[test]
    fn test_mean_over_interior_fibers() {
        let grid = grid_from_art(&[
            "..........",
            ".##.......",
            ".##...#...",
            "..........",
        ]);
        let expected = ((4.0 / PI).sqrt() + (1.0 / PI).sqrt()) / 2.0;
        assert_relative_eq!(mean_interior_radius(&grid, 1).unwrap(), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_single_fiber_not_rounded() {
        // One interior component of area 5: radius stays sqrt(5 / pi)
        let grid = grid_from_art(&[
            ".....",
            "..#..",
            ".###.",
            "..#..",
            ".....",
        ]);
        assert_relative_eq!(analyze(&grid, 1, 2).radius.unwrap(), (5.0 / PI).sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_radius_undefined_without_interior_fiber() {
        let grid = grid_from_art(&[
            "#...#",
            ".....",
            "#...#",
        ]);
        let props = analyze(&grid, 1, 2);
        assert!(props.radius.is_none(), "Only edge fibers: radius must be undefined, not zero");
        assert_relative_eq!(props.volume_fraction, 4.0 / 15.0);

        let empty = grid_from_art(&["...", "..."]);
        let props = analyze(&empty, 1, 2);
        assert!(props.radius.is_none());
        assert_relative_eq!(props.volume_fraction, 0.0);
    }

    #[test]
    fn test_single_cell_grid() {
        let grid = Grid::filled(1, 1, 1).unwrap();
        let props = analyze(&grid, 1, 2);
        assert_relative_eq!(props.volume_fraction, 1.0);
        assert!(props.radius.is_none());
    }

    #[test]
    fn test_analyze_volume_fraction_skips_radius() {
        let grid = grid_from_art(&[".....", "..#..", "....."]);
        let props = analyze_volume_fraction(&grid, 1, 2);
        assert!(props.radius.is_none());
        assert_relative_eq!(props.volume_fraction, 1.0 / 15.0);
    }

    #[test]
    fn test_central_column_radius() {
        let grid = grid_from_art(&[
            ".....",
            "..#..",
            ".###.",
            "..#..",
            ".....",
        ]);
        assert_relative_eq!(central_column_radius(&grid, 1).unwrap(), 1.5);
        assert!(central_column_radius(&grid, 7).is_none());

        let props = synthesized_properties(&grid, 1, 2);
        assert_relative_eq!(props.radius.unwrap(), 1.5);
        assert_relative_eq!(props.volume_fraction, 5.0 / 25.0);
    }
}
