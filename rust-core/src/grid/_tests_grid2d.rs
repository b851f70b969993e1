#[cfg(test)]
mod _tests_grid2d {
    use super::super::grid2d::Grid;

    fn sample() -> Grid {
        // 2 rows x 3 columns
        Grid::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap()
    }

    #[test]
    fn test_dimensions_follow_rows_and_columns() {
        let grid = sample();
        assert_eq!(grid.ng(), 2, "NG counts rows");
        assert_eq!(grid.nb(), 3, "NB counts columns");
        assert_eq!(grid.len(), 6);
        assert!(!grid.is_empty());
        assert_eq!(grid.get(1, 2), Some(6));
        assert_eq!(grid.get(2, 0), None);
    }

    #[test]
    fn test_to_rows_preserves_order() {
        let rows = vec![vec![1, 2, 3], vec![4, 5, 6]];
        let grid = Grid::from_rows(rows.clone()).unwrap();
        assert_eq!(grid.to_rows(), rows);
        assert_eq!(grid.row(1).collect::<Vec<_>>(), vec![4, 5, 6]);
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let err = Grid::from_rows(vec![vec![1, 2], vec![1]]).unwrap_err();
        assert!(err.is_format());
        assert!(err.to_string().contains("row 2"));
    }

    #[test]
    fn test_empty_input_rejected() {
        assert!(Grid::from_rows(vec![]).unwrap_err().is_format());
        assert!(Grid::from_rows(vec![vec![]]).unwrap_err().is_format());
        assert!(Grid::filled(0, 3, 1).unwrap_err().is_invalid_parameter());
    }

    #[test]
    fn test_counts() {
        let grid = Grid::from_rows(vec![vec![1, 2, 1], vec![2, 1, 1]]).unwrap();
        assert_eq!(grid.count(1), 4);
        assert_eq!(grid.count(2), 2);
        assert_eq!(grid.count(9), 0);
        assert_eq!(grid.column_count(2, 1), 2);
        assert_eq!(grid.column_count(0, 2), 1);
        assert_eq!(grid.column_count(7, 1), 0, "Out-of-range column counts nothing");
        assert_eq!(grid.distinct_ids().into_iter().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_flips() {
        let grid = sample();
        assert_eq!(grid.flip_vertical().to_rows(), vec![vec![4, 5, 6], vec![1, 2, 3]]);
        assert_eq!(grid.flip_horizontal().to_rows(), vec![vec![3, 2, 1], vec![6, 5, 4]]);
        assert_eq!(grid.flip_vertical().flip_vertical(), grid);
    }

    #[test]
    fn test_stacking() {
        let grid = sample();
        let wide = grid.hstack(&grid.flip_horizontal()).unwrap();
        assert_eq!(wide.nb(), 6);
        assert_eq!(wide.row(0).collect::<Vec<_>>(), vec![1, 2, 3, 3, 2, 1]);

        let tall = grid.vstack(&grid.flip_vertical()).unwrap();
        assert_eq!(tall.ng(), 4);
        assert_eq!(tall.to_rows()[3], vec![1, 2, 3]);
    }

    #[test]
    fn test_stacking_mismatch_rejected() {
        let grid = sample();
        let single = Grid::filled(1, 3, 0).unwrap();
        assert!(grid.hstack(&single).is_err());
        let narrow = Grid::filled(2, 1, 0).unwrap();
        assert!(grid.vstack(&narrow).is_err());
        assert!(grid.hstack(&narrow).is_ok());
    }
}
