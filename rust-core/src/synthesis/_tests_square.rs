#[cfg(test)]
mod _tests_square {
    use super::super::square::*;
    use crate::analysis::analyze;
    use crate::config::SQUARE_PACKING_LIMIT;
    use crate::materials::MaterialPair;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_4, PI};

    fn ids() -> MaterialPair {
        MaterialPair::new(1, 2)
    }

    // ==================== Volume fraction & subcells ====================

    #[test]
    fn test_vf_nb_reference_cell() {
        let micro = square_pack_vf_nb(0.5, 10, ids()).unwrap();
        assert_eq!(micro.grid.nb(), 10);
        assert_eq!(micro.grid.ng(), 10);
        assert!((micro.properties.volume_fraction - 0.5).abs() <= 0.05 * 0.5);
        assert_relative_eq!(micro.properties.volume_fraction, 0.52);

        let solved = (100.0 * 0.5 / PI).sqrt();
        let central = micro.properties.radius.unwrap();
        assert_relative_eq!(central, 4.0);
        assert!((central - solved).abs() <= 1.0);
    }

    #[test]
    fn test_vf_nb_odd_count_forced_even_and_square() {
        let micro = square_pack_vf_nb(0.5, 11, ids()).unwrap();
        assert_eq!(micro.grid.nb(), 10);
        assert_eq!(micro.grid.ng(), 10);
    }

    #[test]
    fn test_vf_nb_monotonic_in_volume_fraction() {
        let mut previous = 0.0;
        for step in 1..=15 {
            let vf = 0.05 * step as f64;
            let measured = square_pack_vf_nb(vf, 30, ids()).unwrap().properties.volume_fraction;
            assert!(
                measured >= previous,
                "VF {} measured {} after {}",
                vf,
                measured,
                previous
            );
            previous = measured;
        }
    }

    #[test]
    fn test_vf_nb_discretization_tolerance() {
        for &vf in &[0.1, 0.3, 0.5, 0.7] {
            let measured = square_pack_vf_nb(vf, 40, ids()).unwrap().properties.volume_fraction;
            assert!((measured - vf).abs() < 0.03, "VF {} measured {}", vf, measured);
        }
    }

    #[test]
    fn test_vf_nb_single_interior_fiber() {
        let micro = square_pack_vf_nb(0.5, 40, ids()).unwrap();
        let props = analyze(&micro.grid, 1, 2);
        let solved = (1600.0 * 0.5 / PI).sqrt();
        assert!((props.radius.unwrap() - solved).abs() < 0.5);
        assert_relative_eq!(props.volume_fraction, micro.properties.volume_fraction);
    }

    #[test]
    fn test_vf_nb_symmetry() {
        let grid = square_pack_vf_nb(0.4, 24, ids()).unwrap().grid;
        assert_eq!(grid.flip_vertical(), grid);
        assert_eq!(grid.flip_horizontal(), grid);
    }

    #[test]
    fn test_vf_nb_rejections() {
        assert!(square_pack_vf_nb(FRAC_PI_4, 20, ids()).unwrap_err().is_invalid_parameter());
        assert!(square_pack_vf_nb(SQUARE_PACKING_LIMIT + 0.01, 20, ids()).unwrap_err().is_invalid_parameter());
        assert!(square_pack_vf_nb(0.8, 20, ids()).unwrap_err().is_invalid_parameter());
        assert!(square_pack_vf_nb(0.0, 20, ids()).unwrap_err().is_invalid_parameter());
        assert!(square_pack_vf_nb(0.5, 0, ids()).unwrap_err().is_invalid_parameter());
        assert!(square_pack_vf_nb(0.5, 1, ids()).unwrap_err().is_invalid_parameter());
        assert!(square_pack_vf_nb(0.78, 20, ids()).is_ok());
    }

    // ==================== Volume fraction & radius ====================

    #[test]
    fn test_vf_radius_solves_subcell_count() {
        // side = sqrt(pi * 36 / 0.3) = 19.42
        let micro = square_pack_vf_radius(0.3, 6.0, ids()).unwrap();
        assert_eq!(micro.grid.nb(), 19);
        assert_eq!(micro.grid.ng(), 19);
        assert!((micro.properties.volume_fraction - 0.3).abs() < 0.02);
        assert!((micro.properties.radius.unwrap() - 6.0).abs() <= 1.0);
    }

    #[test]
    fn test_vf_radius_reference_cell() {
        let micro = square_pack_vf_radius(0.5, 4.0, ids()).unwrap();
        assert_eq!(micro.grid.nb(), 10);
        assert!((micro.properties.volume_fraction - 0.5).abs() < 0.05);
    }

    #[test]
    fn test_vf_radius_rejections() {
        assert!(square_pack_vf_radius(0.79, 4.0, ids()).unwrap_err().is_invalid_parameter());
        assert!(square_pack_vf_radius(0.5, 0.0, ids()).unwrap_err().is_invalid_parameter());
        assert!(square_pack_vf_radius(0.5, 0.1, ids()).unwrap_err().is_invalid_parameter());
    }

    // ==================== Subcells & radius ====================

    #[test]
    fn test_nb_radius() {
        let micro = square_pack_nb_radius(12, 4.0, ids()).unwrap();
        assert_eq!(micro.grid.nb(), 12);
        assert_eq!(micro.grid.ng(), 12);
        assert_relative_eq!(micro.properties.radius.unwrap(), 4.0);
    }

    #[test]
    fn test_nb_radius_widens_narrow_cells() {
        // 6 <= 8 -> floor(1.05 * 8) = 8
        let micro = square_pack_nb_radius(6, 4.0, ids()).unwrap();
        assert_eq!(micro.grid.nb(), 8);
        assert_eq!(micro.grid.ng(), 8);
    }

    #[test]
    fn test_nb_radius_rejections() {
        assert!(square_pack_nb_radius(0, 4.0, ids()).unwrap_err().is_invalid_parameter());
        assert!(square_pack_nb_radius(12, -4.0, ids()).unwrap_err().is_invalid_parameter());
        assert!(square_pack_nb_radius(12, 4.0, MaterialPair::new(1, 1)).unwrap_err().is_invalid_parameter());
    }

    #[test]
    fn test_oversized_cells_rejected() {
        use crate::config::MAX_SUBCELLS;

        assert!(square_pack_nb_radius(10, 1e9, ids()).unwrap_err().is_invalid_parameter());
        assert!(square_pack_vf_radius(1e-9, 5.0, ids()).unwrap_err().is_invalid_parameter());
        assert!(square_pack_vf_radius(0.5, f64::MAX, ids()).unwrap_err().is_invalid_parameter());
        assert!(square_pack_vf_nb(0.5, MAX_SUBCELLS + 2, ids()).unwrap_err().is_invalid_parameter());
    }
}
