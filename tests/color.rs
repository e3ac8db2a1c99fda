mod tests {
    use lumenfx::color::{BLUE, CYAN, GREEN, RED, WHITE};
    use lumenfx::{Color, hsv_to_rgb, interpolate};

    #[test]
    fn test_interpolate_endpoints() {
        assert_eq!(interpolate(RED, BLUE, 0.0), RED);
        assert_eq!(interpolate(RED, BLUE, 1.0), BLUE);
    }

    #[test]
    fn test_interpolate_midpoint() {
        assert_eq!(interpolate(RED, BLUE, 0.5), Color::new(128, 0, 128));
    }

    #[test]
    fn test_interpolate_saturates_outside_range() {
        // Out-of-range factors extrapolate but channels saturate.
        assert_eq!(interpolate(RED, BLUE, 2.0), BLUE);
        assert_eq!(interpolate(RED, BLUE, -1.0), RED);
    }

    #[test]
    fn test_interpolate_result_is_opaque() {
        let translucent = RED.with_alpha(0.5);
        assert_eq!(interpolate(translucent, BLUE, 0.5).alpha, None);
    }

    #[test]
    fn test_scaled() {
        assert_eq!(WHITE.scaled(0.5), Color::new(128, 128, 128));
        assert_eq!(Color::new(150, 0, 0).scaled(0.2), Color::new(30, 0, 0));
        assert_eq!(WHITE.scaled(0.0), Color::new(0, 0, 0));
    }

    #[test]
    fn test_scaled_saturates_above_full() {
        assert_eq!(Color::new(200, 10, 0).scaled(2.0), Color::new(255, 20, 0));
    }

    #[test]
    fn test_scaled_keeps_alpha() {
        let color = Color::new(100, 100, 100).with_alpha(0.3).scaled(0.5);
        assert_eq!(color.alpha, Some(0.3));
    }

    #[test]
    fn test_hsv_primary_colors() {
        assert_eq!(hsv_to_rgb(0.0, 1.0, 1.0), RED);
        assert_eq!(hsv_to_rgb(1.0 / 3.0, 1.0, 1.0), GREEN);
        assert_eq!(hsv_to_rgb(2.0 / 3.0, 1.0, 1.0), BLUE);
        assert_eq!(hsv_to_rgb(0.5, 1.0, 1.0), CYAN);
    }

    #[test]
    fn test_hsv_wraps_hue() {
        assert_eq!(hsv_to_rgb(1.0, 1.0, 1.0), hsv_to_rgb(0.0, 1.0, 1.0));
        assert_eq!(hsv_to_rgb(-1.0 / 3.0, 1.0, 1.0), BLUE);
        assert_eq!(hsv_to_rgb(1.25, 1.0, 1.0), hsv_to_rgb(0.25, 1.0, 1.0));
    }

    #[test]
    fn test_hsv_zero_saturation_is_grey() {
        assert_eq!(hsv_to_rgb(0.7, 0.0, 1.0), WHITE);
        assert_eq!(hsv_to_rgb(0.2, 0.0, 0.5), Color::new(128, 128, 128));
    }
}
