mod tests {
    use lumenfx::{Duration, EffectId, EffectRequest, StartError};

    #[test]
    fn test_effect_id_parse_countdown_pulse() {
        assert_eq!(
            EffectId::parse_from_str("countdown_pulse"),
            Some(EffectId::CountdownPulse)
        );
    }

    #[test]
    fn test_effect_id_parse_ice_shatter() {
        assert_eq!(
            EffectId::parse_from_str("ice_shatter"),
            Some(EffectId::IceShatter)
        );
    }

    #[test]
    fn test_effect_id_as_str_xy_rainbow() {
        assert_eq!(EffectId::XyRainbow.as_str(), "xy_rainbow");
    }

    #[test]
    fn test_effect_id_parse_unknown() {
        assert_eq!(EffectId::parse_from_str("disco"), None);
        assert_eq!(EffectId::parse_from_str(""), None);
    }

    #[test]
    fn test_named_request_carries_its_id() {
        for id in [
            EffectId::GradientWave,
            EffectId::Chase,
            EffectId::CountdownPulse,
            EffectId::FlashSequence,
            EffectId::RandomSequence,
            EffectId::Sunrise,
            EffectId::CheckpointSequence,
        ] {
            assert_eq!(EffectRequest::named(id).id(), id);
        }
    }

    #[test]
    fn test_named_defaults_build() {
        for id in [
            EffectId::Ripple,
            EffectId::Bounce,
            EffectId::Strobe,
            EffectId::SegmentedCountdown,
            EffectId::AlphaLayers,
        ] {
            assert!(EffectRequest::named(id).build().is_ok());
        }
    }

    #[test]
    fn test_build_rejects_zero_duration() {
        let request = EffectRequest::Strobe {
            color: lumenfx::color::WHITE,
            duration: Duration::from_millis(0),
            period: Duration::from_millis(50),
        };
        assert_eq!(request.build().err(), Some(StartError::ZeroDuration));
    }

    #[test]
    fn test_build_rejects_zero_count() {
        let request = EffectRequest::police_flash(0, Duration::from_millis(150));
        assert_eq!(request.build().err(), Some(StartError::ZeroCount));
    }

    #[test]
    fn test_build_rejects_empty_sequence() {
        let request = EffectRequest::FlashSequence {
            colors: lumenfx::ColorSequence::new(),
            flash_count: 3,
            flash_speed: Duration::from_millis(150),
        };
        assert_eq!(request.build().err(), Some(StartError::EmptySequence));
    }

    #[test]
    fn test_build_rejects_non_positive_speed() {
        let request = EffectRequest::Chase {
            color: lumenfx::color::WHITE,
            speed: 0.0,
            run_time: None,
        };
        assert_eq!(request.build().err(), Some(StartError::NonPositiveSpeed));
    }
}
