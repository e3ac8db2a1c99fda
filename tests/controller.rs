mod tests {
    use lumenfx::color::{ORANGE, RED};
    use lumenfx::{
        Color, DeviceSink, Duration, EffectId, EffectRequest, Instant, LightController,
        SegmentMap, SinkError, SinkStatus, ZoneId,
    };

    #[derive(Debug, Clone, PartialEq)]
    enum Op {
        Zone(ZoneId, Color),
        AllZones(Color),
        ClearAll,
        Commit,
        Other,
    }

    struct FakeSink {
        ops: Vec<Op>,
        connected: bool,
        fail_with: Option<SinkError>,
    }

    impl FakeSink {
        fn new() -> Self {
            Self {
                ops: Vec::new(),
                connected: true,
                fail_with: None,
            }
        }

        fn record(&mut self, op: Op) -> Result<(), SinkError> {
            self.ops.push(op);
            match self.fail_with {
                Some(error) => Err(error),
                None => Ok(()),
            }
        }
    }

    impl DeviceSink for FakeSink {
        fn set_zone_color(&mut self, zone: ZoneId, color: Color) -> Result<(), SinkError> {
            self.record(Op::Zone(zone, color))
        }

        fn set_all_zones_color(&mut self, color: Color) -> Result<(), SinkError> {
            self.record(Op::AllZones(color))
        }

        fn clear_zone(&mut self, _zone: ZoneId) -> Result<(), SinkError> {
            self.record(Op::Other)
        }

        fn clear_all(&mut self) -> Result<(), SinkError> {
            self.record(Op::ClearAll)
        }

        fn set_group_color(&mut self, _color: Color) -> Result<(), SinkError> {
            self.record(Op::Other)
        }

        fn set_group_color_temperature(
            &mut self,
            _mireds: u16,
            _brightness: f32,
        ) -> Result<(), SinkError> {
            self.record(Op::Other)
        }

        fn set_group_xy(&mut self, _x: f32, _y: f32, _brightness: f32) -> Result<(), SinkError> {
            self.record(Op::Other)
        }

        fn set_zone_color_temperature(
            &mut self,
            _zone: ZoneId,
            _mireds: u16,
            _brightness: f32,
        ) -> Result<(), SinkError> {
            self.record(Op::Other)
        }

        fn set_zone_xy(
            &mut self,
            _zone: ZoneId,
            _x: f32,
            _y: f32,
            _brightness: f32,
        ) -> Result<(), SinkError> {
            self.record(Op::Other)
        }

        fn set_zone_brightness(&mut self, _zone: ZoneId, _brightness: f32) -> Result<(), SinkError> {
            self.record(Op::Other)
        }

        fn commit(&mut self) -> Result<(), SinkError> {
            self.record(Op::Commit)
        }

        fn status(&self) -> SinkStatus {
            SinkStatus {
                connected: self.connected,
                streaming: self.connected,
            }
        }
    }

    fn controller() -> LightController<FakeSink> {
        LightController::new(FakeSink::new(), SegmentMap::default())
    }

    fn at(ms: u64) -> Instant {
        Instant::from_millis(ms)
    }

    #[test]
    fn test_initialize_blanks_the_lights() {
        let mut controller = controller();
        controller.initialize().unwrap();
        assert_eq!(controller.sink().ops, vec![Op::ClearAll, Op::Commit]);
    }

    #[test]
    fn test_initialize_fails_when_disconnected() {
        let mut controller = controller();
        controller.sink_mut().connected = false;
        assert_eq!(controller.initialize(), Err(SinkError::Disconnected));
        assert!(controller.sink().ops.is_empty());
    }

    #[test]
    fn test_solid_color_does_not_stop_a_running_effect() {
        let mut controller = controller();
        controller
            .start_effect(EffectRequest::named(EffectId::Breathing), at(0))
            .unwrap();
        assert!(controller.is_running());

        controller.set_solid_color(ORANGE).unwrap();

        assert!(controller.is_running());
        assert!(controller.sink().ops.contains(&Op::AllZones(ORANGE)));
    }

    #[test]
    fn test_clear_all_lights_stops_the_effect() {
        let mut controller = controller();
        controller
            .start_effect(EffectRequest::named(EffectId::Breathing), at(0))
            .unwrap();

        controller.clear_all_lights().unwrap();

        assert!(!controller.is_running());
        let ops = &controller.sink().ops;
        assert_eq!(&ops[ops.len() - 2..], &[Op::ClearAll, Op::Commit]);
    }

    #[test]
    fn test_tick_paces_at_the_frame_duration() {
        let mut controller = controller();
        controller
            .start_effect(EffectRequest::named(EffectId::RainbowWave), at(0))
            .unwrap();

        let result = controller.tick(at(0));
        assert_eq!(result.sleep_duration, Duration::from_millis(16));
        assert!(result.next_deadline > at(0));
    }

    #[test]
    fn test_tick_stops_the_effect_on_disconnect() {
        let mut controller = controller();
        controller
            .start_effect(EffectRequest::named(EffectId::RainbowWave), at(0))
            .unwrap();
        assert!(controller.is_running());

        controller.sink_mut().fail_with = Some(SinkError::Disconnected);
        controller.tick(at(16));
        assert!(!controller.is_running());
    }

    #[test]
    fn test_tick_survives_a_transport_hiccup() {
        let mut controller = controller();
        controller
            .start_effect(EffectRequest::named(EffectId::RainbowWave), at(0))
            .unwrap();

        controller.sink_mut().fail_with = Some(SinkError::Transport);
        controller.tick(at(16));
        assert!(controller.is_running());

        controller.sink_mut().fail_with = None;
        controller.tick(at(32));
        assert!(controller.is_running());
    }

    #[test]
    fn test_percentage_bar_paints_all_segments() {
        let mut controller = controller();
        controller.percentage_bar(0.0).unwrap();

        let ops = &controller.sink().ops;
        let zones: Vec<ZoneId> = ops
            .iter()
            .filter_map(|op| match op {
                Op::Zone(zone, color) => {
                    assert_eq!(*color, RED);
                    Some(*zone)
                }
                _ => None,
            })
            .collect();
        assert_eq!(zones, vec![0, 1, 2, 3]);
        assert_eq!(ops.last(), Some(&Op::Commit));
    }
}
