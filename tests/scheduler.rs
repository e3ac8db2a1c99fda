mod tests {
    use lumenfx::color::{BRIGHT_GREEN, DARK_RED, WHITE};
    use lumenfx::{
        Color, DeviceSink, Duration, EffectRequest, EffectScheduler, Instant, SegmentMap,
        SinkError, SinkStatus, ZoneId,
    };

    #[derive(Debug, Clone, PartialEq)]
    enum Op {
        Zone(ZoneId, Color),
        AllZones(Color),
        ClearZone(ZoneId),
        ClearAll,
        Group(Color),
        GroupCt(u16, f32),
        GroupXy(f32, f32, f32),
        ZoneCt(ZoneId, u16, f32),
        ZoneXy(ZoneId, f32, f32, f32),
        ZoneBrightness(ZoneId, f32),
        Commit,
    }

    struct RecordingSink {
        ops: Vec<Op>,
        fail_with: Option<SinkError>,
    }

    impl RecordingSink {
        fn new() -> Self {
            Self {
                ops: Vec::new(),
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

    impl DeviceSink for RecordingSink {
        fn set_zone_color(&mut self, zone: ZoneId, color: Color) -> Result<(), SinkError> {
            self.record(Op::Zone(zone, color))
        }

        fn set_all_zones_color(&mut self, color: Color) -> Result<(), SinkError> {
            self.record(Op::AllZones(color))
        }

        fn clear_zone(&mut self, zone: ZoneId) -> Result<(), SinkError> {
            self.record(Op::ClearZone(zone))
        }

        fn clear_all(&mut self) -> Result<(), SinkError> {
            self.record(Op::ClearAll)
        }

        fn set_group_color(&mut self, color: Color) -> Result<(), SinkError> {
            self.record(Op::Group(color))
        }

        fn set_group_color_temperature(
            &mut self,
            mireds: u16,
            brightness: f32,
        ) -> Result<(), SinkError> {
            self.record(Op::GroupCt(mireds, brightness))
        }

        fn set_group_xy(&mut self, x: f32, y: f32, brightness: f32) -> Result<(), SinkError> {
            self.record(Op::GroupXy(x, y, brightness))
        }

        fn set_zone_color_temperature(
            &mut self,
            zone: ZoneId,
            mireds: u16,
            brightness: f32,
        ) -> Result<(), SinkError> {
            self.record(Op::ZoneCt(zone, mireds, brightness))
        }

        fn set_zone_xy(
            &mut self,
            zone: ZoneId,
            x: f32,
            y: f32,
            brightness: f32,
        ) -> Result<(), SinkError> {
            self.record(Op::ZoneXy(zone, x, y, brightness))
        }

        fn set_zone_brightness(&mut self, zone: ZoneId, brightness: f32) -> Result<(), SinkError> {
            self.record(Op::ZoneBrightness(zone, brightness))
        }

        fn commit(&mut self) -> Result<(), SinkError> {
            self.record(Op::Commit)
        }

        fn status(&self) -> SinkStatus {
            SinkStatus {
                connected: true,
                streaming: true,
            }
        }
    }

    fn scheduler() -> EffectScheduler {
        EffectScheduler::new(SegmentMap::new(&[10, 11, 12, 13]).unwrap())
    }

    fn at(ms: u64) -> Instant {
        Instant::from_millis(ms)
    }

    fn countdown(total_ms: u64) -> EffectRequest {
        EffectRequest::CountdownPulse {
            total: Duration::from_millis(total_ms),
            start_color: DARK_RED,
            end_color: BRIGHT_GREEN,
        }
    }

    #[test]
    fn test_start_delivers_the_first_frame_synchronously() {
        let mut scheduler = scheduler();
        let mut sink = RecordingSink::new();

        scheduler
            .start(countdown(1000), at(0), &mut sink)
            .unwrap();

        assert!(scheduler.is_running());
        assert_eq!(sink.ops.last(), Some(&Op::Commit));
        assert!(sink.ops.contains(&Op::Zone(10, Color::new(30, 0, 0))));
    }

    #[test]
    fn test_writes_are_ascending_with_a_single_commit() {
        let mut scheduler = scheduler();
        let mut sink = RecordingSink::new();

        scheduler
            .start(EffectRequest::named(lumenfx::EffectId::GradientWave), at(0), &mut sink)
            .unwrap();

        let zones: Vec<ZoneId> = sink
            .ops
            .iter()
            .filter_map(|op| match op {
                Op::Zone(zone, _) => Some(*zone),
                _ => None,
            })
            .collect();
        assert_eq!(zones, vec![10, 11, 12, 13]);

        let commits = sink.ops.iter().filter(|op| **op == Op::Commit).count();
        assert_eq!(commits, 1);
    }

    #[test]
    fn test_invalid_request_leaves_current_effect_running() {
        let mut scheduler = scheduler();
        let mut sink = RecordingSink::new();

        scheduler
            .start(countdown(1000), at(0), &mut sink)
            .unwrap();
        let before = sink.ops.len();

        let bad = EffectRequest::Strobe {
            color: WHITE,
            duration: Duration::from_millis(0),
            period: Duration::from_millis(50),
        };
        assert!(scheduler.start(bad, at(16), &mut sink).is_err());

        assert!(scheduler.is_running());
        assert_eq!(scheduler.current_effect(), Some(lumenfx::EffectId::CountdownPulse));
        assert_eq!(sink.ops.len(), before);
    }

    #[test]
    fn test_bounded_effect_never_writes_after_finishing() {
        let mut scheduler = scheduler();
        let mut sink = RecordingSink::new();

        scheduler
            .start(
                EffectRequest::Flash {
                    color: WHITE,
                    duration: Duration::from_millis(160),
                },
                at(0),
                &mut sink,
            )
            .unwrap();

        scheduler.tick(at(200), &mut sink).unwrap();
        assert!(!scheduler.is_running());

        let settled = sink.ops.len();
        scheduler.tick(at(216), &mut sink).unwrap();
        scheduler.tick(at(232), &mut sink).unwrap();
        assert_eq!(sink.ops.len(), settled);
    }

    #[test]
    fn test_stop_is_idempotent_and_never_touches_the_device() {
        let mut scheduler = scheduler();
        let mut sink = RecordingSink::new();

        scheduler
            .start(countdown(1000), at(0), &mut sink)
            .unwrap();
        let before = sink.ops.len();

        scheduler.stop();
        scheduler.stop();

        assert!(!scheduler.is_running());
        assert_eq!(scheduler.current_effect(), None);
        assert_eq!(sink.ops.len(), before);
    }

    #[test]
    fn test_stale_tick_is_a_no_op() {
        let mut scheduler = scheduler();
        let mut sink = RecordingSink::new();

        scheduler
            .start(countdown(1000), at(1000), &mut sink)
            .unwrap();
        let before = sink.ops.len();

        // A tick dated before the effect started must be ignored.
        scheduler.tick(at(500), &mut sink).unwrap();
        assert_eq!(sink.ops.len(), before);
        assert!(scheduler.is_running());
    }

    #[test]
    fn test_finale_is_delivered_while_idle() {
        let mut scheduler = scheduler();
        let mut sink = RecordingSink::new();

        scheduler.start(countdown(100), at(0), &mut sink).unwrap();
        scheduler.tick(at(150), &mut sink).unwrap();
        assert!(!scheduler.is_running());
        assert!(sink.ops.contains(&Op::Zone(10, WHITE)));

        // Not due yet.
        let before = sink.ops.len();
        scheduler.tick(at(300), &mut sink).unwrap();
        assert_eq!(sink.ops.len(), before);

        // Due 200 ms after the finish tick.
        scheduler.tick(at(360), &mut sink).unwrap();
        assert!(sink.ops[before..].contains(&Op::Zone(10, BRIGHT_GREEN)));
        assert_eq!(sink.ops.last(), Some(&Op::Commit));
    }

    #[test]
    fn test_superseding_start_cancels_the_pending_finale() {
        let mut scheduler = scheduler();
        let mut sink = RecordingSink::new();

        scheduler.start(countdown(100), at(0), &mut sink).unwrap();
        scheduler.tick(at(150), &mut sink).unwrap();

        // New effect before the finale comes due.
        scheduler
            .start(
                EffectRequest::Strobe {
                    color: WHITE,
                    duration: Duration::from_millis(5000),
                    period: Duration::from_millis(50),
                },
                at(200),
                &mut sink,
            )
            .unwrap();
        let after_start = sink.ops.len();

        scheduler.tick(at(400), &mut sink).unwrap();
        assert!(!sink.ops[after_start..].contains(&Op::Zone(10, BRIGHT_GREEN)));
    }

    #[test]
    fn test_stop_cancels_the_pending_finale() {
        let mut scheduler = scheduler();
        let mut sink = RecordingSink::new();

        scheduler.start(countdown(100), at(0), &mut sink).unwrap();
        scheduler.tick(at(150), &mut sink).unwrap();
        scheduler.stop();

        let before = sink.ops.len();
        scheduler.tick(at(400), &mut sink).unwrap();
        assert_eq!(sink.ops.len(), before);
    }

    #[test]
    fn test_transport_error_still_commits_the_frame() {
        let mut scheduler = scheduler();
        let mut sink = RecordingSink::new();

        scheduler.start(countdown(1000), at(0), &mut sink).unwrap();

        sink.fail_with = Some(SinkError::Transport);
        let result = scheduler.tick(at(16), &mut sink);
        assert_eq!(result, Err(SinkError::Transport));
        // All zones plus the commit were still attempted.
        assert_eq!(sink.ops.last(), Some(&Op::Commit));
        assert!(scheduler.is_running());
    }

    #[test]
    fn test_shutdown_blanks_all_zones() {
        let mut scheduler = scheduler();
        let mut sink = RecordingSink::new();

        scheduler.start(countdown(1000), at(0), &mut sink).unwrap();
        scheduler.shutdown(&mut sink).unwrap();

        assert!(!scheduler.is_running());
        let tail = &sink.ops[sink.ops.len() - 2..];
        assert_eq!(tail, &[Op::ClearAll, Op::Commit]);
    }
}
