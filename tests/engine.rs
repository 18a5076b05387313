mod tests {
    use kitchen_light_engine::color::{PackedColor, Rgb};
    use kitchen_light_engine::engine::{EngineConfig, LightEngine};
    use kitchen_light_engine::geometry::{CabinetRange, GeometryError};
    use kitchen_light_engine::layout::{
        CABINET_RANGES, RING_LEN, WAVE_REVERSAL, WAVE_WIDTH_CM, cm_to_pixels,
    };
    use kitchen_light_engine::{ReversalPeriod, StripDriver};

    const DRAWER_OPEN: u8 = b'O';

    struct RecordingDriver {
        frames: Vec<Vec<Rgb>>,
    }

    impl RecordingDriver {
        fn new() -> Self {
            Self { frames: Vec::new() }
        }
    }

    impl StripDriver for RecordingDriver {
        fn write(&mut self, colors: &[Rgb]) {
            self.frames.push(colors.to_vec());
        }
    }

    fn kitchen_engine() -> LightEngine<RING_LEN> {
        LightEngine::new(&EngineConfig {
            ranges: &CABINET_RANGES,
            wave_width: cm_to_pixels(WAVE_WIDTH_CM),
            wave_reversal: WAVE_REVERSAL,
            walker_color: PackedColor::WHITE,
        })
        .unwrap()
    }

    #[test]
    fn test_walker_tick_paints_the_ring() {
        let mut engine = kitchen_engine();

        // cabinet 1 spans (150, 36); first tick lands on the midpoint
        let index = engine.walker_tick(1, DRAWER_OPEN).unwrap();
        assert_eq!(index, 167);
        assert_eq!(engine.ring().get(167), PackedColor::WHITE);

        let index = engine.walker_tick(1, DRAWER_OPEN).unwrap();
        assert_eq!(index, 168);
    }

    #[test]
    fn test_invalid_cabinet_skips_the_tick() {
        let mut engine = kitchen_engine();

        let err = engine.walker_tick(9, DRAWER_OPEN).unwrap_err();
        assert_eq!(err, GeometryError::InvalidCabinetId(9));

        // nothing was painted
        assert!(engine.ring().as_slice().iter().all(|c| c.is_black()));

        // the engine keeps working afterwards
        assert!(engine.walker_tick(4, DRAWER_OPEN).is_ok());
    }

    #[test]
    fn test_range_lookup_passthrough() {
        let engine = kitchen_engine();
        assert_eq!(
            engine.range_of(0).unwrap(),
            CabinetRange::new(0, RING_LEN as u16)
        );
        assert_eq!(engine.range_of(7).unwrap(), CabinetRange::new(186, 48));
    }

    #[test]
    fn test_wave_tick_and_flush() {
        let mut engine = kitchen_engine();
        let mut driver = RecordingDriver::new();

        engine.wave_tick();
        engine.flush(&mut driver);

        assert_eq!(driver.frames.len(), 1);
        let frame = &driver.frames[0];
        assert_eq!(frame.len(), RING_LEN);

        // first wave frame: mask 1, peak intensity in the low byte at the
        // ring midpoint
        assert_eq!(frame[150], Rgb { r: 0, g: 0, b: 255 });
        assert_eq!(frame[121], Rgb { r: 0, g: 0, b: 0 });
    }

    #[test]
    fn test_clear_resets_the_frame() {
        let mut engine = kitchen_engine();
        engine.wave_tick();
        assert!(!engine.ring().get(150).is_black());

        engine.clear();
        assert!(engine.ring().as_slice().iter().all(|c| c.is_black()));
    }

    #[test]
    fn test_geometry_is_validated_at_construction() {
        let bad = [CabinetRange::new(290, 20)];
        let err = LightEngine::<RING_LEN>::new(&EngineConfig {
            ranges: &bad,
            wave_width: 60,
            wave_reversal: ReversalPeriod::EveryFourthPass,
            walker_color: PackedColor::WHITE,
        })
        .unwrap_err();

        assert_eq!(
            err,
            GeometryError::InvalidGeometry {
                cabinet: 1,
                range: CabinetRange::new(290, 20)
            }
        );
    }
}
