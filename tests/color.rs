mod tests {
    use kitchen_light_engine::color::{PackedColor, Rgb, WaveChannel};
    use kitchen_light_engine::falloff::FalloffTable;

    #[test]
    fn test_channel_placement() {
        // primary at bit offset 0, secondary at bit offset 4
        let primary = PackedColor::BLACK.with_channel(WaveChannel::Primary, 0xAB);
        assert_eq!(primary.raw(), 0x0000_00AB);

        let secondary = PackedColor::BLACK.with_channel(WaveChannel::Secondary, 0xAB);
        assert_eq!(secondary.raw(), 0x0000_0AB0);

        assert_eq!(WaveChannel::Primary.shift(), 0);
        assert_eq!(WaveChannel::Secondary.shift(), 4);
    }

    #[test]
    fn test_channel_accessors() {
        let color = PackedColor::BLACK.with_channel(WaveChannel::Secondary, 0x5A);
        assert_eq!(color.channel(WaveChannel::Secondary), 0x5A);

        let color = PackedColor::BLACK.with_channel(WaveChannel::Primary, 0x5A);
        assert_eq!(color.channel(WaveChannel::Primary), 0x5A);
    }

    #[test]
    fn test_channel_from_mask_bit() {
        assert_eq!(WaveChannel::from_mask_bit(0), Some(WaveChannel::Primary));
        assert_eq!(WaveChannel::from_mask_bit(1), Some(WaveChannel::Secondary));
        assert_eq!(WaveChannel::from_mask_bit(2), None);
    }

    #[test]
    fn test_black_and_white() {
        assert!(PackedColor::BLACK.is_black());
        assert!(!PackedColor::WHITE.is_black());
        assert_eq!(PackedColor::default(), PackedColor::BLACK);
        assert_eq!(
            PackedColor::WHITE.to_rgb(),
            Rgb {
                r: 255,
                g: 255,
                b: 255
            }
        );
    }

    #[test]
    fn test_to_rgb_layout() {
        let color = PackedColor::from_raw(0x0012_3456);
        assert_eq!(
            color.to_rgb(),
            Rgb {
                r: 0x12,
                g: 0x34,
                b: 0x56
            }
        );
    }

    #[test]
    fn test_sine_falloff_shape() {
        let table = FalloffTable::sine();

        // dark at the edge, brightest at the center index
        assert_eq!(table.sample(0), 0);
        assert_eq!(table.sample(255), 255);

        let mut previous = 0;
        for index in 0..=255u8 {
            let sample = table.sample(index);
            assert!(sample >= previous, "dip at index {index}");
            previous = sample;
        }
    }

    #[test]
    fn test_raw_falloff_is_passed_through() {
        let mut samples = [0u8; 256];
        samples[42] = 7;
        let table = FalloffTable::from_raw(samples);
        assert_eq!(table.sample(42), 7);
        assert_eq!(table.sample(43), 0);
    }
}
