mod tests {
    use lumenfx::{MAX_ZONES, SegmentError, SegmentMap};

    #[test]
    fn test_rejects_empty_list() {
        assert_eq!(SegmentMap::new(&[]).err(), Some(SegmentError::Empty));
    }

    #[test]
    fn test_rejects_too_many_zones() {
        let ids: Vec<u16> = (0..=MAX_ZONES as u16).collect();
        assert_eq!(SegmentMap::new(&ids).err(), Some(SegmentError::TooMany));
    }

    #[test]
    fn test_preserves_order() {
        let map = SegmentMap::new(&[7, 3, 9]).unwrap();
        assert_eq!(map.count(), 3);
        assert_eq!(map.id_at(0), Some(7));
        assert_eq!(map.id_at(1), Some(3));
        assert_eq!(map.id_at(2), Some(9));
        assert_eq!(map.id_at(3), None);

        let pairs: Vec<(usize, u16)> = map.iter().collect();
        assert_eq!(pairs, vec![(0, 7), (1, 3), (2, 9)]);
    }

    #[test]
    fn test_default_is_four_zones() {
        let map = SegmentMap::default();
        assert_eq!(map.count(), 4);
        assert_eq!(map.id_at(3), Some(3));
    }
}
