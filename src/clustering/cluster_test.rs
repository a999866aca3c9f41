#[cfg(test)]
mod tests {
    use super::super::*;
    use quickcheck::quickcheck;
    use std::collections::BTreeSet;

    #[test]
    fn test_distance() {
        let a = Cluster::singleton("a", 0.0, 0.0, 1.0, 0.0);
        let b = Cluster::singleton("b", 3.0, 4.0, 1.0, 0.0);
        assert_eq!(a.distance(&b), 5.0);
        assert_eq!(b.distance(&a), 5.0);
        assert_eq!(a.distance(&a), 0.0);
    }

    #[test]
    fn test_merge_conservation() {
        let mut a = Cluster::singleton("a", 0.0, 0.0, 100.0, 0.2);
        let b = Cluster::singleton("b", 10.0, 20.0, 300.0, 0.6);
        a.merge(&b);

        assert_eq!(a.total_population(), 400.0);
        // Weighted center: 0.25 of a, 0.75 of b
        assert!((a.horiz_center() - 7.5).abs() < 1e-12);
        assert!((a.vert_center() - 15.0).abs() < 1e-12);
        assert!((a.averaged_risk() - 0.5).abs() < 1e-12);
        assert_eq!(a.ids().len(), 2);
        assert!(a.ids().contains("a"));
        assert!(a.ids().contains("b"));
    }

    #[test]
    fn test_merge_empty_is_noop() {
        let mut a = Cluster::singleton("a", 1.0, 2.0, 50.0, 0.3);
        let before = a.clone();
        a.merge(&Cluster::empty());
        assert_eq!(a, before);
    }

    #[test]
    fn test_merge_into_empty_accumulator() {
        let mut accumulator = Cluster::empty();
        let b = Cluster::singleton("b", 4.0, -2.0, 10.0, 0.7);
        accumulator.merge(&b);
        assert_eq!(accumulator.horiz_center(), 4.0);
        assert_eq!(accumulator.vert_center(), -2.0);
        assert_eq!(accumulator.total_population(), 10.0);
        assert_eq!(accumulator.averaged_risk(), 0.7);
    }

    #[test]
    fn test_merge_zero_population_keeps_center_finite() {
        let mut a = Cluster::singleton("a", 1.0, 1.0, 0.0, 0.0);
        let b = Cluster::singleton("b", 5.0, 5.0, 0.0, 0.0);
        a.merge(&b);
        assert_eq!(a.ids().len(), 2);
        assert_eq!(a.total_population(), 0.0);
        // No weight to average by: center stays put instead of going NaN
        assert_eq!(a.horiz_center(), 1.0);
        assert_eq!(a.vert_center(), 1.0);
    }

    #[test]
    fn test_clone_is_independent() {
        let original = Cluster::singleton("a", 0.0, 0.0, 1.0, 0.0);
        let mut copy = original.clone();
        copy.merge(&Cluster::singleton("b", 2.0, 0.0, 1.0, 0.0));

        assert_eq!(original.ids().len(), 1);
        assert_eq!(original.total_population(), 1.0);
        assert_eq!(copy.ids().len(), 2);
    }

    #[test]
    fn test_new_with_explicit_ids() {
        let mut ids = BTreeSet::new();
        ids.insert("x".to_string());
        ids.insert("y".to_string());
        let c = Cluster::new(ids, 1.0, 2.0, 3.0, 4.0);
        assert_eq!(c.ids().len(), 2);
        assert!(!c.is_empty());
        assert!(Cluster::empty().is_empty());
    }

    quickcheck! {
        fn prop_distance_symmetric(p1: (i16, i16), p2: (i16, i16)) -> bool {
            let a = Cluster::singleton("a", p1.0 as f64, p1.1 as f64, 1.0, 0.0);
            let b = Cluster::singleton("b", p2.0 as f64, p2.1 as f64, 1.0, 0.0);
            a.distance(&b) == b.distance(&a)
        }

        fn prop_merge_conserves_population(
            p1: (i16, i16, u16),
            p2: (i16, i16, u16)
        ) -> bool {
            let mut a = Cluster::singleton("a", p1.0 as f64, p1.1 as f64, p1.2 as f64, 0.0);
            let b = Cluster::singleton("b", p2.0 as f64, p2.1 as f64, p2.2 as f64, 0.0);
            let expected = p1.2 as f64 + p2.2 as f64;
            a.merge(&b);
            a.total_population() == expected && a.ids().len() == 2
        }
    }
}
