// Property tests: the set must behave exactly like a linear scan over
// the added prefixes, regardless of insertion order, and the binary
// encoding must be stable under re-encoding.

use cidrset::{IpSet, Ipv4Set, Ipv6Set};
use proptest::prelude::*;
use std::net::{Ipv4Addr, Ipv6Addr};

fn v4_prefix() -> impl Strategy<Value = (u32, u8)> {
    (any::<u32>(), 0u8..=32).prop_map(|(addr, len)| {
        let masked = if len == 0 {
            0
        } else {
            addr & (u32::MAX << (32 - u32::from(len)))
        };
        (masked, len)
    })
}

fn v6_prefix() -> impl Strategy<Value = (u128, u8)> {
    (any::<u128>(), 0u8..=128).prop_map(|(addr, len)| {
        let masked = if len == 0 {
            0
        } else {
            addr & (u128::MAX << (128 - u32::from(len)))
        };
        (masked, len)
    })
}

fn v4_model_contains(prefixes: &[(u32, u8)], addr: u32) -> bool {
    prefixes.iter().any(|&(net, len)| {
        len == 0 || addr >> (32 - u32::from(len)) == net >> (32 - u32::from(len))
    })
}

fn v6_model_contains(prefixes: &[(u128, u8)], addr: u128) -> bool {
    prefixes.iter().any(|&(net, len)| {
        len == 0 || addr >> (128 - u32::from(len)) == net >> (128 - u32::from(len))
    })
}

proptest! {
    #[test]
    fn prop_v4_matches_linear_scan(
        prefixes in prop::collection::vec(v4_prefix(), 1..24),
        probes in prop::collection::vec(any::<u32>(), 0..32),
    ) {
        let mut set = Ipv4Set::new();
        for &(addr, len) in &prefixes {
            set.add(addr, len);
        }
        for &(addr, len) in &prefixes {
            prop_assert!(set.contains(addr));
            if len > 0 {
                let span = !(u32::MAX << (32 - u32::from(len)));
                prop_assert!(set.contains(addr | span));
            }
        }
        for &probe in &probes {
            prop_assert_eq!(set.contains(probe), v4_model_contains(&prefixes, probe));
        }
        let report = set.audit();
        prop_assert!(report.is_clean(), "{:?}", report.issues);
    }

    #[test]
    fn prop_v4_insertion_order_is_irrelevant(
        prefixes in prop::collection::vec(v4_prefix(), 1..16),
        probes in prop::collection::vec(any::<u32>(), 0..32),
    ) {
        let mut forward = Ipv4Set::new();
        for &(addr, len) in &prefixes {
            forward.add(addr, len);
        }
        let mut backward = Ipv4Set::new();
        for &(addr, len) in prefixes.iter().rev() {
            backward.add(addr, len);
        }
        for &probe in &probes {
            prop_assert_eq!(forward.contains(probe), backward.contains(probe));
        }
        for &(addr, _) in &prefixes {
            prop_assert!(backward.contains(addr));
        }
    }

    #[test]
    fn prop_v6_matches_linear_scan(
        prefixes in prop::collection::vec(v6_prefix(), 1..16),
        probes in prop::collection::vec(any::<u128>(), 0..24),
    ) {
        let mut set = Ipv6Set::new();
        for &(addr, len) in &prefixes {
            set.add(Ipv6Addr::from(addr), len);
        }
        for &(addr, len) in &prefixes {
            prop_assert!(set.contains(Ipv6Addr::from(addr)));
            if len > 0 {
                let span = !(u128::MAX << (128 - u32::from(len)));
                prop_assert!(set.contains(Ipv6Addr::from(addr | span)));
            }
        }
        for &probe in &probes {
            prop_assert_eq!(
                set.contains(Ipv6Addr::from(probe)),
                v6_model_contains(&prefixes, probe)
            );
        }
        let report = set.audit();
        prop_assert!(report.is_clean(), "{:?}", report.issues);
    }

    #[test]
    fn prop_encoding_is_stable(
        v4 in prop::collection::vec(v4_prefix(), 0..16),
        v6 in prop::collection::vec(v6_prefix(), 0..8),
    ) {
        let mut set = IpSet::new();
        for &(addr, len) in &v4 {
            set.add(std::net::IpAddr::V4(Ipv4Addr::from(addr)), len);
        }
        for &(addr, len) in &v6 {
            set.add(std::net::IpAddr::V6(Ipv6Addr::from(addr)), len);
        }

        let mut blob = Vec::new();
        set.serialize(&mut blob).unwrap();
        prop_assert_eq!(blob.len() % 4, 0);

        let mut restored = IpSet::new();
        restored.deserialize(&mut blob.as_slice()).unwrap();
        let mut blob2 = Vec::new();
        restored.serialize(&mut blob2).unwrap();
        prop_assert_eq!(blob, blob2);

        for &(addr, _) in &v4 {
            prop_assert!(restored.contains(std::net::IpAddr::V4(Ipv4Addr::from(addr))));
        }
        for &(addr, _) in &v6 {
            prop_assert!(restored.contains(std::net::IpAddr::V6(Ipv6Addr::from(addr))));
        }
    }

    #[test]
    fn prop_compact_preserves_the_set(
        prefixes in prop::collection::vec(v4_prefix(), 1..24),
        probes in prop::collection::vec(any::<u32>(), 0..32),
    ) {
        let mut set = Ipv4Set::new();
        for &(addr, len) in &prefixes {
            set.add(addr, len);
        }
        let before: Vec<bool> = probes.iter().map(|&p| set.contains(p)).collect();
        set.compact();
        let after: Vec<bool> = probes.iter().map(|&p| set.contains(p)).collect();
        prop_assert_eq!(before, after);

        let report = set.audit();
        prop_assert!(report.is_clean(), "{:?}", report.issues);
        prop_assert_eq!(report.free_nodes, 0);
        if set.cell_count() != 0 {
            prop_assert_eq!(set.cell_count(), 2 + 2 * report.live_nodes());
        }
    }
}
