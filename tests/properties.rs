//! Property-based tests for subnet arithmetic

use core::net;

use proptest::prelude::*;
use subnet_calc::{analyze, v4, Cidr};

prop_compose! {
    fn arb_addr()(bits in any::<u32>()) -> net::Ipv4Addr {
        net::Ipv4Addr::from_bits(bits)
    }
}

prop_compose! {
    fn arb_cidr()(addr in arb_addr(), prefix in 0..=32u8) -> Cidr {
        Cidr::new(addr, prefix).expect("prefix in range")
    }
}

proptest! {
    #[test]
    fn network_and_broadcast_enclose_address(cidr in arb_cidr()) {
        let addr = cidr.addr();
        prop_assert!(cidr.network_addr() <= addr);
        prop_assert!(addr <= cidr.broadcast_addr());
        prop_assert!(cidr.contains(addr));
    }

    #[test]
    fn block_size_matches_prefix(cidr in arb_cidr()) {
        let span = (cidr.broadcast_addr().to_bits() - cidr.network_addr().to_bits()) as u64 + 1;
        prop_assert_eq!(span, cidr.size());
        prop_assert_eq!(cidr.size(), 1u64 << (32 - cidr.prefix()));
    }

    #[test]
    fn usable_range_is_consistent(cidr in arb_cidr()) {
        match cidr.hosts() {
            Some(hosts) => {
                prop_assert!(cidr.prefix() <= 30);
                prop_assert_eq!(hosts.len(), cidr.usable_hosts());
                prop_assert_eq!(cidr.usable_hosts(), cidr.size() - 2);
                prop_assert!(cidr.network_addr() < hosts.first);
                prop_assert!(hosts.last < cidr.broadcast_addr());
            }
            None => {
                prop_assert!(cidr.prefix() >= v4::NO_HOSTS_PREFIX);
                prop_assert_eq!(cidr.usable_hosts(), 0);
            }
        }
    }

    #[test]
    fn analyze_is_idempotent_over_network_address(cidr in arb_cidr()) {
        let original = analyze(&cidr.to_string()).expect("to analyze");
        let normalized = analyze(&cidr.normalize().to_string()).expect("to analyze");
        prop_assert_eq!(original.network, normalized.network);
        prop_assert_eq!(original.netmask, normalized.netmask);
        prop_assert_eq!(original.broadcast, normalized.broadcast);
        prop_assert_eq!(original.usable_hosts, normalized.usable_hosts);
        prop_assert_eq!(original.usable_range, normalized.usable_range);
    }

    #[test]
    fn dotted_quad_round_trips(addr in arb_addr()) {
        let (parsed, prefix) = subnet_calc::parse_ip(&addr.to_string()).expect("to parse");
        prop_assert_eq!(parsed.to_bits(), addr.to_bits());
        prop_assert_eq!(prefix, None);
    }

    #[test]
    fn netmask_parses_as_prefix(addr in arb_addr(), prefix in 0..=32u8) {
        let text = format!("{addr}/{}", v4::mask(prefix));
        let cidr: Cidr = text.parse().expect("to parse");
        prop_assert_eq!(cidr.prefix(), prefix);
    }

    #[test]
    fn never_panics_on_garbage(text in "\\PC{0,24}") {
        let _ = analyze(&text);
    }
}
