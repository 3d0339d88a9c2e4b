//! Fuzz target for CIDR parsing
//!
//! Anything that parses must render to text that parses back to the same value.

#![no_main]

use libfuzzer_sys::fuzz_target;
use std::str;
use ipagg_core::{IpCidr, Ipv4Cidr, Ipv6Cidr};

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = str::from_utf8(data) {
        // Skip very long inputs
        if input.len() > 256 {
            return;
        }

        if let Ok(ip) = input.parse::<IpCidr>() {
            let reparsed: IpCidr = ip.to_string().parse().expect("canonical text re-parses");
            assert_eq!(reparsed, ip);
        }

        let _ = Ipv4Cidr::parse(input);
        let _ = Ipv6Cidr::parse(input);
    }
});
