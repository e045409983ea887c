use core::{fmt, net};

use crate::{v4, ParseError};

///Labels of report lines, in the order they are printed
pub const LABELS: [&str; 7] = [
    "IP Address",
    "Subnet Mask",
    "Network Address",
    "Broadcast Address",
    "Number of Usable Hosts",
    "First Usable IP",
    "Last Usable IP",
];

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
///Derived attributes of IPv4 network
pub struct SubnetReport {
    ///Address as supplied, including host bits
    pub address: net::Ipv4Addr,
    ///Prefix length
    pub prefix: u8,
    ///Network mask
    pub netmask: net::Ipv4Addr,
    ///Lowest address within the block
    pub network: net::Ipv4Addr,
    ///Highest address within the block
    pub broadcast: net::Ipv4Addr,
    ///Number of addresses within the block
    pub total_addresses: u64,
    ///Number of addresses usable by hosts
    pub usable_hosts: u64,
    ///Range of addresses usable by hosts, empty for `/31` and `/32`
    pub usable_range: Option<v4::HostRange>,
}

impl SubnetReport {
    ///Computes report for `cidr`
    pub const fn new(cidr: v4::Cidr) -> Self {
        Self {
            address: cidr.addr(),
            prefix: cidr.prefix(),
            netmask: cidr.netmask(),
            network: cidr.network_addr(),
            broadcast: cidr.broadcast_addr(),
            total_addresses: cidr.size(),
            usable_hosts: cidr.usable_hosts(),
            usable_range: cidr.hosts(),
        }
    }

    #[inline(always)]
    ///Returns first usable address, if any
    pub const fn first_usable(&self) -> Option<net::Ipv4Addr> {
        match self.usable_range {
            Some(range) => Some(range.first),
            None => None,
        }
    }

    #[inline(always)]
    ///Returns last usable address, if any
    pub const fn last_usable(&self) -> Option<net::Ipv4Addr> {
        match self.usable_range {
            Some(range) => Some(range.last),
            None => None,
        }
    }
}

struct OrNotAvailable(Option<net::Ipv4Addr>);

impl fmt::Display for OrNotAvailable {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(addr) => fmt::Display::fmt(&addr, fmt),
            None => fmt.write_str("N/A"),
        }
    }
}

impl fmt::Display for SubnetReport {
    ///Writes `Label: value` line per field
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [address, netmask, network, broadcast, usable, first, last] = LABELS;
        writeln!(fmt, "{address}: {}", self.address)?;
        writeln!(fmt, "{netmask}: {}", self.netmask)?;
        writeln!(fmt, "{network}: {}", self.network)?;
        writeln!(fmt, "{broadcast}: {}", self.broadcast)?;
        writeln!(fmt, "{usable}: {}", self.usable_hosts)?;
        writeln!(fmt, "{first}: {}", OrNotAvailable(self.first_usable()))?;
        writeln!(fmt, "{last}: {}", OrNotAvailable(self.last_usable()))
    }
}

///Parses `input` in `A.B.C.D/N` form and derives subnet attributes
///
///Host bits set in the address are accepted, network is normalized regardless.
///Missing prefix means single host route `/32`.
pub fn analyze(input: &str) -> Result<SubnetReport, ParseError> {
    let cidr = crate::parse_cidr(input)?;
    let report = SubnetReport::new(cidr);
    log::debug!("{cidr}: network={} broadcast={} usable={}", report.network, report.broadcast, report.usable_hosts);
    Ok(report)
}
