//!IPv4 module
//!
//!All arithmetic is performed on `u32` representation of the address.

use core::{fmt, net, str};

use crate::ParseError;

///Number of bits within IPv4 address
pub const BITS_LEN: u8 = net::Ipv4Addr::BITS as u8;

///Prefix length starting from which block has no usable hosts
///
///`/31` is point-to-point link and `/32` is single host route.
pub const NO_HOSTS_PREFIX: u8 = BITS_LEN - 1;

#[inline]
///Computes network mask for provided `prefix`, assuming `prefix` is valid prefix
pub const fn mask(prefix: u8) -> net::Ipv4Addr {
    match prefix {
        0 => net::Ipv4Addr::UNSPECIFIED,
        prefix => {
            let mask = u32::MAX << (BITS_LEN.saturating_sub(prefix));
            net::Ipv4Addr::from_bits(mask)
        }
    }
}

#[inline]
///Computes host mask (inverted network mask) for provided `prefix`
pub const fn hostmask(prefix: u8) -> net::Ipv4Addr {
    net::Ipv4Addr::from_bits(!mask(prefix).to_bits())
}

#[inline]
///Computes network address from provided `addr` and `prefix`, which is lowest possible address within CIDR block
pub const fn network_addr(addr: net::Ipv4Addr, prefix: u8) -> net::Ipv4Addr {
    let mask = mask(prefix).to_bits();
    net::Ipv4Addr::from_bits(addr.to_bits() & mask)
}

#[inline]
///Computes broadcast address from provided `addr` and `prefix`, which is highest possible address within CIDR block
pub const fn broadcast_addr(addr: net::Ipv4Addr, prefix: u8) -> net::Ipv4Addr {
    let mask = mask(prefix).to_bits();
    net::Ipv4Addr::from_bits((addr.to_bits() & mask) | !mask)
}

#[inline]
///Returns number of possible addresses, which is `2^(32 - prefix)`
pub const fn size(prefix: u8) -> u64 {
    1u64 << (BITS_LEN.saturating_sub(prefix))
}

#[inline]
///Returns number of addresses usable by hosts, excluding network and broadcast addresses
///
///Always `0` for `/31` and `/32`
pub const fn usable_hosts(prefix: u8) -> u64 {
    if prefix >= NO_HOSTS_PREFIX {
        0
    } else {
        size(prefix) - 2
    }
}

#[inline]
///Converts contiguous network mask (e.g. `255.255.255.0`) into prefix length
///
///Returns `None` if mask has holes
pub const fn prefix_from_netmask(mask: net::Ipv4Addr) -> Option<u8> {
    let bits = mask.to_bits();
    let prefix = bits.leading_ones();
    if prefix + bits.trailing_zeros() == BITS_LEN as u32 {
        Some(prefix as u8)
    } else {
        None
    }
}

#[inline]
///Converts contiguous host mask (e.g. `0.0.0.255`) into prefix length
///
///Returns `None` if mask has holes
pub const fn prefix_from_hostmask(mask: net::Ipv4Addr) -> Option<u8> {
    prefix_from_netmask(net::Ipv4Addr::from_bits(!mask.to_bits()))
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
///Inclusive range of addresses usable by hosts
pub struct HostRange {
    ///First usable address
    pub first: net::Ipv4Addr,
    ///Last usable address
    pub last: net::Ipv4Addr,
}

impl HostRange {
    #[inline(always)]
    ///Returns number of addresses within range
    pub const fn len(&self) -> u64 {
        (self.last.to_bits() - self.first.to_bits()) as u64 + 1
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
///CIDR representation of IPv4 network
///
///Address is stored as supplied, host bits are only dropped when computing derived addresses.
pub struct Cidr {
    prefix: u8,
    addr: net::Ipv4Addr,
}

impl Cidr {
    #[inline]
    ///Constructs new CIDR verifying that `prefix` fits provided `addr`
    ///
    ///Returns `None` if `prefix` is greater than 32
    pub const fn new(addr: net::Ipv4Addr, prefix: u8) -> Option<Self> {
        if prefix > BITS_LEN {
            None
        } else {
            Some(Self {
                addr,
                prefix,
            })
        }
    }

    #[inline(always)]
    ///Constructs CIDR for single host route (`/32`)
    pub const fn new_single(addr: net::Ipv4Addr) -> Self {
        Self {
            addr,
            prefix: BITS_LEN,
        }
    }

    #[inline(always)]
    ///Returns address
    pub const fn addr(&self) -> net::Ipv4Addr {
        self.addr
    }

    #[inline(always)]
    ///Returns prefix
    pub const fn prefix(&self) -> u8 {
        self.prefix
    }

    #[inline(always)]
    ///Returns network mask
    pub const fn netmask(&self) -> net::Ipv4Addr {
        mask(self.prefix)
    }

    #[inline(always)]
    ///Returns host mask
    pub const fn hostmask(&self) -> net::Ipv4Addr {
        hostmask(self.prefix)
    }

    #[inline(always)]
    ///Computes network address, which is lowest possible address within CIDR block
    pub const fn network_addr(&self) -> net::Ipv4Addr {
        network_addr(self.addr, self.prefix)
    }

    #[inline(always)]
    ///Computes broadcast address, which is highest possible address within CIDR block
    pub const fn broadcast_addr(&self) -> net::Ipv4Addr {
        broadcast_addr(self.addr, self.prefix)
    }

    #[inline(always)]
    ///Returns CIDR with host bits of the address cleared
    pub const fn normalize(&self) -> Self {
        Self {
            addr: self.network_addr(),
            prefix: self.prefix,
        }
    }

    #[inline(always)]
    ///Checks if a given `addr` is contained within `self`
    pub const fn contains(&self, addr: net::Ipv4Addr) -> bool {
        (addr.to_bits() & mask(self.prefix).to_bits()) == self.network_addr().to_bits()
    }

    #[inline(always)]
    ///Returns number of possible addresses
    pub const fn size(&self) -> u64 {
        size(self.prefix)
    }

    #[inline(always)]
    ///Returns number of addresses usable by hosts
    pub const fn usable_hosts(&self) -> u64 {
        usable_hosts(self.prefix)
    }

    #[inline]
    ///Returns range of addresses usable by hosts
    ///
    ///Returns `None` for `/31` and `/32` as these blocks have no usable hosts
    pub const fn hosts(&self) -> Option<HostRange> {
        if self.prefix >= NO_HOSTS_PREFIX {
            return None;
        }

        //Block has at least 4 addresses, neither can overflow
        let first = self.network_addr().to_bits() + 1;
        let last = self.broadcast_addr().to_bits() - 1;
        Some(HostRange {
            first: net::Ipv4Addr::from_bits(first),
            last: net::Ipv4Addr::from_bits(last),
        })
    }
}

impl fmt::Display for Cidr {
    #[inline(always)]
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { addr, prefix } = self;
        fmt.write_fmt(format_args!("{addr}/{prefix}"))
    }
}

impl str::FromStr for Cidr {
    type Err = ParseError;

    #[inline(always)]
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        crate::parse_cidr(text)
    }
}
