//! IPv4 subnet calculator
//!
//! Derives network, broadcast and usable host range from CIDR notation.
//!
//! ```
//! let report = subnet_calc::analyze("192.168.1.0/24").expect("valid network");
//! assert_eq!(report.usable_hosts, 254);
//! assert_eq!(report.broadcast.to_string(), "192.168.1.255");
//! ```

#![warn(missing_docs)]
#![allow(clippy::style)]

mod parser;
pub use parser::{parse_ip, ParseError};
pub mod v4;
pub use v4::{Cidr, HostRange};
mod report;
pub use report::{analyze, SubnetReport, LABELS};
pub mod cli;

#[inline]
///Parses [Cidr](v4/struct.Cidr.html) from the input `text`
///
///Surrounding whitespace is ignored, whitespace only input is treated as missing address.
///
///If `prefix` is missing, prefix is assumed to be only for single IP, which is `/32`
pub fn parse_cidr(text: &str) -> Result<Cidr, ParseError> {
    match parse_ip(text.trim())? {
        (addr, None) => Ok(Cidr::new_single(addr)),
        (addr, Some(prefix)) => Cidr::new(addr, prefix).ok_or(ParseError::PrefixOverflow(prefix)),
    }
}
