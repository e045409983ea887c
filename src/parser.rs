use core::net;

use crate::v4;

const IPV4_LEN: u8 = 4;

#[derive(Debug)]
enum ParserState {
    Initial,
    Digit,
    Sep,
}

struct Parser<'a> {
    state: ParserState,
    //Number of address components
    //Valid address always has 4
    components_size: u8,
    components: [u8; IPV4_LEN as usize],
    start_digit_position: usize,
    text: &'a str,
}

impl<'a> Parser<'a> {
    const fn new(text: &'a str) -> Self {
        Self {
            state: ParserState::Initial,
            components_size: 0,
            components: [0; IPV4_LEN as usize],
            start_digit_position: 0,
            text,
        }
    }

    fn extract_component(&mut self, component_sep_pos: usize) -> Result<(), ParseError> {
        //State machine only enters digit state on ASCII digits so slicing is on char boundary
        let text = &self.text[self.start_digit_position..component_sep_pos];

        if self.components_size >= IPV4_LEN {
            return Err(ParseError::InvalidComponentSize(self.components_size.saturating_add(1)));
        }

        //Zero-prefixed octets are ambiguous (octal in some resolvers)
        if text.len() > 1 && text.starts_with('0') {
            return Err(ParseError::LeadingZero(text.to_owned()));
        }

        let component = match text.parse::<u32>() {
            Ok(component @ 0..=255) => component as u8,
            Ok(component) => return Err(ParseError::ComponentOverflow(component)),
            Err(_) => return Err(ParseError::InvalidComponent(text.to_owned())),
        };

        self.components[self.components_size as usize] = component;
        self.components_size = self.components_size.saturating_add(1);
        self.start_digit_position = 0;
        Ok(())
    }

    fn read_ip(&self) -> Result<net::Ipv4Addr, ParseError> {
        if self.components_size == IPV4_LEN {
            let [a, b, c, d] = self.components;
            Ok(net::Ipv4Addr::new(a, b, c, d))
        } else {
            Err(ParseError::InvalidComponentSize(self.components_size))
        }
    }

    #[inline(always)]
    fn on_digit(&mut self, pos: usize) {
        match self.state {
            ParserState::Digit => (),
            ParserState::Initial | ParserState::Sep => {
                self.state = ParserState::Digit;
                self.start_digit_position = pos;
            }
        }
    }

    #[inline(always)]
    fn on_sep(&mut self, pos: usize) -> Result<(), ParseError> {
        let result = match self.state {
            ParserState::Digit => self.extract_component(pos),
            ParserState::Sep | ParserState::Initial => Err(ParseError::InvalidIpv4),
        };
        self.state = ParserState::Sep;
        result
    }

    //Handles last address component if any
    fn on_ip_end(&mut self, pos: usize) -> Result<net::Ipv4Addr, ParseError> {
        match self.state {
            ParserState::Digit => {
                self.extract_component(pos)?;
                self.read_ip()
            }
            ParserState::Sep => Err(ParseError::InvalidIpv4),
            ParserState::Initial => Err(ParseError::MissingIp),
        }
    }

    //Extracts prefix after `pos`
    fn on_prefix_sep(&self, pos: usize) -> Result<u8, ParseError> {
        let text = &self.text[pos.saturating_add(1)..];
        if text.is_empty() {
            return Err(ParseError::MissingPrefix);
        }

        if text.contains('.') {
            return parse_mask(text);
        }

        //`u8::from_str` tolerates leading '+' which is not a valid prefix
        if !text.bytes().all(|ch| ch.is_ascii_digit()) {
            return Err(ParseError::InvalidPrefix(text.to_owned()));
        }

        match text.parse::<u8>() {
            Ok(prefix) if prefix > v4::BITS_LEN => Err(ParseError::PrefixOverflow(prefix)),
            Ok(prefix) => Ok(prefix),
            Err(_) => Err(ParseError::InvalidPrefix(text.to_owned())),
        }
    }

    fn parse(&mut self) -> Result<(net::Ipv4Addr, Option<u8>), ParseError> {
        let text = self.text;
        for (idx, ch) in text.bytes().enumerate() {
            match ch {
                b'0'..=b'9' => self.on_digit(idx),
                b'.' => self.on_sep(idx)?,
                b'/' => {
                    let ip = self.on_ip_end(idx)?;
                    let prefix = self.on_prefix_sep(idx)?;
                    return Ok((ip, Some(prefix)));
                }
                ch if ch.is_ascii() => return Err(ParseError::UnexpectedCharacter(ch as char, idx)),
                _ => return Err(ParseError::NonAsciiCharacter(idx)),
            }
        }

        let ip = self.on_ip_end(text.len())?;
        Ok((ip, None))
    }
}

//Netmask (`255.255.255.0`) or hostmask (`0.0.0.255`) in place of prefix length
fn parse_mask(text: &str) -> Result<u8, ParseError> {
    let mask = match Parser::new(text).parse() {
        Ok((mask, None)) => mask,
        Ok((_, Some(_))) | Err(_) => return Err(ParseError::InvalidNetmask(text.to_owned())),
    };

    match v4::prefix_from_netmask(mask).or_else(|| v4::prefix_from_hostmask(mask)) {
        Some(prefix) => Ok(prefix),
        None => Err(ParseError::InvalidNetmask(text.to_owned())),
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
///Possible errors parsing IPv4 network
pub enum ParseError {
    ///Invalid address component
    #[error("Invalid address component: {0}")]
    InvalidComponent(String),
    ///Address component is written with leading zeros
    #[error("Leading zeros are not permitted in address component: {0}")]
    LeadingZero(String),
    ///Invalid prefix length
    #[error("Invalid prefix length: {0}")]
    InvalidPrefix(String),
    ///Mask after `/` is not contiguous netmask or hostmask
    #[error("Invalid netmask: {0}")]
    InvalidNetmask(String),
    ///Unexpected character with position where it is encountered at
    #[error("Encountered unexpected character '{0}' at idx={1}")]
    UnexpectedCharacter(char, usize),
    ///Address is not valid IPv4
    #[error("Address is not valid IPv4")]
    InvalidIpv4,
    ///IPv4 Address must have 4 components
    #[error("IPv4 Address has '{0}' components but expected 4")]
    InvalidComponentSize(u8),
    ///IPv4 Address component is greater than 255
    #[error("IPv4 component is '{0}' while allowed range is 0..=255")]
    ComponentOverflow(u32),
    ///Unexpected Non-ASCII character encountered
    #[error("Encountered non-ASCII character at idx={0}")]
    NonAsciiCharacter(usize),
    ///IP address is not specified
    #[error("Address is not specified")]
    MissingIp,
    ///Prefix is not specified after `/`
    #[error("Prefix is not specified")]
    MissingPrefix,
    ///Prefix is greater than 32
    #[error("Prefix '{0}' is greater than 32")]
    PrefixOverflow(u8),
}

///Performs parsing of the string into IPv4 addr with optional CIDR prefix
///
///Input is taken as is, surrounding whitespace is rejected as unexpected character.
///
///Prefix may be given as length (`/24`), netmask (`/255.255.255.0`) or hostmask (`/0.0.0.255`)
pub fn parse_ip(text: &str) -> Result<(net::Ipv4Addr, Option<u8>), ParseError> {
    let result = Parser::new(text).parse();
    log::trace!("parse_ip('{text}') = {result:?}");
    result
}
