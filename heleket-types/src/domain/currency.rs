//! Currency and network value sets accepted by the gateway.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Currencies supported by the gateway.
///
/// The serialized form is the exact wire value; validators and serialization
/// share this one definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Verse,
    Hmstr,
    Cgpt,
    Avax,
    Dash,
    Doge,
    Shib,
    Usdc,
    Usdt,
    Bch,
    Bnb,
    Btc,
    Dai,
    Eth,
    Ltc,
    Pol,
    Sol,
    Ton,
    Trx,
    Xmr,
}

impl Currency {
    /// Returns the wire code for this currency.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Verse => "VERSE",
            Currency::Hmstr => "HMSTR",
            Currency::Cgpt => "CGPT",
            Currency::Avax => "AVAX",
            Currency::Dash => "DASH",
            Currency::Doge => "DOGE",
            Currency::Shib => "SHIB",
            Currency::Usdc => "USDC",
            Currency::Usdt => "USDT",
            Currency::Bch => "BCH",
            Currency::Bnb => "BNB",
            Currency::Btc => "BTC",
            Currency::Dai => "DAI",
            Currency::Eth => "ETH",
            Currency::Ltc => "LTC",
            Currency::Pol => "POL",
            Currency::Sol => "SOL",
            Currency::Ton => "TON",
            Currency::Trx => "TRX",
            Currency::Xmr => "XMR",
        }
    }

    /// All members of the closed set.
    pub fn all() -> &'static [Currency] {
        &[
            Currency::Verse,
            Currency::Hmstr,
            Currency::Cgpt,
            Currency::Avax,
            Currency::Dash,
            Currency::Doge,
            Currency::Shib,
            Currency::Usdc,
            Currency::Usdt,
            Currency::Bch,
            Currency::Bnb,
            Currency::Btc,
            Currency::Dai,
            Currency::Eth,
            Currency::Ltc,
            Currency::Pol,
            Currency::Sol,
            Currency::Ton,
            Currency::Trx,
            Currency::Xmr,
        ]
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Currency::all()
            .iter()
            .find(|c| c.code() == upper)
            .copied()
            .ok_or_else(|| format!("Unknown currency: {}", s))
    }
}

/// Blockchain networks supported by the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Network {
    Avalanche,
    Arbitrum,
    Polygon,
    Tron,
    Dash,
    Doge,
    Eth,
    Bch,
    Bsc,
    Btc,
    Ltc,
    Sol,
    Ton,
    Xmr,
}

impl Network {
    /// Returns the wire code for this network.
    pub fn code(&self) -> &'static str {
        match self {
            Network::Avalanche => "AVALANCHE",
            Network::Arbitrum => "ARBITRUM",
            Network::Polygon => "POLYGON",
            Network::Tron => "TRON",
            Network::Dash => "DASH",
            Network::Doge => "DOGE",
            Network::Eth => "ETH",
            Network::Bch => "BCH",
            Network::Bsc => "BSC",
            Network::Btc => "BTC",
            Network::Ltc => "LTC",
            Network::Sol => "SOL",
            Network::Ton => "TON",
            Network::Xmr => "XMR",
        }
    }

    /// All members of the closed set.
    pub fn all() -> &'static [Network] {
        &[
            Network::Avalanche,
            Network::Arbitrum,
            Network::Polygon,
            Network::Tron,
            Network::Dash,
            Network::Doge,
            Network::Eth,
            Network::Bch,
            Network::Bsc,
            Network::Btc,
            Network::Ltc,
            Network::Sol,
            Network::Ton,
            Network::Xmr,
        ]
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Network {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Network::all()
            .iter()
            .find(|n| n.code() == upper)
            .copied()
            .ok_or_else(|| format!("Unknown network: {}", s))
    }
}

/// Exchange from which the gateway takes the rate used to recalculate an
/// invoice amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CourseSource {
    Binance,
    #[serde(rename = "BinanceP2P")]
    BinanceP2p,
    Exmo,
    Kucoin,
    Garantexio,
}

impl fmt::Display for CourseSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CourseSource::Binance => "Binance",
            CourseSource::BinanceP2p => "BinanceP2P",
            CourseSource::Exmo => "Exmo",
            CourseSource::Kucoin => "Kucoin",
            CourseSource::Garantexio => "Garantexio",
        };
        write!(f, "{}", name)
    }
}
