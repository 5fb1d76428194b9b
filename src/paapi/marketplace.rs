//! Product Advertising API marketplaces with endpoint hosts and signing regions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported marketplaces with their API hosts and signing regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Marketplace {
    #[default]
    Us,
    Uk,
    De,
    Fr,
    Es,
    It,
    Ca,
    Au,
    Jp,
    In,
    Br,
    Mx,
    Nl,
    Se,
    Pl,
}

impl Marketplace {
    /// Returns the API endpoint host for this marketplace.
    pub fn host(&self) -> &'static str {
        match self {
            Marketplace::Us => "webservices.amazon.com",
            Marketplace::Uk => "webservices.amazon.co.uk",
            Marketplace::De => "webservices.amazon.de",
            Marketplace::Fr => "webservices.amazon.fr",
            Marketplace::Es => "webservices.amazon.es",
            Marketplace::It => "webservices.amazon.it",
            Marketplace::Ca => "webservices.amazon.ca",
            Marketplace::Au => "webservices.amazon.com.au",
            Marketplace::Jp => "webservices.amazon.co.jp",
            Marketplace::In => "webservices.amazon.in",
            Marketplace::Br => "webservices.amazon.com.br",
            Marketplace::Mx => "webservices.amazon.com.mx",
            Marketplace::Nl => "webservices.amazon.nl",
            Marketplace::Se => "webservices.amazon.se",
            Marketplace::Pl => "webservices.amazon.pl",
        }
    }

    /// Returns the signing region for this marketplace's endpoint.
    pub fn region(&self) -> &'static str {
        match self {
            Marketplace::Us | Marketplace::Br | Marketplace::Ca | Marketplace::Mx => "us-east-1",
            Marketplace::Au | Marketplace::Jp => "us-west-2",
            Marketplace::Uk
            | Marketplace::De
            | Marketplace::Fr
            | Marketplace::Es
            | Marketplace::It
            | Marketplace::In
            | Marketplace::Nl
            | Marketplace::Se
            | Marketplace::Pl => "eu-west-1",
        }
    }

    /// Returns all supported marketplaces.
    pub fn all() -> &'static [Marketplace] {
        &[
            Marketplace::Us,
            Marketplace::Uk,
            Marketplace::De,
            Marketplace::Fr,
            Marketplace::Es,
            Marketplace::It,
            Marketplace::Ca,
            Marketplace::Au,
            Marketplace::Jp,
            Marketplace::In,
            Marketplace::Br,
            Marketplace::Mx,
            Marketplace::Nl,
            Marketplace::Se,
            Marketplace::Pl,
        ]
    }
}

impl fmt::Display for Marketplace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            Marketplace::Us => "us",
            Marketplace::Uk => "uk",
            Marketplace::De => "de",
            Marketplace::Fr => "fr",
            Marketplace::Es => "es",
            Marketplace::It => "it",
            Marketplace::Ca => "ca",
            Marketplace::Au => "au",
            Marketplace::Jp => "jp",
            Marketplace::In => "in",
            Marketplace::Br => "br",
            Marketplace::Mx => "mx",
            Marketplace::Nl => "nl",
            Marketplace::Se => "se",
            Marketplace::Pl => "pl",
        };
        write!(f, "{}", code)
    }
}

impl FromStr for Marketplace {
    type Err = MarketplaceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "us" | "usa" | "united states" => Ok(Marketplace::Us),
            "uk" | "gb" | "united kingdom" => Ok(Marketplace::Uk),
            "de" | "germany" => Ok(Marketplace::De),
            "fr" | "france" => Ok(Marketplace::Fr),
            "es" | "spain" => Ok(Marketplace::Es),
            "it" | "italy" => Ok(Marketplace::It),
            "ca" | "canada" => Ok(Marketplace::Ca),
            "au" | "australia" => Ok(Marketplace::Au),
            "jp" | "japan" => Ok(Marketplace::Jp),
            "in" | "india" => Ok(Marketplace::In),
            "br" | "brazil" => Ok(Marketplace::Br),
            "mx" | "mexico" => Ok(Marketplace::Mx),
            "nl" | "netherlands" => Ok(Marketplace::Nl),
            "se" | "sweden" => Ok(Marketplace::Se),
            "pl" | "poland" => Ok(Marketplace::Pl),
            _ => Err(MarketplaceParseError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MarketplaceParseError(String);

impl fmt::Display for MarketplaceParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown marketplace '{}'. Valid marketplaces: us, uk, de, fr, es, it, ca, au, jp, in, br, mx, nl, se, pl",
            self.0
        )
    }
}

impl std::error::Error for MarketplaceParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marketplace_parsing() {
        assert_eq!(Marketplace::from_str("us").unwrap(), Marketplace::Us);
        assert_eq!(Marketplace::from_str("usa").unwrap(), Marketplace::Us);
        assert_eq!(Marketplace::from_str("uk").unwrap(), Marketplace::Uk);
        assert_eq!(Marketplace::from_str("gb").unwrap(), Marketplace::Uk);
        assert_eq!(Marketplace::from_str("germany").unwrap(), Marketplace::De);
        assert_eq!(Marketplace::from_str("jp").unwrap(), Marketplace::Jp);

        // Case insensitive
        assert_eq!(Marketplace::from_str("US").unwrap(), Marketplace::Us);
        assert_eq!(Marketplace::from_str("FRANCE").unwrap(), Marketplace::Fr);

        // Invalid
        assert!(Marketplace::from_str("invalid").is_err());
        assert!(Marketplace::from_str("").is_err());
    }

    #[test]
    fn test_marketplace_hosts() {
        assert_eq!(Marketplace::Us.host(), "webservices.amazon.com");
        assert_eq!(Marketplace::Uk.host(), "webservices.amazon.co.uk");
        assert_eq!(Marketplace::De.host(), "webservices.amazon.de");
        assert_eq!(Marketplace::Au.host(), "webservices.amazon.com.au");
        assert_eq!(Marketplace::Jp.host(), "webservices.amazon.co.jp");
        assert_eq!(Marketplace::Br.host(), "webservices.amazon.com.br");
    }

    #[test]
    fn test_marketplace_regions() {
        assert_eq!(Marketplace::Us.region(), "us-east-1");
        assert_eq!(Marketplace::Ca.region(), "us-east-1");
        assert_eq!(Marketplace::Br.region(), "us-east-1");
        assert_eq!(Marketplace::Mx.region(), "us-east-1");
        assert_eq!(Marketplace::Au.region(), "us-west-2");
        assert_eq!(Marketplace::Jp.region(), "us-west-2");
        assert_eq!(Marketplace::Uk.region(), "eu-west-1");
        assert_eq!(Marketplace::De.region(), "eu-west-1");
        assert_eq!(Marketplace::In.region(), "eu-west-1");
        assert_eq!(Marketplace::Pl.region(), "eu-west-1");
    }

    #[test]
    fn test_marketplace_all() {
        let all = Marketplace::all();
        assert_eq!(all.len(), 15);
        assert!(all.contains(&Marketplace::Us));
        assert!(all.contains(&Marketplace::Pl));
    }

    #[test]
    fn test_marketplace_display_roundtrip() {
        for marketplace in Marketplace::all() {
            let parsed = Marketplace::from_str(&marketplace.to_string()).unwrap();
            assert_eq!(parsed, *marketplace);
        }
    }

    #[test]
    fn test_marketplace_default() {
        assert_eq!(Marketplace::default(), Marketplace::Us);
    }

    #[test]
    fn test_marketplace_serde() {
        let marketplace = Marketplace::Us;
        let json = serde_json::to_string(&marketplace).unwrap();
        assert_eq!(json, "\"us\"");

        let parsed: Marketplace = serde_json::from_str("\"uk\"").unwrap();
        assert_eq!(parsed, Marketplace::Uk);
    }

    #[test]
    fn test_marketplace_parse_error_display() {
        let err = Marketplace::from_str("xyz").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("xyz"));
        assert!(msg.contains("Valid marketplaces"));
    }
}
