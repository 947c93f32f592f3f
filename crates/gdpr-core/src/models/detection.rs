use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Closed set of detection kinds produced by the pattern and entity detectors.
///
/// The first nine come from regex scanning, the last four from named-entity
/// recognition. `date` is shared: both detectors can emit it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectionKind {
    Email,
    Phone,
    CreditCard,
    Iban,
    Ipv4,
    Ipv6,
    Url,
    Date,
    CustomerId,
    Person,
    Org,
    Gpe,
    Loc,
}

impl DetectionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Phone => "phone",
            Self::CreditCard => "credit_card",
            Self::Iban => "iban",
            Self::Ipv4 => "ipv4",
            Self::Ipv6 => "ipv6",
            Self::Url => "url",
            Self::Date => "date",
            Self::CustomerId => "customer_id",
            Self::Person => "person",
            Self::Org => "org",
            Self::Gpe => "gpe",
            Self::Loc => "loc",
        }
    }

    /// Placeholder token substituted for a detected value during masking.
    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Email => "[EMAIL]",
            Self::Phone => "[PHONE]",
            Self::CreditCard => "[CREDIT_CARD]",
            Self::Iban => "[IBAN]",
            Self::Ipv4 => "[IPV4]",
            Self::Ipv6 => "[IPV6]",
            Self::Url => "[URL]",
            Self::Date => "[DATE]",
            Self::CustomerId => "[CUSTOMER_ID]",
            Self::Person => "[PERSON]",
            Self::Org => "[ORG]",
            Self::Gpe => "[GPE]",
            Self::Loc => "[LOC]",
        }
    }

    /// Map a recognizer label (case-insensitive) to an entity kind.
    ///
    /// Only the five labels the entity detector keeps are recognized;
    /// everything else returns `None` and is discarded upstream.
    pub fn from_entity_label(label: &str) -> Option<Self> {
        match label.to_ascii_lowercase().as_str() {
            "person" => Some(Self::Person),
            "org" => Some(Self::Org),
            "gpe" => Some(Self::Gpe),
            "loc" => Some(Self::Loc),
            "date" => Some(Self::Date),
            _ => None,
        }
    }
}

/// Mapping of detection kind to the matched values, in order of first
/// appearance in the text. Kinds with zero matches are never present.
pub type DetectionMap = BTreeMap<DetectionKind, Vec<String>>;
