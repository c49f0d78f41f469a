//! Enumerations for the validating endpoint wrappers.
//!
//! Each enum maps to a literal path segment and parses only its own
//! literals, so strings from configuration or user input are rejected with
//! [`Error::InvalidArgument`](crate::Error::InvalidArgument) before any
//! request is built.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Direction of a gem exchange quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExchangeType {
    /// Convert coins into gems
    Coins,
    /// Convert gems into coins
    Gems,
}

impl ExchangeType {
    /// The path segment for this exchange type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExchangeType::Coins => "coins",
            ExchangeType::Gems => "gems",
        }
    }
}

impl fmt::Display for ExchangeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExchangeType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "coins" => Ok(ExchangeType::Coins),
            "gems" => Ok(ExchangeType::Gems),
            other => Err(Error::InvalidArgument(format!(
                "commerce/exchange requires either type 'coins' or 'gems', got '{}'",
                other
            ))),
        }
    }
}

/// Whether to list open or completed trading post transactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionScope {
    /// Fulfilled transactions of the past 90 days
    History,
    /// Unfilled transactions
    Current,
}

impl TransactionScope {
    /// The path segment for this scope.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionScope::History => "history",
            TransactionScope::Current => "current",
        }
    }
}

impl fmt::Display for TransactionScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionScope {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "history" => Ok(TransactionScope::History),
            "current" => Ok(TransactionScope::Current),
            other => Err(Error::InvalidArgument(format!(
                "commerce/transactions requires either scope 'history' or 'current', got '{}'",
                other
            ))),
        }
    }
}

/// Side of a trading post transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Sell orders
    Sells,
    /// Buy orders
    Buys,
}

impl TransactionKind {
    /// The path segment for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Sells => "sells",
            TransactionKind::Buys => "buys",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sells" => Ok(TransactionKind::Sells),
            "buys" => Ok(TransactionKind::Buys),
            other => Err(Error::InvalidArgument(format!(
                "commerce/transactions requires either type 'sells' or 'buys', got '{}'",
                other
            ))),
        }
    }
}
