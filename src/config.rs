use std::fmt;
use std::str::FromStr;

use anyhow::Context;

/// Which service surface this process exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Products under `/api/products`, categories under `/categories`, Swagger UI.
    Cashier,
    /// Products only, under `/api/produk`.
    Produk,
}

impl Variant {
    pub fn default_port(self) -> u16 {
        match self {
            Variant::Cashier => 8080,
            Variant::Produk => 7860,
        }
    }

    pub fn products_path(self) -> &'static str {
        match self {
            Variant::Cashier => "/api/products",
            Variant::Produk => "/api/produk",
        }
    }

    pub fn serves_categories(self) -> bool {
        self == Variant::Cashier
    }

    pub fn serves_docs(self) -> bool {
        self == Variant::Cashier
    }
}

impl FromStr for Variant {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cashier" | "kasir" => Ok(Variant::Cashier),
            "produk" => Ok(Variant::Produk),
            other => anyhow::bail!("unknown API_VARIANT {:?} (expected cashier or produk)", other),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Cashier => f.write_str("cashier"),
            Variant::Produk => f.write_str("produk"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub variant: Variant,
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup. `from_env` passes the process
    /// environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let variant = match lookup("API_VARIANT") {
            Some(raw) => raw.parse().context("API_VARIANT must be cashier or produk")?,
            None => Variant::Cashier,
        };

        let port = match lookup("PORT").filter(|p| !p.is_empty()) {
            Some(raw) => raw.parse().context("PORT must be a valid number")?,
            None => variant.default_port(),
        };

        Ok(Self {
            variant,
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
