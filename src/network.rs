//! Default provider base URLs.

/// Koios mainnet API (bulk queries).
pub const DEFAULT_KOIOS_URL: &str = "https://api.koios.rest/api/v1";

/// Blockfrost mainnet API (per-entity detail, requires a project id).
pub const DEFAULT_BLOCKFROST_URL: &str = "https://cardano-mainnet.blockfrost.io/api/v0";

/// Koios preview network.
pub const PREVIEW_KOIOS_URL: &str = "https://preview.koios.rest/api/v1";

/// Blockfrost preview network.
pub const PREVIEW_BLOCKFROST_URL: &str = "https://cardano-preview.blockfrost.io/api/v0";
