//! Ecosystem Constants
//!
//! Pallet identifiers and fundamental parameters shared by the custody sweep
//! pallet and any runtime that wires it in.

/// Balance type alias for consistency across ecosystem
pub type Balance = u128;

/// Pallet identifiers for deriving pallet-owned accounts.
///
/// These IDs are used by Polkadot SDK's `PalletId::into_account_truncating()`
/// to deterministically generate accounts for pallet-specific operations.
pub mod pallet_ids {
  /// Custody Sweep pallet ID (custodial account that sweeps to a fixed destination)
  pub const CUSTODY_SWEEP_PALLET_ID: &[u8; 8] = b"custswp0";
}

/// Ecosystem parameters.
pub mod params {
  use super::Balance;

  /// Precision scalar for balances (10^12).
  pub const PRECISION: Balance = 1_000_000_000_000;

  /// Asset id (inside pallet-assets) of the custody ledger's own units.
  ///
  /// A transfer of this asset to the custody account is the sweep trigger.
  pub const CUSTODY_LEDGER_ASSET_ID: u32 = 0x1000_0F00;

  /// Ledger units minted to the owner when the custody account is constructed.
  pub const CUSTODY_INITIAL_SUPPLY: Balance = 1_000_000 * PRECISION;

  /// Upper bound of the sweep registry.
  pub const CUSTODY_MAX_INCLUDED_ASSETS: u32 = 64;
}
