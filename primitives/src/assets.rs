use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

/// Identifies every balance type the custody sweep can hold.
///
/// - `Native`: The system's native token (managed by pallet-balances).
/// - `Local(u32)`: Local assets (managed by pallet-assets).
/// - `Foreign(u32)`: XCM-mapped assets (managed by pallet-assets).
#[derive(
  Clone,
  Copy,
  Debug,
  Decode,
  DecodeWithMemTracking,
  Default,
  Encode,
  Eq,
  MaxEncodedLen,
  Ord,
  PartialEq,
  PartialOrd,
  TypeInfo,
  Serialize,
  Deserialize,
)]
pub enum AssetKind {
  /// Native token managed by pallet-balances
  #[default]
  Native,
  /// Local asset managed by pallet-assets
  Local(u32),
  /// Foreign asset managed by pallet-assets via XCM mapping (0xF... namespace)
  Foreign(u32),
}

// 32-bit ID Structure:
// [ 4 bits: Type ] [ 28 bits: Index/ID ]
//
// Only the foreign namespace (0xF...) matters to the sweep; every other
// prefix is treated as a local asset.
pub const MASK_TYPE: u32 = 0xF000_0000;
pub const TYPE_FOREIGN: u32 = 0xF000_0000;

/// Helper trait to inspect AssetKind properties
pub trait AssetInspector {
  fn is_native(&self) -> bool;
  /// Id inside pallet-assets, `None` for the native token.
  fn local_id(&self) -> Option<u32>;
  /// Variant implied by the id namespace, so `Local` and `Foreign` spellings of one
  /// pallet-assets id compare equal.
  fn canonical(&self) -> AssetKind;
}

impl AssetInspector for AssetKind {
  fn is_native(&self) -> bool {
    matches!(self, AssetKind::Native)
  }

  fn local_id(&self) -> Option<u32> {
    match self {
      AssetKind::Local(id) | AssetKind::Foreign(id) => Some(*id),
      _ => None,
    }
  }

  fn canonical(&self) -> AssetKind {
    match self.local_id() {
      Some(id) if (id & MASK_TYPE) == TYPE_FOREIGN => AssetKind::Foreign(id),
      Some(id) => AssetKind::Local(id),
      None => AssetKind::Native,
    }
  }
}
