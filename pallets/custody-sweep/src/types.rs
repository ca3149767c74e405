use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use scale_info::TypeInfo;

/// Gate of the sweep trigger.
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
  PartialEq,
  TypeInfo,
)]
pub enum ActivationState {
  /// Self-addressed transfers pass through untouched
  #[default]
  Inactive,
  /// A self-addressed transfer sweeps the custody account
  Active,
}

impl ActivationState {
  pub fn is_active(&self) -> bool {
    matches!(self, ActivationState::Active)
  }
}

/// Command produced by the transfer interceptor and consumed by the sweep handler.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SweepRequest<AccountId> {
  /// Sender of the triggering ledger transfer
  pub requested_by: AccountId,
  /// Ledger units carried by the triggering transfer
  pub trigger_amount: u128,
}

/// Summary of a single sweep run.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SweepOutcome {
  /// Registry entries inspected (drives the post-dispatch weight)
  pub assets_considered: u32,
  /// Assets whose whole balance reached the destination
  pub assets_swept: u32,
  /// Assets skipped because their transfer failed
  pub assets_failed: u32,
  /// Native amount moved to the destination
  pub native_swept: u128,
}
