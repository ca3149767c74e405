//! Custody Sweep Pallet
//!
//! Custodial account holding native currency and a registry of assets. Once armed by its owner,
//! a transfer of the pallet's own ledger units to the custody account sweeps every registered
//! asset and the whole native balance to a destination fixed at construction.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub use pallet::*;

#[cfg(test)]
pub mod mock;

#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub mod types;
pub use types::{ActivationState, SweepOutcome, SweepRequest};

pub mod weights;
pub use weights::WeightInfo;

const LOG_TARGET: &str = "runtime::custody-sweep";

/// Helper for benchmarking
#[cfg(feature = "runtime-benchmarks")]
pub trait BenchmarkHelper<AccountId> {
  /// Create a sufficient asset in `Config::Assets` (no-op if it already exists).
  fn create_asset(asset_id: u32) -> frame::deps::sp_runtime::DispatchResult;
  fn fund_asset(who: &AccountId, asset_id: u32, amount: u128)
  -> frame::deps::sp_runtime::DispatchResult;
  fn fund_native(who: &AccountId, amount: u128) -> frame::deps::sp_runtime::DispatchResult;
}

#[frame::pallet]
pub mod pallet {
  use super::{LOG_TARGET, WeightInfo};
  use crate::types::{ActivationState, SweepOutcome, SweepRequest};
  use alloc::vec::Vec;
  use codec::Decode;
  use frame::deps::{
    frame_support::{
      storage::with_storage_layer,
      traits::{
        fungible::{Inspect as NativeInspect, Mutate as NativeMutate},
        fungibles::{Inspect as FungiblesInspect, Mutate as FungiblesMutate},
        tokens::{Fortitude, Preservation},
      },
    },
    sp_runtime::{
      DispatchError,
      traits::{AccountIdConversion, TrailingZeroInput, Zero},
    },
  };
  use frame::prelude::*;
  use primitives::{AssetInspector, AssetKind};

  /// Configuration trait for the custody sweep pallet
  #[pallet::config]
  pub trait Config: frame_system::Config<RuntimeEvent: From<Event<Self>>> {
    /// Ledger for the pallet's own units and for every sweepable non-native asset
    type Assets: FungiblesInspect<Self::AccountId, AssetId = u32, Balance = u128>
      + FungiblesMutate<Self::AccountId, AssetId = u32, Balance = u128>;

    /// The currency trait for managing native tokens (AssetKind::Native)
    type Currency: NativeInspect<Self::AccountId, Balance = u128>
      + NativeMutate<Self::AccountId, Balance = u128>;

    /// The pallet ID deriving the custody account
    #[pallet::constant]
    type PalletId: Get<PalletId>;

    /// Asset id of the ledger units whose self-transfer triggers a sweep.
    ///
    /// Only this pallet's `transfer` call triggers; moving these units to the custody account
    /// through `pallet-assets` directly is a plain deposit.
    #[pallet::constant]
    type TriggerAssetId: Get<u32>;

    /// Ledger units minted to the owner on construction
    #[pallet::constant]
    type InitialSupply: Get<u128>;

    /// Upper bound of the sweep registry
    #[pallet::constant]
    type MaxIncludedAssets: Get<u32>;

    /// Origin allowed to construct the custody account; its account becomes the owner
    type DeployOrigin: EnsureOrigin<Self::RuntimeOrigin, Success = Self::AccountId>;

    /// Weight information for extrinsics
    type WeightInfo: WeightInfo;

    /// Helper for benchmarking
    #[cfg(feature = "runtime-benchmarks")]
    type BenchmarkHelper: crate::BenchmarkHelper<Self::AccountId>;
  }

  /// The pallet struct
  #[pallet::pallet]
  pub struct Pallet<T>(PhantomData<T>);

  /// Administrative principal of the custody account
  #[pallet::storage]
  #[pallet::getter(fn owner)]
  pub type Owner<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

  /// Recipient of every sweep, immutable once set
  #[pallet::storage]
  #[pallet::getter(fn destination)]
  pub type Destination<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

  #[pallet::storage]
  #[pallet::getter(fn activation_state)]
  pub type Activation<T: Config> = StorageValue<_, ActivationState, ValueQuery>;

  /// Assets participating in a sweep, in insertion order
  #[pallet::storage]
  #[pallet::getter(fn included_assets)]
  pub type IncludedAssets<T: Config> =
    StorageValue<_, BoundedVec<AssetKind, T::MaxIncludedAssets>, ValueQuery>;

  /// Held while a sweep is moving funds
  #[pallet::storage]
  pub type SweepLock<T: Config> = StorageValue<_, bool, ValueQuery>;

  /// Lifetime amount swept to the destination, per asset
  #[pallet::storage]
  #[pallet::getter(fn total_swept)]
  pub type TotalSwept<T: Config> = StorageMap<_, Blake2_128Concat, AssetKind, u128, ValueQuery>;

  /// Events for the custody sweep pallet
  #[pallet::event]
  #[pallet::generate_deposit(pub(super) fn deposit_event)]
  pub enum Event<T: Config> {
    /// Custody account constructed
    Deployed {
      owner: T::AccountId,
      destination: T::AccountId,
      initial_supply: u128,
    },
    /// Sweep trigger armed
    Activated,
    /// Sweep trigger disarmed
    Deactivated,
    /// Registry entry changed
    AssetInclusionSet { asset: AssetKind, included: bool },
    OwnershipTransferred {
      previous_owner: T::AccountId,
      new_owner: T::AccountId,
    },
    /// Native currency deposited into custody
    NativeDeposited { who: T::AccountId, amount: u128 },
    /// A self-addressed transfer started a sweep
    SweepTriggered {
      requested_by: T::AccountId,
      trigger_amount: u128,
    },
    /// Whole custody balance of an asset moved to the destination
    AssetSwept { asset: AssetKind, amount: u128 },
    /// Asset transfer failed during a sweep and was skipped
    AssetSweepFailed {
      asset: AssetKind,
      amount: u128,
      error: DispatchError,
    },
    /// Sweep finished
    SweepExecuted {
      assets_swept: u32,
      assets_failed: u32,
      native_swept: u128,
    },
  }

  /// Errors for the custody sweep pallet
  #[pallet::error]
  pub enum Error<T> {
    /// Custody account has not been constructed yet
    NotDeployed,
    /// Custody account was already constructed
    AlreadyDeployed,
    /// Caller is not the owner
    NotOwner,
    /// Zero account given where a real account is required
    ZeroAddress,
    /// Native currency is always swept and cannot be registered
    NativeNotConfigurable,
    /// Registry is full
    TooManyAssets,
    /// Insufficient balance for operation
    InsufficientBalance,
    /// A sweep is already moving funds
    SweepInProgress,
  }

  #[pallet::hooks]
  impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
    #[cfg(feature = "try-runtime")]
    fn try_state(_n: BlockNumberFor<T>) -> Result<(), frame::deps::sp_runtime::TryRuntimeError> {
      Self::do_try_state()
    }
  }

  #[pallet::call]
  impl<T: Config> Pallet<T> {
    /// Construct the custody account.
    ///
    /// The account resolved by `DeployOrigin` becomes the owner and receives the initial ledger
    /// supply. The trigger starts disarmed.
    #[pallet::call_index(0)]
    #[pallet::weight(T::WeightInfo::deploy())]
    pub fn deploy(origin: OriginFor<T>, destination: T::AccountId) -> DispatchResult {
      let owner = T::DeployOrigin::ensure_origin(origin)?;
      Self::initialize(owner, destination)
    }

    /// Arm the sweep trigger (owner only, idempotent)
    #[pallet::call_index(1)]
    #[pallet::weight(T::WeightInfo::activate())]
    pub fn activate(origin: OriginFor<T>) -> DispatchResult {
      Self::ensure_owner(origin)?;
      Self::set_activation(ActivationState::Active);
      Ok(())
    }

    /// Disarm the sweep trigger (owner only, idempotent)
    #[pallet::call_index(2)]
    #[pallet::weight(T::WeightInfo::deactivate())]
    pub fn deactivate(origin: OriginFor<T>) -> DispatchResult {
      Self::ensure_owner(origin)?;
      Self::set_activation(ActivationState::Inactive);
      Ok(())
    }

    /// Add or remove one asset from the sweep registry (owner only, idempotent)
    #[pallet::call_index(3)]
    #[pallet::weight(T::WeightInfo::set_included())]
    pub fn set_included(origin: OriginFor<T>, asset: AssetKind, include: bool) -> DispatchResult {
      Self::ensure_owner(origin)?;
      Self::do_set_included(asset, include)
    }

    /// Apply the same inclusion flag to a list of assets.
    ///
    /// Either every entry is updated or none is.
    #[pallet::call_index(4)]
    #[pallet::weight(T::WeightInfo::batch_set_included(assets.len() as u32))]
    pub fn batch_set_included(
      origin: OriginFor<T>,
      assets: Vec<AssetKind>,
      include: bool,
    ) -> DispatchResult {
      Self::ensure_owner(origin)?;
      ensure!(
        !assets.iter().any(|asset| asset.is_native()),
        Error::<T>::NativeNotConfigurable
      );
      for asset in assets {
        Self::do_set_included(asset, include)?;
      }
      Ok(())
    }

    /// Hand the owner role to another account (owner only)
    #[pallet::call_index(5)]
    #[pallet::weight(T::WeightInfo::transfer_ownership())]
    pub fn transfer_ownership(origin: OriginFor<T>, new_owner: T::AccountId) -> DispatchResult {
      let previous_owner = Self::ensure_owner(origin)?;
      ensure!(!Self::is_zero_account(&new_owner), Error::<T>::ZeroAddress);
      Owner::<T>::put(&new_owner);
      Self::deposit_event(Event::OwnershipTransferred {
        previous_owner,
        new_owner,
      });
      Ok(())
    }

    /// Transfer ledger units.
    ///
    /// A transfer to the custody account while the trigger is armed sweeps every registered asset
    /// and the native balance to the destination within the same call. The transfer itself
    /// completes even when individual asset transfers of the sweep fail.
    ///
    /// This call is the only sweep trigger. Ledger units sent to the custody account through
    /// `pallet-assets` are credited without sweeping.
    #[pallet::call_index(6)]
    #[pallet::weight(
      T::WeightInfo::transfer().saturating_add(T::WeightInfo::sweep(T::MaxIncludedAssets::get()))
    )]
    pub fn transfer(
      origin: OriginFor<T>,
      to: T::AccountId,
      amount: u128,
    ) -> DispatchResultWithPostInfo {
      let who = ensure_signed(origin)?;
      ensure!(Destination::<T>::exists(), Error::<T>::NotDeployed);
      let ledger = T::TriggerAssetId::get();
      let spendable =
        T::Assets::reducible_balance(ledger, &who, Preservation::Expendable, Fortitude::Polite);
      ensure!(spendable >= amount, Error::<T>::InsufficientBalance);
      T::Assets::transfer(ledger, &who, &to, amount, Preservation::Expendable)?;
      let Some(request) = Self::intercept(&who, &to, amount) else {
        return Ok(Some(T::WeightInfo::transfer()).into());
      };
      let outcome = Self::handle_sweep_request(request)?;
      Ok(
        Some(
          T::WeightInfo::transfer().saturating_add(T::WeightInfo::sweep(outcome.assets_considered)),
        )
        .into(),
      )
    }

    /// Move native currency from the caller into custody.
    ///
    /// Accepted regardless of the trigger state.
    #[pallet::call_index(7)]
    #[pallet::weight(T::WeightInfo::deposit_native())]
    pub fn deposit_native(origin: OriginFor<T>, amount: u128) -> DispatchResult {
      let who = ensure_signed(origin)?;
      let spendable = T::Currency::reducible_balance(&who, Preservation::Preserve, Fortitude::Polite);
      ensure!(spendable >= amount, Error::<T>::InsufficientBalance);
      T::Currency::transfer(&who, &Self::account_id(), amount, Preservation::Preserve)?;
      Self::deposit_event(Event::NativeDeposited { who, amount });
      Ok(())
    }
  }

  impl<T: Config> Pallet<T> {
    pub fn account_id() -> T::AccountId {
      T::PalletId::get().into_account_truncating()
    }

    pub fn is_active() -> bool {
      Activation::<T>::get().is_active()
    }

    pub fn is_included(asset: AssetKind) -> bool {
      IncludedAssets::<T>::get().contains(&asset.canonical())
    }

    /// Ledger unit balance of `who`
    pub fn balance_of(who: &T::AccountId) -> u128 {
      T::Assets::balance(T::TriggerAssetId::get(), who)
    }

    /// Shared construction path of `deploy` and genesis.
    pub fn initialize(owner: T::AccountId, destination: T::AccountId) -> DispatchResult {
      ensure!(!Destination::<T>::exists(), Error::<T>::AlreadyDeployed);
      ensure!(!Self::is_zero_account(&destination), Error::<T>::ZeroAddress);
      Owner::<T>::put(&owner);
      Destination::<T>::put(&destination);
      Activation::<T>::put(ActivationState::Inactive);
      // Custody account survives zero native balance via provider reference
      frame_system::Pallet::<T>::inc_providers(&Self::account_id());
      let initial_supply = T::InitialSupply::get();
      if !initial_supply.is_zero() {
        T::Assets::mint_into(T::TriggerAssetId::get(), &owner, initial_supply)?;
      }
      Self::deposit_event(Event::Deployed {
        owner,
        destination,
        initial_supply,
      });
      Ok(())
    }

    /// Returns the caller if it is the current owner.
    fn ensure_owner(origin: OriginFor<T>) -> Result<T::AccountId, DispatchError> {
      let who = ensure_signed(origin)?;
      let owner = Owner::<T>::get().ok_or(Error::<T>::NotDeployed)?;
      ensure!(who == owner, Error::<T>::NotOwner);
      Ok(who)
    }

    fn is_zero_account(who: &T::AccountId) -> bool {
      T::AccountId::decode(&mut TrailingZeroInput::zeroes()).is_ok_and(|zero| zero == *who)
    }

    pub(crate) fn set_activation(state: ActivationState) {
      if Activation::<T>::get() == state {
        return;
      }
      Activation::<T>::put(state);
      let event = match state {
        ActivationState::Active => Event::Activated,
        ActivationState::Inactive => Event::Deactivated,
      };
      Self::deposit_event(event);
    }

    pub(crate) fn do_set_included(asset: AssetKind, include: bool) -> DispatchResult {
      ensure!(!asset.is_native(), Error::<T>::NativeNotConfigurable);
      // One registry slot per pallet-assets id
      let asset = asset.canonical();
      let changed = IncludedAssets::<T>::try_mutate(|assets| -> Result<bool, DispatchError> {
        match (assets.iter().position(|a| *a == asset), include) {
          (None, true) => {
            assets
              .try_push(asset)
              .map_err(|_| Error::<T>::TooManyAssets)?;
            Ok(true)
          }
          (Some(index), false) => {
            assets.remove(index);
            Ok(true)
          }
          _ => Ok(false),
        }
      })?;
      if changed {
        Self::deposit_event(Event::AssetInclusionSet {
          asset,
          included: include,
        });
      }
      Ok(())
    }

    /// Turn a ledger transfer into a sweep request when it targets the armed custody account.
    pub fn intercept(
      from: &T::AccountId,
      to: &T::AccountId,
      amount: u128,
    ) -> Option<SweepRequest<T::AccountId>> {
      if *to != Self::account_id() || !Self::is_active() {
        return None;
      }
      log::debug!(target: LOG_TARGET, "self-addressed transfer of {} units, sweep requested", amount);
      Some(SweepRequest {
        requested_by: from.clone(),
        trigger_amount: amount,
      })
    }

    /// Execute a sweep request under the reentrancy lock.
    pub fn handle_sweep_request(
      request: SweepRequest<T::AccountId>,
    ) -> Result<SweepOutcome, DispatchError> {
      ensure!(!SweepLock::<T>::get(), Error::<T>::SweepInProgress);
      let destination = Destination::<T>::get().ok_or(Error::<T>::NotDeployed)?;
      Self::deposit_event(Event::SweepTriggered {
        requested_by: request.requested_by,
        trigger_amount: request.trigger_amount,
      });
      SweepLock::<T>::put(true);
      let result = Self::execute_sweep(&destination);
      SweepLock::<T>::kill();
      let outcome = result?;
      log::info!(
        target: LOG_TARGET,
        "sweep executed: {} assets swept, {} failed, {} native",
        outcome.assets_swept,
        outcome.assets_failed,
        outcome.native_swept,
      );
      Self::deposit_event(Event::SweepExecuted {
        assets_swept: outcome.assets_swept,
        assets_failed: outcome.assets_failed,
        native_swept: outcome.native_swept,
      });
      Ok(outcome)
    }

    /// Move every positive included balance, then the native balance, to `destination`.
    ///
    /// The registry is read once up front and each balance right before its transfer. A failing
    /// asset transfer is rolled back on its own storage layer and skipped. A failing native
    /// transfer aborts the sweep and reverts the triggering call; it cannot happen while the
    /// amount is sized by `reducible_balance(Expendable, Polite)`, which already excludes
    /// holds and freezes.
    fn execute_sweep(destination: &T::AccountId) -> Result<SweepOutcome, DispatchError> {
      let custody = Self::account_id();
      let registry = IncludedAssets::<T>::get();
      let mut outcome = SweepOutcome {
        assets_considered: registry.len() as u32,
        ..Default::default()
      };
      for asset in registry {
        let Some(id) = asset.local_id() else {
          continue;
        };
        let amount =
          T::Assets::reducible_balance(id, &custody, Preservation::Expendable, Fortitude::Polite);
        if amount.is_zero() {
          continue;
        }
        let moved = with_storage_layer(|| {
          T::Assets::transfer(id, &custody, destination, amount, Preservation::Expendable)
        });
        match moved {
          Ok(_) => {
            outcome.assets_swept = outcome.assets_swept.saturating_add(1);
            Self::record_swept(asset, amount);
          }
          Err(error) => {
            outcome.assets_failed = outcome.assets_failed.saturating_add(1);
            log::warn!(
              target: LOG_TARGET,
              "skipping {:?}: transfer of {} failed with {:?}",
              asset,
              amount,
              error,
            );
            Self::deposit_event(Event::AssetSweepFailed {
              asset,
              amount,
              error,
            });
          }
        }
      }
      let native_balance =
        T::Currency::reducible_balance(&custody, Preservation::Expendable, Fortitude::Polite);
      if !native_balance.is_zero() {
        T::Currency::transfer(
          &custody,
          destination,
          native_balance,
          Preservation::Expendable,
        )?;
        outcome.native_swept = native_balance;
        Self::record_swept(AssetKind::Native, native_balance);
      }
      Ok(outcome)
    }

    fn record_swept(asset: AssetKind, amount: u128) {
      TotalSwept::<T>::mutate(asset, |total| *total = total.saturating_add(amount));
      Self::deposit_event(Event::AssetSwept { asset, amount });
    }

    #[cfg(any(feature = "try-runtime", test))]
    pub fn do_try_state() -> Result<(), frame::deps::sp_runtime::TryRuntimeError> {
      ensure!(!SweepLock::<T>::get(), "sweep lock held outside a sweep");
      ensure!(
        Owner::<T>::exists() == Destination::<T>::exists(),
        "owner and destination must be set together"
      );
      let assets = IncludedAssets::<T>::get();
      ensure!(
        !assets.iter().any(|asset| asset.is_native()),
        "native asset in sweep registry"
      );
      ensure!(
        assets.iter().all(|asset| asset.canonical() == *asset),
        "non-canonical entry in sweep registry"
      );
      let len = assets.len();
      let mut ids: Vec<u32> = assets.iter().filter_map(|asset| asset.local_id()).collect();
      ids.sort();
      ids.dedup();
      ensure!(ids.len() == len, "duplicate asset id in sweep registry");
      Ok(())
    }
  }

  /// Genesis configuration: optionally constructs the custody account at genesis
  #[pallet::genesis_config]
  #[derive(frame::prelude::DefaultNoBound)]
  pub struct GenesisConfig<T: Config> {
    pub owner: Option<T::AccountId>,
    pub destination: Option<T::AccountId>,
    pub included_assets: Vec<AssetKind>,
    pub active: bool,
  }

  #[pallet::genesis_build]
  impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
    fn build(&self) {
      let (Some(owner), Some(destination)) = (&self.owner, &self.destination) else {
        assert!(
          self.included_assets.is_empty() && !self.active,
          "custody sweep registry configured without owner and destination"
        );
        return;
      };
      Pallet::<T>::initialize(owner.clone(), destination.clone())
        .expect("custody sweep genesis requires a non-zero destination");
      for asset in &self.included_assets {
        Pallet::<T>::do_set_included(*asset, true)
          .expect("custody sweep genesis registry must fit MaxIncludedAssets");
      }
      if self.active {
        Pallet::<T>::set_activation(ActivationState::Active);
      }
    }
  }
}
