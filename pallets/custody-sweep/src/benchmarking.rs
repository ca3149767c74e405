extern crate alloc;

use crate::*;
use alloc::vec::Vec;
use polkadot_sdk::frame_benchmarking::v2::*;
use polkadot_sdk::frame_support::traits::{EnsureOrigin, Get, fungible::Inspect};
use polkadot_sdk::frame_system::RawOrigin;
use primitives::{AssetKind, ecosystem::params::CUSTODY_MAX_INCLUDED_ASSETS};

const FUNDING: u128 = 1_000_000_000_000_000;
// Ids well clear of the ledger asset and anything a mock runtime pre-creates
const BENCH_ASSET_BASE: u32 = 10_000;

/// Construct the custody account with the whitelisted caller as owner.
fn deployed<T: Config>() -> (T::AccountId, T::AccountId) {
  let owner: T::AccountId = whitelisted_caller();
  let destination: T::AccountId = account("destination", 0, 0);
  T::BenchmarkHelper::create_asset(T::TriggerAssetId::get()).expect("Failed to create ledger asset");
  T::BenchmarkHelper::fund_native(&destination, FUNDING).expect("Failed to fund destination");
  Pallet::<T>::initialize(owner.clone(), destination.clone()).expect("Failed to deploy custody");
  (owner, destination)
}

#[benchmarks]
mod benches {
  use super::*;

  #[benchmark]
  fn deploy() {
    let origin =
      T::DeployOrigin::try_successful_origin().expect("DeployOrigin has no successful origin");
    let destination: T::AccountId = account("destination", 0, 0);
    T::BenchmarkHelper::create_asset(T::TriggerAssetId::get())
      .expect("Failed to create ledger asset");

    #[extrinsic_call]
    _(origin as T::RuntimeOrigin, destination.clone());

    assert_eq!(Destination::<T>::get(), Some(destination));
  }

  #[benchmark]
  fn activate() {
    let (owner, _) = deployed::<T>();

    #[extrinsic_call]
    _(RawOrigin::Signed(owner));

    assert!(Pallet::<T>::is_active());
  }

  #[benchmark]
  fn deactivate() {
    let (owner, _) = deployed::<T>();
    Pallet::<T>::set_activation(ActivationState::Active);

    #[extrinsic_call]
    _(RawOrigin::Signed(owner));

    assert!(!Pallet::<T>::is_active());
  }

  #[benchmark]
  fn set_included() {
    let (owner, _) = deployed::<T>();
    // Worst case scans a nearly full registry before appending
    let max = T::MaxIncludedAssets::get();
    for i in 0..max.saturating_sub(1) {
      Pallet::<T>::do_set_included(AssetKind::Local(BENCH_ASSET_BASE + i), true)
        .expect("Failed to fill registry");
    }
    let asset = AssetKind::Local(BENCH_ASSET_BASE + max);

    #[extrinsic_call]
    _(RawOrigin::Signed(owner), asset, true);

    assert!(Pallet::<T>::is_included(asset));
  }

  #[benchmark]
  fn batch_set_included(n: Linear<1, { CUSTODY_MAX_INCLUDED_ASSETS }>) {
    let (owner, _) = deployed::<T>();
    let assets: Vec<AssetKind> = (0..n).map(|i| AssetKind::Local(BENCH_ASSET_BASE + i)).collect();

    #[extrinsic_call]
    _(RawOrigin::Signed(owner), assets, true);

    assert_eq!(IncludedAssets::<T>::get().len() as u32, n);
  }

  #[benchmark]
  fn transfer_ownership() {
    let (owner, _) = deployed::<T>();
    let new_owner: T::AccountId = account("new_owner", 0, 0);

    #[extrinsic_call]
    _(RawOrigin::Signed(owner), new_owner.clone());

    assert_eq!(Owner::<T>::get(), Some(new_owner));
  }

  #[benchmark]
  fn transfer() {
    let (owner, _) = deployed::<T>();
    let recipient: T::AccountId = account("recipient", 0, 0);
    T::BenchmarkHelper::fund_asset(&owner, T::TriggerAssetId::get(), FUNDING)
      .expect("Failed to fund owner");
    let amount: u128 = 1_000_000;

    #[extrinsic_call]
    _(RawOrigin::Signed(owner), recipient.clone(), amount);

    assert_eq!(Pallet::<T>::balance_of(&recipient), amount);
  }

  #[benchmark]
  fn deposit_native() {
    deployed::<T>();
    let depositor: T::AccountId = account("depositor", 0, 0);
    T::BenchmarkHelper::fund_native(&depositor, FUNDING).expect("Failed to fund depositor");
    let amount: u128 = FUNDING / 2;

    #[extrinsic_call]
    _(RawOrigin::Signed(depositor), amount);
  }

  #[benchmark]
  fn sweep(n: Linear<0, { CUSTODY_MAX_INCLUDED_ASSETS }>) {
    let (owner, destination) = deployed::<T>();
    let custody = Pallet::<T>::account_id();
    for i in 0..n {
      let asset_id = BENCH_ASSET_BASE + i;
      T::BenchmarkHelper::create_asset(asset_id).expect("Failed to create asset");
      T::BenchmarkHelper::fund_asset(&custody, asset_id, FUNDING).expect("Failed to fund custody");
      Pallet::<T>::do_set_included(AssetKind::Local(asset_id), true)
        .expect("Failed to register asset");
    }
    T::BenchmarkHelper::fund_native(&custody, FUNDING).expect("Failed to fund custody");
    Pallet::<T>::set_activation(ActivationState::Active);
    let request = SweepRequest {
      requested_by: owner,
      trigger_amount: 1,
    };

    #[block]
    {
      Pallet::<T>::handle_sweep_request(request).expect("Sweep failed");
    }

    assert_eq!(TotalSwept::<T>::get(AssetKind::Native), FUNDING);
    assert!(T::Currency::balance(&destination) > FUNDING);
  }

  #[cfg(test)]
  use crate::mock::{Test, new_undeployed_ext};
  #[cfg(test)]
  impl_benchmark_test_suite!(Pallet, new_undeployed_ext(), Test);
}
