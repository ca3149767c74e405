extern crate alloc;

use crate as pallet_custody_sweep;
use polkadot_sdk::frame_support::{
  PalletId, construct_runtime, derive_impl,
  traits::{ConstU32, ConstU128, Get},
};
use polkadot_sdk::frame_system;
use polkadot_sdk::sp_runtime::{
  BuildStorage,
  testing::H256,
  traits::{BlakeTwo256, IdentityLookup},
};
use primitives::{
  TYPE_FOREIGN,
  ecosystem::{
    pallet_ids::CUSTODY_SWEEP_PALLET_ID,
    params::{
      CUSTODY_INITIAL_SUPPLY, CUSTODY_LEDGER_ASSET_ID, CUSTODY_MAX_INCLUDED_ASSETS, PRECISION,
    },
  },
};

pub const OWNER: u64 = 1;
pub const DESTINATION: u64 = 2;
pub const USER: u64 = 3;

pub const UNIT: u128 = PRECISION;

/// The custody ledger's own units
pub const LEDGER: u32 = CUSTODY_LEDGER_ASSET_ID;
pub const ASSET_X: u32 = 1;
pub const ASSET_Y: u32 = 2;
pub const ASSET_Z: u32 = 3;
pub const FOREIGN_ASSET: u32 = TYPE_FOREIGN | 1;

pub const OWNER_NATIVE: u128 = 1_000 * UNIT;
pub const DESTINATION_NATIVE: u128 = 10 * UNIT;
pub const USER_NATIVE: u128 = 1_000 * UNIT;

type Block = frame_system::mocking::MockBlock<Test>;

construct_runtime!(
  pub struct Test {
    System: frame_system,
    Balances: polkadot_sdk::pallet_balances,
    Assets: polkadot_sdk::pallet_assets,
    CustodySweep: pallet_custody_sweep,
  }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
  type Block = Block;
  type AccountId = u64;
  type Lookup = IdentityLookup<Self::AccountId>;
  type Hash = H256;
  type Hashing = BlakeTwo256;
  type AccountData = polkadot_sdk::pallet_balances::AccountData<u128>;
}

impl polkadot_sdk::pallet_balances::Config for Test {
  type MaxLocks = ();
  type MaxReserves = ();
  type ReserveIdentifier = [u8; 8];
  type Balance = u128;
  type DustRemoval = ();
  type RuntimeEvent = RuntimeEvent;
  type ExistentialDeposit = ConstU128<1>;
  type AccountStore = System;
  type WeightInfo = ();
  type FreezeIdentifier = ();
  type MaxFreezes = ();
  type RuntimeHoldReason = ();
  type RuntimeFreezeReason = ();
  type DoneSlashHandler = ();
}

impl polkadot_sdk::pallet_assets::Config for Test {
  type RuntimeEvent = RuntimeEvent;
  type Balance = u128;
  type AssetId = u32;
  type AssetIdParameter = u32;
  type Currency = Balances;
  type CreateOrigin = polkadot_sdk::frame_support::traits::AsEnsureOriginWithArg<
    frame_system::EnsureSigned<Self::AccountId>,
  >;
  type ForceOrigin = frame_system::EnsureRoot<Self::AccountId>;
  type AssetDeposit = ConstU128<1>;
  type AssetAccountDeposit = ConstU128<1>;
  type MetadataDepositBase = ConstU128<1>;
  type MetadataDepositPerByte = ConstU128<1>;
  type ApprovalDeposit = ConstU128<1>;
  type StringLimit = ConstU32<50>;
  type Freezer = ();
  type Extra = ();
  type ReserveData = ();
  type CallbackHandle = ();
  type WeightInfo = ();
  type RemoveItemsLimit = ConstU32<5>;
  type Holder = ();
  #[cfg(feature = "runtime-benchmarks")]
  type BenchmarkHelper = AssetBenchmarkHelper;
}

#[cfg(feature = "runtime-benchmarks")]
pub struct AssetBenchmarkHelper;

#[cfg(feature = "runtime-benchmarks")]
impl polkadot_sdk::pallet_assets::BenchmarkHelper<u32, ()> for AssetBenchmarkHelper {
  fn create_asset_id_parameter(id: u32) -> u32 {
    id
  }
  fn create_reserve_id_parameter(_id: u32) -> () {
    ()
  }
}

pub struct PalletIdStub;
impl Get<PalletId> for PalletIdStub {
  fn get() -> PalletId {
    PalletId(*CUSTODY_SWEEP_PALLET_ID)
  }
}

impl pallet_custody_sweep::Config for Test {
  type Assets = Assets;
  type Currency = Balances;
  type PalletId = PalletIdStub;
  type TriggerAssetId = ConstU32<LEDGER>;
  type InitialSupply = ConstU128<CUSTODY_INITIAL_SUPPLY>;
  type MaxIncludedAssets = ConstU32<CUSTODY_MAX_INCLUDED_ASSETS>;
  type DeployOrigin = frame_system::EnsureSigned<u64>;
  type WeightInfo = ();
  #[cfg(feature = "runtime-benchmarks")]
  type BenchmarkHelper = CustodySweepBenchmarkHelper;
}

#[cfg(feature = "runtime-benchmarks")]
pub struct CustodySweepBenchmarkHelper;

#[cfg(feature = "runtime-benchmarks")]
impl crate::BenchmarkHelper<u64> for CustodySweepBenchmarkHelper {
  fn create_asset(asset_id: u32) -> polkadot_sdk::sp_runtime::DispatchResult {
    if !Assets::asset_exists(asset_id) {
      Assets::force_create(RuntimeOrigin::root(), asset_id, OWNER, true, 1)?;
    }
    Ok(())
  }

  fn fund_asset(
    who: &u64,
    asset_id: u32,
    amount: u128,
  ) -> polkadot_sdk::sp_runtime::DispatchResult {
    use polkadot_sdk::frame_support::traits::fungibles::Mutate;
    Assets::mint_into(asset_id, who, amount)?;
    Ok(())
  }

  fn fund_native(who: &u64, amount: u128) -> polkadot_sdk::sp_runtime::DispatchResult {
    use polkadot_sdk::frame_support::traits::fungible::Mutate;
    Balances::mint_into(who, amount)?;
    Ok(())
  }
}

fn base_storage() -> polkadot_sdk::sp_runtime::Storage {
  let mut t = frame_system::GenesisConfig::<Test>::default()
    .build_storage()
    .unwrap();

  polkadot_sdk::pallet_balances::GenesisConfig::<Test> {
    balances: alloc::vec![
      (OWNER, OWNER_NATIVE),
      (DESTINATION, DESTINATION_NATIVE),
      (USER, USER_NATIVE),
    ],
    ..Default::default()
  }
  .assimilate_storage(&mut t)
  .unwrap();

  // Asset id, owner, sufficient, min_balance
  polkadot_sdk::pallet_assets::GenesisConfig::<Test> {
    assets: alloc::vec![
      (LEDGER, OWNER, true, 1),
      (ASSET_X, OWNER, true, 1),
      (ASSET_Y, OWNER, true, 1),
      (ASSET_Z, OWNER, true, 1),
      (FOREIGN_ASSET, OWNER, true, 1),
    ],
    metadata: alloc::vec![],
    accounts: alloc::vec![],
    reserves: alloc::vec![],
    next_asset_id: None,
  }
  .assimilate_storage(&mut t)
  .unwrap();

  t
}

fn into_ext(t: polkadot_sdk::sp_runtime::Storage) -> polkadot_sdk::sp_io::TestExternalities {
  let mut ext: polkadot_sdk::sp_io::TestExternalities = t.into();
  // Events are not recorded at block 0
  ext.execute_with(|| System::set_block_number(1));
  ext
}

/// Custody constructed at genesis with `OWNER` and `DESTINATION`, trigger disarmed.
pub fn new_test_ext() -> polkadot_sdk::sp_io::TestExternalities {
  let mut t = base_storage();
  pallet_custody_sweep::GenesisConfig::<Test> {
    owner: Some(OWNER),
    destination: Some(DESTINATION),
    included_assets: alloc::vec![],
    active: false,
  }
  .assimilate_storage(&mut t)
  .unwrap();
  into_ext(t)
}

/// Custody not constructed yet, for `deploy` and benchmarks.
pub fn new_undeployed_ext() -> polkadot_sdk::sp_io::TestExternalities {
  let mut t = base_storage();
  pallet_custody_sweep::GenesisConfig::<Test>::default()
    .assimilate_storage(&mut t)
    .unwrap();
  into_ext(t)
}

/// Genesis with a preconfigured registry and an armed trigger.
pub fn new_armed_ext(
  included_assets: alloc::vec::Vec<primitives::AssetKind>,
) -> polkadot_sdk::sp_io::TestExternalities {
  let mut t = base_storage();
  pallet_custody_sweep::GenesisConfig::<Test> {
    owner: Some(OWNER),
    destination: Some(DESTINATION),
    included_assets,
    active: true,
  }
  .assimilate_storage(&mut t)
  .unwrap();
  into_ext(t)
}
