#![cfg_attr(rustfmt, rustfmt_skip)]
#![allow(unused_parens)]
#![allow(unused_imports)]
#![allow(missing_docs)]

use polkadot_sdk::frame_support::{traits::Get, weights::{Weight, constants::RocksDbWeight}};
use core::marker::PhantomData;

pub trait WeightInfo {
	fn deploy() -> Weight;
	fn activate() -> Weight;
	fn deactivate() -> Weight;
	fn set_included() -> Weight;
	fn batch_set_included(n: u32) -> Weight;
	fn transfer_ownership() -> Weight;
	fn transfer() -> Weight;
	fn deposit_native() -> Weight;
	fn sweep(n: u32) -> Weight;
}

pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: polkadot_sdk::frame_system::Config> WeightInfo for SubstrateWeight<T> {
	fn deploy() -> Weight {
		Weight::from_parts(45_000_000, 3600)
			.saturating_add(T::DbWeight::get().reads(4))
			.saturating_add(T::DbWeight::get().writes(6))
	}
	fn activate() -> Weight {
		Weight::from_parts(12_000_000, 1500)
			.saturating_add(T::DbWeight::get().reads(2))
			.saturating_add(T::DbWeight::get().writes(1))
	}
	fn deactivate() -> Weight {
		Weight::from_parts(12_000_000, 1500)
			.saturating_add(T::DbWeight::get().reads(2))
			.saturating_add(T::DbWeight::get().writes(1))
	}
	fn set_included() -> Weight {
		Weight::from_parts(18_000_000, 2100)
			.saturating_add(T::DbWeight::get().reads(2))
			.saturating_add(T::DbWeight::get().writes(1))
	}
	fn batch_set_included(n: u32) -> Weight {
		Weight::from_parts(16_000_000, 2100)
			.saturating_add(Weight::from_parts(1_500_000, 0).saturating_mul(n.into()))
			.saturating_add(T::DbWeight::get().reads(2))
			.saturating_add(T::DbWeight::get().writes(1))
	}
	fn transfer_ownership() -> Weight {
		Weight::from_parts(12_000_000, 1500)
			.saturating_add(T::DbWeight::get().reads(1))
			.saturating_add(T::DbWeight::get().writes(1))
	}
	fn transfer() -> Weight {
		Weight::from_parts(40_000_000, 3600)
			.saturating_add(T::DbWeight::get().reads(5))
			.saturating_add(T::DbWeight::get().writes(3))
	}
	fn deposit_native() -> Weight {
		Weight::from_parts(35_000_000, 3600)
			.saturating_add(T::DbWeight::get().reads(2))
			.saturating_add(T::DbWeight::get().writes(2))
	}
	fn sweep(n: u32) -> Weight {
		Weight::from_parts(30_000_000, 3600)
			.saturating_add(Weight::from_parts(38_000_000, 2600).saturating_mul(n.into()))
			.saturating_add(T::DbWeight::get().reads(5))
			.saturating_add(T::DbWeight::get().reads((4_u64).saturating_mul(n.into())))
			.saturating_add(T::DbWeight::get().writes(4))
			.saturating_add(T::DbWeight::get().writes((4_u64).saturating_mul(n.into())))
	}
}

impl WeightInfo for () {
	fn deploy() -> Weight {
		Weight::from_parts(45_000_000, 3600)
			.saturating_add(RocksDbWeight::get().reads(4))
			.saturating_add(RocksDbWeight::get().writes(6))
	}
	fn activate() -> Weight {
		Weight::from_parts(12_000_000, 1500)
	}
	fn deactivate() -> Weight {
		Weight::from_parts(12_000_000, 1500)
	}
	fn set_included() -> Weight {
		Weight::from_parts(18_000_000, 2100)
	}
	fn batch_set_included(n: u32) -> Weight {
		Weight::from_parts(16_000_000, 2100)
			.saturating_add(Weight::from_parts(1_500_000, 0).saturating_mul(n.into()))
	}
	fn transfer_ownership() -> Weight {
		Weight::from_parts(12_000_000, 1500)
	}
	fn transfer() -> Weight {
		Weight::from_parts(40_000_000, 3600)
	}
	fn deposit_native() -> Weight {
		Weight::from_parts(35_000_000, 3600)
	}
	fn sweep(n: u32) -> Weight {
		Weight::from_parts(30_000_000, 3600)
			.saturating_add(Weight::from_parts(38_000_000, 2600).saturating_mul(n.into()))
	}
}
