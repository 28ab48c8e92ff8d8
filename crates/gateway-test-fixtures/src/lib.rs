//! Feeder gateway replies, grouped by the Starknet version which served them.

macro_rules! str_fixture {
    ($file_name:literal) => {
        include_str!(concat!("../fixtures/", $file_name))
    };
}

/// Replies served before the structured gas prices were introduced.
pub mod old {
    pub mod block {
        pub const LEGACY_GAS_PRICE: &str = str_fixture!("old/block/legacy_gas_price.json");
    }
}

pub mod v0_13_2 {
    pub mod block {
        /// Two transactions: an invoke emitting three events and a reverted
        /// L1 handler emitting none.
        pub const NUMBER_100: &str = str_fixture!("0.13.2/block/100.json");
    }

    pub mod state_update {
        pub const NUMBER_100: &str = str_fixture!("0.13.2/state-update/100.json");
    }

    pub mod signature {
        pub const NUMBER_100: &str = str_fixture!("0.13.2/signature/100.json");
    }

    pub mod class_definition {
        pub const SIERRA: &str = str_fixture!("0.13.2/class/sierra.json");
        pub const CAIRO_0: &str = str_fixture!("0.13.2/class/cairo_0.json");
        pub const CASM: &str = str_fixture!("0.13.2/class/casm.json");
    }
}

pub mod v0_14_0 {
    pub mod block {
        /// Two executed transactions followed by one candidate.
        pub const PRE_CONFIRMED: &str = str_fixture!("0.14.0/block/pre_confirmed.json");
    }
}
