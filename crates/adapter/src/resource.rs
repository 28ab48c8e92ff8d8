//! Fee market fields of transactions.
use std::collections::HashMap;

use sncore_common::transaction::{DataAvailabilityMode, FeeMarket, ResourceBound, ResourceBounds};
use sncore_common::{ResourceAmount, Tip};
use sncore_crypto::Felt;
use sncore_gateway_types::reply::transaction as gw;

use crate::numeric::felt_to_u64_lossy;

/// `None` means no bounds were recorded, as opposed to an empty table.
pub fn adapt_resource_bounds(
    bounds: Option<&HashMap<gw::Resource, gw::ResourceBound>>,
) -> Option<ResourceBounds> {
    let bounds = bounds?;

    tracing::trace!(resources = bounds.len(), "Adapting resource bounds");

    Some(
        bounds
            .iter()
            .map(|(resource, bound)| ((*resource).into(), adapt_resource_bound(bound)))
            .collect(),
    )
}

pub fn adapt_resource_bound(bound: &gw::ResourceBound) -> ResourceBound {
    ResourceBound {
        max_amount: ResourceAmount(felt_to_u64_lossy(Some(&bound.max_amount))),
        max_price_per_unit: bound.max_price_per_unit,
    }
}

pub fn adapt_tip(tip: Option<&Felt>) -> Tip {
    Tip(felt_to_u64_lossy(tip))
}

/// Transactions predating the fee market publish through L1.
pub fn adapt_data_availability_mode(
    mode: Option<gw::DataAvailabilityMode>,
) -> DataAvailabilityMode {
    mode.map(Into::into).unwrap_or(DataAvailabilityMode::L1)
}

pub(crate) fn adapt_fee_market(tx: &gw::Transaction) -> FeeMarket {
    FeeMarket {
        resource_bounds: adapt_resource_bounds(tx.resource_bounds.as_ref()),
        tip: adapt_tip(tx.tip.as_ref()),
        paymaster_data: tx.paymaster_data.clone().unwrap_or_default(),
        nonce_data_availability_mode: adapt_data_availability_mode(
            tx.nonce_data_availability_mode,
        ),
        fee_data_availability_mode: adapt_data_availability_mode(tx.fee_data_availability_mode),
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use sncore_common::transaction::Resource;
    use sncore_common::ResourcePricePerUnit;

    use super::*;

    proptest! {
        #[test]
        fn max_amount_matches_the_served_string(amount: u64, price: u64) {
            let json = format!(
                r#"{{"max_amount":"{amount:#x}","max_price_per_unit":"{price:#x}"}}"#
            );
            let bound: gw::ResourceBound = serde_json::from_str(&json).unwrap();

            let adapted = adapt_resource_bound(&bound);

            let direct = u64::from_str_radix(&format!("{amount:x}"), 16).unwrap();
            prop_assert_eq!(adapted.max_amount, ResourceAmount(direct));
            prop_assert_eq!(adapted.max_price_per_unit, ResourcePricePerUnit(Felt::from(price)));
        }
    }

    #[test]
    fn missing_bounds_are_not_empty_bounds() {
        assert_eq!(adapt_resource_bounds(None), None);

        let empty = HashMap::new();
        assert_eq!(
            adapt_resource_bounds(Some(&empty)),
            Some(ResourceBounds::default())
        );
    }

    #[test]
    fn every_resource_is_kept() {
        let bound = |amount: u64| gw::ResourceBound {
            max_amount: Felt::from(amount),
            max_price_per_unit: ResourcePricePerUnit(Felt::from(amount * 10)),
        };
        let bounds = HashMap::from([
            (gw::Resource::L1Gas, bound(1)),
            (gw::Resource::L2Gas, bound(2)),
            (gw::Resource::L1DataGas, bound(3)),
        ]);

        let adapted = adapt_resource_bounds(Some(&bounds)).unwrap();

        assert_eq!(adapted.get(Resource::L1Gas).unwrap().max_amount, ResourceAmount(1));
        assert_eq!(adapted.get(Resource::L2Gas).unwrap().max_amount, ResourceAmount(2));
        assert_eq!(
            adapted.get(Resource::L1DataGas).unwrap().max_price_per_unit,
            ResourcePricePerUnit(Felt::from(30u64))
        );
    }

    #[rstest::rstest]
    #[case::absent(None, DataAvailabilityMode::L1)]
    #[case::l1(Some(gw::DataAvailabilityMode::L1), DataAvailabilityMode::L1)]
    #[case::l2(Some(gw::DataAvailabilityMode::L2), DataAvailabilityMode::L2)]
    fn data_availability_mode(
        #[case] mode: Option<gw::DataAvailabilityMode>,
        #[case] expected: DataAvailabilityMode,
    ) {
        assert_eq!(adapt_data_availability_mode(mode), expected);
    }

    #[test]
    fn tip() {
        assert_eq!(adapt_tip(None), Tip(0));
        assert_eq!(adapt_tip(Some(&Felt::from(10u64))), Tip(10));
    }
}
