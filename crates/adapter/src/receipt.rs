//! Receipts and their events, messages and execution resources.
use sncore_common::event::Event;
use sncore_common::receipt::{
    BuiltinCounters, ExecutionResources, ExecutionStatus, FeeUnit, GasConsumed, L1Gas,
    L1ToL2Message, L2ToL1Message, Receipt,
};
use sncore_common::Fee;
use sncore_gateway_types::reply::transaction as gw;

/// A missing receipt stays missing.
pub fn adapt_receipt(receipt: Option<gw::Receipt>) -> Option<Receipt> {
    receipt.map(adapt)
}

fn adapt(receipt: gw::Receipt) -> Receipt {
    let execution_status = match receipt.execution_status {
        gw::ExecutionStatus::Reverted => ExecutionStatus::Reverted {
            reason: receipt.revert_error.unwrap_or_default(),
        },
        gw::ExecutionStatus::Succeeded | gw::ExecutionStatus::Rejected => {
            ExecutionStatus::Succeeded
        }
    };

    Receipt {
        transaction_hash: receipt.transaction_hash,
        actual_fee: receipt.actual_fee.unwrap_or(Fee::ZERO),
        // The gateway does not say which unit the fee was paid in.
        fee_unit: FeeUnit::Wei,
        events: receipt
            .events
            .unwrap_or_default()
            .into_iter()
            .map(adapt_event)
            .collect(),
        execution_resources: receipt.execution_resources.map(adapt_execution_resources),
        l1_to_l2_message: receipt.l1_to_l2_consumed_message.map(adapt_l1_to_l2_message),
        l2_to_l1_messages: receipt
            .l2_to_l1_messages
            .unwrap_or_default()
            .into_iter()
            .map(adapt_l2_to_l1_message)
            .collect(),
        execution_status,
    }
}

fn adapt_event(event: gw::Event) -> Event {
    Event {
        data: event.data,
        from_address: event.from_address,
        keys: event.keys,
    }
}

fn adapt_l1_to_l2_message(message: gw::L1ToL2Message) -> L1ToL2Message {
    L1ToL2Message {
        from_address: message.from_address,
        to_address: message.to_address,
        selector: message.selector,
        payload: message.payload,
        nonce: message.nonce,
    }
}

fn adapt_l2_to_l1_message(message: gw::L2ToL1Message) -> L2ToL1Message {
    L2ToL1Message {
        from_address: message.from_address,
        payload: message.payload,
        to_address: message.to_address,
    }
}

fn adapt_execution_resources(resources: gw::ExecutionResources) -> ExecutionResources {
    ExecutionResources {
        builtins: adapt_builtins(resources.builtin_instance_counter),
        n_steps: resources.n_steps,
        n_memory_holes: resources.n_memory_holes,
        data_availability: resources.data_availability.map(|gas| L1Gas {
            l1_gas: gas.l1_gas,
            l1_data_gas: gas.l1_data_gas,
        }),
        total_gas_consumed: resources.total_gas_consumed.map(|gas| GasConsumed {
            l1_gas: gas.l1_gas,
            l1_data_gas: gas.l1_data_gas,
            l2_gas: gas.l2_gas,
        }),
    }
}

fn adapt_builtins(counters: gw::BuiltinCounters) -> BuiltinCounters {
    BuiltinCounters {
        output: counters.output_builtin,
        pedersen: counters.pedersen_builtin,
        range_check: counters.range_check_builtin,
        ecdsa: counters.ecdsa_builtin,
        bitwise: counters.bitwise_builtin,
        ec_op: counters.ec_op_builtin,
        keccak: counters.keccak_builtin,
        poseidon: counters.poseidon_builtin,
        segment_arena: counters.segment_arena_builtin,
        add_mod: counters.add_mod_builtin,
        mul_mod: counters.mul_mod_builtin,
        range_check96: counters.range_check96_builtin,
    }
}
