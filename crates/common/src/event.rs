use fake::Dummy;

use crate::{ContractAddress, EventData, EventKey};

#[derive(Clone, Debug, PartialEq, Eq, Dummy)]
#[cfg_attr(any(test, feature = "full-serde"), derive(serde::Serialize))]
pub struct Event {
    pub data: Vec<EventData>,
    pub from_address: ContractAddress,
    pub keys: Vec<EventKey>,
}
