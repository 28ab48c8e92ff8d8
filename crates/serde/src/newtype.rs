use sncore_common::prelude::*;
use sncore_common::Felt;

/// Felt newtypes which can be (de)serialized through a felt adapter such as
/// [DecimalOrHexFelt](crate::DecimalOrHexFelt).
pub trait NewType<T> {
    fn into_inner(self) -> T;
    fn from_inner(inner: T) -> Self;
}

macro_rules! newtype {
    ($target:ty $(,)?) => {
        impl NewType<Felt> for $target {
            fn into_inner(self) -> Felt {
                self.0
            }

            fn from_inner(inner: Felt) -> Self {
                Self(inner)
            }
        }
    };
    ($head:ty, $($tail:ty),+ $(,)?) => {
        newtype!($head);
        newtype!($($tail),+);
    };
}

newtype!(
    AccountDeploymentDataElem,
    CallParam,
    ConstructorParam,
    EventData,
    EventKey,
    L1ToL2MessagePayloadElem,
    L2ToL1MessagePayloadElem,
    PaymasterDataElem,
    TransactionSignatureElem,
);

impl NewType<Felt> for Felt {
    fn into_inner(self) -> Felt {
        self
    }

    fn from_inner(inner: Felt) -> Self {
        inner
    }
}
