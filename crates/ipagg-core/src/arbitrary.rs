//! Proptest strategies for [`Cidr`] values.
//!
//! Enabled by the `proptest` feature.

use proptest::prelude::*;

use crate::cidr::Cidr;
use crate::family::Family;

/// Any valid value of family `F`, host bits included.
pub fn cidr<F: Family>() -> impl Strategy<Value = Cidr<F>> {
    (any::<u128>(), 0..=F::BITS)
        .prop_map(|(bits, prefix)| Cidr::from_parts_unchecked(bits & F::MAX, prefix))
}

/// Any value of family `F` with its host bits cleared.
pub fn network<F: Family>() -> impl Strategy<Value = Cidr<F>> {
    cidr::<F>().prop_map(|cidr| cidr.network())
}

/// Aligned values confined to the lowest 256 addresses, so that lists of
/// them overlap and touch often enough to exercise aggregation.
pub fn clustered<F: Family>() -> impl Strategy<Value = Cidr<F>> {
    (0u128..256, (F::BITS - 8)..=F::BITS).prop_map(|(bits, prefix)| {
        Cidr::<F>::from_parts_unchecked(bits, prefix).network()
    })
}

/// Lists of up to `max_len` [`clustered`] values.
pub fn clustered_list<F: Family>(max_len: usize) -> impl Strategy<Value = Vec<Cidr<F>>> {
    proptest::collection::vec(clustered::<F>(), 0..=max_len)
}

/// Like [`clustered`], but with host bits left as drawn.
pub fn unaligned<F: Family>() -> impl Strategy<Value = Cidr<F>> {
    (0u128..256, (F::BITS - 8)..=F::BITS)
        .prop_map(|(bits, prefix)| Cidr::<F>::from_parts_unchecked(bits, prefix))
}

/// Lists of up to `max_len` [`unaligned`] values.
pub fn unaligned_list<F: Family>(max_len: usize) -> impl Strategy<Value = Vec<Cidr<F>>> {
    proptest::collection::vec(unaligned::<F>(), 0..=max_len)
}
