/*
    Copyright Michael Lodder. All Rights Reserved.
    SPDX-License-Identifier: Apache-2.0
*/
use unknown_order::BigNumber;

/// `a` \in [1, n)
pub(crate) fn mod_in(a: &BigNumber, n: &BigNumber) -> bool {
    let lhs = &BigNumber::one() <= a;
    let rhs = a < n;
    lhs & rhs
}

/// `a` \in [0, n)
pub(crate) fn residue_in(a: &BigNumber, n: &BigNumber) -> bool {
    let lhs = &BigNumber::zero() <= a;
    let rhs = a < n;
    lhs & rhs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranges() {
        let n = BigNumber::from(77);
        let zero = BigNumber::zero();
        let minus_one = BigNumber::from(-1i64);

        assert!(residue_in(&zero, &n));
        assert!(!mod_in(&zero, &n));
        assert!(mod_in(&BigNumber::from(76), &n));
        assert!(!mod_in(&n, &n));
        assert!(!residue_in(&n, &n));
        assert!(!residue_in(&minus_one, &n));
    }
}
