//! Mint rate arithmetic. Every division rounds down.

use cosmwasm_std::{CheckedMultiplyRatioError, Uint128};

/// Fixed-point scale of the mint rate
pub const RATE_SCALE: u128 = 1_000_000_000_000_000_000;

/// Emission the rate may rely on: what the canonical chain reported, capped
/// by what has actually landed here (held now or already paid out).
pub fn accumulated_emission(reported: Uint128, balance: Uint128, paid_out: Uint128) -> Uint128 {
    reported.min(balance.saturating_add(paid_out))
}

/// `min(accumulated * SCALE / fee_basis, balance * SCALE / outstanding)`
///
/// The first term is the historical emission per unit of queued rewards. The
/// second caps it so that paying every outstanding accrual at the returned
/// rate never exceeds `balance`.
pub fn mint_rate(
    accumulated: Uint128,
    fee_basis: Uint128,
    balance: Uint128,
    outstanding: Uint128,
) -> Result<Uint128, CheckedMultiplyRatioError> {
    if fee_basis.is_zero() {
        return Ok(Uint128::zero());
    }
    let rate = accumulated.checked_multiply_ratio(RATE_SCALE, fee_basis)?;
    if outstanding.is_zero() {
        return Ok(rate);
    }
    let covered = balance.checked_multiply_ratio(RATE_SCALE, outstanding)?;
    Ok(rate.min(covered))
}

/// Emission paid for `amount` of accrued rewards at `rate`
pub fn payout(amount: Uint128, rate: Uint128) -> Result<Uint128, CheckedMultiplyRatioError> {
    amount.checked_multiply_ratio(rate, RATE_SCALE)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HALF: u128 = RATE_SCALE / 2;

    #[test]
    fn test_rate_is_historical_ratio_when_funded() {
        let rate = mint_rate(
            Uint128::new(200),
            Uint128::new(400),
            Uint128::new(200),
            Uint128::new(400),
        )
        .unwrap();
        assert_eq!(rate, Uint128::new(HALF));
        assert_eq!(payout(Uint128::new(100), rate).unwrap(), Uint128::new(50));
    }

    #[test]
    fn test_rate_capped_by_balance() {
        // 100 already paid for 100 of basis, then 100 more queued with no new
        // emission: the cumulative ratio (0.5) would overpromise.
        let rate = mint_rate(
            Uint128::new(100),
            Uint128::new(200),
            Uint128::zero(),
            Uint128::new(100),
        )
        .unwrap();
        assert_eq!(rate, Uint128::zero());

        let rate = mint_rate(
            Uint128::new(100),
            Uint128::new(200),
            Uint128::new(30),
            Uint128::new(100),
        )
        .unwrap();
        assert_eq!(rate, Uint128::new(RATE_SCALE * 3 / 10));
    }

    #[test]
    fn test_no_basis_no_rate() {
        let rate = mint_rate(Uint128::new(500), Uint128::zero(), Uint128::new(500), Uint128::zero())
            .unwrap();
        assert!(rate.is_zero());
    }

    #[test]
    fn test_unlanded_emission_is_ignored() {
        assert_eq!(
            accumulated_emission(Uint128::new(200), Uint128::zero(), Uint128::zero()),
            Uint128::zero()
        );
        assert_eq!(
            accumulated_emission(Uint128::new(200), Uint128::new(150), Uint128::new(50)),
            Uint128::new(200)
        );
        assert_eq!(
            accumulated_emission(Uint128::new(200), Uint128::new(500), Uint128::zero()),
            Uint128::new(200)
        );
    }

    #[test]
    fn test_outstanding_payouts_never_exceed_balance() {
        let cases: [(u128, u128, u128, u128); 4] = [
            (1_000, 3, 7, 3),
            (333, 1_000, 1, 999),
            (10, 7, 10, 7),
            (999_999, 1_000_001, 12_345, 1_000_000),
        ];
        for (accumulated, basis, balance, outstanding) in cases {
            let rate = mint_rate(
                Uint128::new(accumulated),
                Uint128::new(basis),
                Uint128::new(balance),
                Uint128::new(outstanding),
            )
            .unwrap();
            let owed = payout(Uint128::new(outstanding), rate).unwrap();
            assert!(owed <= Uint128::new(balance), "{:?}", (accumulated, basis, balance));
        }
    }
}
