//! Monetary units used by the parameter tables

/// Signed count of the smallest unit, the same representation transaction
/// outputs carry
pub type Amount = i64;

/// Smallest units in one coin
pub const COIN: Amount = 100_000_000;

/// One hundredth of a coin
pub const CENT: Amount = 1_000_000;

pub mod conversions {
    use super::*;

    /// Format an amount as a human-readable string
    ///
    /// # Examples
    /// ```
    /// use bitwin_chainparams::core::monetary::conversions::format_amount;
    /// assert_eq!(format_amount(100_000_000), "1.00000000 coins");
    /// assert_eq!(format_amount(-50_000_000), "-0.50000000 coins");
    /// ```
    pub fn format_amount(amount: Amount) -> String {
        let sign = if amount < 0 { "-" } else { "" };
        let abs = amount.unsigned_abs();
        let coin = COIN as u64;
        format!("{sign}{}.{:08} coins", abs / coin, abs % coin)
    }

    /// Whole coins to smallest units, saturating at the type bounds
    pub fn coins(n: i64) -> Amount {
        n.saturating_mul(COIN)
    }
}

#[cfg(test)]
mod tests {
    use super::conversions::*;
    use super::*;

    #[test]
    fn test_monetary_constants() {
        assert_eq!(COIN, 100_000_000);
        assert_eq!(CENT * 100, COIN);
    }

    #[test]
    fn test_formatting() {
        assert_eq!(format_amount(COIN), "1.00000000 coins");
        assert_eq!(format_amount(COIN / 2), "0.50000000 coins");
        assert_eq!(format_amount(6_998_995 * COIN), "6998995.00000000 coins");
        assert_eq!(format_amount(0), "0.00000000 coins");
    }

    #[test]
    fn test_coins_saturates() {
        assert_eq!(coins(21_000_000), 21_000_000 * COIN);
        assert_eq!(coins(i64::MAX), i64::MAX);
    }
}
