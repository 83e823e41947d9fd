use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("not enough gold: need {needed}, have {available}")]
pub struct WalletError {
    pub needed: u32,
    pub available: u32,
}

/// Player currencies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wallet {
    pub gold: u32,
    pub quest_points: u32,
}

impl Wallet {
    pub fn deposit(&mut self, gold: u32) {
        self.gold = self.gold.saturating_add(gold);
    }

    pub fn add_quest_points(&mut self, points: u32) {
        self.quest_points = self.quest_points.saturating_add(points);
    }

    /// Removes `amount` gold, or fails leaving the wallet untouched.
    pub fn spend(&mut self, amount: u32) -> Result<(), WalletError> {
        if amount > self.gold {
            return Err(WalletError {
                needed: amount,
                available: self.gold,
            });
        }
        self.gold -= amount;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spend_fails_without_partial_debit() {
        let mut wallet = Wallet::default();
        wallet.deposit(15);

        assert_eq!(
            wallet.spend(20),
            Err(WalletError {
                needed: 20,
                available: 15
            })
        );
        assert_eq!(wallet.gold, 15);
        assert!(wallet.spend(15).is_ok());
        assert_eq!(wallet.gold, 0);
    }
}
