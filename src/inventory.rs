// Player inventory
//
// Tracks the keys the player is carrying. The HUD reads it every frame; the
// playfield adds keys on pickup and spends them on the exit door.

use std::fmt;

/// Errors that can occur during inventory operations
#[derive(Debug, Clone, PartialEq)]
pub enum InventoryError {
    /// Tried to use more keys than the player carries
    InsufficientKeys { requested: u32, available: u32 },
}

impl fmt::Display for InventoryError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            InventoryError::InsufficientKeys { requested, available } => {
                write!(f, "Insufficient keys (requested: {}, available: {})", requested, available)
            }
        }
    }
}

impl std::error::Error for InventoryError {}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerInventory {
    keys: u32,
}

impl PlayerInventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn keys(&self) -> u32 {
        self.keys
    }

    pub fn add_keys(&mut self, count: u32) {
        self.keys = self.keys.saturating_add(count);
    }

    /// Spends `count` keys, leaving the inventory untouched on failure
    pub fn use_keys(&mut self, count: u32) -> Result<(), InventoryError> {
        if count > self.keys {
            return Err(InventoryError::InsufficientKeys {
                requested: count,
                available: self.keys,
            });
        }
        self.keys -= count;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_use_keys() {
        let mut inventory = PlayerInventory::new();
        inventory.add_keys(3);
        assert_eq!(inventory.keys(), 3);

        inventory.use_keys(2).unwrap();
        assert_eq!(inventory.keys(), 1);
    }

    #[test]
    fn test_use_too_many_keys_fails() {
        let mut inventory = PlayerInventory::new();
        inventory.add_keys(1);

        let err = inventory.use_keys(4).unwrap_err();
        assert_eq!(err, InventoryError::InsufficientKeys { requested: 4, available: 1 });
        assert_eq!(inventory.keys(), 1);
    }

    #[test]
    fn test_add_keys_saturates() {
        let mut inventory = PlayerInventory::new();
        inventory.add_keys(u32::MAX);
        inventory.add_keys(1);
        assert_eq!(inventory.keys(), u32::MAX);
    }
}
