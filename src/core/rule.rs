//! The fixed B3/S23 update rule.
//!
//! A dead cell with exactly three live neighbors is born. A live cell with
//! two or three live neighbors survives. Every other cell is dead in the
//! next generation.

/// Neighbor count that brings a dead cell to life.
pub const BIRTH: u8 = 3;

/// Neighbor counts under which a live cell survives.
pub const SURVIVAL: [u8; 2] = [2, 3];

/// Next state of a single cell given its current state and live neighbor count.
#[must_use]
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    if alive {
        SURVIVAL.contains(&neighbors)
    } else {
        neighbors == BIRTH
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_birth() {
        assert!(next_state(false, 3));
        for n in (0..=8).filter(|&n| n != BIRTH) {
            assert!(!next_state(false, n), "dead cell with {n} neighbors must stay dead");
        }
    }

    #[test]
    fn test_survival() {
        for n in 0..=8 {
            assert_eq!(next_state(true, n), matches!(n, 2 | 3), "live cell with {n} neighbors");
        }
    }
}
