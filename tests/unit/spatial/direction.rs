//! Tests for the direction table: offsets, bits and opposites

#[cfg(test)]
mod tests {
    use mazewave::Direction;
    use std::collections::HashSet;

    // Tests every direction is the opposite of its opposite
    // Verified by pairing north with east in the table
    #[test]
    fn test_opposite_is_involution() {
        for direction in Direction::ALL {
            assert_ne!(direction.opposite(), direction);
            assert_eq!(direction.opposite().opposite(), direction);
        }
    }

    // Tests opposite offsets cancel out
    // Verified by flipping the sign of the south offset
    #[test]
    fn test_opposite_offsets_cancel() {
        for direction in Direction::ALL {
            let (dx, dy) = direction.offset();
            let (ox, oy) = direction.opposite().offset();
            assert_eq!((dx + ox, dy + oy), (0, 0));
            assert_eq!(dx.abs() + dy.abs(), 1);
        }
    }

    // Tests each direction owns a distinct single wall bit
    // Verified by giving east and west the same bit
    #[test]
    fn test_wall_bits_are_distinct() {
        let bits: HashSet<u8> = Direction::ALL.iter().map(|d| d.bit()).collect();
        assert_eq!(bits.len(), 4);
        for bit in bits {
            assert_eq!(bit.count_ones(), 1);
        }
        let combined = Direction::ALL.iter().fold(0, |acc, d| acc | d.bit());
        assert_eq!(combined, 0b1111);
    }

    // Tests the back-trace preference order
    // Verified by swapping north and east in the order
    #[test]
    fn test_backtrace_order() {
        assert_eq!(
            Direction::BACKTRACE_ORDER,
            [
                Direction::West,
                Direction::North,
                Direction::East,
                Direction::South
            ]
        );
    }

    // Tests north moves towards row 0
    // Verified by inverting the vertical offsets
    #[test]
    fn test_north_decreases_row() {
        assert_eq!(Direction::North.offset(), (0, -1));
        assert_eq!(Direction::East.offset(), (1, 0));
        assert_eq!(Direction::North.to_string(), "north");
        assert_eq!(Direction::West.name(), "west");
    }
}
