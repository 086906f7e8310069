//! 4- and 8-neighborhood direction tables over [`glam::IVec2`].

/// 4-directional grid space using the taxicab metric.
pub mod s4 {
    use glam::{IVec2, ivec2};

    /// North, east, south, west, in clock face order.
    pub const DIR: [IVec2; 4] =
        [ivec2(0, -1), ivec2(1, 0), ivec2(0, 1), ivec2(-1, 0)];
}

/// 8-directional grid space using the chessboard metric.
pub mod s8 {
    use glam::{IVec2, ivec2};

    /// 8-dirs in clock face order, starting north.
    pub const DIR: [IVec2; 8] = [
        ivec2(0, -1),
        ivec2(1, -1),
        ivec2(1, 0),
        ivec2(1, 1),
        ivec2(0, 1),
        ivec2(-1, 1),
        ivec2(-1, 0),
        ivec2(-1, -1),
    ];
}

#[cfg(test)]
mod tests {
    use glam::ivec2;

    use super::*;

    #[test]
    fn s8_dirs_are_unit_steps() {
        for d in s8::DIR {
            assert!(d.x.abs() <= 1 && d.y.abs() <= 1);
            assert_ne!(d, ivec2(0, 0));
        }
    }
}
