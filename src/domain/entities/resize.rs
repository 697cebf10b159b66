use crate::domain::entities::table::ColumnId;

/// A column-width drag captured at press time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeGesture {
    pub column: ColumnId,
    pub start_x: f64,
    pub start_width: u32,
}

impl ResizeGesture {
    /// Width for the pointer at `x`, never below `min_width`.
    pub fn width_at(&self, x: f64, min_width: u32) -> u32 {
        let width = (f64::from(self.start_width) + (x - self.start_x)).round();
        width.max(f64::from(min_width)) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_follows_pointer_delta() {
        let gesture = ResizeGesture {
            column: ColumnId(1),
            start_x: 100.0,
            start_width: 150,
        };

        assert_eq!(gesture.width_at(100.0, 80), 150);
        assert_eq!(gesture.width_at(142.4, 80), 192);
        assert_eq!(gesture.width_at(-100.0, 80), 80);
    }
}
