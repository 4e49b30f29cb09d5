/// An axis-aligned bounding rectangle in some CRS's native units.
///
/// Stored as `[min_x, min_y, max_x, max_y]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extent {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Extent {
    pub const fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Convert to a `[min_x, min_y, max_x, max_y]` array.
    pub fn to_array(&self) -> [f64; 4] {
        [self.min_x, self.min_y, self.max_x, self.max_y]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_conversion() {
        let ext = Extent::new(-180.0, -85.0, 180.0, 85.0);
        assert_eq!(ext.min_y, -85.0);
        assert_eq!(ext.to_array(), [-180.0, -85.0, 180.0, 85.0]);
    }
}
