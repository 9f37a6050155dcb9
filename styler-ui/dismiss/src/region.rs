use iced::{Point, Rectangle};

/// Screen area treated as "inside" an observed panel.
pub trait Region {
    /// Return whether the point lies inside the region.
    fn contains(&self, point: Point) -> bool;
}

impl Region for Rectangle {
    fn contains(&self, point: Point) -> bool {
        Rectangle::contains(self, point)
    }
}

/// A region made of several disjoint rectangles, e.g. a panel body plus its
/// toggle button.
impl<const N: usize> Region for [Rectangle; N] {
    fn contains(&self, point: Point) -> bool {
        self.iter().any(|rect| rect.contains(point))
    }
}
