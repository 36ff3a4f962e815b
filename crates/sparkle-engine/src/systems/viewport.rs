use crate::api::types::ElementRect;

/// Rough on-screen test with one element-height of slack above and below:
/// true iff `-height <= top <= height`. Absent elements are never visible.
///
/// Deliberately looser than real intersection so motion starts a little
/// before the element scrolls in and stops a little after it leaves.
pub fn is_within_viewport(rect: Option<ElementRect>) -> bool {
    match rect {
        Some(ElementRect { top, height }) => top <= height && top >= -height,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_element_is_not_visible() {
        assert!(!is_within_viewport(None));
    }

    #[test]
    fn boundaries_are_inclusive() {
        assert!(is_within_viewport(Some(ElementRect::new(500.0, 500.0))));
        assert!(is_within_viewport(Some(ElementRect::new(-500.0, 500.0))));
        assert!(is_within_viewport(Some(ElementRect::new(0.0, 500.0))));
    }

    #[test]
    fn outside_margin_is_not_visible() {
        assert!(!is_within_viewport(Some(ElementRect::new(500.5, 500.0))));
        assert!(!is_within_viewport(Some(ElementRect::new(-500.5, 500.0))));
    }

    #[test]
    fn zero_height_only_at_top_zero() {
        assert!(is_within_viewport(Some(ElementRect::new(0.0, 0.0))));
        assert!(!is_within_viewport(Some(ElementRect::new(1.0, 0.0))));
    }
}
