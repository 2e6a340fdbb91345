//! Point-in-rectangle tests for drop zones.

use std::borrow::Borrow;

use gridwork_core::geometry::Rect;
use gridwork_core::math::Vec2;

/// True if `point` lies within the closed bounds of `rect`.
///
/// A rectangle without positive width and height never matches, since that
/// is how hidden containers report themselves.
pub fn point_in_rect(point: Vec2, rect: &Rect) -> bool {
    !rect.is_empty() && rect.contains(point)
}

/// True if `point` lies in any of `rects`.
pub fn point_in_any<I>(point: Vec2, rects: I) -> bool
where
    I: IntoIterator,
    I::Item: Borrow<Rect>,
{
    rects
        .into_iter()
        .any(|rect| point_in_rect(point, rect.borrow()))
}

/// Index of the first candidate group containing `point`.
///
/// Each group is one target's primary and secondary rectangles. Groups are
/// scanned lazily in order, so earlier groups win when they overlap and later
/// groups are never measured once a match is found.
pub fn first_match<I>(point: Vec2, groups: I) -> Option<usize>
where
    I: IntoIterator,
    I::Item: IntoIterator,
    <I::Item as IntoIterator>::Item: Borrow<Rect>,
{
    groups
        .into_iter()
        .position(|group| point_in_any(point, group))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_on_edges_matches() {
        let rect = Rect::new(10.0, 10.0, 100.0, 20.0);
        assert!(point_in_rect(Vec2::new(10.0, 10.0), &rect));
        assert!(point_in_rect(Vec2::new(110.0, 30.0), &rect));
        assert!(!point_in_rect(Vec2::new(9.9, 15.0), &rect));
        assert!(!point_in_rect(Vec2::new(50.0, 30.1), &rect));
    }

    #[test]
    fn test_zero_size_never_matches() {
        let collapsed_width = Rect::new(0.0, 0.0, 0.0, 100.0);
        let collapsed_height = Rect::new(0.0, 0.0, 100.0, 0.0);
        assert!(!point_in_rect(Vec2::new(0.0, 50.0), &collapsed_width));
        assert!(!point_in_rect(Vec2::new(50.0, 0.0), &collapsed_height));
    }

    #[test]
    fn test_secondary_rect_matches() {
        let rects = [Rect::new(0.0, 0.0, 100.0, 20.0), Rect::new(0.0, 20.0, 100.0, 300.0)];
        assert!(point_in_any(Vec2::new(50.0, 200.0), &rects));
        assert!(!point_in_any(Vec2::new(150.0, 200.0), &rects));
        assert!(!point_in_any(Vec2::new(0.0, 0.0), Vec::<Rect>::new()));
    }

    #[test]
    fn test_first_match_prefers_earlier_group() {
        let shared = Rect::new(0.0, 0.0, 50.0, 50.0);
        let groups = vec![vec![shared], vec![shared], vec![Rect::new(60.0, 0.0, 10.0, 10.0)]];

        assert_eq!(first_match(Vec2::new(25.0, 25.0), &groups), Some(0));
        assert_eq!(first_match(Vec2::new(65.0, 5.0), &groups), Some(2));
        assert_eq!(first_match(Vec2::new(500.0, 5.0), &groups), None);
    }
}
