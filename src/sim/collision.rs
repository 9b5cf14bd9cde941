//! Collision queries over anything with a bounding rectangle
//!
//! Broad phase is a linear scan: the level has a handful of entities.

use super::rect::Rect;

/// Anything that occupies an axis-aligned rectangle
pub trait Bounded {
    fn rect(&self) -> Rect;
}

impl Bounded for Rect {
    fn rect(&self) -> Rect {
        *self
    }
}

/// Indices of every item overlapping `rect`, in list order
pub fn overlapping<'a, T: Bounded>(
    rect: &'a Rect,
    items: &'a [T],
) -> impl Iterator<Item = usize> + 'a {
    items
        .iter()
        .enumerate()
        .filter(move |(_, item)| rect.intersects(&item.rect()))
        .map(|(i, _)| i)
}

/// Index of the first item overlapping `rect`
///
/// When several items overlap, the lowest index wins. Lists are kept in creation
/// order, so this is the oldest overlapping entity.
pub fn first_hit<T: Bounded>(rect: &Rect, items: &[T]) -> Option<usize> {
    overlapping(rect, items).next()
}

/// Whether the actor came down on `target` from above: still falling, with its
/// bottom edge strictly above the target's vertical midpoint.
#[inline]
pub fn is_stomp(actor: &Rect, velocity_y: f32, target: &Rect) -> bool {
    velocity_y > 0.0 && actor.bottom() < target.center_y()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_hit_prefers_lowest_index() {
        let items = [
            Rect::new(500.0, 0.0, 10.0, 10.0),
            Rect::new(0.0, 0.0, 20.0, 20.0),
            Rect::new(5.0, 5.0, 20.0, 20.0),
        ];
        let probe = Rect::new(8.0, 8.0, 4.0, 4.0);
        assert_eq!(first_hit(&probe, &items), Some(1));
        assert_eq!(overlapping(&probe, &items).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_first_hit_none() {
        let items = [Rect::new(100.0, 100.0, 10.0, 10.0)];
        let probe = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(first_hit(&probe, &items), None);
        assert_eq!(first_hit::<Rect>(&probe, &[]), None);
    }

    #[test]
    fn test_stomp_needs_falling_and_above_center() {
        let agent = Rect::new(0.0, 530.0, 30.0, 30.0); // center_y = 545
        let high = Rect::new(0.0, 480.0, 30.0, 60.0); // bottom 540
        let low = Rect::new(0.0, 490.0, 30.0, 60.0); // bottom 550

        assert!(is_stomp(&high, 3.0, &agent));
        assert!(!is_stomp(&high, 0.0, &agent));
        assert!(!is_stomp(&high, -3.0, &agent));
        assert!(!is_stomp(&low, 3.0, &agent));

        // Exactly at the midpoint is not a stomp
        let level = Rect::new(0.0, 485.0, 30.0, 60.0);
        assert!(!is_stomp(&level, 3.0, &agent));
    }
}
