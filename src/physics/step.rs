//! Gravity integration and platform landing.

use bevy::prelude::*;

use super::aabb::Aabb;

/// Downward acceleration in pixels per tick squared.
pub const GRAVITY: f32 = 0.6;

/// Visible screen size. The vertical extent also bounds every body.
pub const SCREEN_WIDTH: f32 = 1280.0;
pub const SCREEN_HEIGHT: f32 = 720.0;

/// How far a body's bottom may sit from a platform top and still count as
/// standing on it.
pub const GROUND_TOLERANCE: f32 = 6.0;

/// A moving rectangle affected by gravity.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub rect: Aabb,
    /// Vertical velocity, positive is downward.
    pub vel_y: f32,
}

impl Body {
    pub fn new(rect: Aabb) -> Self {
        Self { rect, vel_y: 0.0 }
    }
}

/// Static landing surface.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Platform(pub Aabb);

/// Advance a body by one tick of gravity and resolve landings.
///
/// Returns `true` when the body was snapped onto a platform this tick.
pub fn step_body(body: &mut Body, platforms: &[Aabb]) -> bool {
    body.vel_y += GRAVITY;
    body.rect.y += body.vel_y;

    let mut landed = false;
    for platform in platforms {
        if body.rect.overlaps(platform) && body.vel_y >= 0.0 {
            body.rect.set_bottom(platform.top());
            body.vel_y = 0.0;
            landed = true;
        }
    }

    if body.rect.top() < 0.0 {
        body.rect.set_top(0.0);
        body.vel_y = 0.0;
    } else if body.rect.bottom() > SCREEN_HEIGHT {
        body.rect.set_bottom(SCREEN_HEIGHT);
        body.vel_y = 0.0;
    }

    landed
}

/// Whether `rect` is standing on any platform.
///
/// Independent of [`step_body`]: a small tolerance band around the platform
/// top, with the rectangle's horizontal centre over the platform.
pub fn is_on_ground(rect: &Aabb, platforms: &[Aabb]) -> bool {
    platforms.iter().any(|platform| {
        let top = platform.top();
        let bottom = rect.bottom();
        (top - GROUND_TOLERANCE..=top + GROUND_TOLERANCE).contains(&bottom)
            && platform.left() < rect.center_x()
            && rect.center_x() < platform.right()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ground() -> Aabb {
        Aabb::new(0.0, 680.0, 5120.0, 40.0)
    }

    #[test]
    fn falling_body_lands_on_platform() {
        let mut body = Body::new(Aabb::new(100.0, 500.0, 51.0, 76.0));
        let platforms = [ground()];

        let mut landed_at = None;
        for tick in 0..100 {
            if step_body(&mut body, &platforms) {
                landed_at = Some(tick);
                break;
            }
        }

        assert!(landed_at.is_some());
        assert_eq!(body.rect.bottom(), 680.0);
        assert_eq!(body.vel_y, 0.0);
        assert!(is_on_ground(&body.rect, &platforms));
    }

    #[test]
    fn resting_body_stays_put() {
        let mut body = Body::new(Aabb::new(100.0, 604.0, 51.0, 76.0));
        let platforms = [ground()];

        for _ in 0..10 {
            step_body(&mut body, &platforms);
        }
        assert_eq!(body.rect.y, 604.0);
        assert_eq!(body.vel_y, 0.0);
    }

    #[test]
    fn rising_body_is_not_snapped() {
        // Overlapping the platform while moving up must not land
        let mut body = Body::new(Aabb::new(100.0, 640.0, 51.0, 76.0));
        body.vel_y = -13.0;
        let landed = step_body(&mut body, &[ground()]);
        assert!(!landed);
        assert!(body.vel_y < 0.0);
    }

    #[test]
    fn body_is_clamped_to_screen() {
        let mut body = Body::new(Aabb::new(0.0, 5.0, 10.0, 10.0));
        body.vel_y = -20.0;
        step_body(&mut body, &[]);
        assert_eq!(body.rect.top(), 0.0);
        assert_eq!(body.vel_y, 0.0);

        let mut body = Body::new(Aabb::new(0.0, 705.0, 10.0, 10.0));
        body.vel_y = 10.0;
        step_body(&mut body, &[]);
        assert_eq!(body.rect.bottom(), SCREEN_HEIGHT);
        assert_eq!(body.vel_y, 0.0);
    }

    #[test]
    fn ground_check_uses_tolerance_and_centre() {
        let platforms = [Aabb::new(0.0, 680.0, 200.0, 40.0)];

        assert!(is_on_ground(&Aabb::new(50.0, 600.0, 50.0, 76.0), &platforms));
        assert!(is_on_ground(&Aabb::new(50.0, 609.0, 50.0, 76.0), &platforms));
        assert!(!is_on_ground(&Aabb::new(50.0, 590.0, 50.0, 76.0), &platforms));
        // Centre hangs past the platform edge
        assert!(!is_on_ground(&Aabb::new(180.0, 604.0, 50.0, 76.0), &platforms));
    }
}
