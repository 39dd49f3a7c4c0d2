use super::constants::{
    PROJECTILE_SCALE_DIVISOR, PROJECTILE_SCALE_MAX, PROJECTILE_SCALE_MIN, PULL_DEAD_ZONE_PX,
    RELEASE_DEBOUNCE_MS,
};
use super::gesture::GestureSample;
use glam::Vec2;

/// Live state of an aim-and-pull interaction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    pub origin: Vec2,
    pub current: Vec2,
    pub pull_distance: f32,
    pub last_pull_distance: f32,
    /// Aim direction in degrees, pointing from the pulled point back
    /// through the origin.
    pub angle_deg: f32,
}

impl DragSession {
    fn new(origin: Vec2) -> Self {
        Self {
            origin,
            current: origin,
            pull_distance: 0.0,
            last_pull_distance: 0.0,
            angle_deg: 0.0,
        }
    }

    fn pull_to(&mut self, point: Vec2) {
        self.current = point;
        self.pull_distance = point.distance(self.origin);
        self.last_pull_distance = self.pull_distance;
        self.angle_deg = aim_angle_deg(self.origin, point);
    }
}

/// Emitted when a draw ends; feeds the burst simulator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Release {
    pub origin: Vec2,
    pub pull_distance: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawState {
    Idle,
    Drawing(DragSession),
    /// Gesture release observed; fires at `deadline_ms` unless a grabbing
    /// sample arrives first.
    PendingRelease {
        session: DragSession,
        deadline_ms: f64,
    },
}

/// Render-facing snapshot of an active draw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawView {
    pub origin: Vec2,
    pub current: Vec2,
    pub line_end: Vec2,
    pub projectile_scale: f32,
    pub angle_deg: f32,
    pub pending_release: bool,
}

/// Idle -> Drawing -> (PendingRelease) -> Idle. Holds at most one drag
/// session at a time.
#[derive(Clone, Debug)]
pub struct InteractionMachine {
    state: DrawState,
}

impl Default for InteractionMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl InteractionMachine {
    pub fn new() -> Self {
        Self {
            state: DrawState::Idle,
        }
    }

    #[inline]
    pub fn state(&self) -> &DrawState {
        &self.state
    }

    pub fn session(&self) -> Option<&DragSession> {
        match &self.state {
            DrawState::Idle => None,
            DrawState::Drawing(s) | DrawState::PendingRelease { session: s, .. } => Some(s),
        }
    }

    fn session_mut(&mut self) -> Option<&mut DragSession> {
        match &mut self.state {
            DrawState::Idle => None,
            DrawState::Drawing(s) | DrawState::PendingRelease { session: s, .. } => Some(s),
        }
    }

    #[inline]
    pub fn is_drawing(&self) -> bool {
        !matches!(self.state, DrawState::Idle)
    }

    /// Open a drag session anchored at `point`. Ignored while a session is
    /// already open. Returns whether a session was started.
    pub fn start_draw(&mut self, point: Vec2) -> bool {
        if self.is_drawing() {
            return false;
        }
        self.state = DrawState::Drawing(DragSession::new(point));
        log::debug!("[draw] start at ({:.0},{:.0})", point.x, point.y);
        true
    }

    /// Move the pulled point. Ignored while idle.
    pub fn update_draw(&mut self, point: Vec2) -> bool {
        match self.session_mut() {
            Some(s) => {
                s.pull_to(point);
                true
            }
            None => false,
        }
    }

    /// Close the session, returning what the burst needs. `None` while idle.
    pub fn end_draw(&mut self) -> Option<Release> {
        let session = *self.session()?;
        self.state = DrawState::Idle;
        log::debug!(
            "[draw] release at ({:.0},{:.0}) pull={:.1}",
            session.origin.x,
            session.origin.y,
            session.last_pull_distance
        );
        Some(Release {
            origin: session.origin,
            pull_distance: session.last_pull_distance,
        })
    }

    /// Drop any session and pending release without producing a burst.
    pub fn cancel(&mut self) {
        if self.is_drawing() {
            log::debug!("[draw] cancelled");
        }
        self.state = DrawState::Idle;
    }

    /// Drive the machine from one gesture frame. A release is debounced by
    /// `RELEASE_DEBOUNCE_MS`: a grabbing sample before the deadline resumes
    /// the draw as if nothing happened. Once the deadline has passed the
    /// release fires, even if this frame is grabbing again.
    pub fn on_gesture_sample(&mut self, sample: &GestureSample, now_ms: f64) -> Option<Release> {
        let grabbing = sample.is_grabbing();
        match self.state {
            DrawState::Idle => {
                if grabbing {
                    self.start_draw(sample.cursor);
                }
                None
            }
            DrawState::Drawing(session) => {
                if grabbing {
                    self.update_draw(sample.cursor);
                } else {
                    self.state = DrawState::PendingRelease {
                        session,
                        deadline_ms: now_ms + RELEASE_DEBOUNCE_MS,
                    };
                }
                None
            }
            DrawState::PendingRelease {
                session,
                deadline_ms,
            } => {
                if now_ms >= deadline_ms {
                    self.end_draw()
                } else if grabbing {
                    self.state = DrawState::Drawing(session);
                    self.update_draw(sample.cursor);
                    None
                } else {
                    None
                }
            }
        }
    }

    pub fn view(&self) -> Option<DrawView> {
        let s = self.session()?;
        Some(DrawView {
            origin: s.origin,
            current: s.current,
            line_end: pull_line_end(s.origin, s.current),
            projectile_scale: projectile_scale(s.pull_distance),
            angle_deg: s.angle_deg,
            pending_release: matches!(self.state, DrawState::PendingRelease { .. }),
        })
    }
}

/// End point of the rendered band. Collapses to the origin inside the dead
/// zone, otherwise shortened by `PULL_DEAD_ZONE_PX` to leave room for the
/// anchor graphic.
pub fn pull_line_end(origin: Vec2, current: Vec2) -> Vec2 {
    let delta = current - origin;
    let d = delta.length();
    if d < PULL_DEAD_ZONE_PX {
        return origin;
    }
    origin + delta * ((d - PULL_DEAD_ZONE_PX) / d)
}

/// Square-root eased scale for the drawn projectile.
#[inline]
pub fn projectile_scale(pull_distance: f32) -> f32 {
    (pull_distance / PROJECTILE_SCALE_DIVISOR)
        .sqrt()
        .clamp(PROJECTILE_SCALE_MIN, PROJECTILE_SCALE_MAX)
}

#[inline]
pub fn aim_angle_deg(origin: Vec2, current: Vec2) -> f32 {
    let aim = origin - current;
    if aim == Vec2::ZERO {
        return 0.0;
    }
    aim.y.atan2(aim.x).to_degrees()
}
