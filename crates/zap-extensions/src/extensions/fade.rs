// extensions/fade.rs
//
// Time-based color fades for UI graphics.
//
// A ColorFade is a small state machine the caller advances once per frame
// with the unscaled delta. FadeState drives many of them against a Scene.
//
// Usage:
//   let mut fades = FadeState::new();
//   fades.fade_out(&scene, panel_id, 0.3);
//   fades.tick(clock.unscaled_delta(), &mut scene);

use crate::api::types::EntityId;
use crate::components::graphic::Graphic;
use crate::core::scene::Scene;
use crate::math::color::{ChannelEdit, Color};

/// Result of advancing a fade by one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeStatus {
    Running,
    Finished,
}

/// Fade of a graphic's color from `start` to `target` over `duration` seconds.
///
/// Each advance first writes the color for the time elapsed so far, then
/// adds the frame delta. Once `elapsed` reaches `duration` the exact target
/// is written and the fade reports `Finished`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorFade {
    pub start: Color,
    pub target: Color,
    pub duration: f32,
    pub elapsed: f32,
}

impl ColorFade {
    pub fn new(start: Color, target: Color, duration: f32) -> Self {
        Self {
            start,
            target,
            duration,
            elapsed: 0.0,
        }
    }

    /// Normalized progress [0, 1].
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    /// True once the next advance will write the target and finish.
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    pub fn advance(&mut self, graphic: &mut Graphic, unscaled_dt: f32) -> FadeStatus {
        if self.elapsed < self.duration {
            graphic.color = self.start.lerp(self.target, self.elapsed / self.duration);
            self.elapsed += unscaled_dt;
            FadeStatus::Running
        } else {
            graphic.color = self.target;
            FadeStatus::Finished
        }
    }
}

impl Graphic {
    /// Fade from the current color to `target`.
    pub fn fade_color_to(&self, target: Color, duration: f32) -> ColorFade {
        ColorFade::new(self.color, target, duration)
    }

    /// Fade alpha to 1, keeping RGB.
    pub fn fade_in(&self, duration: f32) -> ColorFade {
        self.fade_color_to(self.color.with_a(1.0), duration)
    }

    /// Fade alpha to 0, keeping RGB.
    pub fn fade_out(&self, duration: f32) -> ColorFade {
        self.fade_color_to(self.color.with_a(0.0), duration)
    }
}

/// Handle to a running fade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FadeId(pub u32);

/// Drives color fades for entities in a scene.
///
/// Fades run in the order they were added. Two fades on one entity both
/// write every tick; the later one wins.
#[derive(Debug, Default)]
pub struct FadeState {
    fades: Vec<(FadeId, EntityId, ColorFade)>,
    next_id: u32,
}

impl FadeState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a fade for an entity. Returns a handle for later control.
    pub fn add(&mut self, entity: EntityId, fade: ColorFade) -> FadeId {
        let id = FadeId(self.next_id);
        self.next_id += 1;
        self.fades.push((id, entity, fade));
        id
    }

    /// Start fading the entity's `Graphic` to `target`.
    /// None if the entity is missing or has no `Graphic`.
    pub fn fade_color_to(
        &mut self,
        scene: &Scene,
        entity: EntityId,
        target: Color,
        duration: f32,
    ) -> Option<FadeId> {
        self.start(scene, entity, |g| g.fade_color_to(target, duration))
    }

    pub fn fade_in(&mut self, scene: &Scene, entity: EntityId, duration: f32) -> Option<FadeId> {
        self.start(scene, entity, |g| g.fade_in(duration))
    }

    pub fn fade_out(&mut self, scene: &Scene, entity: EntityId, duration: f32) -> Option<FadeId> {
        self.start(scene, entity, |g| g.fade_out(duration))
    }

    fn start(
        &mut self,
        scene: &Scene,
        entity: EntityId,
        make: impl FnOnce(&Graphic) -> ColorFade,
    ) -> Option<FadeId> {
        let Some(graphic) = scene.get(entity).and_then(|e| e.get_component::<Graphic>()) else {
            log::warn!("{entity}: no Graphic to fade");
            return None;
        };
        Some(self.add(entity, make(graphic)))
    }

    /// Advance every fade by `unscaled_dt` and write the colors.
    /// Returns the number of fades that finished this tick.
    pub fn tick(&mut self, unscaled_dt: f32, scene: &mut Scene) -> usize {
        let mut finished = 0;
        self.fades.retain_mut(|(id, entity, fade)| {
            let Some(graphic) = scene
                .get_mut(*entity)
                .and_then(|e| e.get_component_mut::<Graphic>())
            else {
                log::warn!("{entity}: fade {} dropped, Graphic is gone", id.0);
                return false;
            };
            match fade.advance(graphic, unscaled_dt) {
                FadeStatus::Running => true,
                FadeStatus::Finished => {
                    log::debug!("{entity}: fade {} finished", id.0);
                    finished += 1;
                    false
                }
            }
        });
        finished
    }

    /// Cancel a fade. The color stays where it is.
    pub fn remove(&mut self, id: FadeId) -> bool {
        let before = self.fades.len();
        self.fades.retain(|(fade_id, _, _)| *fade_id != id);
        self.fades.len() != before
    }

    /// Cancel all fades for an entity.
    pub fn remove_entity(&mut self, entity: EntityId) {
        self.fades.retain(|(_, e, _)| *e != entity);
    }

    pub fn get(&self, id: FadeId) -> Option<&ColorFade> {
        self.fades
            .iter()
            .find(|(fade_id, _, _)| *fade_id == id)
            .map(|(_, _, fade)| fade)
    }

    pub fn is_fading(&self, entity: EntityId) -> bool {
        self.fades.iter().any(|(_, e, _)| *e == entity)
    }

    /// Number of active fades.
    pub fn len(&self) -> usize {
        self.fades.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fades.is_empty()
    }

    pub fn clear(&mut self) {
        self.fades.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::entity::Entity;
    use crate::core::time::FrameClock;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn alpha_fade_over_two_seconds() {
        let mut graphic = Graphic::new(Color::new(1.0, 0.5, 0.25, 0.0));
        let mut fade = graphic.fade_in(2.0);

        assert_eq!(fade.advance(&mut graphic, 1.0), FadeStatus::Running);
        assert_eq!(graphic.color.a, 0.0);

        // Half time reached; this frame writes the halfway color.
        assert_eq!(fade.advance(&mut graphic, 1.0), FadeStatus::Running);
        assert!(approx(graphic.color.a, 0.5), "alpha was {}", graphic.color.a);

        assert_eq!(fade.advance(&mut graphic, 1.0), FadeStatus::Finished);
        assert_eq!(graphic.color.a, 1.0);
        assert_eq!((graphic.color.r, graphic.color.g, graphic.color.b), (1.0, 0.5, 0.25));
    }

    #[test]
    fn fade_to_color_ends_exactly_on_target() {
        let mut graphic = Graphic::new(Color::BLACK);
        let target = Color::new(0.3, 0.6, 0.9, 0.5);
        let mut fade = graphic.fade_color_to(target, 0.5);

        let mut frames = 0;
        while fade.advance(&mut graphic, 0.1) == FadeStatus::Running {
            frames += 1;
            assert!(frames < 100);
        }
        assert_eq!(graphic.color, target);
        assert!(fade.is_finished());
        assert_eq!(fade.progress(), 1.0);
    }

    #[test]
    fn zero_duration_finishes_immediately() {
        let mut graphic = Graphic::default();
        let mut fade = graphic.fade_out(0.0);
        assert_eq!(fade.advance(&mut graphic, 0.016), FadeStatus::Finished);
        assert_eq!(graphic.color, Color::WHITE.with_a(0.0));
    }

    #[test]
    fn state_ticks_scene_graphics() {
        let mut scene = Scene::new();
        let id = scene.spawn(Entity::new(EntityId(1)).with_component(Graphic::new(Color::CLEAR))).unwrap();
        let mut fades = FadeState::new();

        fades.fade_in(&scene, id, 2.0).unwrap();
        assert!(fades.is_fading(id));

        assert_eq!(fades.tick(1.0, &mut scene), 0);
        assert_eq!(fades.tick(1.0, &mut scene), 0);
        let alpha = scene.get(id).unwrap().get_component::<Graphic>().unwrap().color.a;
        assert!(approx(alpha, 0.5));

        assert_eq!(fades.tick(1.0, &mut scene), 1);
        let alpha = scene.get(id).unwrap().get_component::<Graphic>().unwrap().color.a;
        assert_eq!(alpha, 1.0);
        assert!(fades.is_empty());
    }

    #[test]
    fn fades_run_on_unscaled_time() {
        let mut scene = Scene::new();
        let id = scene.spawn(Entity::new(EntityId(1)).with_component(Graphic::default())).unwrap();
        let mut fades = FadeState::new();
        let mut clock = FrameClock::new();
        clock.set_time_scale(0.0);

        fades.fade_out(&scene, id, 0.5).unwrap();
        for _ in 0..10 {
            clock.advance(0.1);
            fades.tick(clock.unscaled_delta(), &mut scene);
        }
        assert!(fades.is_empty());
        let graphic = scene.get(id).unwrap().get_component::<Graphic>().unwrap();
        assert_eq!(graphic.color.a, 0.0);
    }

    #[test]
    fn missing_graphic_is_rejected_or_dropped() {
        let mut scene = Scene::new();
        let bare = scene.spawn(Entity::new(EntityId(1))).unwrap();
        let mut fades = FadeState::new();
        assert!(fades.fade_in(&scene, bare, 1.0).is_none());
        assert!(fades.fade_in(&scene, EntityId(99), 1.0).is_none());

        // Added directly, then the entity disappears.
        fades.add(EntityId(2), ColorFade::new(Color::WHITE, Color::BLACK, 1.0));
        assert_eq!(fades.tick(0.1, &mut scene), 0);
        assert!(fades.is_empty());
    }

    #[test]
    fn remove_and_overlap() {
        let mut scene = Scene::new();
        let id = scene.spawn(Entity::new(EntityId(1)).with_component(Graphic::default())).unwrap();
        let mut fades = FadeState::new();

        let first = fades.fade_out(&scene, id, 1.0).unwrap();
        let second = fades.fade_color_to(&scene, id, Color::BLACK, 1.0).unwrap();
        assert_ne!(first, second);
        assert_eq!(fades.len(), 2);
        assert_eq!(fades.get(second).unwrap().target, Color::BLACK);

        assert!(fades.remove(first));
        assert!(!fades.remove(first));
        assert_eq!(fades.len(), 1);

        fades.remove_entity(id);
        assert!(!fades.is_fading(id));

        fades.fade_in(&scene, id, 1.0);
        fades.clear();
        assert!(fades.is_empty());
    }
}
