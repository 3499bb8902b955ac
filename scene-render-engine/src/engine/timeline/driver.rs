use bevy::prelude::*;
use constants::timeline::AnimatedObject;

use super::scrub::ScrollScrub;
use super::timeline::Timeline;
use crate::engine::assets::scene_models::ModelGroup;

/// Authored timeline plus the smoothed playhead driving it.
#[derive(Resource, Default, Debug)]
pub struct SceneTimeline {
    pub timeline: Timeline,
    pub scrub: ScrollScrub,
}

impl SceneTimeline {
    pub fn current_section(&self) -> u32 {
        self.timeline.section_at(self.scrub.current())
    }
}

/// Whether the user asked for reduced motion. When set, the timeline is
/// never armed and models keep their resting positions.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MotionPreference {
    pub reduced: bool,
}

impl MotionPreference {
    /// Query the browser preference. Without `matchMedia` the timeline stays
    /// armed; native builds always animate.
    pub fn detect() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            use constants::dom::MOTION_ALLOWED_QUERY;

            let allowed = web_sys::window()
                .and_then(|window| window.match_media(MOTION_ALLOWED_QUERY).ok().flatten())
                .is_none_or(|query| query.matches());
            Self { reduced: !allowed }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::default()
        }
    }
}

pub fn motion_allowed(motion: Res<MotionPreference>) -> bool {
    !motion.reduced
}

pub fn advance_scrub(time: Res<Time>, mut timeline: ResMut<SceneTimeline>) {
    timeline.scrub.advance(time.delta_secs());
}

/// Write the pose at the playhead into every model group.
pub fn apply_timeline_pose(
    timeline: Res<SceneTimeline>,
    mut groups: Query<(&ModelGroup, &mut Transform)>,
) {
    let pose = timeline.timeline.pose_at(timeline.scrub.current());

    for (group, mut transform) in &mut groups {
        let Some(position) = AnimatedObject::from_model_name(&group.name)
            .and_then(|object| pose.position(object))
        else {
            continue;
        };
        if transform.translation != position {
            transform.translation = position;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::core::app_state::SceneState;
    use bevy::ecs::system::RunSystemOnce;
    use constants::timeline::{ROCKET_RESTING_POSITION, TREE_RESTING_POSITION};
    use std::time::Duration;

    fn spawn_group(world: &mut World, object: AnimatedObject) -> Entity {
        world
            .spawn((
                ModelGroup {
                    name: object.model_name().to_string(),
                },
                Transform::from_translation(object.resting_position()),
            ))
            .id()
    }

    fn scrub_to(world: &mut World, progress: f32) {
        {
            let mut timeline = world.resource_mut::<SceneTimeline>();
            timeline.scrub.set_target(progress);
            for _ in 0..600 {
                if !timeline.scrub.advance(1.0 / 60.0) {
                    break;
                }
            }
        }
        world.run_system_once(apply_timeline_pose).unwrap();
    }

    /// Runs the timeline systems gated the way the app gates them, with the
    /// scroll already at the end of the page.
    fn run_gated_frames(state: SceneState, motion: MotionPreference) -> (World, Entity, Entity) {
        let mut world = World::new();
        let mut time = Time::<()>::default();
        time.advance_by(Duration::from_secs_f32(1.0 / 60.0));
        world.insert_resource(time);
        world.insert_resource(State::new(state));
        world.insert_resource(motion);
        world.init_resource::<SceneTimeline>();
        world.resource_mut::<SceneTimeline>().scrub.set_target(1.0);
        let rocket = spawn_group(&mut world, AnimatedObject::Rocket);
        let tree = spawn_group(&mut world, AnimatedObject::Tree);

        let mut schedule = Schedule::default();
        schedule.add_systems(
            (advance_scrub, apply_timeline_pose)
                .chain()
                .run_if(motion_allowed)
                .run_if(in_state(SceneState::Running)),
        );
        for _ in 0..120 {
            schedule.run(&mut world);
        }
        (world, rocket, tree)
    }

    #[test]
    fn test_reduced_motion_keeps_resting_positions() {
        let (world, rocket, tree) =
            run_gated_frames(SceneState::Running, MotionPreference { reduced: true });

        assert_eq!(world.resource::<SceneTimeline>().scrub.current(), 0.0);
        assert_eq!(
            world.get::<Transform>(rocket).unwrap().translation,
            ROCKET_RESTING_POSITION
        );
        assert_eq!(
            world.get::<Transform>(tree).unwrap().translation,
            TREE_RESTING_POSITION
        );
    }

    #[test]
    fn test_timeline_waits_for_models_to_load() {
        let (world, rocket, tree) =
            run_gated_frames(SceneState::Loading, MotionPreference::default());

        assert_eq!(
            world.get::<Transform>(rocket).unwrap().translation,
            ROCKET_RESTING_POSITION
        );
        assert_eq!(
            world.get::<Transform>(tree).unwrap().translation,
            TREE_RESTING_POSITION
        );
    }

    #[test]
    fn test_armed_timeline_moves_models() {
        let (world, rocket, _) =
            run_gated_frames(SceneState::Running, MotionPreference::default());

        assert!(world.resource::<SceneTimeline>().scrub.current() > 0.9);
        assert_ne!(
            world.get::<Transform>(rocket).unwrap().translation,
            ROCKET_RESTING_POSITION
        );
    }

    #[test]
    fn test_pose_is_written_to_model_groups() {
        let mut world = World::new();
        world.init_resource::<SceneTimeline>();
        let rocket = spawn_group(&mut world, AnimatedObject::Rocket);
        let tree = spawn_group(&mut world, AnimatedObject::Tree);

        let progress = world
            .resource::<SceneTimeline>()
            .timeline
            .section_end_progress(1);
        scrub_to(&mut world, progress);

        let rocket_position = world.get::<Transform>(rocket).unwrap().translation;
        let tree_position = world.get::<Transform>(tree).unwrap().translation;
        assert!((rocket_position.z - 2.0).abs() < 1e-3);
        assert!((tree_position.x + 5.0).abs() < 1e-3);
    }

    #[test]
    fn test_scrubbing_back_restores_initial_transforms() {
        let mut world = World::new();
        world.init_resource::<SceneTimeline>();
        let rocket = spawn_group(&mut world, AnimatedObject::Rocket);
        let tree = spawn_group(&mut world, AnimatedObject::Tree);

        scrub_to(&mut world, 1.0);
        assert_ne!(
            world.get::<Transform>(rocket).unwrap().translation,
            ROCKET_RESTING_POSITION
        );

        scrub_to(&mut world, 0.0);
        assert_eq!(
            world.get::<Transform>(rocket).unwrap().translation,
            ROCKET_RESTING_POSITION
        );
        assert_eq!(
            world.get::<Transform>(tree).unwrap().translation,
            TREE_RESTING_POSITION
        );
    }

    #[test]
    fn test_unknown_groups_are_left_alone() {
        let mut world = World::new();
        world.init_resource::<SceneTimeline>();
        let house = world
            .spawn((
                ModelGroup {
                    name: "house".to_string(),
                },
                Transform::from_xyz(1.0, 2.0, 3.0),
            ))
            .id();

        scrub_to(&mut world, 0.5);
        assert_eq!(
            world.get::<Transform>(house).unwrap().translation,
            Vec3::new(1.0, 2.0, 3.0)
        );
    }
}
