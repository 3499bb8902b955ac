use bevy::prelude::*;
use constants::timeline::{
    AnimatedObject, Axis, DEFAULT_EASE, DEFAULT_TWEEN_DURATION, TIMELINE, TweenSpec,
};

use super::easing::ease;

/// One tween on a single property, in timeline units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: f32,
    pub end: f32,
    pub from: f32,
    pub to: f32,
    pub ease: constants::timeline::Ease,
}

impl Segment {
    fn value_at(&self, time: f32) -> f32 {
        let span = self.end - self.start;
        if span <= 0.0 || time >= self.end {
            return self.to;
        }
        let local = (time - self.start) / span;
        self.from + (self.to - self.from) * ease(self.ease, local)
    }
}

/// Every tween on one object axis, ordered by start time.
#[derive(Debug, Clone, PartialEq)]
pub struct Channel {
    pub object: AnimatedObject,
    pub axis: Axis,
    pub rest: f32,
    pub segments: Vec<Segment>,
}

impl Channel {
    /// The latest segment that has started owns the value; before the first
    /// one the property sits at rest.
    pub fn value_at(&self, time: f32) -> f32 {
        self.segments
            .iter()
            .rev()
            .find(|segment| segment.start <= time)
            .map_or(self.rest, |segment| segment.value_at(time))
    }
}

/// Object positions at one point of the timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelinePose {
    positions: Vec<(AnimatedObject, Vec3)>,
}

impl TimelinePose {
    pub fn position(&self, object: AnimatedObject) -> Option<Vec3> {
        self.positions
            .iter()
            .find(|(posed, _)| *posed == object)
            .map(|(_, position)| *position)
    }
}

/// Multi-section timeline evaluated as a pure function of scroll progress,
/// so scrubbing back and forth always lands on the same pose.
#[derive(Debug, Clone, PartialEq)]
pub struct Timeline {
    channels: Vec<Channel>,
    duration: f32,
}

impl Default for Timeline {
    fn default() -> Self {
        Self::authored()
    }
}

impl Timeline {
    pub fn authored() -> Self {
        Self::from_specs(TIMELINE, AnimatedObject::resting_position)
    }

    /// Build channels from tween specs. A tween starts from the value the
    /// previous tween on the same property ended at, or from rest.
    pub fn from_specs(specs: &[TweenSpec], resting: impl Fn(AnimatedObject) -> Vec3) -> Self {
        let mut ordered: Vec<&TweenSpec> = specs.iter().collect();
        ordered.sort_by_key(|spec| spec.section);

        let mut channels: Vec<Channel> = Vec::new();
        for spec in ordered {
            let index = match channels
                .iter()
                .position(|channel| channel.object == spec.object && channel.axis == spec.axis)
            {
                Some(index) => index,
                None => {
                    channels.push(Channel {
                        object: spec.object,
                        axis: spec.axis,
                        rest: axis_value(resting(spec.object), spec.axis),
                        segments: Vec::new(),
                    });
                    channels.len() - 1
                }
            };

            let channel = &mut channels[index];
            let from = channel
                .segments
                .last()
                .map_or(channel.rest, |segment| segment.to);
            let start = spec.section as f32 * DEFAULT_TWEEN_DURATION;
            channel.segments.push(Segment {
                start,
                end: start + DEFAULT_TWEEN_DURATION,
                from,
                to: spec.value,
                ease: spec.ease.unwrap_or(DEFAULT_EASE),
            });
        }

        let duration = channels
            .iter()
            .flat_map(|channel| channel.segments.iter())
            .fold(0.0_f32, |longest, segment| longest.max(segment.end));

        Self { channels, duration }
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn section_count(&self) -> u32 {
        (self.duration / DEFAULT_TWEEN_DURATION).ceil() as u32
    }

    /// Scroll progress at which `section` finishes.
    #[cfg(test)]
    pub fn section_end_progress(&self, section: u32) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        ((section + 1) as f32 * DEFAULT_TWEEN_DURATION / self.duration).min(1.0)
    }

    /// Section the playhead is in at `progress`; the end of the timeline
    /// belongs to the last section.
    pub fn section_at(&self, progress: f32) -> u32 {
        let time = self.time_at(progress);
        let section = (time / DEFAULT_TWEEN_DURATION).floor() as u32;
        section.min(self.section_count().saturating_sub(1))
    }

    pub fn pose_at(&self, progress: f32) -> TimelinePose {
        let time = self.time_at(progress);

        let positions = AnimatedObject::ALL
            .into_iter()
            .map(|object| {
                let mut position = object.resting_position();
                for channel in self.channels.iter().filter(|channel| channel.object == object) {
                    set_axis_value(&mut position, channel.axis, channel.value_at(time));
                }
                (object, position)
            })
            .collect();

        TimelinePose { positions }
    }

    fn time_at(&self, progress: f32) -> f32 {
        let progress = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };
        progress * self.duration
    }
}

fn axis_value(position: Vec3, axis: Axis) -> f32 {
    match axis {
        Axis::X => position.x,
        Axis::Y => position.y,
        Axis::Z => position.z,
    }
}

fn set_axis_value(position: &mut Vec3, axis: Axis, value: f32) {
    match axis {
        Axis::X => position.x = value,
        Axis::Y => position.y = value,
        Axis::Z => position.z = value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use constants::timeline::{ROCKET_RESTING_POSITION, TREE_RESTING_POSITION};

    fn assert_near(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 1e-4,
            "expected {expected}, got {actual}"
        );
    }

    fn pose(progress: f32) -> (Vec3, Vec3) {
        let pose = Timeline::authored().pose_at(progress);
        (
            pose.position(AnimatedObject::Rocket).unwrap(),
            pose.position(AnimatedObject::Tree).unwrap(),
        )
    }

    #[test]
    fn test_authored_timeline_spans_three_sections() {
        let timeline = Timeline::authored();
        assert_near(timeline.duration(), 3.0);
        assert_eq!(timeline.section_count(), 3);
    }

    #[test]
    fn test_start_of_timeline_is_resting_pose() {
        let (rocket, tree) = pose(0.0);
        assert_eq!(rocket, ROCKET_RESTING_POSITION);
        assert_eq!(tree, TREE_RESTING_POSITION);
    }

    #[test]
    fn test_end_of_section_one() {
        let timeline = Timeline::authored();
        let progress = timeline.section_end_progress(1);
        assert_near(progress, 2.0 / 3.0);

        let (rocket, tree) = pose(progress);
        assert_near(rocket.x, 1.0);
        assert_near(rocket.y, 0.0);
        assert_near(rocket.z, 2.0);
        assert_near(tree.x, -5.0);
    }

    #[test]
    fn test_end_of_section_zero() {
        let (rocket, tree) = pose(1.0 / 3.0);
        assert_near(rocket.x, 1.0);
        assert_near(rocket.z, 0.0);
        assert_near(tree.x, -1.0);
    }

    #[test]
    fn test_end_of_timeline() {
        let (rocket, tree) = pose(1.0);
        assert_near(rocket.x, 1.0);
        assert_near(rocket.y, 4.0);
        assert_near(rocket.z, -1.0);
        assert_near(tree.x, -5.0);
    }

    #[test]
    fn test_tweens_chain_from_previous_value() {
        let timeline = Timeline::authored();
        let rocket_z = timeline
            .channels
            .iter()
            .find(|channel| channel.object == AnimatedObject::Rocket && channel.axis == Axis::Z)
            .unwrap();

        let starts: Vec<(f32, f32)> = rocket_z
            .segments
            .iter()
            .map(|segment| (segment.from, segment.to))
            .collect();
        assert_eq!(starts, vec![(0.0, 2.0), (2.0, -1.0)]);
    }

    #[test]
    fn test_mid_section_uses_section_ease() {
        // Halfway through section one the tree follows power4.in: -1 + (-4 * 0.5^5).
        let (_, tree) = pose(1.5 / 3.0);
        assert_near(tree.x, -1.0 - 4.0 * 0.03125);
    }

    #[test]
    fn test_section_at() {
        let timeline = Timeline::authored();
        assert_eq!(timeline.section_at(0.0), 0);
        assert_eq!(timeline.section_at(0.5), 1);
        assert_eq!(timeline.section_at(0.9), 2);
        assert_eq!(timeline.section_at(1.0), 2);
    }

    #[test]
    fn test_evaluation_is_path_independent() {
        let timeline = Timeline::authored();
        let direct = timeline.pose_at(0.42);

        for progress in [0.9, 0.1, 1.0, 0.0, 0.42] {
            let _ = timeline.pose_at(progress);
        }
        assert_eq!(timeline.pose_at(0.42), direct);
    }

    #[test]
    fn test_progress_outside_range_is_clamped() {
        let timeline = Timeline::authored();
        assert_eq!(timeline.pose_at(-1.0), timeline.pose_at(0.0));
        assert_eq!(timeline.pose_at(4.0), timeline.pose_at(1.0));
        assert_eq!(timeline.pose_at(f32::NAN), timeline.pose_at(0.0));
    }

    #[test]
    fn test_empty_timeline_rests() {
        let timeline = Timeline::from_specs(&[], AnimatedObject::resting_position);
        assert_eq!(timeline.duration(), 0.0);
        assert_eq!(
            timeline.pose_at(0.7).position(AnimatedObject::Rocket),
            Some(ROCKET_RESTING_POSITION)
        );
    }
}
