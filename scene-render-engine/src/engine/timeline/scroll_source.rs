//! Scroll progress sources. On the web the `.page` region's scroll position
//! is sampled by DOM listeners; natively the mouse wheel moves a virtual page.

use bevy::prelude::*;

use super::driver::SceneTimeline;

/// Progress through a page region, 0 when its top meets the viewport top and
/// 1 when its bottom meets the viewport bottom. `region_top` is relative to
/// the viewport, as returned by `getBoundingClientRect`.
pub fn region_progress(region_top: f32, region_height: f32, viewport_height: f32) -> f32 {
    let range = region_height - viewport_height;
    if !range.is_finite() || range <= 0.0 {
        return if region_top < 0.0 { 1.0 } else { 0.0 };
    }
    (-region_top / range).clamp(0.0, 1.0)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn wheel_scroll_input(
    mut wheel_events: EventReader<bevy::input::mouse::MouseWheel>,
    mut timeline: ResMut<SceneTimeline>,
) {
    use bevy::input::mouse::MouseScrollUnit;
    use constants::timeline::{WHEEL_LINE_PROGRESS, WHEEL_PIXEL_PROGRESS};

    for event in wheel_events.read() {
        let step = match event.unit {
            MouseScrollUnit::Line => WHEEL_LINE_PROGRESS,
            MouseScrollUnit::Pixel => WHEEL_PIXEL_PROGRESS,
        };
        // Wheel down scrolls the page forward.
        timeline.scrub.nudge(-event.y * step);
    }
}

/// Progress samples pushed by the DOM listeners, drained once per frame.
#[cfg(target_arch = "wasm32")]
#[derive(Resource, Clone, Default)]
pub struct ScrollQueue(std::sync::Arc<std::sync::Mutex<Vec<f32>>>);

/// DOM listener kept alive for as long as the app runs, removed on exit.
#[cfg(target_arch = "wasm32")]
pub struct ScrollListener {
    closure: wasm_bindgen::closure::Closure<dyn FnMut(web_sys::Event)>,
}

#[cfg(target_arch = "wasm32")]
const LISTENED_EVENTS: [&str; 2] = ["scroll", "resize"];

#[cfg(target_arch = "wasm32")]
pub fn read_page_progress() -> Option<f32> {
    use constants::dom::PAGE_SELECTOR;

    let window = web_sys::window()?;
    let page = window
        .document()?
        .query_selector(PAGE_SELECTOR)
        .ok()
        .flatten()?;
    let rect = page.get_bounding_client_rect();
    let viewport_height = window.inner_height().ok()?.as_f64()?;

    Some(region_progress(
        rect.top() as f32,
        rect.height() as f32,
        viewport_height as f32,
    ))
}

#[cfg(target_arch = "wasm32")]
pub fn setup_scroll_listener(world: &mut World) {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let queue = ScrollQueue::default();
    let sink = queue.0.clone();
    let push = move |progress: f32| {
        if let Ok(mut samples) = sink.lock() {
            samples.push(progress);
        }
    };

    // The page may already be scrolled when the app starts.
    if let Some(progress) = read_page_progress() {
        push(progress);
    }

    let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
        if let Some(progress) = read_page_progress() {
            push(progress);
        }
    }) as Box<dyn FnMut(web_sys::Event)>);

    let Some(window) = web_sys::window() else {
        warn!("No window available, scroll timeline has no input");
        return;
    };

    for event in LISTENED_EVENTS {
        if let Err(error) =
            window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        {
            error!("Failed to register {event} listener: {error:?}");
        }
    }

    world.insert_resource(queue);
    world.insert_non_send_resource(ScrollListener { closure });
}

/// Only the latest sample matters; evaluation is a pure function of progress.
#[cfg(target_arch = "wasm32")]
pub fn drain_scroll_queue(queue: Option<Res<ScrollQueue>>, mut timeline: ResMut<SceneTimeline>) {
    let Some(queue) = queue else {
        return;
    };

    let latest = match queue.0.lock() {
        Ok(mut samples) => samples.drain(..).last(),
        Err(_) => None,
    };

    if let Some(progress) = latest {
        timeline.scrub.set_target(progress);
    }
}

#[cfg(target_arch = "wasm32")]
pub fn remove_scroll_listener(
    mut exit_events: EventReader<AppExit>,
    listener: Option<NonSend<ScrollListener>>,
) {
    use wasm_bindgen::JsCast;

    if exit_events.read().next().is_none() {
        return;
    }
    let (Some(listener), Some(window)) = (listener, web_sys::window()) else {
        return;
    };

    for event in LISTENED_EVENTS {
        let _ = window.remove_event_listener_with_callback(
            event,
            listener.closure.as_ref().unchecked_ref(),
        );
    }
    debug!("Scroll listeners removed");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_progress_spans_scroll_range() {
        // Region of 3000px in an 1000px viewport scrolls through 2000px.
        assert_eq!(region_progress(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(region_progress(-1000.0, 3000.0, 1000.0), 0.5);
        assert_eq!(region_progress(-2000.0, 3000.0, 1000.0), 1.0);
    }

    #[test]
    fn test_region_progress_clamps_outside_region() {
        assert_eq!(region_progress(400.0, 3000.0, 1000.0), 0.0);
        assert_eq!(region_progress(-2500.0, 3000.0, 1000.0), 1.0);
    }

    #[test]
    fn test_region_shorter_than_viewport() {
        assert_eq!(region_progress(0.0, 800.0, 1000.0), 0.0);
        assert_eq!(region_progress(-10.0, 800.0, 1000.0), 1.0);
    }
}
