/// Normalised sub-rectangle of the window a view renders into.
/// `bottom` is measured up from the bottom edge; both are fractions of the height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewLayout {
    pub height: f32,
    pub bottom: f32,
}

impl ViewLayout {
    pub const fn new(height: f32, bottom: f32) -> Self {
        Self { height, bottom }
    }
}

pub const VIEW_COUNT: usize = 2;
pub const LIT_VIEW_INDEX: usize = 0;
pub const WIRE_VIEW_INDEX: usize = 1;

/// Lit view fills the window, wire view is collapsed.
pub const AUTHORED_LAYOUT: [ViewLayout; VIEW_COUNT] =
    [ViewLayout::new(1.0, 0.0), ViewLayout::new(0.0, 0.0)];

/// Lit view on the top half, wire view on the bottom half.
pub const SPLIT_LAYOUT: [ViewLayout; VIEW_COUNT] =
    [ViewLayout::new(0.5, 0.5), ViewLayout::new(0.5, 0.0)];

pub const WIRE_ONLY_LAYOUT: [ViewLayout; VIEW_COUNT] =
    [ViewLayout::new(0.0, 0.0), ViewLayout::new(1.0, 0.0)];
