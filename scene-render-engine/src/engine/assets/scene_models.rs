use bevy::prelude::*;
use std::collections::HashMap;

/// Root of a loaded model in the lit layer. The timeline drives its transform.
#[derive(Component, Debug, Clone)]
pub struct ModelGroup {
    pub name: String,
}

/// Root of a model's copy in the wire layer; mirrors `source` every frame.
#[derive(Component, Debug, Clone, Copy)]
pub struct WireClone {
    pub source: Entity,
}

/// Scene instance of a model in the lit layer.
#[derive(Component)]
pub struct LitModelScene;

/// Scene instance of a model in the wire layer.
#[derive(Component)]
pub struct WireModelScene;

/// Owns every model handle and the entities spawned for it, replacing
/// ambient registries shared between the loader, renderer and timeline.
#[derive(Resource, Default, Debug)]
pub struct SceneModels {
    pub handles: Vec<(String, Handle<Scene>)>,
    pub groups: HashMap<String, Entity>,
    pub wire_clones: HashMap<String, Entity>,
}

impl SceneModels {
    pub fn handle(&self, name: &str) -> Option<&Handle<Scene>> {
        self.handles
            .iter()
            .find(|(model_name, _)| model_name == name)
            .map(|(_, handle)| handle)
    }

    #[cfg(test)]
    pub fn group(&self, name: &str) -> Option<Entity> {
        self.groups.get(name).copied()
    }
}
