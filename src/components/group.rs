use bevy_ecs::prelude::Component;

/// Named set an entity belongs to (e.g. `"player"`, `"coins"`).
#[derive(Component, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Group(String);

impl Group {
    pub fn new(name: impl Into<String>) -> Self {
        Group(name.into())
    }
    pub fn name(&self) -> &str {
        &self.0
    }
}
