use crate::api::types::BodyId;
use crate::core::body::Body;

/// Simple body storage using a flat Vec, kept in spawn order.
/// Spawn order matters: the world-position resolution pass walks the list
/// front to back, so parents must be spawned before their satellites.
pub struct Scene {
    bodies: Vec<Body>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            bodies: Vec::with_capacity(16),
        }
    }

    /// Create a scene with a specific body capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bodies: Vec::with_capacity(capacity),
        }
    }

    /// Add a body to the scene.
    pub fn spawn(&mut self, body: Body) {
        self.bodies.push(body);
    }

    /// Remove a body by ID. Returns the removed body if found.
    pub fn despawn(&mut self, id: BodyId) -> Option<Body> {
        self.bodies
            .iter()
            .position(|b| b.id == id)
            .map(|idx| self.bodies.remove(idx))
    }

    /// Get a reference to a body by ID.
    pub fn get(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == id)
    }

    /// Get a mutable reference to a body by ID.
    pub fn get_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.bodies.iter_mut().find(|b| b.id == id)
    }

    /// Find the first body with the given name.
    pub fn find_by_name(&self, name: &str) -> Option<&Body> {
        self.bodies.iter().find(|b| b.name == name)
    }

    /// Find the first body with the given name (mutable).
    pub fn find_by_name_mut(&mut self, name: &str) -> Option<&mut Body> {
        self.bodies.iter_mut().find(|b| b.name == name)
    }

    /// Iterate over all bodies in spawn order.
    pub fn iter(&self) -> impl Iterator<Item = &Body> {
        self.bodies.iter()
    }

    /// Iterate over all bodies mutably, in spawn order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Body> {
        self.bodies.iter_mut()
    }

    /// Number of bodies in the scene.
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Whether the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Clear all bodies.
    pub fn clear(&mut self) {
        self.bodies.clear();
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::body::BodySpec;
    use crate::core::rng::Rng;

    fn spawn_named(scene: &mut Scene, id: u32, name: &str) {
        let spec = BodySpec {
            radius: 1.0,
            semi_major_axis: 10.0,
            eccentricity: 0.0,
            rotation_period: 1.0,
            orbital_period: 100.0,
            axial_tilt: 0.0,
            color: [1.0, 1.0, 1.0],
        };
        let mut rng = Rng::new(id as u64);
        scene.spawn(Body::from_spec(BodyId(id), name, &spec, &mut rng).unwrap());
    }

    #[test]
    fn spawn_and_get() {
        let mut scene = Scene::new();
        spawn_named(&mut scene, 1, "mercury");
        let b = scene.get(BodyId(1)).unwrap();
        assert_eq!(b.name, "mercury");
    }

    #[test]
    fn despawn_removes_body() {
        let mut scene = Scene::new();
        spawn_named(&mut scene, 1, "mercury");
        assert_eq!(scene.len(), 1);
        scene.despawn(BodyId(1));
        assert_eq!(scene.len(), 0);
    }

    #[test]
    fn despawn_preserves_spawn_order() {
        let mut scene = Scene::new();
        spawn_named(&mut scene, 1, "a");
        spawn_named(&mut scene, 2, "b");
        spawn_named(&mut scene, 3, "c");
        scene.despawn(BodyId(2));
        let names: Vec<&str> = scene.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, ["a", "c"]);
    }

    #[test]
    fn find_by_name() {
        let mut scene = Scene::new();
        spawn_named(&mut scene, 1, "sun");
        spawn_named(&mut scene, 2, "earth");
        let earth = scene.find_by_name("earth").unwrap();
        assert_eq!(earth.id, BodyId(2));
    }
}
