use bevy_ecs::prelude::*;
use bevy_utils::HashMap;
use rapier3d::prelude::*;

use crate::math::{to_point, Vec3f};

#[derive(Resource)]
pub struct PhysicsWorld {
    pub bodies: RigidBodySet,
    pub colliders: ColliderSet,
    gravity: Vec3f,
    integration_parameters: IntegrationParameters,
    pipeline: PhysicsPipeline,
    islands: IslandManager,
    broad_phase: BroadPhase,
    narrow_phase: NarrowPhase,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd_solver: CCDSolver,
    query_pipeline: QueryPipeline,
    // Collider -> entity, for resolving pick rays back to the scene.
    entities: HashMap<ColliderHandle, Entity>,
}

impl PhysicsWorld {
    pub fn new(gravity: Vec3f) -> Self {
        Self {
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            gravity,
            integration_parameters: IntegrationParameters::default(),
            pipeline: PhysicsPipeline::new(),
            islands: IslandManager::new(),
            broad_phase: BroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            query_pipeline: QueryPipeline::new(),
            entities: HashMap::new(),
        }
    }

    pub fn update(&mut self, dt: f32) {
        if dt <= f32::EPSILON {
            return;
        }
        self.integration_parameters.dt = dt;
        self.pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.islands,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd_solver,
            Some(&mut self.query_pipeline),
            &(),
            &(),
        );
    }

    pub fn add_body(
        &mut self,
        body: RigidBody,
        collider: Collider,
    ) -> (RigidBodyHandle, ColliderHandle) {
        let body_handle = self.bodies.insert(body);
        let collider_handle =
            self.colliders
                .insert_with_parent(collider, body_handle, &mut self.bodies);
        (body_handle, collider_handle)
    }

    pub fn register_entity(&mut self, collider: ColliderHandle, entity: Entity) {
        self.entities.insert(collider, entity);
    }

    pub fn entity_of(&self, collider: ColliderHandle) -> Option<Entity> {
        self.entities.get(&collider).copied()
    }

    // Resolve a pick ray to the nearest collider, if any.
    pub fn cast_ray(&self, origin: Vec3f, dir: Vec3f, max_toi: f32) -> Option<ColliderHandle> {
        let ray = Ray::new(to_point(origin), dir);
        self.query_pipeline
            .cast_ray(
                &self.bodies,
                &self.colliders,
                &ray,
                max_toi,
                true,
                QueryFilter::default(),
            )
            .map(|(handle, _)| handle)
    }
}
