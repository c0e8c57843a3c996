//! Collision integration tests: hitbox placement through the ECS and
//! `CollisionEvent` delivery to observers.

use std::sync::{Arc, Mutex};

use bevy_ecs::prelude::*;

use spritebox::components::group::Group;
use spritebox::components::hitbox::{Hitbox, WorldShape, collides_with_group};
use spritebox::components::mapposition::MapPosition;
use spritebox::components::rotation::Rotation;
use spritebox::components::scale::Scale;
use spritebox::components::sprite::Sprite;
use spritebox::events::collision::{CollisionEvent, observe_collision_log};
use spritebox::spritesheet::SpriteSheet;
use spritebox::systems::collision::{collision_detector, world_shape_of};

type Hits = Arc<Mutex<Vec<(Entity, Entity)>>>;

fn sprite() -> Sprite {
    Sprite::new("box", SpriteSheet::single(32, 32).unwrap())
}

fn make_world() -> (World, Hits) {
    let mut world = World::new();
    let hits: Hits = Arc::new(Mutex::new(Vec::new()));
    let hits_clone = hits.clone();
    world.add_observer(move |trigger: On<CollisionEvent>| {
        let event = trigger.event();
        hits_clone.lock().unwrap().push((event.a, event.b));
    });
    world.add_observer(observe_collision_log);
    world.flush();
    (world, hits)
}

fn spawn_box(world: &mut World, x: f32, y: f32) -> Entity {
    world
        .spawn((MapPosition::new(x, y), sprite(), Hitbox::default_rect()))
        .id()
}

fn tick_collision_detector(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(collision_detector);
    schedule.run(world);
}

fn involves(hits: &Hits, a: Entity, b: Entity) -> bool {
    hits.lock()
        .unwrap()
        .iter()
        .any(|&(x, y)| (x == a && y == b) || (x == b && y == a))
}

#[test]
fn overlapping_boxes_trigger_collision_event() {
    let (mut world, hits) = make_world();
    let a = spawn_box(&mut world, 100.0, 100.0);
    let b = spawn_box(&mut world, 120.0, 100.0);

    tick_collision_detector(&mut world);

    assert_eq!(hits.lock().unwrap().len(), 1);
    assert!(involves(&hits, a, b));
}

#[test]
fn separated_boxes_do_not_collide() {
    let (mut world, hits) = make_world();
    spawn_box(&mut world, 100.0, 100.0);
    spawn_box(&mut world, 140.0, 100.0);

    tick_collision_detector(&mut world);

    assert!(hits.lock().unwrap().is_empty());
}

#[test]
fn touching_boxes_collide() {
    let (mut world, hits) = make_world();
    let a = spawn_box(&mut world, 100.0, 100.0);
    let b = spawn_box(&mut world, 132.0, 100.0);

    tick_collision_detector(&mut world);

    assert!(involves(&hits, a, b));
}

#[test]
fn rotation_widens_the_hitbox() {
    let (mut world, hits) = make_world();
    let a = spawn_box(&mut world, 100.0, 100.0);
    let b = spawn_box(&mut world, 136.0, 100.0);

    tick_collision_detector(&mut world);
    assert!(hits.lock().unwrap().is_empty());

    world.entity_mut(a).insert(Rotation::new(45.0));
    tick_collision_detector(&mut world);
    assert!(involves(&hits, a, b));
}

#[test]
fn scale_grows_frame_sized_hitbox() {
    let (mut world, hits) = make_world();
    let a = spawn_box(&mut world, 100.0, 100.0);
    let b = spawn_box(&mut world, 140.0, 100.0);
    world.entity_mut(a).insert(Scale::uniform(2.0));

    tick_collision_detector(&mut world);

    assert!(involves(&hits, a, b));
}

#[test]
fn custom_rect_ignores_scale() {
    let (mut world, hits) = make_world();
    world.spawn((
        MapPosition::new(100.0, 100.0),
        sprite(),
        Hitbox::rect(16.0, 16.0),
        Scale::uniform(4.0),
    ));
    spawn_box(&mut world, 130.0, 100.0);

    tick_collision_detector(&mut world);

    assert!(hits.lock().unwrap().is_empty());
}

#[test]
fn circle_hits_rectangle() {
    let (mut world, hits) = make_world();
    let circle = world
        .spawn((MapPosition::new(100.0, 100.0), sprite(), Hitbox::circle(10.0)))
        .id();
    let near = spawn_box(&mut world, 120.0, 100.0);
    let far = spawn_box(&mut world, 200.0, 100.0);

    tick_collision_detector(&mut world);

    assert!(involves(&hits, circle, near));
    assert!(!involves(&hits, circle, far));
}

#[test]
fn circle_offset_moves_the_hitbox() {
    let (mut world, hits) = make_world();
    let circle = world
        .spawn((
            MapPosition::new(100.0, 100.0),
            sprite(),
            Hitbox::circle(5.0).with_offset(20, 0),
        ))
        .id();
    let target = spawn_box(&mut world, 140.0, 100.0);

    tick_collision_detector(&mut world);

    assert!(involves(&hits, circle, target));
}

#[test]
fn every_overlapping_pair_is_reported_once() {
    let (mut world, hits) = make_world();
    let a = spawn_box(&mut world, 100.0, 100.0);
    let b = spawn_box(&mut world, 110.0, 100.0);
    let c = spawn_box(&mut world, 120.0, 100.0);

    tick_collision_detector(&mut world);

    assert_eq!(hits.lock().unwrap().len(), 3);
    assert!(involves(&hits, a, b));
    assert!(involves(&hits, a, c));
    assert!(involves(&hits, b, c));
}

#[test]
fn entities_without_hitbox_are_ignored() {
    let (mut world, hits) = make_world();
    spawn_box(&mut world, 100.0, 100.0);
    world.spawn((MapPosition::new(100.0, 100.0), sprite(), Group::new("ghost")));

    tick_collision_detector(&mut world);

    assert!(hits.lock().unwrap().is_empty());
}

#[test]
fn collides_with_group_filters_members() {
    let mut world = World::new();
    let player = spawn_box(&mut world, 100.0, 100.0);
    let enemy_near = spawn_box(&mut world, 110.0, 100.0);
    let enemy_far = spawn_box(&mut world, 300.0, 100.0);
    world.entity_mut(enemy_near).insert(Group::new("enemies"));
    world.entity_mut(enemy_far).insert(Group::new("enemies"));

    let mut query = world.query::<(
        Entity,
        &MapPosition,
        &Hitbox,
        &Sprite,
        Option<&Rotation>,
        Option<&Scale>,
    )>();
    let shapes: Vec<_> = query
        .iter(&world)
        .map(|(e, p, h, s, r, sc)| (e, world_shape_of(p, h, s, r, sc)))
        .collect();
    let player_shape = shapes
        .iter()
        .find(|(e, _)| *e == player)
        .map(|(_, s)| *s)
        .unwrap();
    let enemies: Vec<_> = shapes
        .into_iter()
        .filter(|(e, _)| {
            world
                .get::<Group>(*e)
                .is_some_and(|g| g.name() == "enemies")
        })
        .collect();

    let hit = collides_with_group(player, &player_shape, enemies);
    assert_eq!(hit, vec![enemy_near]);
}

#[test]
fn near_zero_rotation_keeps_axis_aligned_box() {
    let mut world = World::new();
    let mut rotation = Rotation::default();
    rotation.rotate(-1e-6);
    let entity = world
        .spawn((
            MapPosition::new(100.0, 100.0),
            sprite(),
            Hitbox::default_rect(),
            rotation,
        ))
        .id();

    let mut query = world.query::<(&MapPosition, &Hitbox, &Sprite, Option<&Rotation>)>();
    let (position, hitbox, sprite, rotation) = query.get(&world, entity).unwrap();
    let shape = world_shape_of(position, hitbox, sprite, rotation, None);

    match shape {
        WorldShape::Rect { axis_aligned, corners } => {
            assert!(axis_aligned);
            assert_eq!((corners[0].x, corners[0].y), (84.0, 84.0));
        }
        WorldShape::Circle { .. } => panic!("expected a rectangle"),
    }
}
