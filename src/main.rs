//! spritebox demo.
//!
//! Opens a window, generates a small sprite sheet in memory and runs two
//! scenes:
//!
//! - `title`: a single spinning sprite. Space starts, Escape quits.
//! - `play`: an animated player that chases the mouse while the left button
//!   is held, a few bouncing sprites with different hitboxes and a ball with
//!   gravity. Collisions spawn particles and shake the screen. Space toggles
//!   the camera follow, Escape goes back to the title.
//!
//! Hotkeys: F11 hitbox overlay, F1 FPS counter, P pause, F2 JSON snapshots.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use clap::Parser;
use log::{info, warn};
use raylib::prelude::*;
use std::path::PathBuf;

use spritebox::components::animatedsprite::AnimatedSprite;
use spritebox::components::animation::{AnimationManager, play_animation};
use spritebox::components::group::Group;
use spritebox::components::hitbox::Hitbox;
use spritebox::components::mapposition::MapPosition;
use spritebox::components::physicsbody::PhysicsBody;
use spritebox::components::rigidbody::RigidBody;
use spritebox::components::rotation::Rotation;
use spritebox::components::scale::Scale;
use spritebox::components::sprite::Sprite;
use spritebox::events::collision::{CollisionEvent, observe_collision_log};
use spritebox::events::particles::{ParticleBurst, ParticleKind, spawn_particle_burst};
use spritebox::events::scene::observe_scene_change_event;
use spritebox::events::switchdebug::{switch_debug_observer, switch_fps_observer};
use spritebox::resources::camera::FollowCamera;
use spritebox::resources::debugmode::{DebugMode, ShowFps};
use spritebox::resources::gameconfig::{DEFAULT_CONFIG_PATH, GameConfig};
use spritebox::resources::input::InputState;
use spritebox::resources::scene::{SceneHooks, SceneManager};
use spritebox::resources::screenshake::{DEFAULT_SHAKE_FREQUENCY, ScreenShake};
use spritebox::resources::screensize::ScreenSize;
use spritebox::resources::texturestore::TextureStore;
use spritebox::resources::worldtime::WorldTime;
use spritebox::spritesheet::SpriteSheet;
use spritebox::systems::animation::animation;
use spritebox::systems::camera::camera_follow;
use spritebox::systems::collision::collision_detector;
use spritebox::systems::debug::dump_debug_snapshots;
use spritebox::systems::effects::update_screen_shake;
use spritebox::systems::input::{toggle_pause, update_input_state};
use spritebox::systems::movement::movement;
use spritebox::systems::physics::physics_system;
use spritebox::systems::render::render_system;
use spritebox::systems::scene::{check_pending_scene, scene_update};
use spritebox::systems::time::update_world_time;
use spritebox::systems::ttl::ttl_system;

const SHEET_KEY: &str = "blocks";
const FRAME_SIZE: i32 = 32;
const SHEET_FRAMES: i32 = 4;
const PLAYER_SPEED: f32 = 180.0;
const BOUNCER_SPEED: f32 = 120.0;
const COLLISION_COOLDOWN: f32 = 0.25;

/// spritebox demo
#[derive(Parser)]
#[command(version, about = "Sprite, animation and collision demo for spritebox")]
struct Cli {
    /// INI configuration file.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Start with the hitbox overlay enabled.
    #[arg(long)]
    debug: bool,
}

/// Sheet layout and animation templates shared by the scene hooks.
#[derive(Resource)]
struct DemoAssets {
    sheet: SpriteSheet,
    player_animations: AnimationManager,
    bouncer_animations: AnimationManager,
}

/// Marks entities spawned by a scene, despawned when it is left.
#[derive(Component)]
struct SceneEntity;

#[derive(Component)]
struct Player;

#[derive(Component)]
struct Spinner;

#[derive(Component)]
struct Ball;

#[derive(Resource)]
struct QuitRequested;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        warn!("{}; using defaults", e);
    }

    let (mut rl, thread) = raylib::init()
        .size(config.window_width as i32, config.window_height as i32)
        .title(&config.title)
        .build();
    rl.set_target_fps(config.target_fps);
    rl.set_exit_key(None);

    // --------------- Generated sprite sheet ---------------
    let sheet_image = generate_sheet_image();
    let sheet_texture = rl
        .load_texture_from_image(&thread, &sheet_image)
        .expect("Failed to upload the generated sprite sheet");
    let sheet = SpriteSheet::new(
        (FRAME_SIZE * SHEET_FRAMES) as u32,
        FRAME_SIZE as u32,
        FRAME_SIZE as u32,
        FRAME_SIZE as u32,
    )
    .expect("Generated sheet has a valid frame size");

    let mut player_animations = AnimationManager::new();
    player_animations
        .add_animation("walk", &[0, 1, 2, 3], 8.0, true, sheet.frame_count())
        .expect("walk animation");
    player_animations
        .add_animation("idle", &[0], 1.0, true, sheet.frame_count())
        .expect("idle animation");
    let mut bouncer_animations = AnimationManager::new();
    bouncer_animations
        .add_animation("spin", &[3, 2, 1, 0], 6.0, true, sheet.frame_count())
        .expect("spin animation");
    bouncer_animations
        .add_animation("hit", &[1, 3, 1, 3], 12.0, false, sheet.frame_count())
        .expect("hit animation");

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(ScreenSize {
        w: rl.get_screen_width(),
        h: rl.get_screen_height(),
    });
    world.insert_resource(InputState::default());
    world.insert_resource(ScreenShake::default());
    world.insert_resource(FollowCamera::new(config.window_width, config.window_height));
    if cli.debug || config.show_hitboxes {
        world.insert_resource(DebugMode {});
    }
    if config.show_fps {
        world.insert_resource(ShowFps {});
    }
    world.insert_resource(config);

    let mut textures = TextureStore::default();
    textures.insert(SHEET_KEY, sheet_texture);
    world.insert_resource(textures);
    world.insert_resource(DemoAssets {
        sheet,
        player_animations,
        bouncer_animations,
    });

    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    world.spawn(Observer::new(switch_debug_observer));
    world.spawn(Observer::new(switch_fps_observer));
    world.spawn(Observer::new(observe_collision_log));
    world.spawn(Observer::new(collision_feedback));
    world.spawn(Observer::new(spawn_particle_burst));
    world.spawn(Observer::new(observe_scene_change_event));
    world.flush();

    // --------------- Scenes ---------------
    let mut scenes = SceneManager::new();
    scenes.add_scene(
        "title",
        SceneHooks {
            on_enter: Some(world.register_system(enter_title)),
            on_update: Some(world.register_system(update_title)),
            on_exit: Some(world.register_system(despawn_scene_entities)),
        },
    );
    scenes.add_scene(
        "play",
        SceneHooks {
            on_enter: Some(world.register_system(enter_play)),
            on_update: Some(world.register_system(update_play)),
            on_exit: Some(world.register_system(exit_play)),
        },
    );
    scenes.switch_to("title");
    world.insert_resource(scenes);

    let mut update = Schedule::default();
    update.add_systems(update_input_state);
    update.add_systems(toggle_pause.after(update_input_state));
    update.add_systems(dump_debug_snapshots.after(update_input_state));
    update.add_systems(check_pending_scene.after(update_input_state));
    update.add_systems(scene_update.after(check_pending_scene));
    update.add_systems(movement.after(scene_update));
    update.add_systems(physics_system.after(scene_update));
    update.add_systems(ttl_system.after(movement));
    update.add_systems(collision_detector.after(movement).after(physics_system));
    update.add_systems(animation.after(collision_detector));
    update.add_systems(update_screen_shake.after(collision_detector));
    update.add_systems(camera_follow.after(movement));
    update.add_systems(
        render_system
            .after(animation)
            .after(camera_follow)
            .after(update_screen_shake)
            .after(ttl_system),
    );

    update
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<RaylibHandle>()
        .window_should_close()
        && !world.contains_resource::<QuitRequested>()
    {
        let dt = world.non_send_resource::<RaylibHandle>().get_frame_time();
        update_world_time(&mut world, dt);

        update.run(&mut world);

        world.clear_trackers();

        let (w, h) = {
            let rl = world.non_send_resource::<RaylibHandle>();
            (rl.get_screen_width(), rl.get_screen_height())
        };
        let mut screen = world.resource_mut::<ScreenSize>();
        screen.w = w;
        screen.h = h;
    }
    info!("Bye!");
}

/// Four frames of a block with a dot walking around its border.
fn generate_sheet_image() -> Image {
    let mut image = Image::gen_image_color(FRAME_SIZE * SHEET_FRAMES, FRAME_SIZE, Color::BLANK);
    let dots = [(8, 8), (24, 8), (24, 24), (8, 24)];
    for (i, (dx, dy)) in dots.iter().enumerate() {
        let x = i as i32 * FRAME_SIZE;
        image.draw_rectangle(x + 2, 2, FRAME_SIZE - 4, FRAME_SIZE - 4, Color::SKYBLUE);
        image.draw_rectangle(x + 4, 4, FRAME_SIZE - 8, FRAME_SIZE - 8, Color::DARKBLUE);
        image.draw_circle(x + dx, *dy, 4, Color::GOLD);
    }
    image
}

fn scene_sprite(assets: &DemoAssets) -> Sprite {
    Sprite::new(SHEET_KEY, assets.sheet)
}

fn despawn_scene_entities(mut commands: Commands, query: Query<Entity, With<SceneEntity>>) {
    for entity in query.iter() {
        commands.entity(entity).try_despawn();
    }
}

// --------------- title ---------------

fn enter_title(mut commands: Commands, assets: Res<DemoAssets>, screen: Res<ScreenSize>) {
    info!("Title: press Space to play, Escape to quit");
    let mut logo = AnimatedSprite::new(
        scene_sprite(&assets),
        (screen.w / 2) as f32,
        (screen.h / 2) as f32,
    )
    .with_animations(assets.bouncer_animations.clone());
    logo.scale.set_uniform(4.0);
    logo.animations.play("spin", true);
    commands.spawn((logo, Spinner, SceneEntity));
}

fn update_title(
    mut commands: Commands,
    input: Res<InputState>,
    time: Res<WorldTime>,
    mut scenes: ResMut<SceneManager>,
    mut spinners: Query<&mut Rotation, With<Spinner>>,
) {
    for mut rotation in spinners.iter_mut() {
        rotation.rotate(90.0 * time.delta);
    }
    if input.action_advance.just_pressed {
        scenes.switch_to("play");
    } else if input.action_back.just_pressed {
        commands.insert_resource(QuitRequested);
    }
}

// --------------- play ---------------

fn enter_play(
    mut commands: Commands,
    assets: Res<DemoAssets>,
    screen: Res<ScreenSize>,
    mut rng: Local<fastrand::Rng>,
) {
    let (w, h) = (screen.w as f32, screen.h as f32);

    let mut player = AnimatedSprite::new(scene_sprite(&assets), w / 2.0, h / 2.0)
        .with_animations(assets.player_animations.clone())
        .with_zindex(1);
    player.animations.play("idle", true);
    commands.spawn((player, Player, Group::new("player"), SceneEntity));

    let hitboxes = [
        Hitbox::default_rect(),
        Hitbox::circle(14.0),
        Hitbox::rect(20.0, 40.0).with_offset(0, 4),
        Hitbox::circle(10.0).with_offset(6, -6),
    ];
    for (i, hitbox) in hitboxes.into_iter().enumerate() {
        let x = w * (i as f32 + 1.0) / 5.0;
        let y = if i % 2 == 0 { h * 0.25 } else { h * 0.75 };
        let mut bouncer = AnimatedSprite::new(scene_sprite(&assets), x, y)
            .with_animations(assets.bouncer_animations.clone())
            .with_hitbox(hitbox);
        let target = Vector2 {
            x: rng.f32() * w,
            y: rng.f32() * h,
        };
        bouncer
            .body
            .steer_towards(bouncer.position.pos, target, BOUNCER_SPEED);
        if i == 0 {
            bouncer.scale.set_uniform(1.5);
        }
        bouncer.animations.play("spin", true);
        let mut entity = commands.spawn((bouncer, Group::new("bouncer"), SceneEntity));
        if i == 2 {
            entity.insert(Spinner);
        }
    }

    commands.spawn((
        MapPosition::new(w * 0.1, h * 0.1),
        Sprite::new(SHEET_KEY, assets.sheet),
        Hitbox::circle(12.0),
        PhysicsBody::default(),
        Ball,
        Group::new("ball"),
        SceneEntity,
    ));
}

#[allow(clippy::too_many_arguments)]
fn update_play(
    input: Res<InputState>,
    time: Res<WorldTime>,
    screen: Res<ScreenSize>,
    mut camera: ResMut<FollowCamera>,
    mut scenes: ResMut<SceneManager>,
    mut players: Query<
        (Entity, &MapPosition, &mut RigidBody, &mut AnimationManager, &mut Sprite),
        With<Player>,
    >,
    mut wrapping: Query<
        (
            &mut MapPosition,
            &Sprite,
            Option<&mut Rotation>,
            Option<&Scale>,
            Option<&mut AnimationManager>,
            Has<Spinner>,
        ),
        (Without<Player>, Without<Ball>),
    >,
    mut balls: Query<(&mut MapPosition, &mut PhysicsBody), (With<Ball>, Without<Player>)>,
) {
    if input.action_back.just_pressed {
        scenes.switch_to("title");
        return;
    }

    let view_origin = Vector2 {
        x: camera.x.trunc(),
        y: camera.y.trunc(),
    };
    for (entity, position, mut body, mut animations, mut sprite) in players.iter_mut() {
        if input.action_advance.just_pressed {
            if camera.target.is_some() {
                camera.unfollow();
            } else {
                camera.follow(entity, true);
            }
        }

        if input.mouse_left.active {
            let target = Vector2 {
                x: input.mouse_position.x + view_origin.x,
                y: input.mouse_position.y + view_origin.y,
            };
            if position.distance_to_point(target) > 4.0 {
                body.steer_towards(position.snapped(), target, PLAYER_SPEED);
            } else {
                body.set_velocity(Vector2 { x: 0.0, y: 0.0 });
            }
        } else {
            body.set_velocity(Vector2 { x: 0.0, y: 0.0 });
        }

        if body.velocity.x != 0.0 || body.velocity.y != 0.0 {
            let mirror = if body.velocity.x != 0.0 {
                Some(body.velocity.x < 0.0)
            } else {
                None
            };
            play_animation(&mut animations, &mut sprite, "walk", false, mirror);
        } else {
            play_animation(&mut animations, &mut sprite, "idle", false, None);
        }
    }

    let bounds = Rectangle {
        x: view_origin.x,
        y: view_origin.y,
        width: screen.w as f32,
        height: screen.h as f32,
    };
    for (mut position, sprite, rotation, scale, animations, spinning) in wrapping.iter_mut() {
        if let Some(mut animations) = animations {
            resume_spin(&mut animations);
        }
        let degrees = match rotation {
            Some(mut rotation) => {
                if spinning {
                    rotation.rotate(45.0 * time.delta);
                }
                rotation.degrees
            }
            None => 0.0,
        };
        let scale = scale.map(|s| s.scale).unwrap_or(Vector2 { x: 1.0, y: 1.0 });
        if !sprite.is_on_screen(&position, degrees, scale, bounds) {
            sprite.wrap_screen(&mut position, degrees, scale, bounds);
        }
    }

    let floor = (screen.h - FRAME_SIZE / 2) as f32;
    for (mut position, mut body) in balls.iter_mut() {
        if position.pos.y >= floor && body.velocity.y > 0.0 {
            position.pos.y = floor;
            body.bounce(Vector2 { x: 0.0, y: -1.0 });
            if body.velocity.y.abs() < 20.0 {
                body.velocity.y = -300.0;
                body.velocity.x = 80.0;
            }
        }
        if position.pos.x > bounds.x + bounds.width + FRAME_SIZE as f32 {
            position.pos.x = bounds.x - FRAME_SIZE as f32;
        }
    }
}

/// Back to the looping `spin` once a one-shot clip like `hit` has ended.
fn resume_spin(animations: &mut AnimationManager) {
    if animations.is_finished() && animations.has_animation("spin") {
        animations.play("spin", true);
    }
}

fn exit_play(
    mut commands: Commands,
    query: Query<Entity, With<SceneEntity>>,
    mut camera: ResMut<FollowCamera>,
) {
    camera.unfollow();
    camera.x = 0.0;
    camera.y = 0.0;
    for entity in query.iter() {
        commands.entity(entity).try_despawn();
    }
}

/// Particles, screen shake and a push apart for every new collision.
fn collision_feedback(
    trigger: On<CollisionEvent>,
    mut commands: Commands,
    time: Res<WorldTime>,
    mut shake: ResMut<ScreenShake>,
    mut last_hit: Local<f32>,
    mut bodies: Query<(&MapPosition, Option<&mut RigidBody>, Option<&mut AnimationManager>)>,
) {
    let event = trigger.event();
    let (Ok((pos_a, _, _)), Ok((pos_b, _, _))) = (bodies.get(event.a), bodies.get(event.b))
    else {
        return;
    };
    let (a, b) = (pos_a.snapped(), pos_b.snapped());

    for (entity, from, to) in [(event.a, b, a), (event.b, a, b)] {
        if let Ok((_, Some(mut body), animations)) = bodies.get_mut(entity) {
            if body.velocity.x != 0.0 || body.velocity.y != 0.0 {
                body.steer_towards(from, to, BOUNCER_SPEED);
            }
            if let Some(mut animations) = animations {
                if animations.has_animation("hit")
                    && (animations.is_finished() || animations.current_name() != Some("hit"))
                {
                    animations.play("hit", true);
                }
            }
        }
    }

    if time.elapsed - *last_hit < COLLISION_COOLDOWN {
        return;
    }
    *last_hit = time.elapsed;

    let midpoint = Vector2 {
        x: (a.x + b.x) / 2.0,
        y: (a.y + b.y) / 2.0,
    };
    commands.trigger(ParticleBurst {
        kind: ParticleKind::Explosion,
        position: midpoint,
        amount: 24,
    });
    commands.trigger(ParticleBurst {
        kind: ParticleKind::Sparkles,
        position: midpoint,
        amount: 8,
    });
    commands.trigger(ParticleBurst {
        kind: ParticleKind::Smoke,
        position: midpoint,
        amount: 6,
    });
    shake.start(4.0, 0.25, DEFAULT_SHAKE_FREQUENCY);
}
