//! Rendering.
//!
//! [`render_system`] owns the frame: it borrows the raylib handle out of the
//! world, draws the world through the follow camera with [`render_pass`] and
//! the screen-space overlay with [`render_debug_ui`], then puts the handle
//! back.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::hitbox::{DebugOutline, Hitbox};
use crate::components::mapposition::MapPosition;
use crate::components::particle::Particle;
use crate::components::rotation::Rotation;
use crate::components::scale::Scale;
use crate::components::sprite::Sprite;
use crate::components::zindex::ZIndex;
use crate::resources::camera::FollowCamera;
use crate::resources::debugmode::{DebugMode, ShowFps};
use crate::resources::gameconfig::GameConfig;
use crate::resources::screenshake::ScreenShake;
use crate::resources::screensize::ScreenSize;
use crate::resources::texturestore::TextureStore;
use crate::resources::worldtime::WorldTime;
use crate::systems::collision::world_shape_of;

const HITBOX_COLOR: Color = Color::RED;
const CIRCLE_HITBOX_COLOR: Color = Color::LIME;

/// Draw one frame.
pub fn render_system(world: &mut World, mut rng: Local<fastrand::Rng>) {
    let Some(mut rl) = world.remove_non_send_resource::<RaylibHandle>() else {
        return;
    };
    let Some(thread) = world.remove_non_send_resource::<RaylibThread>() else {
        world.insert_non_send_resource(rl);
        return;
    };

    let background = world
        .get_resource::<GameConfig>()
        .map(|c| c.background_color())
        .unwrap_or(Color::DARKGRAY);
    let shake = world
        .get_resource::<ScreenShake>()
        .map(|s| s.offset(&mut rng))
        .unwrap_or(Vector2 { x: 0.0, y: 0.0 });
    let camera = match world.get_resource::<FollowCamera>() {
        Some(cam) => cam.to_camera2d(shake),
        None => Camera2D {
            offset: shake,
            target: Vector2 { x: 0.0, y: 0.0 },
            rotation: 0.0,
            zoom: 1.0,
        },
    };

    {
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(background);
        {
            let mut d2 = d.begin_mode2D(camera);
            render_pass(world, &mut d2, camera);
        }
        render_debug_ui(world, &mut d);
    }

    world.insert_non_send_resource(thread);
    world.insert_non_send_resource(rl);
}

/// Visible world rectangle for `camera`.
fn view_rect(camera: Camera2D, screen: ScreenSize) -> Rectangle {
    Rectangle {
        x: camera.target.x - camera.offset.x,
        y: camera.target.y - camera.offset.y,
        width: screen.w as f32,
        height: screen.h as f32,
    }
}

/// Draw sprites sorted by [`ZIndex`], then particles, then (with
/// [`DebugMode`]) hitboxes and entity centers.
pub fn render_pass(world: &mut World, d2: &mut RaylibMode2D<RaylibDrawHandle>, camera: Camera2D) {
    let screen = world
        .get_resource::<ScreenSize>()
        .copied()
        .unwrap_or(ScreenSize { w: 800, h: 600 });
    let view = view_rect(camera, screen);

    let mut to_draw: Vec<(Sprite, MapPosition, f32, Vector2, ZIndex)> = {
        let mut q = world.query::<(
            &Sprite,
            &MapPosition,
            Option<&Rotation>,
            Option<&Scale>,
            Option<&ZIndex>,
        )>();
        q.iter(world)
            .filter_map(|(s, p, r, sc, z)| {
                let degrees = r.map(|r| r.degrees).unwrap_or(0.0);
                let scale = sc.map(|sc| sc.scale).unwrap_or(Vector2 { x: 1.0, y: 1.0 });
                if s.is_on_screen(p, degrees, scale, view) {
                    Some((s.clone(), *p, degrees, scale, z.copied().unwrap_or_default()))
                } else {
                    None
                }
            })
            .collect()
    };

    to_draw.sort_by_key(|(_, _, _, _, z)| *z);

    if let Some(textures) = world.get_resource::<TextureStore>() {
        for (sprite, pos, degrees, scale, _z) in to_draw.iter() {
            let (Some(tex), Some(src)) = (textures.get(&sprite.tex_key), sprite.source_rect())
            else {
                continue;
            };
            let center = pos.snapped();
            let size = sprite.frame_size();
            let dest = Rectangle {
                x: center.x,
                y: center.y,
                width: size.x * scale.x,
                height: size.y * scale.y,
            };
            let origin = Vector2 {
                x: dest.width / 2.0,
                y: dest.height / 2.0,
            };
            // raylib turns clockwise for positive angles.
            d2.draw_texture_pro(tex, src, dest, origin, -degrees, Color::WHITE);
        }
    }

    let mut particles = world.query::<(&Particle, &MapPosition)>();
    for (particle, position) in particles.iter(world) {
        d2.draw_circle(
            position.pos.x as i32,
            position.pos.y as i32,
            particle.size,
            particle.color,
        );
    }

    if world.contains_resource::<DebugMode>() {
        render_hitboxes(world, d2);
    }
}

fn render_hitboxes(world: &mut World, d2: &mut RaylibMode2D<RaylibDrawHandle>) {
    let mut colliders = world.query::<(
        &MapPosition,
        &Hitbox,
        &Sprite,
        Option<&Rotation>,
        Option<&Scale>,
    )>();
    for (position, hitbox, sprite, rotation, scale) in colliders.iter(world) {
        match world_shape_of(position, hitbox, sprite, rotation, scale).outline() {
            DebugOutline::Polygon(points) => {
                for i in 0..points.len() {
                    let (x1, y1) = points[i];
                    let (x2, y2) = points[(i + 1) % points.len()];
                    d2.draw_line(x1, y1, x2, y2, HITBOX_COLOR);
                }
            }
            DebugOutline::Circle { center, radius } => {
                d2.draw_circle_lines(center.0, center.1, radius as f32, CIRCLE_HITBOX_COLOR);
            }
        }

        let c = position.snapped();
        let (x, y) = (c.x as i32, c.y as i32);
        d2.draw_line(x - 5, y, x + 5, y, Color::GREEN);
        d2.draw_line(x, y - 5, x, y + 5, Color::GREEN);
    }
}

/// Screen-space overlay: FPS counter and debug info.
pub fn render_debug_ui(world: &mut World, d: &mut RaylibDrawHandle) {
    if world.contains_resource::<ShowFps>() {
        let fps = d.get_fps();
        d.draw_text(&format!("FPS: {}", fps), 10, 10, 20, Color::RAYWHITE);
    }

    if world.contains_resource::<DebugMode>() {
        let screen = world
            .get_resource::<ScreenSize>()
            .copied()
            .unwrap_or(ScreenSize { w: 800, h: 600 });

        d.draw_text("DEBUG MODE (press F11 to toggle)", 10, 40, 10, Color::RAYWHITE);

        let entity_count = world.query::<Entity>().iter(world).count();
        d.draw_text(
            &format!("Entities: {}", entity_count),
            10,
            55,
            10,
            Color::RAYWHITE,
        );

        if let Some(time) = world.get_resource::<WorldTime>() {
            let text = format!(
                "Time: {:.1}s{}",
                time.elapsed,
                if time.paused { " (paused)" } else { "" }
            );
            d.draw_text(&text, 10, 70, 10, Color::RAYWHITE);
        }

        if let Some(cam) = world.get_resource::<FollowCamera>() {
            let cam_text = format!("Camera pos: ({:.1}, {:.1})", cam.x, cam.y);
            d.draw_text(&cam_text, 10, screen.h - 30, 10, Color::RAYWHITE);
        }
    }
}
