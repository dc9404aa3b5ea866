pub mod mesh;
pub mod shader;

use anyhow::Result;
use bouncebox::components::{Color, Position, Radius};
use glam::{Mat4, Quat, Vec3};
use hecs::World;
use mesh::{create_cube_outline, create_unit_sphere, Mesh};
use shader::ShaderProgram;

const VERT_SRC: &str = include_str!("../../shaders/body.vert");
const FRAG_SRC: &str = include_str!("../../shaders/body.frag");

const CLEAR_COLOR: Vec3 = Vec3::ZERO;
const LIGHT_DIR: Vec3 = Vec3::new(-0.5, -1.0, -0.7);
const AMBIENT: Vec3 = Vec3::new(0.2, 0.2, 0.2);
const OUTLINE_COLOR: Vec3 = Vec3::new(0.45, 0.45, 0.5);

/// Draws every body entity as a shaded sphere inside the box outline.
pub struct Renderer {
    shader: ShaderProgram,
    sphere: Mesh,
    outline: Mesh,
    box_transform: Mat4,
}

impl Renderer {
    pub fn init(half_extents: Vec3) -> Result<Self> {
        unsafe {
            gl::Enable(gl::DEPTH_TEST);
            gl::ClearColor(CLEAR_COLOR.x, CLEAR_COLOR.y, CLEAR_COLOR.z, 1.0);
        }

        let shader = ShaderProgram::from_sources(VERT_SRC, FRAG_SRC)?;

        Ok(Self {
            shader,
            sphere: create_unit_sphere(16, 32),
            outline: create_cube_outline(),
            box_transform: Mat4::from_scale(half_extents),
        })
    }

    pub fn draw_scene(&mut self, world: &World, view: &Mat4, proj: &Mat4) {
        unsafe {
            gl::Clear(gl::COLOR_BUFFER_BIT | gl::DEPTH_BUFFER_BIT);
        }

        self.shader.bind();
        self.shader.set_mat4("u_view", view);
        self.shader.set_mat4("u_projection", proj);
        self.shader.set_vec3("u_light_dir", LIGHT_DIR);
        self.shader.set_vec3("u_ambient_color", AMBIENT);

        self.shader.set_int("u_unlit", 1);
        self.shader.set_mat4("u_model", &self.box_transform);
        self.shader.set_vec3("u_object_color", OUTLINE_COLOR);
        self.outline.draw();

        self.shader.set_int("u_unlit", 0);
        for (_entity, (position, radius, color)) in
            world.query::<(&Position, &Radius, &Color)>().iter()
        {
            let model = Mat4::from_scale_rotation_translation(
                Vec3::splat(radius.0),
                Quat::IDENTITY,
                position.0,
            );
            self.shader.set_mat4("u_model", &model);
            self.shader.set_vec3("u_object_color", color.0.to_vec3());
            self.sphere.draw();
        }
    }
}
