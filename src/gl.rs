//! WebGL bootstrap for a single full-screen shader pass.
//!
//! `GlProgram` owns everything the stateful GL API otherwise keeps as
//! implicit globals: the context, the linked program, the quad buffer, the
//! optional canvas texture and the uniform table. The program is bound once
//! at construction and never swapped, so every setter targets it.

use crate::error::EffectError;
use fnv::FnvHashMap;
use ghost_core::uniforms::{uniform_base_name, A_POSITION};
use ghost_core::{QUAD_VERTEX_COUNT, QUAD_VERTICES};
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;
use web_sys::WebGlRenderingContext as GL;

/// Active uniforms of a linked program, by name.
pub struct UniformTable {
    locations: FnvHashMap<String, web::WebGlUniformLocation>,
}

impl UniformTable {
    pub fn from_program(gl: &GL, program: &web::WebGlProgram) -> Self {
        let count = gl
            .get_program_parameter(program, GL::ACTIVE_UNIFORMS)
            .as_f64()
            .unwrap_or(0.0) as u32;
        let mut locations = FnvHashMap::default();
        for index in 0..count {
            let Some(info) = gl.get_active_uniform(program, index) else {
                continue;
            };
            let name = info.name();
            if let Some(loc) = gl.get_uniform_location(program, &name) {
                locations.insert(uniform_base_name(&name).to_string(), loc);
            }
        }
        Self { locations }
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<&web::WebGlUniformLocation> {
        self.locations.get(name)
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}

fn compile_shader(gl: &GL, stage: u32, source: &str) -> Result<web::WebGlShader, EffectError> {
    let stage_name = if stage == GL::VERTEX_SHADER {
        "vertex"
    } else {
        "fragment"
    };
    let shader = gl
        .create_shader(stage)
        .ok_or(EffectError::ResourceCreation("shader"))?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);
    if gl
        .get_shader_parameter(&shader, GL::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        Ok(shader)
    } else {
        let log = gl.get_shader_info_log(&shader).unwrap_or_default();
        gl.delete_shader(Some(&shader));
        Err(EffectError::ShaderCompile {
            stage: stage_name,
            log,
        })
    }
}

fn link_program(
    gl: &GL,
    vs: &web::WebGlShader,
    fs: &web::WebGlShader,
) -> Result<web::WebGlProgram, EffectError> {
    let program = gl
        .create_program()
        .ok_or(EffectError::ResourceCreation("program"))?;
    gl.attach_shader(&program, vs);
    gl.attach_shader(&program, fs);
    gl.link_program(&program);
    if gl
        .get_program_parameter(&program, GL::LINK_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        Ok(program)
    } else {
        let log = gl.get_program_info_log(&program).unwrap_or_default();
        gl.delete_program(Some(&program));
        Err(EffectError::ProgramLink { log })
    }
}

pub struct GlProgram {
    gl: GL,
    program: web::WebGlProgram,
    quad: web::WebGlBuffer,
    texture: Option<web::WebGlTexture>,
    uniforms: UniformTable,
}

impl GlProgram {
    pub fn from_canvas(
        canvas: &web::HtmlCanvasElement,
        vs_source: &str,
        fs_source: &str,
    ) -> Result<Self, EffectError> {
        let ctx = match canvas.get_context("webgl")? {
            Some(ctx) => Some(ctx),
            None => canvas.get_context("experimental-webgl")?,
        };
        let gl = ctx
            .ok_or(EffectError::ContextUnavailable("webgl"))?
            .dyn_into::<GL>()
            .map_err(|_| EffectError::ContextUnavailable("webgl"))?;
        Self::new(gl, vs_source, fs_source)
    }

    /// Compile, link, bind the quad to `a_position` and collect uniforms.
    pub fn new(gl: GL, vs_source: &str, fs_source: &str) -> Result<Self, EffectError> {
        let vs = compile_shader(&gl, GL::VERTEX_SHADER, vs_source)?;
        let fs = match compile_shader(&gl, GL::FRAGMENT_SHADER, fs_source) {
            Ok(fs) => fs,
            Err(e) => {
                gl.delete_shader(Some(&vs));
                return Err(e);
            }
        };
        // Attached stages live until the program is deleted.
        let linked = link_program(&gl, &vs, &fs);
        gl.delete_shader(Some(&vs));
        gl.delete_shader(Some(&fs));
        let program = linked?;
        let uniforms = UniformTable::from_program(&gl, &program);

        let quad = gl
            .create_buffer()
            .ok_or(EffectError::ResourceCreation("vertex buffer"))?;
        gl.bind_buffer(GL::ARRAY_BUFFER, Some(&quad));
        gl.buffer_data_with_u8_array(
            GL::ARRAY_BUFFER,
            bytemuck::cast_slice(&QUAD_VERTICES),
            GL::STATIC_DRAW,
        );

        gl.use_program(Some(&program));
        let position = gl.get_attrib_location(&program, A_POSITION);
        if position < 0 {
            log::warn!("[gl] program has no active {A_POSITION} attribute");
        } else {
            let position = position as u32;
            gl.enable_vertex_attrib_array(position);
            gl.vertex_attrib_pointer_with_i32(position, 2, GL::FLOAT, false, 0, 0);
        }
        if uniforms.is_empty() {
            log::warn!("[gl] program has no active uniforms");
        } else {
            log::info!("[gl] program linked with {} active uniforms", uniforms.len());
        }

        Ok(Self {
            gl,
            program,
            quad,
            texture: None,
            uniforms,
        })
    }

    pub fn set_f32(&self, name: &str, v: f32) {
        if let Some(loc) = self.uniforms.get(name) {
            self.gl.uniform1f(Some(loc), v);
        }
    }

    pub fn set_i32(&self, name: &str, v: i32) {
        if let Some(loc) = self.uniforms.get(name) {
            self.gl.uniform1i(Some(loc), v);
        }
    }

    pub fn set_vec2(&self, name: &str, v: Vec2) {
        if let Some(loc) = self.uniforms.get(name) {
            self.gl.uniform2f(Some(loc), v.x, v.y);
        }
    }

    pub fn set_vec3(&self, name: &str, v: [f32; 3]) {
        if let Some(loc) = self.uniforms.get(name) {
            self.gl.uniform3f(Some(loc), v[0], v[1], v[2]);
        }
    }

    pub fn set_viewport(&self, width: u32, height: u32) {
        self.gl.viewport(0, 0, width as i32, height as i32);
    }

    /// Create the linear, edge-clamped texture on unit 0 that
    /// [`GlProgram::upload_canvas`] refreshes every frame.
    pub fn enable_canvas_texture(&mut self) -> Result<(), EffectError> {
        let gl = &self.gl;
        let texture = gl
            .create_texture()
            .ok_or(EffectError::ResourceCreation("texture"))?;
        gl.active_texture(GL::TEXTURE0);
        gl.bind_texture(GL::TEXTURE_2D, Some(&texture));
        gl.tex_parameteri(GL::TEXTURE_2D, GL::TEXTURE_MIN_FILTER, GL::LINEAR as i32);
        gl.tex_parameteri(GL::TEXTURE_2D, GL::TEXTURE_MAG_FILTER, GL::LINEAR as i32);
        gl.tex_parameteri(GL::TEXTURE_2D, GL::TEXTURE_WRAP_S, GL::CLAMP_TO_EDGE as i32);
        gl.tex_parameteri(GL::TEXTURE_2D, GL::TEXTURE_WRAP_T, GL::CLAMP_TO_EDGE as i32);
        self.texture = Some(texture);
        Ok(())
    }

    /// Replace the whole texture with the current contents of `source`.
    pub fn upload_canvas(&self, source: &web::HtmlCanvasElement) -> Result<(), EffectError> {
        if self.texture.is_none() {
            return Ok(());
        }
        self.gl
            .tex_image_2d_with_u32_and_u32_and_canvas(
                GL::TEXTURE_2D,
                0,
                GL::RGBA as i32,
                GL::RGBA,
                GL::UNSIGNED_BYTE,
                source,
            )
            .map_err(EffectError::from)
    }

    pub fn draw(&self) {
        self.gl.clear_color(0.0, 0.0, 0.0, 1.0);
        self.gl.clear(GL::COLOR_BUFFER_BIT);
        self.gl.draw_arrays(GL::TRIANGLE_STRIP, 0, QUAD_VERTEX_COUNT);
    }
}

impl Drop for GlProgram {
    fn drop(&mut self) {
        self.gl.use_program(None);
        if let Some(texture) = self.texture.take() {
            self.gl.delete_texture(Some(&texture));
        }
        self.gl.delete_buffer(Some(&self.quad));
        self.gl.delete_program(Some(&self.program));
    }
}
