//! WGSL sources for the instanced circle and line pipelines.
//!
//! Both shaders take positions in surface pixels (origin top-left, y down)
//! and map them to clip space through `uniforms.viewport`. Edges get one
//! pixel of coverage falloff.

/// Shared uniform block and pixel-to-clip helper.
const COMMON_WGSL: &str = r#"
struct Uniforms {
    viewport: vec2<f32>,
    _padding: vec2<f32>,
};

@group(0) @binding(0)
var<uniform> uniforms: Uniforms;

fn to_clip(p: vec2<f32>) -> vec4<f32> {
    let size = max(uniforms.viewport, vec2<f32>(1.0, 1.0));
    return vec4<f32>(
        p.x / size.x * 2.0 - 1.0,
        1.0 - p.y / size.y * 2.0,
        0.0,
        1.0,
    );
}
"#;

const CIRCLE_BODY_WGSL: &str = r#"
struct CircleOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) color: vec4<f32>,
    @location(1) offset: vec2<f32>,
    @location(2) radius: f32,
};

@vertex
fn vs_circle(
    @builtin(vertex_index) vertex_index: u32,
    @location(0) center: vec2<f32>,
    @location(1) radius: f32,
    @location(2) color: vec4<f32>,
) -> CircleOutput {
    var quad_vertices = array<vec2<f32>, 6>(
        vec2<f32>(-1.0, -1.0),
        vec2<f32>( 1.0, -1.0),
        vec2<f32>(-1.0,  1.0),
        vec2<f32>(-1.0,  1.0),
        vec2<f32>( 1.0, -1.0),
        vec2<f32>( 1.0,  1.0),
    );

    // One extra pixel so the coverage ramp is not cut off
    let extent = radius + 1.0;
    let offset = quad_vertices[vertex_index] * extent;

    var out: CircleOutput;
    out.clip_position = to_clip(center + offset);
    out.color = color;
    out.offset = offset;
    out.radius = radius;
    return out;
}

@fragment
fn fs_circle(frag: CircleOutput) -> @location(0) vec4<f32> {
    let coverage = clamp(frag.radius + 0.5 - length(frag.offset), 0.0, 1.0);
    if coverage <= 0.0 {
        discard;
    }
    return vec4<f32>(frag.color.rgb, frag.color.a * coverage);
}
"#;

const LINE_BODY_WGSL: &str = r#"
struct LineOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) color: vec4<f32>,
    @location(1) across: f32,
    @location(2) half_width: f32,
};

@vertex
fn vs_line(
    @builtin(vertex_index) vertex_index: u32,
    @location(0) p0: vec2<f32>,
    @location(1) p1: vec2<f32>,
    @location(2) color: vec4<f32>,
    @location(3) width: f32,
) -> LineOutput {
    // x: 0 at p0, 1 at p1; y: side of the centerline
    var quad_vertices = array<vec2<f32>, 6>(
        vec2<f32>(0.0, -1.0),
        vec2<f32>(1.0, -1.0),
        vec2<f32>(0.0,  1.0),
        vec2<f32>(0.0,  1.0),
        vec2<f32>(1.0, -1.0),
        vec2<f32>(1.0,  1.0),
    );
    let corner = quad_vertices[vertex_index];

    let delta = p1 - p0;
    let len = length(delta);
    let dir = select(vec2<f32>(1.0, 0.0), delta / max(len, 0.0001), len > 0.0);
    let normal = vec2<f32>(-dir.y, dir.x);

    // Hairlines still cover one pixel
    let half_width = max(width, 1.0) * 0.5;
    let across = corner.y * (half_width + 1.0);

    var out: LineOutput;
    out.clip_position = to_clip(p0 + dir * (corner.x * len) + normal * across);
    out.color = color;
    out.across = across;
    out.half_width = half_width;
    return out;
}

@fragment
fn fs_line(frag: LineOutput) -> @location(0) vec4<f32> {
    let coverage = clamp(frag.half_width + 0.5 - abs(frag.across), 0.0, 1.0);
    if coverage <= 0.0 {
        discard;
    }
    return vec4<f32>(frag.color.rgb, frag.color.a * coverage);
}
"#;

/// Full circle shader source.
pub fn circle_shader() -> String {
    format!("{COMMON_WGSL}\n{CIRCLE_BODY_WGSL}")
}

/// Full line shader source.
pub fn line_shader() -> String {
    format!("{COMMON_WGSL}\n{LINE_BODY_WGSL}")
}
