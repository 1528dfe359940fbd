use crate::constants::*;
use crate::core::artifacts::parse_hex_color;
use crate::core::orbit::artifact_center;
use crate::core::{ArtifactKey, ARTIFACT_ORDER};
use glam::{Mat4, Quat, Vec3};
use rand::prelude::*;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct Vertex {
    pub(crate) position: [f32; 3],
    pub(crate) normal: [f32; 3],
}

/// Per-instance model matrix (four columns) and RGBA tint.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct InstanceRaw {
    pub(crate) model: [[f32; 4]; 4],
    pub(crate) color: [f32; 4],
}

impl InstanceRaw {
    pub(crate) fn new(model: Mat4, rgb: [f32; 3], alpha: f32) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            color: [rgb[0], rgb[1], rgb[2], alpha],
        }
    }

    pub(crate) const ATTRIBS: [wgpu::VertexAttribute; 5] = wgpu::vertex_attr_array![
        2 => Float32x4,
        3 => Float32x4,
        4 => Float32x4,
        5 => Float32x4,
        6 => Float32x4,
    ];
}

impl Vertex {
    pub(crate) const ATTRIBS: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];
}

/// Unit cube centred on the origin, four vertices per face so normals stay flat.
pub(crate) fn unit_cube() -> (Vec<Vertex>, Vec<u16>) {
    let faces: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
        ([1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, -1.0]),
        ([-1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]),
        ([0.0, 1.0, 0.0], [0.0, 0.0, -1.0], [1.0, 0.0, 0.0]),
        ([0.0, -1.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0, 0.0]),
        ([0.0, 0.0, 1.0], [0.0, 1.0, 0.0], [1.0, 0.0, 0.0]),
        ([0.0, 0.0, -1.0], [0.0, 1.0, 0.0], [-1.0, 0.0, 0.0]),
    ];
    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);
    for (n, up, right) in faces {
        let n = Vec3::from(n);
        let up = Vec3::from(up);
        let right = Vec3::from(right);
        let base = vertices.len() as u16;
        for (su, sr) in [(-1.0, -1.0), (-1.0, 1.0), (1.0, 1.0), (1.0, -1.0)] {
            let p = (n + up * su + right * sr) * 0.5;
            vertices.push(Vertex {
                position: p.to_array(),
                normal: n.to_array(),
            });
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    (vertices, indices)
}

/// Static hall layout: a floor slab and two colonnades receding from the
/// hall vantage toward the ring. Colours jitter around warm stone from a
/// fixed seed so every visit sees the same hall.
pub(crate) fn hall_pieces() -> Vec<(Mat4, [f32; 3])> {
    let mut rng = StdRng::seed_from_u64(HALL_SEED);
    let mut tone = || {
        let j = rng.gen_range(-HALL_TONE_JITTER..=HALL_TONE_JITTER);
        HALL_STONE_RGB.map(|c| (c + j).clamp(0.0, 1.0))
    };
    let depth = HALL_PILLAR_ROWS as f32 * HALL_PILLAR_SPACING;
    let mut out = Vec::with_capacity(HALL_PILLAR_ROWS * 2 + 1);
    out.push((
        Mat4::from_scale_rotation_translation(
            Vec3::new(HALL_HALF_WIDTH * 2.0 + 4.0, 0.2, depth + 10.0),
            Quat::IDENTITY,
            Vec3::new(0.0, HALL_FLOOR_Y - 0.1, depth * 0.5 - 10.0),
        ),
        tone(),
    ));
    for row in 0..HALL_PILLAR_ROWS {
        let z = 35.0 - row as f32 * HALL_PILLAR_SPACING;
        for side in [-1.0_f32, 1.0] {
            out.push((
                Mat4::from_scale_rotation_translation(
                    Vec3::new(1.2, 10.0, 1.2),
                    Quat::IDENTITY,
                    Vec3::new(side * HALL_HALF_WIDTH, HALL_FLOOR_Y + 5.0, z),
                ),
                tone(),
            ));
        }
    }
    out
}

pub(crate) fn hall_instances(pieces: &[(Mat4, [f32; 3])], opacity: f32, out: &mut Vec<InstanceRaw>) {
    if opacity <= 0.0 {
        return;
    }
    out.extend(pieces.iter().map(|(m, c)| InstanceRaw::new(*m, *c, opacity)));
}

/// One tinted proxy per artifact, at its floating ring position.
pub(crate) fn artifact_instances(
    radius: f32,
    ring_rotation: f32,
    elapsed_sec: f32,
    hovered: Option<ArtifactKey>,
    out: &mut Vec<InstanceRaw>,
) {
    for key in ARTIFACT_ORDER {
        let artifact = key.artifact();
        let center = artifact_center(key, radius, ring_rotation, elapsed_sec, FLOAT_AMPLITUDE);
        let size = ARTIFACT_BASE_SIZE * artifact.scale;
        let spin = Quat::from_rotation_y(elapsed_sec * 0.3 + ring_rotation);
        let model = Mat4::from_scale_rotation_translation(Vec3::splat(size), spin, center);
        let mut rgb = parse_hex_color(artifact.color_hex);
        if hovered == Some(key) {
            rgb = rgb.map(|c| (c * HOVER_BRIGHTEN).min(1.0));
        }
        out.push(InstanceRaw::new(model, rgb, 1.0));
    }
}
