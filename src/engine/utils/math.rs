// Column-major 4x4 matrices, laid out the way `glUniformMatrix4fv` expects
// with `transpose = false`. Element (row, col) lives at `col * 4 + row`.
pub type Mat4x4 = [f32; 16];

pub fn mat4x4_identity() -> Mat4x4 {
    [
      1.0, 0.0, 0.0, 0.0,
      0.0, 1.0, 0.0, 0.0,
      0.0, 0.0, 1.0, 0.0,
      0.0, 0.0, 0.0, 1.0
    ]
}

pub fn mat4x4_translate(x: f32, y: f32, z: f32) -> Mat4x4 {
    [
      1.0, 0.0, 0.0, 0.0,
      0.0, 1.0, 0.0, 0.0,
      0.0, 0.0, 1.0, 0.0,
       x,   y,   z,  1.0
    ]
}

pub fn mat4x4_scale(x: f32, y: f32, z: f32) -> Mat4x4 {
    [
       x,  0.0, 0.0, 0.0,
      0.0,  y,  0.0, 0.0,
      0.0, 0.0,  z,  0.0,
      0.0, 0.0, 0.0, 1.0
    ]
}

pub fn vec3_normalize(v: [f32; 3]) -> Option<[f32; 3]> {
    let len = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
    if len <= f32::EPSILON || !len.is_finite() {
        return None;
    }
    Some([v[0] / len, v[1] / len, v[2] / len])
}

/// Rotation of `angle` radians about `axis`. The axis is normalized here;
/// a degenerate axis yields the identity.
pub fn mat4x4_rotate(angle: f32, axis: [f32; 3]) -> Mat4x4 {
    let Some([x, y, z]) = vec3_normalize(axis) else {
        return mat4x4_identity();
    };
    let c = angle.cos();
    let s = angle.sin();
    let t = 1.0 - c;

    [
      c + t * x * x,      t * x * y + s * z,  t * x * z - s * y,  0.0,
      t * x * y - s * z,  c + t * y * y,      t * y * z + s * x,  0.0,
      t * x * z + s * y,  t * y * z - s * x,  c + t * z * z,      0.0,
      0.0,                0.0,                0.0,                1.0
    ]
}

pub fn mat4x4_mul(a: Mat4x4, b: Mat4x4) -> Mat4x4 {
    let mut ret = [0.0; 16];
    for col in 0..4 {
        for row in 0..4 {
            let mut sum = 0.0;
            for k in 0..4 {
                sum += a[k * 4 + row] * b[col * 4 + k];
            }
            ret[col * 4 + row] = sum;
        }
    }
    ret
}

/// Right-handed perspective frustum mapping depth to [-1, 1].
pub fn mat4x4_perspective(fov_y_radians: f32, aspect_ratio: f32, near: f32, far: f32) -> Mat4x4 {
    let f = 1.0 / (fov_y_radians * 0.5).tan();
    let range_inv = 1.0 / (near - far);

    [
      f / aspect_ratio, 0.0, 0.0,                            0.0,
      0.0,              f,   0.0,                            0.0,
      0.0,              0.0, (near + far) * range_inv,      -1.0,
      0.0,              0.0, 2.0 * near * far * range_inv,   0.0
    ]
}

/// Applies `m` to the point `p` (w = 1) and returns the homogeneous result.
pub fn mat4x4_transform_point(m: &Mat4x4, p: [f32; 3]) -> [f32; 4] {
    let mut out = [0.0; 4];
    for (row, value) in out.iter_mut().enumerate() {
        *value = m[row] * p[0] + m[4 + row] * p[1] + m[8 + row] * p[2] + m[12 + row];
    }
    out
}
