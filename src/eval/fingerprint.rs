use crate::{
    eval::evaluator::FrameState,
    foundation::{color::Color, math::Fnv1a64},
    scene::model::{Paint, Shape},
};

/// 128-bit digest of a resolved frame: two FNV-1a streams with different seeds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct FrameFingerprint {
    /// First stream.
    pub hi: u64,
    /// Second stream.
    pub lo: u64,
}

impl std::fmt::Display for FrameFingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:016x}{:016x}", self.hi, self.lo)
    }
}

/// Digest every field of `state` that a renderer would read. Floats hash by bit pattern,
/// with `-0.0` folded into `0.0`.
pub fn fingerprint_frame(state: &FrameState) -> FrameFingerprint {
    let mut h = Pair::new();

    h.u64(state.frame.0);
    h.str(&state.scene_id);
    h.str(state.scene_kind);
    h.u64(state.local_frame.0);

    h.u64(state.sprites.len() as u64);
    for s in &state.sprites {
        h.str(s.layer);
        h.u64(s.index as u64);
        write_shape(&mut h, &s.shape);
        h.f64(s.center.x);
        h.f64(s.center.y);
        h.f64(s.size.width);
        h.f64(s.size.height);
        h.f64(s.opacity);
        h.f64(s.scale.x);
        h.f64(s.scale.y);
        h.f64(s.rotation_deg);
        write_color(&mut h, s.color);
        match s.paint {
            Paint::Fill => h.u8(0),
            Paint::Stroke { width } => {
                h.u8(1);
                h.f64(width);
            }
        }
        h.f64(s.glow);
    }

    h.u64(state.links.len() as u64);
    for l in &state.links {
        h.u64(l.a as u64);
        h.u64(l.b as u64);
        h.f64(l.from.x);
        h.f64(l.from.y);
        h.f64(l.to.x);
        h.f64(l.to.y);
        h.f64(l.strength);
        h.f64(l.opacity);
    }
    match state.link_color {
        Some(c) => {
            h.u8(1);
            write_color(&mut h, c);
        }
        None => h.u8(0),
    }

    h.finish()
}

fn write_shape(h: &mut Pair, shape: &Shape) {
    h.str(shape.name());
    match shape {
        Shape::RoundedRect(r) => h.f64(*r),
        Shape::Glyph(c) => h.u64(u64::from(u32::from(*c))),
        Shape::Label(text) => h.str(text),
        _ => {}
    }
}

fn write_color(h: &mut Pair, c: Color) {
    for v in [c.r, c.g, c.b, c.a] {
        h.f64(v);
    }
}

struct Pair {
    a: Fnv1a64,
    b: Fnv1a64,
}

impl Pair {
    fn new() -> Self {
        Self {
            a: Fnv1a64::new_default(),
            b: Fnv1a64::new(0x9ae1_6a3b_2f90_404f),
        }
    }

    fn u8(&mut self, v: u8) {
        self.a.write_u8(v);
        self.b.write_u8(v);
    }

    fn u64(&mut self, v: u64) {
        self.a.write_u64(v);
        self.b.write_u64(v);
    }

    fn f64(&mut self, v: f64) {
        self.a.write_f64(v);
        self.b.write_f64(v);
    }

    fn str(&mut self, s: &str) {
        self.a.write_str(s);
        self.b.write_str(s);
    }

    fn finish(self) -> FrameFingerprint {
        FrameFingerprint {
            hi: self.a.finish(),
            lo: self.b.finish(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/fingerprint.rs"]
mod tests;
