// Host-side tests for the offscreen compositor, using the CPU pixel buffer.

use ghost_core::*;
use glam::Vec2;

#[derive(Debug, PartialEq)]
enum Op {
    Clear,
    Fill(Vec2),
}

#[derive(Default)]
struct Recorder {
    size: (u32, u32),
    ops: Vec<Op>,
}

impl TextureSurface for Recorder {
    type Error = ();

    fn size(&self) -> (u32, u32) {
        self.size
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<(), ()> {
        self.size = (width, height);
        Ok(())
    }

    fn clear(&mut self) -> Result<(), ()> {
        self.ops.push(Op::Clear);
        Ok(())
    }

    fn fill_radial(&mut self, dot: &DotGradient) -> Result<(), ()> {
        self.ops.push(Op::Fill(dot.center));
        Ok(())
    }
}

fn dot(center: Vec2, inner: f32, outer: f32, opacity: f32) -> DotGradient {
    DotGradient {
        center,
        inner_radius: inner,
        outer_radius: outer,
        opacity,
    }
}

#[test]
fn new_buffer_starts_transparent() {
    let buf = PixelBuffer::new(5, 2);
    assert_eq!(buf.size(), (5, 2));
    assert_eq!(buf.pixels().len(), 5 * 2 * 4);
    assert!(buf.pixels().iter().all(|&b| b == 0));
    assert_eq!(buf.pixel(4, 1), Some([0, 0, 0, 0]));

    let empty = PixelBuffer::new(0, 0);
    assert!(empty.pixels().is_empty());
    assert_eq!(empty.pixel(0, 0), None);
}

#[test]
fn clear_is_opaque_black() {
    let mut buf = PixelBuffer::new(4, 3);
    assert_eq!(buf.pixels().len(), 4 * 3 * 4);
    buf.clear().unwrap();
    assert!(buf.pixels().chunks_exact(4).all(|px| px == [0, 0, 0, 255]));
    assert_eq!(buf.pixel(4, 0), None);
}

#[test]
fn dot_center_takes_its_opacity() {
    let mut buf = PixelBuffer::new(21, 21);
    buf.clear().unwrap();
    buf.fill_radial(&dot(Vec2::splat(10.5), 3.0, 6.0, 0.34)).unwrap();
    // 255 * 0.34 over opaque black
    assert_eq!(buf.pixel(10, 10), Some([87, 87, 87, 255]));
}

#[test]
fn gradient_ramps_to_zero_at_outer_radius() {
    let d = dot(Vec2::splat(10.5), 2.0, 6.0, 0.5);
    assert_eq!(gradient_alpha(&d, 1.0), 0.5);
    assert!((gradient_alpha(&d, 4.0) - 0.25).abs() < 1e-6);
    assert_eq!(gradient_alpha(&d, 6.5), 0.0);

    let mut buf = PixelBuffer::new(21, 21);
    buf.clear().unwrap();
    buf.fill_radial(&d).unwrap();
    assert_eq!(buf.pixel(14, 10), Some([64, 64, 64, 255]));
    assert_eq!(buf.pixel(17, 10), Some([0, 0, 0, 255]));
    assert_eq!(buf.pixel(0, 0), Some([0, 0, 0, 255]));
}

#[test]
fn overlapping_dots_accumulate() {
    let mut buf = PixelBuffer::new(21, 21);
    buf.clear().unwrap();
    let d = dot(Vec2::splat(10.5), 4.0, 8.0, 0.5);
    buf.fill_radial(&d).unwrap();
    let once = buf.pixel(10, 10).unwrap()[0];
    buf.fill_radial(&d).unwrap();
    let twice = buf.pixel(10, 10).unwrap()[0];
    assert!(twice > once);
    assert!(twice < 255);
}

#[test]
fn dots_off_the_surface_are_clipped() {
    let mut buf = PixelBuffer::new(8, 8);
    buf.clear().unwrap();
    buf.fill_radial(&dot(Vec2::new(-50.0, -50.0), 1.0, 10.0, 1.0)).unwrap();
    buf.fill_radial(&dot(Vec2::new(100.0, 4.0), 1.0, 10.0, 1.0)).unwrap();
    buf.fill_radial(&dot(Vec2::new(4.0, 4.0), 0.0, 0.0, 1.0)).unwrap();
    assert!(buf.pixels().chunks_exact(4).all(|px| px == [0, 0, 0, 255]));
}

#[test]
fn composite_clears_then_draws_in_chain_order() {
    let vp = Viewport::new(400.0, 300.0, 1.0).unwrap();
    let mut sim = GhostSim::new(EffectParams::default(), vp).unwrap();
    sim.on_input(Vec2::new(200.0, 150.0), 0.0);
    for frame in 0..5 {
        sim.advance(frame as f64 * 16.0);
    }

    let mut rec = Recorder::default();
    rec.resize(400, 300).unwrap();
    composite(&mut rec, sim.trail()).unwrap();
    composite(&mut rec, sim.trail()).unwrap();

    let n = sim.trail().len();
    assert_eq!(rec.ops.len(), 2 * (n + 1));
    for pass in rec.ops.chunks(n + 1) {
        assert_eq!(pass[0], Op::Clear);
        for (op, p) in pass[1..].iter().zip(sim.trail().points()) {
            assert_eq!(*op, Op::Fill(p.pos));
        }
    }
}

#[test]
fn composited_trail_lights_the_head() {
    let vp = Viewport::new(200.0, 100.0, 2.0).unwrap();
    let sim = GhostSim::new(EffectParams::default(), vp).unwrap();
    let (w, h) = vp.texture_size();
    let mut buf = PixelBuffer::new(w, h);
    composite(&mut buf, sim.trail()).unwrap();

    let head = sim.trail().points()[0].pos;
    let px = buf.pixel(head.x as u32, head.y as u32).unwrap();
    assert!(px[0] > 0);
    assert_eq!(px[3], 255);
    // far corner stays black
    assert_eq!(buf.pixel(w - 1, h - 1), Some([0, 0, 0, 255]));
}
